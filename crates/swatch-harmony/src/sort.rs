//! Collection ordering by HSL channel.
//!
//! Each sort clones the collection and returns it reordered; the input is
//! never touched. HSL is recomputed inside the comparator rather than
//! precomputed, which is fine for collections of tens to hundreds of
//! colors. Sorts are stable. Colors whose hex does not parse sort after
//! every valid color, keeping their relative order.

use std::cmp::{Ordering, Reverse};

use swatch_color::Hsl;

use crate::swatch::Swatch;

/// Ascending hue (red → yellow → green → cyan → blue → magenta).
#[must_use]
pub fn sort_by_hue<T: Swatch + Clone>(colors: &[T]) -> Vec<T> {
    sorted_by(colors, |hsl| hsl.h)
}

/// Same as [`sort_by_hue`]: walk the color wheel once.
#[must_use]
pub fn sort_chromatically<T: Swatch + Clone>(colors: &[T]) -> Vec<T> {
    sort_by_hue(colors)
}

/// Descending saturation (most vivid first).
#[must_use]
pub fn sort_by_saturation<T: Swatch + Clone>(colors: &[T]) -> Vec<T> {
    sorted_by(colors, |hsl| Reverse(hsl.s))
}

/// Ascending lightness (darkest first).
#[must_use]
pub fn sort_by_lightness<T: Swatch + Clone>(colors: &[T]) -> Vec<T> {
    sorted_by(colors, |hsl| hsl.l)
}

fn sorted_by<T, K, F>(colors: &[T], key: F) -> Vec<T>
where
    T: Swatch + Clone,
    K: Ord,
    F: Fn(Hsl) -> K,
{
    let mut out = colors.to_vec();
    out.sort_by(|a, b| match (a.hsl(), b.hsl()) {
        (Ok(a), Ok(b)) => key(a).cmp(&key(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => Ordering::Equal,
    });
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
