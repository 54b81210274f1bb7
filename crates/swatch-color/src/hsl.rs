// SPDX-License-Identifier: MIT
//
// HSL — hue, saturation, lightness.
//
// Hue is an integer degree in [0, 360). Saturation and lightness are
// integer percentages in [0, 100]. Converting from RGB rounds all three,
// so an RGB → HSL → RGB roundtrip may drift by a few units per channel.
//
// RGB → HSL uses the six-sector hue formula:
//
//   red is max:   ((g - b) / delta) mod 6
//   green is max: ((b - r) / delta) + 2
//   blue is max:  ((r - g) / delta) + 4
//
// then scales by 60°. HSL → RGB uses the chroma / intermediate / match
// decomposition over the same six 60° sectors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::hue::normalize_hue;
use crate::rgb::{Rgb, to_u8};

/// An integer HSL triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue angle in degrees, 0–359.
    pub h: u16,
    /// Saturation percent, 0–100.
    pub s: u8,
    /// Lightness percent, 0–100.
    pub l: u8,
}

impl Hsl {
    /// Create an HSL value, wrapping the hue and clamping `s` and `l` to 100.
    #[must_use]
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self {
            h: normalize_hue(h as i32),
            s: if s > 100 { 100 } else { s },
            l: if l > 100 { 100 } else { l },
        }
    }

    /// Derive HSL from 8-bit sRGB.
    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let (r, g, b) = rgb.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        // Achromatic: gray, black or white.
        if delta == 0.0 {
            return Self { h: 0, s: 0, l: to_percent(l) };
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        #[allow(clippy::float_cmp)]
        let sector = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Self {
            h: to_degrees(sector * 60.0),
            s: to_percent(s),
            l: to_percent(l),
        }
    }

    /// Convert back to 8-bit sRGB.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let h = f64::from(self.h % 360);
        let s = f64::from(self.s.min(100)) / 100.0;
        let l = f64::from(self.l.min(100)) / 100.0;

        let c = (1.0 - 2.0f64.mul_add(l, -1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match self.h % 360 {
            0..60 => (c, x, 0.0),
            60..120 => (x, c, 0.0),
            120..180 => (0.0, c, x),
            180..240 => (0.0, x, c),
            240..300 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgb::new(to_u8((r + m) * 255.0), to_u8((g + m) * 255.0), to_u8((b + m) * 255.0))
    }

    /// Format as `#RRGGBB` (upper case).
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }

    /// Rotate the hue by `degrees` (may be negative), keeping `s` and `l`.
    #[must_use]
    pub const fn rotate(self, degrees: i32) -> Self {
        Self { h: normalize_hue(self.h as i32 + degrees), ..self }
    }

    /// The hue on the opposite side of the color wheel.
    #[must_use]
    pub const fn complement(self) -> Self {
        self.rotate(180)
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

// ─── Free functions ──────────────────────────────────────────────────────────

/// Parse a hex color and derive its integer HSL.
///
/// # Errors
///
/// Returns a [`ColorError`] if `hex` is not a valid six-digit hex color.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    Ok(Hsl::from_rgb(Rgb::from_hex(hex)?))
}

/// Render HSL as `#RRGGBB`.
///
/// The hue wraps modulo 360 (negative values included); saturation and
/// lightness are clamped to 0–100.
#[must_use]
pub fn hsl_to_hex(h: i32, s: u8, l: u8) -> String {
    Hsl::new(normalize_hue(h), s, l).to_hex()
}

/// The hex color whose hue is 180° away, with saturation and lightness kept.
///
/// # Errors
///
/// Returns a [`ColorError`] if `hex` is not a valid six-digit hex color.
pub fn complementary_color(hex: &str) -> Result<String, ColorError> {
    Ok(hex_to_hsl(hex)?.complement().to_hex())
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Round degrees to an integer hue; 359.5 and above wraps to 0.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn to_degrees(v: f64) -> u16 {
    // Safe: v is in [0, 360] so the rounded value fits in i32.
    normalize_hue(v.round() as i32)
}

/// Round a 0.0–1.0 fraction to a 0–100 percentage.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_percent(v: f64) -> u8 {
    (v * 100.0).round().clamp(0.0, 100.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
