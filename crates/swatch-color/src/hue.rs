// SPDX-License-Identifier: MIT
//
// Hue wheel arithmetic.
//
// Every hue in swatch is an integer degree. Offsets are applied modulo 360
// and the distance between two hues is the shorter arc, so it never
// exceeds 180.

/// Normalize a (possibly negative or >= 360) hue angle to [0, 360).
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn normalize_hue(h: i32) -> u16 {
    // rem_euclid(360) is always in 0..360, so the cast is lossless.
    h.rem_euclid(360) as u16
}

/// Circular distance between two hues: `min(|a - b|, 360 - |a - b|)`.
///
/// Inputs are normalized first, so `hue_distance(350, 10) == 20` and
/// `hue_distance(0, 720) == 0`.
#[inline]
#[must_use]
pub const fn hue_distance(a: u16, b: u16) -> u16 {
    let a = normalize_hue(a as i32);
    let b = normalize_hue(b as i32);
    let d = a.abs_diff(b);
    if d > 180 { 360 - d } else { d }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
