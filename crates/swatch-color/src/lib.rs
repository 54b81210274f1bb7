// SPDX-License-Identifier: MIT
//
// swatch-color — Color model conversion for swatch.
//
// The leaf of the workspace. Everything here is a pure function over
// 8-bit sRGB and integer HSL: parse a hex string, derive its HSL triple,
// render HSL back to hex, estimate perceived brightness, rotate hues.
// Nothing is cached. HSL values are cheap to recompute and callers
// recompute them on every comparison.
//
// Pipeline:
//
//   "#RRGGBB" ↔ Rgb (u8 channels) ↔ Hsl (integer degrees / percent)

// Single-character variable names (r, g, b, h, s, l, c, x, m) are the
// standard mathematical convention in color science.
#![allow(clippy::many_single_char_names)]

pub mod error;
pub mod hsl;
pub mod hue;
pub mod rgb;

pub use error::ColorError;
pub use hsl::{Hsl, complementary_color, hex_to_hsl, hsl_to_hex};
pub use hue::{hue_distance, normalize_hue};
pub use rgb::{Rgb, color_brightness};
