// SPDX-License-Identifier: MIT
//
// 8-bit sRGB and the `#RRGGBB` hex notation.
//
// Only the six-digit form is accepted, with or without a leading `#`.
// Digits may be upper or lower case; output is always upper case.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `RRGGBB`.
    ///
    /// # Errors
    ///
    /// Returns a [`ColorError`] if the string is empty, does not have exactly
    /// six digits after the optional `#`, or contains a non-hex character.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.is_empty() {
            return Err(ColorError::Empty);
        }
        if let Some(digit) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit { input: s.to_owned(), digit });
        }
        // All ASCII from here on, so byte length == digit count.
        let bytes = digits.as_bytes();
        if bytes.len() != 6 {
            return Err(ColorError::InvalidLength { input: s.to_owned(), len: bytes.len() });
        }
        Ok(Self {
            r: parse_hex_byte(bytes[0], bytes[1]),
            g: parse_hex_byte(bytes[2], bytes[3]),
            b: parse_hex_byte(bytes[4], bytes[5]),
        })
    }

    /// Format as `#RRGGBB` (upper case).
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels normalized to 0.0–1.0.
    #[inline]
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Perceived brightness (ITU-R BT.601 luma) on the raw 0–255 channels.
    ///
    ///   Y = 0.299·R + 0.587·G + 0.114·B
    #[must_use]
    pub fn brightness(self) -> u8 {
        let y = 0.114f64.mul_add(
            f64::from(self.b),
            0.299f64.mul_add(f64::from(self.r), 0.587 * f64::from(self.g)),
        );
        to_u8(y)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Perceived brightness of a hex color, 0 (black) to 255 (white).
///
/// # Errors
///
/// Returns a [`ColorError`] if `hex` is not a valid six-digit hex color.
pub fn color_brightness(hex: &str) -> Result<u8, ColorError> {
    Ok(Rgb::from_hex(hex)?.brightness())
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Callers have already checked both bytes are ASCII hex digits.
#[inline]
const fn parse_hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        _ => c - b'A' + 10,
    }
}

#[inline]
const fn parse_hex_byte(hi: u8, lo: u8) -> u8 {
    parse_hex_digit(hi) << 4 | parse_hex_digit(lo)
}

/// Round a 0.0–255.0 value to the nearest u8.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
