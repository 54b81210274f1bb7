// SPDX-License-Identifier: MIT
//
// Hex parsing failures.

use thiserror::Error;

/// Why a hex color string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Nothing left after stripping the optional `#`.
    #[error("empty hex color")]
    Empty,

    /// The digit count (without `#`) is not 6.
    #[error("hex color {input:?} has {len} digits, expected 6")]
    InvalidLength { input: String, len: usize },

    /// A character outside `0-9a-fA-F`.
    #[error("hex color {input:?} contains non-hex character {digit:?}")]
    InvalidDigit { input: String, digit: char },
}
