//! Errors raised by harmony searches and rules loading.

use swatch_color::ColorError;
use thiserror::Error;

use crate::harmony::HarmonyKind;

/// Failure of a harmony search or of building [`HarmonyRules`](crate::HarmonyRules).
#[derive(Debug, Error)]
pub enum Error {
    /// The base color's hex did not parse.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// The JSON document did not deserialize.
    #[error("invalid harmony rules: {0}")]
    Json(#[from] serde_json::Error),

    /// A hue window wider than a half turn would match every hue.
    #[error("{kind} window of {window}° exceeds 180°")]
    WindowTooWide { kind: HarmonyKind, window: u16 },

    /// Same, for the complementary fallback window.
    #[error("complementary fallback window of {0}° exceeds 180°")]
    FallbackTooWide(u16),
}
