//! # swatch-harmony — color harmony over a caller's color collection
//!
//! Given a collection of named colors and a base color, finds the members
//! that stand in a classic color-wheel relationship to the base, sorts
//! collections by HSL channel, and aggregates searches into ranked palette
//! suggestions.
//!
//! # Architecture
//!
//! ```text
//! caller's &[T: Swatch]
//!     │
//!     ▼
//! swatch.rs:   hex + name access, HSL derived on demand (never cached)
//!     │
//!     ├──► sort.rs:     hue / saturation / lightness ordering
//!     │
//!     ▼
//! harmony.rs:  windowed nearest-neighbor search per HarmonyKind
//!     │           (windows and counts from rules.rs)
//!     ▼
//! suggest.rs:  first few colors as bases → named Suggestions
//! ```
//!
//! Nothing here mutates the caller's collection. Results hold clones of
//! the caller's records, so any extra fields on `T` ride along untouched.
//!
//! # Example
//!
//! ```
//! use swatch_harmony::{NamedColor, find_analogous};
//!
//! let colors = vec![
//!     NamedColor::new("#FF0000", "Red"),
//!     NamedColor::new("#FF2A00", "Vermilion"),
//!     NamedColor::new("#00AAFF", "Azure"),
//! ];
//! let near_red = find_analogous(&colors, "#FF0000", None).unwrap();
//! assert_eq!(near_red.len(), 2);
//! assert_eq!(near_red[1].color.name, "Vermilion");
//! ```

pub mod error;
pub mod harmony;
pub mod rules;
pub mod sort;
pub mod suggest;
pub mod swatch;

pub use error::Error;
pub use harmony::{
    HarmonyKind, RankKey, Ranked, find_analogous, find_complementary, find_harmony,
    find_monochromatic, find_split_complementary, find_triadic,
};
pub use rules::{HarmonyRules, Rule};
pub use sort::{sort_by_hue, sort_by_lightness, sort_by_saturation, sort_chromatically};
pub use suggest::{Suggestion, generate_suggestions};
pub use swatch::{NamedColor, Swatch};

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
