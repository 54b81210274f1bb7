//! # swatch — color conversion and harmony search
//!
//! One dependency for applications that manage a collection of named
//! colors and want to:
//!
//! - convert between `#RRGGBB` and integer HSL ([`hex_to_hsl`], [`hsl_to_hex`])
//! - estimate perceived brightness ([`color_brightness`])
//! - take a complement ([`complementary_color`])
//! - sort a collection by hue, saturation or lightness
//! - find analogous, complementary, triadic, monochromatic and
//!   split-complementary companions of a base color
//! - get ready-made palette suggestions ([`generate_suggestions`])
//!
//! The collection, its storage and its presentation stay with the caller.
//! Everything here is a pure function and safe to call from any thread.
//!
//! ```
//! use swatch::{NamedColor, find_complementary, hex_to_hsl};
//!
//! assert_eq!(hex_to_hsl("#FF0000").unwrap().h, 0);
//!
//! let colors = vec![NamedColor::new("#00FFFF", "Cyan"), NamedColor::new("#FF0000", "Red")];
//! let pair = find_complementary(&colors, "#FF0000", None).unwrap();
//! assert_eq!(pair[0].color.name, "Red");
//! assert_eq!(pair[1].color.name, "Cyan");
//! ```

pub use swatch_color::{
    ColorError, Hsl, Rgb, color_brightness, complementary_color, hex_to_hsl, hsl_to_hex,
    hue_distance, normalize_hue,
};
pub use swatch_harmony::{
    Error, HarmonyKind, HarmonyRules, NamedColor, RankKey, Ranked, Rule, Suggestion, Swatch,
    find_analogous, find_complementary, find_harmony, find_monochromatic,
    find_split_complementary, find_triadic, generate_suggestions, sort_by_hue, sort_by_lightness,
    sort_by_saturation, sort_chromatically,
};

/// The underlying crates, for items not re-exported at the top level.
pub mod color {
    pub use swatch_color::*;
}

/// See [`color`].
pub mod harmony {
    pub use swatch_harmony::*;
}
