//! The `Swatch` trait — what the library needs from a caller's color record.
//!
//! Every operation in this crate is generic over `T: Swatch`, so callers
//! keep their own record types (with whatever extra fields they carry) and
//! get clones of those records back. [`NamedColor`] is a ready-made
//! implementation for callers without a type of their own.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use swatch_color::{ColorError, Hsl, hex_to_hsl};

/// A named color record.
pub trait Swatch {
    /// Six-digit hex color, with or without a leading `#`.
    fn hex(&self) -> &str;

    /// Display label.
    fn name(&self) -> &str;

    /// HSL derived from [`hex`](Self::hex). Recomputed on every call.
    ///
    /// # Errors
    ///
    /// Returns a [`ColorError`] if the record's hex is malformed.
    fn hsl(&self) -> Result<Hsl, ColorError> {
        hex_to_hsl(self.hex())
    }
}

impl<T: Swatch + ?Sized> Swatch for &T {
    fn hex(&self) -> &str {
        (**self).hex()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// A color with a hex value, a name, and arbitrary extra attributes.
///
/// Serializes as a flat JSON object: `{"hex": "#FF0000", "name": "Red",
/// "favorite": true}`. Unknown keys land in [`attributes`](Self::attributes)
/// and are written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedColor {
    pub hex: String,
    pub name: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl NamedColor {
    /// A color with no extra attributes.
    #[must_use]
    pub fn new(hex: impl Into<String>, name: impl Into<String>) -> Self {
        Self { hex: hex.into(), name: name.into(), attributes: Map::new() }
    }

    /// Attach an extra attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

impl Swatch for NamedColor {
    fn hex(&self) -> &str {
        &self.hex
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn hsl_is_derived_from_hex() {
        let red = NamedColor::new("#FF0000", "Red");
        assert_eq!(red.hsl(), Ok(Hsl::new(0, 100, 50)));
    }

    #[test]
    fn malformed_hex_surfaces_as_error() {
        assert!(NamedColor::new("#F00", "Short").hsl().is_err());
    }

    #[test]
    fn references_are_swatches() {
        let red = NamedColor::new("#FF0000", "Red");
        let by_ref: &NamedColor = &red;
        assert_eq!(Swatch::name(&by_ref), "Red");
        assert_eq!(Swatch::hex(&by_ref), "#FF0000");
    }

    #[test]
    fn extra_attributes_roundtrip_through_json() {
        let raw = json!({ "hex": "#00FF00", "name": "Lime", "favorite": true, "tags": ["neon"] });
        let color: NamedColor = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(color.name, "Lime");
        assert_eq!(color.attributes.get("favorite"), Some(&json!(true)));
        assert_eq!(serde_json::to_value(&color).unwrap(), raw);
    }

    #[test]
    fn with_attribute_builder() {
        let c = NamedColor::new("#000000", "Ink").with_attribute("id", 7);
        assert_eq!(c.attributes.get("id"), Some(&json!(7)));
    }
}
