//! Harmony rules — hue windows and result counts per relationship.
//!
//! [`HarmonyRules::default`] is the stock policy used by the free search
//! functions. Callers who want looser or tighter matching can build their
//! own, or load one from JSON where any omitted key keeps its default,
//! down to a single `window` or `count` inside a rule:
//!
//! ```json
//! {
//!   "analogous": { "window": 45, "count": 8 },
//!   "monochromatic": { "window": 20 },
//!   "complementary-fallback-window": 20
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::error::Error;
use crate::harmony::{self, HarmonyKind, Ranked};
use crate::suggest::{self, Suggestion};
use crate::swatch::Swatch;

/// Window and default count for one relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Maximum hue distance (degrees, inclusive) to the nearest target.
    pub window: u16,
    /// Number of matches returned when the caller does not ask for a count.
    pub count: usize,
}

impl Rule {
    #[must_use]
    pub const fn new(window: u16, count: usize) -> Self {
        Self { window, count }
    }
}

/// The full set of rules, one per [`HarmonyKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "RulesFile")]
pub struct HarmonyRules {
    pub analogous: Rule,
    pub complementary: Rule,
    /// Window around the base hue for the complementary fallback tier.
    pub complementary_fallback_window: u16,
    pub triadic: Rule,
    pub monochromatic: Rule,
    pub split_complementary: Rule,
}

impl Default for HarmonyRules {
    fn default() -> Self {
        Self {
            analogous: Rule::new(60, HarmonyKind::Analogous.default_count()),
            complementary: Rule::new(45, HarmonyKind::Complementary.default_count()),
            complementary_fallback_window: 30,
            triadic: Rule::new(45, HarmonyKind::Triadic.default_count()),
            monochromatic: Rule::new(15, HarmonyKind::Monochromatic.default_count()),
            split_complementary: Rule::new(30, HarmonyKind::SplitComplementary.default_count()),
        }
    }
}

// ---------------------------------------------------------------------------
// On-disk form
// ---------------------------------------------------------------------------

/// A rule as written in JSON; either field may be left out.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RuleOverride {
    window: Option<u16>,
    count: Option<usize>,
}

impl RuleOverride {
    fn apply(self, rule: Rule) -> Rule {
        Rule {
            window: self.window.unwrap_or(rule.window),
            count: self.count.unwrap_or(rule.count),
        }
    }
}

/// Rules as written in JSON, layered over [`HarmonyRules::default`].
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct RulesFile {
    analogous: RuleOverride,
    complementary: RuleOverride,
    complementary_fallback_window: Option<u16>,
    triadic: RuleOverride,
    monochromatic: RuleOverride,
    split_complementary: RuleOverride,
}

impl From<RulesFile> for HarmonyRules {
    fn from(file: RulesFile) -> Self {
        let stock = Self::default();
        Self {
            analogous: file.analogous.apply(stock.analogous),
            complementary: file.complementary.apply(stock.complementary),
            complementary_fallback_window: file
                .complementary_fallback_window
                .unwrap_or(stock.complementary_fallback_window),
            triadic: file.triadic.apply(stock.triadic),
            monochromatic: file.monochromatic.apply(stock.monochromatic),
            split_complementary: file.split_complementary.apply(stock.split_complementary),
        }
    }
}

impl HarmonyRules {
    /// Parse rules from JSON, filling omitted keys with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for malformed JSON or unknown keys, and
    /// [`Error::WindowTooWide`] / [`Error::FallbackTooWide`] for windows
    /// above 180°.
    pub fn from_json(json: &str) -> Result<Self> {
        let rules: Self = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Check that every window fits on the hue wheel.
    ///
    /// # Errors
    ///
    /// Returns the first window above 180°.
    pub fn validate(&self) -> Result<()> {
        for &kind in HarmonyKind::all() {
            let window = self.rule(kind).window;
            if window > 180 {
                return Err(Error::WindowTooWide { kind, window });
            }
        }
        if self.complementary_fallback_window > 180 {
            return Err(Error::FallbackTooWide(self.complementary_fallback_window));
        }
        Ok(())
    }

    /// The rule for `kind`.
    #[must_use]
    pub const fn rule(&self, kind: HarmonyKind) -> Rule {
        match kind {
            HarmonyKind::Analogous => self.analogous,
            HarmonyKind::Complementary => self.complementary,
            HarmonyKind::Triadic => self.triadic,
            HarmonyKind::Monochromatic => self.monochromatic,
            HarmonyKind::SplitComplementary => self.split_complementary,
        }
    }

    /// Search `colors` for `kind` companions of `base_hex` under these rules.
    ///
    /// `count` of `None` uses the rule's count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Color`] if `base_hex` is malformed.
    pub fn find<T: Swatch + Clone>(
        &self,
        kind: HarmonyKind,
        colors: &[T],
        base_hex: &str,
        count: Option<usize>,
    ) -> Result<Vec<Ranked<T>>> {
        let count = count.unwrap_or(self.rule(kind).count);
        harmony::search(kind, self, colors, base_hex, count)
    }

    /// Palette suggestions for `colors` under these rules.
    #[must_use]
    pub fn suggestions<T: Swatch + Clone>(&self, colors: &[T]) -> Vec<Suggestion<T>> {
        suggest::suggest(self, colors)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
