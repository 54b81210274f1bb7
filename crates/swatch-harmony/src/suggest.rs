//! Palette suggestions — harmony searches around the collection's first colors.
//!
//! The first five colors (in collection order, no sampling) act as bases.
//! Earlier bases get more relationships:
//!
//! | Base index | Suggestions emitted                     |
//! |------------|-----------------------------------------|
//! | 0, 1       | analogous, complementary, triadic        |
//! | 2          | analogous                               |
//! | 3, 4       | none                                    |
//!
//! Suggestions with fewer than three colors are dropped. The rest keep
//! emission order.

use serde::Serialize;

use crate::harmony::{HarmonyKind, Ranked};
use crate::rules::HarmonyRules;
use crate::swatch::Swatch;

/// Collections smaller than this produce no suggestions.
const MIN_COLLECTION: usize = 3;

/// How many leading colors are tried as bases.
const MAX_BASES: usize = 5;

/// Suggestions with fewer colors than this are dropped.
const MIN_PALETTE: usize = 3;

/// A named palette built around one base color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion<T> {
    /// Display label, e.g. "Analogous harmony with Crimson".
    pub name: String,
    /// The relationship the palette follows.
    pub kind: HarmonyKind,
    /// The color the search was centered on.
    pub base: T,
    /// Palette members, best match first.
    pub colors: Vec<T>,
}

/// Suggest palettes from the default [`HarmonyRules`].
#[must_use]
pub fn generate_suggestions<T: Swatch + Clone>(colors: &[T]) -> Vec<Suggestion<T>> {
    suggest(&HarmonyRules::default(), colors)
}

pub(crate) fn suggest<T: Swatch + Clone>(rules: &HarmonyRules, colors: &[T]) -> Vec<Suggestion<T>> {
    if colors.len() < MIN_COLLECTION {
        return Vec::new();
    }

    let mut suggestions = Vec::new();
    for (index, base) in colors.iter().take(MAX_BASES).enumerate() {
        for &kind in kinds_for(index) {
            let found = match rules.find(kind, colors, base.hex(), None) {
                Ok(found) => found,
                Err(err) => {
                    tracing::debug!(base = base.name(), hex = base.hex(), %err, "skipping base with invalid hex");
                    break;
                }
            };
            if found.len() < MIN_PALETTE {
                tracing::debug!(%kind, base = base.name(), matches = found.len(), "dropping undersized suggestion");
                continue;
            }
            suggestions.push(Suggestion {
                name: format!("{} {}", phrase(kind), base.name()),
                kind,
                base: base.clone(),
                colors: found.into_iter().map(Ranked::into_color).collect(),
            });
        }
    }

    tracing::debug!(bases = colors.len().min(MAX_BASES), suggestions = suggestions.len(), "generated palette suggestions");
    suggestions
}

/// Relationships tried for the base at `index`, in emission order.
const fn kinds_for(index: usize) -> &'static [HarmonyKind] {
    match index {
        0 | 1 => &[HarmonyKind::Analogous, HarmonyKind::Complementary, HarmonyKind::Triadic],
        2 => &[HarmonyKind::Analogous],
        _ => &[],
    }
}

/// Label prefix; the base color's name follows it.
const fn phrase(kind: HarmonyKind) -> &'static str {
    match kind {
        HarmonyKind::Analogous => "Analogous harmony with",
        HarmonyKind::Complementary => "Complementary contrast for",
        HarmonyKind::Triadic => "Triadic balance with",
        HarmonyKind::Monochromatic => "Monochromatic shades of",
        HarmonyKind::SplitComplementary => "Split-complementary accents for",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
