//! Harmony search — windowed nearest-neighbor filters on the hue wheel.
//!
//! Each [`HarmonyKind`] names one or more target hues relative to the base
//! color and a tolerance window. A collection member qualifies when its
//! hue is within the window (inclusive, shorter arc) of the nearest target.
//! Qualifying members come back as [`Ranked`] values, ordered by their
//! [`RankKey`] and truncated to the requested count.
//!
//! | Kind                 | Targets (offset from base) | Window | Ranked by        |
//! |----------------------|----------------------------|--------|------------------|
//! | Analogous            | 0                          | 60°    | hue distance     |
//! | Complementary        | 180 (fallback: 0)          | 45° (fallback 30°) | hue distance, fallback last |
//! | Triadic              | 120, 240, 0                | 45°    | nearest target   |
//! | Monochromatic        | 0                          | 15°    | lightness distance |
//! | Split-complementary  | 150, 210, 0                | 30°    | nearest target   |
//!
//! Complementary, triadic and split-complementary searches put the base
//! color itself first when the collection contains its exact hex.

use std::fmt;

use serde::{Deserialize, Serialize};
use swatch_color::{Hsl, hex_to_hsl, hue_distance};

use crate::Result;
use crate::rules::HarmonyRules;
use crate::swatch::Swatch;

// ---------------------------------------------------------------------------
// HarmonyKind
// ---------------------------------------------------------------------------

/// A color-wheel relationship between a base color and its companions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyKind {
    /// Neighbors of the base hue.
    Analogous,
    /// The opposite hue, falling back to close neighbors.
    Complementary,
    /// Three hues 120° apart.
    Triadic,
    /// The base hue only, ranked by lightness.
    Monochromatic,
    /// The two hues flanking the complement.
    SplitComplementary,
}

impl HarmonyKind {
    /// Hue offsets from the base that this relationship targets.
    #[must_use]
    pub const fn targets(self) -> &'static [i32] {
        match self {
            Self::Analogous | Self::Monochromatic => &[0],
            Self::Complementary => &[180],
            Self::Triadic => &[120, 240, 0],
            Self::SplitComplementary => &[150, 210, 0],
        }
    }

    /// Number of matches returned when the caller does not ask for a count.
    #[must_use]
    pub const fn default_count(self) -> usize {
        match self {
            Self::Complementary => 4,
            Self::Triadic => 6,
            Self::Analogous | Self::Monochromatic | Self::SplitComplementary => 5,
        }
    }

    /// Whether an exact-hex base in the collection is always listed first.
    #[must_use]
    pub const fn pins_base(self) -> bool {
        matches!(self, Self::Complementary | Self::Triadic | Self::SplitComplementary)
    }

    /// Kebab-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Monochromatic => "monochromatic",
            Self::SplitComplementary => "split-complementary",
        }
    }

    /// Parse a kind from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|k| k.name() == lower).copied()
    }

    /// All kinds.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Analogous,
            Self::Complementary,
            Self::Triadic,
            Self::Monochromatic,
            Self::SplitComplementary,
        ]
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Ranked results
// ---------------------------------------------------------------------------

/// Why a color made it into a result, and how close it is.
///
/// Ordering is the result ordering: the pinned base first, then hue or
/// lightness matches by distance, then complementary fallback matches by
/// distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "reason", content = "distance")]
pub enum RankKey {
    /// The base color itself, pinned to the front.
    Base,
    /// Hue distance to the nearest target, in degrees.
    HueDiff(u16),
    /// Lightness distance to the base, in percentage points.
    LightnessDiff(u8),
    /// Complementary fallback: hue distance to the base itself.
    SimilarHue(u16),
}

impl RankKey {
    /// The distance carried by this key; zero for the pinned base.
    #[must_use]
    pub fn distance(self) -> u16 {
        match self {
            Self::Base => 0,
            Self::HueDiff(d) | Self::SimilarHue(d) => d,
            Self::LightnessDiff(d) => u16::from(d),
        }
    }
}

/// A caller's color paired with its rank in a harmony search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranked<T> {
    pub color: T,
    pub key: RankKey,
}

impl<T> Ranked<T> {
    /// Drop the rank and keep the color.
    #[must_use]
    pub fn into_color(self) -> T {
        self.color
    }
}

// ---------------------------------------------------------------------------
// Searches
// ---------------------------------------------------------------------------

/// Colors within 60° of the base hue, closest first. Default count 5.
///
/// The base itself qualifies (distance 0) and is not treated specially.
///
/// # Errors
///
/// Returns [`Error::Color`](crate::Error::Color) if `base_hex` is malformed.
pub fn find_analogous<T: Swatch + Clone>(
    colors: &[T],
    base_hex: &str,
    count: Option<usize>,
) -> Result<Vec<Ranked<T>>> {
    find_harmony(HarmonyKind::Analogous, colors, base_hex, count)
}

/// Colors within 45° of the complement, then colors within 30° of the base
/// hue as a fallback tier. Default count 4.
///
/// # Errors
///
/// Returns [`Error::Color`](crate::Error::Color) if `base_hex` is malformed.
pub fn find_complementary<T: Swatch + Clone>(
    colors: &[T],
    base_hex: &str,
    count: Option<usize>,
) -> Result<Vec<Ranked<T>>> {
    find_harmony(HarmonyKind::Complementary, colors, base_hex, count)
}

/// Colors within 45° of base+120°, base+240° or the base hue. Default count 6.
///
/// # Errors
///
/// Returns [`Error::Color`](crate::Error::Color) if `base_hex` is malformed.
pub fn find_triadic<T: Swatch + Clone>(
    colors: &[T],
    base_hex: &str,
    count: Option<usize>,
) -> Result<Vec<Ranked<T>>> {
    find_harmony(HarmonyKind::Triadic, colors, base_hex, count)
}

/// Colors within 15° of the base hue, ranked by lightness distance rather
/// than hue distance. Default count 5.
///
/// # Errors
///
/// Returns [`Error::Color`](crate::Error::Color) if `base_hex` is malformed.
pub fn find_monochromatic<T: Swatch + Clone>(
    colors: &[T],
    base_hex: &str,
    count: Option<usize>,
) -> Result<Vec<Ranked<T>>> {
    find_harmony(HarmonyKind::Monochromatic, colors, base_hex, count)
}

/// Colors within 30° of base+150°, base+210° or the base hue. Default count 5.
///
/// # Errors
///
/// Returns [`Error::Color`](crate::Error::Color) if `base_hex` is malformed.
pub fn find_split_complementary<T: Swatch + Clone>(
    colors: &[T],
    base_hex: &str,
    count: Option<usize>,
) -> Result<Vec<Ranked<T>>> {
    find_harmony(HarmonyKind::SplitComplementary, colors, base_hex, count)
}

/// Run the search for `kind` with the default [`HarmonyRules`].
///
/// `count` of `None` uses the kind's default count.
///
/// # Errors
///
/// Returns [`Error::Color`](crate::Error::Color) if `base_hex` is malformed.
pub fn find_harmony<T: Swatch + Clone>(
    kind: HarmonyKind,
    colors: &[T],
    base_hex: &str,
    count: Option<usize>,
) -> Result<Vec<Ranked<T>>> {
    HarmonyRules::default().find(kind, colors, base_hex, count)
}

/// Shared search body: `rules.find` resolves the window and count, this
/// does the scanning.
pub(crate) fn search<T: Swatch + Clone>(
    kind: HarmonyKind,
    rules: &HarmonyRules,
    colors: &[T],
    base_hex: &str,
    count: usize,
) -> Result<Vec<Ranked<T>>> {
    let base = hex_to_hsl(base_hex)?;
    let window = rules.rule(kind).window;

    let mut ranked = match kind {
        HarmonyKind::Monochromatic => collect(colors, base_hex, false, |hsl| {
            (hue_distance(hsl.h, base.h) <= window)
                .then(|| RankKey::LightnessDiff(hsl.l.abs_diff(base.l)))
        }),
        HarmonyKind::Complementary => {
            let fallback = rules.complementary_fallback_window;
            collect(colors, base_hex, true, |hsl| {
                let d = nearest_target(kind, base, hsl);
                if d <= window {
                    return Some(RankKey::HueDiff(d));
                }
                let d = hue_distance(hsl.h, base.h);
                (d <= fallback).then_some(RankKey::SimilarHue(d))
            })
        }
        HarmonyKind::Analogous | HarmonyKind::Triadic | HarmonyKind::SplitComplementary => {
            collect(colors, base_hex, kind.pins_base(), |hsl| {
                let d = nearest_target(kind, base, hsl);
                (d <= window).then_some(RankKey::HueDiff(d))
            })
        }
    };

    tracing::trace!(
        %kind,
        base = base_hex,
        candidates = colors.len(),
        matches = ranked.len(),
        count,
        "harmony search"
    );

    ranked.truncate(count);
    Ok(ranked)
}

/// Shortest hue distance from `hsl` to any of `kind`'s targets around `base`.
fn nearest_target(kind: HarmonyKind, base: Hsl, hsl: Hsl) -> u16 {
    kind.targets()
        .iter()
        .map(|&offset| hue_distance(hsl.h, base.rotate(offset).h))
        .min()
        .unwrap_or(u16::MAX)
}

/// Scan the collection, rank every member `rank` accepts, and sort.
///
/// With `pin_base`, the first member whose hex equals `base_hex` is put in
/// front as [`RankKey::Base`] and every exact-hex match is left out of the
/// scan. Members with malformed hex never qualify.
fn collect<T, F>(colors: &[T], base_hex: &str, pin_base: bool, mut rank: F) -> Vec<Ranked<T>>
where
    T: Swatch + Clone,
    F: FnMut(Hsl) -> Option<RankKey>,
{
    let mut ranked = Vec::new();

    let pinned = if pin_base { colors.iter().find(|c| c.hex() == base_hex) } else { None };
    if let Some(base) = pinned {
        ranked.push(Ranked { color: base.clone(), key: RankKey::Base });
    }

    for color in colors {
        if pin_base && color.hex() == base_hex {
            continue;
        }
        let hsl = match color.hsl() {
            Ok(hsl) => hsl,
            Err(err) => {
                tracing::debug!(hex = color.hex(), name = color.name(), %err, "skipping swatch with invalid hex");
                continue;
            }
        };
        if let Some(key) = rank(hsl) {
            ranked.push(Ranked { color: color.clone(), key });
        }
    }

    // Stable: ties keep collection order.
    ranked.sort_by_key(|r| r.key);
    ranked
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::swatch::NamedColor;
    use pretty_assertions::assert_eq;
    use swatch_color::ColorError;

    fn c(hex: &str, name: &str) -> NamedColor {
        NamedColor::new(hex, name)
    }

    fn names<T: Swatch>(ranked: &[Ranked<T>]) -> Vec<&str> {
        ranked.iter().map(|r| r.color.name()).collect()
    }

    // Fully saturated, mid-lightness hues (hsl(h, 100%, 50%)).
    const HUE_0: &str = "#FF0000";
    const HUE_10: &str = "#FF2A00";
    const HUE_70: &str = "#D4FF00";
    const HUE_120: &str = "#00FF00";
    const HUE_180: &str = "#00FFFF";
    const HUE_200: &str = "#00AAFF";
    const HUE_240: &str = "#0000FF";
    const HUE_350: &str = "#FF002B";

    // ── HarmonyKind ──────────────────────────────────────────────────

    #[test]
    fn default_counts() {
        assert_eq!(HarmonyKind::Analogous.default_count(), 5);
        assert_eq!(HarmonyKind::Complementary.default_count(), 4);
        assert_eq!(HarmonyKind::Triadic.default_count(), 6);
        assert_eq!(HarmonyKind::Monochromatic.default_count(), 5);
        assert_eq!(HarmonyKind::SplitComplementary.default_count(), 5);
    }

    #[test]
    fn name_roundtrip() {
        for &kind in HarmonyKind::all() {
            assert_eq!(HarmonyKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(HarmonyKind::from_name("Split-Complementary"), Some(HarmonyKind::SplitComplementary));
        assert_eq!(HarmonyKind::from_name("tetradic"), None);
    }

    #[test]
    fn rank_key_orders_base_then_distance_then_fallback() {
        let mut keys = vec![
            RankKey::SimilarHue(0),
            RankKey::HueDiff(40),
            RankKey::Base,
            RankKey::HueDiff(3),
        ];
        keys.sort();
        assert_eq!(keys, vec![RankKey::Base, RankKey::HueDiff(3), RankKey::HueDiff(40), RankKey::SimilarHue(0)]);
    }

    #[test]
    fn rank_key_distance() {
        assert_eq!(RankKey::Base.distance(), 0);
        assert_eq!(RankKey::HueDiff(12).distance(), 12);
        assert_eq!(RankKey::LightnessDiff(30).distance(), 30);
        assert_eq!(RankKey::SimilarHue(7).distance(), 7);
    }

    // ── Analogous ────────────────────────────────────────────────────

    #[test]
    fn analogous_keeps_only_hues_within_sixty_degrees() {
        let colors = vec![c(HUE_10, "ten"), c(HUE_70, "seventy"), c(HUE_200, "two hundred")];
        let found = find_analogous(&colors, HUE_0, None).unwrap();
        assert_eq!(names(&found), vec!["ten"]);
        assert_eq!(found[0].key, RankKey::HueDiff(10));
    }

    #[test]
    fn analogous_wraps_around_zero() {
        let colors = vec![c(HUE_70, "seventy"), c(HUE_350, "three fifty"), c(HUE_10, "ten")];
        let found = find_analogous(&colors, HUE_0, None).unwrap();
        assert_eq!(names(&found), vec!["three fifty", "ten"]);
    }

    #[test]
    fn analogous_includes_base_at_distance_zero() {
        let colors = vec![c(HUE_10, "ten"), c(HUE_0, "red")];
        let found = find_analogous(&colors, HUE_0, None).unwrap();
        assert_eq!(names(&found), vec!["red", "ten"]);
        assert_eq!(found[0].key, RankKey::HueDiff(0));
    }

    #[test]
    fn window_is_inclusive() {
        // hsl(60, 100%, 50%) is exactly 60° from red.
        let colors = vec![c("#FFFF00", "yellow")];
        assert_eq!(find_analogous(&colors, HUE_0, None).unwrap().len(), 1);
    }

    #[test]
    fn count_truncates() {
        let colors = vec![c(HUE_0, "a"), c(HUE_10, "b"), c(HUE_350, "c")];
        let found = find_analogous(&colors, HUE_0, Some(2)).unwrap();
        assert_eq!(names(&found), vec!["a", "b"]);
        assert!(find_analogous(&colors, HUE_0, Some(0)).unwrap().is_empty());
    }

    // ── Complementary ────────────────────────────────────────────────

    #[test]
    fn complementary_pins_exact_base_first() {
        let colors = vec![c(HUE_180, "cyan"), c(HUE_200, "azure"), c(HUE_0, "red")];
        let found = find_complementary(&colors, HUE_0, None).unwrap();
        assert_eq!(names(&found), vec!["red", "cyan", "azure"]);
        assert_eq!(found[0].key, RankKey::Base);
        assert_eq!(found[1].key, RankKey::HueDiff(0));
        assert_eq!(found[2].key, RankKey::HueDiff(20));
    }

    #[test]
    fn complementary_pins_only_first_duplicate() {
        let colors = vec![c(HUE_0, "red"), c(HUE_0, "red again")];
        let found = find_complementary(&colors, HUE_0, None).unwrap();
        assert_eq!(names(&found), vec!["red"]);
    }

    #[test]
    fn complementary_pinning_is_case_sensitive() {
        // "#ff0000" is not the exact base hex, so it is ranked like any
        // other member: hue 0 lands in the fallback tier.
        let colors = vec![c("#ff0000", "lower red"), c(HUE_180, "cyan")];
        let found = find_complementary(&colors, HUE_0, None).unwrap();
        assert_eq!(names(&found), vec!["cyan", "lower red"]);
        assert_eq!(found[1].key, RankKey::SimilarHue(0));
        assert!(found.iter().all(|r| r.key != RankKey::Base));
    }

    #[test]
    fn complementary_fallback_ranks_after_every_complement() {
        // "ten" is 10° from the base (fallback); "azure" is 20° from the
        // complement. The complement wins despite the larger distance.
        let colors = vec![c(HUE_10, "ten"), c(HUE_200, "azure"), c(HUE_120, "green")];
        let found = find_complementary(&colors, HUE_0, None).unwrap();
        assert_eq!(names(&found), vec!["azure", "ten"]);
        assert_eq!(found[1].key, RankKey::SimilarHue(10));
    }

    #[test]
    fn complementary_without_base_in_collection() {
        let colors = vec![c(HUE_180, "cyan")];
        let found = find_complementary(&colors, HUE_0, None).unwrap();
        assert_eq!(names(&found), vec!["cyan"]);
    }

    // ── Triadic / Split-complementary ────────────────────────────────

    #[test]
    fn triadic_matches_all_three_targets() {
        let colors = vec![c(HUE_240, "blue"), c(HUE_10, "ten"), c(HUE_120, "green"), c(HUE_0, "red"), c(HUE_70, "seventy")];
        let found = find_triadic(&colors, HUE_0, None).unwrap();
        assert_eq!(names(&found), vec!["red", "blue", "green", "ten"]);
    }

    #[test]
    fn split_complementary_targets() {
        // 150° and 210° targets; 180 and 120 are 30° off, 200 is 10° off.
        let colors = vec![c(HUE_180, "cyan"), c(HUE_200, "azure"), c(HUE_70, "seventy"), c(HUE_120, "green")];
        let found = find_split_complementary(&colors, HUE_0, None).unwrap();
        assert_eq!(names(&found), vec!["azure", "cyan", "green"]);
    }

    #[test]
    fn split_complementary_pins_base_found_later_in_collection() {
        let colors = vec![c(HUE_200, "azure"), c(HUE_0, "red"), c(HUE_180, "cyan"), c(HUE_0, "red again")];
        let found = find_split_complementary(&colors, HUE_0, None).unwrap();
        assert_eq!(names(&found), vec!["red", "azure", "cyan"]);
        assert_eq!(found[0].key, RankKey::Base);
        assert_eq!(found[1].key, RankKey::HueDiff(10));
        assert_eq!(found[2].key, RankKey::HueDiff(30));
    }

    // ── Monochromatic ────────────────────────────────────────────────

    #[test]
    fn monochromatic_ranks_by_lightness_not_hue() {
        // Base hsl(0, 100%, 50%).
        // "same hue" is hsl(0, 100%, 20%): hue distance 0, lightness distance 30.
        // "near hue" is hsl(10, 100%, 50%): hue distance 10, lightness distance 0.
        let colors = vec![c("#660000", "same hue"), c(HUE_10, "near hue"), c(HUE_70, "far")];
        let found = find_monochromatic(&colors, HUE_0, None).unwrap();
        assert_eq!(names(&found), vec!["near hue", "same hue"]);
        assert_eq!(found[0].key, RankKey::LightnessDiff(0));
        assert_eq!(found[1].key, RankKey::LightnessDiff(30));
    }

    #[test]
    fn monochromatic_window_is_tight() {
        // hsl(20, 60%, 49%) is 20° away.
        let colors = vec![c("#C86432", "rust")];
        assert!(find_monochromatic(&colors, HUE_0, None).unwrap().is_empty());
    }

    // ── Degenerate inputs ────────────────────────────────────────────

    #[test]
    fn empty_collection_yields_empty_result() {
        let colors: Vec<NamedColor> = Vec::new();
        for &kind in HarmonyKind::all() {
            assert!(find_harmony(kind, &colors, HUE_0, None).unwrap().is_empty());
        }
    }

    #[test]
    fn malformed_base_is_an_error() {
        let colors = vec![c(HUE_0, "red")];
        let err = find_analogous(&colors, "#XYZXYZ", None).unwrap_err();
        assert!(matches!(err, Error::Color(ColorError::InvalidDigit { digit: 'X', .. })));
        assert!(matches!(
            HarmonyRules::default().find(HarmonyKind::Triadic, &colors, "#FFF", None),
            Err(Error::Color(ColorError::InvalidLength { .. }))
        ));
    }

    #[test]
    fn malformed_members_never_qualify() {
        let colors = vec![c("oops", "broken"), c(HUE_10, "ten")];
        let found = find_analogous(&colors, HUE_0, None).unwrap();
        assert_eq!(names(&found), vec!["ten"]);
    }

    #[test]
    fn results_are_clones_with_attributes_intact() {
        let colors = vec![c(HUE_10, "ten").with_attribute("id", 42)];
        let found = find_analogous(&colors, HUE_0, None).unwrap();
        assert_eq!(found[0].color, colors[0]);
        assert_eq!(found.into_iter().next().map(Ranked::into_color), Some(colors[0].clone()));
    }
}
