//! Five-element and per-stem scoring, and the weak/not-weak classification.

use ganzhi_base::{ALL_STEMS, Element, Stem, TenDeity, storage_branch};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::{Position, PillarContext};
use crate::deities::TenDeityMapper;

/// Points a natal stem contributes to its element.
pub const STEM_POINTS: u32 = 5;

/// Parallel + Storage count above which a chart is not weak.
const STRENGTH_THRESHOLD: usize = 2;

/// Element scores. Serializes as a map in Metal, Wood, Water, Fire, Earth order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElementScores {
    pub metal: u32,
    pub wood: u32,
    pub water: u32,
    pub fire: u32,
    pub earth: u32,
}

impl ElementScores {
    pub const fn get(&self, element: Element) -> u32 {
        match element {
            Element::Metal => self.metal,
            Element::Wood => self.wood,
            Element::Water => self.water,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
        }
    }

    fn add(&mut self, element: Element, points: u32) {
        let slot = match element {
            Element::Metal => &mut self.metal,
            Element::Wood => &mut self.wood,
            Element::Water => &mut self.water,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
        };
        *slot += points;
    }

    pub const fn total(&self) -> u32 {
        self.metal + self.wood + self.water + self.fire + self.earth
    }
}

/// Scores per stem, indexed by stem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StemScores([u32; 10]);

impl StemScores {
    pub const fn get(&self, stem: Stem) -> u32 {
        self.0[stem.index() as usize]
    }

    fn add(&mut self, stem: Stem, points: u32) {
        self.0[stem.index() as usize] += points;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stem, u32)> + '_ {
        ALL_STEMS.iter().map(|&s| (s, self.get(s)))
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

/// Everything the scorer derives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSheet {
    pub elements: ElementScores,
    pub stems: StemScores,
    /// Parallel + Plunderer + Indirect Resource + Direct Resource stem scores.
    pub self_support: u32,
    pub weak: bool,
}

impl ScoreSheet {
    /// Elemental Scores section lines.
    pub fn lines(&self) -> Result<Vec<String>, serde_json::Error> {
        Ok(vec![
            format!("Elemental Scores: {}", serde_json::to_string(&self.elements)?),
            format!("Self Support: {}", self.self_support),
            format!("Weak: {}", self.weak),
        ])
    }
}

/// Accumulate element and stem scores.
///
/// Each natal stem adds [`STEM_POINTS`]; each branch adds its hidden-stem
/// weights, and the month branch is counted a second time.
pub fn score_elements(ctx: &PillarContext) -> (ElementScores, StemScores) {
    let mut elements = ElementScores::default();
    let mut stems = StemScores::default();

    for stem in ctx.stems() {
        elements.add(stem.element(), STEM_POINTS);
        stems.add(stem, STEM_POINTS);
    }

    let month = ctx.pillar(Position::Month).branch();
    for branch in ctx.branches().into_iter().chain([month]) {
        for h in branch.hidden_stems() {
            elements.add(h.stem.element(), h.weight);
            stems.add(h.stem, h.weight);
        }
    }
    (elements, stems)
}

/// Weak/not-weak classification.
///
/// Not weak when the Day Master is at Long-Life, Emperor or Established-Root
/// in any natal branch. Otherwise not weak when the Parallel roles among the
/// other three stems and the four branch main stems, plus the branches equal
/// to the Day Master's storage branch, number more than two.
pub fn is_weak(ctx: &PillarContext, mapper: &TenDeityMapper) -> bool {
    let branches = ctx.branches();
    if branches.iter().any(|&b| mapper.life_stage(b).is_rooting()) {
        return false;
    }

    let parallels = mapper
        .stem_roles(ctx)
        .into_iter()
        .flatten()
        .chain(mapper.branch_roles(ctx))
        .filter(|&d| d == TenDeity::Parallel)
        .count();
    let storage = storage_branch(mapper.day_master().element());
    let stored = branches.iter().filter(|&&b| b == storage).count();

    parallels + stored <= STRENGTH_THRESHOLD
}

/// Run the full scorer.
pub fn score(ctx: &PillarContext, mapper: &TenDeityMapper) -> ScoreSheet {
    let (elements, stems) = score_elements(ctx);
    let self_support = [
        TenDeity::Parallel,
        TenDeity::Plunderer,
        TenDeity::IndirectResource,
        TenDeity::DirectResource,
    ]
    .into_iter()
    .map(|d| stems.get(mapper.stem_for(d)))
    .sum();
    let weak = is_weak(ctx, mapper);
    debug!(total = elements.total(), self_support, weak, "scored chart");

    ScoreSheet {
        elements,
        stems,
        self_support,
        weak,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ganzhi_base::{HIDDEN_WEIGHT_TOTAL, Sex};

    fn ctx(glyphs: [&str; 4]) -> PillarContext {
        PillarContext::from_glyphs(Sex::Male, glyphs).unwrap()
    }

    #[test]
    fn totals_have_no_leakage() {
        let c = ctx(["甲子", "丙寅", "戊辰", "庚申"]);
        let (elements, stems) = score_elements(&c);
        let expected = 4 * STEM_POINTS + 5 * HIDDEN_WEIGHT_TOTAL;
        assert_eq!(elements.total(), expected);
        assert_eq!(stems.total(), expected);
        for el in ganzhi_base::ALL_ELEMENTS {
            let by_stem: u32 = stems
                .iter()
                .filter(|(s, _)| s.element() == el)
                .map(|(_, v)| v)
                .sum();
            assert_eq!(elements.get(el), by_stem);
        }
    }

    #[test]
    fn month_branch_counted_twice() {
        let c = ctx(["甲子", "丙子", "戊子", "庚子"]);
        let (elements, _) = score_elements(&c);
        // 子 hides only 癸 (8): five branch passes.
        assert_eq!(elements.water, 5 * 8);
        assert_eq!(elements.wood, 5);
    }

    #[test]
    fn scores_serialize_in_fixed_order() {
        let s = ElementScores {
            metal: 1,
            wood: 2,
            water: 3,
            fire: 4,
            earth: 5,
        };
        assert_eq!(
            serde_json::to_string(&s).unwrap(),
            r#"{"Metal":1,"Wood":2,"Water":3,"Fire":4,"Earth":5}"#
        );
    }

    #[test]
    fn rooted_day_master_is_not_weak() {
        // 甲 at 寅 is Established-Root.
        let c = ctx(["庚申", "庚辰", "甲寅", "庚午"]);
        assert!(!is_weak(&c, &TenDeityMapper::for_chart(&c)));
    }

    #[test]
    fn unrooted_isolated_day_master_is_weak() {
        // 甲 at 申 辰 午 酉: Extinction, Decline, Death, Conception.
        let c = ctx(["庚申", "庚辰", "甲午", "辛酉"]);
        assert!(is_weak(&c, &TenDeityMapper::for_chart(&c)));
    }

    // 甲 at 子 戌 午 未: Bathing, Nurture, Death, Tomb. None of them root it.

    #[test]
    fn two_parallels_stay_weak() {
        let c = ctx(["甲子", "甲戌", "甲午", "庚午"]);
        assert!(is_weak(&c, &TenDeityMapper::for_chart(&c)));
    }

    #[test]
    fn three_parallels_are_not_weak() {
        let c = ctx(["甲子", "甲戌", "甲午", "甲子"]);
        assert!(!is_weak(&c, &TenDeityMapper::for_chart(&c)));
    }

    #[test]
    fn storage_branches_push_past_threshold() {
        // One Parallel stem and two 未 storage branches.
        let c = ctx(["甲子", "辛未", "甲午", "癸未"]);
        let m = TenDeityMapper::for_chart(&c);
        assert!(!is_weak(&c, &m));

        // Same Parallel count without the storage branches.
        let c = ctx(["甲子", "辛巳", "甲午", "癸酉"]);
        assert!(is_weak(&c, &TenDeityMapper::for_chart(&c)));
    }

    #[test]
    fn self_support_sums_companion_and_resource() {
        let c = ctx(["甲子", "丙寅", "戊辰", "庚申"]);
        let m = TenDeityMapper::for_chart(&c);
        let sheet = score(&c, &m);
        // 戊: Parallel 戊, Plunderer 己, Indirect Resource 丙, Direct Resource 丁.
        let expected = sheet.stems.get(Stem::Wu)
            + sheet.stems.get(Stem::Ji)
            + sheet.stems.get(Stem::Bing)
            + sheet.stems.get(Stem::Ding);
        assert_eq!(sheet.self_support, expected);
        let lines = sheet.lines().unwrap();
        assert!(lines[0].starts_with("Elemental Scores: {\"Metal\":"));
    }
}
