//! Major Cycle and Year Cycle projection.
//!
//! Major Cycles step from the month pillar, one sexagenary position per
//! cycle, forward or backward by sex and year-stem polarity. Each Year
//! Cycle is analysed against the natal branches plus its owning Major
//! Cycle's branch.

use ganzhi_base::{
    Branch, BranchGroup, FOUR_GROWTH, FOUR_PROPER, FOUR_STORAGE, HEAVEN_EARTH_NET,
    InteractionKind, Pillar, Polarity, Sex, Stem, arched_center, bracketed_between,
};
use tracing::{debug, trace};

use crate::context::{PillarContext, Position};
use crate::deities::TenDeityMapper;
use crate::error::ChartError;
use crate::luck_types::{
    CycleAnalysis, Direction, HiddenRole, LuckProjection, MajorCycle, YearCycle,
};
use crate::relations::{describe, relations_against};
use crate::request::{CycleSpan, validate_cycles};

/// Pillars generated from the month pillar.
pub const CYCLE_PILLAR_COUNT: usize = 12;

/// Four-branch groups a Year Cycle can complete.
pub const SPECIAL_GROUPS: [BranchGroup; 4] =
    [HEAVEN_EARTH_NET, FOUR_GROWTH, FOUR_PROPER, FOUR_STORAGE];

/// Natal members a special group needs before a Year Cycle can complete it.
const SPECIAL_NATAL_MINIMUM: usize = 2;

/// Year Cycles ignore Break.
const YEAR_SKIP: [InteractionKind; 1] = [InteractionKind::Break];

/// Forward for a yang year stem and a male subject or a yin year stem and
/// a female subject; backward otherwise.
pub const fn direction(sex: Sex, year_stem: Stem) -> Direction {
    match (sex, year_stem.polarity()) {
        (Sex::Male, Polarity::Yang) | (Sex::Female, Polarity::Yin) => Direction::Forward,
        _ => Direction::Backward,
    }
}

/// The 12 pillars stepped from the month pillar in `direction`.
pub fn cycle_pillars(month: Pillar, direction: Direction) -> [Pillar; CYCLE_PILLAR_COUNT] {
    std::array::from_fn(|i| month.step(direction.step() * (i as i32 + 1)))
}

/// Yuan-Chen branch: five steps against the cycle direction from the year branch.
pub const fn yuan_chen(year: Branch, direction: Direction) -> Branch {
    year.offset(-5 * direction.step())
}

/// Analyse one cycle pillar against reference stems and branches.
fn analyze_pillar(
    pillar: Pillar,
    ctx: &PillarContext,
    mapper: &TenDeityMapper,
    ref_stems: &[Stem],
    ref_branches: &[Branch],
    skip: &[InteractionKind],
) -> CycleAnalysis {
    let hidden = pillar
        .branch()
        .hidden_stems()
        .map(|h| HiddenRole {
            stem: h.stem,
            deity: mapper.stem(h.stem),
        })
        .collect();

    let mut brackets = Vec::new();
    for (&s, &b) in ref_stems.iter().zip(ref_branches) {
        if s != pillar.stem() {
            continue;
        }
        if let Some(mid) = bracketed_between(pillar.branch(), b) {
            if !brackets.contains(&mid) {
                brackets.push(mid);
            }
        }
    }

    CycleAnalysis {
        pillar,
        stem_deity: mapper.stem(pillar.stem()),
        branch_deity: mapper.branch(pillar.branch()),
        stage: mapper.life_stage(pillar.branch()),
        hidden,
        relations: relations_against(pillar.branch(), ref_branches, skip),
        repeats_natal: ctx.has_pillar(pillar),
        void: ctx.is_void(pillar.branch()),
        brackets,
        arches: Vec::new(),
    }
}

/// Arched centers a year branch forms with equal-stem reference branches.
fn arches(pillar: Pillar, ref_stems: &[Stem], ref_branches: &[Branch], natal: &[Branch]) -> Vec<Branch> {
    let mut out = Vec::new();
    for (&s, &b) in ref_stems.iter().zip(ref_branches) {
        if s != pillar.stem() {
            continue;
        }
        if let Some(center) = arched_center(b, pillar.branch()) {
            if !natal.contains(&center) && !out.contains(&center) {
                out.push(center);
            }
        }
    }
    out
}

/// Special groups completed by the union of `natal` and `extra`, counting
/// only groups with enough natal members.
pub fn special_groups(natal: &[Branch], extra: &[Branch]) -> Vec<BranchGroup> {
    let union: Vec<Branch> = natal.iter().chain(extra).copied().collect();
    SPECIAL_GROUPS
        .into_iter()
        .filter(|g| g.count_in(&union) == g.members.len())
        .filter(|g| g.count_in(natal) >= SPECIAL_NATAL_MINIMUM)
        .collect()
}

/// Project the Major Cycles and their Year Cycles.
pub fn project(
    ctx: &PillarContext,
    mapper: &TenDeityMapper,
    spans: &[CycleSpan],
) -> Result<LuckProjection, ChartError> {
    validate_cycles(spans)?;

    let direction = direction(ctx.sex(), ctx.pillar(Position::Year).stem());
    let pillars = cycle_pillars(ctx.pillar(Position::Month), direction);
    debug!(direction = direction.name(), "projecting major cycles");

    let natal_stems = ctx.stems();
    let natal = ctx.branches();

    let cycles = pillars
        .iter()
        .zip(spans)
        .enumerate()
        .map(|(i, (&pillar, span))| {
            let analysis = analyze_pillar(pillar, ctx, mapper, &natal_stems, &natal, &[]);

            let mut ref_stems = natal_stems.to_vec();
            ref_stems.push(pillar.stem());
            let mut ref_branches = natal.to_vec();
            ref_branches.push(pillar.branch());

            let years = span
                .years
                .iter()
                .map(|entry| {
                    let mut a = analyze_pillar(
                        entry.pillar,
                        ctx,
                        mapper,
                        &ref_stems,
                        &ref_branches,
                        &YEAR_SKIP,
                    );
                    a.arches = arches(entry.pillar, &ref_stems, &ref_branches, &natal);
                    let specials = special_groups(&natal, &[pillar.branch(), entry.pillar.branch()]);
                    trace!(year = entry.year, pillar = %entry.pillar, "year cycle");
                    YearCycle {
                        year: entry.year,
                        age: entry.age,
                        analysis: a,
                        specials,
                    }
                })
                .collect();

            MajorCycle {
                order: i as u8 + 1,
                start_age: span.start_age,
                start_year: span.start_year,
                analysis,
                years,
            }
        })
        .collect();

    Ok(LuckProjection {
        direction,
        pillars,
        cycles,
    })
}

fn describe_analysis(a: &CycleAnalysis) -> String {
    let nayin = a.pillar.nayin();
    let hidden: Vec<String> = a
        .hidden
        .iter()
        .map(|h| format!("{} {}", h.stem, h.deity.name()))
        .collect();
    let mut out = format!(
        "{}{} {} {}:{} {}:{} {} Hidden: {}",
        a.pillar,
        if a.repeats_natal { "*" } else { "" },
        nayin.name,
        a.stem_deity.name(),
        a.pillar.stem(),
        a.branch_deity.name(),
        a.pillar.branch(),
        a.stage.name(),
        hidden.join(", "),
    );
    let rel = describe(&a.relations);
    if !rel.is_empty() {
        out.push_str(" | ");
        out.push_str(&rel);
    }
    if a.void {
        out.push_str(" Void");
    }
    for b in &a.brackets {
        out.push_str(&format!(" --Bracket {b}"));
    }
    for b in &a.arches {
        out.push_str(&format!(" --Arch {b}"));
    }
    out
}

impl LuckProjection {
    /// Major Cycle section lines.
    pub fn summary_lines(&self) -> Vec<String> {
        let pillars: Vec<String> = self.pillars.iter().map(Pillar::to_string).collect();
        vec![
            format!("Direction: {}", self.direction.name()),
            format!("Major Cycle: {}", pillars.join(" ")),
        ]
    }

    /// Year-Cycle Table lines: each Major Cycle followed by its Year Cycles.
    pub fn table_lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        for cycle in &self.cycles {
            out.push(format!(
                "Major Cycle {}: age {} ({}-{}) {}",
                cycle.order,
                cycle.start_age,
                cycle.start_year,
                cycle.end_year(),
                describe_analysis(&cycle.analysis)
            ));
            for y in &cycle.years {
                let mut line = format!(
                    "Year Cycle: age {} {} {}",
                    y.age,
                    y.year,
                    describe_analysis(&y.analysis)
                );
                for g in &y.specials {
                    line.push_str(&format!(" {} {}", g.name, g.label()));
                }
                out.push(line);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_by_sex_and_polarity() {
        assert_eq!(direction(Sex::Male, Stem::Jia), Direction::Forward);
        assert_eq!(direction(Sex::Male, Stem::Yi), Direction::Backward);
        assert_eq!(direction(Sex::Female, Stem::Jia), Direction::Backward);
        assert_eq!(direction(Sex::Female, Stem::Gui), Direction::Forward);
    }

    #[test]
    fn pillars_step_from_month() {
        let month = Pillar::parse("丙寅").unwrap();
        let fwd = cycle_pillars(month, Direction::Forward);
        assert_eq!(fwd[0].to_string(), "丁卯");
        assert_eq!(fwd[11].to_string(), "戊寅");
        let back = cycle_pillars(month, Direction::Backward);
        assert_eq!(back[0].to_string(), "乙丑");
    }

    #[test]
    fn yuan_chen_depends_on_direction() {
        assert_eq!(yuan_chen(Branch::Zi, Direction::Forward), Branch::Wei);
        assert_eq!(yuan_chen(Branch::Zi, Direction::Backward), Branch::Si);
    }

    #[test]
    fn special_groups_need_two_natal_members() {
        let natal = [Branch::Zi, Branch::Wu, Branch::Chen, Branch::Chou];
        let got = special_groups(&natal, &[Branch::Mao, Branch::You]);
        assert_eq!(got, vec![FOUR_PROPER]);

        let natal = [Branch::Zi, Branch::Chen, Branch::Chen, Branch::Chou];
        assert!(special_groups(&natal, &[Branch::Mao, Branch::You]).is_empty());
    }

    #[test]
    fn year_arch_needs_equal_stem_and_non_natal_center() {
        let year = Pillar::parse("壬辰").unwrap();
        let stems = [Stem::Ren, Stem::Jia];
        let branches = [Branch::Shen, Branch::Yin];
        assert_eq!(arches(year, &stems, &branches, &[Branch::Shen]), vec![Branch::Zi]);
        assert!(arches(year, &stems, &branches, &[Branch::Zi]).is_empty());
        let other = [Stem::Jia, Stem::Jia];
        assert!(arches(year, &other, &branches, &[]).is_empty());
    }
}
