//! Full chart derivation and report assembly.

use ganzhi_base::{
    ALL_STEMS, Branch, Classics, HiddenTier, LifeStage, Star, Stem, Symbol, life_stage,
    stage_branch,
};
use tracing::{debug, instrument};

use crate::context::{ALL_POSITIONS, PillarContext, Position};
use crate::deities::{TenDeityMapper, role_label};
use crate::error::ChartError;
use crate::luck::{project, yuan_chen};
use crate::luck_types::LuckProjection;
use crate::patterns::{ClassicalRefs, StructureReport, conception_pillar, day_officer};
use crate::relations::RelationshipTable;
use crate::report::{Report, ReportBuilder, Section};
use crate::request::{BirthInfo, ChartRequest};
use crate::scores::{ScoreSheet, score};
use crate::stars::StarChart;

/// Every structured value derived for one chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    pub context: PillarContext,
    pub mapper: TenDeityMapper,
    pub birth: BirthInfo,
    pub scores: ScoreSheet,
    pub relations: RelationshipTable,
    pub structure: StructureReport,
    pub stars: StarChart,
    pub luck: LuckProjection,
}

impl Chart {
    /// Derive every stage from a request.
    #[instrument(skip_all)]
    pub fn derive(request: &ChartRequest) -> Result<Self, ChartError> {
        let context = PillarContext::new(request.sex, &request.pillars);
        let mapper = TenDeityMapper::for_chart(&context);
        debug!(day_master = %mapper.day_master(), "deriving chart");

        let scores = score(&context, &mapper);
        let relations = RelationshipTable::analyze(&context);
        let structure = StructureReport::analyze(&context, &mapper);
        let stars = StarChart::match_stars(&context);
        let luck = project(&context, &mapper, &request.cycles)?;
        debug!(
            stars = stars.count(),
            combos = structure.combos.len(),
            cycles = luck.cycles.len(),
            "chart derived"
        );

        Ok(Self {
            context,
            mapper,
            birth: request.birth.clone(),
            scores,
            relations,
            structure,
            stars,
            luck,
        })
    }

    /// Assemble the ordered report.
    pub fn report(&self, classics: &Classics) -> Result<Report, ChartError> {
        let refs = ClassicalRefs::lookup(&self.context, classics);
        let report = ReportBuilder::new()
            .section(Section::BasicInfo, self.basic_info_lines())
            .section(Section::FourPillars, self.four_pillar_lines())
            .section(Section::PillarDetail, self.pillar_detail_lines())
            .section(Section::Stems, self.stem_lines())
            .section(Section::Branches, self.branch_lines())
            .section(Section::HiddenStems, self.hidden_stem_lines())
            .section(Section::PrimaryRelationships, self.relations.primary_lines())
            .section(Section::SecondaryRelationships, self.relations.secondary_lines())
            .section(Section::ElementalRoots, self.root_lines())
            .section(Section::SoundElement, self.sound_element_lines())
            .section(Section::Stars, self.stars.lines())
            .section(Section::MajorCycle, self.luck.summary_lines())
            .section(Section::ElementalScores, self.scores.lines()?)
            .section(Section::StructureAnalysis, self.structure.lines())
            .section(Section::FamilyRoles, self.family_role_lines())
            .optional(Section::ClassicalMonth, refs.month)
            .optional(Section::ClassicalHour, refs.hour)
            .section(Section::Constellation, self.constellation_lines())
            .section(Section::YearCycleTable, self.luck.table_lines())
            .build();
        Ok(report)
    }

    fn basic_info_lines(&self) -> Vec<String> {
        let b = &self.birth;
        let mut out = vec![format!("Sex: {}", self.context.sex().name())];
        let optional = [
            ("Solar Date", &b.solar),
            ("Lunar Date", &b.lunar),
            ("Cycle Start", &b.cycle_start),
        ];
        for (label, value) in optional {
            if let Some(v) = value {
                out.push(format!("{label}: {v}"));
            }
        }
        out.push(format!("Conception Pillar: {}", conception_pillar(&self.context)));
        for (label, value) in [
            ("Previous Solar Term", &b.prev_solar_term),
            ("Next Solar Term", &b.next_solar_term),
        ] {
            if let Some(v) = value {
                out.push(format!("{label}: {v}"));
            }
        }
        out
    }

    fn four_pillar_lines(&self) -> Vec<String> {
        let ctx = &self.context;
        let stems: Vec<&str> = ctx.stems().iter().map(|s| s.glyph()).collect();
        let stem_roles: Vec<&str> = self.mapper.stem_roles(ctx).map(role_label).to_vec();
        let branches: Vec<&str> = ctx.branches().iter().map(|b| b.glyph()).collect();
        let branch_roles: Vec<&str> = self
            .mapper
            .branch_roles(ctx)
            .iter()
            .map(|d| d.name())
            .collect();
        let pillars: Vec<String> = ctx.pillars().iter().map(|p| p.to_string()).collect();
        vec![
            format!("{} | {}", stems.join(" "), stem_roles.join(" ")),
            format!("{} | {}", branches.join(" "), branch_roles.join(" ")),
            format!("Four Pillars: {}", pillars.join(" ")),
        ]
    }

    fn pillar_detail_lines(&self) -> Vec<String> {
        ALL_POSITIONS
            .iter()
            .map(|&pos| {
                let p = self.context.pillar(pos);
                let mut line = format!(
                    "{}: {}:{}",
                    pos.name(),
                    p.stem().temperature(),
                    p.branch().temperature()
                );
                if pos != Position::Day {
                    let root = stage_branch(p.stem(), LifeStage::EstablishedRoot);
                    line.push_str(&format!(" {root}"));
                }
                if p.branch().hides(p.stem().combines_with()) {
                    line.push_str(" |");
                }
                line
            })
            .collect()
    }

    fn stem_lines(&self) -> Vec<String> {
        let stems = self.context.stems();
        ALL_POSITIONS
            .iter()
            .map(|&pos| {
                let s = stems[pos.index()];
                let mut line = format!("{}{} {}", s, s.polarity().sign(), s.element().name());
                if pos != Position::Day {
                    line.push_str(&format!(" [{}]", self.mapper.stem(s).name()));
                }
                let combines = others_matching(&stems, pos, |o| o == s.combines_with());
                if !combines.is_empty() {
                    line.push_str(&format!(" Combines {combines}"));
                }
                let clashes = others_matching(&stems, pos, |o| Some(o) == s.clashes_with());
                if !clashes.is_empty() {
                    line.push_str(&format!(" Clashes {clashes}"));
                }
                line
            })
            .collect()
    }

    fn branch_lines(&self) -> Vec<String> {
        let stems = self.context.stems();
        ALL_POSITIONS
            .iter()
            .map(|&pos| {
                let b = self.context.pillar(pos).branch();
                let stages: Vec<String> = ALL_POSITIONS
                    .iter()
                    .map(|&sp| {
                        let name = life_stage(stems[sp.index()], b).name();
                        if sp == Position::Day {
                            format!("[{name}]")
                        } else {
                            name.to_string()
                        }
                    })
                    .collect();
                let mut line = format!("{}{} {}", b, b.polarity().sign(), stages.join(" "));
                if pos != Position::Day && self.context.is_void(b) {
                    line.push_str(" Void");
                }
                line
            })
            .collect()
    }

    fn hidden_stem_lines(&self) -> Vec<String> {
        ALL_POSITIONS
            .iter()
            .map(|&pos| {
                let parts: Vec<String> = self
                    .context
                    .hidden(pos)
                    .map(|h| {
                        format!(
                            "{} {} {}",
                            h.stem,
                            h.stem.element().name(),
                            self.mapper.stem(h.stem).name()
                        )
                    })
                    .collect();
                format!("{}: {}", self.context.pillar(pos).branch(), parts.join(", "))
            })
            .collect()
    }

    fn root_lines(&self) -> Vec<String> {
        let branches = self.context.branches();
        self.context
            .stems()
            .iter()
            .map(|&s| {
                let text = roots(s, &branches);
                format!("{s}: {text}")
            })
            .collect()
    }

    fn sound_element_lines(&self) -> Vec<String> {
        let year = self.context.pillar(Position::Year).branch();
        let lost = Star::LostSpirit.targets_for_branch(year);
        let robbery = Star::Robbery.targets_for_branch(year);
        let yuan = yuan_chen(year, self.luck.direction);
        ALL_POSITIONS
            .iter()
            .map(|&pos| {
                let p = self.context.pillar(pos);
                let arrow = p.stem().element().relation_to(p.branch().element()).arrow();
                let mut line = format!("{}: {}{}", pos.name(), arrow, p.nayin().name);
                let here = Symbol::Branch(p.branch());
                if lost.contains(&here) {
                    line.push_str(" Lost-Spirit");
                }
                if robbery.contains(&here) {
                    line.push_str(" Robbery");
                }
                if p.branch() == yuan {
                    line.push_str(" Yuan-Chen");
                }
                line
            })
            .collect()
    }

    fn family_role_lines(&self) -> Vec<String> {
        let sex = self.context.sex();
        let branches = self.context.branches();
        ALL_STEMS
            .iter()
            .map(|&s| {
                let deity = self.mapper.stem(s);
                let stages: Vec<&str> = branches.iter().map(|&b| life_stage(s, b).name()).collect();
                format!(
                    "{s}: {} {} - {}",
                    deity.name(),
                    deity.family_role(sex),
                    stages.join(" ")
                )
            })
            .collect()
    }

    fn constellation_lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(m) = &self.birth.mansion {
            out.push(format!("Mansion: {m}"));
        }
        let officer = day_officer(&self.context);
        out.push(format!("Day Officer: {} {}", officer.glyph(), officer.name()));
        out
    }
}

/// Glyphs of the other natal stems satisfying `pred`.
fn others_matching(stems: &[Stem; 4], pos: Position, pred: impl Fn(Stem) -> bool) -> String {
    stems
        .iter()
        .enumerate()
        .filter(|&(i, &o)| i != pos.index() && pred(o))
        .map(|(_, o)| o.glyph())
        .collect()
}

/// Branches rooting `stem` by tier, or "No root".
pub fn roots(stem: Stem, branches: &[Branch]) -> String {
    let element = stem.element();
    let mut parts = Vec::new();
    for tier in [HiddenTier::Main, HiddenTier::Middle, HiddenTier::Residual] {
        let rooted: String = branches
            .iter()
            .filter(|b| {
                b.hidden_stems()
                    .any(|h| h.tier == tier && h.stem.element() == element)
            })
            .map(|b| b.glyph())
            .collect();
        if !rooted.is_empty() {
            parts.push(format!("{} {rooted}", tier.name()));
        }
    }
    if parts.is_empty() {
        "No root".to_string()
    } else {
        parts.join(" ")
    }
}

/// Derive a chart and assemble its report.
#[instrument(skip_all)]
pub fn analyze(request: &ChartRequest, classics: &Classics) -> Result<Report, ChartError> {
    Chart::derive(request)?.report(classics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roots_by_tier() {
        // 甲 wood: 寅 main 甲, 亥 middle 甲, 未 residual 乙.
        let branches = [Branch::Yin, Branch::Hai, Branch::Wei, Branch::Wu];
        assert_eq!(roots(Stem::Jia, &branches), "Strong 寅 Middle 亥 Weak 未");
        let none = [Branch::Shen, Branch::You, Branch::Zi, Branch::Wu];
        assert_eq!(roots(Stem::Jia, &none), "No root");
    }

    #[test]
    fn others_exclude_self() {
        let stems = [Stem::Jia, Stem::Ji, Stem::Jia, Stem::Geng];
        assert_eq!(others_matching(&stems, Position::Year, |o| o == Stem::Jia), "甲");
        assert_eq!(others_matching(&stems, Position::Month, |o| o == Stem::Jia), "甲甲");
    }
}
