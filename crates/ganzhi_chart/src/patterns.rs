//! Structural patterns over the natal branches.
//!
//! Triad and Assembly detection runs against an augmented branch set: the
//! natal branches plus virtual branches implied by equal adjacent stems.
//! The natal set itself is never modified.

use ganzhi_base::{
    ASSEMBLIES, Branch, BranchGroup, BranchSet, Classics, DayOfficer, EARTHLY_NET, FOUR_GROWTH,
    FOUR_PROPER, FOUR_STORAGE, HEAVENLY_NET, LifeStage, Pillar, Quarter, Stem, TRIADS, TenDeity,
    arched_center, bracketed_between, climate_regulators, fortune_note, fortune_quarters,
    life_palace, life_palace_text,
};

use crate::context::{PillarContext, Position};
use crate::deities::TenDeityMapper;

// ---------------------------------------------------------------------------
// Augmented branch set
// ---------------------------------------------------------------------------

/// Natal branches plus the virtual branches bracketed between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentedBranches {
    pub natal: [Branch; 4],
    pub virtual_branches: Vec<Branch>,
}

impl AugmentedBranches {
    pub fn contains(&self, branch: Branch) -> bool {
        self.natal.contains(&branch) || self.virtual_branches.contains(&branch)
    }

    /// Natal followed by virtual branches.
    pub fn all(&self) -> Vec<Branch> {
        self.natal
            .iter()
            .chain(&self.virtual_branches)
            .copied()
            .collect()
    }
}

/// Derive the augmented set.
///
/// For each pair of adjacent pillars with equal stems, the branch between
/// two branches two steps apart is virtually present, and so is the missing
/// center of an arched half-triad when it is not already natal.
pub fn augment(stems: &[Stem; 4], natal: &[Branch; 4]) -> AugmentedBranches {
    let mut virtual_branches: Vec<Branch> = Vec::new();
    for i in 0..3 {
        if stems[i] != stems[i + 1] {
            continue;
        }
        let (a, b) = (natal[i], natal[i + 1]);
        let arched = arched_center(a, b).filter(|c| !natal.contains(c));
        for implied in bracketed_between(a, b).into_iter().chain(arched) {
            if !virtual_branches.contains(&implied) {
                virtual_branches.push(implied);
            }
        }
    }
    AugmentedBranches {
        natal: *natal,
        virtual_branches,
    }
}

// ---------------------------------------------------------------------------
// Structure analysis
// ---------------------------------------------------------------------------

/// Triad or Assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboKind {
    Triad,
    Assembly,
}

impl ComboKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Triad => "Triad",
            Self::Assembly => "Assembly",
        }
    }
}

/// A complete Triad or Assembly and the role its element plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComboMatch {
    pub kind: ComboKind,
    pub set: BranchSet,
    pub deity: TenDeity,
}

/// Heavenly or Earthly Net.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetWarning {
    Heavenly,
    Earthly,
}

impl NetWarning {
    pub const fn text(self) -> &'static str {
        match self {
            Self::Earthly => {
                "Earthly Net: branches 辰巳. Heavenly Net: 戌亥. Both nets are inauspicious."
            }
            Self::Heavenly => {
                "Heavenly Net: branches 戌亥. Earthly Net: 辰巳. Both nets are inauspicious."
            }
        }
    }
}

const ABSENCE_NOTES: [(BranchGroup, &str); 3] = [
    (FOUR_GROWTH, "rarely dares to strike out"),
    (FOUR_PROPER, "keeps clear of disputes"),
    (FOUR_STORAGE, "no latent hidden calamities"),
];

/// Everything the Structure Analysis section reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureReport {
    pub regulators: &'static [Stem],
    /// Quarters whose luck periods suit the regulators.
    pub fortune: Vec<Quarter>,
    pub fortune_note: &'static str,
    /// Role of the month branch's main stem.
    pub month_structure: TenDeity,
    /// Groups none of whose members is natal.
    pub absent_groups: Vec<BranchGroup>,
    pub augmented: AugmentedBranches,
    pub combos: Vec<ComboMatch>,
    pub life_palace: Branch,
    /// Day Master's life stage and role at its own seat.
    pub seat: (LifeStage, TenDeity),
    pub nets: Vec<NetWarning>,
}

impl StructureReport {
    pub fn analyze(ctx: &PillarContext, mapper: &TenDeityMapper) -> Self {
        let natal = ctx.branches();
        let month = ctx.pillar(Position::Month).branch();
        let hour = ctx.pillar(Position::Hour).branch();
        let day = ctx.pillar(Position::Day).branch();

        let absent_groups = ABSENCE_NOTES
            .iter()
            .map(|(g, _)| *g)
            .filter(|g| g.count_in(&natal) == 0)
            .collect();

        let augmented = augment(&ctx.stems(), &natal);
        let present = augmented.all();
        let combos = TRIADS
            .iter()
            .map(|s| (ComboKind::Triad, s))
            .chain(ASSEMBLIES.iter().map(|s| (ComboKind::Assembly, s)))
            .filter(|(_, s)| s.is_complete_in(&present))
            .map(|(kind, set)| ComboMatch {
                kind,
                set: *set,
                deity: mapper.stem(set.element_stem),
            })
            .collect();

        let mut nets = Vec::new();
        if EARTHLY_NET.iter().all(|b| natal.contains(b)) {
            nets.push(NetWarning::Earthly);
        }
        if HEAVENLY_NET.iter().all(|b| natal.contains(b)) {
            nets.push(NetWarning::Heavenly);
        }

        Self {
            regulators: climate_regulators(mapper.day_master(), month),
            fortune: fortune_quarters(mapper.day_master(), month),
            fortune_note: fortune_note(mapper.day_master()),
            month_structure: mapper.branch(month),
            absent_groups,
            augmented,
            combos,
            life_palace: life_palace(month, hour),
            seat: (mapper.life_stage(day), mapper.branch(day)),
            nets,
        }
    }

    /// Whether `group` was flagged absent.
    pub fn is_absent(&self, group: &BranchGroup) -> bool {
        self.absent_groups.iter().any(|g| g.name == group.name)
    }

    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        let regs: Vec<&str> = self.regulators.iter().map(|s| s.glyph()).collect();
        out.push(format!("Climate Regulators: {}", regs.join(" ")));
        let quarters: Vec<&str> = self.fortune.iter().map(|q| q.name()).collect();
        out.push(format!(
            "Fortune Periods: {}",
            if quarters.is_empty() { "-".to_string() } else { quarters.join(" ") }
        ));
        out.push(format!("Fortune Note: {}", self.fortune_note));
        out.push(format!(
            "Month Structure: {}",
            self.month_structure.structure_name()
        ));
        for group in &self.absent_groups {
            let note = ABSENCE_NOTES
                .iter()
                .find(|(g, _)| g.name == group.name)
                .map_or("", |(_, n)| *n);
            out.push(format!("Missing {} ({}): {note}", group.name, group.label()));
        }
        if !self.augmented.virtual_branches.is_empty() {
            let v: String = self
                .augmented
                .virtual_branches
                .iter()
                .map(|b| b.glyph())
                .collect();
            out.push(format!("Bracketed Branches: {v}"));
        }
        for c in &self.combos {
            out.push(format!(
                "{}: {} ({}, {})",
                c.kind.name(),
                c.set.label(),
                c.deity.name(),
                c.deity.frame_name()
            ));
        }
        out.push(format!(
            "Life Palace: {} {}",
            self.life_palace,
            life_palace_text(self.life_palace)
        ));
        out.push(format!("Day Seat: {} {}", self.seat.0.name(), self.seat.1.name()));
        for net in &self.nets {
            out.push(net.text().to_string());
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Classical texts and constellation
// ---------------------------------------------------------------------------

/// Classical excerpts found for this chart; either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassicalRefs {
    pub month: Option<String>,
    pub hour: Option<String>,
}

impl ClassicalRefs {
    pub fn lookup(ctx: &PillarContext, classics: &Classics) -> Self {
        let dm = ctx.day_master();
        Self {
            month: classics
                .month_text(dm, ctx.pillar(Position::Month).branch())
                .map(str::to_string),
            hour: classics
                .hour_text(dm, ctx.pillar(Position::Hour))
                .map(str::to_string),
        }
    }
}

/// Day officer ruling the birth day.
pub fn day_officer(ctx: &PillarContext) -> DayOfficer {
    DayOfficer::of_day(
        ctx.pillar(Position::Month).branch(),
        ctx.pillar(Position::Day).branch(),
    )
}

/// Conception pillar: one stem and three branches past the month pillar.
pub fn conception_pillar(ctx: &PillarContext) -> Pillar {
    // 51 is 1 mod 10 and 3 mod 12.
    ctx.pillar(Position::Month).step(51)
}
