//! Types for Major Cycle and Year Cycle projection results.

use ganzhi_base::{Branch, BranchGroup, LifeStage, Pillar, Stem, TenDeity};

use crate::relations::Relation;

/// Direction the Major Cycles step through the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// +1 or -1.
    pub const fn step(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "Forward",
            Self::Backward => "Backward",
        }
    }
}

/// A hidden stem and its role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiddenRole {
    pub stem: Stem,
    pub deity: TenDeity,
}

/// Per-pillar analysis shared by Major and Year Cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleAnalysis {
    pub pillar: Pillar,
    pub stem_deity: TenDeity,
    pub branch_deity: TenDeity,
    /// Day Master's life stage at the cycle branch.
    pub stage: LifeStage,
    pub hidden: Vec<HiddenRole>,
    /// Interactions of the cycle branch with the reference branches.
    pub relations: Vec<Relation>,
    /// Pillar repeats a natal pillar.
    pub repeats_natal: bool,
    /// Branch is void relative to the Day pillar.
    pub void: bool,
    /// Branches bracketed between this branch and a reference branch
    /// under an equal stem.
    pub brackets: Vec<Branch>,
    /// Centers of arched half-triads formed with a reference branch
    /// under an equal stem, when the center is not natal.
    pub arches: Vec<Branch>,
}

/// One calendar year inside a Major Cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCycle {
    pub year: i32,
    pub age: u32,
    pub analysis: CycleAnalysis,
    /// Special four-branch groups completed by natal + cycle + year branches.
    pub specials: Vec<BranchGroup>,
}

/// One ten-year Major Cycle with its Year Cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MajorCycle {
    /// 1-based order.
    pub order: u8,
    pub start_age: u32,
    pub start_year: i32,
    pub analysis: CycleAnalysis,
    pub years: Vec<YearCycle>,
}

impl MajorCycle {
    pub fn pillar(&self) -> Pillar {
        self.analysis.pillar
    }

    /// Last calendar year covered.
    pub fn end_year(&self) -> i32 {
        self.years.last().map_or(self.start_year, |y| y.year)
    }
}

/// The complete projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuckProjection {
    pub direction: Direction,
    /// The 12 pillars stepped from the month pillar.
    pub pillars: [Pillar; 12],
    /// The reported Major Cycles.
    pub cycles: Vec<MajorCycle>,
}
