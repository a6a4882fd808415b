//! Normalized natal chart: the four pillars, the Day Master and the
//! hidden-stem decomposition of each branch.

use ganzhi_base::{Branch, HiddenStem, Pillar, Sex, Stem};

use crate::error::ChartError;
use crate::request::NatalPillars;

/// Pillar position within the natal chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Position {
    Year,
    Month,
    Day,
    Hour,
}

/// Positions in chart order.
pub const ALL_POSITIONS: [Position; 4] =
    [Position::Year, Position::Month, Position::Day, Position::Hour];

impl Position {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// The natal chart every stage reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PillarContext {
    sex: Sex,
    pillars: [Pillar; 4],
}

impl PillarContext {
    pub fn new(sex: Sex, pillars: &NatalPillars) -> Self {
        Self {
            sex,
            pillars: pillars.as_array(),
        }
    }

    /// Build from raw pillar glyphs (year, month, day, hour).
    ///
    /// Any glyph outside the stem/branch tables is an `InvalidSymbol` error.
    pub fn from_glyphs(sex: Sex, glyphs: [&str; 4]) -> Result<Self, ChartError> {
        let [year, month, day, hour] = glyphs;
        let pillars = NatalPillars {
            year: Pillar::parse(year)?,
            month: Pillar::parse(month)?,
            day: Pillar::parse(day)?,
            hour: Pillar::parse(hour)?,
        };
        Ok(Self::new(sex, &pillars))
    }

    pub const fn sex(&self) -> Sex {
        self.sex
    }

    /// Stem of the Day pillar.
    pub const fn day_master(&self) -> Stem {
        self.pillars[Position::Day.index()].stem()
    }

    pub const fn pillar(&self, position: Position) -> Pillar {
        self.pillars[position.index()]
    }

    pub const fn pillars(&self) -> [Pillar; 4] {
        self.pillars
    }

    pub fn stems(&self) -> [Stem; 4] {
        self.pillars.map(|p| p.stem())
    }

    pub fn branches(&self) -> [Branch; 4] {
        self.pillars.map(|p| p.branch())
    }

    /// Hidden stems of the branch at `position`, main qi first.
    pub fn hidden(&self, position: Position) -> impl ExactSizeIterator<Item = HiddenStem> {
        self.pillar(position).branch().hidden_stems()
    }

    /// Whether any natal pillar equals `pillar`.
    pub fn has_pillar(&self, pillar: Pillar) -> bool {
        self.pillars.contains(&pillar)
    }

    /// Whether `branch` is void relative to the Day pillar.
    pub fn is_void(&self, branch: Branch) -> bool {
        self.pillar(Position::Day).is_void(branch)
    }
}
