//! Pillars (stem-branch pairs) and the 60-pair sexagenary cycle.
//!
//! Only pairs of equal polarity exist: index `i` of the cycle combines
//! stem `i mod 10` with branch `i mod 12`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::branch::Branch;
use crate::element::Element;
use crate::error::SymbolError;
use crate::stem::Stem;

/// Length of the sexagenary cycle.
pub const SEXAGENARY_CYCLE: u8 = 60;

/// A stem-branch pair of matching polarity.
///
/// Fields are private: build through [`Pillar::new`], [`Pillar::parse`] or
/// [`Pillar::from_index`] so every value sits on the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

/// Sound element (Na Yin) shared by two consecutive pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaYin {
    /// Traditional name, e.g. 海中金.
    pub name: &'static str,
    /// Element of the sound.
    pub element: Element,
}

const NAYIN_TABLE: [(&str, Element); 30] = [
    ("海中金", Element::Metal),
    ("炉中火", Element::Fire),
    ("大林木", Element::Wood),
    ("路旁土", Element::Earth),
    ("剑锋金", Element::Metal),
    ("山头火", Element::Fire),
    ("涧下水", Element::Water),
    ("城头土", Element::Earth),
    ("白蜡金", Element::Metal),
    ("杨柳木", Element::Wood),
    ("泉中水", Element::Water),
    ("屋上土", Element::Earth),
    ("霹雳火", Element::Fire),
    ("松柏木", Element::Wood),
    ("长流水", Element::Water),
    ("沙中金", Element::Metal),
    ("山下火", Element::Fire),
    ("平地木", Element::Wood),
    ("壁上土", Element::Earth),
    ("金箔金", Element::Metal),
    ("覆灯火", Element::Fire),
    ("天河水", Element::Water),
    ("大驿土", Element::Earth),
    ("钗钏金", Element::Metal),
    ("桑柘木", Element::Wood),
    ("大溪水", Element::Water),
    ("沙中土", Element::Earth),
    ("天上火", Element::Fire),
    ("石榴木", Element::Wood),
    ("大海水", Element::Water),
];

impl Pillar {
    /// Build a pillar, rejecting pairs of mismatched polarity.
    pub fn new(stem: Stem, branch: Branch) -> Result<Pillar, SymbolError> {
        if stem.polarity() != branch.polarity() {
            return Err(SymbolError::MalformedPillar(format!("{stem}{branch}")));
        }
        Ok(Pillar { stem, branch })
    }

    /// Pillar at a cyclic index (taken mod 60). 0 = 甲子, 59 = 癸亥.
    pub const fn from_index(index: i32) -> Pillar {
        let i = index.rem_euclid(SEXAGENARY_CYCLE as i32);
        Pillar {
            stem: Stem::from_index(i),
            branch: Branch::from_index(i),
        }
    }

    /// Heavenly stem (upper).
    pub const fn stem(self) -> Stem {
        self.stem
    }

    /// Earthly branch (lower).
    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// 0-based index in the sexagenary cycle.
    pub const fn sexagenary_index(self) -> u8 {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        (6 * s - 5 * b).rem_euclid(SEXAGENARY_CYCLE as i32) as u8
    }

    /// Pillar `delta` steps away in the cycle; stem and branch move together.
    pub const fn step(self, delta: i32) -> Pillar {
        Pillar::from_index(self.sexagenary_index() as i32 + delta)
    }

    /// Sound element of the pillar.
    pub const fn nayin(self) -> NaYin {
        let (name, element) = NAYIN_TABLE[(self.sexagenary_index() / 2) as usize];
        NaYin { name, element }
    }

    /// The two void (empty) branches of the ten-day Xun this pillar opens into.
    pub const fn xun_void(self) -> [Branch; 2] {
        let s = self.stem.index() as i32;
        [self.branch.offset(10 - s), self.branch.offset(11 - s)]
    }

    /// Whether `branch` is void relative to this pillar.
    pub fn is_void(self, branch: Branch) -> bool {
        self.xun_void().contains(&branch)
    }

    /// Parse a two-glyph pillar such as `甲子`.
    pub fn parse(s: &str) -> Result<Pillar, SymbolError> {
        let mut chars = s.trim().chars();
        let (Some(sc), Some(bc), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SymbolError::MalformedPillar(s.to_string()));
        };
        Pillar::new(Stem::from_char(sc)?, Branch::from_char(bc)?)
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl FromStr for Pillar {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pillar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
