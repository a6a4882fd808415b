//! The 12 earthly branches (Di Zhi) and their hidden stems.
//!
//! Every branch stores 1-3 hidden stems with integer weights that always
//! sum to [`HIDDEN_WEIGHT_TOTAL`]. The first hidden stem is the main (dominant)
//! qi, followed by the middle and residual qi.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::element::{Element, Polarity};
use crate::error::SymbolError;
use crate::stem::Stem;

/// An earthly branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cyclic order (0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_GLYPHS: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Sum of hidden-stem weights for every branch.
pub const HIDDEN_WEIGHT_TOTAL: u32 = 8;

/// Tier of a hidden stem inside its branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HiddenTier {
    Main,
    Middle,
    Residual,
}

impl HiddenTier {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Main => "Strong",
            Self::Middle => "Middle",
            Self::Residual => "Weak",
        }
    }

    const fn from_position(pos: usize) -> Self {
        match pos {
            0 => Self::Main,
            1 => Self::Middle,
            _ => Self::Residual,
        }
    }
}

/// One weighted hidden stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiddenStem {
    /// The stem.
    pub stem: Stem,
    /// Score contribution.
    pub weight: u32,
    /// Main, middle or residual qi.
    pub tier: HiddenTier,
}

use Stem::{Bing, Ding, Geng, Gui, Jia, Ji as JiStem, Ren, Wu as WuStem, Xin, Yi};

const HIDDEN_STEMS: [&[(Stem, u32)]; 12] = [
    &[(Gui, 8)],                           // 子
    &[(JiStem, 5), (Gui, 2), (Xin, 1)],    // 丑
    &[(Jia, 5), (Bing, 2), (WuStem, 1)],   // 寅
    &[(Yi, 8)],                            // 卯
    &[(WuStem, 5), (Yi, 2), (Gui, 1)],     // 辰
    &[(Bing, 5), (WuStem, 2), (Geng, 1)],  // 巳
    &[(Ding, 5), (JiStem, 3)],             // 午
    &[(JiStem, 5), (Ding, 2), (Yi, 1)],    // 未
    &[(Geng, 5), (Ren, 2), (WuStem, 1)],   // 申
    &[(Xin, 8)],                           // 酉
    &[(WuStem, 5), (Xin, 2), (Ding, 1)],   // 戌
    &[(Ren, 5), (Jia, 3)],                 // 亥
];

const BRANCH_ELEMENTS: [Element; 12] = [
    Element::Water,
    Element::Earth,
    Element::Wood,
    Element::Wood,
    Element::Earth,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Earth,
    Element::Water,
];

/// Climate temperature per branch, warm positive, cold negative.
const BRANCH_TEMPERATURES: [i8; 12] = [-6, -4, 2, 3, 1, 5, 6, 4, -1, -3, 1, -5];

impl Branch {
    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at a cyclic index (taken mod 12).
    pub const fn from_index(index: i32) -> Branch {
        ALL_BRANCHES[index.rem_euclid(12) as usize]
    }

    /// Branch `steps` positions away (negative steps go backwards).
    pub const fn offset(self, steps: i32) -> Branch {
        Branch::from_index(self.index() as i32 + steps)
    }

    /// Chinese glyph.
    pub const fn glyph(self) -> &'static str {
        BRANCH_GLYPHS[self.index() as usize]
    }

    /// Pinyin name.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Elemental affinity of the branch itself.
    pub const fn element(self) -> Element {
        BRANCH_ELEMENTS[self.index() as usize]
    }

    /// Yin/yang polarity.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    /// Climate temperature index.
    pub const fn temperature(self) -> i8 {
        BRANCH_TEMPERATURES[self.index() as usize]
    }

    /// Hidden stems in main, middle, residual order.
    pub fn hidden_stems(self) -> impl ExactSizeIterator<Item = HiddenStem> {
        HIDDEN_STEMS[self.index() as usize]
            .iter()
            .enumerate()
            .map(|(pos, &(stem, weight))| HiddenStem {
                stem,
                weight,
                tier: HiddenTier::from_position(pos),
            })
    }

    /// The main (dominant) hidden stem.
    pub const fn main_stem(self) -> Stem {
        HIDDEN_STEMS[self.index() as usize][0].0
    }

    /// Whether a stem hides in this branch.
    pub fn hides(self, stem: Stem) -> bool {
        HIDDEN_STEMS[self.index() as usize]
            .iter()
            .any(|&(s, _)| s == stem)
    }

    /// Parse from a single glyph.
    pub fn from_glyph(glyph: &str) -> Result<Branch, SymbolError> {
        BRANCH_GLYPHS
            .iter()
            .position(|g| *g == glyph)
            .map(|i| ALL_BRANCHES[i])
            .ok_or_else(|| SymbolError::UnknownBranch(glyph.to_string()))
    }

    /// Parse from a single character.
    pub fn from_char(c: char) -> Result<Branch, SymbolError> {
        let mut buf = [0u8; 4];
        Self::from_glyph(c.encode_utf8(&mut buf))
    }
}

/// Absolute index distance between two branches in the linear 0..12 order.
pub fn linear_distance(a: Branch, b: Branch) -> u8 {
    a.index().abs_diff(b.index())
}

/// The branch enclosed by `a` and `b` when they sit two apart on the
/// 12-branch circle (linear distance 2 or 10), e.g. 子/寅 → 丑, 戌/子 → 亥.
pub fn bracketed_between(a: Branch, b: Branch) -> Option<Branch> {
    let (lo, hi) = if a.index() <= b.index() { (a, b) } else { (b, a) };
    match hi.index() - lo.index() {
        2 => Some(lo.offset(1)),
        10 => Some(hi.offset(1)),
        _ => None,
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

impl FromStr for Branch {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_glyph(s.trim())
    }
}

impl Serialize for Branch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.glyph())
    }
}

impl<'de> Deserialize<'de> for Branch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
