//! The 10 heavenly stems (Tian Gan).
//!
//! Stems alternate yang/yin and pair up by element:
//! 甲乙 Wood, 丙丁 Fire, 戊己 Earth, 庚辛 Metal, 壬癸 Water.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::element::{ALL_ELEMENTS, Element, Polarity};
use crate::error::SymbolError;

/// A heavenly stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cyclic order (0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_GLYPHS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// Climate temperature per stem, warm positive, cold negative.
const STEM_TEMPERATURES: [i8; 10] = [3, 2, 6, 4, 1, -1, -3, -4, -6, -5];

impl Stem {
    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at a cyclic index (taken mod 10).
    pub const fn from_index(index: i32) -> Stem {
        ALL_STEMS[index.rem_euclid(10) as usize]
    }

    /// Chinese glyph.
    pub const fn glyph(self) -> &'static str {
        STEM_GLYPHS[self.index() as usize]
    }

    /// Pinyin name.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// Elemental affinity.
    pub const fn element(self) -> Element {
        ALL_ELEMENTS[(self.index() / 2) as usize]
    }

    /// Yin/yang polarity.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    /// Combination partner: 甲己, 乙庚, 丙辛, 丁壬, 戊癸.
    pub const fn combines_with(self) -> Stem {
        Stem::from_index(self.index() as i32 + 5)
    }

    /// Clash partner: 甲庚, 乙辛, 丙壬, 丁癸. Earth stems have none.
    pub const fn clashes_with(self) -> Option<Stem> {
        match self.index() {
            0..=3 => Some(Stem::from_index(self.index() as i32 + 6)),
            6..=9 => Some(Stem::from_index(self.index() as i32 - 6)),
            _ => None,
        }
    }

    /// Climate temperature index.
    pub const fn temperature(self) -> i8 {
        STEM_TEMPERATURES[self.index() as usize]
    }

    /// Parse from a single glyph.
    pub fn from_glyph(glyph: &str) -> Result<Stem, SymbolError> {
        STEM_GLYPHS
            .iter()
            .position(|g| *g == glyph)
            .map(|i| ALL_STEMS[i])
            .ok_or_else(|| SymbolError::UnknownStem(glyph.to_string()))
    }

    /// Parse from a single character.
    pub fn from_char(c: char) -> Result<Stem, SymbolError> {
        let mut buf = [0u8; 4];
        Self::from_glyph(c.encode_utf8(&mut buf))
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

impl FromStr for Stem {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_glyph(s.trim())
    }
}

impl Serialize for Stem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.glyph())
    }
}

impl<'de> Deserialize<'de> for Stem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
