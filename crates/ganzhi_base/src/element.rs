//! Five elements (Wu Xing), polarity, and the generating/controlling cycles.
//!
//! Generating cycle: Wood → Fire → Earth → Metal → Water → Wood.
//! Controlling cycle: Wood → Earth → Water → Fire → Metal → Wood.

use serde::{Deserialize, Serialize};

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in generating order (0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Chinese glyph.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index in generating order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// The element this one generates.
    pub const fn generates(self) -> Element {
        ALL_ELEMENTS[((self.index() + 1) % 5) as usize]
    }

    /// The element this one controls.
    pub const fn controls(self) -> Element {
        ALL_ELEMENTS[((self.index() + 2) % 5) as usize]
    }

    /// Relation of `self` (acting) toward `other`.
    pub const fn relation_to(self, other: Element) -> ElementRelation {
        let diff = (other.index() + 5 - self.index()) % 5;
        match diff {
            0 => ElementRelation::Same,
            1 => ElementRelation::Generates,
            2 => ElementRelation::Controls,
            3 => ElementRelation::ControlledBy,
            _ => ElementRelation::GeneratedBy,
        }
    }
}

/// How one element stands toward another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRelation {
    Same,
    Generates,
    Controls,
    ControlledBy,
    GeneratedBy,
}

impl ElementRelation {
    /// Arrow glyph used when a stem (above) meets a branch (below).
    ///
    /// `=` same, `↓` stem generates branch, `↑` branch generates stem,
    /// `→` stem controls branch, `←` branch controls stem.
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Same => "=",
            Self::Generates => "↓",
            Self::GeneratedBy => "↑",
            Self::Controls => "→",
            Self::ControlledBy => "←",
        }
    }
}

/// Yin/yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// `+` for yang, `-` for yin.
    pub const fn sign(self) -> char {
        match self {
            Self::Yang => '+',
            Self::Yin => '-',
        }
    }

    /// Polarity of an index in an alternating sequence starting with yang.
    pub const fn from_parity(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }
}
