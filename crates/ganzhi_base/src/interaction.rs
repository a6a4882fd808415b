//! Branch interaction table: clashes, punishments, combinations, harms.
//!
//! Each branch maps every [`InteractionKind`] to the partner branches that
//! trigger it when co-present. Kinds are listed in evaluation order; a branch
//! can take part in several kinds at once.

use crate::branch::Branch;
use crate::stem::Stem;

/// Kinds of pairwise branch interaction, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InteractionKind {
    Clash,
    Punish,
    PunishedBy,
    Triad,
    Assembly,
    Harm,
    Break,
    SixCombine,
    HiddenCombine,
}

/// All interaction kinds in evaluation order.
pub const ALL_INTERACTIONS: [InteractionKind; 9] = [
    InteractionKind::Clash,
    InteractionKind::Punish,
    InteractionKind::PunishedBy,
    InteractionKind::Triad,
    InteractionKind::Assembly,
    InteractionKind::Harm,
    InteractionKind::Break,
    InteractionKind::SixCombine,
    InteractionKind::HiddenCombine,
];

impl InteractionKind {
    /// Report label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clash => "Clash",
            Self::Punish => "Punish",
            Self::PunishedBy => "Punished-By",
            Self::Triad => "Triad",
            Self::Assembly => "Assembly",
            Self::Harm => "Harm",
            Self::Break => "Break",
            Self::SixCombine => "Six-Combine",
            Self::HiddenCombine => "Hidden-Combine",
        }
    }

    /// Primary kinds answer "what pulls or pushes"; the rest are secondary.
    pub const fn is_primary(self) -> bool {
        matches!(
            self,
            Self::Clash | Self::PunishedBy | Self::Triad | Self::SixCombine | Self::HiddenCombine
        )
    }

    /// The kind seen from the partner's side.
    pub const fn mirror(self) -> InteractionKind {
        match self {
            Self::Punish => Self::PunishedBy,
            Self::PunishedBy => Self::Punish,
            other => other,
        }
    }
}

use Branch::{Chen, Chou, Hai, Mao, Shen, Si, Wei, Wu, Xu, Yin, You, Zi};

/// Partners per branch, columns in [`ALL_INTERACTIONS`] order.
const PARTNERS: [[&[Branch]; 9]; 12] = [
    // 子
    [&[Wu], &[Mao], &[Mao], &[Shen, Chen], &[Hai, Chou], &[Wei], &[You], &[Chou], &[]],
    // 丑
    [&[Wei], &[Xu], &[Wei], &[Si, You], &[Zi, Hai], &[Wu], &[Chen], &[Zi], &[Yin]],
    // 寅
    [&[Shen], &[Si], &[Shen], &[Wu, Xu], &[Mao, Chen], &[Si], &[Hai], &[Hai], &[Chou]],
    // 卯
    [&[You], &[Zi], &[Zi], &[Wei, Hai], &[Yin, Chen], &[Chen], &[Wu], &[Xu], &[Shen]],
    // 辰
    [&[Xu], &[Chen], &[Chen], &[Zi, Shen], &[Yin, Mao], &[Mao], &[Chou], &[You], &[]],
    // 巳
    [&[Hai], &[Shen], &[Yin], &[You, Chou], &[Wu, Wei], &[Yin], &[Shen], &[Shen], &[]],
    // 午
    [&[Zi], &[Wu], &[Wu], &[Yin, Xu], &[Si, Wei], &[Chou], &[Mao], &[Wei], &[Hai]],
    // 未
    [&[Chou], &[Chou], &[Xu], &[Mao, Hai], &[Si, Wu], &[Zi], &[Xu], &[Wu], &[]],
    // 申
    [&[Yin], &[Yin], &[Si], &[Zi, Chen], &[You, Xu], &[Hai], &[Si], &[Si], &[Mao]],
    // 酉
    [&[Mao], &[You], &[You], &[Si, Chou], &[Shen, Xu], &[Xu], &[Zi], &[Chen], &[]],
    // 戌
    [&[Chen], &[Wei], &[Chou], &[Wu, Yin], &[Shen, You], &[You], &[Wei], &[Mao], &[]],
    // 亥
    [&[Si], &[Hai], &[Hai], &[Mao, Wei], &[Zi, Chou], &[Shen], &[Yin], &[Yin], &[Wu]],
];

/// Partner branches that trigger `kind` for `branch`.
pub const fn partners(branch: Branch, kind: InteractionKind) -> &'static [Branch] {
    PARTNERS[branch.index() as usize][kind as usize]
}

/// Whether `a` and `b` interact as `kind` (seen from `a`).
pub fn interacts(a: Branch, b: Branch, kind: InteractionKind) -> bool {
    partners(a, kind).contains(&b)
}

/// A three-branch combination with the stem that represents its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchSet {
    /// Member branches.
    pub members: [Branch; 3],
    /// Yang stem of the combined element.
    pub element_stem: Stem,
}

impl BranchSet {
    /// Members as a glyph string, e.g. `申子辰`.
    pub fn label(&self) -> String {
        self.members.iter().map(|b| b.glyph()).collect()
    }

    /// Whether every member is in `present`.
    pub fn is_complete_in(&self, present: &[Branch]) -> bool {
        self.members.iter().all(|m| present.contains(m))
    }
}

/// Triads (San He).
pub const TRIADS: [BranchSet; 4] = [
    BranchSet { members: [Shen, Zi, Chen], element_stem: Stem::Ren },
    BranchSet { members: [Si, You, Chou], element_stem: Stem::Geng },
    BranchSet { members: [Yin, Wu, Xu], element_stem: Stem::Bing },
    BranchSet { members: [Hai, Mao, Wei], element_stem: Stem::Jia },
];

/// Seasonal assemblies (San Hui).
pub const ASSEMBLIES: [BranchSet; 4] = [
    BranchSet { members: [Hai, Zi, Chou], element_stem: Stem::Ren },
    BranchSet { members: [Yin, Mao, Chen], element_stem: Stem::Jia },
    BranchSet { members: [Si, Wu, Wei], element_stem: Stem::Bing },
    BranchSet { members: [Shen, You, Xu], element_stem: Stem::Geng },
];

/// Arched half-triads: the two outer members imply the missing center.
const ARCHED: [(Branch, Branch, Branch); 4] = [
    (Shen, Chen, Zi),
    (Si, Chou, You),
    (Yin, Xu, Wu),
    (Hai, Wei, Mao),
];

/// The center branch implied by an arched pair, in either order.
pub fn arched_center(a: Branch, b: Branch) -> Option<Branch> {
    ARCHED
        .iter()
        .find(|&&(x, y, _)| (x == a && y == b) || (x == b && y == a))
        .map(|&(_, _, c)| c)
}

/// A named four-branch group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchGroup {
    /// Report label.
    pub name: &'static str,
    /// Member branches.
    pub members: [Branch; 4],
}

impl BranchGroup {
    /// How many members appear in `present`.
    pub fn count_in(&self, present: &[Branch]) -> usize {
        self.members.iter().filter(|m| present.contains(m)).count()
    }

    /// Members as a glyph string.
    pub fn label(&self) -> String {
        self.members.iter().map(|b| b.glyph()).collect()
    }
}

/// Four Growth (Si Sheng): 寅申巳亥.
pub const FOUR_GROWTH: BranchGroup = BranchGroup {
    name: "Four-Growth",
    members: [Yin, Shen, Si, Hai],
};

/// Four Proper (Si Zheng, also Four Defeats): 子午卯酉.
pub const FOUR_PROPER: BranchGroup = BranchGroup {
    name: "Four-Proper",
    members: [Zi, Wu, Mao, You],
};

/// Four Storage (Si Ku): 辰戌丑未.
pub const FOUR_STORAGE: BranchGroup = BranchGroup {
    name: "Four-Storage",
    members: [Chen, Xu, Chou, Wei],
};

/// Heaven-and-Earth Net: 戌亥辰巳.
pub const HEAVEN_EARTH_NET: BranchGroup = BranchGroup {
    name: "Heaven-Earth-Net",
    members: [Xu, Hai, Chen, Si],
};

/// Heavenly Net pair.
pub const HEAVENLY_NET: [Branch; 2] = [Xu, Hai];

/// Earthly Net pair.
pub const EARTHLY_NET: [Branch; 2] = [Chen, Si];
