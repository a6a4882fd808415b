//! Ten Deities (Shi Shen) and the Twelve Life Stages (Chang Sheng).
//!
//! The Ten-Deity table is held as two explicit mappings: `forward`
//! (day master, stem) → deity and `inverse` (day master, deity) → stem.
//! The inverse is derived in `const` evaluation, which refuses to compile
//! if any deity repeats for one day master, so the pair is a bijection.

use crate::branch::Branch;
use crate::element::{Element, ElementRelation, Polarity};
use crate::stem::{ALL_STEMS, Stem};

/// The ten roles a stem plays relative to a day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TenDeity {
    Parallel,
    Plunderer,
    EatingGod,
    HurtingOfficer,
    IndirectWealth,
    DirectWealth,
    SevenKillings,
    DirectOfficer,
    IndirectResource,
    DirectResource,
}

/// All 10 deities in table order.
pub const ALL_DEITIES: [TenDeity; 10] = [
    TenDeity::Parallel,
    TenDeity::Plunderer,
    TenDeity::EatingGod,
    TenDeity::HurtingOfficer,
    TenDeity::IndirectWealth,
    TenDeity::DirectWealth,
    TenDeity::SevenKillings,
    TenDeity::DirectOfficer,
    TenDeity::IndirectResource,
    TenDeity::DirectResource,
];

/// Sex of the subject; selects cycle direction and family roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl TenDeity {
    /// Report label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Parallel => "Parallel",
            Self::Plunderer => "Plunderer",
            Self::EatingGod => "Eating-God",
            Self::HurtingOfficer => "Hurting-Officer",
            Self::IndirectWealth => "Indirect-Wealth",
            Self::DirectWealth => "Direct-Wealth",
            Self::SevenKillings => "Seven-Killings",
            Self::DirectOfficer => "Direct-Officer",
            Self::IndirectResource => "Indirect-Resource",
            Self::DirectResource => "Direct-Resource",
        }
    }

    /// Single-glyph abbreviation (比劫食伤才财杀官枭印).
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Parallel => "比",
            Self::Plunderer => "劫",
            Self::EatingGod => "食",
            Self::HurtingOfficer => "伤",
            Self::IndirectWealth => "才",
            Self::DirectWealth => "财",
            Self::SevenKillings => "杀",
            Self::DirectOfficer => "官",
            Self::IndirectResource => "枭",
            Self::DirectResource => "印",
        }
    }

    /// Deity from the element relation and polarity match, the rule the
    /// literal table encodes.
    pub const fn from_relation(day_master: Stem, target: Stem) -> TenDeity {
        let same = day_master.index() % 2 == target.index() % 2;
        let (same_polarity, other) = match day_master.element().relation_to(target.element()) {
            ElementRelation::Same => (Self::Parallel, Self::Plunderer),
            ElementRelation::Generates => (Self::EatingGod, Self::HurtingOfficer),
            ElementRelation::Controls => (Self::IndirectWealth, Self::DirectWealth),
            ElementRelation::ControlledBy => (Self::SevenKillings, Self::DirectOfficer),
            ElementRelation::GeneratedBy => (Self::IndirectResource, Self::DirectResource),
        };
        if same { same_polarity } else { other }
    }

    /// Family member the deity stands for, by the subject's sex.
    pub const fn family_role(self, sex: Sex) -> &'static str {
        let female = matches!(sex, Sex::Female);
        match self {
            Self::IndirectWealth => "Father",
            Self::DirectWealth => {
                if female {
                    "Wealth"
                } else {
                    "Wife"
                }
            }
            Self::DirectResource => "Mother",
            Self::IndirectResource => {
                if female {
                    "Step-Mother"
                } else {
                    "Grandfather"
                }
            }
            Self::DirectOfficer => {
                if female {
                    "Husband"
                } else {
                    "Daughter"
                }
            }
            Self::SevenKillings => {
                if female {
                    "Lover"
                } else {
                    "Son"
                }
            }
            Self::Plunderer => {
                if female {
                    "Brother"
                } else {
                    "Sister"
                }
            }
            Self::Parallel => {
                if female {
                    "Sister"
                } else {
                    "Brother"
                }
            }
            Self::EatingGod => {
                if female {
                    "Daughter"
                } else {
                    "Subordinate"
                }
            }
            Self::HurtingOfficer => {
                if female {
                    "Son"
                } else {
                    "Granddaughter"
                }
            }
        }
    }

    /// Month-structure (Ge Ju) name when this deity commands the month branch.
    pub const fn structure_name(self) -> &'static str {
        match self {
            Self::Parallel => "Established-Root Structure",
            Self::Plunderer => "Goat-Blade Structure",
            Self::EatingGod => "Eating-God Structure",
            Self::HurtingOfficer => "Hurting-Officer Structure",
            Self::IndirectWealth => "Indirect-Wealth Structure",
            Self::DirectWealth => "Direct-Wealth Structure",
            Self::SevenKillings => "Seven-Killings Structure",
            Self::DirectOfficer => "Direct-Officer Structure",
            Self::IndirectResource => "Indirect-Resource Structure",
            Self::DirectResource => "Direct-Resource Structure",
        }
    }

    /// Frame label for a full Triad/Assembly whose element plays this role.
    pub const fn frame_name(self) -> &'static str {
        match self {
            Self::Parallel | Self::Plunderer => "Companion Frame",
            Self::EatingGod | Self::HurtingOfficer => "Output Frame",
            Self::IndirectWealth | Self::DirectWealth => "Wealth Frame",
            Self::SevenKillings | Self::DirectOfficer => "Officer Frame",
            Self::IndirectResource | Self::DirectResource => "Resource Frame",
        }
    }
}

use TenDeity::{
    DirectOfficer as DO, DirectResource as DR, DirectWealth as DW, EatingGod as EG,
    HurtingOfficer as HO, IndirectResource as IR, IndirectWealth as IW, Parallel as PA,
    Plunderer as PL, SevenKillings as SK,
};

/// Forward table: row = day master, column = target stem (甲..癸).
const FORWARD: [[TenDeity; 10]; 10] = [
    [PA, PL, EG, HO, IW, DW, SK, DO, IR, DR], // 甲
    [PL, PA, HO, EG, DW, IW, DO, SK, DR, IR], // 乙
    [IR, DR, PA, PL, EG, HO, IW, DW, SK, DO], // 丙
    [DR, IR, PL, PA, HO, EG, DW, IW, DO, SK], // 丁
    [SK, DO, IR, DR, PA, PL, EG, HO, IW, DW], // 戊
    [DO, SK, DR, IR, PL, PA, HO, EG, DW, IW], // 己
    [IW, DW, SK, DO, IR, DR, PA, PL, EG, HO], // 庚
    [DW, IW, DO, SK, DR, IR, PL, PA, HO, EG], // 辛
    [EG, HO, IW, DW, SK, DO, IR, DR, PA, PL], // 壬
    [HO, EG, DW, IW, DO, SK, DR, IR, PL, PA], // 癸
];

const fn invert(forward: &[[TenDeity; 10]; 10]) -> [[Stem; 10]; 10] {
    let mut inverse = [[Stem::Jia; 10]; 10];
    let mut seen = [[false; 10]; 10];
    let mut d = 0;
    while d < 10 {
        let mut s = 0;
        while s < 10 {
            let label = forward[d][s] as usize;
            if seen[d][label] {
                panic!("ten-deity label repeated for one day master");
            }
            seen[d][label] = true;
            inverse[d][label] = ALL_STEMS[s];
            s += 1;
        }
        d += 1;
    }
    inverse
}

/// Bidirectional Ten-Deity lookup.
#[derive(Debug, Clone, Copy)]
pub struct TenDeityTable {
    forward: [[TenDeity; 10]; 10],
    inverse: [[Stem; 10]; 10],
}

impl TenDeityTable {
    /// Build from a forward table, deriving the inverse.
    ///
    /// Panics (at compile time when used in a `const`) if a deity repeats
    /// within a row.
    pub const fn new(forward: [[TenDeity; 10]; 10]) -> Self {
        let inverse = invert(&forward);
        Self { forward, inverse }
    }

    /// Deity of `target` relative to `day_master`.
    pub const fn deity(&self, day_master: Stem, target: Stem) -> TenDeity {
        self.forward[day_master.index() as usize][target.index() as usize]
    }

    /// The stem holding `deity` relative to `day_master`.
    pub const fn stem(&self, day_master: Stem, deity: TenDeity) -> Stem {
        self.inverse[day_master.index() as usize][deity as usize]
    }
}

/// The process-wide Ten-Deity table.
pub const TEN_DEITIES: TenDeityTable = TenDeityTable::new(FORWARD);

/// Deity of `target` relative to `day_master`.
pub const fn ten_deity(day_master: Stem, target: Stem) -> TenDeity {
    TEN_DEITIES.deity(day_master, target)
}

/// Stem that holds `deity` relative to `day_master`.
pub const fn stem_with_deity(day_master: Stem, deity: TenDeity) -> Stem {
    TEN_DEITIES.stem(day_master, deity)
}

/// Deity of a branch's main hidden stem relative to `day_master`.
pub const fn branch_deity(day_master: Stem, branch: Branch) -> TenDeity {
    ten_deity(day_master, branch.main_stem())
}

// ---------------------------------------------------------------------------
// Twelve Life Stages
// ---------------------------------------------------------------------------

/// The twelve life stages of a stem across the branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifeStage {
    LongLife,
    Bathing,
    Crown,
    EstablishedRoot,
    Emperor,
    Decline,
    Sickness,
    Death,
    Tomb,
    Extinction,
    Conception,
    Nurture,
}

/// All 12 stages in progression order.
pub const ALL_LIFE_STAGES: [LifeStage; 12] = [
    LifeStage::LongLife,
    LifeStage::Bathing,
    LifeStage::Crown,
    LifeStage::EstablishedRoot,
    LifeStage::Emperor,
    LifeStage::Decline,
    LifeStage::Sickness,
    LifeStage::Death,
    LifeStage::Tomb,
    LifeStage::Extinction,
    LifeStage::Conception,
    LifeStage::Nurture,
];

impl LifeStage {
    /// Report label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LongLife => "Long-Life",
            Self::Bathing => "Bathing",
            Self::Crown => "Crown",
            Self::EstablishedRoot => "Established-Root",
            Self::Emperor => "Emperor",
            Self::Decline => "Decline",
            Self::Sickness => "Sickness",
            Self::Death => "Death",
            Self::Tomb => "Tomb",
            Self::Extinction => "Extinction",
            Self::Conception => "Conception",
            Self::Nurture => "Nurture",
        }
    }

    /// Single-glyph abbreviation.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::LongLife => "长",
            Self::Bathing => "沐",
            Self::Crown => "冠",
            Self::EstablishedRoot => "建",
            Self::Emperor => "帝",
            Self::Decline => "衰",
            Self::Sickness => "病",
            Self::Death => "死",
            Self::Tomb => "墓",
            Self::Extinction => "绝",
            Self::Conception => "胎",
            Self::Nurture => "养",
        }
    }

    /// Stages that make the day master rooted regardless of other counts.
    pub const fn is_rooting(self) -> bool {
        matches!(self, Self::LongLife | Self::Emperor | Self::EstablishedRoot)
    }
}

/// Branch where each stem enters Long-Life. Earth stems follow fire.
const LONG_LIFE_BRANCH: [Branch; 10] = [
    Branch::Hai,  // 甲
    Branch::Wu,   // 乙
    Branch::Yin,  // 丙
    Branch::You,  // 丁
    Branch::Yin,  // 戊
    Branch::You,  // 己
    Branch::Si,   // 庚
    Branch::Zi,   // 辛
    Branch::Shen, // 壬
    Branch::Mao,  // 癸
];

/// Life stage of `stem` at `branch`. Yang stems advance, yin stems retreat.
pub const fn life_stage(stem: Stem, branch: Branch) -> LifeStage {
    let start = LONG_LIFE_BRANCH[stem.index() as usize].index() as i32;
    let b = branch.index() as i32;
    let pos = match stem.polarity() {
        Polarity::Yang => (b - start).rem_euclid(12),
        Polarity::Yin => (start - b).rem_euclid(12),
    };
    ALL_LIFE_STAGES[pos as usize]
}

/// Branch at which `stem` reaches `stage`.
pub const fn stage_branch(stem: Stem, stage: LifeStage) -> Branch {
    let start = LONG_LIFE_BRANCH[stem.index() as usize];
    match stem.polarity() {
        Polarity::Yang => start.offset(stage as i32),
        Polarity::Yin => start.offset(-(stage as i32)),
    }
}

/// Storage (Ku) branch of an element.
pub const fn storage_branch(element: Element) -> Branch {
    match element {
        Element::Wood => Branch::Wei,
        Element::Fire | Element::Earth => Branch::Xu,
        Element::Metal => Branch::Chou,
        Element::Water => Branch::Chen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;

    #[test]
    fn literal_table_matches_rule() {
        for dm in ALL_STEMS {
            for t in ALL_STEMS {
                assert_eq!(ten_deity(dm, t), TenDeity::from_relation(dm, t), "{dm}{t}");
            }
        }
    }

    #[test]
    fn forward_inverse_round_trip() {
        for dm in ALL_STEMS {
            for s in ALL_STEMS {
                assert_eq!(stem_with_deity(dm, ten_deity(dm, s)), s);
            }
            for d in ALL_DEITIES {
                assert_eq!(ten_deity(dm, stem_with_deity(dm, d)), d);
            }
        }
    }

    #[test]
    fn jia_row() {
        assert_eq!(ten_deity(Stem::Jia, Stem::Jia), TenDeity::Parallel);
        assert_eq!(ten_deity(Stem::Jia, Stem::Geng), TenDeity::SevenKillings);
        assert_eq!(ten_deity(Stem::Jia, Stem::Gui), TenDeity::DirectResource);
    }

    #[test]
    fn jia_at_yin_is_established_root() {
        assert_eq!(life_stage(Stem::Jia, Branch::Yin), LifeStage::EstablishedRoot);
        assert_eq!(life_stage(Stem::Jia, Branch::Hai), LifeStage::LongLife);
        assert_eq!(life_stage(Stem::Jia, Branch::Mao), LifeStage::Emperor);
        assert_eq!(life_stage(Stem::Jia, Branch::Wei), LifeStage::Tomb);
    }

    #[test]
    fn yin_stems_retreat() {
        assert_eq!(life_stage(Stem::Yi, Branch::Wu), LifeStage::LongLife);
        assert_eq!(life_stage(Stem::Yi, Branch::Mao), LifeStage::EstablishedRoot);
        assert_eq!(life_stage(Stem::Ding, Branch::Wu), LifeStage::EstablishedRoot);
        assert_eq!(life_stage(Stem::Xin, Branch::You), LifeStage::EstablishedRoot);
        assert_eq!(life_stage(Stem::Gui, Branch::Zi), LifeStage::EstablishedRoot);
    }

    #[test]
    fn stage_branch_inverts_life_stage() {
        for s in ALL_STEMS {
            for b in ALL_BRANCHES {
                assert_eq!(stage_branch(s, life_stage(s, b)), b);
            }
        }
    }

    #[test]
    fn every_stem_has_one_root_branch() {
        for s in ALL_STEMS {
            let n = ALL_BRANCHES
                .iter()
                .filter(|&&b| life_stage(s, b) == LifeStage::EstablishedRoot)
                .count();
            assert_eq!(n, 1);
        }
    }

    #[test]
    fn family_roles_differ_by_sex() {
        assert_eq!(TenDeity::DirectWealth.family_role(Sex::Male), "Wife");
        assert_eq!(TenDeity::DirectOfficer.family_role(Sex::Female), "Husband");
        assert_eq!(TenDeity::IndirectWealth.family_role(Sex::Female), "Father");
    }
}
