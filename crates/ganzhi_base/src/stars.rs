//! Star (Shen Sha) catalogs.
//!
//! Four independent catalogs, each keyed by one chart symbol: the Year
//! Branch, the Month Branch, the Day Branch, or the Day Master. A star is
//! "lit" at a pillar position when one of its targets for the catalog key
//! appears there. Month-branch stars may target stems as well as branches.

use std::fmt::{Display, Formatter};

use crate::branch::Branch;
use crate::stem::Stem;

/// A stem or a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Stem(Stem),
    Branch(Branch),
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stem(s) => s.fmt(f),
            Self::Branch(b) => b.fmt(f),
        }
    }
}

/// Which chart symbol keys a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarCatalog {
    YearBranch,
    MonthBranch,
    DayBranch,
    DayMaster,
}

/// Stars across all four catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Star {
    // Year-branch catalog
    LonelyStar,
    WidowStar,
    RedPhoenix,
    HeavenlyJoy,
    // Month-branch catalog
    HeavenlyVirtue,
    MonthlyVirtue,
    // Day-branch catalog
    GeneralStar,
    Canopy,
    PostHorse,
    Robbery,
    LostSpirit,
    PeachBlossom,
    // Day-master catalog
    Nobleman,
    Literary,
    GoatBlade,
    RedBeauty,
    GoldenCarriage,
    TaiJi,
}

/// Year-branch stars in catalog order.
pub const YEAR_STARS: [Star; 4] = [
    Star::LonelyStar,
    Star::WidowStar,
    Star::RedPhoenix,
    Star::HeavenlyJoy,
];

/// Month-branch stars in catalog order.
pub const MONTH_STARS: [Star; 2] = [Star::HeavenlyVirtue, Star::MonthlyVirtue];

/// Day-branch stars in catalog order.
pub const DAY_STARS: [Star; 6] = [
    Star::GeneralStar,
    Star::Canopy,
    Star::PostHorse,
    Star::Robbery,
    Star::LostSpirit,
    Star::PeachBlossom,
];

/// Day-master stars in catalog order.
pub const DAY_MASTER_STARS: [Star; 6] = [
    Star::Nobleman,
    Star::Literary,
    Star::GoatBlade,
    Star::RedBeauty,
    Star::GoldenCarriage,
    Star::TaiJi,
];

use Branch::{Chen, Chou, Hai, Mao, Shen, Si, Wei, Wu, Xu, Yin, You, Zi};
use Symbol::{Branch as B, Stem as S};

static LONELY: [Symbol; 12] = [
    B(Yin), B(Yin), B(Si), B(Si), B(Si), B(Shen), B(Shen), B(Shen), B(Hai), B(Hai), B(Hai), B(Yin),
];
static WIDOW: [Symbol; 12] = [
    B(Xu), B(Xu), B(Chou), B(Chou), B(Chou), B(Chen), B(Chen), B(Chen), B(Wei), B(Wei), B(Wei), B(Xu),
];
static RED_PHOENIX: [Symbol; 12] = [
    B(Mao), B(Yin), B(Chou), B(Zi), B(Hai), B(Xu), B(You), B(Shen), B(Wei), B(Wu), B(Si), B(Chen),
];
static HEAVENLY_JOY: [Symbol; 12] = [
    B(You), B(Shen), B(Wei), B(Wu), B(Si), B(Chen), B(Mao), B(Yin), B(Chou), B(Zi), B(Hai), B(Xu),
];

static HEAVENLY_VIRTUE: [Symbol; 12] = [
    B(Si),
    S(Stem::Geng),
    S(Stem::Ding),
    B(Shen),
    S(Stem::Ren),
    S(Stem::Xin),
    B(Hai),
    S(Stem::Jia),
    S(Stem::Gui),
    B(Yin),
    S(Stem::Bing),
    S(Stem::Yi),
];
static MONTHLY_VIRTUE: [Symbol; 12] = [
    S(Stem::Ren),
    S(Stem::Geng),
    S(Stem::Bing),
    S(Stem::Jia),
    S(Stem::Ren),
    S(Stem::Geng),
    S(Stem::Bing),
    S(Stem::Jia),
    S(Stem::Ren),
    S(Stem::Geng),
    S(Stem::Bing),
    S(Stem::Jia),
];

static GENERAL: [Symbol; 12] = [
    B(Zi), B(You), B(Wu), B(Mao), B(Zi), B(You), B(Wu), B(Mao), B(Zi), B(You), B(Wu), B(Mao),
];
static CANOPY: [Symbol; 12] = [
    B(Chen), B(Chou), B(Xu), B(Wei), B(Chen), B(Chou), B(Xu), B(Wei), B(Chen), B(Chou), B(Xu), B(Wei),
];
static POST_HORSE: [Symbol; 12] = [
    B(Yin), B(Hai), B(Shen), B(Si), B(Yin), B(Hai), B(Shen), B(Si), B(Yin), B(Hai), B(Shen), B(Si),
];
static ROBBERY: [Symbol; 12] = [
    B(Si), B(Yin), B(Hai), B(Shen), B(Si), B(Yin), B(Hai), B(Shen), B(Si), B(Yin), B(Hai), B(Shen),
];
static LOST_SPIRIT: [Symbol; 12] = [
    B(Hai), B(Shen), B(Si), B(Yin), B(Hai), B(Shen), B(Si), B(Yin), B(Hai), B(Shen), B(Si), B(Yin),
];
static PEACH_BLOSSOM: [Symbol; 12] = [
    B(You), B(Wu), B(Mao), B(Zi), B(You), B(Wu), B(Mao), B(Zi), B(You), B(Wu), B(Mao), B(Zi),
];

static NOBLEMAN: [&[Symbol]; 10] = [
    &[B(Chou), B(Wei)], // 甲
    &[B(Zi), B(Shen)],  // 乙
    &[B(Hai), B(You)],  // 丙
    &[B(Hai), B(You)],  // 丁
    &[B(Chou), B(Wei)], // 戊
    &[B(Zi), B(Shen)],  // 己
    &[B(Chou), B(Wei)], // 庚
    &[B(Yin), B(Wu)],   // 辛
    &[B(Mao), B(Si)],   // 壬
    &[B(Mao), B(Si)],   // 癸
];
static LITERARY: [&[Symbol]; 10] = [
    &[B(Si)],
    &[B(Wu)],
    &[B(Shen)],
    &[B(You)],
    &[B(Shen)],
    &[B(You)],
    &[B(Hai)],
    &[B(Zi)],
    &[B(Yin)],
    &[B(Mao)],
];
// Yang stems only.
static GOAT_BLADE: [&[Symbol]; 10] = [
    &[B(Mao)],
    &[],
    &[B(Wu)],
    &[],
    &[B(Wu)],
    &[],
    &[B(You)],
    &[],
    &[B(Zi)],
    &[],
];
static RED_BEAUTY: [&[Symbol]; 10] = [
    &[B(Wu)],
    &[B(Wu)],
    &[B(Yin)],
    &[B(Wei)],
    &[B(Chen)],
    &[B(Chen)],
    &[B(Xu)],
    &[B(You)],
    &[B(Zi)],
    &[B(Shen)],
];
static GOLDEN_CARRIAGE: [&[Symbol]; 10] = [
    &[B(Chen)],
    &[B(Si)],
    &[B(Wei)],
    &[B(Shen)],
    &[B(Wei)],
    &[B(Shen)],
    &[B(Xu)],
    &[B(Hai)],
    &[B(Chou)],
    &[B(Yin)],
];
static TAI_JI: [&[Symbol]; 10] = [
    &[B(Zi), B(Wu)],
    &[B(Zi), B(Wu)],
    &[B(Mao), B(You)],
    &[B(Mao), B(You)],
    &[B(Chen), B(Xu), B(Chou), B(Wei)],
    &[B(Chen), B(Xu), B(Chou), B(Wei)],
    &[B(Yin), B(Hai)],
    &[B(Yin), B(Hai)],
    &[B(Si), B(Shen)],
    &[B(Si), B(Shen)],
];

impl Star {
    /// Report label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LonelyStar => "Lonely-Star",
            Self::WidowStar => "Widow-Star",
            Self::RedPhoenix => "Red-Phoenix",
            Self::HeavenlyJoy => "Heavenly-Joy",
            Self::HeavenlyVirtue => "Heavenly-Virtue",
            Self::MonthlyVirtue => "Monthly-Virtue",
            Self::GeneralStar => "General-Star",
            Self::Canopy => "Canopy",
            Self::PostHorse => "Post-Horse",
            Self::Robbery => "Robbery",
            Self::LostSpirit => "Lost-Spirit",
            Self::PeachBlossom => "Peach-Blossom",
            Self::Nobleman => "Nobleman",
            Self::Literary => "Literary",
            Self::GoatBlade => "Goat-Blade",
            Self::RedBeauty => "Red-Beauty",
            Self::GoldenCarriage => "Golden-Carriage",
            Self::TaiJi => "Tai-Ji",
        }
    }

    /// Chinese name.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::LonelyStar => "孤辰",
            Self::WidowStar => "寡宿",
            Self::RedPhoenix => "红鸾",
            Self::HeavenlyJoy => "天喜",
            Self::HeavenlyVirtue => "天德",
            Self::MonthlyVirtue => "月德",
            Self::GeneralStar => "将星",
            Self::Canopy => "华盖",
            Self::PostHorse => "驿马",
            Self::Robbery => "劫煞",
            Self::LostSpirit => "亡神",
            Self::PeachBlossom => "桃花",
            Self::Nobleman => "天乙",
            Self::Literary => "文昌",
            Self::GoatBlade => "阳刃",
            Self::RedBeauty => "红艳",
            Self::GoldenCarriage => "金舆",
            Self::TaiJi => "太极",
        }
    }

    /// Catalog this star belongs to.
    pub const fn catalog(self) -> StarCatalog {
        match self {
            Self::LonelyStar | Self::WidowStar | Self::RedPhoenix | Self::HeavenlyJoy => {
                StarCatalog::YearBranch
            }
            Self::HeavenlyVirtue | Self::MonthlyVirtue => StarCatalog::MonthBranch,
            Self::GeneralStar
            | Self::Canopy
            | Self::PostHorse
            | Self::Robbery
            | Self::LostSpirit
            | Self::PeachBlossom => StarCatalog::DayBranch,
            Self::Nobleman
            | Self::Literary
            | Self::GoatBlade
            | Self::RedBeauty
            | Self::GoldenCarriage
            | Self::TaiJi => StarCatalog::DayMaster,
        }
    }

    /// Targets lit for a branch key. Empty for day-master stars.
    ///
    /// Branch-keyed day stars (Robbery, Lost-Spirit, ...) may also be keyed by
    /// the Year Branch, which is how the sound-element marks use them.
    pub fn targets_for_branch(self, key: Branch) -> &'static [Symbol] {
        let i = key.index() as usize;
        let table: &'static [Symbol; 12] = match self {
            Self::LonelyStar => &LONELY,
            Self::WidowStar => &WIDOW,
            Self::RedPhoenix => &RED_PHOENIX,
            Self::HeavenlyJoy => &HEAVENLY_JOY,
            Self::HeavenlyVirtue => &HEAVENLY_VIRTUE,
            Self::MonthlyVirtue => &MONTHLY_VIRTUE,
            Self::GeneralStar => &GENERAL,
            Self::Canopy => &CANOPY,
            Self::PostHorse => &POST_HORSE,
            Self::Robbery => &ROBBERY,
            Self::LostSpirit => &LOST_SPIRIT,
            Self::PeachBlossom => &PEACH_BLOSSOM,
            _ => return &[],
        };
        std::slice::from_ref(&table[i])
    }

    /// Targets lit for a day-master key. Empty for branch-keyed stars.
    pub fn targets_for_stem(self, key: Stem) -> &'static [Symbol] {
        let i = key.index() as usize;
        match self {
            Self::Nobleman => NOBLEMAN[i],
            Self::Literary => LITERARY[i],
            Self::GoatBlade => GOAT_BLADE[i],
            Self::RedBeauty => RED_BEAUTY[i],
            Self::GoldenCarriage => GOLDEN_CARRIAGE[i],
            Self::TaiJi => TAI_JI[i],
            _ => &[],
        }
    }

    /// Whether a branch key lights `candidate`.
    pub fn lit_by_branch(self, key: Branch, candidate: Symbol) -> bool {
        self.targets_for_branch(key).contains(&candidate)
    }

    /// Whether a day-master key lights `candidate`.
    pub fn lit_by_stem(self, key: Stem, candidate: Symbol) -> bool {
        self.targets_for_stem(key).contains(&candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;
    use crate::deity::{LifeStage, life_stage};
    use crate::stem::ALL_STEMS;

    #[test]
    fn every_branch_keyed_star_has_one_target() {
        for star in YEAR_STARS.iter().chain(&MONTH_STARS).chain(&DAY_STARS) {
            for b in ALL_BRANCHES {
                assert_eq!(star.targets_for_branch(b).len(), 1, "{}", star.name());
            }
            assert!(star.targets_for_stem(Stem::Jia).is_empty());
        }
    }

    #[test]
    fn catalogs_agree_with_lists() {
        for s in YEAR_STARS {
            assert_eq!(s.catalog(), StarCatalog::YearBranch);
        }
        for s in MONTH_STARS {
            assert_eq!(s.catalog(), StarCatalog::MonthBranch);
        }
        for s in DAY_STARS {
            assert_eq!(s.catalog(), StarCatalog::DayBranch);
        }
        for s in DAY_MASTER_STARS {
            assert_eq!(s.catalog(), StarCatalog::DayMaster);
        }
    }

    #[test]
    fn peach_blossom_of_water_triad() {
        for b in [Shen, Zi, Chen] {
            assert!(Star::PeachBlossom.lit_by_branch(b, B(You)));
        }
        assert!(Star::PostHorse.lit_by_branch(Yin, B(Shen)));
    }

    #[test]
    fn goat_blade_is_emperor_of_yang_stems() {
        for s in ALL_STEMS {
            for &t in Star::GoatBlade.targets_for_stem(s) {
                let Symbol::Branch(b) = t else {
                    panic!("goat blade targets a branch");
                };
                assert_eq!(life_stage(s, b), LifeStage::Emperor);
            }
        }
    }

    #[test]
    fn virtue_stars_can_target_stems() {
        assert!(Star::HeavenlyVirtue.lit_by_branch(Yin, S(Stem::Ding)));
        assert!(Star::MonthlyVirtue.lit_by_branch(Wu, S(Stem::Bing)));
        assert!(!Star::MonthlyVirtue.lit_by_branch(Wu, B(Wu)));
    }
}
