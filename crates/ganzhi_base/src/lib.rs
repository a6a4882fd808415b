//! Static sexagenary knowledge tables.
//!
//! This crate provides:
//! - The 10 heavenly stems and 12 earthly branches with element, polarity,
//!   temperature and hidden-stem decomposition
//! - Sexagenary pillars, Xun void pairs and Na-Yin sound elements
//! - The Ten-Deity table (forward and inverse) and the Twelve Life Stages
//! - Branch interaction partners, triads, assemblies and named branch groups
//! - Four star catalogs keyed by year, month and day branch and by day master
//! - Climate regulators, fortune periods, day officers, life palace and
//!   classical corpora
//!
//! Everything here is immutable and process-lifetime; nothing allocates
//! except corpus loading.

pub mod branch;
pub mod deity;
pub mod element;
pub mod error;
pub mod interaction;
pub mod pillar;
pub mod stars;
pub mod stem;
pub mod texts;

pub use branch::{
    ALL_BRANCHES, Branch, HIDDEN_WEIGHT_TOTAL, HiddenStem, HiddenTier, bracketed_between,
    linear_distance,
};
pub use deity::{
    ALL_DEITIES, ALL_LIFE_STAGES, LifeStage, Sex, TEN_DEITIES, TenDeity, TenDeityTable,
    branch_deity, life_stage, stage_branch, stem_with_deity, storage_branch, ten_deity,
};
pub use element::{ALL_ELEMENTS, Element, ElementRelation, Polarity};
pub use error::SymbolError;
pub use interaction::{
    ALL_INTERACTIONS, ASSEMBLIES, BranchGroup, BranchSet, EARTHLY_NET, FOUR_GROWTH, FOUR_PROPER,
    FOUR_STORAGE, HEAVEN_EARTH_NET, HEAVENLY_NET, InteractionKind, TRIADS, arched_center,
    interacts, partners,
};
pub use pillar::{NaYin, Pillar, SEXAGENARY_CYCLE};
pub use stars::{
    DAY_MASTER_STARS, DAY_STARS, MONTH_STARS, Star, StarCatalog, Symbol, YEAR_STARS,
};
pub use stem::{ALL_STEMS, Stem};
pub use texts::{
    ALL_DAY_OFFICERS, Classics, DayOfficer, Quarter, climate_regulators, fortune_note,
    fortune_quarters, life_palace, life_palace_text, parse_hour_key, parse_month_key,
};
