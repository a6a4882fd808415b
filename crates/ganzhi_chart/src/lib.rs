//! Four Pillars chart derivation.
//!
//! This crate provides:
//! - The input contract consumed from a calendar service ([`ChartRequest`])
//! - Element scoring and strength classification
//! - Ten-Deity mapping, branch relationships and structural patterns
//! - Star matching across the four catalogs
//! - Major Cycle and Year Cycle projection
//! - The ordered section [`Report`]
//!
//! Every stage is a pure function of the natal pillars and the static
//! tables in `ganzhi_base`.

pub mod chart;
pub mod context;
pub mod deities;
pub mod error;
pub mod luck;
pub mod luck_types;
pub mod patterns;
pub mod relations;
pub mod report;
pub mod request;
pub mod scores;
pub mod stars;

pub use chart::{Chart, analyze, roots};
pub use context::{ALL_POSITIONS, PillarContext, Position};
pub use deities::{TenDeityMapper, role_label};
pub use error::ChartError;
pub use luck::{
    CYCLE_PILLAR_COUNT, SPECIAL_GROUPS, cycle_pillars, direction, project, special_groups,
    yuan_chen,
};
pub use luck_types::{CycleAnalysis, Direction, HiddenRole, LuckProjection, MajorCycle, YearCycle};
pub use patterns::{
    AugmentedBranches, ClassicalRefs, ComboKind, ComboMatch, NetWarning, StructureReport, augment,
    conception_pillar, day_officer,
};
pub use relations::{Relation, RelationshipTable, describe, relations_against, relations_at};
pub use report::{ALL_SECTIONS, Report, ReportBuilder, Section};
pub use request::{
    BirthInfo, ChartRequest, CycleSpan, MAJOR_CYCLE_COUNT, NatalPillars, YearEntry,
    validate_cycles,
};
pub use scores::{ElementScores, STEM_POINTS, ScoreSheet, StemScores, is_weak, score, score_elements};
pub use stars::{LitStar, StarChart};
