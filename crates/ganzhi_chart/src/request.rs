//! Input contract: the Calendar Service output the engine consumes.

use ganzhi_base::{Pillar, Sex};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Number of Major Cycles a chart reports.
pub const MAJOR_CYCLE_COUNT: usize = 10;

/// The four natal pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatalPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl NatalPillars {
    /// Pillars in year, month, day, hour order.
    pub const fn as_array(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

/// Calendar strings passed through to the Basic Info section verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirthInfo {
    /// Gregorian birth date and time.
    pub solar: Option<String>,
    /// Lunar birth date and time.
    pub lunar: Option<String>,
    /// Date the first Major Cycle begins.
    pub cycle_start: Option<String>,
    /// Solar term preceding the birth.
    pub prev_solar_term: Option<String>,
    /// Solar term following the birth.
    pub next_solar_term: Option<String>,
    /// Lunar mansion of the birth day.
    pub mansion: Option<String>,
}

/// One calendar year inside a Major Cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearEntry {
    /// Calendar year.
    pub year: i32,
    /// Nominal age in that year.
    pub age: u32,
    /// Year pillar.
    pub pillar: Pillar,
}

/// The calendar span of one Major Cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleSpan {
    /// Age at which the cycle starts.
    pub start_age: u32,
    /// Calendar year in which the cycle starts.
    pub start_year: i32,
    /// Year Cycles in calendar order.
    pub years: Vec<YearEntry>,
}

/// A full analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub sex: Sex,
    pub pillars: NatalPillars,
    #[serde(default)]
    pub birth: BirthInfo,
    /// Spans of the 10 reported Major Cycles, in order.
    pub cycles: Vec<CycleSpan>,
}

impl ChartRequest {
    /// Check the cycle spans against the contract the projector relies on.
    pub fn validate(&self) -> Result<(), ChartError> {
        validate_cycles(&self.cycles)
    }
}

/// Check Major-Cycle spans: exactly [`MAJOR_CYCLE_COUNT`] spans, none empty,
/// each starting at its declared year and age, and every Year Cycle one
/// year, one age and one sexagenary step after the previous one.
pub fn validate_cycles(cycles: &[CycleSpan]) -> Result<(), ChartError> {
    if cycles.len() != MAJOR_CYCLE_COUNT {
        return Err(ChartError::upstream(format!(
            "expected {MAJOR_CYCLE_COUNT} major cycles, got {}",
            cycles.len()
        )));
    }

    let mut prev: Option<&YearEntry> = None;
    for (n, span) in cycles.iter().enumerate() {
        let Some(first) = span.years.first() else {
            return Err(ChartError::upstream(format!("major cycle {n} has no years")));
        };
        if first.year != span.start_year || first.age != span.start_age {
            return Err(ChartError::upstream(format!(
                "major cycle {n} starts at {}/{} but its first year is {}/{}",
                span.start_year, span.start_age, first.year, first.age
            )));
        }
        for entry in &span.years {
            if let Some(p) = prev {
                check_successor(n, p, entry)?;
            }
            prev = Some(entry);
        }
    }
    Ok(())
}

fn check_successor(cycle: usize, prev: &YearEntry, next: &YearEntry) -> Result<(), ChartError> {
    let follows = prev.year.checked_add(1) == Some(next.year)
        && prev.age.checked_add(1) == Some(next.age);
    if !follows {
        return Err(ChartError::upstream(format!(
            "major cycle {cycle}: year {} (age {}) does not follow {} (age {})",
            next.year, next.age, prev.year, prev.age
        )));
    }
    if next.pillar != prev.pillar.step(1) {
        return Err(ChartError::upstream(format!(
            "major cycle {cycle}: pillar {} for {} does not follow {}",
            next.pillar, next.year, prev.pillar
        )));
    }
    Ok(())
}
