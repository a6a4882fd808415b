//! Request builders shared by the integration tests.

#![allow(dead_code)]

use ganzhi_base::{Pillar, Sex};
use ganzhi_chart::{BirthInfo, ChartRequest, CycleSpan, NatalPillars, YearEntry};

pub fn pillar(s: &str) -> Pillar {
    Pillar::parse(s).unwrap()
}

/// Ten contiguous ten-year spans starting at `first_year`, age `first_age`.
pub fn spans(first_year: i32, first_age: u32, first_pillar: Pillar) -> Vec<CycleSpan> {
    (0..10)
        .map(|c| {
            let start_year = first_year + 10 * c;
            let start_age = first_age + 10 * c as u32;
            let years = (0..10)
                .map(|y| YearEntry {
                    year: start_year + y,
                    age: start_age + y as u32,
                    pillar: first_pillar.step(10 * c + y),
                })
                .collect();
            CycleSpan {
                start_age,
                start_year,
                years,
            }
        })
        .collect()
}

/// A request for the given natal glyphs, with cycles starting in 1990.
pub fn request(sex: Sex, glyphs: [&str; 4]) -> ChartRequest {
    ChartRequest {
        sex,
        pillars: NatalPillars {
            year: pillar(glyphs[0]),
            month: pillar(glyphs[1]),
            day: pillar(glyphs[2]),
            hour: pillar(glyphs[3]),
        },
        birth: BirthInfo {
            solar: Some("1984-02-20 08:30".into()),
            lunar: Some("1984-01-19 08:30".into()),
            cycle_start: Some("1990-03-01".into()),
            prev_solar_term: None,
            next_solar_term: None,
            mansion: Some("Heart".into()),
        },
        cycles: spans(1990, 7, pillar("庚午")),
    }
}
