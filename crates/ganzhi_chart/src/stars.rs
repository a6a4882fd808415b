//! Star matching across the four catalogs.
//!
//! Positional rules:
//! - year-branch stars light the month, day and hour branches
//! - month-branch stars light any stem or branch; `●` marks a star the
//!   Day Master itself lights
//! - day-branch stars light the year, month and hour branches
//! - day-master stars light any branch

use ganzhi_base::{DAY_MASTER_STARS, DAY_STARS, MONTH_STARS, Star, Symbol, YEAR_STARS};

use crate::context::{ALL_POSITIONS, PillarContext, Position};

const YEAR_TARGETS: [Position; 3] = [Position::Month, Position::Day, Position::Hour];
const DAY_TARGETS: [Position; 3] = [Position::Year, Position::Month, Position::Hour];

/// A star lit at one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LitStar {
    pub star: Star,
    /// Lit by the Day Master stem rather than a branch.
    pub by_day_master: bool,
}

impl LitStar {
    fn label(&self) -> String {
        if self.by_day_master {
            format!("{}●", self.star.name())
        } else {
            self.star.name().to_string()
        }
    }
}

/// Stars lit at each natal position, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StarChart {
    positions: [Vec<LitStar>; 4],
}

impl StarChart {
    pub fn match_stars(ctx: &PillarContext) -> Self {
        let mut chart = Self::default();
        let year = ctx.pillar(Position::Year).branch();
        let month = ctx.pillar(Position::Month).branch();
        let day = ctx.pillar(Position::Day).branch();
        let dm = ctx.day_master();

        for star in YEAR_STARS {
            for pos in YEAR_TARGETS {
                if star.lit_by_branch(year, Symbol::Branch(ctx.pillar(pos).branch())) {
                    chart.light(pos, star, false);
                }
            }
        }
        for star in MONTH_STARS {
            for pos in ALL_POSITIONS {
                let p = ctx.pillar(pos);
                let by_stem = star.lit_by_branch(month, Symbol::Stem(p.stem()));
                if by_stem || star.lit_by_branch(month, Symbol::Branch(p.branch())) {
                    chart.light(pos, star, by_stem && pos == Position::Day);
                }
            }
        }
        for star in DAY_STARS {
            for pos in DAY_TARGETS {
                if star.lit_by_branch(day, Symbol::Branch(ctx.pillar(pos).branch())) {
                    chart.light(pos, star, false);
                }
            }
        }
        for star in DAY_MASTER_STARS {
            for pos in ALL_POSITIONS {
                if star.lit_by_stem(dm, Symbol::Branch(ctx.pillar(pos).branch())) {
                    chart.light(pos, star, false);
                }
            }
        }
        chart
    }

    fn light(&mut self, pos: Position, star: Star, by_day_master: bool) {
        self.positions[pos.index()].push(LitStar {
            star,
            by_day_master,
        });
    }

    pub fn at(&self, position: Position) -> &[LitStar] {
        &self.positions[position.index()]
    }

    pub fn is_lit(&self, position: Position, star: Star) -> bool {
        self.at(position).iter().any(|l| l.star == star)
    }

    /// Total number of lit stars.
    pub fn count(&self) -> usize {
        self.positions.iter().map(Vec::len).sum()
    }

    /// One line per position that lights anything.
    pub fn lines(&self) -> Vec<String> {
        ALL_POSITIONS
            .iter()
            .filter(|pos| !self.at(**pos).is_empty())
            .map(|&pos| {
                let names: Vec<String> = self.at(pos).iter().map(LitStar::label).collect();
                format!("{}: {}", pos.name(), names.join(" "))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ganzhi_base::Sex;

    fn chart(glyphs: [&str; 4]) -> StarChart {
        StarChart::match_stars(&PillarContext::from_glyphs(Sex::Male, glyphs).unwrap())
    }

    #[test]
    fn year_catalog_skips_year_position() {
        // Year 子: Lonely-Star at 寅. Month 寅 lit, year itself never checked.
        let c = chart(["甲子", "丙寅", "戊辰", "庚申"]);
        assert!(c.is_lit(Position::Month, Star::LonelyStar));
        assert!(!c.is_lit(Position::Year, Star::LonelyStar));
    }

    #[test]
    fn day_catalog_skips_day_position() {
        // Day 辰: Post-Horse at 寅 (month), Canopy at 辰 would be the day itself.
        let c = chart(["甲子", "丙寅", "戊辰", "庚申"]);
        assert!(c.is_lit(Position::Month, Star::PostHorse));
        assert!(!c.is_lit(Position::Day, Star::Canopy));
    }

    #[test]
    fn day_master_marks_month_star() {
        // Month 寅: Heavenly-Virtue is 丁, Monthly-Virtue is 丙.
        let c = chart(["甲子", "丙寅", "丙辰", "庚寅"]);
        let day = c.at(Position::Day);
        let mv = day.iter().find(|l| l.star == Star::MonthlyVirtue).unwrap();
        assert!(mv.by_day_master);
        let month = c.at(Position::Month);
        let mv = month.iter().find(|l| l.star == Star::MonthlyVirtue).unwrap();
        assert!(!mv.by_day_master);
        assert!(c.lines().iter().any(|l| l.starts_with("Day: ") && l.contains("Monthly-Virtue●")));
    }

    #[test]
    fn day_master_catalog_checks_every_branch() {
        // 甲 Nobleman at 丑 and 未.
        let c = chart(["乙丑", "丙寅", "甲辰", "辛未"]);
        assert!(c.is_lit(Position::Year, Star::Nobleman));
        assert!(c.is_lit(Position::Hour, Star::Nobleman));
        assert!(!c.is_lit(Position::Day, Star::Nobleman));
    }
}
