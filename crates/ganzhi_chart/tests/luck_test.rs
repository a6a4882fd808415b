//! Integration tests for Major Cycle and Year Cycle projection.

mod common;

use common::{pillar, request};
use ganzhi_base::{Branch, FOUR_PROPER, InteractionKind, LifeStage, Sex};
use ganzhi_chart::{Chart, Direction, MAJOR_CYCLE_COUNT};

#[test]
fn ten_cycles_stepping_one_position() {
    for (sex, dir) in [(Sex::Male, Direction::Forward), (Sex::Female, Direction::Backward)] {
        // 甲 year stem is yang.
        let chart = Chart::derive(&request(sex, ["甲子", "丙寅", "戊辰", "庚申"])).unwrap();
        let luck = &chart.luck;
        assert_eq!(luck.direction, dir);
        assert_eq!(luck.cycles.len(), MAJOR_CYCLE_COUNT);

        let mut prev = chart.context.pillars()[1];
        for cycle in &luck.cycles {
            let p = cycle.pillar();
            let ds = (p.stem().index() as i32 - prev.stem().index() as i32).rem_euclid(10);
            let db = (p.branch().index() as i32 - prev.branch().index() as i32).rem_euclid(12);
            let (es, eb) = match dir {
                Direction::Forward => (1, 1),
                Direction::Backward => (9, 11),
            };
            assert_eq!((ds, db), (es, eb), "cycle {}", cycle.order);
            prev = p;
        }
    }
}

#[test]
fn reported_cycles_are_first_ten_pillars() {
    let chart = Chart::derive(&request(Sex::Male, ["甲子", "丙寅", "戊辰", "庚申"])).unwrap();
    for (cycle, p) in chart.luck.cycles.iter().zip(chart.luck.pillars) {
        assert_eq!(cycle.pillar(), p);
    }
    assert_eq!(chart.luck.pillars[0], pillar("丁卯"));
}

#[test]
fn year_cycles_contiguous_and_cover_spans() {
    let chart = Chart::derive(&request(Sex::Male, ["甲子", "丙寅", "戊辰", "庚申"])).unwrap();
    let cycles = &chart.luck.cycles;
    for pair in cycles.windows(2) {
        assert_eq!(pair[1].start_year, pair[0].end_year() + 1);
        assert_eq!(pair[1].start_age, pair[0].start_age + pair[0].years.len() as u32);
    }
    for c in cycles {
        assert!(!c.years.is_empty());
        assert_eq!(c.years[0].year, c.start_year);
        for w in c.years.windows(2) {
            assert_eq!(w[1].year, w[0].year + 1);
        }
    }
}

#[test]
fn year_relations_include_major_cycle_branch() {
    let chart = Chart::derive(&request(Sex::Male, ["甲子", "丙寅", "戊辰", "庚申"])).unwrap();
    let first = &chart.luck.cycles[0];
    assert_eq!(first.pillar(), pillar("丁卯"));

    // 1990 庚午 clashes the natal 子.
    let y0 = &first.years[0];
    assert_eq!(y0.analysis.pillar, pillar("庚午"));
    assert!(
        y0.analysis
            .relations
            .iter()
            .any(|r| r.kind == InteractionKind::Clash && r.partner == Branch::Zi)
    );

    // 1991 辛未 forms a triad pair with the cycle's 卯, which is not natal.
    let y1 = &first.years[1];
    assert_eq!(y1.analysis.pillar, pillar("辛未"));
    assert!(
        y1.analysis
            .relations
            .iter()
            .any(|r| r.kind == InteractionKind::Triad && r.partner == Branch::Mao)
    );
}

#[test]
fn year_cycles_skip_break() {
    let chart = Chart::derive(&request(Sex::Male, ["甲子", "丙寅", "戊辰", "庚申"])).unwrap();
    for cycle in &chart.luck.cycles {
        for y in &cycle.years {
            assert!(y.analysis.relations.iter().all(|r| r.kind != InteractionKind::Break));
        }
    }
}

#[test]
fn year_cycles_flag_special_groups() {
    // Natal 子午: Major Cycle 丁卯 plus a 酉 year completes Four-Proper.
    let chart = Chart::derive(&request(Sex::Male, ["甲子", "丙寅", "戊午", "庚申"])).unwrap();
    let first = &chart.luck.cycles[0];
    let you = first
        .years
        .iter()
        .find(|y| y.analysis.pillar.branch() == Branch::You)
        .unwrap();
    assert_eq!(you.specials, vec![FOUR_PROPER]);
    let lines = chart.luck.table_lines();
    assert!(lines.iter().any(|l| l.contains("Four-Proper 子午卯酉")));
}

#[test]
fn table_has_cycle_and_year_lines() {
    let chart = Chart::derive(&request(Sex::Male, ["甲子", "丙寅", "戊辰", "庚申"])).unwrap();
    let lines = chart.luck.table_lines();
    let majors = lines.iter().filter(|l| l.starts_with("Major Cycle ")).count();
    let years = lines.iter().filter(|l| l.starts_with("Year Cycle: ")).count();
    assert_eq!(majors, 10);
    assert_eq!(years, 100);
}

#[test]
fn cycle_lines_show_day_master_life_stage() {
    let chart = Chart::derive(&request(Sex::Male, ["甲子", "丙寅", "甲辰", "庚午"])).unwrap();
    let first = &chart.luck.cycles[0];
    assert_eq!(first.pillar(), pillar("丁卯"));
    assert_eq!(first.analysis.stage, LifeStage::Emperor);
    // 1990 庚午: 甲 at 午 is Death.
    assert_eq!(first.years[0].analysis.stage, LifeStage::Death);

    let lines = chart.luck.table_lines();
    assert!(lines[0].starts_with("Major Cycle 1: "));
    assert!(lines[0].contains("Plunderer:卯 Emperor Hidden:"), "{}", lines[0]);
    assert!(lines[1].contains("Hurting-Officer:午 Death Hidden:"), "{}", lines[1]);
}

#[test]
fn major_cycles_bracket_equal_stem_natal_branches() {
    // Forward from 丙寅: 丁卯 戊辰 己巳 庚午 辛未 壬申 癸酉 甲戌 乙亥 丙子.
    let chart = Chart::derive(&request(Sex::Male, ["甲子", "丙寅", "戊辰", "庚申"])).unwrap();
    let cycles = &chart.luck.cycles;

    // 庚午 against natal 庚申: two apart.
    assert_eq!(cycles[3].pillar(), pillar("庚午"));
    assert_eq!(cycles[3].analysis.brackets, vec![Branch::Wei]);
    // 丙子 against natal 丙寅.
    assert_eq!(cycles[9].pillar(), pillar("丙子"));
    assert_eq!(cycles[9].analysis.brackets, vec![Branch::Chou]);
    // 甲戌 against natal 甲子: ten apart, enclosing 亥 across the wrap.
    assert_eq!(cycles[7].pillar(), pillar("甲戌"));
    assert_eq!(cycles[7].analysis.brackets, vec![Branch::Hai]);
    // 戊辰 repeats the natal 戊辰; nothing is enclosed.
    assert!(cycles[1].analysis.brackets.is_empty());
    // Unequal stems never bracket.
    assert!(cycles[0].analysis.brackets.is_empty());

    let lines = chart.luck.table_lines();
    let line = |n: u8| {
        let prefix = format!("Major Cycle {n}: ");
        lines.iter().find(|l| l.starts_with(&prefix)).unwrap().clone()
    };
    assert!(line(4).ends_with(" --Bracket 未"), "{}", line(4));
    assert!(line(8).contains(" --Bracket 亥"));
    assert!(line(10).contains(" --Bracket 丑"));
    assert!(!line(1).contains("--Bracket"));
}
