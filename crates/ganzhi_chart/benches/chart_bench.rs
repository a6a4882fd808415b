use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ganzhi_base::{Classics, Pillar, Sex};
use ganzhi_chart::{
    BirthInfo, Chart, ChartRequest, CycleSpan, NatalPillars, PillarContext, RelationshipTable,
    StarChart, TenDeityMapper, YearEntry, analyze, score,
};

fn sample_request() -> ChartRequest {
    let p = |s: &str| Pillar::parse(s).unwrap_or_else(|e| panic!("{e}"));
    let first = p("庚午");
    let cycles = (0..10)
        .map(|c| CycleSpan {
            start_age: 7 + 10 * c as u32,
            start_year: 1990 + 10 * c,
            years: (0..10)
                .map(|y| YearEntry {
                    year: 1990 + 10 * c + y,
                    age: 7 + (10 * c + y) as u32,
                    pillar: first.step(10 * c + y),
                })
                .collect(),
        })
        .collect();
    ChartRequest {
        sex: Sex::Male,
        pillars: NatalPillars {
            year: p("甲子"),
            month: p("丙寅"),
            day: p("戊辰"),
            hour: p("庚申"),
        },
        birth: BirthInfo::default(),
        cycles,
    }
}

fn stage_bench(c: &mut Criterion) {
    let req = sample_request();
    let ctx = PillarContext::new(req.sex, &req.pillars);
    let mapper = TenDeityMapper::for_chart(&ctx);

    let mut group = c.benchmark_group("stages");
    group.bench_function("score", |b| b.iter(|| score(black_box(&ctx), &mapper)));
    group.bench_function("relationships", |b| {
        b.iter(|| RelationshipTable::analyze(black_box(&ctx)))
    });
    group.bench_function("stars", |b| b.iter(|| StarChart::match_stars(black_box(&ctx))));
    group.finish();
}

fn full_bench(c: &mut Criterion) {
    let req = sample_request();
    let classics = Classics::builtin();

    let mut group = c.benchmark_group("chart");
    group.bench_function("derive", |b| b.iter(|| Chart::derive(black_box(&req))));
    group.bench_function("analyze", |b| {
        b.iter(|| analyze(black_box(&req), black_box(&classics)))
    });
    group.finish();
}

criterion_group!(benches, stage_bench, full_bench);
criterion_main!(benches);
