use criterion::{black_box, criterion_group, criterion_main, Criterion};

use simulation::catalogue::all_scenario_tables;
use simulation::interpolation::{interpolate, BreakpointTable};
use simulation::selection::{Projections, ScenarioSelection};

const XS: [f64; 4] = [0.0, 500.0, 1000.0, 1500.0];
const YS: [f64; 4] = [100.0, 75.0, 55.0, 40.0];

fn bench_interpolate(c: &mut Criterion) {
    c.bench_function("interpolate_validated_each_call", |b| {
        b.iter(|| interpolate(black_box(&XS), black_box(&YS), black_box(750.0)))
    });

    let table = BreakpointTable::new(&XS, &YS).expect("valid table");
    c.bench_function("breakpoint_table_value", |b| {
        b.iter(|| table.value(black_box(750.0)))
    });
}

fn bench_recompute(c: &mut Criterion) {
    let selection = ScenarioSelection::default();
    c.bench_function("recompute_all_modules", |b| {
        b.iter(|| Projections::compute(black_box(&selection)))
    });
}

fn bench_catalogue(c: &mut Criterion) {
    c.bench_function("all_scenario_tables", |b| b.iter(all_scenario_tables));
}

criterion_group!(benches, bench_interpolate, bench_recompute, bench_catalogue);
criterion_main!(benches);
