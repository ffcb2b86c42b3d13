use astral_chart::rendering::ChartSpecGenerator;
use astral_chart::{
    compute_layout, AspectEntry, AspectType, ChartData, ChartGeometryConfig, ChartPoint,
    HouseCusps,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const BODIES: [&str; 12] = [
    "Sun", "Moon", "Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto",
    "Chiron", "NorthNode",
];

fn full_chart() -> ChartData {
    let mut chart = ChartData {
        houses: HouseCusps::from_degrees([
            100.0, 128.0, 157.0, 188.0, 221.0, 252.0, 280.0, 308.0, 337.0, 8.0, 41.0, 72.0,
        ]),
        ..ChartData::default()
    };
    for (i, name) in BODIES.iter().enumerate() {
        chart
            .points
            .insert(name.to_string(), ChartPoint::at(i as f64 * 29.3 + 3.0));
    }
    for (i, first) in BODIES.iter().enumerate() {
        for second in &BODIES[i + 1..] {
            let aspect_type = AspectType::ALL[(i + second.len()) % AspectType::ALL.len()];
            chart
                .aspects
                .push(AspectEntry::new(first, second, aspect_type));
        }
    }
    chart
}

fn bench_compute_layout(c: &mut Criterion) {
    let chart = full_chart();
    let config = ChartGeometryConfig::default();

    c.bench_function("compute_layout", |b| {
        b.iter(|| compute_layout(black_box(&chart), black_box(&config)))
    });
}

fn bench_generate_chart_spec(c: &mut Criterion) {
    let chart = full_chart();
    let layout = match compute_layout(&chart, &ChartGeometryConfig::default()) {
        Ok(layout) => layout,
        Err(e) => panic!("bench chart failed to lay out: {}", e),
    };
    let generator = ChartSpecGenerator::new();

    c.bench_function("generate_chart_spec", |b| {
        b.iter(|| generator.generate(black_box(&layout)))
    });
}

criterion_group!(benches, bench_compute_layout, bench_generate_chart_spec);
criterion_main!(benches);
