// File: crates/chart-core/benches/render_bench.rs
// Summary: Full parse + render pass per chart kind, and SVG serialization.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use energy_charts::data::parse_csv;
use energy_charts::{ChartInstance, LineChart, LineRow, ScatterChart, ScatterRow, Size, Theme};

fn scatter_csv(n: usize) -> String {
    let techs = ["LCD", "LED", "OLED", "QLED", "Plasma"];
    let mut out = String::from("brand,screensize,screen_tech,star2,energy_consumpt,count\n");
    for i in 0..n {
        let star = 1.0 + (i % 18) as f64 * 0.5;
        let energy = 80.0 + ((i * 37) % 600) as f64;
        out.push_str(&format!("Brand{},{},{},{star},{energy},1\n", i % 40, 24 + i % 60, techs[i % techs.len()]));
    }
    out
}

fn line_rows(n: usize) -> Vec<LineRow> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            LineRow { year: 1900.0 + t, average: 40.0 + (t * 0.3).sin() * 10.0, min: 20.0, max: 70.0 + t * 0.01 }
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg");
    for &n in &[1_000usize, 10_000usize] {
        let csv = scatter_csv(n);
        group.bench_function(format!("scatter_parse_{n}"), |b| {
            b.iter(|| black_box(parse_csv::<ScatterRow>("bench.csv", &csv).expect("parse")));
        });

        let rows = parse_csv::<ScatterRow>("bench.csv", &csv).expect("parse").rows;
        let mut chart = ChartInstance::new(ScatterChart::default(), Theme::light()).with_client_size(Size::new(800.0, 0.0));
        chart.set_rows(rows);
        group.bench_function(format!("scatter_render_{n}"), |b| {
            b.iter(|| {
                chart.render();
                black_box(chart.container().svg().map(|s| s.to_string()));
            });
        });

        let mut line = ChartInstance::new(LineChart::default(), Theme::light()).with_client_size(Size::new(800.0, 0.0));
        line.set_rows(line_rows(n));
        group.bench_function(format!("line_render_{n}"), |b| {
            b.iter(|| {
                line.render();
                black_box(line.renders());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
