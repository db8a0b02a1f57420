// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden SVG snapshots with bless flow.
// Behavior:
// - Renders each chart kind from fixed rows at a fixed size.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - Else, if a snapshot exists, compares the SVG text exactly.
// - Else, under CI the missing snapshot fails the test.
// - Else, records the snapshot and checks a second, independent render against it.

use std::path::PathBuf;

use energy_charts::{
    BarChart, BarRow, ChartInstance, ChartSpec, DonutChart, DonutRow, LineChart, LineRow, ScatterChart, ScatterRow,
    Size, Theme,
};

fn render<C: ChartSpec>(spec: C, rows: Vec<C::Row>) -> String {
    let mut chart = ChartInstance::new(spec, Theme::light()).with_client_size(Size::new(480.0, 0.0));
    chart.set_rows(rows);
    chart.container().svg().expect("chart rendered").to_string()
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Compare `render()` against the golden file `name.svg`.
fn write_or_compare(name: &str, render: impl Fn() -> String) {
    let snap_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join(format!("{name}.svg"));
    let svg = render();
    assert!(svg.starts_with("<svg"), "not an svg root: {}", &svg[..svg.len().min(40)]);

    if env_flag("UPDATE_SNAPSHOTS") {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &svg).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), svg.len());
        return;
    }

    if !snap_path.exists() {
        assert!(
            !env_flag("CI"),
            "missing snapshot {}; run with UPDATE_SNAPSHOTS=1 and commit it",
            snap_path.display()
        );
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &svg).expect("write snapshot");
        eprintln!("[snapshot] Recorded {}; commit it with the change.", snap_path.display());
    }

    let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
    // A fresh chart instance must reproduce the golden text byte for byte.
    assert_eq!(render(), want, "rendered SVG differs from golden snapshot: {}", snap_path.display());
}

#[test]
fn golden_bar_chart() {
    let rows = vec![
        BarRow { technology: "LCD".into(), mean_energy: 212.4 },
        BarRow { technology: "LED".into(), mean_energy: 171.9 },
        BarRow { technology: "OLED".into(), mean_energy: 245.0 },
    ];
    write_or_compare("bar_chart", || render(BarChart::default(), rows.clone()));
}

#[test]
fn golden_donut_chart() {
    let rows = vec![
        DonutRow { technology: "LCD".into(), value: 310.0 },
        DonutRow { technology: "LED".into(), value: 190.0 },
        DonutRow { technology: "OLED".into(), value: 500.0 },
    ];
    write_or_compare("donut_chart", || render(DonutChart::default(), rows.clone()));
}

#[test]
fn golden_line_chart() {
    let rows: Vec<LineRow> = (0..6)
        .map(|i| {
            let year = 2010.0 + f64::from(i);
            LineRow { year, average: 40.0 + f64::from(i) * 3.0, min: 30.0 + f64::from(i), max: 55.0 + f64::from(i) * 4.0 }
        })
        .collect();
    write_or_compare("line_chart", || render(LineChart::default(), rows.clone()));
}

#[test]
fn golden_scatter_chart() {
    let row = |brand: &str, tech: &str, star: f64, energy: f64, size: f64| ScatterRow {
        brand: brand.into(),
        screen_size: size,
        screen_technology: tech.into(),
        star,
        energy,
        count: 1.0,
    };
    let rows = vec![
        row("Sony", "OLED", 5.0, 180.0, 55.0),
        row("LG", "OLED", 4.5, 220.0, 65.0),
        row("TCL", "LCD", 3.0, 310.0, 43.0),
        row("Hisense", "LED", 2.5, 400.0, 75.0),
    ];
    write_or_compare("scatter_chart", || render(ScatterChart::default(), rows.clone()));
}
