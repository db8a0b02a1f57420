// File: crates/chart-core/tests/data.rs
// Purpose: CSV parsing per chart schema: kept rows, skipped rows and load failures.

use energy_charts::data::{load, parse_csv, strip_non_numeric};
use energy_charts::{BarRow, ChartError, CsvSource, DonutRow, FileSource, LineRow, MemorySource, ScatterRow};

const TECH_HEADER: &str = "Screen_Tech,Mean(Labelled energy consumption (kWh/year))";

#[test]
fn bar_rows_skip_malformed_values() {
    let text = format!("{TECH_HEADER}\nLCD,200\nOLED,abc\n,50\nLED,-3\nLED,120.5\nQLED,NaN\n");
    let parsed = parse_csv::<BarRow>("bar.csv", &text).expect("parse");

    assert_eq!(
        parsed.rows,
        vec![
            BarRow { technology: "LCD".into(), mean_energy: 200.0 },
            BarRow { technology: "LED".into(), mean_energy: 120.5 },
        ]
    );
    let lines: Vec<u64> = parsed.skipped.iter().map(|s| s.line).collect();
    assert_eq!(lines, vec![3, 4, 5, 7]);
    // Whatever was skipped, the domain max is finite.
    let max = parsed.rows.iter().map(|r| r.mean_energy).fold(f64::NEG_INFINITY, f64::max);
    assert!(max.is_finite());
}

#[test]
fn donut_rows_trim_cells_and_headers() {
    let text = " Screen_Tech , Mean(Labelled energy consumption (kWh/year)) \n LCD , 10 \nOLED,20\n";
    let parsed = parse_csv::<DonutRow>("donut.csv", text).expect("parse");
    assert_eq!(parsed.rows.len(), 2);
    assert_eq!(parsed.rows[0], DonutRow { technology: "LCD".into(), value: 10.0 });
    assert!(parsed.skipped.is_empty());
}

#[test]
fn missing_required_column_fails_the_load() {
    let err = parse_csv::<BarRow>("bar.csv", "Tech,Value\nLCD,1\n").unwrap_err();
    assert!(err.is_load_failure());
    match err {
        ChartError::DataLoad { path, message } => {
            assert_eq!(path, "bar.csv");
            assert!(message.contains("Screen_Tech"), "{message}");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn empty_file_has_no_header_row() {
    let err = parse_csv::<ScatterRow>("scatter.csv", "").unwrap_err();
    assert!(err.to_string().contains("missing header row"), "{err}");
}

#[test]
fn line_average_falls_back_to_median() {
    let text = "Year,NSW,VIC,QLD,Average Price (notTas-Snowy)\n2001,10,20,30,\n";
    let parsed = parse_csv::<LineRow>("line.csv", text).expect("parse");
    assert_eq!(parsed.rows, vec![LineRow { year: 2001.0, average: 20.0, min: 10.0, max: 30.0 }]);
}

#[test]
fn line_median_of_even_count_is_mean_of_middle_pair() {
    let text = "Year,A,B,C,D\n2005,40,10,30,20\n";
    let parsed = parse_csv::<LineRow>("line.csv", text).expect("parse");
    assert_eq!(parsed.rows[0].average, 25.0);
}

#[test]
fn line_strips_currency_and_sorts_by_year() {
    let text = "Year,NSW,VIC,Average Price (notTas-Snowy)\n\
                2003,$40.00,$60.00,$55.50\n\
                2001,\"$1,000\",n/a,\n\
                ,1,2,3\n\
                2002,,,\n";
    let parsed = parse_csv::<LineRow>("line.csv", text).expect("parse");

    let years: Vec<f64> = parsed.rows.iter().map(|r| r.year).collect();
    assert_eq!(years, vec![2001.0, 2003.0]);
    assert_eq!(parsed.rows[0].average, 1000.0);
    assert_eq!(parsed.rows[1].average, 55.5);
    assert_eq!((parsed.rows[1].min, parsed.rows[1].max), (40.0, 60.0));
    // blank year, then a year with no prices
    assert_eq!(parsed.skipped.len(), 2);
}

#[test]
fn scatter_drops_unrated_rows_and_fills_defaults() {
    let text = "brand,screensize,screen_tech,star2,energy_consumpt,count\n\
                Sony,55,LCD,4,200,\n\
                LG,,OLED,,150,2\n\
                TCL,,,3.5,300,3\n";
    let parsed = parse_csv::<ScatterRow>("scatter.csv", text).expect("parse");

    assert_eq!(parsed.rows.len(), 2);
    let sony = &parsed.rows[0];
    assert_eq!((sony.brand.as_str(), sony.screen_size, sony.count), ("Sony", 55.0, 1.0));
    let tcl = &parsed.rows[1];
    assert_eq!(tcl.screen_technology, "Unknown");
    assert!(tcl.screen_size.is_nan());
    assert_eq!(tcl.count, 3.0);
    assert_eq!(parsed.skipped.len(), 1);
    assert_eq!(parsed.skipped[0].line, 3);
}

#[test]
fn strip_non_numeric_keeps_digits_dot_and_minus() {
    assert_eq!(strip_non_numeric("$-1,234.50 AUD"), "-1234.50");
    assert_eq!(strip_non_numeric("n/a"), "");
}

#[test]
fn memory_source_reports_unknown_paths() {
    let source = MemorySource::new().with("a.csv", "x\n1\n");
    assert_eq!(source.fetch("a.csv").unwrap(), "x\n1\n");
    let err = source.fetch("b.csv").unwrap_err();
    assert_eq!(err.to_string(), "b.csv: not found");
}

#[test]
fn file_source_resolves_relative_to_root() {
    let root = std::env::temp_dir().join(format!("energy-charts-data-{}", std::process::id()));
    std::fs::create_dir_all(root.join("data")).unwrap();
    std::fs::write(root.join("data/bar.csv"), format!("{TECH_HEADER}\nLCD,1\n")).unwrap();

    let source = FileSource::new(&root);
    let parsed = load::<BarRow>(&source, "data/bar.csv").expect("load");
    assert_eq!(parsed.rows.len(), 1);

    // Read failures carry the resolved path, not an I/O wrapper.
    let err = load::<BarRow>(&source, "data/missing.csv").unwrap_err();
    assert!(err.is_load_failure());
    match err {
        ChartError::DataLoad { path, .. } => assert!(path.ends_with("missing.csv"), "{path}"),
        other => panic!("unexpected error {other:?}"),
    }
    assert!(!ChartError::render("no rows").is_load_failure());

    std::fs::remove_dir_all(&root).ok();
}
