// File: crates/chart-core/tests/charts.rs
// Purpose: Render each chart kind from in-memory rows and inspect the SVG tree.

use energy_charts::{
    BarChart, BarRow, ChartInstance, ChartStatus, DonutChart, DonutRow, LineChart, LineRow, MemorySource,
    ScatterChart, ScatterRow, Size, Theme,
};

fn bar_rows() -> Vec<BarRow> {
    vec![
        BarRow { technology: "LCD".into(), mean_energy: 200.0 },
        BarRow { technology: "LED".into(), mean_energy: 120.0 },
        BarRow { technology: "OLED".into(), mean_energy: 150.0 },
    ]
}

fn donut_rows() -> Vec<DonutRow> {
    vec![
        DonutRow { technology: "LCD".into(), value: 10.0 },
        DonutRow { technology: "LED".into(), value: 20.0 },
        DonutRow { technology: "OLED".into(), value: 70.0 },
    ]
}

fn line_rows() -> Vec<LineRow> {
    vec![
        LineRow { year: 1999.0, average: 30.0, min: 20.0, max: 45.0 },
        LineRow { year: 2000.0, average: 35.0, min: 25.0, max: 60.0 },
        LineRow { year: 2001.0, average: 40.0, min: 28.0, max: 55.0 },
    ]
}

fn scatter_row(brand: &str, tech: &str, star: f64, energy: f64, size: f64) -> ScatterRow {
    ScatterRow {
        brand: brand.into(),
        screen_size: size,
        screen_technology: tech.into(),
        star,
        energy,
        count: 1.0,
    }
}

fn scatter_rows() -> Vec<ScatterRow> {
    vec![
        scatter_row("Sony", "OLED", 4.0, 200.0, 55.0),
        scatter_row("LG", "LCD", 3.0, 320.0, 65.0),
        scatter_row("TCL", "LCD", 5.5, 150.0, f64::NAN),
    ]
}

#[test]
fn bar_draws_one_rect_per_row_down_to_the_baseline() {
    let mut chart = ChartInstance::new(BarChart::default(), Theme::light()).with_client_size(Size::new(400.0, 0.0));
    chart.set_rows(bar_rows());
    assert_eq!(chart.status(), &ChartStatus::Ready);

    let dims = chart.dimensions().unwrap();
    assert_eq!((dims.width, dims.height), (400.0, 320.0));
    let svg = chart.container().svg().expect("svg mounted");
    assert_eq!(svg.get_attr("width"), Some("400"));

    let bars = svg.select_class("bar");
    assert_eq!(bars.len(), 3);
    for bar in &bars {
        let y = bar.attr_f64("y").unwrap();
        let h = bar.attr_f64("height").unwrap();
        assert!((y + h - dims.inner_height()).abs() < 1e-2, "bar bottom {} != {}", y + h, dims.inner_height());
    }
    // Tallest value draws the tallest bar.
    assert!(bars[0].attr_f64("height").unwrap() > bars[2].attr_f64("height").unwrap());

    let legend = &svg.select_class("legend")[0];
    assert_eq!(legend.select_all("rect").len(), 3);
    assert_eq!(legend.text_content(), "LCDLEDOLED");
    assert!(svg.text_content().contains("Mean Energy Consumption (kWh/year)"));
}

#[test]
fn bar_and_scatter_floor_narrow_containers() {
    let mut bar = ChartInstance::new(BarChart::default(), Theme::light()).with_client_size(Size::new(50.0, 0.0));
    bar.set_rows(bar_rows());
    let dims = bar.dimensions().unwrap();
    assert_eq!((dims.width, dims.height), (320.0, 256.0));

    let mut scatter = ChartInstance::new(ScatterChart::default(), Theme::light()).with_client_size(Size::new(50.0, 0.0));
    scatter.set_rows(scatter_rows());
    let dims = scatter.dimensions().unwrap();
    assert_eq!((dims.width, dims.height), (320.0, 300.0));

    let mut line = ChartInstance::new(LineChart::default(), Theme::light()).with_client_size(Size::new(50.0, 0.0));
    line.set_rows(line_rows());
    assert_eq!(line.dimensions().unwrap().height, 300.0);
}

#[test]
fn donut_labels_are_whole_percentages() {
    assert_eq!(DonutChart::percent_labels(&donut_rows()), vec!["10%", "20%", "70%"]);

    let mut chart = ChartInstance::new(DonutChart::default(), Theme::light()).with_client_size(Size::new(600.0, 0.0));
    chart.set_rows(donut_rows());
    let dims = chart.dimensions().unwrap();
    assert_eq!((dims.width, dims.height), (600.0, 350.0));

    let svg = chart.container().svg().unwrap();
    let labels: Vec<String> = svg.select_class("slice-label").iter().map(|t| t.text_content()).collect();
    assert_eq!(labels, vec!["10%", "20%", "70%"]);
    assert_eq!(svg.select_class("slice").len(), 3);
    assert_eq!(chart.targets().len(), 3);
}

#[test]
fn donut_uses_measured_height() {
    let mut chart = ChartInstance::new(DonutChart::default(), Theme::light()).with_client_size(Size::new(500.0, 420.0));
    chart.set_rows(donut_rows());
    assert_eq!(chart.dimensions().unwrap().height, 420.0);
}

#[test]
fn donut_with_zero_total_is_a_render_failure() {
    let mut chart = ChartInstance::new(DonutChart::default(), Theme::light());
    chart.set_rows(vec![DonutRow { technology: "LCD".into(), value: 0.0 }]);
    assert_eq!(chart.container().error_message(), Some("Error rendering donut chart: no slice values to plot"));
    assert!(matches!(chart.status(), ChartStatus::Failed(_)));
}

#[test]
fn line_draws_band_average_and_points() {
    let mut chart = ChartInstance::new(LineChart::default(), Theme::light()).with_client_size(Size::new(800.0, 0.0));
    chart.set_rows(line_rows());
    let svg = chart.container().svg().unwrap();

    assert_eq!(svg.select_class("range").len(), 1);
    assert_eq!(svg.select_class("average").len(), 1);
    assert_eq!(svg.select_class("dot").len(), 3);
    let title = &svg.select_class("chart-title")[0];
    assert_eq!(title.text_content(), "Spot Power Prices (1999–2001) — Min-Max Range");

    // Years run the full plot width.
    let dots = svg.select_class("dot");
    assert_eq!(dots[0].attr_f64("cx"), Some(0.0));
    assert_eq!(dots[2].attr_f64("cx"), Some(chart.dimensions().unwrap().inner_width()));

    let x_labels: Vec<String> = svg.select_class("axis-bottom")[0]
        .select_class("tick")
        .iter()
        .map(|t| t.text_content())
        .collect();
    assert!(x_labels.contains(&"2000".to_string()), "{x_labels:?}");
}

#[test]
fn scatter_excludes_nothing_it_was_given_and_sorts_legend() {
    let mut chart = ChartInstance::new(ScatterChart::default(), Theme::light()).with_client_size(Size::new(600.0, 0.0));
    chart.set_rows(scatter_rows());
    let svg = chart.container().svg().unwrap();

    let points = svg.select_class("point");
    assert_eq!(points.len(), 3);
    // Unknown size draws at the minimum radius.
    assert_eq!(points[2].attr_f64("r"), Some(2.0));
    assert_eq!(svg.select_class("crosshair").len(), 2);
    assert!(svg.select_class("crosshair").iter().all(|l| l.get_attr("display") == Some("none")));
    assert_eq!(svg.select_class("legend")[0].text_content(), "LCDOLED");
}

#[test]
fn scatter_csv_with_blank_star_renders_remaining_rows() {
    let csv = "brand,screensize,screen_tech,star2,energy_consumpt,count\n\
               Sony,55,OLED,4,200,1\n\
               LG,65,LCD,,320,1\n";
    let source = MemorySource::new().with("data/Ex5_TV_energy.csv", csv);
    let mut chart = ChartInstance::new(ScatterChart::default(), Theme::light());
    chart.load(&source);

    assert_eq!(chart.status(), &ChartStatus::Ready);
    assert_eq!(chart.rows().len(), 1);
    assert_eq!(chart.skipped().len(), 1);
    let svg = chart.container().svg().unwrap();
    assert_eq!(svg.select_class("point").len(), 1);
    assert_eq!(svg.select_class("legend")[0].text_content(), "OLED");
}

fn tick_values(svg: &energy_charts::Element, axis: &str) -> Vec<f64> {
    svg.select_class(axis)[0]
        .select_class("tick")
        .iter()
        .map(|t| t.text_content().replace(',', "").parse::<f64>().expect("numeric tick"))
        .collect()
}

#[test]
fn scatter_domains_ignore_skipped_rows() {
    let csv = "brand,screensize,screen_tech,star2,energy_consumpt,count\n\
               Sony,55,OLED,4,200,1\n\
               Panasonic,43,LED,3,180,1\n\
               LG,65,LCD,,9999,1\n\
               X,55,LCD,9,,1\n";
    let source = MemorySource::new().with("data/Ex5_TV_energy.csv", csv);
    let mut chart = ChartInstance::new(ScatterChart::default(), Theme::light()).with_client_size(Size::new(600.0, 0.0));
    chart.load(&source);

    assert_eq!(chart.rows().len(), 2);
    assert_eq!(chart.skipped().len(), 2);
    let svg = chart.container().svg().unwrap();

    let y = tick_values(svg, "axis-left");
    assert!(!y.is_empty());
    assert!(y.iter().all(|v| *v < 1000.0), "energy ticks {y:?}");
    let x = tick_values(svg, "axis-bottom");
    assert!(!x.is_empty());
    assert!(x.iter().all(|v| (2.0..=5.0).contains(v)), "star ticks {x:?}");
    // Only technologies of kept rows reach the legend.
    assert_eq!(svg.select_class("legend")[0].text_content(), "LEDOLED");
}

#[test]
fn render_is_idempotent() {
    let mut chart = ChartInstance::new(ScatterChart::default(), Theme::light()).with_client_size(Size::new(640.0, 0.0));
    chart.set_rows(scatter_rows());
    let first = chart.container().svg().unwrap().to_string();
    chart.render();
    let second = chart.container().svg().unwrap().to_string();
    assert_eq!(first, second);
    assert_eq!(chart.renders(), 2);
}

#[test]
fn render_before_load_is_a_no_op() {
    let mut chart = ChartInstance::new(BarChart::default(), Theme::light());
    chart.render();
    assert_eq!(chart.renders(), 0);
    assert_eq!(chart.status(), &ChartStatus::Loading);
    assert!(chart.container().svg().is_none());
}

#[test]
fn load_failure_shows_error_line() {
    let mut chart = ChartInstance::new(LineChart::default(), Theme::light());
    chart.load(&MemorySource::new());
    assert_eq!(
        chart.container().error_message(),
        Some("Error loading line data: data/Ex5_ARE_Spot_Prices.csv: not found")
    );
    let body = chart.container().body().to_string();
    assert_eq!(
        body,
        "<div class=\"chart-body\"><div class=\"error\">Error loading line data: data/Ex5_ARE_Spot_Prices.csv: not found</div></div>"
    );
    assert_eq!(chart.container().selector(), "#line .chart-body");
}

#[test]
fn empty_bar_data_is_a_render_failure() {
    let mut chart = ChartInstance::new(BarChart::default(), Theme::light());
    chart.set_rows(Vec::new());
    assert_eq!(chart.container().error_message(), Some("Error rendering bar chart: no bars to plot"));
}
