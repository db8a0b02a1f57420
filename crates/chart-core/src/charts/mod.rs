// File: crates/chart-core/src/charts/mod.rs
// Summary: Chart kind trait (row schema, sizing, drawing, hover styling) and the four kinds.

pub mod bar;
pub mod donut;
pub mod line;
pub mod scatter;

use std::fmt;

use crate::data::{ParseOutcome, RawRow, RowSchema};
use crate::error::ChartResult;
use crate::interaction::{Crosshair, HitTarget};
use crate::svg::Element;
use crate::theme::Theme;
use crate::types::{Dimensions, Size};

pub use bar::{BarChart, BarRow};
pub use donut::{DonutChart, DonutRow};
pub use line::{LineChart, LineRow};
pub use scatter::{ScatterChart, ScatterRow};

/// Output of one render pass: a fresh SVG root plus what the pointer can hit.
#[derive(Clone, Debug)]
pub struct Drawing {
    pub svg: Element,
    pub targets: Vec<HitTarget>,
    pub crosshair: Option<Crosshair>,
}

/// Everything that differs between chart kinds. The shared pipeline lives in
/// [`crate::chart::ChartInstance`].
pub trait ChartSpec {
    type Row: RowSchema + Clone + fmt::Debug;

    /// Short name used in ids, selectors and error lines (`"bar"`).
    fn label(&self) -> &'static str;

    /// CSV path handed to the [`crate::data::CsvSource`].
    fn data_path(&self) -> &str;

    /// Render size for a container measured at `measured`, floors applied.
    fn dimensions(&self, measured: Size) -> Dimensions;

    fn draw(&self, rows: &[Self::Row], dims: &Dimensions, theme: &Theme) -> ChartResult<Drawing>;

    fn tooltip_html(&self, row: &Self::Row) -> String;

    /// Emphasis applied to a shape element in its base state.
    fn highlight(&self, shape: &mut Element, target: &HitTarget, theme: &Theme);

    /// Undo [`ChartSpec::highlight`], leaving the element in its base state.
    fn unhighlight(&self, shape: &mut Element, target: &HitTarget, theme: &Theme);
}

pub(crate) const TECH_COLUMN: &str = "Screen_Tech";
pub(crate) const MEAN_ENERGY_COLUMN: &str = "Mean(Labelled energy consumption (kWh/year))";

/// Shared (technology, value) cast for the per-technology summary files.
/// Values must be finite and non-negative.
pub(crate) fn parse_tech_value(row: &RawRow<'_>) -> ParseOutcome<(String, f64)> {
    let Some(tech) = row.non_empty(TECH_COLUMN) else {
        return ParseOutcome::Skipped("missing screen technology".to_string());
    };
    match row.number(MEAN_ENERGY_COLUMN) {
        Some(v) if v >= 0.0 => ParseOutcome::Row((tech.to_string(), v)),
        Some(v) => ParseOutcome::Skipped(format!("negative energy value {v}")),
        None => ParseOutcome::Skipped(format!(
            "energy value `{}` is not a number",
            row.get(MEAN_ENERGY_COLUMN).unwrap_or("")
        )),
    }
}

/// `id` of the `i`th shape of chart `label`.
pub(crate) fn shape_id(label: &str, i: usize) -> String {
    format!("{label}-shape-{i}")
}

/// Outer `<svg>` element every chart starts from.
pub(crate) fn svg_root(label: &str, dims: &Dimensions) -> Element {
    Element::new("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("class", format!("chart {label}-chart"))
        .attr("width", crate::text::num(dims.width))
        .attr("height", crate::text::num(dims.height))
        .attr("viewBox", format!("0 0 {} {}", crate::text::num(dims.width), crate::text::num(dims.height)))
}
