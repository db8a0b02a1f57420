// File: crates/chart-core/src/charts/line.rs
// Summary: Yearly spot power prices as an average line over a min-max band.

use crate::axis::{bottom_title, left_title, Axis, Orient, TickFormat};
use crate::charts::{shape_id, svg_root, ChartSpec, Drawing};
use crate::data::{parse_number, strip_non_numeric, ParseOutcome, RawRow, RowSchema};
use crate::error::{ChartError, ChartResult};
use crate::geometry::Point;
use crate::interaction::{HitShape, HitTarget};
use crate::legend::{Flow, Legend, LegendItem};
use crate::scale::{self, LinearScale};
use crate::svg::{translate, Element};
use crate::text::{format_fixed, num};
use crate::theme::Theme;
use crate::types::{floor_width, proportional_height, Dimensions, Insets, Size};

pub const LINE_DATA: &str = "data/Ex5_ARE_Spot_Prices.csv";

pub(crate) const YEAR_COLUMN: &str = "Year";
pub(crate) const AVERAGE_COLUMN: &str = "Average Price (notTas-Snowy)";

const MARGINS: Insets = Insets::new(80.0, 60.0, 50.0, 70.0);
const POINT_RADIUS: f64 = 4.0;
const HOVER_RADIUS: f64 = 6.0;
const BAND_OPACITY: f64 = 0.3;

/// One year of prices across regions.
#[derive(Clone, Debug, PartialEq)]
pub struct LineRow {
    pub year: f64,
    /// Published average, or the regional median when none is given.
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

impl RowSchema for LineRow {
    const REQUIRED: &'static [&'static str] = &[YEAR_COLUMN];

    fn parse(row: &RawRow<'_>) -> ParseOutcome<Self> {
        let Some(year) = row.number(YEAR_COLUMN) else {
            return ParseOutcome::Skipped(format!("year `{}` is not a number", row.get(YEAR_COLUMN).unwrap_or("")));
        };
        let values: Vec<f64> = row
            .columns()
            .filter(|(name, _)| *name != YEAR_COLUMN && *name != AVERAGE_COLUMN)
            .filter_map(|(_, cell)| parse_number(&strip_non_numeric(cell)))
            .collect();
        let (Some((min, max)), Some(median)) = (scale::extent(values.iter().copied()), scale::median(&values)) else {
            return ParseOutcome::Skipped(format!("no regional prices for year {}", num(year)));
        };
        let average = row
            .non_empty(AVERAGE_COLUMN)
            .and_then(|cell| parse_number(&strip_non_numeric(cell)))
            .unwrap_or(median);
        ParseOutcome::Row(Self { year, average, min, max })
    }

    fn finish(rows: &mut Vec<Self>) {
        rows.sort_by(|a, b| a.year.total_cmp(&b.year));
    }
}

#[derive(Clone, Debug)]
pub struct LineChart {
    path: String,
}

impl LineChart {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Title naming the first and last year on record.
    pub fn title(rows: &[LineRow]) -> String {
        match scale::extent(rows.iter().map(|r| r.year)) {
            Some((first, last)) => format!("Spot Power Prices ({}–{}) — Min-Max Range", num(first), num(last)),
            None => "Spot Power Prices — Min-Max Range".to_string(),
        }
    }
}

impl Default for LineChart {
    fn default() -> Self {
        Self::new(LINE_DATA)
    }
}

fn polyline(points: impl IntoIterator<Item = Point>) -> String {
    let mut d = String::new();
    for (i, p) in points.into_iter().enumerate() {
        d.push(if i == 0 { 'M' } else { 'L' });
        d.push_str(&format!("{},{}", num(p.x), num(p.y)));
    }
    d
}

/// Closed region between the `max` edge (left to right) and the `min` edge (back).
fn band_path(rows: &[LineRow], x: &LinearScale, y: &LinearScale) -> String {
    let upper = rows.iter().map(|r| Point::new(x.apply(r.year), y.apply(r.max)));
    let lower = rows.iter().rev().map(|r| Point::new(x.apply(r.year), y.apply(r.min)));
    let mut d = polyline(upper.chain(lower));
    d.push('Z');
    d
}

impl ChartSpec for LineChart {
    type Row = LineRow;

    fn label(&self) -> &'static str {
        "line"
    }

    fn data_path(&self) -> &str {
        &self.path
    }

    fn dimensions(&self, measured: Size) -> Dimensions {
        let width = floor_width(measured.width);
        Dimensions::new(width, proportional_height(width, 0.6, 300.0), MARGINS)
    }

    fn draw(&self, rows: &[LineRow], dims: &Dimensions, theme: &Theme) -> ChartResult<Drawing> {
        let years = scale::extent(rows.iter().map(|r| r.year)).ok_or_else(|| ChartError::render("no years to plot"))?;
        let top = scale::max(rows.iter().map(|r| r.max)).ok_or_else(|| ChartError::render("no prices to plot"))?;
        let (inner_w, inner_h) = (dims.inner_width(), dims.inner_height());
        let m = dims.margins;

        let x = LinearScale::new(years, (0.0, inner_w));
        let y = LinearScale::new((0.0, top), (inner_h, 0.0)).nice(10);

        let mut plot = Element::new("g").attr("class", "plot").attr("transform", translate(m.left, m.top));
        let mut x_axis = Axis::linear(Orient::Bottom, &x, 10, TickFormat::Integer).render(theme);
        x_axis.set_attr("transform", translate(0.0, inner_h));
        plot.push(x_axis);
        plot.push(Axis::linear(Orient::Left, &y, 6, TickFormat::Auto).render(theme));
        plot.push(bottom_title("Year", inner_w, inner_h + 35.0, theme));
        plot.push(left_title("Spot Power Price ($/MWh)", inner_h, -50.0, theme));

        plot.push(
            Element::new("path")
                .attr("class", "range")
                .attr("fill", theme.band_fill)
                .attr("opacity", BAND_OPACITY)
                .attr("d", band_path(rows, &x, &y)),
        );
        plot.push(
            Element::new("path")
                .attr("class", "average")
                .attr("fill", "none")
                .attr("stroke", theme.line_stroke)
                .attr("stroke-width", 2)
                .attr("d", polyline(rows.iter().map(|r| Point::new(x.apply(r.year), y.apply(r.average))))),
        );

        let mut targets = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let center = Point::new(x.apply(row.year), y.apply(row.average));
            let id = shape_id(self.label(), i);
            plot.push(
                Element::new("circle")
                    .attr("id", &id)
                    .attr("class", "dot")
                    .attr("cx", num(center.x))
                    .attr("cy", num(center.y))
                    .attr("r", POINT_RADIUS)
                    .attr("fill", theme.line_stroke),
            );
            targets.push(HitTarget {
                index: i,
                element_id: id,
                shape: HitShape::Circle { center: center.offset(m.left, m.top), radius: POINT_RADIUS },
                base_fill: theme.line_stroke,
                anchor: center,
            });
        }

        let title = Element::new("text")
            .attr("class", "chart-title")
            .attr("x", num(dims.width / 2.0))
            .attr("y", 25)
            .attr("text-anchor", "middle")
            .attr("font-size", "16px")
            .attr("font-weight", "bold")
            .attr("fill", theme.text)
            .text(Self::title(rows));

        let mut legend = Legend::new(
            vec![
                LegendItem::new(theme.line_stroke, "Median/Average"),
                LegendItem::new(theme.band_fill, "Min–Max Range").with_opacity(BAND_OPACITY),
            ],
            Flow::Column(18.0),
        );
        legend.swatch = (18.0, 12.0);
        legend.label_at = (22.0, 10.0);
        legend.font_size = (dims.width * 0.013).max(10.0);

        let svg = svg_root(self.label(), dims)
            .child(plot)
            .child(title)
            .child(legend.render(m.left + 10.0, m.top * 0.6));
        Ok(Drawing { svg, targets, crosshair: None })
    }

    fn tooltip_html(&self, row: &LineRow) -> String {
        format!(
            "<strong>Year: {}</strong><br/>Median/Average: {}<br/>Min: {}<br/>Max: {}",
            num(row.year),
            format_fixed(row.average, 2),
            format_fixed(row.min, 2),
            format_fixed(row.max, 2)
        )
    }

    fn highlight(&self, shape: &mut Element, _target: &HitTarget, theme: &Theme) {
        shape.set_attr("r", HOVER_RADIUS);
        shape.set_attr("fill", theme.point_hover);
    }

    fn unhighlight(&self, shape: &mut Element, target: &HitTarget, _theme: &Theme) {
        shape.set_attr("r", POINT_RADIUS);
        shape.set_attr("fill", target.base_fill);
    }
}
