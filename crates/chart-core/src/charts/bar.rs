// File: crates/chart-core/src/charts/bar.rs
// Summary: Mean energy per screen technology as vertical bars (55" TVs).

use crate::axis::{bottom_title, left_title, Axis, Orient, TickFormat};
use crate::charts::{parse_tech_value, shape_id, svg_root, ChartSpec, Drawing, MEAN_ENERGY_COLUMN, TECH_COLUMN};
use crate::data::{ParseOutcome, RawRow, RowSchema};
use crate::error::{ChartError, ChartResult};
use crate::geometry::{Point, Rect};
use crate::interaction::{HitShape, HitTarget};
use crate::legend::{Flow, Legend, LegendItem};
use crate::scale::{self, BandScale, LinearScale, OrdinalScale};
use crate::svg::{translate, Element};
use crate::text::{escape_html, format_fixed, num};
use crate::theme::Theme;
use crate::types::{floor_width, proportional_height, Dimensions, Insets, Size};

pub const BAR_DATA: &str = "data/Ex5_TV_energy_55inchtv_byScreenType.csv";

const MARGINS: Insets = Insets::new(80.0, 20.0, 50.0, 70.0);
const BAND_PADDING: f64 = 0.3;
const HEADROOM: f64 = 1.1;
const HOVER_DARKEN: f64 = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub struct BarRow {
    pub technology: String,
    pub mean_energy: f64,
}

impl RowSchema for BarRow {
    const REQUIRED: &'static [&'static str] = &[TECH_COLUMN, MEAN_ENERGY_COLUMN];

    fn parse(row: &RawRow<'_>) -> ParseOutcome<Self> {
        match parse_tech_value(row) {
            ParseOutcome::Row((technology, mean_energy)) => ParseOutcome::Row(Self { technology, mean_energy }),
            ParseOutcome::Skipped(reason) => ParseOutcome::Skipped(reason),
        }
    }
}

#[derive(Clone, Debug)]
pub struct BarChart {
    path: String,
}

impl BarChart {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for BarChart {
    fn default() -> Self {
        Self::new(BAR_DATA)
    }
}

impl ChartSpec for BarChart {
    type Row = BarRow;

    fn label(&self) -> &'static str {
        "bar"
    }

    fn data_path(&self) -> &str {
        &self.path
    }

    fn dimensions(&self, measured: Size) -> Dimensions {
        let width = floor_width(measured.width);
        Dimensions::new(width, proportional_height(width, 0.8, 250.0), MARGINS)
    }

    fn draw(&self, rows: &[BarRow], dims: &Dimensions, theme: &Theme) -> ChartResult<Drawing> {
        let max = scale::max(rows.iter().map(|r| r.mean_energy))
            .ok_or_else(|| ChartError::render("no bars to plot"))?;
        let (inner_w, inner_h) = (dims.inner_width(), dims.inner_height());
        let m = dims.margins;

        let color = OrdinalScale::with_domain(theme.categorical, rows.iter().map(|r| &r.technology));
        let x = BandScale::new(rows.iter().map(|r| r.technology.clone()), (0.0, inner_w)).padding(BAND_PADDING);
        let y = LinearScale::new((0.0, max * HEADROOM), (inner_h, 0.0)).nice(10);

        let mut plot = Element::new("g").attr("class", "plot").attr("transform", translate(m.left, m.top));

        let mut x_axis = Axis::band(Orient::Bottom, &x).render(theme);
        x_axis.set_attr("transform", translate(0.0, inner_h));
        plot.push(x_axis);
        plot.push(Axis::linear(Orient::Left, &y, 10, TickFormat::Auto).render(theme));

        plot.push(bottom_title("Screen Technology", inner_w, inner_h + 40.0, theme));
        plot.push(left_title("Mean Energy Consumption (kWh/year)", inner_h, -50.0, theme));

        let mut targets = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let fill = color.get(&row.technology).unwrap_or(theme.text);
            let bx = x.position(&row.technology).unwrap_or(0.0);
            let by = y.apply(row.mean_energy);
            let height = (inner_h - by).max(0.0);
            let id = shape_id(self.label(), i);
            plot.push(
                Element::new("rect")
                    .attr("id", &id)
                    .attr("class", "bar")
                    .attr("x", num(bx))
                    .attr("y", num(by))
                    .attr("width", num(x.bandwidth()))
                    .attr("height", num(height))
                    .attr("fill", fill),
            );
            targets.push(HitTarget {
                index: i,
                element_id: id,
                shape: HitShape::Rect(Rect::from_xywh(bx, by, x.bandwidth(), height).translate(m.left, m.top)),
                base_fill: fill,
                anchor: Point::new(bx + x.bandwidth() / 2.0, by),
            });
        }

        let items = rows
            .iter()
            .map(|r| LegendItem::new(color.get(&r.technology).unwrap_or(theme.text), r.technology.clone()))
            .collect();
        let spacing = inner_w / rows.len() as f64;
        let legend = Legend::new(items, Flow::Row(spacing)).render(m.left, 30.0);

        let svg = svg_root(self.label(), dims).child(plot).child(legend);
        Ok(Drawing { svg, targets, crosshair: None })
    }

    fn tooltip_html(&self, row: &BarRow) -> String {
        format!(
            "<strong>{}</strong><br/>{} kWh/year",
            escape_html(&row.technology),
            format_fixed(row.mean_energy, 1)
        )
    }

    fn highlight(&self, shape: &mut Element, target: &HitTarget, _theme: &Theme) {
        shape.set_attr("fill", target.base_fill.darker(HOVER_DARKEN));
    }

    fn unhighlight(&self, shape: &mut Element, target: &HitTarget, _theme: &Theme) {
        shape.set_attr("fill", target.base_fill);
    }
}
