// File: crates/chart-core/src/charts/scatter.rs
// Summary: Star rating vs energy use per TV model, colored by screen technology, with crosshairs.

use crate::axis::{bottom_title, left_title, Axis, Orient, TickFormat};
use crate::charts::{shape_id, svg_root, ChartSpec, Drawing};
use crate::data::{ParseOutcome, RawRow, RowSchema};
use crate::error::{ChartError, ChartResult};
use crate::geometry::Point;
use crate::interaction::{Crosshair, HitShape, HitTarget};
use crate::legend::{Flow, Legend, LegendItem};
use crate::scale::{self, LinearScale, OrdinalScale, SqrtScale};
use crate::svg::{translate, Element};
use crate::text::{escape_html, num};
use crate::theme::Theme;
use crate::types::{floor_width, proportional_height, Dimensions, Insets, Size};

pub const SCATTER_DATA: &str = "data/Ex5_TV_energy.csv";

const MARGINS: Insets = Insets::new(20.0, 20.0, 45.0, 60.0);
const STAR_PAD: f64 = 0.5;
const MIN_RADIUS: f64 = 2.0;
const FILL_OPACITY: f64 = 0.85;
const STROKE_OPACITY: f64 = 0.06;
/// Legend block width measured back from the right edge.
const LEGEND_INSET: f64 = 130.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterRow {
    pub brand: String,
    /// Diagonal in inches; NaN when not recorded.
    pub screen_size: f64,
    pub screen_technology: String,
    pub star: f64,
    pub energy: f64,
    pub count: f64,
}

impl RowSchema for ScatterRow {
    const REQUIRED: &'static [&'static str] = &["star2", "energy_consumpt"];

    fn parse(row: &RawRow<'_>) -> ParseOutcome<Self> {
        let star = row.number("star2").unwrap_or(f64::NAN);
        let energy = row.number("energy_consumpt").unwrap_or(f64::NAN);
        if !star.is_finite() || !energy.is_finite() {
            return ParseOutcome::Skipped(format!(
                "star rating `{}` or energy `{}` is not a number",
                row.get("star2").unwrap_or(""),
                row.get("energy_consumpt").unwrap_or("")
            ));
        }
        ParseOutcome::Row(Self {
            brand: row.get("brand").unwrap_or("").to_string(),
            screen_size: row.number("screensize").unwrap_or(f64::NAN),
            screen_technology: row.non_empty("screen_tech").unwrap_or("Unknown").to_string(),
            star,
            energy,
            count: row.number("count").unwrap_or(1.0),
        })
    }
}

#[derive(Clone, Debug)]
pub struct ScatterChart {
    path: String,
}

impl ScatterChart {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Distinct technologies in lexicographic order.
    pub fn technologies(rows: &[ScatterRow]) -> Vec<String> {
        let mut techs: Vec<String> = rows.iter().map(|r| r.screen_technology.clone()).collect();
        techs.sort();
        techs.dedup();
        techs
    }
}

impl Default for ScatterChart {
    fn default() -> Self {
        Self::new(SCATTER_DATA)
    }
}

impl ChartSpec for ScatterChart {
    type Row = ScatterRow;

    fn label(&self) -> &'static str {
        "scatter"
    }

    fn data_path(&self) -> &str {
        &self.path
    }

    fn dimensions(&self, measured: Size) -> Dimensions {
        let width = floor_width(measured.width);
        Dimensions::new(width, proportional_height(width, 0.6, 300.0), MARGINS)
    }

    fn draw(&self, rows: &[ScatterRow], dims: &Dimensions, theme: &Theme) -> ChartResult<Drawing> {
        let (star_lo, star_hi) =
            scale::extent(rows.iter().map(|r| r.star)).ok_or_else(|| ChartError::render("no rated models to plot"))?;
        let (energy_lo, energy_hi) =
            scale::extent(rows.iter().map(|r| r.energy)).ok_or_else(|| ChartError::render("no energy values to plot"))?;
        let (inner_w, inner_h) = (dims.inner_width(), dims.inner_height());
        let m = dims.margins;

        let techs = Self::technologies(rows);
        let color = OrdinalScale::with_domain(theme.categorical, &techs);
        let x = LinearScale::new((star_lo - STAR_PAD, star_hi + STAR_PAD), (0.0, inner_w)).nice(10);
        let y = LinearScale::new(((energy_lo * 0.95).min(0.0), energy_hi * 1.05), (inner_h, 0.0)).nice(10);
        let max_r = (inner_w.min(inner_h) / 60.0).max(MIN_RADIUS);
        let sizes = scale::extent(rows.iter().map(|r| r.screen_size)).unwrap_or((0.0, 0.0));
        let r = SqrtScale::new(sizes, (MIN_RADIUS, max_r));

        let mut plot = Element::new("g").attr("class", "plot").attr("transform", translate(m.left, m.top));
        let mut x_axis = Axis::linear(Orient::Bottom, &x, 10, TickFormat::Auto).render(theme);
        x_axis.set_attr("transform", translate(0.0, inner_h));
        plot.push(x_axis);
        plot.push(Axis::linear(Orient::Left, &y, 10, TickFormat::Auto).render(theme));
        plot.push(bottom_title("Star Rating", inner_w, inner_h + 40.0, theme));
        plot.push(left_title("Energy Consumption (kWh)", inner_h, -44.0, theme));

        let crosshair = Crosshair::new(self.label());
        for line in crosshair.elements(theme) {
            plot.push(line);
        }

        let mut targets = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let center = Point::new(x.apply(row.star), y.apply(row.energy));
            let radius = if row.screen_size.is_finite() { r.apply(row.screen_size) } else { MIN_RADIUS };
            let fill = color.get(&row.screen_technology).unwrap_or(theme.text);
            let id = shape_id(self.label(), i);
            plot.push(
                Element::new("circle")
                    .attr("id", &id)
                    .attr("class", "point")
                    .attr("cx", num(center.x))
                    .attr("cy", num(center.y))
                    .attr("r", num(radius))
                    .attr("fill", fill)
                    .attr("fill-opacity", FILL_OPACITY)
                    .attr("stroke", theme.hover_stroke)
                    .attr("stroke-opacity", STROKE_OPACITY),
            );
            targets.push(HitTarget {
                index: i,
                element_id: id,
                shape: HitShape::Circle { center: center.offset(m.left, m.top), radius },
                base_fill: fill,
                anchor: center,
            });
        }

        let items = techs
            .iter()
            .map(|t| LegendItem::new(color.get(t).unwrap_or(theme.text), t.clone()))
            .collect();
        let legend = Legend::new(items, Flow::Column(18.0)).render(dims.width - LEGEND_INSET, m.top);

        let svg = svg_root(self.label(), dims).child(plot).child(legend);
        Ok(Drawing { svg, targets, crosshair: Some(crosshair) })
    }

    fn tooltip_html(&self, row: &ScatterRow) -> String {
        let size = if row.screen_size.is_finite() && row.screen_size != 0.0 {
            format!("{}\"", row.screen_size)
        } else {
            "NA".to_string()
        };
        format!(
            "<strong>{}</strong><br/>Tech: {}<br/>Size: {}<br/>Star: {}<br/>Energy: {} kWh",
            escape_html(&row.brand),
            escape_html(&row.screen_technology),
            size,
            row.star,
            row.energy
        )
    }

    fn highlight(&self, shape: &mut Element, _target: &HitTarget, _theme: &Theme) {
        shape.set_attr("stroke", "#000000");
        shape.set_attr("stroke-width", 2);
        shape.set_attr("fill-opacity", 1);
    }

    fn unhighlight(&self, shape: &mut Element, _target: &HitTarget, theme: &Theme) {
        shape.set_attr("stroke", theme.hover_stroke);
        shape.set_attr("stroke-width", 1);
        shape.set_attr("fill-opacity", FILL_OPACITY);
    }
}
