// File: crates/chart-core/src/charts/donut.rs
// Summary: Share of energy per screen technology (all sizes) as a donut ring with percent labels.

use crate::charts::{parse_tech_value, shape_id, svg_root, ChartSpec, Drawing, MEAN_ENERGY_COLUMN, TECH_COLUMN};
use crate::data::{ParseOutcome, RawRow, RowSchema};
use crate::error::{ChartError, ChartResult};
use crate::geometry::{Arc, Point};
use crate::interaction::{HitShape, HitTarget};
use crate::legend::{Flow, Legend, LegendItem};
use crate::scale::{pie, OrdinalScale};
use crate::svg::{translate, Element};
use crate::text::{escape_html, format_fixed, format_percent, num};
use crate::theme::Theme;
use crate::types::{floor_width, Dimensions, Insets, Size};

pub const DONUT_DATA: &str = "data/Ex5_TV_energy_Allsizes_byScreenType.csv";

/// Height used when the container reports none.
const DEFAULT_HEIGHT: f64 = 350.0;
const MIN_HEIGHT: f64 = 250.0;
const RADIUS_DIVISOR: f64 = 2.5;
const OUTER_INSET: f64 = 10.0;
const LABEL_RADIUS: f64 = 0.7;

#[derive(Clone, Debug, PartialEq)]
pub struct DonutRow {
    pub technology: String,
    pub value: f64,
}

impl RowSchema for DonutRow {
    const REQUIRED: &'static [&'static str] = &[TECH_COLUMN, MEAN_ENERGY_COLUMN];

    fn parse(row: &RawRow<'_>) -> ParseOutcome<Self> {
        match parse_tech_value(row) {
            ParseOutcome::Row((technology, value)) => ParseOutcome::Row(Self { technology, value }),
            ParseOutcome::Skipped(reason) => ParseOutcome::Skipped(reason),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DonutChart {
    path: String,
}

impl DonutChart {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Ring radius before the outer inset.
    pub fn radius(dims: &Dimensions) -> f64 {
        dims.width.min(dims.height) / RADIUS_DIVISOR
    }

    /// Whole-number percentage labels, one per row, in row order.
    pub fn percent_labels(rows: &[DonutRow]) -> Vec<String> {
        let total: f64 = rows.iter().map(|r| r.value).sum();
        rows.iter().map(|r| format_percent(r.value, total)).collect()
    }
}

impl Default for DonutChart {
    fn default() -> Self {
        Self::new(DONUT_DATA)
    }
}

impl ChartSpec for DonutChart {
    type Row = DonutRow;

    fn label(&self) -> &'static str {
        "donut"
    }

    fn data_path(&self) -> &str {
        &self.path
    }

    fn dimensions(&self, measured: Size) -> Dimensions {
        let width = floor_width(measured.width);
        let height = if measured.height.is_finite() && measured.height > 0.0 {
            measured.height
        } else {
            DEFAULT_HEIGHT
        };
        Dimensions::new(width, height.max(MIN_HEIGHT), Insets::new(0.0, 0.0, 0.0, 0.0))
    }

    fn draw(&self, rows: &[DonutRow], dims: &Dimensions, theme: &Theme) -> ChartResult<Drawing> {
        let total: f64 = rows.iter().map(|r| r.value).sum();
        if rows.is_empty() || !(total > 0.0) {
            return Err(ChartError::render("no slice values to plot"));
        }

        let radius = Self::radius(dims);
        let (inner_r, outer_r) = (radius * 0.5, radius - OUTER_INSET);
        let center = Point::new(radius + 20.0, dims.height / 2.0);
        let mut color = OrdinalScale::new(theme.slices);
        let slices = pie(&rows.iter().map(|r| r.value).collect::<Vec<_>>());
        let labels = Self::percent_labels(rows);
        let font_size = format!("{}px", num((radius * 0.12).max(10.0)));

        let mut ring = Element::new("g").attr("class", "ring").attr("transform", translate(center.x, center.y));
        let mut targets = Vec::with_capacity(rows.len());
        for (slice, row) in slices.iter().zip(rows) {
            let fill = color.color(&row.technology);
            let arc = Arc::new(inner_r, outer_r, slice.start_angle, slice.end_angle);
            let id = shape_id(self.label(), slice.index);
            ring.push(
                Element::new("path")
                    .attr("id", &id)
                    .attr("class", "slice")
                    .attr("d", arc.path())
                    .attr("fill", fill),
            );
            targets.push(HitTarget {
                index: slice.index,
                element_id: id,
                shape: HitShape::Arc { center, arc },
                base_fill: fill,
                anchor: arc.centroid(),
            });
        }
        for (slice, label) in slices.iter().zip(&labels) {
            let at = Arc::new(radius * LABEL_RADIUS, radius * LABEL_RADIUS, slice.start_angle, slice.end_angle).centroid();
            ring.push(
                Element::new("text")
                    .attr("class", "slice-label")
                    .attr("transform", translate(at.x, at.y))
                    .attr("text-anchor", "middle")
                    .attr("dy", "0.35em")
                    .attr("font-size", &font_size)
                    .attr("fill", theme.slice_label)
                    .text(label.clone()),
            );
        }

        let swatch = (radius * 0.12).max(10.0);
        let mut legend = Legend::new(
            rows.iter().map(|r| LegendItem::new(color.color(&r.technology), r.technology.clone())).collect(),
            Flow::Column(22.0),
        );
        legend.swatch = (swatch, swatch);
        legend.swatch_y = -8.0;
        legend.label_at = (radius * 0.2 + 10.0, 2.0);
        legend.font_size = swatch;

        let svg = svg_root(self.label(), dims).child(ring).child(legend.render(radius * 2.0 + 40.0, 40.0));
        Ok(Drawing { svg, targets, crosshair: None })
    }

    fn tooltip_html(&self, row: &DonutRow) -> String {
        format!("<strong>{}</strong><br/>{} kWh", escape_html(&row.technology), format_fixed(row.value, 1))
    }

    fn highlight(&self, shape: &mut Element, _target: &HitTarget, theme: &Theme) {
        shape.set_attr("opacity", "0.7");
        shape.set_attr("stroke", theme.hover_stroke);
        shape.set_attr("stroke-width", 2);
    }

    fn unhighlight(&self, shape: &mut Element, _target: &HitTarget, _theme: &Theme) {
        shape.remove_attr("opacity");
        shape.remove_attr("stroke");
        shape.remove_attr("stroke-width");
    }
}
