// File: crates/chart-core/src/legend.rs
// Summary: Swatch + label legends laid out in a row or a column.

use crate::svg::{translate, Element};
use crate::text::num;
use crate::theme::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    pub color: Color,
    pub label: String,
    pub opacity: Option<f64>,
}

impl LegendItem {
    pub fn new(color: Color, label: impl Into<String>) -> Self {
        Self { color, label: label.into(), opacity: None }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Flow {
    /// Items side by side, `spacing` px apart.
    Row(f64),
    /// Items stacked, `spacing` px apart.
    Column(f64),
}

#[derive(Clone, Debug)]
pub struct Legend {
    pub items: Vec<LegendItem>,
    pub flow: Flow,
    pub swatch: (f64, f64),
    /// Swatch top edge relative to the item origin.
    pub swatch_y: f64,
    /// Label baseline position relative to the item origin.
    pub label_at: (f64, f64),
    pub font_size: f64,
}

impl Legend {
    pub fn new(items: Vec<LegendItem>, flow: Flow) -> Self {
        Self { items, flow, swatch: (12.0, 12.0), swatch_y: 0.0, label_at: (16.0, 11.0), font_size: 11.0 }
    }

    pub fn render(&self, origin_x: f64, origin_y: f64) -> Element {
        let mut g = Element::new("g").attr("class", "legend").attr("transform", translate(origin_x, origin_y));
        for (i, item) in self.items.iter().enumerate() {
            let (dx, dy) = match self.flow {
                Flow::Row(s) => (i as f64 * s, 0.0),
                Flow::Column(s) => (0.0, i as f64 * s),
            };
            let mut swatch = Element::new("rect")
                .attr("y", num(self.swatch_y))
                .attr("width", num(self.swatch.0))
                .attr("height", num(self.swatch.1))
                .attr("fill", item.color);
            if let Some(o) = item.opacity {
                swatch.set_attr("opacity", num(o));
            }
            g.push(
                Element::new("g")
                    .attr("class", "legend-item")
                    .attr("transform", translate(dx, dy))
                    .child(swatch)
                    .child(
                        Element::new("text")
                            .attr("x", num(self.label_at.0))
                            .attr("y", num(self.label_at.1))
                            .attr("font-size", format!("{}px", num(self.font_size)))
                            .text(item.label.clone()),
                    ),
            );
        }
        g
    }
}
