// File: crates/chart-core/src/axis.rs
// Summary: Axis model (orientation, ticks, range) and its SVG rendering, plus axis titles.

use crate::scale::{BandScale, LinearScale};
use crate::svg::{translate, Element};
use crate::text::{format_integer, format_tick, num};
use crate::theme::Theme;

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TickFormat {
    /// Decimals derived from the tick step, thousands grouped.
    #[default]
    Auto,
    /// Rounded integers, no grouping (years).
    Integer,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub orient: Orient,
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn new(orient: Orient, range: (f64, f64), ticks: Vec<Tick>) -> Self {
        Self { orient, range, ticks }
    }

    /// Ticks at round values of a linear scale.
    pub fn linear(orient: Orient, scale: &LinearScale, count: usize, format: TickFormat) -> Self {
        let step = scale.tick_step(count);
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|v| Tick {
                position: scale.apply(v),
                label: match format {
                    TickFormat::Auto => format_tick(v, step),
                    TickFormat::Integer => format_integer(v),
                },
            })
            .collect();
        Self::new(orient, scale.range(), ticks)
    }

    /// One tick per category, centred in its band.
    pub fn band(orient: Orient, scale: &BandScale) -> Self {
        let half = scale.bandwidth() / 2.0;
        let ticks = scale
            .domain()
            .iter()
            .filter_map(|k| scale.position(k).map(|p| Tick { position: p + half, label: k.clone() }))
            .collect();
        Self::new(orient, scale.range(), ticks)
    }

    pub fn render(&self, theme: &Theme) -> Element {
        let (r0, r1) = self.range;
        let (class, domain_path) = match self.orient {
            Orient::Bottom => (
                "axis axis-bottom",
                format!("M{},{TICK_SIZE}V0H{}V{TICK_SIZE}", num(r0), num(r1)),
            ),
            Orient::Left => (
                "axis axis-left",
                format!("M-{TICK_SIZE},{}H0V{}H-{TICK_SIZE}", num(r0), num(r1)),
            ),
        };
        let mut g = Element::new("g")
            .attr("class", class)
            .attr("fill", "none")
            .attr("font-size", 10)
            .attr("font-family", "sans-serif")
            .attr("text-anchor", if self.orient == Orient::Bottom { "middle" } else { "end" });
        g.push(
            Element::new("path")
                .attr("class", "domain")
                .attr("stroke", theme.axis_line)
                .attr("d", domain_path),
        );
        for t in &self.ticks {
            g.push(self.render_tick(t, theme));
        }
        g
    }

    fn render_tick(&self, t: &Tick, theme: &Theme) -> Element {
        let offset = TICK_SIZE + TICK_PADDING;
        match self.orient {
            Orient::Bottom => Element::new("g")
                .attr("class", "tick")
                .attr("transform", translate(t.position, 0.0))
                .child(Element::new("line").attr("stroke", theme.axis_line).attr("y2", TICK_SIZE))
                .child(
                    Element::new("text")
                        .attr("fill", theme.text)
                        .attr("y", offset)
                        .attr("dy", "0.71em")
                        .text(t.label.clone()),
                ),
            Orient::Left => Element::new("g")
                .attr("class", "tick")
                .attr("transform", translate(0.0, t.position))
                .child(Element::new("line").attr("stroke", theme.axis_line).attr("x2", -TICK_SIZE))
                .child(
                    Element::new("text")
                        .attr("fill", theme.text)
                        .attr("x", -offset)
                        .attr("dy", "0.32em")
                        .text(t.label.clone()),
                ),
        }
    }
}

/// Centered title under a bottom axis.
pub fn bottom_title(text: &str, inner_width: f64, y: f64, theme: &Theme) -> Element {
    Element::new("text")
        .attr("class", "axis-title")
        .attr("x", num(inner_width / 2.0))
        .attr("y", num(y))
        .attr("text-anchor", "middle")
        .attr("fill", theme.axis_title)
        .text(text)
}

/// Rotated title beside a left axis; `offset` is negative (left of the plot).
pub fn left_title(text: &str, inner_height: f64, offset: f64, theme: &Theme) -> Element {
    Element::new("text")
        .attr("class", "axis-title")
        .attr("transform", "rotate(-90)")
        .attr("x", num(-inner_height / 2.0))
        .attr("y", num(offset))
        .attr("text-anchor", "middle")
        .attr("fill", theme.axis_title)
        .text(text)
}
