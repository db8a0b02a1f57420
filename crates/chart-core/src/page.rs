// File: crates/chart-core/src/page.rs
// Summary: Dashboard page owning every chart; grid layout, event dispatch and HTML output.

use std::time::Instant;

use serde::Deserialize;
use tracing::{debug, info};

use crate::chart::{ChartInstance, ChartStatus, Container};
use crate::charts::{BarChart, ChartSpec, DonutChart, LineChart, ScatterChart};
use crate::data::CsvSource;
use crate::geometry::Point;
use crate::interaction::Tooltip;
use crate::svg::Element;
use crate::theme::Theme;
use crate::types::{floor_width, Size};

/// Shortest row pitch; tall enough for every chart at its floor width.
const MIN_ROW_HEIGHT: f64 = 350.0;

/// Type-erased chart as seen by the page.
pub trait Widget {
    fn label(&self) -> &'static str;
    fn container(&self) -> &Container;
    fn container_mut(&mut self) -> &mut Container;
    fn tooltip(&self) -> &Tooltip;
    fn status(&self) -> &ChartStatus;
    fn renders(&self) -> usize;
    fn load(&mut self, source: &dyn CsvSource);
    fn render(&mut self);
    fn notify_resize(&mut self, now: Instant);
    fn poll(&mut self, now: Instant) -> bool;
    fn next_deadline(&self) -> Option<Instant>;
    fn pointer_move(&mut self, at: Point);
    fn pointer_out(&mut self);
}

impl<C: ChartSpec> Widget for ChartInstance<C> {
    fn label(&self) -> &'static str { ChartInstance::label(self) }
    fn container(&self) -> &Container { ChartInstance::container(self) }
    fn container_mut(&mut self) -> &mut Container { ChartInstance::container_mut(self) }
    fn tooltip(&self) -> &Tooltip { ChartInstance::tooltip(self) }
    fn status(&self) -> &ChartStatus { ChartInstance::status(self) }
    fn renders(&self) -> usize { ChartInstance::renders(self) }
    fn load(&mut self, source: &dyn CsvSource) { ChartInstance::load(self, source) }
    fn render(&mut self) { ChartInstance::render(self) }
    fn notify_resize(&mut self, now: Instant) { ChartInstance::notify_resize(self, now) }
    fn poll(&mut self, now: Instant) -> bool { ChartInstance::poll(self, now) }
    fn next_deadline(&self) -> Option<Instant> { ChartInstance::next_deadline(self) }
    fn pointer_move(&mut self, at: Point) { ChartInstance::pointer_move(self, at) }
    fn pointer_out(&mut self) { ChartInstance::pointer_out(self) }
}

/// Grid placement of chart containers.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub columns: usize,
    /// Gutter between containers and around the grid, in pixels.
    pub gap: f64,
    /// Fixed container height; 0 leaves heights unmeasured.
    pub container_height: f64,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self { columns: 2, gap: 24.0, container_height: 0.0 }
    }
}

impl PageLayout {
    pub fn column_width(&self, viewport: Size) -> f64 {
        let cols = self.columns.max(1) as f64;
        ((viewport.width - self.gap * (cols + 1.0)) / cols).max(0.0)
    }

    fn row_height(&self, viewport: Size) -> f64 {
        if self.container_height > 0.0 {
            self.container_height
        } else {
            (floor_width(self.column_width(viewport)) * 0.8).round().max(MIN_ROW_HEIGHT)
        }
    }

    /// Page origin and measured client size of the `index`th container.
    pub fn place(&self, index: usize, viewport: Size) -> (Point, Size) {
        let cols = self.columns.max(1);
        let (row, col) = (index / cols, index % cols);
        let w = self.column_width(viewport);
        let pitch = self.row_height(viewport) + self.gap;
        let origin = Point::new(self.gap + col as f64 * (w + self.gap), self.gap + row as f64 * pitch);
        (origin, Size::new(w, self.container_height.max(0.0)))
    }
}

/// Input to the page's single-threaded event loop.
#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
    Load,
    Resize { viewport: Size, at: Instant },
    Tick { at: Instant },
    PointerMove { chart: String, at: Point },
    PointerOut { chart: String },
}

pub struct Page {
    theme: Theme,
    layout: PageLayout,
    viewport: Size,
    source: Box<dyn CsvSource>,
    charts: Vec<Box<dyn Widget>>,
}

impl Page {
    pub fn new(theme: Theme, layout: PageLayout, viewport: Size, source: Box<dyn CsvSource>) -> Self {
        Self { theme, layout, viewport, source, charts: Vec::new() }
    }

    /// The four dashboard charts, in page order.
    pub fn standard(theme: Theme, layout: PageLayout, viewport: Size, source: Box<dyn CsvSource>) -> Self {
        let mut page = Self::new(theme, layout, viewport, source);
        page.add(ChartInstance::new(BarChart::default(), theme));
        page.add(ChartInstance::new(DonutChart::default(), theme));
        page.add(ChartInstance::new(LineChart::default(), theme));
        page.add(ChartInstance::new(ScatterChart::default(), theme));
        page
    }

    /// Append a chart and place its container.
    pub fn add(&mut self, chart: impl Widget + 'static) {
        let mut chart: Box<dyn Widget> = Box::new(chart);
        let (origin, size) = self.layout.place(self.charts.len(), self.viewport);
        chart.container_mut().set_origin(origin);
        chart.container_mut().set_client_size(size);
        self.charts.push(chart);
    }

    /// Load every chart. One chart's failure never affects another.
    pub fn load_all(&mut self) {
        for chart in &mut self.charts {
            chart.load(self.source.as_ref());
        }
        let failed = self.charts.iter().filter(|c| matches!(c.status(), ChartStatus::Failed(_))).count();
        info!(charts = self.charts.len(), failed, "page loaded");
    }

    /// Re-measure containers for `viewport` and arm each chart's debounced redraw.
    pub fn resize(&mut self, viewport: Size, at: Instant) {
        self.viewport = viewport;
        for (i, chart) in self.charts.iter_mut().enumerate() {
            let (origin, size) = self.layout.place(i, viewport);
            chart.container_mut().set_origin(origin);
            chart.container_mut().set_client_size(size);
            chart.notify_resize(at);
        }
        debug!(width = viewport.width, height = viewport.height, "viewport resized");
    }

    /// Fire every redraw whose quiet period has passed. Returns how many ran.
    pub fn tick(&mut self, at: Instant) -> usize {
        self.charts.iter_mut().map(|c| c.poll(at)).filter(|fired| *fired).count()
    }

    /// Earliest pending redraw deadline across charts.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.charts.iter().filter_map(|c| c.next_deadline()).min()
    }

    /// Process one event to completion. Returns the number of renders it caused.
    pub fn dispatch(&mut self, event: PageEvent) -> usize {
        match event {
            PageEvent::Load => {
                let before = self.total_renders();
                self.load_all();
                self.total_renders() - before
            }
            PageEvent::Resize { viewport, at } => {
                self.resize(viewport, at);
                0
            }
            PageEvent::Tick { at } => self.tick(at),
            PageEvent::PointerMove { chart, at } => {
                if let Some(c) = self.chart_mut(&chart) {
                    c.pointer_move(at);
                }
                0
            }
            PageEvent::PointerOut { chart } => {
                if let Some(c) = self.chart_mut(&chart) {
                    c.pointer_out();
                }
                0
            }
        }
    }

    fn total_renders(&self) -> usize {
        self.charts.iter().map(|c| c.renders()).sum()
    }

    /// Label of the chart whose container covers page point `at`.
    pub fn chart_at(&self, at: Point) -> Option<&'static str> {
        self.charts.iter().find(|c| c.container().bounds().contains(at)).map(|c| c.label())
    }

    pub fn charts(&self) -> &[Box<dyn Widget>] {
        &self.charts
    }

    pub fn chart(&self, label: &str) -> Option<&dyn Widget> {
        self.charts.iter().find(|c| c.label() == label).map(|c| c.as_ref())
    }

    pub fn chart_mut(&mut self, label: &str) -> Option<&mut (dyn Widget + 'static)> {
        self.charts.iter_mut().find(|c| c.label() == label).map(|c| c.as_mut())
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Standalone HTML document: one positioned container per chart, then every tooltip.
    pub fn to_html(&self) -> String {
        let style = format!(
            "body{{margin:0;font-family:sans-serif;background:{};color:{}}}\
             .chart{{position:absolute}}.error{{color:#b00020;padding:8px}}",
            self.theme.background, self.theme.text
        );
        let mut style_el = Element::new("style");
        style_el.set_inner_html(style);
        let head = Element::new("head")
            .child(Element::new("meta").attr("charset", "utf-8"))
            .child(Element::new("title").text("Energy Charts"))
            .child(style_el);

        let mut body = Element::new("body");
        for chart in &self.charts {
            let c = chart.container();
            let style = format!(
                "left:{}px;top:{}px;width:{}px",
                crate::text::num(c.origin().x),
                crate::text::num(c.origin().y),
                crate::text::num(c.client_size().width)
            );
            body.push(Element::new("div").attr("id", c.id()).attr("class", "chart").attr("style", style).child(c.body()));
        }
        for chart in &self.charts {
            body.push(chart.tooltip().to_element(&self.theme));
        }

        let html = Element::new("html").attr("lang", "en").child(head).child(body);
        format!("<!DOCTYPE html>\n{html}\n")
    }
}
