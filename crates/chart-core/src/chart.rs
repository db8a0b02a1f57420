// File: crates/chart-core/src/chart.rs
// Summary: Chart container and per-chart instance: load, render, resize debounce and hover handling.

use std::time::Instant;

use tracing::{debug, warn};

use crate::charts::ChartSpec;
use crate::data::{self, CsvSource, SkippedRow};
use crate::geometry::{Point, Rect};
use crate::interaction::{hit_test, Crosshair, HitTarget, Tooltip};
use crate::resize::Debouncer;
use crate::svg::Element;
use crate::theme::Theme;
use crate::types::{Dimensions, Size};

#[derive(Clone, Debug, Default, PartialEq)]
enum Content {
    #[default]
    Empty,
    Svg(Element),
    Error(String),
}

/// Page region a chart draws into (`#{id} .chart-body`).
#[derive(Clone, Debug)]
pub struct Container {
    id: String,
    origin: Point,
    client_size: Size,
    content: Content,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), origin: Point::default(), client_size: Size::default(), content: Content::Empty }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn selector(&self) -> String {
        format!("#{} .chart-body", self.id)
    }

    /// Page position of the body's top-left corner.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Measured size; zero components mean "not measured".
    pub fn client_size(&self) -> Size {
        self.client_size
    }

    pub fn set_client_size(&mut self, size: Size) {
        self.client_size = size;
    }

    /// Replace whatever the body holds with a fresh SVG root.
    pub fn mount(&mut self, svg: Element) {
        self.content = Content::Svg(svg);
    }

    /// Replace whatever the body holds with a single error line.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.content = Content::Error(message.into());
    }

    pub fn svg(&self) -> Option<&Element> {
        match &self.content {
            Content::Svg(svg) => Some(svg),
            _ => None,
        }
    }

    pub fn svg_mut(&mut self) -> Option<&mut Element> {
        match &mut self.content {
            Content::Svg(svg) => Some(svg),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.content {
            Content::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Page rectangle covered by the body: the mounted SVG's size when there
    /// is one, the measured size otherwise.
    pub fn bounds(&self) -> Rect {
        let (w, h) = match self.svg() {
            Some(svg) => (
                svg.attr_f64("width").unwrap_or(self.client_size.width),
                svg.attr_f64("height").unwrap_or(self.client_size.height),
            ),
            None => (self.client_size.width, self.client_size.height),
        };
        Rect::from_xywh(self.origin.x, self.origin.y, w, h)
    }

    /// The `div.chart-body` element and its content.
    pub fn body(&self) -> Element {
        let mut body = Element::new("div").attr("class", "chart-body");
        match &self.content {
            Content::Empty => {}
            Content::Svg(svg) => body.push(svg.clone()),
            Content::Error(msg) => body.push(Element::new("div").attr("class", "error").text(msg.clone())),
        }
        body
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChartStatus {
    /// No data yet; renders are no-ops.
    Loading,
    Ready,
    /// The container shows this error line.
    Failed(String),
}

/// One chart on the page: its kind, cached rows and all per-chart state.
pub struct ChartInstance<C: ChartSpec> {
    spec: C,
    theme: Theme,
    container: Container,
    tooltip: Tooltip,
    rows: Vec<C::Row>,
    skipped: Vec<SkippedRow>,
    loaded: bool,
    dims: Option<Dimensions>,
    targets: Vec<HitTarget>,
    crosshair: Option<Crosshair>,
    hovered: Option<usize>,
    resize: Debouncer,
    renders: usize,
    status: ChartStatus,
}

impl<C: ChartSpec> ChartInstance<C> {
    pub fn new(spec: C, theme: Theme) -> Self {
        let container = Container::new(spec.label());
        Self {
            spec,
            theme,
            container,
            tooltip: Tooltip::new(),
            rows: Vec::new(),
            skipped: Vec::new(),
            loaded: false,
            dims: None,
            targets: Vec::new(),
            crosshair: None,
            hovered: None,
            resize: Debouncer::default(),
            renders: 0,
            status: ChartStatus::Loading,
        }
    }

    pub fn with_client_size(mut self, size: Size) -> Self {
        self.container.set_client_size(size);
        self
    }

    pub fn with_debouncer(mut self, resize: Debouncer) -> Self {
        self.resize = resize;
        self
    }

    /// Fetch and parse the chart's CSV, then render. A failed load leaves the
    /// error line in the container and is not retried.
    pub fn load(&mut self, source: &dyn CsvSource) {
        match data::load::<C::Row>(source, self.spec.data_path()) {
            Ok(parsed) => {
                self.skipped = parsed.skipped;
                self.set_rows(parsed.rows);
            }
            Err(e) => {
                let label = self.spec.label();
                warn!(chart = label, error = %e, "data load failed");
                self.fail(format!("Error loading {label} data: {e}"));
            }
        }
    }

    /// Install already-parsed rows and render them.
    pub fn set_rows(&mut self, rows: Vec<C::Row>) {
        self.rows = rows;
        self.loaded = true;
        self.render();
    }

    /// Tear down the previous SVG and draw a new one at the container's
    /// current size. No-op until rows are loaded.
    pub fn render(&mut self) {
        if !self.loaded {
            return;
        }
        self.tooltip.hide();
        self.hovered = None;
        self.targets.clear();
        self.crosshair = None;

        let dims = self.spec.dimensions(self.container.client_size());
        self.dims = Some(dims);
        let label = self.spec.label();
        match self.spec.draw(&self.rows, &dims, &self.theme) {
            Ok(drawing) => {
                self.container.mount(drawing.svg);
                self.targets = drawing.targets;
                self.crosshair = drawing.crosshair;
                self.renders += 1;
                self.status = ChartStatus::Ready;
                debug!(chart = label, width = dims.width, height = dims.height, shapes = self.targets.len(), "rendered");
            }
            Err(e) => {
                warn!(chart = label, error = %e, "render failed");
                self.fail(format!("Error rendering {label} chart: {e}"));
            }
        }
    }

    fn fail(&mut self, message: String) {
        self.container.show_error(message.clone());
        self.status = ChartStatus::Failed(message);
    }

    /// Record a resize at `now`; the redraw happens on a later [`ChartInstance::poll`].
    pub fn notify_resize(&mut self, now: Instant) {
        self.resize.signal(now);
    }

    /// Run the debounced redraw if its quiet period is over. Returns true when it rendered.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.resize.poll(now) {
            return false;
        }
        let before = self.renders;
        self.render();
        self.renders > before
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.resize.deadline()
    }

    /// Pointer at page position `at`: hover the topmost shape under it, or clear.
    pub fn pointer_move(&mut self, at: Point) {
        let origin = self.container.origin();
        let local = Point::new(at.x - origin.x, at.y - origin.y);
        let Some(hit) = hit_test(&self.targets, local) else {
            self.pointer_out();
            return;
        };
        if self.hovered != Some(hit) {
            self.clear_hover();
            self.apply_hover(hit);
        }
        let target = &self.targets[hit];
        if let Some(row) = self.rows.get(target.index) {
            self.tooltip.show(at, self.spec.tooltip_html(row));
        }
    }

    /// Pointer left the chart: hide the tooltip and restore base styles.
    pub fn pointer_out(&mut self) {
        self.clear_hover();
        self.tooltip.hide();
    }

    fn apply_hover(&mut self, hit: usize) {
        let target = &self.targets[hit];
        let Some(svg) = self.container.svg_mut() else {
            return;
        };
        if let Some(shape) = svg.find_by_id_mut(&target.element_id) {
            self.spec.highlight(shape, target, &self.theme);
        }
        if let (Some(crosshair), Some(dims)) = (&self.crosshair, &self.dims) {
            crosshair.show(svg, target.anchor, dims.inner_width(), dims.inner_height());
        }
        self.hovered = Some(hit);
    }

    fn clear_hover(&mut self) {
        let Some(prev) = self.hovered.take() else {
            return;
        };
        let Some(svg) = self.container.svg_mut() else {
            return;
        };
        if let Some(target) = self.targets.get(prev) {
            if let Some(shape) = svg.find_by_id_mut(&target.element_id) {
                self.spec.unhighlight(shape, target, &self.theme);
            }
        }
        if let Some(crosshair) = &self.crosshair {
            crosshair.hide(svg);
        }
    }

    pub fn spec(&self) -> &C {
        &self.spec
    }

    pub fn label(&self) -> &'static str {
        self.spec.label()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut Container {
        &mut self.container
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    pub fn rows(&self) -> &[C::Row] {
        &self.rows
    }

    pub fn skipped(&self) -> &[SkippedRow] {
        &self.skipped
    }

    pub fn dimensions(&self) -> Option<Dimensions> {
        self.dims
    }

    pub fn targets(&self) -> &[HitTarget] {
        &self.targets
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn renders(&self) -> usize {
        self.renders
    }

    pub fn status(&self) -> &ChartStatus {
        &self.status
    }
}
