// File: crates/chart-core/src/interaction.rs
// Summary: Tooltip node, hover targets and geometric hit testing for pointer events.

use crate::geometry::{Arc, Point, Rect};
use crate::svg::Element;
use crate::text::num;
use crate::theme::{Color, Theme};

/// Offset of the tooltip from the pointer, in pixels.
pub const TOOLTIP_OFFSET: f64 = 10.0;

/// Floating tooltip owned by one chart for its whole lifetime; mutated in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    visible: bool,
    left: f64,
    top: f64,
    html: String,
}

impl Tooltip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `html` next to the pointer at page position `at`.
    pub fn show(&mut self, at: Point, html: String) {
        self.visible = true;
        self.left = at.x + TOOLTIP_OFFSET;
        self.top = at.y + TOOLTIP_OFFSET;
        self.html = html;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool { self.visible }
    pub fn position(&self) -> Point { Point::new(self.left, self.top) }
    pub fn html(&self) -> &str { &self.html }

    /// The tooltip as a page-level `div`.
    pub fn to_element(&self, theme: &Theme) -> Element {
        let display = if self.visible { "block" } else { "none" };
        let style = format!(
            "display:{display};position:absolute;left:{}px;top:{}px;padding:6px 10px;\
             background:{};border:1px solid {};border-radius:4px;pointer-events:none;font-size:12px",
            num(self.left),
            num(self.top),
            theme.tooltip_background,
            theme.tooltip_border,
        );
        let mut div = Element::new("div").attr("class", "tooltip").attr("style", style);
        div.set_inner_html(self.html.clone());
        div
    }
}

/// Hit geometry in SVG-root coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HitShape {
    Rect(Rect),
    Circle { center: Point, radius: f64 },
    /// Wedge around `center`.
    Arc { center: Point, arc: Arc },
}

impl HitShape {
    pub fn contains(&self, p: Point) -> bool {
        match self {
            Self::Rect(r) => r.contains(p),
            Self::Circle { center, radius } => center.distance(p) <= *radius,
            Self::Arc { center, arc } => arc.contains(Point::new(p.x - center.x, p.y - center.y)),
        }
    }
}

/// One hoverable shape of a render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct HitTarget {
    /// Index of the row the shape was drawn from.
    pub index: usize,
    /// `id` attribute of the shape element.
    pub element_id: String,
    pub shape: HitShape,
    /// Unhovered fill, for shapes whose emphasis is derived from it.
    pub base_fill: Color,
    /// Plot-local data position for guide lines.
    pub anchor: Point,
}

/// Topmost target under `p` (later shapes paint over earlier ones).
pub fn hit_test(targets: &[HitTarget], p: Point) -> Option<usize> {
    targets.iter().rposition(|t| t.shape.contains(p))
}

/// Ids of the two dashed guide lines drawn through a hovered point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crosshair {
    pub vertical_id: String,
    pub horizontal_id: String,
}

impl Crosshair {
    pub fn new(prefix: &str) -> Self {
        Self {
            vertical_id: format!("{prefix}-crosshair-x"),
            horizontal_id: format!("{prefix}-crosshair-y"),
        }
    }

    /// Hidden guide line elements, to be appended to the plot group.
    pub fn elements(&self, theme: &Theme) -> [Element; 2] {
        let line = |id: &str| {
            Element::new("line")
                .attr("id", id)
                .attr("class", "crosshair")
                .attr("stroke", theme.crosshair)
                .attr("stroke-dasharray", "3,3")
                .attr("display", "none")
        };
        [line(&self.vertical_id), line(&self.horizontal_id)]
    }

    /// Run both lines through plot-local `anchor` across a plot of `width` × `height`.
    pub fn show(&self, root: &mut Element, anchor: Point, width: f64, height: f64) {
        if let Some(v) = root.find_by_id_mut(&self.vertical_id) {
            v.set_attr("x1", num(anchor.x));
            v.set_attr("y1", 0);
            v.set_attr("x2", num(anchor.x));
            v.set_attr("y2", num(height));
            v.set_attr("display", "block");
        }
        if let Some(h) = root.find_by_id_mut(&self.horizontal_id) {
            h.set_attr("x1", 0);
            h.set_attr("y1", num(anchor.y));
            h.set_attr("x2", num(width));
            h.set_attr("y2", num(anchor.y));
            h.set_attr("display", "block");
        }
    }

    pub fn hide(&self, root: &mut Element) {
        for id in [&self.vertical_id, &self.horizontal_id] {
            if let Some(l) = root.find_by_id_mut(id) {
                l.set_attr("display", "none");
            }
        }
    }
}
