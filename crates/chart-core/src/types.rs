// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, responsive floors).

use serde::Deserialize;

/// Narrowest width any chart is drawn at, whatever the container reports.
pub const MIN_WIDTH: f64 = 320.0;
/// Quiet period after the last resize signal before a redraw, in milliseconds.
pub const RESIZE_QUIET_MS: u64 = 120;

/// Measured size of a container or viewport, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Plot margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

/// Outer SVG size plus margins for one render pass. Rebuilt on every render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub margins: Insets,
}

impl Dimensions {
    pub fn new(width: f64, height: f64, margins: Insets) -> Self {
        Self { width, height, margins }
    }

    /// Width of the plot area inside the margins.
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margins.hsum()).max(0.0)
    }

    /// Height of the plot area inside the margins.
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margins.vsum()).max(0.0)
    }
}

/// Width after applying the responsive floor.
pub fn floor_width(measured: f64) -> f64 {
    if measured.is_finite() { measured.max(MIN_WIDTH) } else { MIN_WIDTH }
}

/// Height derived from width by `ratio`, never below `min`.
pub fn proportional_height(width: f64, ratio: f64, min: f64) -> f64 {
    (width * ratio).round().max(min)
}
