// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math: points, rects, annular wedges.

use std::f64::consts::{PI, TAU};

use crate::text::num;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
    pub fn right(&self) -> f64 { self.x + self.width }
    pub fn bottom(&self) -> f64 { self.y + self.height }

    /// Half-open containment: left/top edges inside, right/bottom outside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::from_xywh(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// Annular wedge centred on the origin. Angles are in radians, measured
/// clockwise from 12 o'clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Arc {
    pub fn new(inner_radius: f64, outer_radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self { inner_radius, outer_radius, start_angle, end_angle }
    }

    pub fn sweep(&self) -> f64 {
        (self.end_angle - self.start_angle).abs()
    }

    /// Point at `radius` along `angle` (12 o'clock = 0, clockwise).
    pub fn polar(radius: f64, angle: f64) -> Point {
        Point::new(radius * angle.sin(), -radius * angle.cos())
    }

    /// Midpoint of the wedge: half-way between the radii, half-way through the sweep.
    pub fn centroid(&self) -> Point {
        let r = (self.inner_radius + self.outer_radius) / 2.0;
        let a = (self.start_angle + self.end_angle) / 2.0;
        Self::polar(r, a)
    }

    /// SVG path data for the wedge.
    pub fn path(&self) -> String {
        let ro = self.outer_radius.max(0.0);
        let ri = self.inner_radius.clamp(0.0, ro);
        let sweep = self.sweep();
        if ro <= 0.0 || sweep <= 1e-12 {
            return "M0,0Z".to_string();
        }

        if sweep >= TAU - 1e-9 {
            // A single arc command cannot close a full circle; split into halves.
            let mut d = format!(
                "M0,{}A{r},{r},0,1,1,0,{}A{r},{r},0,1,1,0,{}",
                num(-ro),
                num(ro),
                num(-ro),
                r = num(ro)
            );
            if ri > 0.0 {
                d.push_str(&format!(
                    "M0,{}A{r},{r},0,1,0,0,{}A{r},{r},0,1,0,0,{}",
                    num(-ri),
                    num(ri),
                    num(-ri),
                    r = num(ri)
                ));
            }
            d.push('Z');
            return d;
        }

        let large = if sweep > PI { 1 } else { 0 };
        let o0 = Self::polar(ro, self.start_angle);
        let o1 = Self::polar(ro, self.end_angle);
        let mut d = format!(
            "M{},{}A{r},{r},0,{large},1,{},{}",
            num(o0.x),
            num(o0.y),
            num(o1.x),
            num(o1.y),
            r = num(ro)
        );
        if ri > 0.0 {
            let i1 = Self::polar(ri, self.end_angle);
            let i0 = Self::polar(ri, self.start_angle);
            d.push_str(&format!(
                "L{},{}A{r},{r},0,{large},0,{},{}",
                num(i1.x),
                num(i1.y),
                num(i0.x),
                num(i0.y),
                r = num(ri)
            ));
        } else {
            d.push_str("L0,0");
        }
        d.push('Z');
        d
    }

    /// Hit test for a point relative to the arc centre.
    pub fn contains(&self, p: Point) -> bool {
        let r = p.x.hypot(p.y);
        if r < self.inner_radius || r > self.outer_radius {
            return false;
        }
        let mut angle = p.x.atan2(-p.y);
        if angle < 0.0 {
            angle += TAU;
        }
        let (lo, hi) = if self.start_angle <= self.end_angle {
            (self.start_angle, self.end_angle)
        } else {
            (self.end_angle, self.start_angle)
        };
        angle >= lo && angle < hi
    }
}
