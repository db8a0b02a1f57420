// File: crates/chart-core/src/scale.rs
// Summary: Domain→range transforms: linear, sqrt, band, ordinal color, and pie angles.

use std::collections::HashMap;
use std::f64::consts::TAU;

use crate::grid::{tick_increment, tick_step, ticks};
use crate::theme::Color;

/// Continuous linear mapping from a numeric domain onto a pixel range.
/// Vertical axes pass an inverted range (`(inner_h, 0)`) so larger values sit higher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    pub fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }
    pub fn range(&self) -> (f64, f64) { (self.r0, self.r1) }

    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        let span = self.d1 - self.d0;
        if span == 0.0 {
            return (self.r0 + self.r1) / 2.0;
        }
        self.r0 + (v - self.d0) / span * (self.r1 - self.r0)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let span = self.r1 - self.r0;
        if span == 0.0 {
            return (self.d0 + self.d1) / 2.0;
        }
        self.d0 + (px - self.r0) / span * (self.d1 - self.d0)
    }

    /// Extend the domain outward to round tick boundaries. The domain is left
    /// untouched when the step does not settle within ten passes.
    pub fn nice(mut self, count: usize) -> Self {
        let reverse = self.d1 < self.d0;
        let (mut start, mut stop) = if reverse { (self.d1, self.d0) } else { (self.d0, self.d1) };
        if !start.is_finite() || !stop.is_finite() || start == stop || count == 0 {
            return self;
        }
        let mut prestep: Option<f64> = None;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if prestep == Some(step) {
                if reverse {
                    self.d0 = stop;
                    self.d1 = start;
                } else {
                    self.d0 = start;
                    self.d1 = stop;
                }
                return self;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }
        self
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.d0, self.d1, count)
    }

    /// Spacing between the values returned by [`LinearScale::ticks`].
    pub fn tick_step(&self, count: usize) -> f64 {
        tick_step(self.d0, self.d1, count).abs()
    }
}

/// Square-root scale: visual area, not radius, grows linearly with the input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SqrtScale {
    inner: LinearScale,
}

fn signed_sqrt(v: f64) -> f64 {
    if v < 0.0 { -(-v).sqrt() } else { v.sqrt() }
}

impl SqrtScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { inner: LinearScale::new((signed_sqrt(domain.0), signed_sqrt(domain.1)), range) }
    }

    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        self.inner.apply(signed_sqrt(v))
    }

    pub fn range(&self) -> (f64, f64) {
        self.inner.range()
    }
}

/// Discrete categories mapped onto evenly spaced slots with padding.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Duplicate keys keep their first position.
    pub fn new<I, S>(keys: I, range: (f64, f64)) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut domain: Vec<String> = Vec::new();
        for k in keys {
            let k = k.into();
            if !domain.contains(&k) {
                domain.push(k);
            }
        }
        let mut s = Self {
            domain,
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
            start: 0.0,
            step: 0.0,
            bandwidth: 0.0,
        };
        s.rescale();
        s
    }

    /// Same padding inside and outside the bands.
    pub fn padding(mut self, p: f64) -> Self {
        self.padding_inner = p.clamp(0.0, 1.0);
        self.padding_outer = p.max(0.0);
        self.rescale();
        self
    }

    fn rescale(&mut self) {
        let n = self.domain.len() as f64;
        let (r0, r1) = self.range;
        let (lo, hi) = if r1 < r0 { (r1, r0) } else { (r0, r1) };
        self.step = (hi - lo) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        self.start = lo + (hi - lo - self.step * (n - self.padding_inner)) * self.align;
        self.bandwidth = self.step * (1.0 - self.padding_inner);
    }

    pub fn domain(&self) -> &[String] { &self.domain }
    pub fn range(&self) -> (f64, f64) { self.range }
    pub fn step(&self) -> f64 { self.step }
    pub fn bandwidth(&self) -> f64 { self.bandwidth }

    /// Left edge of the band for `key`.
    pub fn position(&self, key: &str) -> Option<f64> {
        let i = self.domain.iter().position(|k| k == key)?;
        let n = self.domain.len();
        let i = if self.range.1 < self.range.0 { n - 1 - i } else { i };
        Some(self.start + self.step * i as f64)
    }
}

/// Category → palette color, assigned in first-seen order and cycling when the
/// palette runs out. Unknown keys are appended on first lookup.
#[derive(Clone, Debug)]
pub struct OrdinalScale {
    palette: &'static [Color],
    domain: Vec<String>,
    index: HashMap<String, usize>,
}

impl OrdinalScale {
    pub fn new(palette: &'static [Color]) -> Self {
        Self { palette, domain: Vec::new(), index: HashMap::new() }
    }

    pub fn with_domain<I, S>(palette: &'static [Color], keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut s = Self::new(palette);
        for k in keys {
            s.insert(k.as_ref());
        }
        s
    }

    fn insert(&mut self, key: &str) -> usize {
        if let Some(&i) = self.index.get(key) {
            return i;
        }
        let i = self.domain.len();
        self.domain.push(key.to_string());
        self.index.insert(key.to_string(), i);
        i
    }

    pub fn domain(&self) -> &[String] { &self.domain }

    pub fn get(&self, key: &str) -> Option<Color> {
        self.index.get(key).map(|&i| self.pick(i))
    }

    pub fn color(&mut self, key: &str) -> Color {
        let i = self.insert(key);
        self.pick(i)
    }

    fn pick(&self, i: usize) -> Color {
        if self.palette.is_empty() {
            return Color::BLACK;
        }
        self.palette[i % self.palette.len()]
    }
}

/// One wedge of a pie layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieSlice {
    pub index: usize,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Proportional sweep angles in input order, starting at 12 o'clock and
/// summing to a full turn. Non-positive or NaN values get a zero sweep.
pub fn pie(values: &[f64]) -> Vec<PieSlice> {
    let sum: f64 = values.iter().copied().filter(|v| *v > 0.0).sum();
    let k = if sum > 0.0 { TAU / sum } else { 0.0 };
    let mut angle = 0.0;
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let sweep = if value > 0.0 { value * k } else { 0.0 };
            let slice = PieSlice { index, value, start_angle: angle, end_angle: angle + sweep };
            angle += sweep;
            slice
        })
        .collect()
}

/// Min and max over the finite values, or `None` when there are none.
pub fn extent<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    values.into_iter().filter(|v| v.is_finite()).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

pub fn max<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
    extent(values).map(|(_, hi)| hi)
}

/// Median of the finite values; the mean of the middle pair for even counts.
pub fn median(values: &[f64]) -> Option<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);
    let pos = (sorted.len() - 1) as f64 * 0.5;
    let i0 = pos.floor() as usize;
    let lo = sorted[i0];
    let hi = sorted[(i0 + 1).min(sorted.len() - 1)];
    Some(lo + (hi - lo) * (pos - i0 as f64))
}
