// Copyright 2025 the Insight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales: coordinate mapping from domain values to pixel positions.
//!
//! The concrete scale types ([`ScaleLinear`], [`ScaleTime`], [`ScaleBand`], [`ScalePoint`])
//! only know about numbers and positions. [`Scale`] pairs them with their domain so callers can
//! map [`DomainValue`]s directly.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::domain::{DomainValue, OrdinalDomain};
use crate::time;

/// Padding used by ordinal scales, as a fraction of the step between categories.
pub const ORDINAL_PADDING: f64 = 0.05;

/// The kind of a [`Scale`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    /// Ordinal scale reserving a band of width per category.
    Band,
    /// Ordinal scale placing each category at a single position.
    Point,
    /// Continuous linear scale.
    Linear,
    /// Continuous time scale.
    Time,
}

/// The domain of a [`Scale`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleDomain<'a> {
    /// Distinct ordinal values in order.
    Discrete(&'a [DomainValue]),
    /// `(min, max)` of a continuous domain.
    Continuous(f64, f64),
}

/// A scale built for one axis.
#[derive(Clone, Debug)]
pub enum Scale {
    /// Band scale over ordinal values.
    Band {
        /// The ordinal domain.
        domain: OrdinalDomain,
        /// Band placement over the range.
        scale: ScaleBand,
    },
    /// Point scale over ordinal values.
    Point {
        /// The ordinal domain.
        domain: OrdinalDomain,
        /// Point placement over the range.
        scale: ScalePoint,
    },
    /// Linear scale.
    Linear(ScaleLinear),
    /// Time scale.
    Time(ScaleTime),
}

impl Scale {
    /// Returns the scale kind.
    pub fn kind(&self) -> ScaleKind {
        match self {
            Self::Band { .. } => ScaleKind::Band,
            Self::Point { .. } => ScaleKind::Point,
            Self::Linear(_) => ScaleKind::Linear,
            Self::Time(_) => ScaleKind::Time,
        }
    }

    /// Maps a domain value to its position in range space.
    ///
    /// Ordinal scales return `None` for values outside their domain. Continuous scales return
    /// `None` for labels.
    pub fn map(&self, value: &DomainValue) -> Option<f64> {
        match self {
            Self::Band { domain, scale } => domain.index_of(value).map(|i| scale.x(i)),
            Self::Point { domain, scale } => domain.index_of(value).map(|i| scale.x(i)),
            Self::Linear(s) => value.as_f64().map(|v| s.map(v)),
            Self::Time(s) => value.as_f64().map(|v| s.map(v)),
        }
    }

    /// Maps a raw number through a continuous scale.
    ///
    /// Returns `None` for band and point scales.
    pub fn map_f64(&self, value: f64) -> Option<f64> {
        self.as_continuous().map(|s| s.map(value))
    }

    /// Returns the scale domain.
    pub fn domain(&self) -> ScaleDomain<'_> {
        match self {
            Self::Band { domain, .. } | Self::Point { domain, .. } => {
                ScaleDomain::Discrete(domain.values())
            }
            Self::Linear(s) => ScaleDomain::Continuous(s.domain_min(), s.domain_max()),
            Self::Time(s) => ScaleDomain::Continuous(s.domain_min(), s.domain_max()),
        }
    }

    /// Returns the output range.
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Band { scale, .. } => scale.range(),
            Self::Point { scale, .. } => scale.range(),
            Self::Linear(s) => s.range(),
            Self::Time(s) => s.range(),
        }
    }

    /// Returns the band width for band scales.
    pub fn bandwidth(&self) -> Option<f64> {
        match self {
            Self::Band { scale, .. } => Some(scale.band_width()),
            _ => None,
        }
    }

    /// Returns the distance between consecutive categories for ordinal scales.
    pub fn step(&self) -> Option<f64> {
        match self {
            Self::Band { scale, .. } => Some(scale.step()),
            Self::Point { scale, .. } => Some(scale.step()),
            _ => None,
        }
    }

    /// Returns tick values for continuous scales.
    ///
    /// Band and point scales return an empty vector; their domain values are the ticks.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        self.as_continuous()
            .map(|s| s.ticks(count))
            .unwrap_or_default()
    }

    /// Returns the continuous scale, if this is one.
    pub fn as_continuous(&self) -> Option<ScaleContinuous> {
        match self {
            Self::Linear(s) => Some(ScaleContinuous::Linear(*s)),
            Self::Time(s) => Some(ScaleContinuous::Time(*s)),
            _ => None,
        }
    }
}

/// A continuous scale instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleContinuous {
    /// Linear scale.
    Linear(ScaleLinear),
    /// Time scale.
    Time(ScaleTime),
}

impl ScaleContinuous {
    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        match self {
            Self::Linear(s) => s.map(x),
            Self::Time(s) => s.map(x),
        }
    }

    /// Maps a value from range space back into domain space.
    pub fn invert(&self, px: f64) -> f64 {
        match self {
            Self::Linear(s) => s.invert(px),
            Self::Time(s) => s.invert(px),
        }
    }

    /// Returns tick values.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match self {
            Self::Linear(s) => s.ticks(count),
            Self::Time(s) => s.ticks(count),
        }
    }

    /// Returns the minimum of the domain.
    pub fn domain_min(&self) -> f64 {
        match self {
            Self::Linear(s) => s.domain_min(),
            Self::Time(s) => s.domain_min(),
        }
    }

    /// Returns the maximum of the domain.
    pub fn domain_max(&self) -> f64 {
        match self {
            Self::Linear(s) => s.domain_max(),
            Self::Time(s) => s.domain_max(),
        }
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A degenerate domain (`min == max`) maps every value to the middle of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0 + 0.5 * (r1 - r0);
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Maps a value from range space back into domain space.
    ///
    /// A degenerate range maps every position to the domain minimum.
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = r1 - r0;
        if denom == 0.0 {
            return d0;
        }
        let t = (px - r0) / denom;
        d0 + t * (d1 - d0)
    }

    /// Returns the minimum of the domain.
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the domain.
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// Returns the output range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns “nice-ish” tick values for the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let step = nice_step((max - min) / count as f64);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    // Ticks stay inside the domain.
    let start = (min / step).ceil();
    let stop = (max / step).floor();
    let n_f = stop - start;
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| (start + i as f64) * step).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// A time scale (a linear scale over timestamps in seconds).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTime {
    inner: ScaleLinear,
}

impl ScaleTime {
    /// Creates a new time scale.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            inner: ScaleLinear::new(domain, range),
        }
    }

    /// Maps a timestamp into range space.
    pub fn map(&self, t: f64) -> f64 {
        self.inner.map(t)
    }

    /// Maps a range position back into a timestamp.
    pub fn invert(&self, px: f64) -> f64 {
        self.inner.invert(px)
    }

    /// Returns tick values aligned to second/minute/hour/day steps.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        time::nice_time_ticks_seconds(self.inner.domain_min(), self.inner.domain_max(), count)
    }

    /// Returns the earliest instant of the domain.
    pub fn domain_min(&self) -> f64 {
        self.inner.domain_min()
    }

    /// Returns the latest instant of the domain.
    pub fn domain_max(&self) -> f64 {
        self.inner.domain_max()
    }

    /// Returns the output range.
    pub fn range(&self) -> (f64, f64) {
        self.inner.range()
    }
}

/// A discrete band scale for categorical charts.
///
/// The range is divided into `count` steps. Each band is `step * (1 - padding_inner)` wide,
/// `padding_outer` steps of space are reserved on both ends, and leftover space is distributed
/// by `align` (`0.5` centers the bands).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
}

impl ScaleBand {
    /// Creates a new band scale covering `count` bands over `range`.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding_inner: 0.1,
            padding_outer: 0.1,
            align: 0.5,
        }
    }

    /// Sets inner and outer padding in step units.
    ///
    /// Inner padding is clamped to `[0, 1]`.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.clamp(0.0, 1.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Sets the alignment of the bands within the range, clamped to `[0, 1]`.
    pub fn with_align(mut self, align: f64) -> Self {
        self.align = align.clamp(0.0, 1.0);
        self
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the output range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns the distance between the starts of consecutive bands.
    pub fn step(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let n = self.count as f64;
        let span = (self.range.1 - self.range.0).abs();
        span / (n - self.padding_inner + 2.0 * self.padding_outer).max(1.0)
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Returns the start position of the band at `index`.
    ///
    /// With a reversed range, index 0 sits at the high end.
    pub fn x(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let (lo, hi) = if r1 >= r0 { (r0, r1) } else { (r1, r0) };
        let step = self.step();
        let n = self.count as f64;
        let start = lo + (hi - lo - step * (n - self.padding_inner)) * self.align;
        let slot = if r1 >= r0 {
            index
        } else {
            self.count.saturating_sub(index + 1)
        };
        start + step * slot as f64
    }
}

/// A discrete point scale (like band without width).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalePoint {
    range: (f64, f64),
    count: usize,
    padding: f64,
    align: f64,
}

impl ScalePoint {
    /// Creates a new point scale.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding: 0.5,
            align: 0.5,
        }
    }

    /// Sets the outer padding in point steps.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Sets the alignment of the points within the range, clamped to `[0, 1]`.
    pub fn with_align(mut self, align: f64) -> Self {
        self.align = align.clamp(0.0, 1.0);
        self
    }

    /// Returns the number of points.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the output range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns the distance between consecutive points.
    pub fn step(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let n = self.count as f64;
        let span = (self.range.1 - self.range.0).abs();
        span / ((n - 1.0) + 2.0 * self.padding).max(1.0)
    }

    /// Returns the position of the point at `index`.
    ///
    /// A single point sits at the aligned middle of the range.
    pub fn x(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let (lo, hi) = if r1 >= r0 { (r0, r1) } else { (r1, r0) };
        let step = self.step();
        let n = self.count as f64;
        let start = lo + (hi - lo - step * (n - 1.0)) * self.align;
        let slot = if r1 >= r0 {
            index
        } else {
            self.count.saturating_sub(index + 1)
        };
        start + step * slot as f64
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn point_scale_positions_are_monotonic() {
        let scale = ScalePoint::new((0.0, 100.0), 5);
        let a = scale.x(0);
        let b = scale.x(1);
        let c = scale.x(2);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn single_point_is_centered() {
        let scale = ScalePoint::new((0.0, 80.0), 1).with_padding(ORDINAL_PADDING);
        assert!(close(scale.x(0), 40.0), "{}", scale.x(0));
    }

    #[test]
    fn point_padding_insets_both_ends_equally() {
        let scale = ScalePoint::new((0.0, 210.0), 3).with_padding(ORDINAL_PADDING);
        let step = scale.step();
        assert!(close(step, 210.0 / 2.1));
        assert!(close(scale.x(0), step * ORDINAL_PADDING));
        assert!(close(210.0 - scale.x(2), step * ORDINAL_PADDING));
    }

    #[test]
    fn band_width_and_outer_inset_follow_padding() {
        let band = ScaleBand::new((0.0, 300.0), 3).with_padding(0.05, 0.05);
        let step = 300.0 / 3.05;
        assert!(close(band.step(), step));
        assert!(close(band.band_width(), step * 0.95));
        assert!(close(band.x(0), step * 0.05));
        let last_end = band.x(2) + band.band_width();
        assert!(close(300.0 - last_end, step * 0.05));
    }

    #[test]
    fn band_scale_without_padding_tiles_the_range() {
        let band = ScaleBand::new((10.0, 30.0), 2).with_padding(0.0, 0.0);
        assert!(close(band.x(0), 10.0));
        assert!(close(band.x(1), 20.0));
        assert!(close(band.band_width(), 10.0));
    }

    #[test]
    fn reversed_band_range_places_first_band_high() {
        let band = ScaleBand::new((30.0, 10.0), 2).with_padding(0.0, 0.0);
        assert!(close(band.x(0), 20.0));
        assert!(close(band.x(1), 10.0));
    }

    #[test]
    fn linear_scale_maps_endpoints_exactly() {
        let s = ScaleLinear::new((-10.0, 20.0), (0.0, 100.0));
        assert_eq!(s.map(-10.0), 0.0);
        assert_eq!(s.map(20.0), 100.0);
        assert!(close(s.map(5.0), 50.0));
        assert!(close(s.invert(50.0), 5.0));
    }

    #[test]
    fn degenerate_linear_domain_maps_to_mid_range() {
        let s = ScaleLinear::new((4.0, 4.0), (0.0, 60.0));
        assert_eq!(s.map(4.0), 30.0);
        assert_eq!(s.map(-100.0), 30.0);
        assert_eq!(s.ticks(5), alloc::vec![4.0]);
    }

    #[test]
    fn linear_ticks_stay_inside_the_domain() {
        let ticks = ScaleLinear::new((-10.0, 20.0), (0.0, 1.0)).ticks(5);
        assert_eq!(ticks.first().copied(), Some(-10.0));
        assert_eq!(ticks.last().copied(), Some(20.0));
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn continuous_accessors_report_domain() {
        let s = ScaleContinuous::Time(ScaleTime::new((60.0, 3600.0), (0.0, 10.0)));
        assert_eq!(s.domain_min(), 60.0);
        assert_eq!(s.domain_max(), 3600.0);
        assert_eq!(s.map(3600.0), 10.0);
    }
}
