// Copyright 2025 the Insight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area shape generation.
//!
//! An area is bounded per point by a top and a bottom position on the value axis. Which data
//! value (or fixed line) each boundary uses is decided by [`boundary_rules`]; the resulting
//! positions are then traced into a closed path, top boundary first and bottom boundary in
//! reverse.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point};

use crate::curve::Curve;
use crate::error::GeometryError;
use crate::options::{AreaLayout, ChartOptions, Size};
use crate::scale::{Scale, ScaleContinuous};
use crate::series::SeriesPoint;

/// Where a boundary is drawn for one point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryRule {
    /// The value axis' zero line, `y(0)`.
    ZeroLine,
    /// The stack baseline, `y(y0)`.
    Baseline,
    /// The point's own value, `y(y)`.
    Value,
    /// The top of the stack, `y(y0 + y)`.
    StackTop,
    /// The far edge of the plot, at the viewport height.
    PlotFloor,
}

/// The pair of rules used for one point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundaryRules {
    /// Rule for the bottom boundary.
    pub bottom: BoundaryRule,
    /// Rule for the top boundary.
    pub top: BoundaryRule,
}

/// Decides the boundary rules for one point.
///
/// | layout  | condition             | bottom      | top        |
/// |---------|-----------------------|-------------|------------|
/// | stacked | `y < 0` and `y0 > 0`  | `ZeroLine`  | `Value`    |
/// | stacked | `y < 0` and `y0 == 0` | `ZeroLine`  | `StackTop` |
/// | stacked | otherwise             | `Baseline`  | `StackTop` |
/// | normal  | `y_min < 0`           | `ZeroLine`  | `Value`    |
/// | normal  | otherwise             | `PlotFloor` | `Value`    |
///
/// `y_min` is the minimum of the value axis domain.
pub fn boundary_rules(layout: AreaLayout, y: f64, y0: f64, y_min: f64) -> BoundaryRules {
    use BoundaryRule::*;

    let (bottom, top) = match layout {
        AreaLayout::Stacked if y < 0.0 && y0 > 0.0 => (ZeroLine, Value),
        AreaLayout::Stacked if y < 0.0 && y0 >= 0.0 => (ZeroLine, StackTop),
        AreaLayout::Stacked => (Baseline, StackTop),
        AreaLayout::Normal if y_min < 0.0 => (ZeroLine, Value),
        AreaLayout::Normal => (PlotFloor, Value),
    };
    BoundaryRules { bottom, top }
}

impl BoundaryRule {
    /// Resolves the rule to a position in range space.
    pub fn resolve(self, y_scale: &ScaleContinuous, y: f64, y0: f64, size: Size) -> f64 {
        match self {
            Self::ZeroLine => y_scale.map(0.0),
            Self::Baseline => y_scale.map(y0),
            Self::Value => y_scale.map(y),
            Self::StackTop => y_scale.map(y0 + y),
            Self::PlotFloor => size.height,
        }
    }
}

/// Area geometry for one series.
#[derive(Clone, Debug, Default)]
pub struct AreaShape {
    /// Top boundary, one position per input point, in input order.
    pub top: Vec<Point>,
    /// Bottom boundary, one position per input point, in input order.
    pub bottom: Vec<Point>,
    /// Closed outline: `top` forward, then `bottom` in reverse.
    pub path: BezPath,
}

/// An area shape derived from a series and a pair of scales.
///
/// Points are expected in ascending x order. With a band x scale, points are centered within
/// their band.
#[derive(Clone, Copy, Debug)]
pub struct AreaShapeSpec<'a> {
    /// Scale for the category axis.
    pub x_scale: &'a Scale,
    /// Scale for the value axis (must be continuous).
    pub y_scale: &'a Scale,
    /// Viewport size.
    pub size: Size,
    /// Series layout.
    pub layout: AreaLayout,
    /// Interpolation between points.
    pub curve: Curve,
}

impl<'a> AreaShapeSpec<'a> {
    /// Creates an unstacked, straight-segment area spec.
    pub fn new(x_scale: &'a Scale, y_scale: &'a Scale, size: Size) -> Self {
        Self {
            x_scale,
            y_scale,
            size,
            layout: AreaLayout::Normal,
            curve: Curve::Linear,
        }
    }

    /// Sets the series layout.
    pub fn with_layout(mut self, layout: AreaLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Enables centripetal Catmull-Rom smoothing, or disables smoothing.
    pub fn with_spline(mut self, spline: bool) -> Self {
        self.curve = if spline {
            Curve::CENTRIPETAL
        } else {
            Curve::Linear
        };
        self
    }

    /// Sets the interpolation curve.
    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    /// Builds the area shape for `data`.
    ///
    /// A missing `y0` in a stacked layout is treated as `0`; unstacked layouts ignore `y0`.
    pub fn build(&self, data: &[SeriesPoint]) -> Result<AreaShape, GeometryError> {
        let y_scale = self
            .y_scale
            .as_continuous()
            .ok_or(GeometryError::DiscreteValueScale)?;
        let half_band = self.x_scale.bandwidth().map_or(0.0, |bw| bw / 2.0);
        let y_min = y_scale.domain_min();

        let mut top = Vec::with_capacity(data.len());
        let mut bottom = Vec::with_capacity(data.len());

        for (index, d) in data.iter().enumerate() {
            let x = self
                .x_scale
                .map(&d.x)
                .ok_or(GeometryError::UnmappedX { index })?
                + half_band;
            // Unstacked areas never read the baseline.
            let y0 = match self.layout {
                AreaLayout::Stacked => d.y0.unwrap_or(0.0),
                AreaLayout::Normal => 0.0,
            };
            if !d.y.is_finite() || !y0.is_finite() {
                return Err(GeometryError::NonFiniteValue { index });
            }

            let rules = boundary_rules(self.layout, d.y, y0, y_min);
            tracing::trace!(index, y = d.y, y0, ?rules, "area boundaries");

            top.push(Point::new(
                x,
                rules.top.resolve(&y_scale, d.y, y0, self.size),
            ));
            bottom.push(Point::new(
                x,
                rules.bottom.resolve(&y_scale, d.y, y0, self.size),
            ));
        }

        let curve = self.curve;
        let mut path = BezPath::new();
        if !top.is_empty() {
            curve.trace(&mut path, top.iter().copied(), false);
            curve.trace(&mut path, bottom.iter().rev().copied(), true);
            path.close_path();
        }

        tracing::debug!(
            layout = ?self.layout,
            ?curve,
            points = data.len(),
            "built area shape"
        );

        Ok(AreaShape { top, bottom, path })
    }
}

/// Builds an area shape, reading layout and smoothing from chart options.
pub fn area_shape(
    x_scale: &Scale,
    y_scale: &Scale,
    data: &[SeriesPoint],
    size: Size,
    options: &ChartOptions,
) -> Result<AreaShape, GeometryError> {
    AreaShapeSpec::new(x_scale, y_scale, size)
        .with_layout(options.layout)
        .with_spline(options.spline)
        .build(data)
}
