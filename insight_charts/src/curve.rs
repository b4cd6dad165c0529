// Copyright 2025 the Insight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curves that trace a sequence of points into a path.
//!
//! [`Curve::CatmullRom`] emits one cubic segment per pair of consecutive points. Control
//! points are placed with the Barry-Goldman parameterization, weighted by the distances to
//! the neighboring points raised to `alpha` (`0.5` is the centripetal variant, which neither
//! forms cusps nor self-intersects within a segment).

use kurbo::{BezPath, Point};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

const EPSILON: f64 = 1e-12;

/// Interpolation between consecutive points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Curve {
    /// Straight segments.
    #[default]
    Linear,
    /// Catmull-Rom spline through every point.
    CatmullRom {
        /// Knot parameterization exponent in `[0, 1]`.
        alpha: f64,
    },
}

impl Curve {
    /// Centripetal Catmull-Rom (`alpha = 0.5`).
    pub const CENTRIPETAL: Self = Self::CatmullRom { alpha: 0.5 };

    /// Appends `points` to `path`.
    ///
    /// If `join` is `false`, the first point starts a new subpath; otherwise it is connected
    /// to the current end of `path` with a straight segment.
    pub fn trace(self, path: &mut BezPath, points: impl IntoIterator<Item = Point>, join: bool) {
        match self {
            Self::Linear => {
                for (i, pt) in points.into_iter().enumerate() {
                    if i == 0 && !join {
                        path.move_to(pt);
                    } else {
                        path.line_to(pt);
                    }
                }
            }
            Self::CatmullRom { alpha } => {
                let mut tracer = CatmullRom::new(path, alpha.clamp(0.0, 1.0));
                for (i, pt) in points.into_iter().enumerate() {
                    if i == 0 {
                        tracer.start(pt, join);
                    } else {
                        tracer.point(pt);
                    }
                }
                tracer.finish();
            }
        }
    }
}

/// Sliding window over the last three points plus the knot distances between them.
struct CatmullRom<'a> {
    path: &'a mut BezPath,
    alpha: f64,
    count: usize,
    p0: Point,
    p1: Point,
    p2: Point,
    // `l*_a` is the distance raised to `alpha`, `l*_2a` the distance raised to `2 * alpha`.
    l01_a: f64,
    l12_a: f64,
    l23_a: f64,
    l01_2a: f64,
    l12_2a: f64,
    l23_2a: f64,
}

impl<'a> CatmullRom<'a> {
    fn new(path: &'a mut BezPath, alpha: f64) -> Self {
        Self {
            path,
            alpha,
            count: 0,
            p0: Point::ZERO,
            p1: Point::ZERO,
            p2: Point::ZERO,
            l01_a: 0.0,
            l12_a: 0.0,
            l23_a: 0.0,
            l01_2a: 0.0,
            l12_2a: 0.0,
            l23_2a: 0.0,
        }
    }

    fn start(&mut self, pt: Point, join: bool) {
        if join {
            self.path.line_to(pt);
        } else {
            self.path.move_to(pt);
        }
        self.count = 1;
        self.shift(pt);
    }

    fn point(&mut self, pt: Point) {
        let d2 = (self.p2 - pt).hypot2();
        self.l23_2a = d2.powf(self.alpha);
        self.l23_a = self.l23_2a.sqrt();

        // The first segment is only emitted once the third point is known.
        if self.count >= 2 {
            self.segment(pt);
        }
        self.count += 1;
        self.shift(pt);
    }

    fn finish(&mut self) {
        match self.count {
            2 => self.path.line_to(self.p2),
            // Close the last segment by repeating the endpoint.
            n if n >= 3 => self.point(self.p2),
            _ => {}
        }
    }

    fn shift(&mut self, pt: Point) {
        self.l01_a = self.l12_a;
        self.l12_a = self.l23_a;
        self.l01_2a = self.l12_2a;
        self.l12_2a = self.l23_2a;
        self.p0 = self.p1;
        self.p1 = self.p2;
        self.p2 = pt;
    }

    /// Emits the cubic from `p1` to `p2`, with `p3` as the lookahead point.
    fn segment(&mut self, p3: Point) {
        let (p0, p1, p2) = (self.p0.to_vec2(), self.p1.to_vec2(), self.p2.to_vec2());
        let p3 = p3.to_vec2();
        let mut c1 = self.p1;
        let mut c2 = self.p2;

        if self.l01_a > EPSILON {
            let a = 2.0 * self.l01_2a + 3.0 * self.l01_a * self.l12_a + self.l12_2a;
            let n = 3.0 * self.l01_a * (self.l01_a + self.l12_a);
            c1 = ((p1 * a - p0 * self.l12_2a + p2 * self.l01_2a) / n).to_point();
        }

        if self.l23_a > EPSILON {
            let b = 2.0 * self.l23_2a + 3.0 * self.l23_a * self.l12_a + self.l12_2a;
            let m = 3.0 * self.l23_a * (self.l23_a + self.l12_a);
            c2 = ((p2 * b + p1 * self.l23_2a - p3 * self.l12_2a) / m).to_point();
        }

        self.path.curve_to(c1, c2, self.p2);
    }
}
