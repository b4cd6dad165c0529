// Copyright 2025 the Insight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for scale construction and geometry builds.

use thiserror::Error;

/// Errors returned when classifying a domain or building a scale.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    /// The domain has no values.
    #[error("scale domain is empty")]
    EmptyDomain,
    /// A numeric or time value is NaN or infinite.
    #[error("domain value at index {index} is not finite")]
    NonFiniteValue {
        /// Position of the value in the supplied domain.
        index: usize,
    },
    /// A viewport dimension is negative or not finite.
    #[error("invalid viewport size {width}x{height}")]
    InvalidSize {
        /// Viewport width.
        width: f64,
        /// Viewport height.
        height: f64,
    },
}

/// Errors returned when building area geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The value (y) scale is a band or point scale.
    #[error("area geometry needs a continuous value scale")]
    DiscreteValueScale,
    /// A point's x value is not part of the x scale's domain.
    #[error("x value of point {index} is not in the x scale domain")]
    UnmappedX {
        /// Position of the point in the series.
        index: usize,
    },
    /// A point's `y`, or its `y0` in a stacked layout, is NaN or infinite.
    #[error("point {index} has a non-finite y value")]
    NonFiniteValue {
        /// Position of the point in the series.
        index: usize,
    },
}
