// Copyright 2025 the Insight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart coordinate mapping and area geometry.
//!
//! This crate is the numeric core under a chart renderer:
//! - **Scales** map domain values (labels, numbers, instants) to pixel positions.
//!   [`ScaleBuilder`] classifies a domain once and builds a band, point, linear or time
//!   scale over `[0, extent]`, where the extent is picked by axis orientation.
//! - **Area shapes** turn a series plus an x/y scale pair into a closed [`kurbo::BezPath`],
//!   handling stacked baselines, sign changes and optional Catmull-Rom smoothing.
//!
//! Drawing, styling and interaction are out of scope; callers consume the positions and
//! paths produced here.
//!
//! ```
//! use insight_charts::{
//!     Axis, AxisOrient, ChartOptions, ChartType, DomainValue, ScaleBuilder, SeriesPoint, Size,
//!     area_shape,
//! };
//!
//! let size = Size::new(300.0, 100.0);
//! let options = ChartOptions::new(ChartType::Area).with_y_orientation(AxisOrient::Left);
//! let x = ScaleBuilder::new(Axis::X, vec!["a".into(), "b".into()], options, size)?.generate();
//! let y = ScaleBuilder::new(
//!     Axis::Y,
//!     vec![DomainValue::Number(0.0), DomainValue::Number(10.0)],
//!     options,
//!     size,
//! )?
//! .generate();
//!
//! let data = [SeriesPoint::new("a", 2.0), SeriesPoint::new("b", 8.0)];
//! let shape = area_shape(&x, &y, &data, size, &options)?;
//! assert_eq!(shape.top.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![no_std]

extern crate alloc;

mod area;
#[cfg(test)]
mod area_tests;
mod builder;
mod curve;
mod domain;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod options;
mod scale;
mod series;
mod time;

pub use area::{AreaShape, AreaShapeSpec, BoundaryRule, BoundaryRules, area_shape, boundary_rules};
pub use builder::{ScaleBuilder, ScaleInputs, generate_scale};
pub use curve::Curve;
pub use domain::{DomainValue, OrdinalDomain, ScaleClass, classify, extent};
pub use error::{GeometryError, ScaleError};
pub use insight_transforms::{StackError, StackOffset};
pub use options::{AreaLayout, Axis, AxisOptions, AxisOrient, ChartOptions, ChartType, Size};
pub use scale::{
    ORDINAL_PADDING, Scale, ScaleBand, ScaleContinuous, ScaleDomain, ScaleKind, ScaleLinear,
    ScalePoint, ScaleTime,
};
pub use series::{SeriesPoint, stacked_series};
pub use time::{format_time_seconds, nice_time_ticks_seconds};
