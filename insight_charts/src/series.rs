// Copyright 2025 the Insight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series data points.

extern crate alloc;

use alloc::vec::Vec;

use insight_transforms::{StackError, StackOffset, stack};

use crate::domain::DomainValue;

/// One data point of a series.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    /// Position on the category axis.
    pub x: DomainValue,
    /// The point's own value.
    pub y: f64,
    /// Stack baseline; only meaningful for stacked layouts.
    pub y0: Option<f64>,
}

impl SeriesPoint {
    /// Creates an unstacked point.
    pub fn new(x: impl Into<DomainValue>, y: f64) -> Self {
        Self {
            x: x.into(),
            y,
            y0: None,
        }
    }

    /// Creates a stacked point sitting on `y0`.
    pub fn stacked(x: impl Into<DomainValue>, y: f64, y0: f64) -> Self {
        Self {
            x: x.into(),
            y,
            y0: Some(y0),
        }
    }
}

/// Stacks index-aligned series over a shared x domain.
///
/// `series[s][i]` is the value of series `s` at `x[i]`. Returns one point sequence per
/// series with `y0` filled in.
pub fn stacked_series(
    x: &[DomainValue],
    series: &[&[f64]],
    offset: StackOffset,
) -> Result<Vec<Vec<SeriesPoint>>, StackError> {
    if let Some((s, values)) = series
        .iter()
        .enumerate()
        .find(|(_, values)| values.len() != x.len())
    {
        return Err(StackError::LengthMismatch {
            series: s,
            expected: x.len(),
            found: values.len(),
        });
    }

    let stacked = stack(series, offset)?;
    Ok(stacked
        .into_iter()
        .map(|values| {
            x.iter()
                .zip(values)
                .map(|(x, v)| SeriesPoint::stacked(x.clone(), v.y, v.y0))
                .collect()
        })
        .collect())
}
