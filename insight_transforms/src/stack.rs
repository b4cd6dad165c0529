// Copyright 2025 the Insight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack layout for index-aligned series.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use thiserror::Error;

/// Stack baseline offset mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StackOffset {
    /// Each baseline is the running sum of every prior series' value at the same index.
    ///
    /// Sign changes are not separated: a negative value lowers the baseline of the series
    /// stacked above it. Area geometry handles the resulting sign-straddling segments.
    #[default]
    Cumulative,
    /// Stack positive values upward and negative values downward from 0.
    ///
    /// This corresponds to Vega's `stack` transform with `offset = "zero"`.
    Diverging,
}

/// One stacked value: the series' own value plus the baseline it sits on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackedValue {
    /// The series' own value.
    pub y: f64,
    /// The stack baseline below this value.
    pub y0: f64,
}

impl StackedValue {
    /// Returns the top of this value in the stack (`y0 + y`).
    pub fn y1(&self) -> f64 {
        self.y0 + self.y
    }
}

/// Errors returned by [`stack`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackError {
    /// A series has a different number of values than the first series.
    #[error("series {series} has {found} values, expected {expected}")]
    LengthMismatch {
        /// Index of the offending series.
        series: usize,
        /// Length of the first series.
        expected: usize,
        /// Length of the offending series.
        found: usize,
    },
    /// A value is NaN or infinite.
    #[error("series {series} has a non-finite value at index {index}")]
    NonFiniteValue {
        /// Index of the offending series.
        series: usize,
        /// Index of the value within the series.
        index: usize,
    },
}

/// Computes stack baselines for index-aligned series.
///
/// Series are stacked in slice order: `series[0]` sits on zero, `series[1]` on top of it, and
/// so on. Every series must have the same length; index `i` of each series is treated as the
/// same x position.
///
/// Returns one `Vec<StackedValue>` per input series.
pub fn stack(
    series: &[&[f64]],
    offset: StackOffset,
) -> Result<Vec<Vec<StackedValue>>, StackError> {
    let Some(first) = series.first() else {
        return Ok(Vec::new());
    };
    let n = first.len();
    for (s, values) in series.iter().enumerate() {
        if values.len() != n {
            return Err(StackError::LengthMismatch {
                series: s,
                expected: n,
                found: values.len(),
            });
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(StackError::NonFiniteValue { series: s, index });
        }
    }

    tracing::debug!(series = series.len(), points = n, ?offset, "stacking series");

    // Running totals per x position, above and below zero.
    let mut above = vec![0.0; n];
    let mut below = vec![0.0; n];
    let mut out = Vec::with_capacity(series.len());
    for values in series {
        let mut stacked = Vec::with_capacity(n);
        for ((&y, up), down) in values.iter().zip(&mut above).zip(&mut below) {
            let base = match offset {
                StackOffset::Diverging if y < 0.0 => down,
                _ => up,
            };
            stacked.push(StackedValue { y, y0: *base });
            *base += y;
        }
        out.push(stacked);
    }

    Ok(out)
}
