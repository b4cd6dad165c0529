// Copyright 2025 the Insight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series transforms for `insight_charts`.
//!
//! This crate provides:
//! - a stack layout that derives the `y0` baseline for every point of index-aligned series, and
//! - the [`StackOffset`] modes controlling how baselines accumulate.
//!
//! Series are plain numeric slices; pairing values with x-domain values is left to the caller
//! (see `insight_charts::stacked_series`).

#![no_std]

extern crate alloc;

mod stack;

pub use stack::{StackError, StackOffset, StackedValue, stack};
