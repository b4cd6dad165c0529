// Copyright 2025 the Insight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale construction from chart inputs.
//!
//! [`ScaleBuilder`] owns one axis' inputs (categories, options, viewport size) as a single
//! [`ScaleInputs`] value. The domain is classified when the inputs are accepted; generating
//! a scale afterwards cannot fail. [`ScaleBuilder::update`] swaps the whole input value, and
//! leaves the previous one in place if the new inputs are rejected.

extern crate alloc;

use alloc::vec::Vec;

use crate::domain::{self, DomainValue, OrdinalDomain, ScaleClass};
use crate::error::ScaleError;
use crate::options::{Axis, ChartOptions, Size};
use crate::scale::{ORDINAL_PADDING, Scale, ScaleBand, ScaleLinear, ScalePoint, ScaleTime};

/// The complete set of inputs a scale is generated from.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleInputs {
    /// Domain values, in order.
    pub categories: Vec<DomainValue>,
    /// Chart options.
    pub options: ChartOptions,
    /// Viewport size.
    pub size: Size,
}

/// Builds the scale of one axis and rebuilds it when inputs change.
#[derive(Clone, Debug)]
pub struct ScaleBuilder {
    axis: Axis,
    inputs: ScaleInputs,
    class: ScaleClass,
}

impl ScaleBuilder {
    /// Creates a builder for `axis`, validating and classifying the inputs.
    pub fn new(
        axis: Axis,
        categories: Vec<DomainValue>,
        options: ChartOptions,
        size: Size,
    ) -> Result<Self, ScaleError> {
        let inputs = ScaleInputs {
            categories,
            options,
            size,
        };
        let class = validate(&inputs)?;
        Ok(Self {
            axis,
            inputs,
            class,
        })
    }

    /// Returns the axis this builder generates scales for.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Returns the current inputs.
    pub fn inputs(&self) -> &ScaleInputs {
        &self.inputs
    }

    /// Returns the classification of the current domain.
    pub fn class(&self) -> ScaleClass {
        self.class
    }

    /// Generates a scale from the current inputs.
    pub fn generate(&self) -> Scale {
        let ScaleInputs {
            categories,
            options,
            size,
        } = &self.inputs;
        let orientation = options.axis(self.axis).orientation;
        let range = (0.0, orientation.extent(*size));

        let scale = match self.class {
            ScaleClass::Ordinal => {
                let domain = OrdinalDomain::new(categories);
                let count = domain.len();
                let padding = ORDINAL_PADDING;
                if options.chart_type.uses_bands() {
                    let scale = ScaleBand::new(range, count).with_padding(padding, padding);
                    Scale::Band { domain, scale }
                } else {
                    let scale = ScalePoint::new(range, count).with_padding(padding);
                    Scale::Point { domain, scale }
                }
            }
            ScaleClass::Time => Scale::Time(ScaleTime::new(numeric_extent(categories), range)),
            ScaleClass::Linear => {
                Scale::Linear(ScaleLinear::new(numeric_extent(categories), range))
            }
        };

        tracing::debug!(
            axis = ?self.axis,
            class = ?self.class,
            kind = ?scale.kind(),
            ?orientation,
            extent = range.1,
            "generated scale"
        );
        scale
    }

    /// Replaces all inputs and generates a new scale.
    ///
    /// If the new inputs are rejected, the builder keeps its previous inputs.
    pub fn update(
        &mut self,
        categories: Vec<DomainValue>,
        options: ChartOptions,
        size: Size,
    ) -> Result<Scale, ScaleError> {
        let inputs = ScaleInputs {
            categories,
            options,
            size,
        };
        let class = validate(&inputs)?;
        self.inputs = inputs;
        self.class = class;
        Ok(self.generate())
    }
}

/// Generates a scale without keeping a builder around.
pub fn generate_scale(
    axis: Axis,
    categories: &[DomainValue],
    options: ChartOptions,
    size: Size,
) -> Result<Scale, ScaleError> {
    ScaleBuilder::new(axis, categories.to_vec(), options, size).map(|b| b.generate())
}

fn validate(inputs: &ScaleInputs) -> Result<ScaleClass, ScaleError> {
    if !inputs.size.is_valid() {
        return Err(ScaleError::InvalidSize {
            width: inputs.size.width,
            height: inputs.size.height,
        });
    }
    domain::classify(&inputs.categories)
}

// Classification guarantees at least one numeric value for time and linear domains.
fn numeric_extent(values: &[DomainValue]) -> (f64, f64) {
    domain::extent(values).unwrap_or((0.0, 0.0))
}
