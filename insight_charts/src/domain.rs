// Copyright 2025 the Insight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Domain values and domain classification.
//!
//! A domain is the ordered list of values an axis represents. Before a scale is built, the
//! domain is classified once into a [`ScaleClass`]:
//! - any [`DomainValue::Category`] present makes the domain ordinal, even when mixed with
//!   numbers or instants (those become labels keyed by their value);
//! - a domain made only of [`DomainValue::Time`] is temporal;
//! - anything else is linear, with instants contributing their seconds.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::hash::{Hash, Hasher};

use hashbrown::{Equivalent, HashMap};

use crate::error::ScaleError;

/// A single value of an axis domain.
#[derive(Clone, Debug, PartialEq)]
pub enum DomainValue {
    /// A categorical label.
    Category(String),
    /// A finite number.
    Number(f64),
    /// An instant, in seconds.
    Time(f64),
}

impl DomainValue {
    /// Returns the numeric value for numbers and instants, `None` for labels.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Category(_) => None,
            Self::Number(v) | Self::Time(v) => Some(*v),
        }
    }

    /// Returns `true` for categorical labels.
    pub fn is_category(&self) -> bool {
        matches!(self, Self::Category(_))
    }

    fn key(&self) -> OrdinalKeyRef<'_> {
        match self {
            Self::Category(s) => OrdinalKeyRef::Category(s),
            Self::Number(v) => OrdinalKeyRef::Number(float_key(*v)),
            Self::Time(v) => OrdinalKeyRef::Time(float_key(*v)),
        }
    }
}

impl From<&str> for DomainValue {
    fn from(value: &str) -> Self {
        Self::Category(value.into())
    }
}

impl From<String> for DomainValue {
    fn from(value: String) -> Self {
        Self::Category(value)
    }
}

impl From<f64> for DomainValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// The mapping strategy a domain calls for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleClass {
    /// Discrete labels (band or point scale).
    Ordinal,
    /// Instants (time scale).
    Time,
    /// Numbers (linear scale).
    Linear,
}

/// Classifies a domain.
///
/// Fails on an empty domain and on NaN or infinite numbers/instants.
pub fn classify(values: &[DomainValue]) -> Result<ScaleClass, ScaleError> {
    if values.is_empty() {
        return Err(ScaleError::EmptyDomain);
    }
    if let Some(index) = values
        .iter()
        .position(|v| v.as_f64().is_some_and(|x| !x.is_finite()))
    {
        return Err(ScaleError::NonFiniteValue { index });
    }

    let class = if values.iter().any(DomainValue::is_category) {
        ScaleClass::Ordinal
    } else if values.iter().all(|v| matches!(v, DomainValue::Time(_))) {
        ScaleClass::Time
    } else {
        ScaleClass::Linear
    };
    Ok(class)
}

/// Returns `(min, max)` over the numeric values of a domain.
///
/// Labels are skipped. Returns `None` if there are no numeric values.
pub fn extent(values: &[DomainValue]) -> Option<(f64, f64)> {
    let mut out: Option<(f64, f64)> = None;
    for v in values.iter().filter_map(DomainValue::as_f64) {
        out = Some(match out {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        });
    }
    out
}

/// The distinct values of an ordinal domain, in first-seen order.
///
/// Repeated values keep the position of their first occurrence.
#[derive(Clone, Debug, Default)]
pub struct OrdinalDomain {
    values: Vec<DomainValue>,
    index: HashMap<OrdinalKey, usize>,
}

impl OrdinalDomain {
    /// Builds an ordinal domain from raw values.
    pub fn new(values: &[DomainValue]) -> Self {
        let mut out = Self {
            values: Vec::with_capacity(values.len()),
            index: HashMap::with_capacity(values.len()),
        };
        for v in values {
            if out.index.contains_key(&v.key()) {
                continue;
            }
            out.index.insert(v.key().into_owned(), out.values.len());
            out.values.push(v.clone());
        }
        out
    }

    /// Returns the distinct values.
    pub fn values(&self) -> &[DomainValue] {
        &self.values
    }

    /// Returns the number of distinct values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the domain has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the position of `value` in the domain.
    pub fn index_of(&self, value: &DomainValue) -> Option<usize> {
        self.index.get(&value.key()).copied()
    }
}

fn float_key(v: f64) -> u64 {
    // Fold -0.0 into 0.0 so both label the same slot.
    if v == 0.0 { 0_u64 } else { v.to_bits() }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum OrdinalKey {
    Category(String),
    Number(u64),
    Time(u64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OrdinalKeyRef<'a> {
    Category(&'a str),
    Number(u64),
    Time(u64),
}

impl OrdinalKey {
    fn borrowed(&self) -> OrdinalKeyRef<'_> {
        match self {
            Self::Category(s) => OrdinalKeyRef::Category(s),
            Self::Number(b) => OrdinalKeyRef::Number(*b),
            Self::Time(b) => OrdinalKeyRef::Time(*b),
        }
    }
}

impl OrdinalKeyRef<'_> {
    fn into_owned(self) -> OrdinalKey {
        match self {
            Self::Category(s) => OrdinalKey::Category(s.into()),
            Self::Number(b) => OrdinalKey::Number(b),
            Self::Time(b) => OrdinalKey::Time(b),
        }
    }
}

// Both key forms must hash identically for borrowed lookups.
impl Hash for OrdinalKeyRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Category(s) => {
                0_u8.hash(state);
                s.hash(state);
            }
            Self::Number(b) => {
                1_u8.hash(state);
                b.hash(state);
            }
            Self::Time(b) => {
                2_u8.hash(state);
                b.hash(state);
            }
        }
    }
}

impl Hash for OrdinalKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.borrowed().hash(state);
    }
}

impl Equivalent<OrdinalKey> for OrdinalKeyRef<'_> {
    fn equivalent(&self, key: &OrdinalKey) -> bool {
        *self == key.borrowed()
    }
}
