//! Named crisp input assignments
//!
//! An [`Inputs`] value maps input-variable names to crisp values for one
//! `compute` call. Lookups of names absent from the assignment fail with an
//! unbound-variable error rather than defaulting to zero.

use indexmap::IndexMap;

use crate::error::{SugenoError, SugenoResult};

/// One crisp value per input variable name
#[derive(Debug, Clone, Default)]
pub struct Inputs(IndexMap<String, f64>);

impl Inputs {
    /// Create an empty assignment
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a variable name, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.0.insert(name.into(), value);
    }

    /// Builder-style [`set`](Self::set)
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.set(name, value);
        self
    }

    /// Get the value bound to a variable name
    pub fn get(&self, name: &str) -> SugenoResult<f64> {
        self.0
            .get(name)
            .copied()
            .ok_or_else(|| SugenoError::unbound_variable(name))
    }

    /// Iterate over (name, value) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Number of bound variables
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the assignment is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Inputs {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, v)| (name.into(), v)).collect())
    }
}
