//! Membership functions and degrees of truth
//!
//! A membership function maps a crisp value to a degree of truth in [0, 1].
//! Construction validates the shape's control points; evaluation never fails,
//! so callers may probe off-domain values for diagnostics.

use serde::{Deserialize, Serialize};

use crate::error::{SugenoError, SugenoResult};

/// A fuzzy truth value in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FuzzyValue(f64);

impl FuzzyValue {
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Fuzzy AND (t-norm) - minimum
    pub fn and(&self, other: &Self) -> Self {
        Self::new(self.0.min(other.0))
    }

    /// Fuzzy OR (t-conorm) - maximum
    pub fn or(&self, other: &Self) -> Self {
        Self::new(self.0.max(other.0))
    }
}

impl Default for FuzzyValue {
    fn default() -> Self {
        Self(0.0)
    }
}

impl From<f64> for FuzzyValue {
    fn from(v: f64) -> Self {
        Self::new(v)
    }
}

/// Membership function shapes
///
/// Only the triangular shape is provided; the enum leaves room for further
/// shapes without touching evaluation call sites.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MembershipFunction {
    /// Triangular: (left, peak, right) with left <= peak <= right
    Triangular(f64, f64, f64),
}

impl MembershipFunction {
    /// Create a triangular membership function.
    ///
    /// The control points must satisfy `left <= peak <= right`; violations
    /// fail here, never at evaluation time. Degenerate edges are allowed:
    /// `left == peak` gives a shape that starts at full membership, and
    /// `peak == right` one that ends there.
    pub fn triangular(left: f64, peak: f64, right: f64) -> SugenoResult<Self> {
        if !(left <= peak && peak <= right) {
            return Err(SugenoError::malformed_membership(left, peak, right));
        }
        Ok(MembershipFunction::Triangular(left, peak, right))
    }

    /// Evaluate the degree of truth for a crisp value.
    ///
    /// Accepts any real input; values outside [left, right] evaluate to 0.
    /// The degree is exactly 1 at the peak, including when the peak
    /// coincides with the left or right control point.
    pub fn evaluate(&self, x: f64) -> FuzzyValue {
        let degree = match self {
            MembershipFunction::Triangular(a, b, c) => {
                if x < *a || x > *c {
                    0.0
                } else if x == *b {
                    1.0
                } else if x < *b {
                    // a < x < b here, so b - a > 0
                    (x - a) / (b - a)
                } else {
                    // b < x <= c here, so c - b > 0
                    (c - x) / (c - b)
                }
            }
        };

        FuzzyValue::new(degree)
    }

    /// Get the core (where membership = 1)
    pub fn core(&self) -> (f64, f64) {
        match self {
            MembershipFunction::Triangular(_, b, _) => (*b, *b),
        }
    }

    /// Get the support (where membership > 0)
    pub fn support(&self) -> (f64, f64) {
        match self {
            MembershipFunction::Triangular(a, _, c) => (*a, *c),
        }
    }
}
