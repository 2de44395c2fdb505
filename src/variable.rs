//! Linguistic terms and input variables
//!
//! An [`InputVariable`] is a named collection of [`LinguisticTerm`]s over a
//! declared domain range. Terms are registered incrementally by label;
//! labels are unique and registration order is preserved so diagnostics
//! iterate terms the way they were declared.

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use indexmap::IndexMap;

use crate::error::{SugenoError, SugenoResult};
use crate::membership::{FuzzyValue, MembershipFunction};
use crate::rule::Antecedent;

/// A named fuzzy category over a variable's domain (e.g., "good")
#[derive(Debug, Clone, PartialEq)]
pub struct LinguisticTerm {
    label: String,
    membership: MembershipFunction,
}

impl LinguisticTerm {
    pub fn new(label: impl Into<String>, membership: MembershipFunction) -> Self {
        Self {
            label: label.into(),
            membership,
        }
    }

    /// The term's label, unique within its owning variable
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The term's membership function
    pub fn membership(&self) -> &MembershipFunction {
        &self.membership
    }

    /// Degree of truth of this term for a crisp value
    pub fn degree_of_truth(&self, x: f64) -> FuzzyValue {
        self.membership.evaluate(x)
    }
}

/// A named input variable with label-indexed linguistic terms
#[derive(Debug, Clone)]
pub struct InputVariable {
    name: String,
    universe: (f64, f64),
    terms: IndexMap<String, LinguisticTerm>,
}

impl InputVariable {
    /// Create a variable with a declared domain range.
    ///
    /// The range is declarative: evaluation accepts any real input, and
    /// off-domain values simply yield zero memberships.
    pub fn new(name: impl Into<String>, universe: RangeInclusive<f64>) -> Self {
        Self {
            name: name.into(),
            universe: (*universe.start(), *universe.end()),
            terms: IndexMap::new(),
        }
    }

    /// The variable's name, as referenced by input assignments
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared domain range (min, max)
    pub fn universe(&self) -> (f64, f64) {
        self.universe
    }

    /// Register a term under a label.
    ///
    /// Re-assigning an existing label replaces its membership function (last
    /// write wins); the label keeps its original position in term order.
    pub fn set_term(&mut self, label: impl Into<String>, membership: MembershipFunction) {
        let label = label.into();
        self.terms
            .insert(label.clone(), LinguisticTerm::new(label, membership));
    }

    /// Look up a term by label
    pub fn term(&self, label: &str) -> SugenoResult<&LinguisticTerm> {
        self.terms
            .get(label)
            .ok_or_else(|| self.unknown_label(label))
    }

    /// Build an antecedent leaf binding a term of this variable.
    ///
    /// The leaf carries a copy of the term together with this variable's
    /// name; the crisp value it is matched against comes from the input
    /// assignment at evaluation time.
    pub fn is(&self, label: &str) -> SugenoResult<Antecedent> {
        let term = self.term(label)?;
        Ok(Antecedent::term(&self.name, term.clone()))
    }

    /// Iterate terms in registration order
    pub fn terms(&self) -> impl Iterator<Item = &LinguisticTerm> {
        self.terms.values()
    }

    /// Fuzzify a crisp value: degree of truth for every term, in
    /// registration order
    pub fn fuzzify(&self, x: f64) -> IndexMap<String, FuzzyValue> {
        self.terms
            .iter()
            .map(|(label, term)| (label.clone(), term.degree_of_truth(x)))
            .collect()
    }

    /// The term with the highest membership for a value, if any term is
    /// registered
    pub fn dominant_term(&self, x: f64) -> Option<(&str, FuzzyValue)> {
        self.terms
            .values()
            .map(|term| (term.label(), term.degree_of_truth(x)))
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
    }

    fn unknown_label(&self, label: &str) -> SugenoError {
        let known: Vec<_> = self.terms.keys().map(String::as_str).collect();
        SugenoError::unknown_label(&self.name, label)
            .with_hint(format!("Registered labels: {}", known.join(", ")))
    }
}
