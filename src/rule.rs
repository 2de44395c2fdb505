//! Fuzzy rules and the antecedent combinator algebra
//!
//! An antecedent is a tree of term-membership leaves combined with fuzzy
//! AND (min) and OR (max). Evaluating the tree against an input assignment
//! yields the rule's firing strength. This is pure scalar algebra, not
//! control flow: both operands of every combinator are always evaluated.
//!
//! Trees are built with [`Antecedent::and`] / [`Antecedent::or`], or with the
//! `&` and `|` operators:
//!
//! ```rust,ignore
//! let premise = food.is("low")? & (service.is("low")? | service.is("good")?);
//! ```

use std::ops::{BitAnd, BitOr};

use crate::error::SugenoResult;
use crate::inputs::Inputs;
use crate::membership::FuzzyValue;
use crate::variable::LinguisticTerm;

/// A rule antecedent: a combinator expression over term memberships
#[derive(Debug, Clone, PartialEq)]
pub enum Antecedent {
    /// A term bound to an input-variable name
    Term {
        variable: String,
        term: LinguisticTerm,
    },
    /// Fuzzy AND: minimum of both operands
    And(Box<Antecedent>, Box<Antecedent>),
    /// Fuzzy OR: maximum of both operands
    Or(Box<Antecedent>, Box<Antecedent>),
}

impl Antecedent {
    /// Create a leaf binding a term to an input-variable name
    pub fn term(variable: impl Into<String>, term: LinguisticTerm) -> Self {
        Antecedent::Term {
            variable: variable.into(),
            term,
        }
    }

    /// Combine with fuzzy AND
    pub fn and(self, rhs: Antecedent) -> Self {
        Antecedent::And(Box::new(self), Box::new(rhs))
    }

    /// Combine with fuzzy OR
    pub fn or(self, rhs: Antecedent) -> Self {
        Antecedent::Or(Box::new(self), Box::new(rhs))
    }

    /// Evaluate the tree against an input assignment.
    ///
    /// Leaves look up their variable's crisp value in the assignment and
    /// return the term's degree of truth; a name missing from the assignment
    /// fails with an unbound-variable error here, at evaluation time.
    pub fn evaluate(&self, inputs: &Inputs) -> SugenoResult<FuzzyValue> {
        match self {
            Antecedent::Term { variable, term } => {
                let x = inputs.get(variable)?;
                Ok(term.degree_of_truth(x))
            }
            Antecedent::And(left, right) => {
                let l = left.evaluate(inputs)?;
                let r = right.evaluate(inputs)?;
                Ok(l.and(&r))
            }
            Antecedent::Or(left, right) => {
                let l = left.evaluate(inputs)?;
                let r = right.evaluate(inputs)?;
                Ok(l.or(&r))
            }
        }
    }
}

impl BitAnd for Antecedent {
    type Output = Antecedent;

    fn bitand(self, rhs: Antecedent) -> Antecedent {
        self.and(rhs)
    }
}

impl BitOr for Antecedent {
    type Output = Antecedent;

    fn bitor(self, rhs: Antecedent) -> Antecedent {
        self.or(rhs)
    }
}

/// A zero-order Sugeno rule: an antecedent paired with a constant consequent
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    antecedent: Antecedent,
    consequent: f64,
}

impl Rule {
    pub fn new(antecedent: Antecedent, consequent: f64) -> Self {
        Self {
            antecedent,
            consequent,
        }
    }

    /// The rule's antecedent expression
    pub fn antecedent(&self) -> &Antecedent {
        &self.antecedent
    }

    /// The constant consequent, returned verbatim by the inference pass
    pub fn consequent(&self) -> f64 {
        self.consequent
    }

    /// Firing strength of this rule for an input assignment
    pub fn fire_strength(&self, inputs: &Inputs) -> SugenoResult<FuzzyValue> {
        self.antecedent.evaluate(inputs)
    }
}
