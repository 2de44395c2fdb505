//! sugeno - Zero-order Takagi-Sugeno fuzzy inference
//!
//! A small fuzzy inference engine: crisp inputs are fuzzified against named
//! linguistic terms, rule firing strengths are derived by combining term
//! memberships with fuzzy AND/OR, and the output is the firing-strength
//! weighted average of constant rule consequents.
//!
//! # Architecture
//!
//! The crate is organized around a handful of value-owning types:
//!
//! - [`MembershipFunction`] - maps a crisp value to a degree of truth in [0, 1]
//! - [`InputVariable`] / [`LinguisticTerm`] - named terms over a declared domain
//! - [`Antecedent`] - combinator tree over term memberships (AND = min, OR = max)
//! - [`Rule`] - an antecedent paired with a constant consequent
//! - [`FuzzySystem`] - an ordered rule base with the weighted-average pass
//!
//! Everything is immutable after construction, so a [`FuzzySystem`] can be
//! shared freely across threads; each [`FuzzySystem::compute`] call is a pure
//! function of the rule base and the supplied input assignment.
//!
//! # Example
//!
//! ```rust,ignore
//! use sugeno::{FuzzySystem, InputVariable, Inputs, MembershipFunction, Rule};
//!
//! let mut food = InputVariable::new("food", 0.0..=10.0);
//! food.set_term("low", MembershipFunction::triangular(0.0, 0.0, 5.0)?);
//! food.set_term("excellent", MembershipFunction::triangular(5.0, 10.0, 10.0)?);
//!
//! let mut service = InputVariable::new("service", 0.0..=10.0);
//! service.set_term("low", MembershipFunction::triangular(0.0, 0.0, 5.0)?);
//! service.set_term("excellent", MembershipFunction::triangular(5.0, 10.0, 10.0)?);
//!
//! let system = FuzzySystem::new(vec![
//!     Rule::new(food.is("low")? & service.is("low")?, 0.0),
//!     Rule::new(food.is("excellent")? & service.is("excellent")?, 20.0),
//! ])?;
//!
//! let tip = system.compute(&Inputs::new().with("food", 9.0).with("service", 8.0))?;
//! ```

pub mod error;
pub mod inputs;
pub mod membership;
pub mod rule;
pub mod system;
pub mod variable;

// Re-export error types
pub use error::{ErrorCode, ErrorContext, SugenoError, SugenoResult};

// Re-export membership types
pub use membership::{FuzzyValue, MembershipFunction};

// Re-export variable types
pub use variable::{InputVariable, LinguisticTerm};

// Re-export rule types
pub use rule::{Antecedent, Rule};

// Re-export system types
pub use system::FuzzySystem;

// Re-export the input assignment type
pub use inputs::Inputs;
