//! Structured Error Handling for sugeno
//!
//! Provides a unified error type with:
//! - Error codes for programmatic handling
//! - Structured error responses (JSON-friendly)
//! - Context preservation through error chains
//!
//! # Error Categories
//!
//! - Construction errors (1xxx) - invalid membership shapes, empty rule bases
//! - Lookup errors (2xxx) - unregistered linguistic term labels
//! - Evaluation errors (3xxx) - unbound input variables, zero total firing weight
//!
//! # Example
//!
//! ```rust,ignore
//! use sugeno::error::{SugenoError, ErrorCode};
//!
//! fn check_points(a: f64, b: f64, c: f64) -> Result<(), SugenoError> {
//!     if !(a <= b && b <= c) {
//!         return Err(SugenoError::malformed_membership(a, b, c));
//!     }
//!     Ok(())
//! }
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Error Codes
// ============================================================================

/// Unique error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Construction errors (1xxx)
    /// Membership control points violate the ordering invariant
    MalformedMembership = 1000,
    /// A system was assembled with no rules
    EmptyRuleBase = 1001,

    // Lookup errors (2xxx)
    /// Linguistic term label not registered on its variable
    UnknownLabel = 2000,

    // Evaluation errors (3xxx)
    /// Antecedent references a variable missing from the input assignment
    UnboundVariable = 3000,
    /// Every rule antecedent evaluated to exactly zero
    NoRuleFired = 3001,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a short description of the error code
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::MalformedMembership => "Malformed membership function",
            ErrorCode::EmptyRuleBase => "Empty rule base",
            ErrorCode::UnknownLabel => "Unknown linguistic term label",
            ErrorCode::UnboundVariable => "Unbound input variable",
            ErrorCode::NoRuleFired => "No rule fired",
        }
    }

    /// Check if this error is raised while building a system
    pub fn is_construction_error(&self) -> bool {
        (1000..2000).contains(&self.code())
    }

    /// Check if this error is raised while evaluating inputs
    pub fn is_evaluation_error(&self) -> bool {
        (3000..4000).contains(&self.code())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

// ============================================================================
// Error Context
// ============================================================================

/// Additional context information for an error
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Key-value pairs of context information
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub fields: HashMap<String, String>,
}

impl ErrorContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field to the context
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

// ============================================================================
// Main Error Type
// ============================================================================

/// The main error type for sugeno
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SugenoError {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,
    /// Hint for resolving the error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl SugenoError {
    /// Create a new error with a code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            hint: None,
        }
    }

    // ========================================================================
    // Factory methods for common error types
    // ========================================================================

    /// Create a malformed membership error
    pub fn malformed_membership(left: f64, peak: f64, right: f64) -> Self {
        Self::new(
            ErrorCode::MalformedMembership,
            format!(
                "Triangular control points must satisfy left <= peak <= right, got ({}, {}, {})",
                left, peak, right
            ),
        )
    }

    /// Create an empty rule base error
    pub fn empty_rule_base() -> Self {
        Self::new(
            ErrorCode::EmptyRuleBase,
            "A fuzzy system requires at least one rule",
        )
    }

    /// Create an unknown label error
    pub fn unknown_label(variable: &str, label: &str) -> Self {
        Self::new(
            ErrorCode::UnknownLabel,
            format!("No term '{}' registered on variable '{}'", label, variable),
        )
        .with_context("variable", variable)
        .with_context("label", label)
    }

    /// Create an unbound variable error
    pub fn unbound_variable(variable: &str) -> Self {
        Self::new(
            ErrorCode::UnboundVariable,
            format!("Input assignment has no value for variable '{}'", variable),
        )
        .with_context("variable", variable)
    }

    /// Create a no-rule-fired error
    pub fn no_rule_fired() -> Self {
        Self::new(
            ErrorCode::NoRuleFired,
            "Every rule antecedent evaluated to zero; the weighted average is undefined",
        )
        .with_hint("Inputs outside every term's support fire no rule. Check the input values against the declared variable domains.")
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Add context to the error
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::new);
        ctx.fields.insert(key.into(), value.into());
        self
    }

    /// Add a hint for resolving the error
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":"INTERNAL_ERROR","message":"{}"}}"#, self.message)
        })
    }
}

impl fmt::Display for SugenoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)?;

        if let Some(ref ctx) = self.context {
            if !ctx.fields.is_empty() {
                let mut keys: Vec<_> = ctx.fields.keys().collect();
                keys.sort();
                write!(f, " (")?;
                for (i, key) in keys.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}={}", key, ctx.fields[*key])?;
                }
                write!(f, ")")?;
            }
        }

        if let Some(ref hint) = self.hint {
            write!(f, "\nHint: {}", hint)?;
        }

        Ok(())
    }
}

impl std::error::Error for SugenoError {}

// ============================================================================
// Result type alias
// ============================================================================

/// A Result type using SugenoError
pub type SugenoResult<T> = Result<T, SugenoError>;

// ============================================================================
// Tests
// ============================================================================
