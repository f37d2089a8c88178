use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while building, rendering or reading a transfer batch.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SepaError {
    /// A timestamp or date string does not match its required pattern.
    #[error("{field} '{value}' does not match {expected}")]
    Format {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// An emitter or creditor IBAN fails the mod-97 checksum.
    #[error("invalid {role} IBAN '{iban}'")]
    InvalidIban { role: &'static str, iban: String },

    /// An amount carries more than two decimal digits.
    #[error("amount {amount} has {decimals} decimals, at most 2 allowed")]
    Precision { amount: Decimal, decimals: u32 },

    /// Minor-unit conversion failed (non-finite input or overflow).
    #[error("conversion error: {0}")]
    Conversion(String),

    /// XML generation or parsing error.
    #[error("XML error: {0}")]
    Xml(String),

    /// A document failed the submission check.
    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "payment_info.debtor_iban").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
