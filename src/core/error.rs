use thiserror::Error;

/// Errors that can occur during comprobante construction or rendering.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ComprobanteError {
    /// Monetary input was not a finite non-negative amount.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Folio cannot be represented in the fixed 6-digit format.
    #[error("invalid folio: {0}")]
    InvalidFolio(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// XML generation error.
    #[error("XML error: {0}")]
    Xml(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "conceptos.0.importe").
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
