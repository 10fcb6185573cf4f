use thiserror::Error;

/// Crate-wide error taxonomy. Validation, arithmetic and state errors are
/// fatal at the point they occur; I/O errors keep the underlying cause.
#[derive(Debug, Error)]
pub enum NpgenError {
    /// Bad constructor input: unknown radius unit, unsupported lattice,
    /// malformed element symbol, wrong basis, malformed decimal.
    #[error("validation: {0}")]
    Validation(String),

    /// Division by zero, root of a negative, normalizing a zero vector,
    /// a solver that failed to converge.
    #[error("arithmetic: {0}")]
    Arithmetic(String),

    /// Functionality that is deliberately not implemented.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// An operation issued outside its legal lifecycle position.
    #[error("state: {0}")]
    State(String),

    #[error("i/o while {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl NpgenError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        NpgenError::Io {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, NpgenError>;
