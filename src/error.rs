//! Error taxonomy for a design run.
//!
//! Every variant is terminal for the invocation that produced it: the builder
//! never returns a partially populated [`crate::primer::PrimerSet`].
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignError {
    /// A required target name or sequence was blank.
    #[error("Missing required input: {0}")]
    MissingInput(String),

    /// The sequence parser rejected a target; `reason` is the parser's message.
    #[error("Invalid sequence: {reason}")]
    InvalidSequence { reason: String },

    /// A non-ACGT character reached a strict DNA operation.
    #[error("Invalid base '{base}' at position {position}; only A, C, G, T allowed")]
    InvalidBase { base: char, position: usize },

    /// A design parameter or reaction condition is out of range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, DesignError>;
