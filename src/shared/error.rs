//! Shared Error Types
//!
//! This module defines the failures the two state components can report.
//! They carry no transport detail; the backend maps each variant to an HTTP
//! status code.
//!
//! # Error Categories
//!
//! - `DiagramError` - A candidate diagram was rejected by validation
//! - `CounterError` - A counter bound was hit
//!
//! # Usage
//!
//! ```rust
//! use bpmn_collab::shared::error::DiagramError;
//!
//! let error = DiagramError::malformed("unexpected end of input");
//! assert!(error.to_string().contains("unexpected end of input"));
//! ```
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across thread boundaries.
use thiserror::Error;

/// Reasons a candidate diagram is rejected
///
/// Variants are listed in the order the validation pipeline checks them.
/// None of them mutate the stored diagram.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiagramError {
    /// Content is empty or whitespace only
    #[error("Diagram content cannot be empty")]
    EmptyContent,

    /// Trimmed content does not start with `<` and end with `>`
    #[error("Diagram content must be XML (start with '<' and end with '>')")]
    NotXmlShaped,

    /// Content exceeds the size limit
    #[error("Diagram is too large: {size} bytes (limit {limit} bytes)")]
    TooLarge {
        /// Byte length of the rejected content
        size: usize,
        /// Maximum accepted byte length
        limit: usize,
    },

    /// Content is not well-formed XML
    #[error("Diagram is not well-formed XML: {detail}")]
    MalformedXml {
        /// Parser error detail
        detail: String,
    },

    /// Well-formed XML that carries no BPMN marker
    #[error("Diagram does not look like BPMN (expected 'bpmn' or 'definitions')")]
    NotBpmn,
}

impl DiagramError {
    /// Create a new malformed XML error
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedXml {
            detail: detail.into(),
        }
    }
}

/// Reasons a counter update is rejected
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CounterError {
    /// Increment attempted at the upper bound
    #[error("User limit reached ({limit} active users)")]
    LimitReached {
        /// The configured upper bound
        limit: u32,
    },

    /// Strict decrement attempted at zero
    #[error("No users to remove")]
    Underflow,
}
