//! Error taxonomy shared by every layer of the crate.
//!
//! Each variant corresponds to exactly one failure mode named by the data
//! model, the parser, the RDF converter, or the OWLLink client. Nothing in
//! this crate panics on malformed input; every fallible constructor and
//! parser entry point returns [`OwlResult`].

use thiserror::Error;

/// Crate-wide result alias.
pub type OwlResult<T> = Result<T, OwlError>;

/// Everything that can go wrong building, parsing, converting, or
/// reasoning over an ontology.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OwlError {
    /// A string failed IRI syntax validation.
    #[error("invalid IRI: {0}")]
    InvalidIRI(String),

    /// A CURIE referenced a prefix not present in the active [`crate::iri::PrefixMap`].
    #[error("unknown prefix: {0}")]
    UnknownPrefix(String),

    /// A literal was constructed with both a language tag and a datatype.
    #[error("malformed literal: {0}")]
    MalformedLiteral(String),

    /// The Functional Syntax parser hit an unexpected token.
    #[error("parse error at byte {position}: expected {expected}, found {found}")]
    ParseError {
        position: usize,
        expected: String,
        found: String,
    },

    /// A structural object model constructor's invariant was violated
    /// (e.g. fewer than two operands for an n-ary class expression).
    #[error("invariant violation: {detail}")]
    InvariantViolation { detail: String },

    /// The RDF converter or OWLLink encoder was asked to translate a
    /// construct it does not (yet) support.
    #[error("unsupported construct: {construct}")]
    Unsupported { construct: String },

    /// A network or transport-level failure talking to an OWLLink server.
    #[error("transport error: {cause}")]
    TransportError { cause: String },

    /// The OWLLink server returned XML that did not parse as a valid
    /// response message.
    #[error("protocol error: {detail}")]
    ProtocolError { detail: String },

    /// I/O failure reading an ontology document from disk.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Anything that doesn't fit the taxonomy above.
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for OwlError {
    fn from(e: std::io::Error) -> Self {
        OwlError::IoError(e.to_string())
    }
}

/// Distinguishes the two ways a reasoner session can die, per the
/// transport-vs-protocol split in the failure semantics: a
/// [`OwlError::TransportError`] session may be retried, a
/// [`OwlError::ProtocolError`] one must be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFate {
    Retryable,
    Discard,
}

impl OwlError {
    /// Whether a reasoner session that produced this error is still usable.
    pub fn session_fate(&self) -> SessionFate {
        match self {
            OwlError::TransportError { .. } => SessionFate::Retryable,
            OwlError::ProtocolError { .. } => SessionFate::Discard,
            _ => SessionFate::Discard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_is_retryable() {
        let e = OwlError::TransportError {
            cause: "timeout".into(),
        };
        assert_eq!(e.session_fate(), SessionFate::Retryable);
    }

    #[test]
    fn protocol_error_must_be_discarded() {
        let e = OwlError::ProtocolError {
            detail: "malformed XML".into(),
        };
        assert_eq!(e.session_fate(), SessionFate::Discard);
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "nope");
        let e: OwlError = io.into();
        matches!(e, OwlError::IoError(_));
    }
}
