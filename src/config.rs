//! Plain configuration structs passed in by the caller.
//!
//! Nothing here reads environment variables or files; construction is the
//! caller's responsibility, matching the "no env vars in core contract"
//! rule for the library surface.

use std::time::Duration;

/// Options accepted by the Functional Syntax parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// When `true` (the default), an axiom keyword the parser doesn't
    /// recognize is a hard [`crate::error::OwlError::ParseError`]. Kept as
    /// a field rather than hardcoded so a future lenient mode has
    /// somewhere to live; MVP only implements the strict branch.
    pub strict: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig { strict: true }
    }
}

/// Options accepted by the OWLLink reasoner facade.
#[derive(Debug, Clone, PartialEq)]
pub struct ReasonerConfig {
    /// Per-request timeout. Exceeding it surfaces as
    /// `TransportError { cause: "request timed out" }`.
    pub request_timeout: Duration,
}

impl Default for ReasonerConfig {
    fn default() -> Self {
        ReasonerConfig {
            request_timeout: Duration::from_secs(30),
        }
    }
}
