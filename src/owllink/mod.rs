//! OWLLink: a thin XML-over-HTTP protocol for talking to an external
//! reasoner. [`encoder`] turns axioms and class expressions into request
//! XML, [`response`] turns response XML back into typed results, and
//! [`reasoner`] wires both up behind a stateful client.

pub mod encoder;
pub mod response;

#[cfg(feature = "http")]
pub mod reasoner;

#[cfg(feature = "http")]
pub use reasoner::{OwlLinkReasoner, ReasonerState};
