//! # OWL2 Functional Syntax toolkit
//!
//! A structural OWL2 object model, a Functional Syntax parser, an RDF
//! triple converter, and an OWLLink client for talking to an external
//! reasoner over HTTP.
//!
//! ## Quick start
//!
//! ```rust
//! use owl2_model::parser::{FunctionalSyntaxParser, OntologyParser};
//! use owl2_model::rdf::{to_rdf, Owl2RdfOptions};
//!
//! let doc = r#"
//! Prefix(:=<http://example.org/>)
//! Ontology(<http://example.org/onto>
//!   Declaration(Class(:Person))
//!   Declaration(Class(:Parent))
//!   SubClassOf(:Parent :Person)
//! )
//! "#;
//!
//! let parser = FunctionalSyntaxParser::new();
//! let ontology = parser.parse_str(doc)?;
//! let triples = to_rdf(&ontology, &Owl2RdfOptions::default())?;
//! assert!(!triples.is_empty());
//! # Ok::<(), owl2_model::error::OwlError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`model`] - the structural object model: entities, expressions, axioms, ontology
//! - [`parser`] - Functional Syntax tokenizer and recursive-descent parser
//! - [`rdf`] - ontology to RDF triple conversion
//! - [`owllink`] - OWLLink request/response codec and a stateful reasoner client
//! - [`iri`] - IRI and CURIE handling shared by every layer above
//! - [`config`] - plain configuration structs passed in by the caller
//! - [`error`] - the crate-wide error taxonomy

pub mod config;
pub mod error;
pub mod iri;
pub mod model;
pub mod owllink;
pub mod parser;
pub mod rdf;

pub use error::{OwlError, OwlResult};
pub use iri::{PrefixMap, IRI};

pub use model::annotation::{Annotation, AnnotationSet, AnnotationValue};
pub use model::axiom::{Axiom, Entity};
pub use model::class_expression::{ClassExpression, OperandSet};
pub use model::data_range::{DataRange, FacetRestriction};
pub use model::entities::{AnnotationProperty, Class, DataProperty, Datatype, NamedIndividual, ObjectProperty};
pub use model::individual::{AnonymousIndividual, Individual};
pub use model::literal::Literal;
pub use model::ontology::Ontology;
pub use model::property_expression::ObjectPropertyExpression;

pub use parser::{FunctionalSyntaxConfig, FunctionalSyntaxParser, OntologyParser};
pub use rdf::{to_rdf, Owl2RdfOptions, RdfTerm, RdfTriple};

#[cfg(feature = "http")]
pub use owllink::{OwlLinkReasoner, ReasonerState};

/// Library version, taken from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
