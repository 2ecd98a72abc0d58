//! Conversion from the structural object model to RDF triples (§4.4-ish of
//! the data model: "what does this ontology look like as a graph").

pub mod converter;

pub use converter::{to_rdf, Owl2RdfOptions, RdfTerm, RdfTriple};
