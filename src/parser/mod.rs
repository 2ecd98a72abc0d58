//! OWL2 Functional Syntax parsing: a hand-written tokenizer ([`lexer`])
//! feeding a recursive-descent parser ([`functional`]).

pub mod functional;
pub mod lexer;

pub use functional::FunctionalSyntaxParser;

use crate::config::ParserConfig;
use crate::error::OwlResult;
use crate::model::ontology::Ontology;
use std::path::Path;

/// A parser that builds an [`Ontology`] from a textual serialization.
///
/// Only one concrete implementation ships with this crate
/// ([`FunctionalSyntaxParser`]); the trait exists so callers can depend on
/// "some parser" rather than the concrete type, mirroring how the rest of
/// the crate separates interface from implementation.
pub trait OntologyParser {
    fn parse_str(&self, content: &str) -> OwlResult<Ontology>;

    fn parse_file(&self, path: &Path) -> OwlResult<Ontology> {
        let content = std::fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    fn format_name(&self) -> &'static str;
}

impl OntologyParser for FunctionalSyntaxParser {
    fn parse_str(&self, content: &str) -> OwlResult<Ontology> {
        self.parse(content)
    }

    fn format_name(&self) -> &'static str {
        "Functional Syntax"
    }
}

pub use crate::config::ParserConfig as FunctionalSyntaxConfig;
