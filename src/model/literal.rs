//! RDF/OWL2 literals.
//!
//! A literal carries at most one of a language tag or a datatype IRI;
//! constructing one with both is a [`OwlError::MalformedLiteral`].

use crate::error::{OwlError, OwlResult};
use crate::iri::IRI;
use std::hash::{Hash, Hasher};

/// A lexical value, optionally tagged with a language or a datatype (never
/// both).
#[derive(Debug, Clone)]
pub struct Literal {
    lexical_form: String,
    lang: Option<String>,
    datatype: Option<IRI>,
}

impl Literal {
    /// Construct a literal. `lang` and `datatype` are mutually exclusive;
    /// passing both is an error. Passing neither yields a plain literal
    /// (implicitly `rdfs:Literal`/`xsd:string`-typed, as in Functional
    /// Syntax and RDF).
    pub fn new(
        lexical_form: impl Into<String>,
        lang: Option<String>,
        datatype: Option<IRI>,
    ) -> OwlResult<Self> {
        if lang.is_some() && datatype.is_some() {
            return Err(OwlError::MalformedLiteral(
                "literal cannot have both a language tag and a datatype".to_string(),
            ));
        }
        Ok(Literal {
            lexical_form: lexical_form.into(),
            lang,
            datatype,
        })
    }

    pub fn plain(lexical_form: impl Into<String>) -> Self {
        Literal {
            lexical_form: lexical_form.into(),
            lang: None,
            datatype: None,
        }
    }

    pub fn typed(lexical_form: impl Into<String>, datatype: IRI) -> Self {
        Literal {
            lexical_form: lexical_form.into(),
            lang: None,
            datatype: Some(datatype),
        }
    }

    pub fn with_lang(lexical_form: impl Into<String>, lang: impl Into<String>) -> Self {
        Literal {
            lexical_form: lexical_form.into(),
            lang: Some(lang.into()),
            datatype: None,
        }
    }

    pub fn lexical_form(&self) -> &str {
        &self.lexical_form
    }

    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    pub fn datatype(&self) -> Option<&IRI> {
        self.datatype.as_ref()
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.lexical_form == other.lexical_form
            && self.lang == other.lang
            && self.datatype == other.datatype
    }
}
impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lexical_form.hash(state);
        self.lang.hash(state);
        self.datatype.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_lang_and_datatype_together() {
        let dt = IRI::parse_absolute("http://www.w3.org/2001/XMLSchema#string").unwrap();
        let err = Literal::new("hi", Some("en".to_string()), Some(dt)).unwrap_err();
        assert!(matches!(err, OwlError::MalformedLiteral(_)));
    }

    #[test]
    fn plain_and_typed_are_distinct() {
        let dt = IRI::parse_absolute("http://www.w3.org/2001/XMLSchema#string").unwrap();
        assert_ne!(Literal::plain("hi"), Literal::typed("hi", dt));
    }
}
