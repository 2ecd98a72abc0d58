//! The top-level `Ontology` value (§3.8): an optional ontology/version IRI,
//! a prefix map, an ontology-level annotation set, and a deduplicated axiom
//! set. Built once (by the parser, or programmatically) and then immutable
//! from the caller's point of view — there is no in-place axiom removal,
//! only construction.
//!
//! ```
//! use owl2_model::model::entities::Class;
//! use owl2_model::model::class_expression::ClassExpression;
//! use owl2_model::model::axiom::Axiom;
//! use owl2_model::model::annotation::AnnotationSet;
//! use owl2_model::model::ontology::Ontology;
//! use owl2_model::iri::IRI;
//!
//! let mut ontology = Ontology::new();
//! let person = Class::new(IRI::parse_absolute("http://example.org/Person").unwrap());
//! let parent = Class::new(IRI::parse_absolute("http://example.org/Parent").unwrap());
//! ontology.add_axiom(Axiom::SubClassOf {
//!     sub: ClassExpression::class(parent),
//!     sup: ClassExpression::class(person),
//!     annotations: AnnotationSet::new(),
//! });
//! assert_eq!(ontology.axiom_count(), 1);
//! ```

use crate::iri::{IRI, PrefixMap};
use crate::model::annotation::AnnotationSet;
use crate::model::axiom::Axiom;
use indexmap::IndexSet;

#[derive(Debug, Clone, Default)]
pub struct Ontology {
    iri: Option<IRI>,
    version_iri: Option<IRI>,
    prefixes: PrefixMap,
    annotations: AnnotationSet,
    axioms: IndexSet<Axiom>,
    /// Imported ontology IRIs. Collected, not resolved (§4.3).
    imports: Vec<IRI>,
}

impl Ontology {
    pub fn new() -> Self {
        Ontology {
            prefixes: PrefixMap::with_builtin_prefixes(),
            ..Default::default()
        }
    }

    pub fn iri(&self) -> Option<&IRI> {
        self.iri.as_ref()
    }

    pub fn set_iri(&mut self, iri: IRI) {
        self.iri = Some(iri);
    }

    pub fn version_iri(&self) -> Option<&IRI> {
        self.version_iri.as_ref()
    }

    pub fn set_version_iri(&mut self, iri: IRI) {
        self.version_iri = Some(iri);
    }

    pub fn prefixes(&self) -> &PrefixMap {
        &self.prefixes
    }

    pub fn prefixes_mut(&mut self) -> &mut PrefixMap {
        &mut self.prefixes
    }

    pub fn annotations(&self) -> &AnnotationSet {
        &self.annotations
    }

    pub fn set_annotations(&mut self, annotations: AnnotationSet) {
        self.annotations = annotations;
    }

    pub fn imports(&self) -> &[IRI] {
        &self.imports
    }

    pub fn add_import(&mut self, iri: IRI) {
        self.imports.push(iri);
    }

    /// Add an axiom. No-op (silently deduplicated) if an equal axiom
    /// (including its annotations) is already present — the ontology's
    /// axiom collection is a set, never a syntactic duplicate list.
    pub fn add_axiom(&mut self, axiom: Axiom) {
        self.axioms.insert(axiom);
    }

    pub fn axiom_count(&self) -> usize {
        self.axioms.len()
    }

    pub fn axioms(&self) -> impl Iterator<Item = &Axiom> {
        self.axioms.iter()
    }

    pub fn contains_axiom(&self, axiom: &Axiom) -> bool {
        self.axioms.contains(axiom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::class_expression::ClassExpression;
    use crate::model::entities::Class;

    fn class(local: &str) -> ClassExpression {
        ClassExpression::class(Class::new(IRI::parse_absolute(&format!("http://e/{local}")).unwrap()))
    }

    #[test]
    fn axiom_set_deduplicates() {
        let mut o = Ontology::new();
        let make = || Axiom::SubClassOf {
            sub: class("A"),
            sup: class("B"),
            annotations: AnnotationSet::new(),
        };
        o.add_axiom(make());
        o.add_axiom(make());
        assert_eq!(o.axiom_count(), 1);
    }

    #[test]
    fn builtin_prefixes_are_seeded() {
        let o = Ontology::new();
        assert_eq!(
            o.prefixes().namespace("owl"),
            Some("http://www.w3.org/2002/07/owl#")
        );
    }
}
