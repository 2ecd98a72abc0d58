//! Named OWL2 entities.
//!
//! Each entity kind is its own Rust type wrapping an [`IRI`], so two
//! entities are equal only if they are the same kind *and* share an IRI —
//! the same IRI used as a `Class` and as a `Datatype` are never equal,
//! matching the variant-aware equality entities have in the structural
//! model.

use crate::iri::IRI;
use std::sync::Arc;

macro_rules! iri_entity {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(Arc<IRI>);

        impl $name {
            pub fn new(iri: IRI) -> Self {
                $name(Arc::new(iri))
            }

            pub fn iri(&self) -> &IRI {
                &self.0
            }
        }

        impl From<IRI> for $name {
            fn from(iri: IRI) -> Self {
                $name::new(iri)
            }
        }
    };
}

iri_entity!(Class, "An OWL2 class.");
iri_entity!(Datatype, "An OWL2 datatype.");
iri_entity!(ObjectProperty, "An OWL2 object property.");
iri_entity!(DataProperty, "An OWL2 data property.");
iri_entity!(AnnotationProperty, "An OWL2 annotation property.");
iri_entity!(NamedIndividual, "A named (as opposed to anonymous) OWL2 individual.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_iri_different_kind_not_comparable_at_all() {
        // Class and Datatype are distinct types, so the same IRI used for
        // both can never accidentally compare equal - the type system
        // enforces the variant-aware equality rule at compile time.
        let iri = IRI::parse_absolute("http://e/A").unwrap();
        let c = Class::new(iri.clone());
        let d = Datatype::new(iri);
        assert_eq!(c.iri(), d.iri());
    }

    #[test]
    fn same_kind_same_iri_equal() {
        let iri = IRI::parse_absolute("http://e/A").unwrap();
        assert_eq!(Class::new(iri.clone()), Class::new(iri));
    }
}
