//! Property-based checks for the structural equality/hash and
//! normalization invariants the object model documents.

use owl2_model::model::class_expression::ClassExpression;
use owl2_model::model::entities::{Class, ObjectProperty};
use owl2_model::model::literal::Literal;
use owl2_model::model::property_expression::ObjectPropertyExpression;
use owl2_model::IRI;
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn class(local: &str) -> Class {
    Class::new(IRI::parse_absolute(&format!("http://example.org/p#{local}")).unwrap())
}

fn object_property(local: &str) -> ObjectPropertyExpression {
    ObjectPropertyExpression::ObjectProperty(ObjectProperty::new(
        IRI::parse_absolute(&format!("http://example.org/p#{local}")).unwrap(),
    ))
}

fn arb_local_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,8}"
}

proptest! {
    /// Equal `ClassExpression` values must hash equal, and a union of two
    /// named classes built in either order is the same value.
    #[test]
    fn object_union_of_is_order_independent(a in arb_local_name(), b in arb_local_name()) {
        prop_assume!(a != b);
        let forward = ClassExpression::object_union_of(vec![
            ClassExpression::class(class(&a)),
            ClassExpression::class(class(&b)),
        ]).unwrap();
        let backward = ClassExpression::object_union_of(vec![
            ClassExpression::class(class(&b)),
            ClassExpression::class(class(&a)),
        ]).unwrap();

        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(hash_of(&forward), hash_of(&backward));
    }

    /// Omitting the cardinality filler and spelling out `owl:Thing`
    /// explicitly must construct the same value (constructor
    /// normalization idempotence).
    #[test]
    fn cardinality_filler_omission_normalizes(n in 0u32..50, prop in arb_local_name()) {
        let implicit = ClassExpression::object_min_cardinality(n, object_property(&prop), None);
        let explicit = ClassExpression::object_min_cardinality(
            n,
            object_property(&prop),
            Some(ClassExpression::class(Class::new(
                IRI::parse_absolute("http://www.w3.org/2002/07/owl#Thing").unwrap(),
            ))),
        );
        prop_assert_eq!(implicit, explicit);
    }

    /// A literal can carry a language tag or be plain, but never both at
    /// once; `Literal::new` enforces this regardless of lexical form.
    #[test]
    fn literal_rejects_lang_and_datatype_together(lexical in ".*", lang in "[a-z]{2}") {
        let datatype = IRI::parse_absolute("http://www.w3.org/2001/XMLSchema#string").unwrap();
        let result = Literal::new(lexical, Some(lang), Some(datatype));
        prop_assert!(result.is_err());
    }

    /// `ObjectOneOf` over a set of individuals dedupes and is
    /// order-independent, mirroring `object_union_of`.
    #[test]
    fn object_one_of_dedupes_and_is_order_independent(a in arb_local_name(), b in arb_local_name()) {
        use owl2_model::model::individual::Individual;
        use owl2_model::model::entities::NamedIndividual;

        prop_assume!(a != b);
        let named = |local: &str| {
            Individual::Named(NamedIndividual::new(
                IRI::parse_absolute(&format!("http://example.org/p#{local}")).unwrap(),
            ))
        };

        let forward = ClassExpression::object_one_of(vec![named(&a), named(&b), named(&a)]).unwrap();
        let backward = ClassExpression::object_one_of(vec![named(&b), named(&a)]).unwrap();
        prop_assert_eq!(forward, backward);
    }
}
