//! The closed set of OWL2 axioms (§3.7).
//!
//! Every variant carries its own [`AnnotationSet`]; two axioms that are
//! otherwise identical but differ in their annotations are *not* equal —
//! annotations participate in equality like any other field (the only
//! subtlety is that two axioms with no annotations at all compare equal on
//! their core fields alone, which falls out of `AnnotationSet`'s own empty
//! case rather than needing special-casing here).

use crate::iri::IRI;
use crate::model::annotation::AnnotationSet;
use crate::model::class_expression::{ClassExpression, OperandSet};
use crate::model::data_range::DataRange;
use crate::model::entities::{
    AnnotationProperty, Class, DataProperty, Datatype, NamedIndividual, ObjectProperty,
};
use crate::model::individual::{AnonymousIndividual, Individual};
use crate::model::literal::Literal;
use crate::model::property_expression::ObjectPropertyExpression;

/// The subject of an `AnnotationAssertion`: either a named thing (by IRI)
/// or an anonymous individual.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnnotationSubject {
    Iri(IRI),
    Anonymous(AnonymousIndividual),
}

/// One declared entity, the payload of a `Declaration` axiom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Entity {
    Class(Class),
    Datatype(Datatype),
    ObjectProperty(ObjectProperty),
    DataProperty(DataProperty),
    AnnotationProperty(AnnotationProperty),
    NamedIndividual(NamedIndividual),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Axiom {
    // --- Declarations ---
    Declaration {
        entity: Entity,
        annotations: AnnotationSet,
    },

    // --- Class axioms ---
    SubClassOf {
        sub: ClassExpression,
        sup: ClassExpression,
        annotations: AnnotationSet,
    },
    EquivalentClasses {
        classes: OperandSet<ClassExpression>,
        annotations: AnnotationSet,
    },
    DisjointClasses {
        classes: OperandSet<ClassExpression>,
        annotations: AnnotationSet,
    },
    DisjointUnion {
        class: Class,
        disjoint_classes: OperandSet<ClassExpression>,
        annotations: AnnotationSet,
    },

    // --- Object property axioms ---
    SubObjectPropertyOf {
        sub: ObjectPropertyExpression,
        sup: ObjectPropertyExpression,
        annotations: AnnotationSet,
    },
    EquivalentObjectProperties {
        properties: OperandSet<ObjectPropertyExpression>,
        annotations: AnnotationSet,
    },
    DisjointObjectProperties {
        properties: OperandSet<ObjectPropertyExpression>,
        annotations: AnnotationSet,
    },
    InverseObjectProperties {
        first: ObjectPropertyExpression,
        second: ObjectPropertyExpression,
        annotations: AnnotationSet,
    },
    ObjectPropertyDomain {
        property: ObjectPropertyExpression,
        domain: ClassExpression,
        annotations: AnnotationSet,
    },
    ObjectPropertyRange {
        property: ObjectPropertyExpression,
        range: ClassExpression,
        annotations: AnnotationSet,
    },
    FunctionalObjectProperty {
        property: ObjectPropertyExpression,
        annotations: AnnotationSet,
    },
    InverseFunctionalObjectProperty {
        property: ObjectPropertyExpression,
        annotations: AnnotationSet,
    },
    ReflexiveObjectProperty {
        property: ObjectPropertyExpression,
        annotations: AnnotationSet,
    },
    IrreflexiveObjectProperty {
        property: ObjectPropertyExpression,
        annotations: AnnotationSet,
    },
    SymmetricObjectProperty {
        property: ObjectPropertyExpression,
        annotations: AnnotationSet,
    },
    AsymmetricObjectProperty {
        property: ObjectPropertyExpression,
        annotations: AnnotationSet,
    },
    TransitiveObjectProperty {
        property: ObjectPropertyExpression,
        annotations: AnnotationSet,
    },

    // --- Data property axioms ---
    SubDataPropertyOf {
        sub: DataProperty,
        sup: DataProperty,
        annotations: AnnotationSet,
    },
    EquivalentDataProperties {
        properties: OperandSet<DataProperty>,
        annotations: AnnotationSet,
    },
    DisjointDataProperties {
        properties: OperandSet<DataProperty>,
        annotations: AnnotationSet,
    },
    DataPropertyDomain {
        property: DataProperty,
        domain: ClassExpression,
        annotations: AnnotationSet,
    },
    DataPropertyRange {
        property: DataProperty,
        range: DataRange,
        annotations: AnnotationSet,
    },
    FunctionalDataProperty {
        property: DataProperty,
        annotations: AnnotationSet,
    },

    // --- Assertions ---
    ClassAssertion {
        class_expression: ClassExpression,
        individual: Individual,
        annotations: AnnotationSet,
    },
    ObjectPropertyAssertion {
        property: ObjectPropertyExpression,
        source: Individual,
        target: Individual,
        annotations: AnnotationSet,
    },
    NegativeObjectPropertyAssertion {
        property: ObjectPropertyExpression,
        source: Individual,
        target: Individual,
        annotations: AnnotationSet,
    },
    DataPropertyAssertion {
        property: DataProperty,
        source: Individual,
        target: Literal,
        annotations: AnnotationSet,
    },
    NegativeDataPropertyAssertion {
        property: DataProperty,
        source: Individual,
        target: Literal,
        annotations: AnnotationSet,
    },
    SameIndividual {
        individuals: OperandSet<Individual>,
        annotations: AnnotationSet,
    },
    DifferentIndividuals {
        individuals: OperandSet<Individual>,
        annotations: AnnotationSet,
    },

    // --- Annotation axioms ---
    AnnotationAssertion {
        property: AnnotationProperty,
        subject: AnnotationSubject,
        value: crate::model::annotation::AnnotationValue,
        annotations: AnnotationSet,
    },
    SubAnnotationPropertyOf {
        sub: AnnotationProperty,
        sup: AnnotationProperty,
        annotations: AnnotationSet,
    },
    AnnotationPropertyDomain {
        property: AnnotationProperty,
        domain: IRI,
        annotations: AnnotationSet,
    },
    AnnotationPropertyRange {
        property: AnnotationProperty,
        range: IRI,
        annotations: AnnotationSet,
    },
}

impl Axiom {
    /// The axiom's own annotation set, regardless of variant.
    pub fn annotations(&self) -> &AnnotationSet {
        match self {
            Axiom::Declaration { annotations, .. }
            | Axiom::SubClassOf { annotations, .. }
            | Axiom::EquivalentClasses { annotations, .. }
            | Axiom::DisjointClasses { annotations, .. }
            | Axiom::DisjointUnion { annotations, .. }
            | Axiom::SubObjectPropertyOf { annotations, .. }
            | Axiom::EquivalentObjectProperties { annotations, .. }
            | Axiom::DisjointObjectProperties { annotations, .. }
            | Axiom::InverseObjectProperties { annotations, .. }
            | Axiom::ObjectPropertyDomain { annotations, .. }
            | Axiom::ObjectPropertyRange { annotations, .. }
            | Axiom::FunctionalObjectProperty { annotations, .. }
            | Axiom::InverseFunctionalObjectProperty { annotations, .. }
            | Axiom::ReflexiveObjectProperty { annotations, .. }
            | Axiom::IrreflexiveObjectProperty { annotations, .. }
            | Axiom::SymmetricObjectProperty { annotations, .. }
            | Axiom::AsymmetricObjectProperty { annotations, .. }
            | Axiom::TransitiveObjectProperty { annotations, .. }
            | Axiom::SubDataPropertyOf { annotations, .. }
            | Axiom::EquivalentDataProperties { annotations, .. }
            | Axiom::DisjointDataProperties { annotations, .. }
            | Axiom::DataPropertyDomain { annotations, .. }
            | Axiom::DataPropertyRange { annotations, .. }
            | Axiom::FunctionalDataProperty { annotations, .. }
            | Axiom::ClassAssertion { annotations, .. }
            | Axiom::ObjectPropertyAssertion { annotations, .. }
            | Axiom::NegativeObjectPropertyAssertion { annotations, .. }
            | Axiom::DataPropertyAssertion { annotations, .. }
            | Axiom::NegativeDataPropertyAssertion { annotations, .. }
            | Axiom::SameIndividual { annotations, .. }
            | Axiom::DifferentIndividuals { annotations, .. }
            | Axiom::AnnotationAssertion { annotations, .. }
            | Axiom::SubAnnotationPropertyOf { annotations, .. }
            | Axiom::AnnotationPropertyDomain { annotations, .. }
            | Axiom::AnnotationPropertyRange { annotations, .. } => annotations,
        }
    }

    /// Short keyword naming this axiom's Functional Syntax production,
    /// used in error messages and the OWLLink encoder's dispatch table.
    pub fn keyword(&self) -> &'static str {
        match self {
            Axiom::Declaration { .. } => "Declaration",
            Axiom::SubClassOf { .. } => "SubClassOf",
            Axiom::EquivalentClasses { .. } => "EquivalentClasses",
            Axiom::DisjointClasses { .. } => "DisjointClasses",
            Axiom::DisjointUnion { .. } => "DisjointUnion",
            Axiom::SubObjectPropertyOf { .. } => "SubObjectPropertyOf",
            Axiom::EquivalentObjectProperties { .. } => "EquivalentObjectProperties",
            Axiom::DisjointObjectProperties { .. } => "DisjointObjectProperties",
            Axiom::InverseObjectProperties { .. } => "InverseObjectProperties",
            Axiom::ObjectPropertyDomain { .. } => "ObjectPropertyDomain",
            Axiom::ObjectPropertyRange { .. } => "ObjectPropertyRange",
            Axiom::FunctionalObjectProperty { .. } => "FunctionalObjectProperty",
            Axiom::InverseFunctionalObjectProperty { .. } => "InverseFunctionalObjectProperty",
            Axiom::ReflexiveObjectProperty { .. } => "ReflexiveObjectProperty",
            Axiom::IrreflexiveObjectProperty { .. } => "IrreflexiveObjectProperty",
            Axiom::SymmetricObjectProperty { .. } => "SymmetricObjectProperty",
            Axiom::AsymmetricObjectProperty { .. } => "AsymmetricObjectProperty",
            Axiom::TransitiveObjectProperty { .. } => "TransitiveObjectProperty",
            Axiom::SubDataPropertyOf { .. } => "SubDataPropertyOf",
            Axiom::EquivalentDataProperties { .. } => "EquivalentDataProperties",
            Axiom::DisjointDataProperties { .. } => "DisjointDataProperties",
            Axiom::DataPropertyDomain { .. } => "DataPropertyDomain",
            Axiom::DataPropertyRange { .. } => "DataPropertyRange",
            Axiom::FunctionalDataProperty { .. } => "FunctionalDataProperty",
            Axiom::ClassAssertion { .. } => "ClassAssertion",
            Axiom::ObjectPropertyAssertion { .. } => "ObjectPropertyAssertion",
            Axiom::NegativeObjectPropertyAssertion { .. } => "NegativeObjectPropertyAssertion",
            Axiom::DataPropertyAssertion { .. } => "DataPropertyAssertion",
            Axiom::NegativeDataPropertyAssertion { .. } => "NegativeDataPropertyAssertion",
            Axiom::SameIndividual { .. } => "SameIndividual",
            Axiom::DifferentIndividuals { .. } => "DifferentIndividuals",
            Axiom::AnnotationAssertion { .. } => "AnnotationAssertion",
            Axiom::SubAnnotationPropertyOf { .. } => "SubAnnotationPropertyOf",
            Axiom::AnnotationPropertyDomain { .. } => "AnnotationPropertyDomain",
            Axiom::AnnotationPropertyRange { .. } => "AnnotationPropertyRange",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(local: &str) -> ClassExpression {
        ClassExpression::class(Class::new(IRI::parse_absolute(&format!("http://e/{local}")).unwrap()))
    }

    #[test]
    fn annotations_distinguish_otherwise_identical_axioms() {
        let bare = Axiom::SubClassOf {
            sub: class("X"),
            sup: class("Y"),
            annotations: AnnotationSet::new(),
        };
        let prop = AnnotationProperty::new(IRI::parse_absolute("http://e/a").unwrap());
        let annotated = Axiom::SubClassOf {
            sub: class("X"),
            sup: class("Y"),
            annotations: AnnotationSet::from_iter_dedup([crate::model::annotation::Annotation::new(
                prop,
                Literal::with_lang("hi", "en"),
            )]),
        };
        assert_ne!(bare, annotated);
    }
}
