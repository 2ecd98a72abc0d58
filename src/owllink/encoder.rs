//! Axiom and class-expression encoding to OWLLink request XML.
//!
//! Tags are written as literal prefixed strings (`"owl:Class"`,
//! `"owllink:Tell"`, ...) with the namespace bindings declared once as
//! `xmlns`/`xmlns:owl` attributes on the request root, exactly as the
//! reference OWLLink client did — this crate doesn't attempt fully
//! namespace-aware XML construction, only enough to produce what a
//! conforming OWLLink server expects to read.

use crate::error::{OwlError, OwlResult};
use crate::model::axiom::{Axiom, Entity};
use crate::model::class_expression::ClassExpression;
use crate::model::data_range::DataRange;
use crate::model::entities::{Class, DataProperty};
use crate::model::individual::Individual;
use crate::model::literal::Literal;
use crate::model::property_expression::ObjectPropertyExpression;
use xmltree::{Element, XMLNode};

pub const OWLLINK_XMLNS: &str = "http://www.owllink.org/owllink#";
pub const OWL_XMLNS: &str = "http://www.w3.org/2002/07/owl#";

fn element(tag: &str) -> Element {
    Element::new(tag)
}

fn with_iri(tag: &str, iri: &str) -> Element {
    let mut e = element(tag);
    e.attributes.insert("IRI".to_string(), iri.to_string());
    e
}

fn translate_class(class: &Class) -> Element {
    with_iri("owl:Class", class.iri().as_str())
}

fn translate_data_property(dp: &DataProperty) -> Element {
    with_iri("owl:DataProperty", dp.iri().as_str())
}

/// Translate a named or inverse object property. `ObjectInverseOf` has no
/// OWLLink element of its own in this dispatch table.
fn translate_object_property(ope: &ObjectPropertyExpression) -> OwlResult<Element> {
    match ope {
        ObjectPropertyExpression::ObjectProperty(p) => Ok(with_iri("owl:ObjectProperty", p.iri().as_str())),
        ObjectPropertyExpression::ObjectInverseOf(_) => Err(OwlError::Unsupported {
            construct: "OWLLink encoding of ObjectInverseOf".to_string(),
        }),
    }
}

/// Translate a declared entity into its `owl:*` element, used by
/// `Declaration`.
fn translate_entity(entity: &Entity) -> Element {
    match entity {
        Entity::Class(c) => translate_class(c),
        Entity::Datatype(dt) => with_iri("owl:Datatype", dt.iri().as_str()),
        Entity::ObjectProperty(p) => with_iri("owl:ObjectProperty", p.iri().as_str()),
        Entity::DataProperty(p) => translate_data_property(p),
        Entity::AnnotationProperty(p) => with_iri("owl:AnnotationProperty", p.iri().as_str()),
        Entity::NamedIndividual(i) => with_iri("owl:NamedIndividual", i.iri().as_str()),
    }
}

/// Translate a named or anonymous individual. Anonymous individuals carry
/// their blank node id as a `nodeID` attribute, per the OWL2 XML
/// convention for blank nodes.
fn translate_individual(individual: &Individual) -> Element {
    match individual {
        Individual::Named(n) => with_iri("owl:NamedIndividual", n.iri().as_str()),
        Individual::Anonymous(a) => {
            let mut e = element("owl:AnonymousIndividual");
            e.attributes
                .insert("nodeID".to_string(), a.node_id().as_str().to_string());
            e
        }
    }
}

/// Translate a literal: text content is the lexical form, `datatypeIRI`
/// is set if present, `xml:lang` if a language tag is present.
fn translate_literal(literal: &Literal) -> Element {
    let mut e = element("owl:Literal");
    if let Some(datatype) = literal.datatype() {
        e.attributes
            .insert("datatypeIRI".to_string(), datatype.as_str().to_string());
    }
    if let Some(lang) = literal.lang() {
        e.attributes.insert("xml:lang".to_string(), lang.to_string());
    }
    e.children.push(XMLNode::Text(literal.lexical_form().to_string()));
    e
}

/// Translate a data range. Only atomic datatypes have a translator.
fn translate_data_range(dr: &DataRange) -> OwlResult<Element> {
    match dr {
        DataRange::Datatype(dt) => Ok(with_iri("owl:Datatype", dt.iri().as_str())),
        other => Err(OwlError::Unsupported {
            construct: format!("OWLLink encoding of data range {other:?}"),
        }),
    }
}

/// Translate a class expression into its OWLLink XML form.
///
/// Covers the same variants the RDF converter does (`Class`,
/// `DataHasValue`, `ObjectSomeValuesFrom`, `ObjectAllValuesFrom`,
/// `ObjectUnionOf`) plus `DataAllValuesFrom` and atomic datatypes —
/// everything else fails with [`OwlError::Unsupported`].
pub fn translate_class_expression(ce: &ClassExpression) -> OwlResult<Element> {
    match ce {
        ClassExpression::Class(c) => Ok(translate_class(c)),

        ClassExpression::ObjectSomeValuesFrom(ope, filler) => {
            let mut e = element("owl:ObjectSomeValuesFrom");
            e.children.push(XMLNode::Element(translate_object_property(ope)?));
            e.children.push(XMLNode::Element(translate_class_expression(filler)?));
            Ok(e)
        }

        ClassExpression::ObjectAllValuesFrom(ope, filler) => {
            let mut e = element("owl:ObjectAllValuesFrom");
            e.children.push(XMLNode::Element(translate_object_property(ope)?));
            e.children.push(XMLNode::Element(translate_class_expression(filler)?));
            Ok(e)
        }

        ClassExpression::ObjectUnionOf(operands) => {
            let mut e = element("owl:ObjectUnionOf");
            for operand in operands.iter() {
                e.children.push(XMLNode::Element(translate_class_expression(operand)?));
            }
            Ok(e)
        }

        ClassExpression::DataHasValue(dp, value) => {
            let mut e = element("owl:DataHasValue");
            e.children.push(XMLNode::Element(translate_data_property(dp)));
            e.children.push(XMLNode::Element(translate_literal(value)));
            Ok(e)
        }

        ClassExpression::DataAllValuesFrom(dp, dr) => {
            let mut e = element("owl:DataAllValuesFrom");
            e.children.push(XMLNode::Element(translate_data_property(dp)));
            e.children.push(XMLNode::Element(translate_data_range(dr)?));
            Ok(e)
        }

        other => Err(OwlError::Unsupported {
            construct: format!("OWLLink encoding of class expression {other:?}"),
        }),
    }
}

/// Translate one axiom into its OWLLink `Tell`-body XML element.
///
/// Covers `Declaration`, `SubClassOf`, `ClassAssertion`,
/// `ObjectPropertyAssertion`, `DataPropertyAssertion`,
/// `ObjectPropertyDomain`/`Range`, `DataPropertyDomain`/`Range`, and
/// `DisjointClasses` — the axiom shapes the OWLLink dispatch table
/// actually names translators for. Anything else fails with
/// [`OwlError::Unsupported`].
pub fn translate_axiom(axiom: &Axiom) -> OwlResult<Element> {
    match axiom {
        Axiom::Declaration { entity, .. } => {
            let mut e = element("owl:Declaration");
            e.children.push(XMLNode::Element(translate_entity(entity)));
            Ok(e)
        }

        Axiom::SubClassOf { sub, sup, .. } => {
            let mut e = element("owl:SubClassOf");
            e.children.push(XMLNode::Element(translate_class_expression(sub)?));
            e.children.push(XMLNode::Element(translate_class_expression(sup)?));
            Ok(e)
        }

        Axiom::DisjointClasses { classes, .. } => {
            let mut e = element("owl:DisjointClasses");
            for class_expression in classes.iter() {
                e.children
                    .push(XMLNode::Element(translate_class_expression(class_expression)?));
            }
            Ok(e)
        }

        Axiom::ClassAssertion {
            class_expression,
            individual,
            ..
        } => {
            let mut e = element("owl:ClassAssertion");
            e.children.push(XMLNode::Element(translate_class_expression(class_expression)?));
            e.children.push(XMLNode::Element(translate_individual(individual)));
            Ok(e)
        }

        Axiom::ObjectPropertyAssertion { property, source, target, .. } => {
            let mut e = element("owl:ObjectPropertyAssertion");
            e.children.push(XMLNode::Element(translate_object_property(property)?));
            e.children.push(XMLNode::Element(translate_individual(source)));
            e.children.push(XMLNode::Element(translate_individual(target)));
            Ok(e)
        }

        Axiom::DataPropertyAssertion { property, source, target, .. } => {
            let mut e = element("owl:DataPropertyAssertion");
            e.children.push(XMLNode::Element(translate_data_property(property)));
            e.children.push(XMLNode::Element(translate_individual(source)));
            e.children.push(XMLNode::Element(translate_literal(target)));
            Ok(e)
        }

        Axiom::ObjectPropertyDomain { property, domain, .. } => {
            let mut e = element("owl:ObjectPropertyDomain");
            e.children.push(XMLNode::Element(translate_object_property(property)?));
            e.children.push(XMLNode::Element(translate_class_expression(domain)?));
            Ok(e)
        }

        Axiom::ObjectPropertyRange { property, range, .. } => {
            let mut e = element("owl:ObjectPropertyRange");
            e.children.push(XMLNode::Element(translate_object_property(property)?));
            e.children.push(XMLNode::Element(translate_class_expression(range)?));
            Ok(e)
        }

        Axiom::DataPropertyDomain { property, domain, .. } => {
            let mut e = element("owl:DataPropertyDomain");
            e.children.push(XMLNode::Element(translate_data_property(property)));
            e.children.push(XMLNode::Element(translate_class_expression(domain)?));
            Ok(e)
        }

        Axiom::DataPropertyRange { property, range, .. } => {
            let mut e = element("owl:DataPropertyRange");
            e.children.push(XMLNode::Element(translate_data_property(property)));
            e.children.push(XMLNode::Element(translate_data_range(range)?));
            Ok(e)
        }

        other => Err(OwlError::Unsupported {
            construct: format!("OWLLink encoding of axiom {}", other.keyword()),
        }),
    }
}

/// A fresh `RequestMessage` root with the `owllink`/`owl` namespace
/// bindings every request needs.
pub fn init_request() -> Element {
    let mut e = element("RequestMessage");
    e.attributes.insert("xmlns".to_string(), OWLLINK_XMLNS.to_string());
    e.attributes
        .insert("xmlns:owl".to_string(), OWL_XMLNS.to_string());
    e
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iri::IRI;
    use crate::model::annotation::AnnotationSet;

    #[test]
    fn translates_class_declaration() {
        let c = Class::new(IRI::parse_absolute("http://e/A").unwrap());
        let axiom = Axiom::Declaration {
            entity: Entity::Class(c),
            annotations: AnnotationSet::new(),
        };
        let xml = translate_axiom(&axiom).unwrap();
        assert_eq!(xml.name, "owl:Declaration");
        assert_eq!(xml.children.len(), 1);
    }

    #[test]
    fn translates_data_has_value_with_literal_content() {
        use crate::model::entities::DataProperty;
        let dp = DataProperty::new(IRI::parse_absolute("http://e/p").unwrap());
        let ce = ClassExpression::data_has_value(dp, Literal::plain("x"));
        let xml = translate_class_expression(&ce).unwrap();
        assert_eq!(xml.name, "owl:DataHasValue");
        let literal = xml.children[1].as_element().unwrap();
        assert_eq!(literal.get_text().as_deref(), Some("x"));
    }

    #[test]
    fn refuses_unsupported_class_expression() {
        let ce = ClassExpression::object_complement_of(ClassExpression::class(Class::new(
            IRI::parse_absolute("http://e/A").unwrap(),
        )));
        assert!(translate_class_expression(&ce).is_err());
    }

    #[test]
    fn translates_class_assertion() {
        use crate::model::entities::NamedIndividual;
        let c = ClassExpression::class(Class::new(IRI::parse_absolute("http://e/A").unwrap()));
        let ind = Individual::Named(NamedIndividual::new(IRI::parse_absolute("http://e/a").unwrap()));
        let axiom = Axiom::ClassAssertion {
            class_expression: c,
            individual: ind,
            annotations: AnnotationSet::new(),
        };
        let xml = translate_axiom(&axiom).unwrap();
        assert_eq!(xml.name, "owl:ClassAssertion");
        assert_eq!(xml.children.len(), 2);
    }

    #[test]
    fn translates_data_property_range_with_atomic_datatype() {
        use crate::model::entities::{DataProperty, Datatype};
        let dp = DataProperty::new(IRI::parse_absolute("http://e/p").unwrap());
        let dt = Datatype::new(IRI::parse_absolute("http://www.w3.org/2001/XMLSchema#string").unwrap());
        let axiom = Axiom::DataPropertyRange {
            property: dp,
            range: DataRange::datatype(dt),
            annotations: AnnotationSet::new(),
        };
        let xml = translate_axiom(&axiom).unwrap();
        assert_eq!(xml.name, "owl:DataPropertyRange");
        let range_el = xml.children[1].as_element().unwrap();
        assert_eq!(range_el.name, "owl:Datatype");
    }
}
