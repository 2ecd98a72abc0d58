//! Ontology &#8594; RDF triple conversion.
//!
//! One converter function per axiom shape, dispatched on `Axiom` variant,
//! mirroring `rdfconverter.py`'s `to_rdf` dispatch chain. Two deliberate
//! departures from that historical converter:
//!
//! - `DisjointClasses` with more than two operands emits pairwise
//!   `owl:disjointWith` triples by default (as the historical converter
//!   always did, for any arity), but can instead emit the spec-correct
//!   `owl:AllDisjointClasses`/`owl:members` form via
//!   [`Owl2RdfOptions::use_all_disjoint_classes`].
//! - Axiom annotations are reified (`owl:Axiom`/`owl:annotatedSource` etc.)
//!   rather than left unimplemented, for every axiom whose conversion
//!   produces exactly one principal triple.
//!
//! Only the class-expression and data-range shapes the historical
//! converter (or a direct generalization of it) covers are implemented;
//! anything else fails with [`OwlError::Unsupported`] rather than being
//! silently dropped.

use crate::error::{OwlError, OwlResult};
use crate::iri::{IRI, OWL_NS, RDF_NS, RDFS_NS};
use crate::model::annotation::{AnnotationSet, AnnotationValue};
use crate::model::axiom::{Axiom, Entity};
use crate::model::class_expression::ClassExpression;
use crate::model::data_range::DataRange;
use crate::model::individual::Individual;
use crate::model::literal::Literal;
use crate::model::ontology::Ontology;
use crate::model::property_expression::ObjectPropertyExpression;
use itertools::Itertools;

/// An RDF term: an IRI, a blank node, or a literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RdfTerm {
    Iri(IRI),
    Blank(String),
    Literal(Literal),
}

impl From<IRI> for RdfTerm {
    fn from(iri: IRI) -> Self {
        RdfTerm::Iri(iri)
    }
}

impl From<Literal> for RdfTerm {
    fn from(lit: Literal) -> Self {
        RdfTerm::Literal(lit)
    }
}

/// `(subject, predicate, object)`. The predicate is always an IRI; RDF
/// doesn't allow blank nodes or literals in predicate position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RdfTriple {
    pub subject: RdfTerm,
    pub predicate: IRI,
    pub object: RdfTerm,
}

impl RdfTriple {
    pub fn new(subject: impl Into<RdfTerm>, predicate: IRI, object: impl Into<RdfTerm>) -> Self {
        RdfTriple {
            subject: subject.into(),
            predicate,
            object: object.into(),
        }
    }
}

/// Options controlling otherwise-ambiguous RDF rendering choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Owl2RdfOptions {
    /// When `true`, a `DisjointClasses` axiom with more than two operands
    /// renders as a single `owl:AllDisjointClasses` node with an
    /// `owl:members` list, rather than the pairwise `owl:disjointWith`
    /// triples used for every arity by default.
    pub use_all_disjoint_classes: bool,
}

fn ns_iri(s: &str) -> IRI {
    IRI::from_validated(s.to_string())
}

fn rdf_type() -> IRI {
    ns_iri(&format!("{RDF_NS}type"))
}
fn rdf_first() -> IRI {
    ns_iri(&format!("{RDF_NS}first"))
}
fn rdf_rest() -> IRI {
    ns_iri(&format!("{RDF_NS}rest"))
}
fn rdf_nil() -> RdfTerm {
    RdfTerm::Iri(ns_iri(&format!("{RDF_NS}nil")))
}
fn rdf_list_class() -> RdfTerm {
    RdfTerm::Iri(ns_iri(&format!("{RDF_NS}List")))
}
fn owl_class() -> RdfTerm {
    RdfTerm::Iri(ns_iri(&format!("{OWL_NS}Class")))
}
fn owl_datatype() -> RdfTerm {
    RdfTerm::Iri(ns_iri(&format!("{OWL_NS}Datatype")))
}
fn owl_object_property() -> RdfTerm {
    RdfTerm::Iri(ns_iri(&format!("{OWL_NS}ObjectProperty")))
}
fn owl_datatype_property() -> RdfTerm {
    RdfTerm::Iri(ns_iri(&format!("{OWL_NS}DatatypeProperty")))
}
fn owl_annotation_property() -> RdfTerm {
    RdfTerm::Iri(ns_iri(&format!("{OWL_NS}AnnotationProperty")))
}
fn owl_named_individual() -> RdfTerm {
    RdfTerm::Iri(ns_iri(&format!("{OWL_NS}NamedIndividual")))
}
fn owl_restriction() -> RdfTerm {
    RdfTerm::Iri(ns_iri(&format!("{OWL_NS}Restriction")))
}
fn owl_on_property() -> IRI {
    ns_iri(&format!("{OWL_NS}onProperty"))
}
fn owl_has_value() -> IRI {
    ns_iri(&format!("{OWL_NS}hasValue"))
}
fn owl_some_values_from() -> IRI {
    ns_iri(&format!("{OWL_NS}someValuesFrom"))
}
fn owl_all_values_from() -> IRI {
    ns_iri(&format!("{OWL_NS}allValuesFrom"))
}
fn owl_union_of() -> IRI {
    ns_iri(&format!("{OWL_NS}unionOf"))
}
fn owl_disjoint_with() -> IRI {
    ns_iri(&format!("{OWL_NS}disjointWith"))
}
fn owl_all_disjoint_classes() -> RdfTerm {
    RdfTerm::Iri(ns_iri(&format!("{OWL_NS}AllDisjointClasses")))
}
fn owl_members() -> IRI {
    ns_iri(&format!("{OWL_NS}members"))
}
fn owl_axiom() -> RdfTerm {
    RdfTerm::Iri(ns_iri(&format!("{OWL_NS}Axiom")))
}
fn owl_annotated_source() -> IRI {
    ns_iri(&format!("{OWL_NS}annotatedSource"))
}
fn owl_annotated_property() -> IRI {
    ns_iri(&format!("{OWL_NS}annotatedProperty"))
}
fn owl_annotated_target() -> IRI {
    ns_iri(&format!("{OWL_NS}annotatedTarget"))
}
fn rdfs_sub_class_of() -> IRI {
    ns_iri(&format!("{RDFS_NS}subClassOf"))
}
fn rdfs_domain() -> IRI {
    ns_iri(&format!("{RDFS_NS}domain"))
}
fn rdfs_range() -> IRI {
    ns_iri(&format!("{RDFS_NS}range"))
}

/// Hands out successive fresh blank node identifiers for the duration of
/// one `to_rdf` call.
struct BlankNodeGen {
    next: u64,
}

impl BlankNodeGen {
    fn new() -> Self {
        BlankNodeGen { next: 0 }
    }

    fn fresh(&mut self) -> RdfTerm {
        let id = self.next;
        self.next += 1;
        RdfTerm::Blank(format!("b{id}"))
    }
}

fn individual_term(individual: &Individual) -> RdfTerm {
    match individual {
        Individual::Named(n) => RdfTerm::Iri(n.iri().clone()),
        Individual::Anonymous(a) => RdfTerm::Blank(a.node_id().as_str().to_string()),
    }
}

fn annotation_value_term(value: &AnnotationValue) -> RdfTerm {
    match value {
        AnnotationValue::Iri(iri) => RdfTerm::Iri(iri.clone()),
        AnnotationValue::Literal(lit) => RdfTerm::Literal(lit.clone()),
        AnnotationValue::AnonymousIndividual(a) => RdfTerm::Blank(a.node_id().as_str().to_string()),
    }
}

fn named_object_property(ope: &ObjectPropertyExpression) -> OwlResult<IRI> {
    match ope {
        ObjectPropertyExpression::ObjectProperty(p) => Ok(p.iri().clone()),
        ObjectPropertyExpression::ObjectInverseOf(_) => Err(OwlError::Unsupported {
            construct: "ObjectInverseOf as an RDF predicate".to_string(),
        }),
    }
}

/// Build an RDF list (`rdf:first`/`rdf:rest` chain terminated by
/// `rdf:nil`) out of already-converted terms, returning its head node and
/// the triples that describe it. `items` must be non-empty.
fn build_seq(gen: &mut BlankNodeGen, items: &[RdfTerm]) -> (RdfTerm, Vec<RdfTriple>) {
    let head = gen.fresh();
    let mut triples = vec![RdfTriple::new(head.clone(), rdf_type(), rdf_list_class())];
    triples.extend(build_seq_rec(gen, head.clone(), items));
    (head, triples)
}

fn build_seq_rec(gen: &mut BlankNodeGen, anchor: RdfTerm, items: &[RdfTerm]) -> Vec<RdfTriple> {
    let (first, rest) = items.split_first().expect("build_seq called with no items");
    let rest_node = if rest.is_empty() { rdf_nil() } else { gen.fresh() };

    let mut triples = vec![
        RdfTriple::new(anchor.clone(), rdf_first(), first.clone()),
        RdfTriple::new(anchor, rdf_rest(), rest_node.clone()),
    ];
    if !rest.is_empty() {
        triples.extend(build_seq_rec(gen, rest_node, rest));
    }
    triples
}

/// Convert a class expression to its RDF-graph representation: the
/// resource denoting the expression, plus whatever auxiliary triples were
/// needed to build it.
fn convert_class_expression(
    ce: &ClassExpression,
    gen: &mut BlankNodeGen,
) -> OwlResult<(RdfTerm, Vec<RdfTriple>)> {
    match ce {
        ClassExpression::Class(c) => Ok((RdfTerm::Iri(c.iri().clone()), Vec::new())),

        ClassExpression::DataHasValue(dp, value) => {
            let bnode = gen.fresh();
            let triples = vec![
                RdfTriple::new(bnode.clone(), rdf_type(), owl_restriction()),
                RdfTriple::new(bnode.clone(), rdf_type(), owl_class()),
                RdfTriple::new(bnode.clone(), owl_on_property(), RdfTerm::Iri(dp.iri().clone())),
                RdfTriple::new(bnode.clone(), owl_has_value(), value.clone()),
            ];
            Ok((bnode, triples))
        }

        ClassExpression::ObjectSomeValuesFrom(ope, filler) => {
            let property = named_object_property(ope)?;
            let (filler_res, mut triples) = convert_class_expression(filler, gen)?;
            let bnode = gen.fresh();
            triples.push(RdfTriple::new(bnode.clone(), rdf_type(), owl_restriction()));
            triples.push(RdfTriple::new(bnode.clone(), rdf_type(), owl_class()));
            triples.push(RdfTriple::new(bnode.clone(), owl_on_property(), RdfTerm::Iri(property)));
            triples.push(RdfTriple::new(bnode.clone(), owl_some_values_from(), filler_res));
            Ok((bnode, triples))
        }

        ClassExpression::ObjectAllValuesFrom(ope, filler) => {
            let property = named_object_property(ope)?;
            let (filler_res, mut triples) = convert_class_expression(filler, gen)?;
            let bnode = gen.fresh();
            triples.push(RdfTriple::new(bnode.clone(), rdf_type(), owl_restriction()));
            triples.push(RdfTriple::new(bnode.clone(), rdf_type(), owl_class()));
            triples.push(RdfTriple::new(bnode.clone(), owl_on_property(), RdfTerm::Iri(property)));
            triples.push(RdfTriple::new(bnode.clone(), owl_all_values_from(), filler_res));
            Ok((bnode, triples))
        }

        ClassExpression::ObjectUnionOf(operands) => {
            let mut triples = Vec::new();
            let mut resources = Vec::new();
            for operand in operands.iter() {
                let (res, aux) = convert_class_expression(operand, gen)?;
                triples.extend(aux);
                resources.push(res);
            }
            let (seq_res, seq_triples) = build_seq(gen, &resources);
            triples.extend(seq_triples);

            let bnode = gen.fresh();
            triples.push(RdfTriple::new(bnode.clone(), rdf_type(), owl_class()));
            triples.push(RdfTriple::new(bnode.clone(), owl_union_of(), seq_res));
            Ok((bnode, triples))
        }

        other => Err(OwlError::Unsupported {
            construct: format!("class expression {other:?} has no RDF mapping"),
        }),
    }
}

fn convert_data_range(data_range: &DataRange) -> OwlResult<RdfTerm> {
    match data_range {
        DataRange::Datatype(dt) => Ok(RdfTerm::Iri(dt.iri().clone())),
        other => Err(OwlError::Unsupported {
            construct: format!("data range {other:?} has no RDF mapping"),
        }),
    }
}

/// Reify `annotations` onto `principal`, the one triple the enclosing
/// axiom's conversion produced (§4.12: axiom-annotation RDF reification —
/// the historical converter this crate is grounded on never implemented
/// this and unconditionally raised instead).
fn reify_annotations(
    triples: &mut Vec<RdfTriple>,
    gen: &mut BlankNodeGen,
    principal: &RdfTriple,
    annotations: &AnnotationSet,
) {
    if annotations.is_empty() {
        return;
    }
    let bnode = gen.fresh();
    triples.push(RdfTriple::new(bnode.clone(), rdf_type(), owl_axiom()));
    triples.push(RdfTriple::new(
        bnode.clone(),
        owl_annotated_source(),
        principal.subject.clone(),
    ));
    triples.push(RdfTriple::new(
        bnode.clone(),
        owl_annotated_property(),
        RdfTerm::Iri(principal.predicate.clone()),
    ));
    triples.push(RdfTriple::new(
        bnode.clone(),
        owl_annotated_target(),
        principal.object.clone(),
    ));
    for annotation in annotations.iter() {
        triples.push(RdfTriple::new(
            bnode.clone(),
            annotation.property.iri().clone(),
            annotation_value_term(&annotation.value),
        ));
    }
}

fn entity_declaration_triple(entity: &Entity) -> RdfTriple {
    match entity {
        Entity::Class(c) => RdfTriple::new(c.iri().clone(), rdf_type(), owl_class()),
        Entity::Datatype(d) => RdfTriple::new(d.iri().clone(), rdf_type(), owl_datatype()),
        Entity::ObjectProperty(p) => RdfTriple::new(p.iri().clone(), rdf_type(), owl_object_property()),
        Entity::DataProperty(p) => RdfTriple::new(p.iri().clone(), rdf_type(), owl_datatype_property()),
        Entity::AnnotationProperty(p) => {
            RdfTriple::new(p.iri().clone(), rdf_type(), owl_annotation_property())
        }
        Entity::NamedIndividual(i) => RdfTriple::new(i.iri().clone(), rdf_type(), owl_named_individual()),
    }
}

fn convert_axiom(
    axiom: &Axiom,
    gen: &mut BlankNodeGen,
    options: &Owl2RdfOptions,
) -> OwlResult<Vec<RdfTriple>> {
    let annotations = axiom.annotations();

    match axiom {
        Axiom::Declaration { entity, .. } => {
            let principal = entity_declaration_triple(entity);
            let mut triples = vec![principal.clone()];
            reify_annotations(&mut triples, gen, &principal, annotations);
            Ok(triples)
        }

        Axiom::SubClassOf { sub, sup, .. } => {
            let (sub_res, mut triples) = convert_class_expression(sub, gen)?;
            let (sup_res, sup_triples) = convert_class_expression(sup, gen)?;
            triples.extend(sup_triples);
            let principal = RdfTriple::new(sub_res, rdfs_sub_class_of(), sup_res);
            triples.push(principal.clone());
            reify_annotations(&mut triples, gen, &principal, annotations);
            Ok(triples)
        }

        Axiom::DisjointClasses { classes, .. } => {
            let mut triples = Vec::new();
            let mut resources = Vec::new();
            for ce in classes.iter() {
                let (res, aux) = convert_class_expression(ce, gen)?;
                triples.extend(aux);
                resources.push(res);
            }

            if options.use_all_disjoint_classes && resources.len() > 2 {
                let (seq_res, seq_triples) = build_seq(gen, &resources);
                triples.extend(seq_triples);
                let bnode = gen.fresh();
                triples.push(RdfTriple::new(bnode.clone(), rdf_type(), owl_all_disjoint_classes()));
                triples.push(RdfTriple::new(bnode, owl_members(), seq_res));
            } else {
                for pair in resources.iter().combinations(2) {
                    triples.push(RdfTriple::new(pair[0].clone(), owl_disjoint_with(), pair[1].clone()));
                }
            }
            // Multi-triple axiom: no single principal triple to reify onto.
            Ok(triples)
        }

        Axiom::ClassAssertion {
            class_expression,
            individual,
            ..
        } => {
            let (class_res, mut triples) = convert_class_expression(class_expression, gen)?;
            let principal = RdfTriple::new(individual_term(individual), rdf_type(), class_res);
            triples.push(principal.clone());
            reify_annotations(&mut triples, gen, &principal, annotations);
            Ok(triples)
        }

        Axiom::ObjectPropertyDomain { property, domain, .. } => {
            let prop_iri = named_object_property(property)?;
            let (domain_res, mut triples) = convert_class_expression(domain, gen)?;
            let principal = RdfTriple::new(prop_iri, rdfs_domain(), domain_res);
            triples.push(principal.clone());
            reify_annotations(&mut triples, gen, &principal, annotations);
            Ok(triples)
        }

        Axiom::ObjectPropertyRange { property, range, .. } => {
            let prop_iri = named_object_property(property)?;
            let (range_res, mut triples) = convert_class_expression(range, gen)?;
            let principal = RdfTriple::new(prop_iri, rdfs_range(), range_res);
            triples.push(principal.clone());
            reify_annotations(&mut triples, gen, &principal, annotations);
            Ok(triples)
        }

        Axiom::DataPropertyDomain { property, domain, .. } => {
            let (domain_res, mut triples) = convert_class_expression(domain, gen)?;
            let principal = RdfTriple::new(property.iri().clone(), rdfs_domain(), domain_res);
            triples.push(principal.clone());
            reify_annotations(&mut triples, gen, &principal, annotations);
            Ok(triples)
        }

        Axiom::DataPropertyRange { property, range, .. } => {
            let range_res = convert_data_range(range)?;
            let principal = RdfTriple::new(property.iri().clone(), rdfs_range(), range_res);
            let mut triples = vec![principal.clone()];
            reify_annotations(&mut triples, gen, &principal, annotations);
            Ok(triples)
        }

        Axiom::ObjectPropertyAssertion {
            property,
            source,
            target,
            ..
        } => {
            let prop_iri = named_object_property(property)?;
            let principal = RdfTriple::new(individual_term(source), prop_iri, individual_term(target));
            let mut triples = vec![principal.clone()];
            reify_annotations(&mut triples, gen, &principal, annotations);
            Ok(triples)
        }

        Axiom::DataPropertyAssertion {
            property,
            source,
            target,
            ..
        } => {
            let principal = RdfTriple::new(
                individual_term(source),
                property.iri().clone(),
                target.clone(),
            );
            let mut triples = vec![principal.clone()];
            reify_annotations(&mut triples, gen, &principal, annotations);
            Ok(triples)
        }

        Axiom::AnnotationAssertion {
            property,
            subject,
            value,
            ..
        } => {
            let subject_term = match subject {
                crate::model::axiom::AnnotationSubject::Iri(iri) => RdfTerm::Iri(iri.clone()),
                crate::model::axiom::AnnotationSubject::Anonymous(a) => {
                    RdfTerm::Blank(a.node_id().as_str().to_string())
                }
            };
            let principal = RdfTriple::new(subject_term, property.iri().clone(), annotation_value_term(value));
            let mut triples = vec![principal.clone()];
            reify_annotations(&mut triples, gen, &principal, annotations);
            Ok(triples)
        }

        other => Err(OwlError::Unsupported {
            construct: format!("RDF conversion for axiom {} not implemented", other.keyword()),
        }),
    }
}

/// Convert every axiom in `ontology` to RDF triples.
///
/// Fails on the first axiom or nested construct this crate doesn't yet
/// know how to render as RDF, with [`OwlError::Unsupported`] naming it.
pub fn to_rdf(ontology: &Ontology, options: &Owl2RdfOptions) -> OwlResult<Vec<RdfTriple>> {
    let mut gen = BlankNodeGen::new();
    let mut triples = Vec::new();
    for axiom in ontology.axioms() {
        triples.extend(convert_axiom(axiom, &mut gen, options)?);
    }
    Ok(triples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::axiom::Axiom;
    use crate::model::entities::{AnnotationProperty, Class};

    fn class(local: &str) -> ClassExpression {
        ClassExpression::class(Class::new(IRI::parse_absolute(&format!("http://e/{local}")).unwrap()))
    }

    #[test]
    fn sub_class_of_is_one_triple() {
        let mut o = Ontology::new();
        o.add_axiom(Axiom::SubClassOf {
            sub: class("A"),
            sup: class("B"),
            annotations: AnnotationSet::new(),
        });
        let triples = to_rdf(&o, &Owl2RdfOptions::default()).unwrap();
        assert_eq!(triples.len(), 1);
        assert_eq!(triples[0].predicate, rdfs_sub_class_of());
    }

    #[test]
    fn disjoint_classes_defaults_to_pairwise() {
        let mut o = Ontology::new();
        o.add_axiom(Axiom::DisjointClasses {
            classes: crate::model::class_expression::OperandSet::new(vec![
                class("A"),
                class("B"),
                class("C"),
            ]),
            annotations: AnnotationSet::new(),
        });
        let triples = to_rdf(&o, &Owl2RdfOptions::default()).unwrap();
        assert_eq!(triples.len(), 3); // C(3,2) pairs
        assert!(triples.iter().all(|t| t.predicate == owl_disjoint_with()));
    }

    #[test]
    fn disjoint_classes_uses_all_disjoint_classes_when_requested() {
        let mut o = Ontology::new();
        o.add_axiom(Axiom::DisjointClasses {
            classes: crate::model::class_expression::OperandSet::new(vec![
                class("A"),
                class("B"),
                class("C"),
            ]),
            annotations: AnnotationSet::new(),
        });
        let opts = Owl2RdfOptions {
            use_all_disjoint_classes: true,
        };
        let triples = to_rdf(&o, &opts).unwrap();
        assert!(triples.iter().any(|t| t.predicate == owl_members()));
        assert!(!triples.iter().any(|t| t.predicate == owl_disjoint_with()));
    }

    #[test]
    fn annotated_axiom_reifies_with_owl_axiom() {
        let mut o = Ontology::new();
        let prop = AnnotationProperty::new(IRI::parse_absolute("http://e/note").unwrap());
        o.add_axiom(Axiom::SubClassOf {
            sub: class("A"),
            sup: class("B"),
            annotations: AnnotationSet::from_iter_dedup([crate::model::annotation::Annotation::new(
                prop,
                Literal::plain("because"),
            )]),
        });
        let triples = to_rdf(&o, &Owl2RdfOptions::default()).unwrap();
        assert!(triples.iter().any(|t| t.object == owl_axiom()));
        assert!(triples.iter().any(|t| t.predicate == owl_annotated_source()));
    }

    #[test]
    fn data_has_value_produces_restriction() {
        use crate::model::entities::DataProperty;
        let mut o = Ontology::new();
        let dp = DataProperty::new(IRI::parse_absolute("http://e/age").unwrap());
        o.add_axiom(Axiom::SubClassOf {
            sub: class("Adult"),
            sup: ClassExpression::data_has_value(dp, Literal::plain("18")),
            annotations: AnnotationSet::new(),
        });
        let triples = to_rdf(&o, &Owl2RdfOptions::default()).unwrap();
        assert!(triples.iter().any(|t| t.object == owl_restriction()));
        assert!(triples.iter().any(|t| t.predicate == owl_has_value()));
    }
}
