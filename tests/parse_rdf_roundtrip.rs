//! Parsing a Functional Syntax document and converting the result to RDF.

use owl2_model::owllink::encoder::translate_axiom;
use owl2_model::parser::{FunctionalSyntaxParser, OntologyParser};
use owl2_model::rdf::{to_rdf, Owl2RdfOptions, RdfTerm};
use owl2_model::Axiom;

const FAMILY_ONTOLOGY: &str = r#"
Prefix(:=<http://example.org/family#>)
Prefix(owl:=<http://www.w3.org/2002/07/owl#>)
Ontology(<http://example.org/family>
  Declaration(Class(:Person))
  Declaration(Class(:Parent))
  Declaration(Class(:Woman))
  Declaration(ObjectProperty(:hasChild))
  Declaration(NamedIndividual(:alice))
  Declaration(NamedIndividual(:bob))

  SubClassOf(:Parent :Person)
  SubClassOf(:Woman :Person)
  DisjointClasses(:Parent :Woman :Person)

  ClassAssertion(:Parent :alice)
  ObjectPropertyAssertion(:hasChild :alice :bob)

  AnnotationAssertion(rdfs:label :alice "Alice"@en)
)
"#;

fn parse(doc: &str) -> owl2_model::Ontology {
    FunctionalSyntaxParser::new().parse_str(doc).expect("document parses")
}

#[test]
fn family_ontology_parses_with_expected_axiom_count() {
    let ontology = parse(FAMILY_ONTOLOGY);
    // 5 declarations + 2 subclass + 1 disjoint + 1 class assertion
    // + 1 object property assertion + 1 annotation assertion = 11
    assert_eq!(ontology.axiom_count(), 11);
}

#[test]
fn family_ontology_converts_to_rdf_without_unsupported_constructs() {
    let ontology = parse(FAMILY_ONTOLOGY);
    let triples = to_rdf(&ontology, &Owl2RdfOptions::default()).expect("every axiom here has an RDF mapping");
    assert!(!triples.is_empty());

    // SubClassOf(:Parent :Person) must show up as an rdfs:subClassOf triple
    // between those two class IRIs.
    let parent = owl2_model::IRI::parse_absolute("http://example.org/family#Parent").unwrap();
    let person = owl2_model::IRI::parse_absolute("http://example.org/family#Person").unwrap();
    let found = triples.iter().any(|t| {
        t.predicate.as_str().ends_with("subClassOf")
            && matches!(&t.subject, RdfTerm::Iri(i) if *i == parent)
            && matches!(&t.object, RdfTerm::Iri(i) if *i == person)
    });
    assert!(found, "expected an rdfs:subClassOf(Parent, Person) triple");
}

#[test]
fn disjoint_three_classes_defaults_to_pairwise_disjoint_with() {
    let ontology = parse(FAMILY_ONTOLOGY);
    let triples = to_rdf(&ontology, &Owl2RdfOptions::default()).unwrap();
    let disjoint_with_count = triples
        .iter()
        .filter(|t| t.predicate.as_str().ends_with("disjointWith"))
        .count();
    // combinations(3, 2) == 3
    assert_eq!(disjoint_with_count, 3);
}

#[test]
fn annotation_assertion_translates_to_owllink_is_unsupported() {
    // AnnotationAssertion has no OWLLink translator: the dispatch table only
    // covers Declaration-of-Class and SubClassOf between named classes.
    let ontology = parse(FAMILY_ONTOLOGY);
    let annotation_assertion = ontology
        .axioms()
        .find(|a| matches!(a, Axiom::AnnotationAssertion { .. }))
        .expect("the fixture has one");
    assert!(translate_axiom(annotation_assertion).is_err());
}
