//! Encoding parsed axioms into OWLLink request XML (scenario-style, no
//! network: exercises the encoder/response layers the reasoner facade is
//! built from).

use owl2_model::owllink::encoder::{init_request, translate_axiom};
use owl2_model::owllink::response::parse_class_set;
use owl2_model::parser::{FunctionalSyntaxParser, OntologyParser};
use xmltree::Element;

const DOC: &str = r#"
Prefix(:=<http://example.org/ex#>)
Ontology(<http://example.org/ex>
  Declaration(Class(:Animal))
  Declaration(Class(:Dog))
  SubClassOf(:Dog :Animal)
)
"#;

#[test]
fn every_axiom_in_a_declaration_only_ontology_encodes() {
    let ontology = FunctionalSyntaxParser::new().parse_str(DOC).unwrap();
    for axiom in ontology.axioms() {
        let xml = translate_axiom(axiom).expect("Declaration/SubClassOf both have translators");
        assert!(!xml.name.is_empty());
    }
}

#[test]
fn init_request_carries_both_namespace_bindings() {
    let request = init_request();
    assert_eq!(request.attributes.get("xmlns").unwrap(), "http://www.owllink.org/owllink#");
    assert_eq!(
        request.attributes.get("xmlns:owl").unwrap(),
        "http://www.w3.org/2002/07/owl#"
    );
}

#[test]
fn get_all_classes_response_round_trips_through_parse_class_set() {
    // Stand in for what a server would actually send back for
    // GetAllClasses: a SetOfClasses wrapping each owl:Class.
    let xml = r#"<ResponseMessage>
      <GetAllClassesResponse>
        <SetOfClasses>
          <owl:Class IRI="http://example.org/ex#Animal"/>
          <owl:Class IRI="http://example.org/ex#Dog"/>
        </SetOfClasses>
      </GetAllClassesResponse>
    </ResponseMessage>"#;
    let root = Element::parse(xml.as_bytes()).unwrap();
    let classes = parse_class_set(&root, "SetOfClasses").unwrap();
    assert_eq!(classes.len(), 2);
}
