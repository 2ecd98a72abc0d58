//! Parsing OWLLink response XML back into typed results.
//!
//! Follows the same shape the reference client used to read
//! `GetSubClasses` responses: look for a named synset element anywhere in
//! the tree, then read its `owl:Class` (or `owl:NamedIndividual`)
//! children's `IRI` attribute.

use crate::error::{OwlError, OwlResult};
use crate::iri::IRI;
use crate::model::entities::{Class, NamedIndividual};
use xmltree::Element;

/// A boolean response (`IsKBSatisfiableResponse`, `IsEntailedResponse`,
/// ...), read off a `result` attribute on the response root.
pub fn parse_boolean_response(root: &Element) -> OwlResult<bool> {
    root.attributes
        .get("result")
        .map(|v| v == "true")
        .ok_or_else(|| OwlError::ProtocolError {
            detail: format!("{} response missing a 'result' attribute", root.name),
        })
}

fn find_descendants<'a>(root: &'a Element, name: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    for child in root.children.iter().filter_map(|n| n.as_element()) {
        if child.name == name {
            found.push(child);
        }
        found.extend(find_descendants(child, name));
    }
    found
}

fn class_from_element(element: &Element) -> OwlResult<Class> {
    let iri = element.attributes.get("IRI").ok_or_else(|| OwlError::ProtocolError {
        detail: "owl:Class element missing IRI attribute".to_string(),
    })?;
    Ok(Class::new(IRI::parse_absolute(iri)?))
}

fn named_individual_from_element(element: &Element) -> OwlResult<NamedIndividual> {
    let iri = element.attributes.get("IRI").ok_or_else(|| OwlError::ProtocolError {
        detail: "owl:NamedIndividual element missing IRI attribute".to_string(),
    })?;
    Ok(NamedIndividual::new(IRI::parse_absolute(iri)?))
}

/// Collect every `owl:Class` nested under any `synset_tag` element found
/// anywhere in `root` (e.g. `"owllink:ClassSynset"` for a `GetSubClasses`
/// response, `"owllink:SetOfClasses"` for `GetAllClasses`).
pub fn parse_class_set(root: &Element, synset_tag: &str) -> OwlResult<Vec<Class>> {
    let mut classes = Vec::new();
    for synset in find_descendants(root, synset_tag) {
        for ce in synset.children.iter().filter_map(|n| n.as_element()) {
            if ce.name == "owl:Class" {
                classes.push(class_from_element(ce)?);
            }
        }
    }
    Ok(classes)
}

/// Collect every `owl:NamedIndividual` nested under any `synset_tag`
/// element found anywhere in `root` (used for `GetInstances` responses).
pub fn parse_individual_set(root: &Element, synset_tag: &str) -> OwlResult<Vec<NamedIndividual>> {
    let mut individuals = Vec::new();
    for synset in find_descendants(root, synset_tag) {
        for node in synset.children.iter().filter_map(|n| n.as_element()) {
            if node.name == "owl:NamedIndividual" {
                individuals.push(named_individual_from_element(node)?);
            }
        }
    }
    Ok(individuals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Element {
        Element::parse(xml.as_bytes()).unwrap()
    }

    #[test]
    fn reads_boolean_result_attribute() {
        let root = parse(r#"<IsKBSatisfiableResponse result="true"/>"#);
        assert!(parse_boolean_response(&root).unwrap());
    }

    #[test]
    fn missing_result_attribute_is_a_protocol_error() {
        let root = parse(r#"<IsKBSatisfiableResponse/>"#);
        assert!(parse_boolean_response(&root).is_err());
    }

    #[test]
    fn collects_classes_from_nested_synset() {
        let root = parse(
            r#"<ResponseMessage>
                 <GetSubClassesResponse>
                   <ClassSynset>
                     <owl:Class IRI="http://e/A"/>
                     <owl:Class IRI="http://e/B"/>
                   </ClassSynset>
                 </GetSubClassesResponse>
               </ResponseMessage>"#,
        );
        let classes = parse_class_set(&root, "ClassSynset").unwrap();
        assert_eq!(classes.len(), 2);
    }
}
