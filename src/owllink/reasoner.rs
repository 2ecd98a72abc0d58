//! A stateful OWLLink reasoner client.
//!
//! Mirrors the reference client's lifecycle: construction posts a
//! `CreateKB` + `Tell` request carrying every axiom up front, and each
//! query method posts one more request and parses the reply. A session
//! that hits a transport failure (the server is unreachable, times out)
//! is marked [`ReasonerState::Faulted`] and refuses further requests
//! rather than silently retrying; a session that has called
//! [`OwlLinkReasoner::release_kb`] is marked [`ReasonerState::Released`]
//! for the same reason.

use crate::config::ReasonerConfig;
use crate::error::{OwlError, OwlResult, SessionFate};
use crate::model::axiom::Axiom;
use crate::model::class_expression::ClassExpression;
use crate::model::entities::{Class, NamedIndividual};
use crate::model::ontology::Ontology;
use crate::owllink::encoder::{init_request, translate_axiom, translate_class_expression};
use crate::owllink::response::{parse_boolean_response, parse_class_set, parse_individual_set};
use uuid::Uuid;
use xmltree::{Element, XMLNode};

/// Where a reasoner session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasonerState {
    Ready,
    Released,
    Faulted,
}

/// A live connection to an OWLLink reasoner server, backed by one
/// server-side knowledge base.
pub struct OwlLinkReasoner {
    server_url: String,
    kb_uri: String,
    client: reqwest::blocking::Client,
    state: ReasonerState,
}

impl OwlLinkReasoner {
    /// Create a knowledge base on `server_url` and `Tell` it every axiom
    /// in `ontology`.
    pub fn new(ontology: &Ontology, server_url: impl Into<String>, config: &ReasonerConfig) -> OwlResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| OwlError::TransportError { cause: e.to_string() })?;

        let kb_uri = format!("http://example.com/{}", Uuid::new_v4());
        let mut reasoner = OwlLinkReasoner {
            server_url: server_url.into(),
            kb_uri,
            client,
            state: ReasonerState::Ready,
        };
        reasoner.init_kb(ontology)?;
        Ok(reasoner)
    }

    pub fn state(&self) -> ReasonerState {
        self.state
    }

    pub fn kb_uri(&self) -> &str {
        &self.kb_uri
    }

    fn ensure_usable(&self) -> OwlResult<()> {
        match self.state {
            ReasonerState::Ready => Ok(()),
            ReasonerState::Released => Err(OwlError::ProtocolError {
                detail: "reasoner session was released".to_string(),
            }),
            ReasonerState::Faulted => Err(OwlError::ProtocolError {
                detail: "reasoner session is faulted and must be discarded".to_string(),
            }),
        }
    }

    /// Post one request, parse the reply as XML, and fault the session on
    /// any transport-level failure. A malformed (non-XML) reply is a
    /// protocol error and also faults the session, per the
    /// transport-vs-protocol [`SessionFate`] split.
    fn post(&mut self, request: &Element) -> OwlResult<Element> {
        self.ensure_usable()?;

        let mut body = Vec::new();
        request
            .write(&mut body)
            .map_err(|e| OwlError::ProtocolError { detail: e.to_string() })?;

        log::debug!("POST {} ({} bytes)", self.server_url, body.len());

        let response = self.client.post(&self.server_url).body(body).send();
        let response = match response {
            Ok(r) => r,
            Err(e) => {
                self.state = ReasonerState::Faulted;
                return Err(OwlError::TransportError { cause: e.to_string() });
            }
        };

        let text = match response.text() {
            Ok(t) => t,
            Err(e) => {
                self.state = ReasonerState::Faulted;
                return Err(OwlError::TransportError { cause: e.to_string() });
            }
        };

        log::trace!("response body: {text}");

        match Element::parse(text.as_bytes()) {
            Ok(el) => Ok(el),
            Err(e) => {
                self.state = ReasonerState::Faulted;
                Err(OwlError::ProtocolError { detail: e.to_string() })
            }
        }
    }

    /// Whether a fault on this session can be retried by opening a new
    /// one, per the crate's transport-vs-protocol error taxonomy.
    pub fn last_fault_is_retryable(&self, err: &OwlError) -> bool {
        matches!(err.session_fate(), SessionFate::Retryable)
    }

    fn init_kb(&mut self, ontology: &Ontology) -> OwlResult<()> {
        let mut request = init_request();

        let mut create_kb = Element::new("CreateKB");
        create_kb.attributes.insert("kb".to_string(), self.kb_uri.clone());
        request.children.push(XMLNode::Element(create_kb));

        let mut tell = Element::new("Tell");
        tell.attributes.insert("kb".to_string(), self.kb_uri.clone());
        for axiom in ontology.axioms() {
            tell.children.push(XMLNode::Element(translate_axiom(axiom)?));
        }
        request.children.push(XMLNode::Element(tell));

        self.post(&request)?;
        Ok(())
    }

    fn kb_request(&self, tag: &str) -> Element {
        let mut request = init_request();
        let mut el = Element::new(tag);
        el.attributes.insert("kb".to_string(), self.kb_uri.clone());
        request.children.push(XMLNode::Element(el));
        request
    }

    pub fn is_kb_satisfiable(&mut self) -> OwlResult<bool> {
        let request = self.kb_request("IsKBSatisfiable");
        let response = self.post(&request)?;
        parse_boolean_response(&response)
    }

    pub fn is_entailed(&mut self, axiom: &Axiom) -> OwlResult<bool> {
        let mut request = init_request();
        let mut entailed = Element::new("IsEntailed");
        entailed.attributes.insert("kb".to_string(), self.kb_uri.clone());
        entailed.children.push(XMLNode::Element(translate_axiom(axiom)?));
        request.children.push(XMLNode::Element(entailed));

        let response = self.post(&request)?;
        parse_boolean_response(&response)
    }

    pub fn get_all_classes(&mut self) -> OwlResult<Vec<Class>> {
        let request = self.kb_request("GetAllClasses");
        let response = self.post(&request)?;
        parse_class_set(&response, "owllink:SetOfClasses")
    }

    pub fn get_sub_classes(&mut self, ce: &ClassExpression, direct: bool) -> OwlResult<Vec<Class>> {
        self.class_hierarchy_query("GetSubClasses", "owllink:ClassSynset", ce, direct)
    }

    pub fn get_super_classes(&mut self, ce: &ClassExpression, direct: bool) -> OwlResult<Vec<Class>> {
        self.class_hierarchy_query("GetSuperClasses", "owllink:ClassSynset", ce, direct)
    }

    fn class_hierarchy_query(
        &mut self,
        tag: &str,
        synset_tag: &str,
        ce: &ClassExpression,
        direct: bool,
    ) -> OwlResult<Vec<Class>> {
        let mut request = init_request();
        let mut el = Element::new(tag);
        el.attributes.insert("kb".to_string(), self.kb_uri.clone());
        el.attributes.insert("direct".to_string(), direct.to_string());
        el.children.push(XMLNode::Element(translate_class_expression(ce)?));
        request.children.push(XMLNode::Element(el));

        let response = self.post(&request)?;
        parse_class_set(&response, synset_tag)
    }

    pub fn get_instances(&mut self, ce: &ClassExpression, direct: bool) -> OwlResult<Vec<NamedIndividual>> {
        let mut request = init_request();
        let mut el = Element::new("GetInstances");
        el.attributes.insert("kb".to_string(), self.kb_uri.clone());
        el.attributes.insert("direct".to_string(), direct.to_string());
        el.children.push(XMLNode::Element(translate_class_expression(ce)?));
        request.children.push(XMLNode::Element(el));

        let response = self.post(&request)?;
        parse_individual_set(&response, "owllink:IndividualSynset")
    }

    /// Release the server-side knowledge base. The session cannot be used
    /// for further queries afterwards.
    pub fn release_kb(&mut self) -> OwlResult<()> {
        let request = self.kb_request("ReleaseKB");
        self.post(&request)?;
        self.state = ReasonerState::Released;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unusable(state: ReasonerState) -> OwlLinkReasoner {
        OwlLinkReasoner {
            server_url: "http://localhost:0".to_string(),
            kb_uri: "http://example.com/test-kb".to_string(),
            client: reqwest::blocking::Client::new(),
            state,
        }
    }

    #[test]
    fn released_session_refuses_further_requests() {
        let reasoner = unusable(ReasonerState::Released);
        assert!(reasoner.ensure_usable().is_err());
    }

    #[test]
    fn faulted_session_refuses_further_requests() {
        let reasoner = unusable(ReasonerState::Faulted);
        assert!(reasoner.ensure_usable().is_err());
    }

    #[test]
    fn ready_session_is_usable() {
        let reasoner = unusable(ReasonerState::Ready);
        assert!(reasoner.ensure_usable().is_ok());
    }

    #[test]
    fn kb_request_carries_the_kb_uri_attribute() {
        let reasoner = unusable(ReasonerState::Ready);
        let request = reasoner.kb_request("IsKBSatisfiable");
        let el = request.children[0].as_element().unwrap();
        assert_eq!(el.attributes.get("kb").unwrap(), "http://example.com/test-kb");
    }

    #[test]
    fn transport_errors_are_retryable_but_protocol_errors_are_not() {
        let reasoner = unusable(ReasonerState::Ready);
        let transport = OwlError::TransportError { cause: "timeout".into() };
        let protocol = OwlError::ProtocolError { detail: "bad xml".into() };
        assert!(reasoner.last_fault_is_retryable(&transport));
        assert!(!reasoner.last_fault_is_retryable(&protocol));
    }
}
