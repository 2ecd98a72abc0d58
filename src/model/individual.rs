//! OWL2 individuals: named or anonymous (blank-node-identified).

use crate::model::entities::NamedIndividual;
use std::sync::Arc;

/// A document-scoped blank node identifier, e.g. the `23` in `_:23`.
///
/// Scoped to one parsed [`crate::model::ontology::Ontology`]: the same
/// string in two different documents does not denote the same individual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankNodeId(Arc<str>);

impl BlankNodeId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        BlankNodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An anonymous individual, identified by a document-scoped blank node id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnonymousIndividual(BlankNodeId);

impl AnonymousIndividual {
    pub fn new(id: BlankNodeId) -> Self {
        AnonymousIndividual(id)
    }

    pub fn node_id(&self) -> &BlankNodeId {
        &self.0
    }
}

/// Either kind of OWL2 individual.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Individual {
    Named(NamedIndividual),
    Anonymous(AnonymousIndividual),
}

impl Individual {
    pub fn is_named(&self) -> bool {
        matches!(self, Individual::Named(_))
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Individual::Anonymous(_))
    }
}

impl From<NamedIndividual> for Individual {
    fn from(n: NamedIndividual) -> Self {
        Individual::Named(n)
    }
}

impl From<AnonymousIndividual> for Individual {
    fn from(a: AnonymousIndividual) -> Self {
        Individual::Anonymous(a)
    }
}
