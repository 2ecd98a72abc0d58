//! Absolute IRIs and the prefix map used to resolve CURIEs against them.
//!
//! An [`IRI`] is always absolute: construction validates this and fails
//! with [`OwlError::InvalidIRI`] otherwise. Two IRIs are equal iff their
//! underlying strings are byte-identical; there is no normalization.

use crate::error::{OwlError, OwlResult};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An absolute Internationalized Resource Identifier.
///
/// Cheaply cloned (`Arc<str>` payload) and caches its own hash so it can be
/// used as a set/map key without re-hashing the string on every lookup.
#[derive(Debug, Clone)]
pub struct IRI {
    value: Arc<str>,
    hash: u64,
}

fn hash_str(s: &str) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    s.hash(&mut hasher);
    hasher.finish()
}

impl IRI {
    /// Parse an absolute IRI, optionally delimited by `<` `>`.
    ///
    /// Fails with [`OwlError::InvalidIRI`] if the string (after stripping
    /// delimiters) is empty or is not an absolute URI reference (i.e. has
    /// no scheme).
    pub fn parse_absolute(s: &str) -> OwlResult<Self> {
        let trimmed = s.trim();
        let inner = if let Some(stripped) = trimmed
            .strip_prefix('<')
            .and_then(|s| s.strip_suffix('>'))
        {
            stripped
        } else {
            trimmed
        };

        if inner.is_empty() {
            return Err(OwlError::InvalidIRI("empty IRI".to_string()));
        }

        // url::Url::parse only succeeds for an absolute URI reference; a
        // bare local name or relative path is rejected, which is exactly
        // the "must be absolute" invariant this constructor enforces.
        if url::Url::parse(inner).is_err() {
            return Err(OwlError::InvalidIRI(format!(
                "not an absolute IRI: {inner}"
            )));
        }

        Ok(IRI {
            hash: hash_str(inner),
            value: Arc::from(inner),
        })
    }

    /// Build an `IRI` from an already-validated absolute string without
    /// re-running syntax validation. Used internally by the prefix map and
    /// the parser once a namespace + local name have been concatenated.
    pub(crate) fn from_validated(s: impl Into<Arc<str>>) -> Self {
        let value: Arc<str> = s.into();
        let hash = hash_str(&value);
        IRI { value, hash }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Local name: the substring after the last `#` or `/`.
    pub fn local_name(&self) -> &str {
        let iri = self.as_str();
        if let Some(pos) = iri.rfind('#') {
            &iri[pos + 1..]
        } else if let Some(pos) = iri.rfind('/') {
            &iri[pos + 1..]
        } else {
            iri
        }
    }

    /// Namespace: everything up to and including the last `#` or `/`.
    pub fn namespace(&self) -> &str {
        let iri = self.as_str();
        if let Some(pos) = iri.rfind('#') {
            &iri[..pos + 1]
        } else if let Some(pos) = iri.rfind('/') {
            &iri[..pos + 1]
        } else {
            ""
        }
    }

    pub fn is_owl(&self) -> bool {
        self.as_str().starts_with(OWL_NS)
    }

    pub fn is_rdf(&self) -> bool {
        self.as_str().starts_with(RDF_NS)
    }

    pub fn is_rdfs(&self) -> bool {
        self.as_str().starts_with(RDFS_NS)
    }

    pub fn is_xsd(&self) -> bool {
        self.as_str().starts_with(XSD_NS)
    }
}

pub const OWL_NS: &str = "http://www.w3.org/2002/07/owl#";
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";

impl fmt::Display for IRI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.value)
    }
}

impl PartialEq for IRI {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
impl Eq for IRI {}

impl PartialOrd for IRI {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for IRI {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for IRI {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

/// A document's prefix declarations, including the distinguished default
/// (empty-string) prefix used by bare CURIEs and `:local` forms.
#[derive(Debug, Clone, Default)]
pub struct PrefixMap {
    prefixes: indexmap::IndexMap<String, String>,
}

impl PrefixMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the map with the `owl:`, `rdf:`, `rdfs:`, `xsd:` prefixes every
    /// Functional Syntax document is expected to have available.
    pub fn with_builtin_prefixes() -> Self {
        let mut map = Self::new();
        map.insert("owl", OWL_NS);
        map.insert("rdf", RDF_NS);
        map.insert("rdfs", RDFS_NS);
        map.insert("xsd", XSD_NS);
        map
    }

    pub fn insert(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(|s| s.as_str())
    }

    /// The default (empty-prefix) namespace, if one was declared.
    pub fn default_namespace(&self) -> Option<&str> {
        self.namespace("")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Resolve a CURIE (`prefix:local`, `:local`, or a bare `local` that
    /// falls back to the default prefix) against this map.
    ///
    /// Fails with [`OwlError::UnknownPrefix`] if the prefix (explicit or
    /// the implied default) is not declared.
    pub fn resolve(&self, curie: &str) -> OwlResult<IRI> {
        let (prefix, local) = match curie.split_once(':') {
            Some((prefix, local)) => (prefix, local),
            None => ("", curie),
        };

        let namespace = self
            .namespace(prefix)
            .ok_or_else(|| OwlError::UnknownPrefix(prefix.to_string()))?;

        Ok(IRI::from_validated(format!("{namespace}{local}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_delimited_and_bare_absolute_iris() {
        let a = IRI::parse_absolute("<http://example.org/Person>").unwrap();
        let b = IRI::parse_absolute("http://example.org/Person").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_non_absolute() {
        assert!(IRI::parse_absolute("not-a-uri").is_err());
        assert!(IRI::parse_absolute("").is_err());
        assert!(IRI::parse_absolute("<>").is_err());
    }

    #[test]
    fn local_name_and_namespace() {
        let iri = IRI::parse_absolute("http://example.org/Person").unwrap();
        assert_eq!(iri.local_name(), "Person");
        assert_eq!(iri.namespace(), "http://example.org/");
    }

    #[test]
    fn resolves_curie_with_explicit_prefix() {
        let mut map = PrefixMap::new();
        map.insert("ex", "http://e/");
        assert_eq!(
            map.resolve("ex:foo").unwrap(),
            IRI::parse_absolute("http://e/foo").unwrap()
        );
    }

    #[test]
    fn bare_name_resolves_against_default_prefix() {
        let mut map = PrefixMap::new();
        map.insert("", "http://e/");
        assert_eq!(
            map.resolve("foo").unwrap(),
            IRI::parse_absolute("http://e/foo").unwrap()
        );
        assert_eq!(
            map.resolve(":foo").unwrap(),
            IRI::parse_absolute("http://e/foo").unwrap()
        );
    }

    #[test]
    fn unknown_prefix_is_an_error() {
        let map = PrefixMap::new();
        assert!(matches!(
            map.resolve("ex:foo"),
            Err(OwlError::UnknownPrefix(p)) if p == "ex"
        ));
    }

    #[test]
    fn namespace_predicates() {
        let owl = IRI::parse_absolute("http://www.w3.org/2002/07/owl#Class").unwrap();
        assert!(owl.is_owl());
        assert!(!owl.is_rdf());
    }
}
