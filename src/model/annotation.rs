//! Annotations: the `Annotation(prop value)` construct attached to axioms,
//! entities, and the ontology header.

use crate::iri::IRI;
use crate::model::individual::AnonymousIndividual;
use crate::model::literal::Literal;
use smallvec::SmallVec;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnnotationValue {
    Iri(IRI),
    Literal(Literal),
    AnonymousIndividual(AnonymousIndividual),
}

impl From<IRI> for AnnotationValue {
    fn from(v: IRI) -> Self {
        AnnotationValue::Iri(v)
    }
}
impl From<Literal> for AnnotationValue {
    fn from(v: Literal) -> Self {
        AnnotationValue::Literal(v)
    }
}
impl From<AnonymousIndividual> for AnnotationValue {
    fn from(v: AnonymousIndividual) -> Self {
        AnnotationValue::AnonymousIndividual(v)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Annotation {
    pub property: AnnotationProperty,
    pub value: AnnotationValue,
}

use crate::model::entities::AnnotationProperty;

impl Annotation {
    pub fn new(property: AnnotationProperty, value: impl Into<AnnotationValue>) -> Self {
        Annotation {
            property,
            value: value.into(),
        }
    }
}

/// An unordered, duplicate-free collection of annotations.
///
/// Equality and hashing are set-based: insertion order never matters. An
/// empty set hashes to a fixed seed rather than folding over zero elements,
/// so "no annotations" never accidentally collides with some other
/// incidentally-empty structure's default hash.
#[derive(Debug, Clone, Default)]
pub struct AnnotationSet {
    items: SmallVec<[Annotation; 4]>,
}

const EMPTY_SEED: u64 = 0x9E3779B97F4A7C15;

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_iter_dedup(iter: impl IntoIterator<Item = Annotation>) -> Self {
        let mut items: SmallVec<[Annotation; 4]> = SmallVec::new();
        for a in iter {
            if !items.contains(&a) {
                items.push(a);
            }
        }
        AnnotationSet { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.items.iter()
    }
}

impl PartialEq for AnnotationSet {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len()
            && self.items.iter().all(|a| other.items.contains(a))
    }
}
impl Eq for AnnotationSet {}

impl Hash for AnnotationSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut acc = EMPTY_SEED;
        for item in &self.items {
            let mut h = std::collections::hash_map::DefaultHasher::new();
            item.hash(&mut h);
            acc ^= h.finish();
        }
        state.write_u64(acc);
    }
}

impl FromIterator<Annotation> for AnnotationSet {
    fn from_iter<T: IntoIterator<Item = Annotation>>(iter: T) -> Self {
        Self::from_iter_dedup(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann(local: &str) -> Annotation {
        let prop = AnnotationProperty::new(IRI::parse_absolute(&format!("http://e/{local}")).unwrap());
        Annotation::new(prop, Literal::plain("v"))
    }

    #[test]
    fn order_independent_equality_and_hash() {
        let a = AnnotationSet::from_iter_dedup([ann("a"), ann("b")]);
        let b = AnnotationSet::from_iter_dedup([ann("b"), ann("a")]);
        assert_eq!(a, b);

        let mut ha = std::collections::hash_map::DefaultHasher::new();
        a.hash(&mut ha);
        let mut hb = std::collections::hash_map::DefaultHasher::new();
        b.hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }

    #[test]
    fn empty_sets_are_equal() {
        assert_eq!(AnnotationSet::new(), AnnotationSet::new());
    }

    #[test]
    fn dedups_on_construction() {
        let s = AnnotationSet::from_iter_dedup([ann("a"), ann("a")]);
        assert_eq!(s.len(), 1);
    }
}
