//! Class expressions (§3.5 of the structural model) and the set-valued
//! operand container they share with data ranges.
//!
//! Every recursive variant mixes a distinct small-prime multiplier into
//! its hash before folding in its operands' hashes, so that two
//! differently-shaped trees can never collide just because their leaves
//! happen to hash equal. Set-valued operands (intersection, union, the
//! `OneOf` enumerations) fold with a commutative combinator so that
//! `ObjectUnionOf(A, B) == ObjectUnionOf(B, A)` and the two hash equal too.

use crate::error::{OwlError, OwlResult};
use crate::model::data_range::DataRange;
use crate::model::entities::{Class, DataProperty};
use crate::model::individual::Individual;
use crate::model::literal::Literal;
use crate::model::property_expression::ObjectPropertyExpression;
use std::hash::{Hash, Hasher};

/// An unordered, duplicate-free, non-empty (at construction time, checked
/// by callers) operand collection.
#[derive(Debug, Clone)]
pub struct OperandSet<T> {
    items: Vec<T>,
}

impl<T: PartialEq> OperandSet<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        let mut deduped: Vec<T> = Vec::with_capacity(items.len());
        for item in items {
            if !deduped.contains(&item) {
                deduped.push(item);
            }
        }
        OperandSet { items: deduped }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: PartialEq> PartialEq for OperandSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len()
            && self.items.iter().all(|i| other.items.contains(i))
    }
}
impl<T: PartialEq> Eq for OperandSet<T> {}

/// Commutative hash fold: order of operands never affects the result.
fn fold_commutative<H: Hash>(prime: u64, items: impl Iterator<Item = H>) -> u64 {
    let mut acc: u64 = 0;
    for item in items {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        item.hash(&mut hasher);
        acc = acc.wrapping_add(prime.wrapping_mul(hasher.finish()));
    }
    acc
}

impl<T: Hash + PartialEq> Hash for OperandSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(fold_commutative(1, self.items.iter()));
    }
}

/// Full recursive OWL2 class expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassExpression {
    Class(Class),
    ObjectIntersectionOf(OperandSet<ClassExpression>),
    ObjectUnionOf(OperandSet<ClassExpression>),
    ObjectComplementOf(Box<ClassExpression>),
    ObjectOneOf(OperandSet<Individual>),
    ObjectSomeValuesFrom(ObjectPropertyExpression, Box<ClassExpression>),
    ObjectAllValuesFrom(ObjectPropertyExpression, Box<ClassExpression>),
    ObjectHasValue(ObjectPropertyExpression, Individual),
    ObjectHasSelf(ObjectPropertyExpression),
    ObjectMinCardinality(u32, ObjectPropertyExpression, Box<ClassExpression>),
    ObjectMaxCardinality(u32, ObjectPropertyExpression, Box<ClassExpression>),
    ObjectExactCardinality(u32, ObjectPropertyExpression, Box<ClassExpression>),
    DataSomeValuesFrom(DataProperty, DataRange),
    DataAllValuesFrom(DataProperty, DataRange),
    DataHasValue(DataProperty, Literal),
    DataMinCardinality(u32, DataProperty, DataRange),
    DataMaxCardinality(u32, DataProperty, DataRange),
    DataExactCardinality(u32, DataProperty, DataRange),
}

/// `owl:Thing`, the default object-property-restriction filler.
pub fn owl_thing() -> Class {
    Class::new(crate::iri::IRI::parse_absolute(concat!(
        "http://www.w3.org/2002/07/owl#Thing"
    )).expect("owl:Thing is a valid absolute IRI"))
}

/// `rdfs:Literal`, the default data-property-restriction filler.
pub fn rdfs_literal() -> crate::model::entities::Datatype {
    crate::model::entities::Datatype::new(
        crate::iri::IRI::parse_absolute("http://www.w3.org/2000/01/rdf-schema#Literal")
            .expect("rdfs:Literal is a valid absolute IRI"),
    )
}

impl ClassExpression {
    pub fn class(c: Class) -> Self {
        ClassExpression::Class(c)
    }

    /// Fails with [`OwlError::InvariantViolation`] if fewer than two
    /// operands are given.
    pub fn object_intersection_of(operands: Vec<ClassExpression>) -> OwlResult<Self> {
        require_min_arity("ObjectIntersectionOf", &operands, 2)?;
        Ok(ClassExpression::ObjectIntersectionOf(OperandSet::new(operands)))
    }

    pub fn object_union_of(operands: Vec<ClassExpression>) -> OwlResult<Self> {
        require_min_arity("ObjectUnionOf", &operands, 2)?;
        Ok(ClassExpression::ObjectUnionOf(OperandSet::new(operands)))
    }

    pub fn object_complement_of(operand: ClassExpression) -> Self {
        ClassExpression::ObjectComplementOf(Box::new(operand))
    }

    /// Fails if fewer than one individual is given.
    pub fn object_one_of(individuals: Vec<Individual>) -> OwlResult<Self> {
        require_min_arity("ObjectOneOf", &individuals, 1)?;
        Ok(ClassExpression::ObjectOneOf(OperandSet::new(individuals)))
    }

    pub fn object_some_values_from(ope: ObjectPropertyExpression, filler: ClassExpression) -> Self {
        ClassExpression::ObjectSomeValuesFrom(ope, Box::new(filler))
    }

    pub fn object_all_values_from(ope: ObjectPropertyExpression, filler: ClassExpression) -> Self {
        ClassExpression::ObjectAllValuesFrom(ope, Box::new(filler))
    }

    pub fn object_has_value(ope: ObjectPropertyExpression, individual: Individual) -> Self {
        ClassExpression::ObjectHasValue(ope, individual)
    }

    pub fn object_has_self(ope: ObjectPropertyExpression) -> Self {
        ClassExpression::ObjectHasSelf(ope)
    }

    /// `filler` defaults to `owl:Thing` when omitted, per the cardinality
    /// filler-omission rule; the default is substituted here so
    /// `ObjectMinCardinality(p, n)` and `ObjectMinCardinality(p, n,
    /// owl:Thing)` construct an identical value (constructor normalization
    /// idempotence).
    pub fn object_min_cardinality(
        n: u32,
        ope: ObjectPropertyExpression,
        filler: Option<ClassExpression>,
    ) -> Self {
        let filler = filler.unwrap_or_else(|| ClassExpression::Class(owl_thing()));
        ClassExpression::ObjectMinCardinality(n, ope, Box::new(filler))
    }

    pub fn object_max_cardinality(
        n: u32,
        ope: ObjectPropertyExpression,
        filler: Option<ClassExpression>,
    ) -> Self {
        let filler = filler.unwrap_or_else(|| ClassExpression::Class(owl_thing()));
        ClassExpression::ObjectMaxCardinality(n, ope, Box::new(filler))
    }

    pub fn object_exact_cardinality(
        n: u32,
        ope: ObjectPropertyExpression,
        filler: Option<ClassExpression>,
    ) -> Self {
        let filler = filler.unwrap_or_else(|| ClassExpression::Class(owl_thing()));
        ClassExpression::ObjectExactCardinality(n, ope, Box::new(filler))
    }

    pub fn data_some_values_from(dp: DataProperty, dr: DataRange) -> Self {
        ClassExpression::DataSomeValuesFrom(dp, dr)
    }

    pub fn data_all_values_from(dp: DataProperty, dr: DataRange) -> Self {
        ClassExpression::DataAllValuesFrom(dp, dr)
    }

    pub fn data_has_value(dp: DataProperty, literal: Literal) -> Self {
        ClassExpression::DataHasValue(dp, literal)
    }

    /// `filler` defaults to `rdfs:Literal` when omitted.
    pub fn data_min_cardinality(n: u32, dp: DataProperty, filler: Option<DataRange>) -> Self {
        let filler = filler.unwrap_or_else(|| DataRange::Datatype(rdfs_literal()));
        ClassExpression::DataMinCardinality(n, dp, filler)
    }

    pub fn data_max_cardinality(n: u32, dp: DataProperty, filler: Option<DataRange>) -> Self {
        let filler = filler.unwrap_or_else(|| DataRange::Datatype(rdfs_literal()));
        ClassExpression::DataMaxCardinality(n, dp, filler)
    }

    pub fn data_exact_cardinality(n: u32, dp: DataProperty, filler: Option<DataRange>) -> Self {
        let filler = filler.unwrap_or_else(|| DataRange::Datatype(rdfs_literal()));
        ClassExpression::DataExactCardinality(n, dp, filler)
    }

    pub fn is_named(&self) -> bool {
        matches!(self, ClassExpression::Class(_))
    }

    pub fn as_named(&self) -> Option<&Class> {
        match self {
            ClassExpression::Class(c) => Some(c),
            _ => None,
        }
    }
}

fn require_min_arity<T>(construct: &str, operands: &[T], min: usize) -> OwlResult<()> {
    if operands.len() < min {
        return Err(OwlError::InvariantViolation {
            detail: format!(
                "{construct} requires at least {min} operand(s), got {}",
                operands.len()
            ),
        });
    }
    Ok(())
}

impl Hash for ClassExpression {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mixed: u64 = match self {
            ClassExpression::Class(c) => 5u64.wrapping_mul(hash_of(c)),
            ClassExpression::ObjectIntersectionOf(ops) => 7u64.wrapping_mul(hash_of(ops)),
            ClassExpression::ObjectUnionOf(ops) => 11u64.wrapping_mul(hash_of(ops)),
            ClassExpression::ObjectComplementOf(ce) => 13u64.wrapping_mul(hash_of(ce)),
            ClassExpression::ObjectOneOf(ops) => 17u64.wrapping_mul(hash_of(ops)),
            ClassExpression::ObjectSomeValuesFrom(ope, filler) => {
                19u64.wrapping_mul(hash_of(ope)).wrapping_add(hash_of(filler))
            }
            ClassExpression::ObjectAllValuesFrom(ope, filler) => {
                23u64.wrapping_mul(hash_of(ope)).wrapping_add(hash_of(filler))
            }
            ClassExpression::ObjectHasValue(ope, ind) => {
                29u64.wrapping_mul(hash_of(ope)).wrapping_add(hash_of(ind))
            }
            ClassExpression::ObjectHasSelf(ope) => 31u64.wrapping_mul(hash_of(ope)),
            ClassExpression::ObjectMinCardinality(n, ope, filler) => card_hash(37, *n, ope, filler),
            ClassExpression::ObjectMaxCardinality(n, ope, filler) => card_hash(41, *n, ope, filler),
            ClassExpression::ObjectExactCardinality(n, ope, filler) => card_hash(53, *n, ope, filler),
            ClassExpression::DataSomeValuesFrom(dp, dr) => {
                47u64.wrapping_mul(hash_of(dp)).wrapping_add(hash_of(dr))
            }
            ClassExpression::DataAllValuesFrom(dp, dr) => {
                53u64.wrapping_mul(hash_of(dp)).wrapping_add(hash_of(dr))
            }
            ClassExpression::DataHasValue(dp, lit) => {
                59u64.wrapping_mul(hash_of(dp)).wrapping_add(hash_of(lit))
            }
            ClassExpression::DataMinCardinality(n, dp, dr) => card_hash(61, *n, dp, dr),
            ClassExpression::DataMaxCardinality(n, dp, dr) => card_hash(67, *n, dp, dr),
            ClassExpression::DataExactCardinality(n, dp, dr) => card_hash(71, *n, dp, dr),
        };
        state.write_u64(mixed);
    }
}

fn hash_of<T: Hash>(v: &T) -> u64 {
    let mut h = std::collections::hash_map::DefaultHasher::new();
    v.hash(&mut h);
    h.finish()
}

fn card_hash<P: Hash, F: Hash>(prime: u64, n: u32, property: &P, filler: &F) -> u64 {
    prime
        .wrapping_mul(hash_of(property))
        .wrapping_add(prime.wrapping_mul(hash_of(&n)))
        .wrapping_add(hash_of(filler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entities::ObjectProperty;

    fn class(local: &str) -> ClassExpression {
        ClassExpression::class(Class::new(
            crate::iri::IRI::parse_absolute(&format!("http://e/{local}")).unwrap(),
        ))
    }

    #[test]
    fn union_is_commutative_in_equality_and_hash() {
        let a = ClassExpression::object_union_of(vec![class("A"), class("B")]).unwrap();
        let b = ClassExpression::object_union_of(vec![class("B"), class("A")]).unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn intersection_requires_two_operands() {
        assert!(ClassExpression::object_intersection_of(vec![class("A")]).is_err());
        assert!(ClassExpression::object_intersection_of(vec![class("A"), class("B")]).is_ok());
    }

    #[test]
    fn cardinality_filler_normalizes_to_owl_thing() {
        let prop = ObjectPropertyExpression::ObjectProperty(ObjectProperty::new(
            crate::iri::IRI::parse_absolute("http://e/p").unwrap(),
        ));
        let omitted = ClassExpression::object_min_cardinality(3, prop.clone(), None);
        let explicit =
            ClassExpression::object_min_cardinality(3, prop, Some(ClassExpression::class(owl_thing())));
        assert_eq!(omitted, explicit);
    }

    #[test]
    fn different_shapes_same_leaves_do_not_collide() {
        let a = ClassExpression::object_union_of(vec![class("A"), class("B")]).unwrap();
        let b = ClassExpression::object_intersection_of(vec![class("A"), class("B")]).unwrap();
        assert_ne!(a, b);
    }
}
