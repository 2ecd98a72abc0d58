//! Data ranges (§3.6) and facet restrictions.

use crate::error::{OwlError, OwlResult};
use crate::iri::IRI;
use crate::model::class_expression::OperandSet;
use crate::model::entities::Datatype;
use crate::model::literal::Literal;
use std::hash::{Hash, Hasher};

/// `(facet IRI, literal)`, e.g. `xsd:maxExclusive "20"^^xsd:integer`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FacetRestriction {
    pub facet: IRI,
    pub value: Literal,
}

impl FacetRestriction {
    pub fn new(facet: IRI, value: Literal) -> Self {
        FacetRestriction { facet, value }
    }
}

/// The facet constants recognized by the Functional Syntax parser and the
/// data-range model (§3.6).
pub mod facets {
    pub const LENGTH: &str = "length";
    pub const MIN_LENGTH: &str = "minLength";
    pub const MAX_LENGTH: &str = "maxLength";
    pub const PATTERN: &str = "pattern";
    pub const MIN_INCLUSIVE: &str = "minInclusive";
    pub const MIN_EXCLUSIVE: &str = "minExclusive";
    pub const MAX_INCLUSIVE: &str = "maxInclusive";
    pub const MAX_EXCLUSIVE: &str = "maxExclusive";
    pub const TOTAL_DIGITS: &str = "totalDigits";
    pub const FRACTION_DIGITS: &str = "fractionDigits";
    /// `rdf:langRange`, the one recognized facet outside the `xsd:` namespace.
    pub const LANG_RANGE: &str = "langRange";

    pub const ALL: &[&str] = &[
        LENGTH,
        MIN_LENGTH,
        MAX_LENGTH,
        PATTERN,
        MIN_INCLUSIVE,
        MIN_EXCLUSIVE,
        MAX_INCLUSIVE,
        MAX_EXCLUSIVE,
        TOTAL_DIGITS,
        FRACTION_DIGITS,
        LANG_RANGE,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataRange {
    Datatype(Datatype),
    DataIntersectionOf(OperandSet<DataRange>),
    DataUnionOf(OperandSet<DataRange>),
    DataComplementOf(Box<DataRange>),
    DataOneOf(OperandSet<Literal>),
    DatatypeRestriction(Datatype, OperandSet<FacetRestriction>),
}

impl DataRange {
    pub fn datatype(dt: Datatype) -> Self {
        DataRange::Datatype(dt)
    }

    pub fn data_intersection_of(operands: Vec<DataRange>) -> OwlResult<Self> {
        require_min_arity("DataIntersectionOf", &operands, 2)?;
        Ok(DataRange::DataIntersectionOf(OperandSet::new(operands)))
    }

    pub fn data_union_of(operands: Vec<DataRange>) -> OwlResult<Self> {
        require_min_arity("DataUnionOf", &operands, 2)?;
        Ok(DataRange::DataUnionOf(OperandSet::new(operands)))
    }

    pub fn data_complement_of(operand: DataRange) -> Self {
        DataRange::DataComplementOf(Box::new(operand))
    }

    pub fn data_one_of(literals: Vec<Literal>) -> OwlResult<Self> {
        require_min_arity("DataOneOf", &literals, 1)?;
        Ok(DataRange::DataOneOf(OperandSet::new(literals)))
    }

    pub fn datatype_restriction(
        base: Datatype,
        facets: Vec<FacetRestriction>,
    ) -> OwlResult<Self> {
        require_min_arity("DatatypeRestriction", &facets, 1)?;
        Ok(DataRange::DatatypeRestriction(base, OperandSet::new(facets)))
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

fn hash_of<T: Hash>(v: &T) -> u64 {
    let mut h = std::collections::hash_map::DefaultHasher::new();
    v.hash(&mut h);
    h.finish()
}

impl Hash for DataRange {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mixed = match self {
            DataRange::Datatype(dt) => 73u64.wrapping_mul(hash_of(dt)),
            DataRange::DataIntersectionOf(ops) => 79u64.wrapping_mul(hash_of(ops)),
            DataRange::DataUnionOf(ops) => 83u64.wrapping_mul(hash_of(ops)),
            DataRange::DataComplementOf(dr) => 89u64.wrapping_mul(hash_of(dr)),
            DataRange::DataOneOf(ops) => 97u64.wrapping_mul(hash_of(ops)),
            DataRange::DatatypeRestriction(base, facets) => {
                101u64.wrapping_mul(hash_of(base)).wrapping_add(hash_of(facets))
            }
        };
        state.write_u64(mixed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(local: &str) -> Datatype {
        Datatype::new(IRI::parse_absolute(&format!("http://www.w3.org/2001/XMLSchema#{local}")).unwrap())
    }

    #[test]
    fn datatype_restriction_round_trips_facet_set_equality() {
        let restriction = DataRange::datatype_restriction(
            dt("integer"),
            vec![FacetRestriction::new(
                IRI::parse_absolute("http://www.w3.org/2001/XMLSchema#maxExclusive").unwrap(),
                Literal::typed("20", dt("integer")),
            )],
        )
        .unwrap();

        match &restriction {
            DataRange::DatatypeRestriction(base, facets) => {
                assert_eq!(*base, dt("integer"));
                assert_eq!(facets.len(), 1);
            }
            _ => panic!("expected DatatypeRestriction"),
        }
    }

    #[test]
    fn data_union_requires_two_operands() {
        assert!(DataRange::data_union_of(vec![DataRange::datatype(dt("integer"))]).is_err());
    }
}
