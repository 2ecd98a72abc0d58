//! Recursive-descent parser for OWL2 Functional Syntax.
//!
//! Grammar and disambiguation follow the W3C Functional-Style Syntax
//! production rules directly (one parse method per production); the two
//! places the grammar is genuinely ambiguous without lookahead are handled
//! the same way here as in the grammar they're drawn from:
//!
//! - A bare CURIE/IRI used as a class, object property, or datatype
//!   reference is distinguished from a keyword construct (`ObjectUnionOf`,
//!   `DatatypeRestriction`, ...) by checking whether the token is both
//!   textually equal to a reserved keyword *and* immediately followed by
//!   `(` — a CURIE can never itself be followed directly by a parenthesis
//!   in this grammar, so the check is unambiguous.
//! - `Datatype` vs `DatatypeRestriction` inside a data range is resolved
//!   the same way: `DatatypeRestriction(` is the keyword form, anything
//!   else naming a datatype is a bare IRI reference.
//!
//! Parsing is non-resumable: the first unexpected token aborts the whole
//! parse with a [`crate::error::OwlError::ParseError`] carrying its byte
//! offset; there is no partial-ontology result.

use crate::config::ParserConfig;
use crate::error::{OwlError, OwlResult};
use crate::iri::{IRI, PrefixMap};
use crate::model::annotation::{Annotation, AnnotationSet, AnnotationValue};
use crate::model::axiom::{AnnotationSubject, Axiom, Entity};
use crate::model::class_expression::ClassExpression;
use crate::model::data_range::{DataRange, FacetRestriction};
use crate::model::entities::{
    AnnotationProperty, Class, DataProperty, Datatype, NamedIndividual, ObjectProperty,
};
use crate::model::individual::{AnonymousIndividual, BlankNodeId, Individual};
use crate::model::literal::Literal;
use crate::model::ontology::Ontology;
use crate::model::property_expression::ObjectPropertyExpression;
use crate::parser::lexer::{Lexer, Spanned, Token};
use std::collections::HashMap;

const CLASS_EXPRESSION_KEYWORDS: &[&str] = &[
    "ObjectIntersectionOf",
    "ObjectUnionOf",
    "ObjectComplementOf",
    "ObjectOneOf",
    "ObjectSomeValuesFrom",
    "ObjectAllValuesFrom",
    "ObjectHasValue",
    "ObjectHasSelf",
    "ObjectMinCardinality",
    "ObjectMaxCardinality",
    "ObjectExactCardinality",
    "DataSomeValuesFrom",
    "DataAllValuesFrom",
    "DataHasValue",
    "DataMinCardinality",
    "DataMaxCardinality",
    "DataExactCardinality",
];

const AXIOM_KEYWORDS: &[&str] = &[
    "Declaration",
    "SubClassOf",
    "EquivalentClasses",
    "DisjointClasses",
    "DisjointUnion",
    "SubObjectPropertyOf",
    "EquivalentObjectProperties",
    "DisjointObjectProperties",
    "InverseObjectProperties",
    "ObjectPropertyDomain",
    "ObjectPropertyRange",
    "FunctionalObjectProperty",
    "InverseFunctionalObjectProperty",
    "ReflexiveObjectProperty",
    "IrreflexiveObjectProperty",
    "SymmetricObjectProperty",
    "AsymmetricObjectProperty",
    "TransitiveObjectProperty",
    "SubDataPropertyOf",
    "EquivalentDataProperties",
    "DisjointDataProperties",
    "DataPropertyDomain",
    "DataPropertyRange",
    "FunctionalDataProperty",
    "ClassAssertion",
    "ObjectPropertyAssertion",
    "NegativeObjectPropertyAssertion",
    "DataPropertyAssertion",
    "NegativeDataPropertyAssertion",
    "SameIndividual",
    "DifferentIndividuals",
    "AnnotationAssertion",
    "SubAnnotationPropertyOf",
    "AnnotationPropertyDomain",
    "AnnotationPropertyRange",
];

/// Parses OWL2 Functional Syntax documents into an [`Ontology`].
#[derive(Debug, Clone, Default)]
pub struct FunctionalSyntaxParser {
    config: ParserConfig,
}

impl FunctionalSyntaxParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        FunctionalSyntaxParser { config }
    }

    pub fn parse(&self, content: &str) -> OwlResult<Ontology> {
        let tokens = Lexer::new(content).tokenize()?;
        let mut state = State {
            tokens,
            pos: 0,
            prefixes: PrefixMap::with_builtin_prefixes(),
            blank_nodes: HashMap::new(),
            config: self.config.clone(),
        };
        let ontology = state.parse_document()?;
        state.expect_eof()?;
        Ok(ontology)
    }
}

struct State {
    tokens: Vec<Spanned<Token>>,
    pos: usize,
    prefixes: PrefixMap,
    blank_nodes: HashMap<String, AnonymousIndividual>,
    #[allow(dead_code)]
    config: ParserConfig,
}

impl State {
    fn current(&self) -> &Token {
        &self.tokens[self.pos].value
    }

    fn current_at(&self, offset: usize) -> &Token {
        self.tokens
            .get(self.pos + offset)
            .map(|s| &s.value)
            .unwrap_or(&Token::Eof)
    }

    fn position(&self) -> usize {
        self.tokens[self.pos].position
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].value.clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn error(&self, expected: impl Into<String>) -> OwlError {
        OwlError::ParseError {
            position: self.position(),
            expected: expected.into(),
            found: format!("{:?}", self.current()),
        }
    }

    fn expect_eof(&self) -> OwlResult<()> {
        match self.current() {
            Token::Eof => Ok(()),
            _ => Err(self.error("end of input")),
        }
    }

    fn expect_lparen(&mut self) -> OwlResult<()> {
        match self.current() {
            Token::LParen => {
                self.advance();
                Ok(())
            }
            _ => Err(self.error("'('")),
        }
    }

    fn expect_rparen(&mut self) -> OwlResult<()> {
        match self.current() {
            Token::RParen => {
                self.advance();
                Ok(())
            }
            _ => Err(self.error("')'")),
        }
    }

    /// Consume `Token::Name(word)` exactly, failing otherwise.
    fn expect_keyword(&mut self, word: &str) -> OwlResult<()> {
        match self.current() {
            Token::Name(n) if n == word => {
                self.advance();
                Ok(())
            }
            _ => Err(self.error(format!("'{word}'"))),
        }
    }

    /// True if the current token is `word` immediately followed by `(` —
    /// the lookahead that disambiguates a keyword construct from a bare
    /// CURIE that happens to share its text.
    fn at_keyword_call(&self, word: &str) -> bool {
        matches!(self.current(), Token::Name(n) if n == word)
            && matches!(self.current_at(1), Token::LParen)
    }

    fn at_any_keyword_call(&self, words: &[&str]) -> Option<&'static str> {
        if let Token::Name(n) = self.current() {
            if matches!(self.current_at(1), Token::LParen) {
                return words.iter().find(|w| *w == n).copied();
            }
        }
        None
    }

    // ---- IRIs & CURIEs ----

    fn parse_iri(&mut self) -> OwlResult<IRI> {
        match self.current().clone() {
            Token::FullIri(s) => {
                self.advance();
                IRI::parse_absolute(&s)
            }
            Token::Name(s) => {
                self.advance();
                self.prefixes.resolve(&s)
            }
            _ => Err(self.error("an IRI or CURIE")),
        }
    }

    fn parse_class(&mut self) -> OwlResult<Class> {
        Ok(Class::new(self.parse_iri()?))
    }

    fn parse_datatype(&mut self) -> OwlResult<Datatype> {
        Ok(Datatype::new(self.parse_iri()?))
    }

    fn parse_named_object_property(&mut self) -> OwlResult<ObjectProperty> {
        Ok(ObjectProperty::new(self.parse_iri()?))
    }

    fn parse_data_property(&mut self) -> OwlResult<DataProperty> {
        Ok(DataProperty::new(self.parse_iri()?))
    }

    fn parse_annotation_property(&mut self) -> OwlResult<AnnotationProperty> {
        Ok(AnnotationProperty::new(self.parse_iri()?))
    }

    fn parse_named_individual(&mut self) -> OwlResult<NamedIndividual> {
        Ok(NamedIndividual::new(self.parse_iri()?))
    }

    fn parse_object_property_expression(&mut self) -> OwlResult<ObjectPropertyExpression> {
        if self.at_keyword_call("ObjectInverseOf") {
            self.advance();
            self.expect_lparen()?;
            let p = self.parse_named_object_property()?;
            self.expect_rparen()?;
            Ok(ObjectPropertyExpression::ObjectInverseOf(p))
        } else {
            Ok(ObjectPropertyExpression::ObjectProperty(
                self.parse_named_object_property()?,
            ))
        }
    }

    fn parse_anonymous_individual(&mut self) -> OwlResult<AnonymousIndividual> {
        match self.current().clone() {
            Token::AnonIndividual(name) => {
                self.advance();
                let id = self
                    .blank_nodes
                    .entry(name.clone())
                    .or_insert_with(|| AnonymousIndividual::new(BlankNodeId::new(name)))
                    .clone();
                Ok(id)
            }
            _ => Err(self.error("an anonymous individual (_:name)")),
        }
    }

    fn parse_individual(&mut self) -> OwlResult<Individual> {
        match self.current() {
            Token::AnonIndividual(_) => Ok(Individual::Anonymous(self.parse_anonymous_individual()?)),
            _ => Ok(Individual::Named(self.parse_named_individual()?)),
        }
    }

    // ---- Literals ----

    fn parse_literal(&mut self) -> OwlResult<Literal> {
        let lexical = match self.current().clone() {
            Token::StringLiteral(s) => {
                self.advance();
                s
            }
            _ => return Err(self.error("a quoted literal")),
        };

        match self.current() {
            Token::DoubleCaret => {
                self.advance();
                let datatype = self.parse_iri()?;
                Literal::new(lexical, None, Some(datatype))
            }
            Token::LangTag(_) => {
                let tag = match self.advance() {
                    Token::LangTag(t) => t,
                    _ => unreachable!(),
                };
                Literal::new(lexical, Some(tag), None)
            }
            _ => Ok(Literal::plain(lexical)),
        }
    }

    // ---- Data ranges ----

    fn parse_facet_restriction(&mut self) -> OwlResult<FacetRestriction> {
        let facet = self.parse_iri()?;
        let value = self.parse_literal()?;
        Ok(FacetRestriction::new(facet, value))
    }

    fn parse_data_range(&mut self) -> OwlResult<DataRange> {
        if self.at_keyword_call("DataIntersectionOf") {
            self.advance();
            self.expect_lparen()?;
            let mut operands = vec![self.parse_data_range()?, self.parse_data_range()?];
            while !matches!(self.current(), Token::RParen) {
                operands.push(self.parse_data_range()?);
            }
            self.expect_rparen()?;
            DataRange::data_intersection_of(operands)
        } else if self.at_keyword_call("DataUnionOf") {
            self.advance();
            self.expect_lparen()?;
            let mut operands = vec![self.parse_data_range()?, self.parse_data_range()?];
            while !matches!(self.current(), Token::RParen) {
                operands.push(self.parse_data_range()?);
            }
            self.expect_rparen()?;
            DataRange::data_union_of(operands)
        } else if self.at_keyword_call("DataComplementOf") {
            self.advance();
            self.expect_lparen()?;
            let inner = self.parse_data_range()?;
            self.expect_rparen()?;
            Ok(DataRange::data_complement_of(inner))
        } else if self.at_keyword_call("DataOneOf") {
            self.advance();
            self.expect_lparen()?;
            let mut literals = vec![self.parse_literal()?];
            while !matches!(self.current(), Token::RParen) {
                literals.push(self.parse_literal()?);
            }
            self.expect_rparen()?;
            DataRange::data_one_of(literals)
        } else if self.at_keyword_call("DatatypeRestriction") {
            self.advance();
            self.expect_lparen()?;
            let base = self.parse_datatype()?;
            let mut facets = vec![self.parse_facet_restriction()?];
            while !matches!(self.current(), Token::RParen) {
                facets.push(self.parse_facet_restriction()?);
            }
            self.expect_rparen()?;
            DataRange::datatype_restriction(base, facets)
        } else {
            Ok(DataRange::datatype(self.parse_datatype()?))
        }
    }

    // ---- Class expressions ----

    fn parse_class_expression(&mut self) -> OwlResult<ClassExpression> {
        if let Some(keyword) = self.at_any_keyword_call(CLASS_EXPRESSION_KEYWORDS) {
            self.parse_keyword_class_expression(keyword)
        } else {
            Ok(ClassExpression::class(self.parse_class()?))
        }
    }

    fn parse_keyword_class_expression(&mut self, keyword: &str) -> OwlResult<ClassExpression> {
        self.advance();
        self.expect_lparen()?;
        let result = match keyword {
            "ObjectIntersectionOf" => {
                let mut ops = vec![self.parse_class_expression()?, self.parse_class_expression()?];
                while !matches!(self.current(), Token::RParen) {
                    ops.push(self.parse_class_expression()?);
                }
                ClassExpression::object_intersection_of(ops)?
            }
            "ObjectUnionOf" => {
                let mut ops = vec![self.parse_class_expression()?, self.parse_class_expression()?];
                while !matches!(self.current(), Token::RParen) {
                    ops.push(self.parse_class_expression()?);
                }
                ClassExpression::object_union_of(ops)?
            }
            "ObjectComplementOf" => {
                let inner = self.parse_class_expression()?;
                ClassExpression::object_complement_of(inner)
            }
            "ObjectOneOf" => {
                let mut inds = vec![self.parse_individual()?];
                while !matches!(self.current(), Token::RParen) {
                    inds.push(self.parse_individual()?);
                }
                ClassExpression::object_one_of(inds)?
            }
            "ObjectSomeValuesFrom" => {
                let ope = self.parse_object_property_expression()?;
                let filler = self.parse_class_expression()?;
                ClassExpression::object_some_values_from(ope, filler)
            }
            "ObjectAllValuesFrom" => {
                let ope = self.parse_object_property_expression()?;
                let filler = self.parse_class_expression()?;
                ClassExpression::object_all_values_from(ope, filler)
            }
            "ObjectHasValue" => {
                let ope = self.parse_object_property_expression()?;
                let ind = self.parse_individual()?;
                ClassExpression::object_has_value(ope, ind)
            }
            "ObjectHasSelf" => {
                let ope = self.parse_object_property_expression()?;
                ClassExpression::object_has_self(ope)
            }
            "ObjectMinCardinality" | "ObjectMaxCardinality" | "ObjectExactCardinality" => {
                let n = self.parse_non_negative_integer()?;
                let ope = self.parse_object_property_expression()?;
                let filler = if matches!(self.current(), Token::RParen) {
                    None
                } else {
                    Some(self.parse_class_expression()?)
                };
                match keyword {
                    "ObjectMinCardinality" => ClassExpression::object_min_cardinality(n, ope, filler),
                    "ObjectMaxCardinality" => ClassExpression::object_max_cardinality(n, ope, filler),
                    _ => ClassExpression::object_exact_cardinality(n, ope, filler),
                }
            }
            "DataSomeValuesFrom" => {
                let dp = self.parse_data_property()?;
                let dr = self.parse_data_range()?;
                ClassExpression::data_some_values_from(dp, dr)
            }
            "DataAllValuesFrom" => {
                let dp = self.parse_data_property()?;
                let dr = self.parse_data_range()?;
                ClassExpression::data_all_values_from(dp, dr)
            }
            "DataHasValue" => {
                let dp = self.parse_data_property()?;
                let lit = self.parse_literal()?;
                ClassExpression::data_has_value(dp, lit)
            }
            "DataMinCardinality" | "DataMaxCardinality" | "DataExactCardinality" => {
                let n = self.parse_non_negative_integer()?;
                let dp = self.parse_data_property()?;
                let filler = if matches!(self.current(), Token::RParen) {
                    None
                } else {
                    Some(self.parse_data_range()?)
                };
                match keyword {
                    "DataMinCardinality" => ClassExpression::data_min_cardinality(n, dp, filler),
                    "DataMaxCardinality" => ClassExpression::data_max_cardinality(n, dp, filler),
                    _ => ClassExpression::data_exact_cardinality(n, dp, filler),
                }
            }
            other => return Err(self.error(format!("unreachable keyword {other}"))),
        };
        self.expect_rparen()?;
        Ok(result)
    }

    fn parse_non_negative_integer(&mut self) -> OwlResult<u32> {
        match self.current().clone() {
            Token::Name(s) if s.chars().all(|c| c.is_ascii_digit()) && !s.is_empty() => {
                self.advance();
                s.parse::<u32>()
                    .map_err(|_| self.error("a non-negative integer"))
            }
            _ => Err(self.error("a non-negative integer")),
        }
    }

    // ---- Annotations ----

    fn parse_annotation_value(&mut self) -> OwlResult<AnnotationValue> {
        match self.current() {
            Token::AnonIndividual(_) => Ok(self.parse_anonymous_individual()?.into()),
            Token::StringLiteral(_) => Ok(self.parse_literal()?.into()),
            _ => Ok(self.parse_iri()?.into()),
        }
    }

    fn parse_annotation(&mut self) -> OwlResult<Annotation> {
        self.expect_keyword("Annotation")?;
        self.expect_lparen()?;
        let property = self.parse_annotation_property()?;
        let value = self.parse_annotation_value()?;
        self.expect_rparen()?;
        Ok(Annotation::new(property, value))
    }

    fn at_annotation_call(&self) -> bool {
        self.at_keyword_call("Annotation")
    }

    /// Zero or more leading `Annotation(...)` attached to the axiom being
    /// parsed, as required before every axiom's own operands.
    fn parse_axiom_annotations(&mut self) -> OwlResult<AnnotationSet> {
        let mut annotations = Vec::new();
        while self.at_annotation_call() {
            annotations.push(self.parse_annotation()?);
        }
        Ok(AnnotationSet::from_iter_dedup(annotations))
    }

    // ---- Declarations ----

    fn parse_entity(&mut self) -> OwlResult<Entity> {
        if self.at_keyword_call("Class") {
            self.advance();
            self.expect_lparen()?;
            let c = self.parse_class()?;
            self.expect_rparen()?;
            Ok(Entity::Class(c))
        } else if self.at_keyword_call("Datatype") {
            self.advance();
            self.expect_lparen()?;
            let d = self.parse_datatype()?;
            self.expect_rparen()?;
            Ok(Entity::Datatype(d))
        } else if self.at_keyword_call("ObjectProperty") {
            self.advance();
            self.expect_lparen()?;
            let p = self.parse_named_object_property()?;
            self.expect_rparen()?;
            Ok(Entity::ObjectProperty(p))
        } else if self.at_keyword_call("DataProperty") {
            self.advance();
            self.expect_lparen()?;
            let p = self.parse_data_property()?;
            self.expect_rparen()?;
            Ok(Entity::DataProperty(p))
        } else if self.at_keyword_call("AnnotationProperty") {
            self.advance();
            self.expect_lparen()?;
            let p = self.parse_annotation_property()?;
            self.expect_rparen()?;
            Ok(Entity::AnnotationProperty(p))
        } else if self.at_keyword_call("NamedIndividual") {
            self.advance();
            self.expect_lparen()?;
            let i = self.parse_named_individual()?;
            self.expect_rparen()?;
            Ok(Entity::NamedIndividual(i))
        } else {
            Err(self.error("an entity kind (Class, Datatype, ObjectProperty, DataProperty, AnnotationProperty, NamedIndividual)"))
        }
    }

    // ---- Axioms ----

    fn parse_axiom(&mut self) -> OwlResult<Axiom> {
        let keyword = match self.current() {
            Token::Name(n) => n.clone(),
            _ => return Err(self.error("an axiom keyword")),
        };
        if !AXIOM_KEYWORDS.contains(&keyword.as_str()) {
            return Err(OwlError::ParseError {
                position: self.position(),
                expected: "a recognized axiom keyword".to_string(),
                found: keyword,
            });
        }
        self.advance();
        self.expect_lparen()?;
        let annotations = self.parse_axiom_annotations()?;
        let axiom = match keyword.as_str() {
            "Declaration" => {
                let entity = self.parse_entity()?;
                Axiom::Declaration { entity, annotations }
            }
            "SubClassOf" => {
                let sub = self.parse_class_expression()?;
                let sup = self.parse_class_expression()?;
                Axiom::SubClassOf { sub, sup, annotations }
            }
            "EquivalentClasses" => {
                let classes = self.parse_n_or_more_class_expressions(2)?;
                Axiom::EquivalentClasses { classes, annotations }
            }
            "DisjointClasses" => {
                let classes = self.parse_n_or_more_class_expressions(2)?;
                Axiom::DisjointClasses { classes, annotations }
            }
            "DisjointUnion" => {
                let class = self.parse_class()?;
                let disjoint_classes = self.parse_n_or_more_class_expressions(2)?;
                Axiom::DisjointUnion {
                    class,
                    disjoint_classes,
                    annotations,
                }
            }
            "SubObjectPropertyOf" => {
                let sub = self.parse_object_property_expression()?;
                let sup = self.parse_object_property_expression()?;
                Axiom::SubObjectPropertyOf { sub, sup, annotations }
            }
            "EquivalentObjectProperties" => {
                let properties = self.parse_n_or_more_ope(2)?;
                Axiom::EquivalentObjectProperties { properties, annotations }
            }
            "DisjointObjectProperties" => {
                let properties = self.parse_n_or_more_ope(2)?;
                Axiom::DisjointObjectProperties { properties, annotations }
            }
            "InverseObjectProperties" => {
                let first = self.parse_object_property_expression()?;
                let second = self.parse_object_property_expression()?;
                Axiom::InverseObjectProperties { first, second, annotations }
            }
            "ObjectPropertyDomain" => {
                let property = self.parse_object_property_expression()?;
                let domain = self.parse_class_expression()?;
                Axiom::ObjectPropertyDomain { property, domain, annotations }
            }
            "ObjectPropertyRange" => {
                let property = self.parse_object_property_expression()?;
                let range = self.parse_class_expression()?;
                Axiom::ObjectPropertyRange { property, range, annotations }
            }
            "FunctionalObjectProperty" => Axiom::FunctionalObjectProperty {
                property: self.parse_object_property_expression()?,
                annotations,
            },
            "InverseFunctionalObjectProperty" => Axiom::InverseFunctionalObjectProperty {
                property: self.parse_object_property_expression()?,
                annotations,
            },
            "ReflexiveObjectProperty" => Axiom::ReflexiveObjectProperty {
                property: self.parse_object_property_expression()?,
                annotations,
            },
            "IrreflexiveObjectProperty" => Axiom::IrreflexiveObjectProperty {
                property: self.parse_object_property_expression()?,
                annotations,
            },
            "SymmetricObjectProperty" => Axiom::SymmetricObjectProperty {
                property: self.parse_object_property_expression()?,
                annotations,
            },
            "AsymmetricObjectProperty" => Axiom::AsymmetricObjectProperty {
                property: self.parse_object_property_expression()?,
                annotations,
            },
            "TransitiveObjectProperty" => Axiom::TransitiveObjectProperty {
                property: self.parse_object_property_expression()?,
                annotations,
            },
            "SubDataPropertyOf" => {
                let sub = self.parse_data_property()?;
                let sup = self.parse_data_property()?;
                Axiom::SubDataPropertyOf { sub, sup, annotations }
            }
            "EquivalentDataProperties" => {
                let properties = self.parse_n_or_more_dp(2)?;
                Axiom::EquivalentDataProperties { properties, annotations }
            }
            "DisjointDataProperties" => {
                let properties = self.parse_n_or_more_dp(2)?;
                Axiom::DisjointDataProperties { properties, annotations }
            }
            "DataPropertyDomain" => {
                let property = self.parse_data_property()?;
                let domain = self.parse_class_expression()?;
                Axiom::DataPropertyDomain { property, domain, annotations }
            }
            "DataPropertyRange" => {
                let property = self.parse_data_property()?;
                let range = self.parse_data_range()?;
                Axiom::DataPropertyRange { property, range, annotations }
            }
            "FunctionalDataProperty" => Axiom::FunctionalDataProperty {
                property: self.parse_data_property()?,
                annotations,
            },
            "ClassAssertion" => {
                let class_expression = self.parse_class_expression()?;
                let individual = self.parse_individual()?;
                Axiom::ClassAssertion { class_expression, individual, annotations }
            }
            "ObjectPropertyAssertion" => {
                let property = self.parse_object_property_expression()?;
                let source = self.parse_individual()?;
                let target = self.parse_individual()?;
                Axiom::ObjectPropertyAssertion { property, source, target, annotations }
            }
            "NegativeObjectPropertyAssertion" => {
                let property = self.parse_object_property_expression()?;
                let source = self.parse_individual()?;
                let target = self.parse_individual()?;
                Axiom::NegativeObjectPropertyAssertion { property, source, target, annotations }
            }
            "DataPropertyAssertion" => {
                let property = self.parse_data_property()?;
                let source = self.parse_individual()?;
                let target = self.parse_literal()?;
                Axiom::DataPropertyAssertion { property, source, target, annotations }
            }
            "NegativeDataPropertyAssertion" => {
                let property = self.parse_data_property()?;
                let source = self.parse_individual()?;
                let target = self.parse_literal()?;
                Axiom::NegativeDataPropertyAssertion { property, source, target, annotations }
            }
            "SameIndividual" => {
                let individuals = self.parse_n_or_more_individuals(2)?;
                Axiom::SameIndividual { individuals, annotations }
            }
            "DifferentIndividuals" => {
                let individuals = self.parse_n_or_more_individuals(2)?;
                Axiom::DifferentIndividuals { individuals, annotations }
            }
            "AnnotationAssertion" => {
                let property = self.parse_annotation_property()?;
                let subject = self.parse_annotation_subject()?;
                let value = self.parse_annotation_value()?;
                Axiom::AnnotationAssertion { property, subject, value, annotations }
            }
            "SubAnnotationPropertyOf" => {
                let sub = self.parse_annotation_property()?;
                let sup = self.parse_annotation_property()?;
                Axiom::SubAnnotationPropertyOf { sub, sup, annotations }
            }
            "AnnotationPropertyDomain" => {
                let property = self.parse_annotation_property()?;
                let domain = self.parse_iri()?;
                Axiom::AnnotationPropertyDomain { property, domain, annotations }
            }
            "AnnotationPropertyRange" => {
                let property = self.parse_annotation_property()?;
                let range = self.parse_iri()?;
                Axiom::AnnotationPropertyRange { property, range, annotations }
            }
            other => return Err(self.error(format!("unreachable axiom keyword {other}"))),
        };
        self.expect_rparen()?;
        Ok(axiom)
    }

    fn parse_annotation_subject(&mut self) -> OwlResult<AnnotationSubject> {
        match self.current() {
            Token::AnonIndividual(_) => Ok(AnnotationSubject::Anonymous(self.parse_anonymous_individual()?)),
            _ => Ok(AnnotationSubject::Iri(self.parse_iri()?)),
        }
    }

    fn parse_n_or_more_class_expressions(
        &mut self,
        min: usize,
    ) -> OwlResult<crate::model::class_expression::OperandSet<ClassExpression>> {
        let mut ops = Vec::new();
        for _ in 0..min {
            ops.push(self.parse_class_expression()?);
        }
        while !matches!(self.current(), Token::RParen) {
            ops.push(self.parse_class_expression()?);
        }
        Ok(crate::model::class_expression::OperandSet::new(ops))
    }

    fn parse_n_or_more_ope(
        &mut self,
        min: usize,
    ) -> OwlResult<crate::model::class_expression::OperandSet<ObjectPropertyExpression>> {
        let mut ops = Vec::new();
        for _ in 0..min {
            ops.push(self.parse_object_property_expression()?);
        }
        while !matches!(self.current(), Token::RParen) {
            ops.push(self.parse_object_property_expression()?);
        }
        Ok(crate::model::class_expression::OperandSet::new(ops))
    }

    fn parse_n_or_more_dp(
        &mut self,
        min: usize,
    ) -> OwlResult<crate::model::class_expression::OperandSet<DataProperty>> {
        let mut ops = Vec::new();
        for _ in 0..min {
            ops.push(self.parse_data_property()?);
        }
        while !matches!(self.current(), Token::RParen) {
            ops.push(self.parse_data_property()?);
        }
        Ok(crate::model::class_expression::OperandSet::new(ops))
    }

    fn parse_n_or_more_individuals(
        &mut self,
        min: usize,
    ) -> OwlResult<crate::model::class_expression::OperandSet<Individual>> {
        let mut ops = Vec::new();
        for _ in 0..min {
            ops.push(self.parse_individual()?);
        }
        while !matches!(self.current(), Token::RParen) {
            ops.push(self.parse_individual()?);
        }
        Ok(crate::model::class_expression::OperandSet::new(ops))
    }

    // ---- Prefixes & document ----

    /// `Prefix(name := <iri>)`, zero or more, merged into `self.prefixes`
    /// as they're seen (so a later `Prefix` declaration can shadow an
    /// earlier one, matching the reference grammar's fold-left merge).
    fn parse_prefix_declarations(&mut self) -> OwlResult<()> {
        while self.at_keyword_call("Prefix") {
            self.advance();
            self.expect_lparen()?;
            let prefix_name = match self.current().clone() {
                Token::Name(n) => {
                    self.advance();
                    n.strip_suffix(':').unwrap_or(&n).to_string()
                }
                _ => return Err(self.error("a prefix name")),
            };
            match self.current() {
                Token::Equals => {
                    self.advance();
                }
                _ => return Err(self.error("'='")),
            }
            let namespace = match self.current().clone() {
                Token::FullIri(s) => {
                    self.advance();
                    s
                }
                _ => return Err(self.error("an absolute IRI")),
            };
            self.expect_rparen()?;
            self.prefixes.insert(prefix_name, namespace);
        }
        Ok(())
    }

    fn at_iri_reference(&self) -> bool {
        match self.current() {
            Token::FullIri(_) => true,
            Token::Name(n) => {
                !AXIOM_KEYWORDS.contains(&n.as_str())
                    && n != "Import"
                    && n != "Annotation"
                    && n != "Ontology"
            }
            _ => false,
        }
    }

    fn parse_document(&mut self) -> OwlResult<Ontology> {
        self.parse_prefix_declarations()?;
        self.expect_keyword("Ontology")?;
        self.expect_lparen()?;

        let mut ontology = Ontology::new();
        *ontology.prefixes_mut() = self.prefixes.clone();

        if self.at_iri_reference() {
            ontology.set_iri(self.parse_iri()?);
            if self.at_iri_reference() {
                ontology.set_version_iri(self.parse_iri()?);
            }
        }

        while self.at_keyword_call("Import") {
            self.advance();
            self.expect_lparen()?;
            let iri = self.parse_iri()?;
            self.expect_rparen()?;
            ontology.add_import(iri);
        }

        let mut annotations = Vec::new();
        while self.at_annotation_call() {
            annotations.push(self.parse_annotation()?);
        }
        ontology.set_annotations(AnnotationSet::from_iter_dedup(annotations));

        while !matches!(self.current(), Token::RParen) {
            let axiom = self.parse_axiom()?;
            ontology.add_axiom(axiom);
        }

        self.expect_rparen()?;
        Ok(ontology)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> Ontology {
        FunctionalSyntaxParser::new().parse(src).unwrap()
    }

    #[test]
    fn s1_atomic_subclass_of() {
        let o = parse("Prefix(ex:=<http://e/>) Ontology( SubClassOf(ex:A ex:B) )");
        assert_eq!(o.axiom_count(), 1);
        let expected = Axiom::SubClassOf {
            sub: ClassExpression::class(Class::new(IRI::parse_absolute("http://e/A").unwrap())),
            sup: ClassExpression::class(Class::new(IRI::parse_absolute("http://e/B").unwrap())),
            annotations: AnnotationSet::new(),
        };
        assert!(o.contains_axiom(&expected));
    }

    #[test]
    fn s2_cardinality_omitted_filler_defaults_to_owl_thing() {
        let o = parse(
            "Prefix(ex:=<http://e/>) Ontology( EquivalentClasses(ex:C ObjectMinCardinality(3 ex:p)) )",
        );
        let prop = ObjectPropertyExpression::ObjectProperty(ObjectProperty::new(
            IRI::parse_absolute("http://e/p").unwrap(),
        ));
        let expected = Axiom::EquivalentClasses {
            classes: crate::model::class_expression::OperandSet::new(vec![
                ClassExpression::class(Class::new(IRI::parse_absolute("http://e/C").unwrap())),
                ClassExpression::object_min_cardinality(3, prop, None),
            ]),
            annotations: AnnotationSet::new(),
        };
        assert!(o.contains_axiom(&expected));
    }

    #[test]
    fn s3_datatype_restriction_nested_in_data_some_values_from() {
        let o = parse(
            r#"Prefix(ex:=<http://e/>) Prefix(xsd:=<http://www.w3.org/2001/XMLSchema#>)
               Ontology( SubClassOf(ex:A DataSomeValuesFrom(ex:d DatatypeRestriction(xsd:integer xsd:maxExclusive "20"^^xsd:integer))) )"#,
        );
        assert_eq!(o.axiom_count(), 1);
    }

    #[test]
    fn s4_annotation_carrying_axiom_differs_from_bare() {
        let o = parse(
            r#"Prefix(ex:=<http://e/>) Ontology( SubClassOf(Annotation(ex:a "hi"@en) ex:X ex:Y) )"#,
        );
        let bare = Axiom::SubClassOf {
            sub: ClassExpression::class(Class::new(IRI::parse_absolute("http://e/X").unwrap())),
            sup: ClassExpression::class(Class::new(IRI::parse_absolute("http://e/Y").unwrap())),
            annotations: AnnotationSet::new(),
        };
        assert!(!o.contains_axiom(&bare));
        assert_eq!(o.axiom_count(), 1);
        let stored = o.axioms().next().unwrap();
        assert_eq!(stored.annotations().len(), 1);
    }

    #[test]
    fn s5_object_one_of_mixed_individuals_dedupes_repeated_blank_node() {
        let o = parse(
            "Prefix(ex:=<http://e/>) Ontology( ClassAssertion(ObjectOneOf(ex:a _:23 ex:b _:23) ex:a) )",
        );
        let axiom = o.axioms().next().unwrap();
        match axiom {
            Axiom::ClassAssertion { class_expression, .. } => match class_expression {
                ClassExpression::ObjectOneOf(set) => assert_eq!(set.len(), 3),
                _ => panic!("expected ObjectOneOf"),
            },
            _ => panic!("expected ClassAssertion"),
        }
    }

    #[test]
    fn unknown_axiom_keyword_is_a_parse_error() {
        let err = FunctionalSyntaxParser::new()
            .parse("Ontology( NotARealAxiom(a b) )")
            .unwrap_err();
        assert!(matches!(err, OwlError::ParseError { .. }));
    }

    #[test]
    fn bare_name_resolves_against_default_prefix_in_document() {
        let o = parse("Prefix(=<http://e/>) Ontology( SubClassOf(A B) )");
        let expected = Axiom::SubClassOf {
            sub: ClassExpression::class(Class::new(IRI::parse_absolute("http://e/A").unwrap())),
            sup: ClassExpression::class(Class::new(IRI::parse_absolute("http://e/B").unwrap())),
            annotations: AnnotationSet::new(),
        };
        assert!(o.contains_axiom(&expected));
    }
}
