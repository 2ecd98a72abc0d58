//! RDF conversion throughput, scaling with axiom count.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use owl2_model::model::annotation::AnnotationSet;
use owl2_model::model::axiom::Axiom;
use owl2_model::model::class_expression::ClassExpression;
use owl2_model::model::entities::Class;
use owl2_model::model::ontology::Ontology;
use owl2_model::rdf::{to_rdf, Owl2RdfOptions};
use owl2_model::IRI;

fn generate_ontology(class_count: usize) -> Ontology {
    let mut ontology = Ontology::new();
    let classes: Vec<Class> = (0..class_count)
        .map(|i| Class::new(IRI::parse_absolute(&format!("http://example.org/bench#C{i}")).unwrap()))
        .collect();

    for class in &classes {
        ontology.add_axiom(Axiom::Declaration {
            entity: owl2_model::Entity::Class(class.clone()),
            annotations: AnnotationSet::new(),
        });
    }
    for pair in classes.windows(2) {
        ontology.add_axiom(Axiom::SubClassOf {
            sub: ClassExpression::class(pair[1].clone()),
            sup: ClassExpression::class(pair[0].clone()),
            annotations: AnnotationSet::new(),
        });
    }
    ontology
}

fn rdf_conversion_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("rdf_conversion");

    for size in [50usize, 500, 2000] {
        let ontology = generate_ontology(size);
        group.throughput(Throughput::Elements(ontology.axiom_count() as u64));
        group.bench_with_input(BenchmarkId::new("axioms", size), &ontology, |b, ontology| {
            let options = Owl2RdfOptions::default();
            b.iter(|| {
                let triples = to_rdf(black_box(ontology), &options).unwrap();
                black_box(triples.len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, rdf_conversion_throughput);
criterion_main!(benches);
