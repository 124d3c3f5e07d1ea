use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use docflow_engine::model::{Control, ListType, Td, TitleLevel, Tr};
use docflow_engine::{
    CompressOptions, EditorOptions, Element, ExpandOptions, FormulaCache, compress, expand,
};

// A realistic document section: heading, paragraph, list, link, control and table
fn generate_document(sections: usize) -> Vec<Element> {
    let mut document = Vec::new();
    for n in 0..sections {
        document.push(Element::title(
            TitleLevel::Second,
            vec![Element::text(format!("Section {n}"))],
        ));
        document.push(Element::text(
            "\nThis is a paragraph with enough text to be representative of real documents. ",
        ));
        document.push(Element::hyperlink(
            "https://example.com",
            vec![Element::text("a link")],
        ));
        document.push(Element::list(
            ListType::Ol,
            vec![Element::text("\nFirst item\nSecond item\nThird item")],
        ));
        document.push(Element::control(Control {
            placeholder: Some("enter a value".into()),
            ..Control::default()
        }));
        document.push(Element::table(vec![Tr::new(vec![
            Td::new(vec![Element::text("cell one")]),
            Td::new(vec![Element::text("cell two")]),
        ])]));
    }
    document
}

fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");
    group.sample_size(20);
    let editor = EditorOptions::default();
    let cache = FormulaCache::new();

    for sections in [10, 100] {
        let document = generate_document(sections);
        group.throughput(Throughput::Elements(sections as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sections), &document, |b, doc| {
            b.iter(|| {
                let mut elements = doc.clone();
                expand(&mut elements, &ExpandOptions::new(&editor, &cache));
                std::hint::black_box(elements);
            });
        });
    }

    group.finish();
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");
    group.sample_size(20);
    let editor = EditorOptions::default();
    let cache = FormulaCache::new();

    for sections in [10, 100] {
        let mut flat = generate_document(sections);
        expand(&mut flat, &ExpandOptions::new(&editor, &cache));
        group.throughput(Throughput::Elements(flat.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sections), &flat, |b, flat| {
            b.iter(|| {
                let nested = compress(std::hint::black_box(flat), CompressOptions::default());
                std::hint::black_box(nested);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_expand, bench_compress);
criterion_main!(benches);
