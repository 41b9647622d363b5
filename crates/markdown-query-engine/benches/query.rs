use criterion::{Criterion, criterion_group, criterion_main};
use markdown_query_engine::MarkdownQuery;
use std::hint::black_box;

fn generate_document(sections: usize) -> String {
    let mut content = String::new();
    for section in 0..sections {
        content.push_str(&format!("## Section {section}\n\n"));
        content.push_str(&format!(
            "<div id=\"section-{section}\" class=\"section\">\n\
             Body of section {section}.\n</div>\n\n"
        ));
        content.push_str("See [the guide](https://example.com/guide) or https://example.com/a.\n");
        content.push_str(&format!(
            "![Figure {section}](https://example.com/fig-{section}.png)\n\n"
        ));
        for i in 0..3 {
            content.push_str(&format!("- Item {i} of section {section}\n"));
        }
        content.push_str("\n```rust\nfn example() {}\n```\n\n");
    }
    content
}

fn bench_extractors(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    group.sample_size(10);

    let query = MarkdownQuery::new();
    let content = generate_document(200);

    group.bench_function("elements_by_class", |b| {
        b.iter(|| query.get_elements_by_class_name(black_box(&content), "section"));
    });
    group.bench_function("links", |b| {
        b.iter(|| query.get_links(black_box(&content)));
    });
    group.bench_function("list_items", |b| {
        b.iter(|| query.get_list_items(black_box(&content)));
    });
    group.bench_function("code_block_by_index", |b| {
        b.iter(|| query.get_code_block_by_index(black_box(&content), 150));
    });

    group.finish();
}

fn bench_mutators(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutate");
    group.sample_size(10);

    let query = MarkdownQuery::new();
    let content = generate_document(200);

    group.bench_function("update_element_by_id", |b| {
        b.iter(|| query.update_element_by_id(black_box(&content), "section-199", "Replaced"));
    });
    group.bench_function("update_link", |b| {
        b.iter(|| {
            query.update_link(
                black_box(&content),
                "https://example.com/guide",
                "https://example.org/guide",
                None,
            )
        });
    });
    group.bench_function("update_headers", |b| {
        b.iter(|| query.update_headers(black_box(&content), "Section 100", "Renamed"));
    });

    group.finish();
}

criterion_group!(benches, bench_extractors, bench_mutators);
criterion_main!(benches);
