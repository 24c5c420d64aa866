use criterion::{black_box, criterion_group, criterion_main, Criterion};
use inkspire_content::{default_catalog, default_site_content, ContentView, ServiceTaxonomy};
use inkspire_search::SearchIndex;

fn rebuild_index(c: &mut Criterion) {
    let site = default_site_content();
    let catalog = default_catalog();
    let taxonomy = ServiceTaxonomy::builtin();

    c.bench_function("rebuild_index", |b| {
        b.iter(|| SearchIndex::rebuild(black_box(ContentView::new(&site, &catalog)), &taxonomy))
    });
}

fn search_queries(c: &mut Criterion) {
    let site = default_site_content();
    let catalog = default_catalog();
    let index = SearchIndex::rebuild(ContentView::new(&site, &catalog), &ServiceTaxonomy::builtin());

    c.bench_function("search_common_term", |b| {
        b.iter(|| index.search(black_box("sticker")))
    });

    c.bench_function("search_no_match", |b| {
        b.iter(|| index.search(black_box("zzzz-not-here")))
    });
}

criterion_group!(benches, rebuild_index, search_queries);
criterion_main!(benches);
