use castnet_metrics::graph::{
    build_directed_graph, build_undirected_graph, minimum_spanning_tree,
    strongly_connected_components, weak_components,
};
use castnet_metrics::metrics::{
    CentralityConfig, betweenness::betweenness_centralities, closeness::closeness_centrality,
};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Synthetic catalog sizes: (label, titles, actor pool, director pool).
const TIERS: [(&str, usize, usize, usize); 3] =
    [("small", 50, 80, 10), ("medium", 200, 300, 40), ("large", 800, 1200, 120)];

struct Catalog {
    casts: Vec<Vec<String>>,
    directors: Vec<Vec<String>>,
}

fn synthetic_catalog(titles: usize, actors: usize, directors: usize, seed: u64) -> Catalog {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut casts = Vec::with_capacity(titles);
    let mut crew = Vec::with_capacity(titles);

    for _ in 0..titles {
        let cast_size = rng.gen_range(2..7);
        let cast: Vec<String> = rand::seq::index::sample(&mut rng, actors, cast_size)
            .into_iter()
            .map(|i| format!("ACTOR {i:04}"))
            .collect();
        casts.push(cast);
        crew.push(vec![format!("DIRECTOR {:03}", rng.gen_range(0..directors))]);
    }

    Catalog {
        casts,
        directors: crew,
    }
}

fn bench_structure(c: &mut Criterion) {
    let mut group = c.benchmark_group("structure");

    for (label, titles, actors, directors) in TIERS {
        let catalog = synthetic_catalog(titles, actors, directors, 0xCA57 + titles as u64);
        let undirected = build_undirected_graph(&catalog.casts);
        let directed = build_directed_graph(&catalog.casts, &catalog.directors);

        group.bench_with_input(BenchmarkId::new("build", label), &catalog, |b, catalog| {
            b.iter(|| black_box(build_undirected_graph(&catalog.casts)));
        });
        group.bench_with_input(BenchmarkId::new("weak", label), &undirected, |b, g| {
            b.iter(|| black_box(weak_components(g)));
        });
        group.bench_with_input(BenchmarkId::new("scc", label), &directed, |b, g| {
            b.iter(|| black_box(strongly_connected_components(g)));
        });
        group.bench_with_input(BenchmarkId::new("mst", label), &undirected, |b, g| {
            b.iter(|| black_box(minimum_spanning_tree(g, "ACTOR 0000")));
        });
    }

    group.finish();
}

fn bench_centrality(c: &mut Criterion) {
    let mut group = c.benchmark_group("centrality");
    group.sample_size(10);

    for (label, titles, actors, directors) in TIERS {
        let catalog = synthetic_catalog(titles, actors, directors, 0xCA57 + titles as u64);
        let undirected = build_undirected_graph(&catalog.casts);
        let config = CentralityConfig::default();

        group.bench_with_input(
            BenchmarkId::new("betweenness", label),
            &undirected,
            |b, g| {
                let mut rng = StdRng::seed_from_u64(7);
                b.iter(|| black_box(betweenness_centralities(g, None, &config, &mut rng)));
            },
        );
        group.bench_with_input(BenchmarkId::new("closeness", label), &undirected, |b, g| {
            b.iter(|| black_box(closeness_centrality(g, None)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_structure, bench_centrality);
criterion_main!(benches);
