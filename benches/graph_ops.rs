use criterion::{black_box, criterion_group, criterion_main, Criterion};
use undigraph::{EdgeKey, Graph};

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("v{:04}", i)).collect()
}

/// 每个顶点与其后 8 个顶点相连
fn banded(labels: &[String]) -> Graph {
    let mut graph = Graph::new();
    for (i, a) in labels.iter().enumerate() {
        for b in labels.iter().skip(i + 1).take(8) {
            graph.insert_edge(a, b, (i % 7) as i64);
        }
    }
    graph
}

fn bench_insert_edges(c: &mut Criterion) {
    let labels = labels(1000);
    c.bench_function("insert_edges_banded_1000", |b| {
        b.iter(|| black_box(banded(&labels)))
    });
}

fn bench_contains_edge(c: &mut Criterion) {
    let labels = labels(1000);
    let graph = banded(&labels);
    let probes: Vec<EdgeKey> = labels
        .windows(2)
        .map(|w| EdgeKey::new(&w[1], &w[0]))
        .collect();
    c.bench_function("contains_edge_999", |b| {
        b.iter(|| probes.iter().filter(|k| graph.contains_edge(*k)).count())
    });
}

fn bench_remove_vertices(c: &mut Criterion) {
    let labels = labels(500);
    let graph = banded(&labels);
    c.bench_function("remove_all_vertices_500", |b| {
        b.iter(|| {
            let mut g = graph.clone();
            for label in &labels {
                assert!(g.remove_vertex(label).is_ok());
            }
            black_box(g.edge_count())
        })
    });
}

criterion_group!(
    benches,
    bench_insert_edges,
    bench_contains_edge,
    bench_remove_vertices
);
criterion_main!(benches);
