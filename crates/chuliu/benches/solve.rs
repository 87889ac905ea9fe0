use chuliu::graphlib::{Graph, GraphOptions};
use chuliu::solve;
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

#[derive(Debug, Clone)]
struct GraphSpec {
    vertex_count: u32,
    edges: Vec<(u32, u32, i64)>,
}

impl GraphSpec {
    fn build(&self) -> Graph<u32, i64> {
        let mut g: Graph<u32, i64> = Graph::new(GraphOptions::default());
        for v in 0..self.vertex_count {
            g.insert_vertex(v).expect("bench vertex");
        }
        for &(u, v, w) in &self.edges {
            g.insert_edge(&u, &v, w).expect("bench edge");
        }
        g
    }
}

fn build_spec(vertex_count: u32, fanout: u32) -> GraphSpec {
    let mut edges: Vec<(u32, u32, i64)> = Vec::new();

    // An expensive spine from the root keeps every vertex reachable.
    for v in 1..vertex_count {
        edges.push((v - 1, v, 1_000));
    }

    // Cheap backward edges create cycles the solver has to contract.
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    for v in 1..vertex_count {
        for _ in 0..fanout {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let u = 1 + (state % u64::from(vertex_count - 1)) as u32;
            if u != v && u != v - 1 {
                edges.push((u, v, (state % 97) as i64));
            }
        }
    }

    GraphSpec {
        vertex_count,
        edges,
    }
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.measurement_time(Duration::from_secs(5));

    for (vertex_count, fanout) in [(32, 2), (128, 3), (256, 4)] {
        let spec = build_spec(vertex_count, fanout);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("v{vertex_count}_f{fanout}")),
            &spec,
            |b, spec| {
                b.iter_batched(
                    || spec.build(),
                    |g| black_box(solve(&g, &0).map(|t| t.edge_count())),
                    BatchSize::SmallInput,
                )
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
