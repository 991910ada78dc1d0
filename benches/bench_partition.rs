use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glsearch::{
    candidate::Candidate,
    crossover::uniform_crossover,
    graph::{BalancedCut, Graph},
    local_search::BitFlipClimb,
    rng::RandomNumberGenerator,
    search::{GeneticLocalSearch, SearchOptions},
    stop::IterationLimit,
};

fn ring_graph(nodes: usize) -> Graph {
    let mut graph = Graph::new(nodes).unwrap();
    for i in 0..nodes {
        graph.add_edge(i, (i + 1) % nodes, 1.0).unwrap();
    }
    graph
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition_ring");
    for size in [16, 32, 64].iter() {
        let objective = BalancedCut::new(ring_graph(*size), 2.0).unwrap();
        let search = GeneticLocalSearch::new(objective, BitFlipClimb::new(5).unwrap());
        let options = SearchOptions::builder().population_size(10).build();

        group.bench_function(&format!("partition_ring_{}", size), |b| {
            b.iter(|| {
                let mut stop = IterationLimit::new(50);
                let mut rng = RandomNumberGenerator::from_seed(17);
                let result = search.partition(
                    black_box(&options),
                    black_box(&mut stop),
                    black_box(&mut rng),
                );
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

fn bench_crossover(c: &mut Criterion) {
    let mut rng = RandomNumberGenerator::from_seed(23);

    let mut group = c.benchmark_group("uniform_crossover");
    for len in [64, 256, 1024].iter() {
        let parent1 = Candidate::random(*len, &mut rng);
        let parent2 = Candidate::random(*len, &mut rng);

        group.bench_function(&format!("uniform_crossover_{}", len), |b| {
            b.iter(|| {
                let result = uniform_crossover(
                    black_box(&parent1),
                    black_box(&parent2),
                    black_box(&mut rng),
                );
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_partition, bench_crossover);
criterion_main!(benches);
