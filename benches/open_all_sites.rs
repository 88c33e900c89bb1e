use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use itertools::{iproduct, Itertools};
use percolation_grid::percolation_uf::UnionFindPercolation;
use percolation_grid::search::{BfsPercolation, DfsPercolation, FillPolicy};
use percolation_grid::types::{Percolator, Site};
use percolation_grid::union_find::{CompressedQuickUnion, QuickFind, WeightedQuickUnion};
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

fn shuffled_sites(size: u32) -> Vec<Site> {
    let mut rng = SmallRng::seed_from_u64(size as u64);
    let n = size as i32;
    let mut sites = iproduct!(0..n, 0..n)
        .map(|(row, col)| Site { row, col })
        .collect_vec();
    sites.shuffle(&mut rng);
    sites
}

fn open_all<P: Percolator>(mut grid: P, sites: &[Site]) -> bool {
    for site in sites {
        grid.open(site.row, site.col).unwrap();
    }
    grid.percolates()
}

fn bench_open_all_sites(c: &mut Criterion) {
    let mut g = c.benchmark_group("open all sites");
    for size in [16u32, 64] {
        let sites = shuffled_sites(size);
        g.bench_with_input(BenchmarkId::new("dfs", size), &sites, |b, sites| {
            b.iter(|| open_all(DfsPercolation::new(size), black_box(sites)))
        });
        g.bench_with_input(BenchmarkId::new("bfs", size), &sites, |b, sites| {
            b.iter(|| open_all(BfsPercolation::new(size), black_box(sites)))
        });
        g.bench_with_input(BenchmarkId::new("weighted", size), &sites, |b, sites| {
            b.iter(|| {
                open_all(
                    UnionFindPercolation::<WeightedQuickUnion>::with_size(size),
                    black_box(sites),
                )
            })
        });
        g.bench_with_input(BenchmarkId::new("compressed", size), &sites, |b, sites| {
            b.iter(|| {
                open_all(
                    UnionFindPercolation::<CompressedQuickUnion>::with_size(size),
                    black_box(sites),
                )
            })
        });
    }
    g.finish();
}

fn bench_slow_strategies(c: &mut Criterion) {
    // rescans and quick find are quadratic per open, keep them to a small grid
    let size = 16;
    let sites = shuffled_sites(size);
    c.bench_function("dfs rescan 16", |b| {
        b.iter(|| {
            open_all(
                DfsPercolation::with_policy(size, FillPolicy::Rescan),
                black_box(&sites),
            )
        })
    });
    c.bench_function("quick find 16", |b| {
        b.iter(|| {
            open_all(
                UnionFindPercolation::<QuickFind>::with_size(size),
                black_box(&sites),
            )
        })
    });
}

criterion_group!(benches, bench_open_all_sites, bench_slow_strategies);
criterion_main!(benches);
