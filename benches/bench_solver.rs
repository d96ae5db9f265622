use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scrabble_solver::{Board, Solver, Wordlist, DEFAULT_WORDFILE};

const TEST_STATE: &[&str] = &[
    "...............",
    "...............",
    "......c........",
    "......h........",
    "....grape......",
    "......i........",
    "......r...q....",
    "...stone..u....",
    "......w...i....",
    "....quiz..t....",
    "...............",
    "...............",
    "...............",
    "...............",
    "...............",
];

fn setup() -> anyhow::Result<(Board, Wordlist)> {
    let board = Board::from_strings(TEST_STATE)?;
    let wordlist = Wordlist::from_file(DEFAULT_WORDFILE)?;
    Ok((board, wordlist))
}

fn random_shelf(rng: &mut StdRng) -> String {
    (0..7).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

fn bench_ranked_results(c: &mut Criterion, name: &str, shelf: &str) {
    let (board, wordlist) = setup().unwrap();
    let solver = Solver::from_board(shelf.parse().unwrap(), &board, &wordlist);
    c.bench_function(&format!("solver.ranked_results.{}", name), |b| {
        b.iter(|| solver.ranked_results())
    });
}

fn bench_fallback(c: &mut Criterion) {
    let (_, wordlist) = setup().unwrap();
    let solver = Solver::from_board("retains".parse().unwrap(), &Board::new(), &wordlist);
    c.bench_function("solver.fallback_results", |b| {
        b.iter(|| solver.fallback_results())
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_ranked_results(c, "1", "abel");
    bench_ranked_results(c, "2", "retains");
    bench_fallback(c);
}

fn random_benchmarks(c: &mut Criterion) {
    let (board, wordlist) = setup().unwrap();
    let mut rng = StdRng::seed_from_u64(15);
    let shelves: Vec<String> = (0..20).map(|_| random_shelf(&mut rng)).collect();
    c.bench_function("solver.random_shelves", |b| {
        b.iter(|| {
            shelves
                .iter()
                .map(|shelf| {
                    Solver::from_board(shelf.parse().unwrap(), &board, &wordlist)
                        .ranked_results()
                        .len()
                })
                .sum::<usize>()
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(60);
    targets = criterion_benchmark
}

criterion_group! {
    name = random;
    config = Criterion::default()
        .sample_size(10);
    targets = random_benchmarks
}

criterion_main!(benches, random);
