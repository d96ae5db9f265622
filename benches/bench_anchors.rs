use criterion::{criterion_group, criterion_main, Criterion};
use scrabble_solver::{fits_anchor, Board, Wordlist, DEFAULT_WORDFILE};

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

fn bench_anchors(c: &mut Criterion) {
    let board = Board::from_strings(TEST_STATE).unwrap();
    c.bench_function("board.anchors", |b| b.iter(|| board.anchors()));
    c.bench_function("board.from_strings", |b| {
        b.iter(|| Board::from_strings(TEST_STATE).unwrap())
    });
}

fn bench_fits(c: &mut Criterion) -> anyhow::Result<()> {
    let board = Board::from_strings(TEST_STATE)?;
    let anchors = board.anchors();
    let wordlist = Wordlist::from_file(DEFAULT_WORDFILE)?;
    c.bench_function("matcher.fits_anchor", |b| {
        b.iter(|| {
            anchors
                .iter()
                .map(|anchor| {
                    wordlist
                        .iter()
                        .filter(|word| fits_anchor(word, anchor))
                        .count()
                })
                .sum::<usize>()
        })
    });
    Ok(())
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_anchors(c);
    bench_fits(c).unwrap();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
