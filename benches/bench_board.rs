use criterion::{criterion_group, criterion_main, Criterion};
use wordfeud_movegen::{Board, CrossChecks, Language, Wordlist};

const WORDFILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/dutch.txt");
const TEST_STATE: &[&str] = &[
    "    t     c   f",
    "    e    he   o",
    "    r   bis g k",
    "    u  bol te v",
    "    gepof dimme",
    "      la vree e",
    "    qua   ene  ",
    "      Spoelen  ",
    "     s a   n   ",
    "     c d we    ",
    "     hadden    ",
    "    nu o   y   ",
    "  wrat siJzen  ",
    "    k     os   ",
    "   zerk   g    ",
];

fn setup() -> (Board, Wordlist, u32) {
    let board = Board::new(Language::NL)
        .with_state_from_strings(TEST_STATE)
        .unwrap();
    let mut wordlist = Wordlist::new(board.codec());
    let variant = wordlist.read_wordlist(WORDFILE).unwrap();
    (board, wordlist, variant)
}

fn bench_calc_all_word_scores(c: &mut Criterion, name: &str, rack: &str) {
    let (board, wordlist, variant) = setup();
    c.bench_function(&format!("board.{}", name), |b| {
        b.iter(|| {
            let mut results = board.calc_all_word_scores(rack, &wordlist, variant).unwrap();
            results.sort_by(|a, b| b.score.cmp(&a.score));
        })
    });
}

fn bench_first_moves(c: &mut Criterion) {
    let (board, wordlist, variant) = setup();
    c.bench_function("board.first_10", |b| {
        b.iter(|| board.moves("abelst*", &wordlist, variant).unwrap().take(10).count())
    });
}

fn bench_cross_checks(c: &mut Criterion) {
    let (board, wordlist, variant) = setup();
    c.bench_function("board.cross_checks", |b| {
        b.iter(|| {
            let mut checks = CrossChecks::new(&wordlist, variant);
            for i in 0..board.dim() {
                checks.rowdata(&board, true, i);
                checks.rowdata(&board, false, i);
            }
            checks.len()
        })
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_calc_all_word_scores(c, "1", "abel");
    bench_first_moves(c);
    bench_cross_checks(c);
}

fn slow_benchmarks(c: &mut Criterion) {
    bench_calc_all_word_scores(c, "2", "mdjenj*");
    bench_calc_all_word_scores(c, "3", "polkas*");
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(60);
    targets = criterion_benchmark
}

criterion_group! {
    name = slow;
    config = Criterion::default()
        .sample_size(10);
    targets = slow_benchmarks
}

criterion_main!(benches, slow);
