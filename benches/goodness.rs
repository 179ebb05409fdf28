use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordle_solver::goodness::KnownPositions;
use wordle_solver::{
    count_matching, Estimator, FeedbackPattern, GoodnessCalculator, Solver, SolverConfig,
    Vocabulary, Word,
};

/// Deterministic pseudo-words with a realistic mix of repeated letters.
fn vocabulary(size: usize) -> Vocabulary {
    const LETTERS: &[u8] = b"etaoinshrdlucmfwypvbgkqjxz";
    let mut state = 0x2545_f491_4f6c_dd1du64;
    let mut words = Vec::with_capacity(size);
    while words.len() < size {
        let mut text = String::with_capacity(5);
        for _ in 0..5 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            // bias toward common letters
            let idx = ((state % 26) * (state % 26) / 26) as usize;
            text.push(LETTERS[idx] as char);
        }
        words.push(text);
    }
    Vocabulary::from_strs(5, words).unwrap()
}

fn matcher(c: &mut Criterion) {
    let vocabulary = vocabulary(4000);
    let guess = Word::new("tares").unwrap();
    let pattern = FeedbackPattern::parse("-Y--G", 5).unwrap();
    c.bench_function("count_matching_4000", |b| {
        b.iter(|| count_matching(black_box(&guess), &pattern, vocabulary.words()))
    });
}

fn goodness(c: &mut Criterion) {
    let vocabulary = vocabulary(500);
    let guess = Word::new("tares").unwrap();
    let known = KnownPositions::none(5);
    let calculator = GoodnessCalculator::new();
    c.bench_function("goodness_500", |b| {
        b.iter(|| calculator.goodness(black_box(&guess), &known, vocabulary.words()))
    });

    let solver = Solver::new(SolverConfig::default(), vocabulary).unwrap();
    c.bench_function("first_guess_500", |b| b.iter(|| solver.first_guess()));
}

criterion_group!(benches, matcher, goodness);
criterion_main!(benches);
