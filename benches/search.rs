use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use seqmatch::{
    generate::{rand_patterns, rand_sequence, rand_sequences},
    search::*,
};

const SEQ_LEN: usize = 100_000;

fn bench_exact(c: &mut Criterion) {
    let sequence = rand_sequence(DNA, SEQ_LEN, 42);
    let mut group = c.benchmark_group("exact");

    for m in [4, 16, 64] {
        let pattern = rand_sequence(DNA, m, 7);
        let kmp = Kmp::preprocess(&pattern).unwrap();
        let bm = BoyerMoore::preprocess(&pattern).unwrap();
        let so = ShiftOr::preprocess(&pattern).unwrap();

        group.bench_with_input(BenchmarkId::new("kmp", m), &sequence, |b, s| {
            b.iter(|| kmp.count_matches(black_box(s)));
        });
        group.bench_with_input(BenchmarkId::new("boyer_moore", m), &sequence, |b, s| {
            b.iter(|| bm.count_matches(black_box(s)));
        });
        group.bench_with_input(BenchmarkId::new("shift_or", m), &sequence, |b, s| {
            b.iter(|| so.count_matches(black_box(s)));
        });
    }

    group.finish();
}

fn bench_pattern_set(c: &mut Criterion) {
    let sequences = rand_sequences(100, 1024, 0, 3);
    let patterns = rand_patterns(&sequences, 100, 10, 0, 4);
    let mut group = c.benchmark_group("pattern_set");

    group.bench_function("aho_corasick/build", |b| {
        b.iter(|| AhoCorasick::preprocess(black_box(&patterns)).unwrap());
    });

    let ac = AhoCorasick::preprocess(&patterns).unwrap();
    group.bench_function("aho_corasick/search", |b| {
        b.iter(|| {
            sequences
                .iter()
                .map(|s| ac.count_matches(black_box(s)).iter().sum::<usize>())
                .sum::<usize>()
        });
    });

    group.bench_function("kmp/search", |b| {
        let matchers: Vec<Kmp> = patterns.iter().map(|p| Kmp::preprocess(p).unwrap()).collect();
        b.iter(|| {
            matchers
                .iter()
                .flat_map(|m| sequences.iter().map(move |s| m.count_matches(black_box(s))))
                .sum::<usize>()
        });
    });

    group.finish();
}

fn bench_gap(c: &mut Criterion) {
    let sequence = rand_sequence(DNA, SEQ_LEN / 10, 42);
    let pattern = rand_sequence(DNA, 8, 9);
    let mut group = c.benchmark_group("gap");

    for k in [1, 5, 10] {
        let dfa = GapDfa::preprocess(&pattern, k).unwrap();
        let re = GapRegex::preprocess(&pattern, k).unwrap();

        group.bench_with_input(BenchmarkId::new("dfa_gap", k), &sequence, |b, s| {
            b.iter(|| dfa.count_matches(black_box(s)));
        });
        group.bench_with_input(BenchmarkId::new("regexp", k), &sequence, |b, s| {
            b.iter(|| re.count_matches(black_box(s)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_exact, bench_pattern_set, bench_gap);
criterion_main!(benches);
