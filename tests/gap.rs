use seqmatch::search::*;

/// Whether the pattern matches with gap width `k` starting at `start`.
fn matches_at(pattern: &[u8], k: usize, sequence: &[u8], start: usize) -> bool {
    if sequence.get(start) != Some(&pattern[0]) {
        return false;
    }

    let mut position = start + 1;
    for &p in &pattern[1..] {
        let mut fillers = 0;
        loop {
            match sequence.get(position) {
                Some(&b) if b == p => break,
                Some(&b) if b < 0x80 && fillers < k => fillers += 1,
                _ => return false,
            }
            position += 1;
        }
        position += 1;
    }
    true
}

fn naive_gap_count(pattern: &[u8], k: usize, sequence: &[u8]) -> usize {
    (0..sequence.len()).filter(|&i| matches_at(pattern, k, sequence, i)).count()
}

fn gap_counts(pattern: &[u8], k: usize, sequence: &[u8]) -> [usize; 2] {
    [
        GapDfa::preprocess(pattern, k).unwrap().count_matches(sequence),
        GapRegex::preprocess(pattern, k).unwrap().count_matches(sequence),
    ]
}

static CASES: [(&[u8], usize, &[u8], usize); 9] = [
    (b"AG", 1, b"ATG", 1),
    (b"AG", 0, b"ATG", 0),
    (b"AG", 3, b"ATG", 1),
    (b"ACG", 2, b"AACCGG", 2),
    (b"AC", 1, b"AAC", 2),
    (b"AC", 1, b"AGAC", 1),
    (b"GT", 2, b"GAAAT", 0),
    (b"T", 4, b"TTT", 3),
    (b"AT", 1, b"A\xFFT", 0),
];

#[test]
fn known_counts() {
    for (pattern, k, sequence, expected) in CASES {
        assert_eq!(naive_gap_count(pattern, k, sequence), expected);
        assert_eq!(
            gap_counts(pattern, k, sequence),
            [expected; 2],
            "pattern: {}, k: {k}, sequence: {}",
            String::from_utf8_lossy(pattern),
            String::from_utf8_lossy(sequence)
        );
    }
}

#[test]
fn zero_gap_is_exact() {
    let sequence = b"ACGTACGTTACGAACGTT";
    let patterns: [&[u8]; 5] = [b"ACGT", b"A", b"TT", b"CGAA", b"GGG"];
    for pattern in patterns {
        let exact = Kmp::preprocess(pattern).unwrap().count_matches(sequence);
        assert_eq!(gap_counts(pattern, 0, sequence), [exact; 2]);
    }
}

#[test]
fn whole_sequence_match() {
    assert_eq!(gap_counts(b"ACGT", 0, b"ACGT"), [1, 1]);
    assert_eq!(gap_counts(b"ACGT", 3, b"ACGT"), [1, 1]);
    assert_eq!(gap_counts(b"ACGT", 3, b"ACG"), [0, 0]);
}

#[test]
fn wide_gaps_agree() {
    let pattern = b"ACGTACGTAC";
    let sequence = b"ACGTACGTACACGT";
    for k in [100, 1000, 5000, 20_000] {
        assert_eq!(naive_gap_count(pattern, k, sequence), 1);
        assert_eq!(gap_counts(pattern, k, sequence), [1, 1], "k: {k}");
    }
}

#[test]
fn oversized_gaps_are_refused() {
    let k = gap_width(i64::MAX).unwrap();
    let refused = SearchError::TooManyStates {
        length:  2,
        k,
        maximum: MAX_GAP_STATES,
    };

    assert_eq!(GapDfa::preprocess(b"AG", k).err(), Some(refused.clone()));
    assert_eq!(GapRegex::preprocess(b"AG", k).err(), Some(refused));
    assert_eq!(gap_counts(b"A", k, b"AAT"), [2, 2]);

    let too_wide = MAX_GAP_STATES / 9;
    assert!(GapDfa::preprocess(b"ACGTACGTAC", too_wide).is_err());
    assert!(GapRegex::preprocess(b"ACGTACGTAC", too_wide).is_err());
}

#[test]
fn registry_by_name() {
    for name in ["dfa_gap", "regexp"] {
        let algorithm: Algorithm = name.parse().unwrap();
        assert!(algorithm.is_gapped());
        let data = algorithm.preprocess(b"AG", 1).unwrap();
        assert_eq!(data.count_matches(b"ATG").as_slice(), &[1]);
    }
}

#[test]
fn negative_gap() {
    assert_eq!(gap_width(3), Ok(3));
    assert_eq!(gap_width(-1), Err(SearchError::NegativeGap(-1)));
}

#[cfg(feature = "rand")]
#[test]
fn random_agreement() {
    use seqmatch::generate::rand_sequence;

    for seed in 0..40 {
        let sequence = rand_sequence(b"ACGT", 300, seed);
        let pattern = rand_sequence(b"ACG", 1 + (seed as usize % 5), seed + 500);
        let k = seed as usize % 4;

        let expected = naive_gap_count(&pattern, k, &sequence);
        assert_eq!(
            gap_counts(&pattern, k, &sequence),
            [expected; 2],
            "seed: {seed}, pattern: {}, k: {k}",
            String::from_utf8_lossy(&pattern)
        );
    }
}
