use seqmatch::{
    data::{AnswerTable, Corpus, err::CorpusError, read_answers, write_sequences},
    run::{RunConfig, RunError, run},
    search::Algorithm,
};
use std::{fs, path::PathBuf};

/// A scratch directory removed when dropped.
struct Scratch(PathBuf);

impl Scratch {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("seqmatch-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        Scratch(dir)
    }

    fn write(&self, file: &str, contents: &[u8]) -> String {
        let path = self.0.join(file);
        fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

const SEQUENCES: &[u8] = b"4 12\nACGTACGTACGT\nAAAAAA\nATTGAGTCAG\nGGGG\n";
const PATTERNS: &[u8] = b"3 4\nACGT\nAA\nAG\n";

#[test]
fn every_algorithm_matches_generated_answers() {
    let scratch = Scratch::new("answers");
    let sequences = scratch.write("sequences.txt", SEQUENCES);
    let patterns = scratch.write("patterns.txt", PATTERNS);

    for algorithm in Algorithm::ALL {
        let k = algorithm.is_gapped().then_some(2);
        let plain = Corpus::from_files(&sequences, &patterns, None, None).unwrap();
        let table = AnswerTable::tabulate(algorithm, plain.patterns(), plain.sequences(), k.unwrap_or(0)).unwrap();
        let answers = scratch.write(&format!("answers-{algorithm}.txt"), table.to_string().as_bytes());

        let config = RunConfig::new(algorithm, sequences.clone(), patterns.clone(), Some(answers), k).unwrap();
        let report = config.execute().unwrap();
        assert_eq!(report.algorithm(), algorithm.name());
        assert_eq!(report.k(), k);
        assert!(report.mismatches().is_empty(), "{algorithm}: {:?}", report.mismatches());
    }
}

#[test]
fn exact_algorithms_agree_with_reference_table() {
    let corpus = Corpus::new(
        seqmatch::data::read_sequences(SEQUENCES).unwrap(),
        seqmatch::data::read_patterns(PATTERNS).unwrap(),
        Some(read_answers(b"3 4\n3,0,0,0\n0,5,0,0\n0,0,2,0\n".as_slice(), false).unwrap()),
    )
    .unwrap();

    for algorithm in Algorithm::ALL.into_iter().filter(|a| !a.is_gapped()) {
        let report = run(algorithm, &corpus, None).unwrap();
        assert!(report.mismatches().is_empty(), "{algorithm}: {:?}", report.mismatches());
    }
}

#[test]
fn mismatches_are_reported_one_based() {
    let corpus = Corpus::new(
        vec![b"AAAA".to_vec(), b"CCCC".to_vec()],
        vec![b"AA".to_vec()],
        Some(read_answers(b"1 2\n3,1\n".as_slice(), false).unwrap()),
    )
    .unwrap();

    let report = run(Algorithm::Kmp, &corpus, None).unwrap();
    let lines: Vec<String> = report.mismatches().iter().map(ToString::to_string).collect();
    assert_eq!(lines, vec!["Pattern 1 mismatch against sequence 2 (0 != 1)"]);
}

#[test]
fn answers_for_another_gap_are_refused() {
    let scratch = Scratch::new("gap");
    let sequences = scratch.write("sequences.txt", SEQUENCES);
    let patterns = scratch.write("patterns.txt", PATTERNS);
    let answers = scratch.write("answers.txt", b"3 4 1\n0,0,0,0\n0,0,0,0\n0,0,0,0\n");

    assert!(matches!(
        Corpus::from_files(&sequences, &patterns, Some(&answers), Some(2)),
        Err(CorpusError::GapMismatch { expected: 2, found: 1 })
    ));

    let config = RunConfig::new(Algorithm::GapDfa, sequences, patterns, Some(answers), Some(2)).unwrap();
    assert!(matches!(config.execute(), Err(RunError::Corpus(_))));
}

#[test]
fn errors_name_the_file() {
    let scratch = Scratch::new("errors");
    let sequences = scratch.write("sequences.txt", b"5 12\nACGT\n");
    let patterns = scratch.write("patterns.txt", PATTERNS);

    let error = Corpus::from_files(&sequences, &patterns, None, None).unwrap_err();
    assert!(matches!(error, CorpusError::InFile(ref path, _) if *path == sequences));
    assert!(error.to_string().contains("expected 5 but read 1"));
}

#[test]
fn written_corpus_reads_back() {
    let scratch = Scratch::new("write");
    let data = vec![b"ACGTT".to_vec(), b"GA".to_vec()];

    let mut out = Vec::new();
    write_sequences(&mut out, &data).unwrap();
    let path = scratch.write("sequences.txt", &out);

    let corpus = Corpus::from_files(&path, &path, None, None).unwrap();
    assert_eq!(corpus.sequences(), data.as_slice());
    assert_eq!(corpus.patterns(), data.as_slice());
}

#[cfg(feature = "rand")]
#[test]
fn generated_corpus_validates() {
    use seqmatch::generate::{rand_patterns, rand_sequences};

    let sequences = rand_sequences(30, 256, 16, 11);
    let patterns = rand_patterns(&sequences, 8, 6, 1, 12);

    let reference = AnswerTable::tabulate(Algorithm::Kmp, &patterns, &sequences, 0).unwrap();
    assert!(reference.rows().iter().all(|row| row.iter().sum::<usize>() > 0));

    let corpus = Corpus::new(sequences, patterns, Some(reference)).unwrap();
    for algorithm in [Algorithm::BoyerMoore, Algorithm::ShiftOr, Algorithm::AhoCorasick] {
        assert!(run(algorithm, &corpus, None).unwrap().mismatches().is_empty());
    }
    assert!(run(Algorithm::GapDfa, &corpus, Some(0)).unwrap().mismatches().is_empty());
}
