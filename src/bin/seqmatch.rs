const PROGRAM: &str = "seqmatch";

const USAGE: &str = "Usage:
\tseqmatch run <algorithm> <sequences> <patterns> [answers] [-k K]
\tseqmatch answers <algorithm> <sequences> <patterns> [-k K]
\tseqmatch count <algorithm> <pattern>[,<pattern>...] <sequence> [-k K]
\tseqmatch generate <sequences> <patterns> [-s SEED] [-c COUNT] [-l LENGTH] [-v VARIANCE]
\t                  [-pc COUNT] [-pl LENGTH] [-pv VARIANCE]

Algorithms: kmp, boyer_moore, shift_or, aho_corasick, dfa_gap (-k), regexp (-k)";

use seqmatch::{
    data::{Corpus, err::OrFail},
    prelude::*,
    run::required_gap,
    search::gap_width,
};
use std::{env, process, str::FromStr};

fn finish(message: &str) -> ! {
    eprintln!("\n{message}\n");
    process::exit(0);
}

fn die(message: &str) -> ! {
    eprintln!("\n{PROGRAM} ERROR! {message}\n");
    process::exit(1);
}

/// Command-line arguments split into positionals and `-flag value` options.
struct Args {
    positional: Vec<String>,
    options:    Vec<(String, String)>,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Self {
        let mut positional = Vec::new();
        let mut options = Vec::new();

        while let Some(arg) = args.next() {
            if arg == "-h" || arg == "--help" {
                finish(USAGE);
            } else if arg.len() > 1 && arg.starts_with('-') {
                match args.next() {
                    Some(value) => options.push((arg, value)),
                    None => die(&format!("Missing value for option '{arg}'")),
                }
            } else {
                positional.push(arg);
            }
        }

        Args { positional, options }
    }

    fn option<T: FromStr>(&self, names: &[&str]) -> Option<T> {
        let (name, value) = self.options.iter().rev().find(|(name, _)| names.contains(&name.as_str()))?;
        match value.parse() {
            Ok(value) => Some(value),
            Err(_) => die(&format!("Invalid value '{value}' for option '{name}'")),
        }
    }

    /// The gap width, rejecting negative values.
    fn k(&self) -> Option<usize> {
        self.option::<i64>(&["-k", "--k"]).map(|k| gap_width(k).unwrap_or_fail())
    }

    fn check_options(&self, allowed: &[&str]) {
        if let Some((name, _)) = self.options.iter().find(|(name, _)| !allowed.contains(&name.as_str())) {
            die(&format!("Unknown option '{name}'\n\n{USAGE}"));
        }
    }

    fn algorithm(&self) -> Algorithm {
        self.positional[0].parse::<Algorithm>().unwrap_or_fail()
    }
}

fn run_command(args: &Args) {
    if !(3..=4).contains(&args.positional.len()) {
        finish(USAGE);
    }
    args.check_options(&["-k", "--k"]);

    let config = RunConfig::new(
        args.algorithm(),
        args.positional[1].clone(),
        args.positional[2].clone(),
        args.positional.get(3).cloned(),
        args.k(),
    )
    .unwrap_or_fail();

    let report = config.execute().unwrap_or_fail();
    print!("{report}");

    for mismatch in report.mismatches() {
        eprintln!("{mismatch}");
    }

    process::exit(i32::try_from(report.mismatches().len()).unwrap_or(i32::MAX));
}

fn answers_command(args: &Args) {
    if args.positional.len() != 3 {
        finish(USAGE);
    }
    args.check_options(&["-k", "--k"]);

    let algorithm = args.algorithm();
    let k = required_gap(algorithm, args.k()).unwrap_or_fail();
    let corpus = Corpus::from_files(&args.positional[1], &args.positional[2], None, None).unwrap_or_fail();

    let table = AnswerTable::tabulate(algorithm, corpus.patterns(), corpus.sequences(), k).unwrap_or_fail();
    print!("{table}");
}

fn count_command(args: &Args) {
    if args.positional.len() != 3 {
        finish(USAGE);
    }
    args.check_options(&["-k", "--k"]);

    let algorithm = args.algorithm();
    let k = required_gap(algorithm, args.k()).unwrap_or_fail();
    let sequence = args.positional[2].as_bytes();

    let patterns: Vec<&str> = if algorithm.is_multi_pattern() {
        args.positional[1].split(',').collect()
    } else {
        vec![args.positional[1].as_str()]
    };

    let mut counts = Vec::with_capacity(patterns.len());
    for data in algorithm.preprocess_set(&patterns, k).unwrap_or_fail() {
        counts.extend_from_slice(data.count_matches(sequence).as_slice());
    }

    for (pattern, count) in patterns.iter().zip(counts) {
        println!("{pattern}\t{count}");
    }
}

#[cfg(feature = "rand")]
fn generate_command(args: &Args) {
    use seqmatch::data::write_sequences;
    use std::{fs::File, io::BufWriter};

    if args.positional.len() != 2 {
        finish(USAGE);
    }
    args.check_options(&["-s", "-c", "-l", "-v", "-pc", "-pl", "-pv"]);

    let seed = args.option(&["-s"]).unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs())
    });
    let count = args.option(&["-c"]).unwrap_or(100_000);
    let length = args.option(&["-l"]).unwrap_or(1024);
    let variance = args.option(&["-v"]).unwrap_or(0);
    let pattern_count = args.option(&["-pc"]).unwrap_or(100);
    let pattern_length = args.option(&["-pl"]).unwrap_or(10);
    let pattern_variance = args.option(&["-pv"]).unwrap_or(0);

    let sequences = rand_sequences(count, length, variance, seed);
    let patterns = rand_patterns(&sequences, pattern_count, pattern_length, pattern_variance, seed ^ 1);
    if patterns.len() < pattern_count {
        eprintln!(
            "{PROGRAM} WARNING! Only {} of {pattern_count} distinct patterns could be sampled",
            patterns.len()
        );
    }

    for (path, data) in [(&args.positional[0], &sequences), (&args.positional[1], &patterns)] {
        File::create(path)
            .and_then(|file| write_sequences(BufWriter::new(file), data))
            .unwrap_or_die(&format!("Couldn't write {path}"));
    }
}

fn main() {
    let mut args = env::args().skip(1);
    let Some(command) = args.next() else {
        finish(USAGE);
    };
    let args = Args::parse(args);

    match command.as_str() {
        "run" => run_command(&args),
        "answers" => answers_command(&args),
        "count" => count_command(&args),
        #[cfg(feature = "rand")]
        "generate" => generate_command(&args),
        "-h" | "--help" => finish(USAGE),
        _ => die(&format!("Unknown command '{command}'\n\n{USAGE}")),
    }
}
