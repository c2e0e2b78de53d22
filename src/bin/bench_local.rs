//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of dictionary construction and queries on *your* machine.
//! - Loads the word list once, then builds the dictionary several times and
//!   reports the median, followed by a full `extensions_of` sweep over the corpus.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - This is *not* Criterion. It's quick and convenient, not statistically rigorous.
//! - I/O (printing) is kept outside the timed sections.
//! - One warm-up build is done (not included in timing).

use anagrams::config::{DictionaryConfig, DEFAULT_MIN_NUM_ANAGRAMS};
use anagrams::corpus::{Corpus, LoadPolicy};
use anagrams::dictionary::AnagramDictionary;
use clap::Parser;
use std::hint::black_box;
use std::time::Instant;

/// Simple local benchmark runner: load word list once, time builds and queries.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the word list file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    word_list: String,

    /// Fewest one-letter-extension anagrams a starter word needs
    #[arg(short = 'a', long = "min-anagrams", default_value_t = DEFAULT_MIN_NUM_ANAGRAMS)]
    min_anagrams_for_starter: usize,

    /// Number of repeats per phase (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn pluralizer(count: usize, singular: String, plural: Option<String>) -> String {
    if count == 1 {
        singular
    } else {
        plural.unwrap_or_else(|| singular + "s")
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    anagrams::log::init_logger_from_env();
    let config = DictionaryConfig { min_anagrams_for_starter: cli.min_anagrams_for_starter, ..Default::default() };

    // Load the word list once. This I/O is *not* included in later timings.
    eprintln!("Loading word list from: {}", cli.word_list);
    let t_load = Instant::now();
    let corpus = Corpus::load_from_path(&cli.word_list, LoadPolicy::Lenient).map_err(|e| e.display_detailed())?;
    eprintln!("Loaded {} words in {:.3}s", corpus.words.len(), t_load.elapsed().as_secs_f64());

    // Warm-up build, untimed
    let dictionary = AnagramDictionary::with_seed(&corpus, config, 0)?;

    let mut build_times = Vec::with_capacity(cli.num_repeats);
    for rep in 0..cli.num_repeats {
        let t_build = Instant::now();
        let built = AnagramDictionary::with_seed(black_box(&corpus), config, 0)?;
        let build_secs = t_build.elapsed().as_secs_f64();
        let _keep = black_box(built.filter_report().total_kept());

        build_times.push(build_secs);
        eprintln!("  build {:>2}/{:>2}: {:.3}s", rep + 1, cli.num_repeats, build_secs);
    }

    let mut sweep_times = Vec::with_capacity(cli.num_repeats);
    let mut total_extensions = 0;
    for rep in 0..cli.num_repeats {
        let t_sweep = Instant::now();
        total_extensions = corpus.words.iter().map(|w| dictionary.extensions_of(black_box(w)).len()).sum();
        let sweep_secs = t_sweep.elapsed().as_secs_f64();

        sweep_times.push(sweep_secs);
        eprintln!("  sweep {:>2}/{:>2}: {:.3}s", rep + 1, cli.num_repeats, sweep_secs);
    }

    let starters = dictionary.filter_report().total_kept();
    eprintln!("\n==== Summary ====");
    eprintln!(
        "build: median {:.3}s over {} run(s); {} {}",
        median(build_times),
        cli.num_repeats,
        starters,
        pluralizer(starters, "starter word".into(), None)
    );
    eprintln!(
        "sweep: median {:.3}s over {} run(s); {} {} across {} words",
        median(sweep_times),
        cli.num_repeats,
        total_extensions,
        pluralizer(total_extensions, "extension".into(), None),
        corpus.words.len()
    );

    Ok(())
}
