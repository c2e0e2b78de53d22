use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::time::Instant;

use anagrams::config::{DictionaryConfig, DEFAULT_MAX_WORD_LENGTH, DEFAULT_MIN_NUM_ANAGRAMS, DEFAULT_MIN_WORD_LENGTH};
use anagrams::corpus::{Corpus, LoadPolicy};
use anagrams::dictionary::{AnagramDictionary, DictionaryError};
use anagrams::picker::PickError;

/// Anagram dictionary and starter-word picker
#[derive(Parser, Debug)]
#[command(author, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
struct Cli {
    /// Path to the word list file (one word per line)
    #[arg(
        short,
        long,
        global = true,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    word_list: String,

    /// Shortest starter-word length
    #[arg(long = "min-length", global = true, default_value_t = DEFAULT_MIN_WORD_LENGTH)]
    min_word_length: usize,

    /// Longest starter-word length
    #[arg(long = "max-length", global = true, default_value_t = DEFAULT_MAX_WORD_LENGTH)]
    max_word_length: usize,

    /// Fewest one-letter-extension anagrams a starter word needs
    #[arg(short = 'a', long = "min-anagrams", global = true, default_value_t = DEFAULT_MIN_NUM_ANAGRAMS)]
    min_anagrams_for_starter: usize,

    /// Seed for reproducible starter picks
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Skip words with non-letter characters instead of failing
    #[arg(long, global = true)]
    lenient: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the corpus words that are anagrams of WORD
    Anagrams { word: String },
    /// List the corpus words formed by adding one letter to WORD
    Extend { word: String },
    /// Check whether CANDIDATE is an acceptable guess for BASE
    Check { candidate: String, base: String },
    /// Pick starter words in succession, one letter longer each time
    Starters {
        /// How many starter words to pick
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,
    },
    /// Print corpus and starter-bucket statistics
    Stats,
}

/// Entry point of the anagrams CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    anagrams::log::init_logger_from_env();

    if let Err(e) = try_main() {
        if let Some(dict_err) = e.downcast_ref::<DictionaryError>() {
            eprintln!("Error: {}", dict_err.display_detailed());
        } else if let Some(pick_err) = e.downcast_ref::<PickError>() {
            eprintln!("Error: {}", pick_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the anagrams CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the word list from disk.
/// 3. Build the dictionary (index, buckets, starter filter).
/// 4. Run the requested subcommand, printing results on stdout.
/// 5. Print timings on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let policy = if cli.lenient { LoadPolicy::Lenient } else { LoadPolicy::Strict };
    let config = DictionaryConfig {
        min_word_length: cli.min_word_length,
        max_word_length: cli.max_word_length,
        min_anagrams_for_starter: cli.min_anagrams_for_starter,
    };

    // 1. Load the word list
    let t_load = Instant::now();
    let corpus = Corpus::load_from_path(&cli.word_list, policy).map_err(DictionaryError::from)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    // 2. Build the dictionary
    let t_build = Instant::now();
    let mut dictionary = match cli.seed {
        Some(seed) => AnagramDictionary::with_seed(&corpus, config, seed)?,
        None => AnagramDictionary::new(&corpus, config)?,
    };
    let build_secs = t_build.elapsed().as_secs_f64();

    // 3. Answer the query
    match &cli.command {
        Command::Anagrams { word } => {
            for anagram in dictionary.anagrams_of(word) {
                println!("{anagram}");
            }
        }
        Command::Extend { word } => {
            for extension in dictionary.extensions_of(word) {
                println!("{extension}");
            }
        }
        Command::Check { candidate, base } => {
            let verdict = if dictionary.is_acceptable_guess(candidate, base) { "yes" } else { "no" };
            println!("{verdict}");
        }
        Command::Starters { count } => {
            for _ in 0..*count {
                let starter = dictionary.pick_starter_word()?;
                let answers = dictionary.extensions_of(&starter);
                println!("{starter} ({} answers)", answers.len());
            }
        }
        Command::Stats => {
            println!("words: {}", dictionary.word_count());
            println!("signatures: {}", dictionary.signature_count());
            for stats in &dictionary.filter_report().buckets {
                println!("length {}: {} starters ({} filtered out)", stats.length, stats.kept, stats.removed);
            }
        }
    }

    // 4. Print diagnostics to stderr
    eprintln!(
        "Loaded {} words in {:.3}s; built dictionary in {:.3}s.",
        corpus.words.len(),
        load_secs,
        build_secs
    );

    Ok(())
}
