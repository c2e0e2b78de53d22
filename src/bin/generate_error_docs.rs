//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the error types via their `code()`, `description()`,
//! `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use anagrams::dictionary::DictionaryError;
use anagrams::errors::{ConfigError, CorpusError};
use anagrams::picker::PickError;
use std::fmt::Write;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($out:expr, $errors:expr) => {
        for error in $errors {
            let code = error.code();
            let description = error.description();
            let details = error.details();
            let help = error.help();

            writeln!($out, "### {}: {}\n", code, description)?;
            writeln!($out, "**Details:** {}\n", details)?;

            if let Some(help_text) = help {
                writeln!($out, "**How to fix:**")?;
                writeln!($out, "```")?;
                writeln!($out, "{}", help_text)?;
                writeln!($out, "```\n")?;
            }

            writeln!($out, "**Example error message:**")?;
            writeln!($out, "```")?;
            writeln!($out, "{}", error)?;
            writeln!($out, "```\n")?;

            writeln!($out, "**Detailed format:**")?;
            writeln!($out, "```")?;
            writeln!($out, "{}", error.display_detailed())?;
            writeln!($out, "```\n")?;

            writeln!($out, "---\n")?;
        }
    };
}

/// Helper to create all `CorpusError` variants for documentation
fn all_corpus_error_variants() -> Vec<CorpusError> {
    vec![
        CorpusError::InvalidWordChars { line: 12, word: "lamp post".to_string(), invalid_char: ' ' },
        CorpusError::EmptyCorpus,
        CorpusError::Io {
            context: "'words.txt'".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        },
    ]
}

/// Helper to create all `ConfigError` variants for documentation
fn all_config_error_variants() -> Vec<ConfigError> {
    vec![
        ConfigError::ZeroMinLength,
        ConfigError::ContradictoryBounds { min: 7, max: 3 },
    ]
}

/// Helper to create all `DictionaryError` variants for documentation
fn all_dictionary_error_variants() -> Vec<DictionaryError> {
    vec![
        DictionaryError::Config(ConfigError::ContradictoryBounds { min: 7, max: 3 }),
        DictionaryError::Corpus(Box::new(CorpusError::EmptyCorpus)),
    ]
}

fn all_pick_error_variants() -> Vec<PickError> {
    vec![PickError::ExhaustedCandidates { length: 6 }]
}

fn render() -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "# Error Code Reference\n")?;
    writeln!(out, "**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n")?;

    writeln!(out, "## Table of Contents\n")?;
    writeln!(out, "- [Dictionary Errors (D001–D002)](#dictionary-errors)")?;
    writeln!(out, "- [Corpus Errors (C001–C003)](#corpus-errors)")?;
    writeln!(out, "- [Configuration Errors (K001–K002)](#configuration-errors)")?;
    writeln!(out, "- [Picker Errors (P001)](#picker-errors)\n")?;

    writeln!(out, "## Dictionary Errors\n")?;
    writeln!(out, "Top-level errors from building a dictionary. These wrap corpus or configuration errors.\n")?;
    generate_error_docs!(out, all_dictionary_error_variants());

    writeln!(out, "## Corpus Errors\n")?;
    writeln!(out, "Errors that occur while reading and validating a word list.\n")?;
    generate_error_docs!(out, all_corpus_error_variants());

    writeln!(out, "## Configuration Errors\n")?;
    writeln!(out, "Errors from validating word-length bounds.\n")?;
    generate_error_docs!(out, all_config_error_variants());

    writeln!(out, "## Picker Errors\n")?;
    writeln!(out, "Errors from picking a starter word during a game session.\n")?;
    generate_error_docs!(out, all_pick_error_variants());

    writeln!(out, "## Error Display Formats\n")?;
    writeln!(out, "### Simple Format")?;
    writeln!(out, "```")?;
    writeln!(out, "Error: <message>")?;
    writeln!(out, "```\n")?;
    writeln!(out, "### Detailed Format (via `display_detailed()`)")?;
    writeln!(out, "```")?;
    writeln!(out, "<message> (<code>)")?;
    writeln!(out, "<help text if available>")?;
    writeln!(out, "```")?;

    Ok(out)
}

fn main() -> Result<(), std::fmt::Error> {
    print!("{}", render()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_is_documented() {
        let docs = render().unwrap();
        for code in ["D001", "D002", "C001", "C002", "C003", "K001", "K002", "P001"] {
            assert!(docs.contains(&format!("### {code}: ")), "{code} missing from generated docs");
        }
    }

    #[test]
    fn test_help_sections_present() {
        let docs = render().unwrap();
        assert!(docs.contains("**How to fix:**"));
        assert!(docs.contains("--min-anagrams"));
        assert!(docs.contains("caused by: "));
    }
}
