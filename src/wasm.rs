use crate::config::DictionaryConfig;
use crate::corpus::{Corpus, LoadPolicy};
use crate::dictionary::{AnagramDictionary, DictionaryError};
use crate::errors::CorpusError;
use crate::log::init_logger;
use crate::picker::PickError;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "C001", "P001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<DictionaryError> for WasmError {
    fn from(e: DictionaryError) -> Self {
        // Report the wrapped error, which carries the specific code and help
        match &e {
            DictionaryError::Config(ce) => WasmError {
                code: ce.code().to_string(),
                message: ce.to_string(),
                description: ce.description().to_string(),
                details: ce.details().to_string(),
                help: ce.help().map(|s| s.to_string()),
            },
            DictionaryError::Corpus(ce) => WasmError::from(ce.as_ref()),
        }
    }
}

impl From<&CorpusError> for WasmError {
    fn from(e: &CorpusError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(|s| s.to_string()),
        }
    }
}

impl From<PickError> for WasmError {
    fn from(e: PickError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(|s| s.to_string()),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        // Format a comprehensive error message
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        // Create a JavaScript Error object with the formatted message
        js_sys::Error::new(&msg).into()
    }
}

fn serialization_error(what: &str, e: serde_wasm_bindgen::Error) -> JsValue {
    WasmError {
        code: "WASM002".to_string(),
        message: format!("serialization failed: {e}"),
        description: format!("Failed to serialize {what}"),
        details: format!("The {what} could not be converted to JavaScript format."),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
    .into()
}

fn words_to_js(words: &[Rc<str>]) -> Result<JsValue, JsValue> {
    let words: Vec<&str> = words.iter().map(|w| w.as_ref()).collect();
    to_value(&words).map_err(|e| serialization_error("word list", e))
}

/// Initialize logging with the specified debug setting.
///
/// # Arguments
/// * `debug_enabled` - If true, use Debug log level; if false, use Info level
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);

    log::info!("WASM module initialized (build {})", env!("GIT_HASH"));
}

/// Parse a newline-separated word list, skipping words with non-letter characters.
///
/// Returns the surviving words as a JavaScript array of strings.
#[wasm_bindgen]
pub fn parse_word_list(text: &str) -> Result<JsValue, JsValue> {
    let corpus = Corpus::parse_from_str(text, LoadPolicy::Lenient).map_err(|e| WasmError::from(e.as_ref()))?;
    to_value(&corpus.words).map_err(|e| serialization_error("word list", e))
}

/// One game session over one corpus, for a browser UI.
#[wasm_bindgen]
pub struct Game {
    dictionary: AnagramDictionary,
}

#[wasm_bindgen]
impl Game {
    /// JS entry: `new Game(words: string[], minLength, maxLength, minAnagrams, seed?)`
    #[wasm_bindgen(constructor)]
    pub fn new(
        words: JsValue,
        min_word_length: usize,
        max_word_length: usize,
        min_anagrams_for_starter: usize,
        seed: Option<u64>,
    ) -> Result<Game, JsValue> {
        let words: Vec<String> = serde_wasm_bindgen::from_value(words).map_err(|e| WasmError {
            code: "WASM001".to_string(),
            message: format!("words must be string[]: {e}"),
            description: "Invalid word-list format".to_string(),
            details: "The words parameter must be a JavaScript array of strings.".to_string(),
            help: Some("Ensure you're passing a valid string array, e.g., ['eat', 'tea', 'ate']".to_string()),
        })?;

        let corpus = Corpus::from_words(words);
        let config = DictionaryConfig { min_word_length, max_word_length, min_anagrams_for_starter };
        let dictionary = match seed {
            Some(seed) => AnagramDictionary::with_seed(&corpus, config, seed),
            None => AnagramDictionary::new(&corpus, config),
        }
        .map_err(WasmError::from)?;

        Ok(Game { dictionary })
    }

    #[wasm_bindgen(js_name = anagramsOf)]
    pub fn anagrams_of(&self, word: &str) -> Result<JsValue, JsValue> {
        words_to_js(self.dictionary.anagrams_of(word))
    }

    #[wasm_bindgen(js_name = extensionsOf)]
    pub fn extensions_of(&self, word: &str) -> Result<JsValue, JsValue> {
        words_to_js(&self.dictionary.extensions_of(word))
    }

    #[wasm_bindgen(js_name = isAcceptableGuess)]
    pub fn is_acceptable_guess(&self, candidate: &str, base: &str) -> bool {
        self.dictionary.is_acceptable_guess(candidate, base)
    }

    #[wasm_bindgen(js_name = pickStarterWord)]
    pub fn pick_starter_word(&mut self) -> Result<String, JsValue> {
        let word = self.dictionary.pick_starter_word().map_err(WasmError::from)?;
        Ok(word.to_string())
    }

    pub fn reset(&mut self) {
        self.dictionary.reset();
    }

    #[wasm_bindgen(js_name = currentTargetLength)]
    pub fn current_target_length(&self) -> usize {
        self.dictionary.current_target_length()
    }
}

/// Generate a debug report for troubleshooting.
///
/// This function creates a formatted debug report that users can copy/paste
/// when reporting issues. It includes the error message, the game settings,
/// and environment information.
#[wasm_bindgen]
pub fn get_debug_info(
    error_message: &str,
    word_count: usize,
    min_word_length: usize,
    max_word_length: usize,
    min_anagrams_for_starter: usize,
) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // NB: writing to a String never fails
    let _ = writeln!(&mut report, "=== ANAGRAMS DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));
    let _ = writeln!(&mut report, "Generated: {}", js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string()));
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{}", error_message);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Settings");
    let _ = writeln!(&mut report, "Word Count: {}", word_count);
    let _ = writeln!(&mut report, "Word Lengths: {}-{}", min_word_length, max_word_length);
    let _ = writeln!(&mut report, "Min Anagrams: {}", min_anagrams_for_starter);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {}", user_agent);
        }
        let _ = writeln!(&mut report, "Location: {}", window.location().href().unwrap_or_else(|_| "unknown".to_string()));
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}
