//! Logger setup shared by the CLI, the aux binaries and the WASM build.
//!
//! Natively, debug output is switched on with `ANAGRAMS_DEBUG` and can be tuned
//! further with `RUST_LOG`. In the browser the page passes the flag to
//! [`init_logger`] through `initialize`.

#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Environment variable that turns on debug logging for native builds.
pub const DEBUG_ENV_VAR: &str = "ANAGRAMS_DEBUG";

/// Whether a value of [`DEBUG_ENV_VAR`] asks for debug output.
///
/// Unset, empty, `0`, `false` and `off` mean no; anything else means yes.
#[cfg(not(target_arch = "wasm32"))]
fn debug_requested(value: Option<&str>) -> bool {
    value.is_some_and(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "" | "0" | "false" | "off"))
}

/// Initialize logging from [`DEBUG_ENV_VAR`].
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logger_from_env() {
    let value = std::env::var(DEBUG_ENV_VAR).ok();
    init_logger(debug_requested(value.as_deref()));
}

/// Initialize logging at `Debug` level when `debug_enabled`, `Info` otherwise.
///
/// Natively, `RUST_LOG` overrides the level; output carries no timestamp or
/// module path. On WASM, records go to the browser console.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled { log::Level::Debug } else { log::Level::Info };

        if let Err(e) = console_log::init_with_level(level) {
            // console_log is unavailable; report through the raw console and carry on
            let msg = format!("Failed to initialize console_log: {e}. Logging will be unavailable.");
            web_sys::console::error_1(&msg.into());
            return;
        }
        log::debug!("Anagrams logging to the browser console at {level:?} level");
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let level = if debug_enabled { LevelFilter::Debug } else { LevelFilter::Info };

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }

        if builder.try_init().is_ok() {
            log::debug!("Anagrams logging at {level:?} level ({DEBUG_ENV_VAR} to change)");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn test_debug_requested() {
        assert!(!debug_requested(None));
        assert!(!debug_requested(Some("")));
        assert!(!debug_requested(Some("0")));
        assert!(!debug_requested(Some("FALSE")));
        assert!(!debug_requested(Some(" off ")));
        assert!(debug_requested(Some("1")));
        assert!(debug_requested(Some("yes")));
    }

    #[test]
    fn test_init_logger_twice_is_harmless() {
        init_logger(false);
        init_logger(true);
        log::info!("still logging");
    }
}
