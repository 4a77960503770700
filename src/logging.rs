//! Browser console logging via `wasm_logger`.
//!
//! Only this crate's records are shown; reqwest and leptos internals are
//! filtered out by module prefix.

use log::{Level, LevelFilter};
use wasm_logger::Config;

/// Install the console logger at `level`. `off` installs nothing.
///
/// `wasm_logger` reports a second installation on `console.error` itself.
pub fn init_logging(level: LevelFilter) {
    if let Some(level) = console_level(level) {
        wasm_logger::init(Config::new(level).module_prefix(env!("CARGO_CRATE_NAME")));
    }
}

fn console_level(filter: LevelFilter) -> Option<Level> {
    filter.to_level()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_level() {
        assert_eq!(console_level(LevelFilter::Off), None);
        assert_eq!(console_level(LevelFilter::Error), Some(Level::Error));
        assert_eq!(console_level(LevelFilter::Debug), Some(Level::Debug));
    }
}
