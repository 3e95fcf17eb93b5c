#![no_main]

use libfuzzer_sys::fuzz_target;
use lifeline::config::LifelineConfig;

fuzz_target!(|data: &[u8]| {
    // Convert arbitrary bytes to UTF-8 string
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing and validation must reject bad input without panicking
        let _ = LifelineConfig::from_toml_str(input);
    }
});
