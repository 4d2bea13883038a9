#![no_main]

use libfuzzer_sys::fuzz_target;
use minic::frontend::{lexer, pipeline};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // The tokenizer never fails; it always ends with Eof
        let tokens = lexer::lex(s);
        assert!(!tokens.is_empty());
        // Parse and analyze; recovery must terminate within the error budget
        let output = pipeline::run(s, &pipeline::FrontendConfig::default());
        assert!(output.error_count() <= minic::diagnostics::DEFAULT_MAX_ERRORS);
    }
});
