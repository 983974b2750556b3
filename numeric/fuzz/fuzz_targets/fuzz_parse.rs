#![no_main]

use libfuzzer_sys::fuzz_target;
use numeric::Compiler;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let compiler = Compiler::new();

        if let Ok(tokens) = compiler.parse(s) {
            let _ = compiler.to_postfix(&tokens);
        }
    }
});
