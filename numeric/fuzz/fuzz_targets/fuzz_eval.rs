#![no_main]

use libfuzzer_sys::fuzz_target;
use numeric::{Compiler, UnitSystem};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for system in [UnitSystem::Generic, UnitSystem::Metric, UnitSystem::Imperial] {
            let mut compiler = Compiler::new();
            compiler.set_unit_out(system);

            if let Ok(solution) = compiler.eval(s, None) {
                let _ = compiler.format(&solution);
                let _ = compiler.eval(s, Some(&solution));
            }
        }
    }
});
