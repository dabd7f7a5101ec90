#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Loading either succeeds or reports warnings; it never panics
        let _ = camp::load_model(content);
    }
});
