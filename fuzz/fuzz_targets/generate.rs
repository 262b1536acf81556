#![no_main]

use extgen::{Manifest, generate_executor, scan};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz the manifest parser
        if let Ok(manifest) = serde_json::from_str::<Manifest>(s) {
            // If parsing succeeds, fuzz the scan and emit passes
            let outcome = scan(&manifest.extensions);
            let first = generate_executor(&outcome.startups);
            let second = generate_executor(&outcome.startups);
            assert_eq!(first, second);
        }
    }
});
