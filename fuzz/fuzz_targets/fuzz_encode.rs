#![no_main]

use keyphrase::prelude::{normalize_label, Proquint, WordEncoder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Encoding arbitrary bytes should never panic and stays 5 letters/word
    let encoded = Proquint.encode(data);
    if !data.is_empty() {
        assert!(encoded.split('-').all(|word| word.len() == 5));
    }

    // Label normalization should never panic and is idempotent
    let label = String::from_utf8_lossy(data);
    let once = normalize_label(&label);
    assert_eq!(normalize_label(&once), once);
});
