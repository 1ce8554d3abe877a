#![no_main]

use keyphrase::prelude::Sampler;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any buffer, any range - should never panic, and in-range on success
    if let Ok(mut sampler) = Sampler::new(data) {
        for n in [2u32, 10, 26, 1000, u32::MAX] {
            if let Ok(value) = sampler.sample(n) {
                assert!(value < n);
            }
        }
    }
});
