#![no_main]

use libfuzzer_sys::fuzz_target;
use sighash_lock::SighashHasher;

// First byte picks the chunk size; the digest must not depend on it.
fuzz_target!(|data: &[u8]| {
    let Some((&step, rest)) = data.split_first() else {
        return;
    };
    let step = usize::from(step).max(1);

    let mut whole = SighashHasher::new();
    whole.update(rest);

    let mut chunked = SighashHasher::new();
    for chunk in rest.chunks(step) {
        chunked.update(chunk);
    }

    if whole.finalize() != chunked.finalize() {
        panic!("chunked digest differs (step={step})");
    }
});
