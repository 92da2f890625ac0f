#![no_main]

use libfuzzer_sys::fuzz_target;

// Arbitrary witness bytes: extraction must not panic, any returned range must
// be in bounds, and zeroing must touch exactly that range.
fuzz_target!(|data: &[u8]| {
    let Ok(range) = sighash_lock::extract_witness_lock(data) else {
        return;
    };
    if range.end > data.len() || range.start > range.end {
        panic!("lock range out of bounds: {range:?} len={}", data.len());
    }

    let mut buf = data.to_vec();
    match sighash_lock::take_lock_field(&mut buf) {
        Ok(sig) => {
            if sig[..] != data[range.clone()] {
                panic!("extracted signature differs from lock bytes");
            }
            if buf[range.clone()].iter().any(|&b| b != 0) {
                panic!("lock not zeroed");
            }
            if buf[..range.start] != data[..range.start] || buf[range.end..] != data[range.end..] {
                panic!("bytes outside the lock changed");
            }
        }
        Err(_) => {
            if buf != data {
                panic!("buffer modified on error");
            }
        }
    }
});
