#![no_main]

use libfuzzer_sys::fuzz_target;
use sighash_lock::{blake2b_256, LockConfig, VerificationContext};

// 32-byte digest followed by signature bytes: recovery must fail cleanly or
// produce a 33-byte compressed key.
fuzz_target!(|data: &[u8]| {
    if data.len() < 32 {
        return;
    }
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&data[..32]);

    let blob = [0u8; 32];
    let config = LockConfig {
        context_data_hash: blake2b_256(&blob),
        context_data_size: blob.len(),
        ..LockConfig::default()
    };
    let Ok(ctx) = VerificationContext::from_data(&blob, &config) else {
        panic!("context from matching blob rejected");
    };
    if let Ok(pubkey) = ctx.recover(&digest, &data[32..]) {
        if pubkey[0] != 0x02 && pubkey[0] != 0x03 {
            panic!("recovered key not compressed");
        }
    }
});
