use blake2b_simd::{Params, State};

use crate::constants::{BLAKE160_BYTES, BLAKE2B_HASH_BYTES, CKB_HASH_PERSONALIZATION};

pub fn new_blake2b() -> State {
    Params::new()
        .hash_length(BLAKE2B_HASH_BYTES)
        .personal(CKB_HASH_PERSONALIZATION)
        .to_state()
}

pub fn blake2b_256(b: &[u8]) -> [u8; 32] {
    let mut h = new_blake2b();
    h.update(b);
    let out = h.finalize();
    let mut r = [0u8; 32];
    r.copy_from_slice(out.as_bytes());
    r
}

pub fn blake160(b: &[u8]) -> [u8; 20] {
    let mut r = [0u8; BLAKE160_BYTES];
    r.copy_from_slice(&blake2b_256(b)[..BLAKE160_BYTES]);
    r
}
