use blake2b_simd::State;

use crate::constants::TX_HASH_BYTES;
use crate::error::{ErrorCode, LockError};
use crate::hash::new_blake2b;
use crate::host::{LedgerHost, Source};
use crate::witness_source::WitnessSource;

/// Incremental sighash-all message hasher.
///
/// Splitting input across `update` calls never changes the result.
pub struct SighashHasher {
    state: State,
}

impl Default for SighashHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl SighashHasher {
    pub fn new() -> Self {
        Self {
            state: new_blake2b(),
        }
    }

    pub fn update(&mut self, b: &[u8]) {
        self.state.update(b);
    }

    pub fn update_witness_len(&mut self, len: u64) {
        self.state.update(&len.to_le_bytes());
    }

    pub fn finalize(self) -> [u8; 32] {
        let out = self.state.finalize();
        let mut r = [0u8; 32];
        r.copy_from_slice(out.as_bytes());
        r
    }
}

pub fn load_tx_hash<H: LedgerHost + ?Sized>(host: &H) -> Result<[u8; 32], LockError> {
    let mut tx_hash = [0u8; TX_HASH_BYTES];
    let len = host.load_tx_hash(&mut tx_hash)?;
    if len != TX_HASH_BYTES {
        return Err(LockError::new(
            ErrorCode::SyscallError,
            "tx hash length mismatch",
        ));
    }
    Ok(tx_hash)
}

/// Computes the sighash-all message.
///
/// `witness0` must already have its lock bytes zeroed. The remaining group
/// witnesses follow in index order, then every witness past the input count.
pub fn sighash_all_digest<H: LedgerHost + ?Sized>(
    host: &H,
    witness0: &[u8],
) -> Result<[u8; 32], LockError> {
    let tx_hash = load_tx_hash(host)?;

    let mut hasher = SighashHasher::new();
    hasher.update(&tx_hash);
    hasher.update_witness_len(witness0.len() as u64);
    hasher.update(witness0);

    let mut witnesses = WitnessSource::new(host);
    let mut i = 1;
    while witnesses.stream(i, Source::GroupInput, &mut hasher)?.is_some() {
        i += 1;
    }
    let mut i = host.count_inputs();
    while witnesses.stream(i, Source::Input, &mut hasher)?.is_some() {
        i += 1;
    }

    Ok(hasher.finalize())
}
