//! `WitnessArgs` molecule table: `{ lock: BytesOpt, input_type: BytesOpt,
//! output_type: BytesOpt }`.
//!
//! Only the header and the `BytesOpt`/`Bytes` framing are checked; the
//! contents of each field stay opaque.

use core::ops::Range;

use crate::constants::{MOLECULE_NUMBER_BYTES, SIGNATURE_BYTES, WITNESS_ARGS_FIELD_COUNT};
use crate::error::{ErrorCode, LockError};
use crate::wire_read::Reader;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WitnessArgs {
    pub lock: Option<Vec<u8>>,
    pub input_type: Option<Vec<u8>>,
    pub output_type: Option<Vec<u8>>,
}

impl WitnessArgs {
    pub fn with_lock(lock: Vec<u8>) -> Self {
        Self {
            lock: Some(lock),
            ..Self::default()
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let header = MOLECULE_NUMBER_BYTES * (WITNESS_ARGS_FIELD_COUNT + 1);
        let mut body = Vec::new();
        let mut offsets = [0usize; WITNESS_ARGS_FIELD_COUNT];
        for (i, field) in [&self.lock, &self.input_type, &self.output_type]
            .into_iter()
            .enumerate()
        {
            offsets[i] = header + body.len();
            if let Some(bytes) = field {
                body.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
                body.extend_from_slice(bytes);
            }
        }

        let mut out = Vec::with_capacity(header + body.len());
        out.extend_from_slice(&((header + body.len()) as u32).to_le_bytes());
        for off in offsets {
            out.extend_from_slice(&(off as u32).to_le_bytes());
        }
        out.extend_from_slice(&body);
        out
    }
}

/// Returns the range of the raw `lock` bytes inside `witness`.
///
/// The range indexes the caller's buffer, so it can be used to rewrite the
/// lock in place.
pub fn extract_witness_lock(witness: &[u8]) -> Result<Range<usize>, LockError> {
    let fields = witness_args_fields(witness)?;
    for field in &fields {
        verify_bytes_opt(&witness[field.clone()])?;
    }
    let lock = fields[0].clone();
    if lock.is_empty() {
        return Err(LockError::new(
            ErrorCode::EncodingError,
            "WitnessArgs lock is none",
        ));
    }
    Ok(lock.start + MOLECULE_NUMBER_BYTES..lock.end)
}

/// Copies the 65-byte signature out of witness #0 and zero-fills the lock
/// bytes in `witness` itself. The caller must hash this same buffer.
pub fn take_lock_field(witness: &mut [u8]) -> Result<[u8; SIGNATURE_BYTES], LockError> {
    let range = extract_witness_lock(witness)?;
    if range.len() != SIGNATURE_BYTES {
        return Err(LockError::new(
            ErrorCode::ArgumentLengthError,
            "witness lock is not a 65-byte signature",
        ));
    }
    let mut signature = [0u8; SIGNATURE_BYTES];
    signature.copy_from_slice(&witness[range.clone()]);
    witness[range].fill(0);
    Ok(signature)
}

fn witness_args_fields(b: &[u8]) -> Result<[Range<usize>; WITNESS_ARGS_FIELD_COUNT], LockError> {
    let mut r = Reader::new(b);
    let total_size = r.read_number()?;
    if total_size != b.len() {
        return Err(LockError::new(
            ErrorCode::EncodingError,
            "table total_size mismatch",
        ));
    }

    let first = r.read_number()?;
    if first % MOLECULE_NUMBER_BYTES != 0 || first < MOLECULE_NUMBER_BYTES * 2 {
        return Err(LockError::new(
            ErrorCode::EncodingError,
            "table header offset invalid",
        ));
    }
    if first / MOLECULE_NUMBER_BYTES - 1 != WITNESS_ARGS_FIELD_COUNT {
        return Err(LockError::new(
            ErrorCode::EncodingError,
            "WitnessArgs field count mismatch",
        ));
    }
    if first > total_size {
        return Err(LockError::new(
            ErrorCode::EncodingError,
            "table header exceeds total_size",
        ));
    }

    let mut offsets = [0usize; WITNESS_ARGS_FIELD_COUNT + 1];
    offsets[0] = first;
    for off in offsets.iter_mut().take(WITNESS_ARGS_FIELD_COUNT).skip(1) {
        *off = r.read_number()?;
    }
    offsets[WITNESS_ARGS_FIELD_COUNT] = total_size;
    if offsets.windows(2).any(|w| w[0] > w[1]) {
        return Err(LockError::new(
            ErrorCode::EncodingError,
            "table field offsets out of order",
        ));
    }

    Ok([
        offsets[0]..offsets[1],
        offsets[1]..offsets[2],
        offsets[2]..offsets[3],
    ])
}

fn verify_bytes_opt(field: &[u8]) -> Result<(), LockError> {
    if field.is_empty() {
        return Ok(());
    }
    let mut r = Reader::new(field);
    let item_count = r.read_number()?;
    if field.len() - r.offset() != item_count {
        return Err(LockError::new(
            ErrorCode::EncodingError,
            "Bytes item count mismatch",
        ));
    }
    Ok(())
}


// ---------------------------------------------------------------------------
// Kani bounded model checking proofs
// ---------------------------------------------------------------------------
#[cfg(kani)]
mod verification {
    use super::*;

    /// extract_witness_lock never panics and only returns in-bounds ranges.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_extract_witness_lock_in_bounds() {
        let b: [u8; 24] = kani::any();
        if let Ok(range) = extract_witness_lock(&b) {
            assert!(range.start <= range.end);
            assert!(range.end <= b.len());
        }
    }
}
