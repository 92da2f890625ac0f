use crate::config::LockConfig;
use crate::constants::{MAX_WITNESS_SIZE, ONE_BATCH_SIZE};
use crate::error::{ErrorCode, LockError};
use crate::host::{LedgerHost, Source, SysError};
use crate::sighash::SighashHasher;

/// Loads witness #0 of the script group into `buf` and returns its length.
pub fn load_first_witness<H: LedgerHost + ?Sized>(
    host: &H,
    config: &LockConfig,
    buf: &mut [u8; MAX_WITNESS_SIZE],
) -> Result<usize, LockError> {
    let len = host.load_witness(buf, 0, 0, Source::GroupInput)?;
    if len > config.witness_bound() {
        return Err(LockError::new(
            ErrorCode::SyscallError,
            "witness exceeds max witness size",
        ));
    }
    Ok(len)
}

/// Reads witnesses through a fixed batch buffer and feeds them to a hasher
/// without holding a whole witness in memory.
pub struct WitnessSource<'a, H: LedgerHost + ?Sized> {
    host: &'a H,
    batch: [u8; ONE_BATCH_SIZE],
}

impl<'a, H: LedgerHost + ?Sized> WitnessSource<'a, H> {
    pub fn new(host: &'a H) -> Self {
        Self {
            host,
            batch: [0u8; ONE_BATCH_SIZE],
        }
    }

    /// Hashes `le64(len) ‖ witness` for `(index, source)`.
    ///
    /// Returns `Ok(None)` when `index` is past the end of the set; that is the
    /// loop terminator, not a failure.
    pub fn stream(
        &mut self,
        index: usize,
        source: Source,
        hasher: &mut SighashHasher,
    ) -> Result<Option<usize>, LockError> {
        let len = match self.host.load_witness(&mut self.batch, 0, index, source) {
            Ok(len) => len,
            Err(SysError::IndexOutOfBound) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        hasher.update_witness_len(len as u64);

        let mut offset = len.min(ONE_BATCH_SIZE);
        hasher.update(&self.batch[..offset]);
        while offset < len {
            let remaining = self
                .host
                .load_witness(&mut self.batch, offset, index, source)?;
            if remaining != len - offset {
                return Err(LockError::new(
                    ErrorCode::SyscallError,
                    "witness length changed between batches",
                ));
            }
            let read = remaining.min(ONE_BATCH_SIZE);
            hasher.update(&self.batch[..read]);
            offset += read;
        }
        Ok(Some(len))
    }
}
