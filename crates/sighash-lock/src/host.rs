//! Ledger syscall surface consumed by the lock.
//!
//! Buffer-filling calls follow the ledger's partial-loading convention: at
//! most `buf.len()` bytes starting at `offset` are copied into `buf`, and the
//! return value is the full length available from `offset`, which may be
//! larger than what was copied.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    /// All inputs of the transaction, indexed by input position.
    Input,
    /// Inputs that share the currently executing lock script.
    GroupInput,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SysError {
    IndexOutOfBound,
    ItemMissing,
    LengthNotEnough(usize),
    Encoding,
    Unknown(u64),
}

pub trait LedgerHost {
    fn load_witness(
        &self,
        buf: &mut [u8],
        offset: usize,
        index: usize,
        source: Source,
    ) -> Result<usize, SysError>;

    fn load_tx_hash(&self, buf: &mut [u8]) -> Result<usize, SysError>;

    fn count_inputs(&self) -> usize;

    fn find_dependency_by_content_hash(&self, data_hash: &[u8; 32]) -> Result<usize, SysError>;

    fn load_cell_dep_data(
        &self,
        buf: &mut [u8],
        offset: usize,
        index: usize,
    ) -> Result<usize, SysError>;
}

/// Copies the `offset..` window of `data` into `buf` with partial-loading
/// semantics. Shared by in-memory hosts.
pub fn load_partial(buf: &mut [u8], offset: usize, data: &[u8]) -> Result<usize, SysError> {
    if offset > data.len() {
        return Err(SysError::LengthNotEnough(data.len()));
    }
    let remaining = &data[offset..];
    let n = remaining.len().min(buf.len());
    buf[..n].copy_from_slice(&remaining[..n]);
    Ok(remaining.len())
}
