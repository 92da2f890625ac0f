//! In-memory ledger used by tests, benches and the CLI fixture runner.

use core::cell::Cell;

use secp256k1::SecretKey;

use crate::constants::SIGNATURE_BYTES;
use crate::error::{ErrorCode, LockError};
use crate::hash::blake2b_256;
use crate::host::{load_partial, LedgerHost, Source, SysError};
use crate::secp::sign_recoverable;
use crate::sighash::sighash_all_digest;
use crate::witness_args::{extract_witness_lock, take_lock_field};

#[derive(Clone, Debug, Default)]
pub struct MemoryHost {
    pub tx_hash: Vec<u8>,
    pub input_count: usize,
    /// Transaction witnesses, indexed like inputs.
    pub witnesses: Vec<Vec<u8>>,
    /// Input positions that belong to the executing script group.
    pub group_inputs: Vec<usize>,
    pub cell_deps: Vec<Vec<u8>>,
    /// Forced failures for `(index, source)` witness reads.
    pub witness_faults: Vec<(usize, Source, SysError)>,
    dep_lookups: Cell<usize>,
}

impl MemoryHost {
    pub fn new(tx_hash: [u8; 32], input_count: usize) -> Self {
        Self {
            tx_hash: tx_hash.to_vec(),
            input_count,
            ..Self::default()
        }
    }

    pub fn with_witnesses(mut self, witnesses: Vec<Vec<u8>>) -> Self {
        self.witnesses = witnesses;
        self
    }

    pub fn with_group_inputs(mut self, group_inputs: Vec<usize>) -> Self {
        self.group_inputs = group_inputs;
        self
    }

    pub fn with_cell_dep(mut self, data: Vec<u8>) -> Self {
        self.cell_deps.push(data);
        self
    }

    /// Number of content-hash lookups served so far.
    pub fn dep_lookups(&self) -> usize {
        self.dep_lookups.get()
    }

    fn witness(&self, index: usize, source: Source) -> Result<&[u8], SysError> {
        if let Some((_, _, err)) = self
            .witness_faults
            .iter()
            .find(|(i, s, _)| *i == index && *s == source)
        {
            return Err(*err);
        }
        let position = match source {
            Source::Input => index,
            Source::GroupInput => *self
                .group_inputs
                .get(index)
                .ok_or(SysError::IndexOutOfBound)?,
        };
        self.witnesses
            .get(position)
            .map(Vec::as_slice)
            .ok_or(SysError::IndexOutOfBound)
    }

    /// Signs the script group in place: zeroes the lock of the group's first
    /// witness, computes the sighash-all digest and writes the recoverable
    /// signature back into the lock.
    pub fn sign_group(&mut self, secret_key: &SecretKey) -> Result<[u8; SIGNATURE_BYTES], LockError> {
        let position = *self.group_inputs.first().ok_or(LockError::new(
            ErrorCode::SyscallError,
            "script group has no inputs",
        ))?;
        let mut witness0 = self
            .witnesses
            .get(position)
            .cloned()
            .ok_or(LockError::new(
                ErrorCode::SyscallError,
                "group witness #0 missing",
            ))?;
        take_lock_field(&mut witness0)?;
        let digest = sighash_all_digest(&*self, &witness0)?;
        let signature = sign_recoverable(secret_key, &digest);

        let range = extract_witness_lock(&witness0)?;
        witness0[range].copy_from_slice(&signature);
        self.witnesses[position] = witness0;
        Ok(signature)
    }
}

impl LedgerHost for MemoryHost {
    fn load_witness(
        &self,
        buf: &mut [u8],
        offset: usize,
        index: usize,
        source: Source,
    ) -> Result<usize, SysError> {
        load_partial(buf, offset, self.witness(index, source)?)
    }

    fn load_tx_hash(&self, buf: &mut [u8]) -> Result<usize, SysError> {
        load_partial(buf, 0, &self.tx_hash)
    }

    fn count_inputs(&self) -> usize {
        self.input_count
    }

    fn find_dependency_by_content_hash(&self, data_hash: &[u8; 32]) -> Result<usize, SysError> {
        self.dep_lookups.set(self.dep_lookups.get() + 1);
        self.cell_deps
            .iter()
            .position(|data| blake2b_256(data) == *data_hash)
            .ok_or(SysError::ItemMissing)
    }

    fn load_cell_dep_data(
        &self,
        buf: &mut [u8],
        offset: usize,
        index: usize,
    ) -> Result<usize, SysError> {
        let data = self.cell_deps.get(index).ok_or(SysError::IndexOutOfBound)?;
        load_partial(buf, offset, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_index_maps_to_input_position() {
        let host = MemoryHost::new([0u8; 32], 3)
            .with_witnesses(vec![vec![1], vec![2], vec![3]])
            .with_group_inputs(vec![0, 2]);
        let mut buf = [0u8; 4];
        assert_eq!(host.load_witness(&mut buf, 0, 1, Source::GroupInput), Ok(1));
        assert_eq!(buf[0], 3);
        assert_eq!(
            host.load_witness(&mut buf, 0, 2, Source::GroupInput),
            Err(SysError::IndexOutOfBound)
        );
    }

    #[test]
    fn partial_load_reports_full_remaining() {
        let host = MemoryHost::new([0u8; 32], 1).with_witnesses(vec![vec![9u8; 10]]);
        let mut buf = [0u8; 4];
        assert_eq!(host.load_witness(&mut buf, 0, 0, Source::Input), Ok(10));
        assert_eq!(host.load_witness(&mut buf, 8, 0, Source::Input), Ok(2));
        assert_eq!(
            host.load_witness(&mut buf, 11, 0, Source::Input),
            Err(SysError::LengthNotEnough(10))
        );
    }

    #[test]
    fn dependency_lookup_by_content_hash() {
        let host = MemoryHost::new([0u8; 32], 0)
            .with_cell_dep(vec![1, 2, 3])
            .with_cell_dep(vec![4, 5, 6]);
        assert_eq!(
            host.find_dependency_by_content_hash(&blake2b_256(&[4, 5, 6])),
            Ok(1)
        );
        assert_eq!(
            host.find_dependency_by_content_hash(&[0u8; 32]),
            Err(SysError::ItemMissing)
        );
        assert_eq!(host.dep_lookups(), 2);
    }
}
