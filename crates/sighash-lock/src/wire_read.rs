use crate::error::{ErrorCode, LockError};

/// Little-endian cursor over molecule-encoded bytes.
pub struct Reader<'a> {
    b: &'a [u8],
    off: usize,
}

impl<'a> Reader<'a> {
    pub fn new(b: &'a [u8]) -> Self {
        Self { b, off: 0 }
    }

    pub fn offset(&self) -> usize {
        self.off
    }

    pub fn read_u32_le(&mut self) -> Result<u32, LockError> {
        if self.b.len() < 4 || self.off > self.b.len() - 4 {
            return Err(LockError::new(
                ErrorCode::EncodingError,
                "unexpected EOF (u32le)",
            ));
        }
        let mut v = [0u8; 4];
        v.copy_from_slice(&self.b[self.off..self.off + 4]);
        self.off += 4;
        Ok(u32::from_le_bytes(v))
    }

    /// Reads a molecule `Number` (u32 LE) and widens it to a buffer offset.
    pub fn read_number(&mut self) -> Result<usize, LockError> {
        let v = self.read_u32_le()?;
        usize::try_from(v)
            .map_err(|_| LockError::new(ErrorCode::EncodingError, "molecule number overflows usize"))
    }
}
