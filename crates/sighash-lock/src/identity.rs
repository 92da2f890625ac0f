use crate::constants::{BLAKE160_BYTES, PUBKEY_COMPRESSED_BYTES};
use crate::error::{ErrorCode, LockError};
use crate::hash::blake160;

/// blake160 of a compressed secp256k1 public key.
pub fn pubkey_identity(pubkey: &[u8]) -> Result<[u8; BLAKE160_BYTES], LockError> {
    if pubkey.len() != PUBKEY_COMPRESSED_BYTES {
        return Err(LockError::new(
            ErrorCode::CryptoSerializeError,
            "compressed public key must be 33 bytes",
        ));
    }
    Ok(blake160(pubkey))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::blake2b_256;

    #[test]
    fn identity_is_hash_prefix() {
        let pk = [0x02u8; PUBKEY_COMPRESSED_BYTES];
        let id = pubkey_identity(&pk).expect("id");
        assert_eq!(id[..], blake2b_256(&pk)[..BLAKE160_BYTES]);
    }

    #[test]
    fn uncompressed_key_rejected() {
        let err = pubkey_identity(&[0x04u8; 65]).unwrap_err();
        assert_eq!(err.code, ErrorCode::CryptoSerializeError);
    }
}
