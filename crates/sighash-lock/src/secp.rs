use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{Message, Secp256k1, SecretKey, VerifyOnly};

use crate::config::LockConfig;
use crate::constants::{PUBKEY_COMPRESSED_BYTES, RECID_INDEX, SIGNATURE_BYTES};
use crate::error::{ErrorCode, LockError};
use crate::hash::blake2b_256;
use crate::host::LedgerHost;

/// Verify-only secp256k1 context, built per validation call.
///
/// The context data must be present as a cell dependency of the configured
/// size before a context is handed out.
pub struct VerificationContext {
    secp: Secp256k1<VerifyOnly>,
}

impl VerificationContext {
    /// Loads the context data from the dependency matching
    /// `config.context_data_hash`. The host lookup already binds the data to
    /// that hash, so only its size is checked here.
    pub fn load<H: LedgerHost + ?Sized>(host: &H, config: &LockConfig) -> Result<Self, LockError> {
        config.validate()?;
        let index = host
            .find_dependency_by_content_hash(&config.context_data_hash)
            .map_err(|_| {
                LockError::new(
                    ErrorCode::ConfigLoadError,
                    "secp256k1 data dependency not found",
                )
            })?;

        let mut data = vec![0u8; config.context_data_size];
        let len = host.load_cell_dep_data(&mut data, 0, index).map_err(|_| {
            LockError::new(ErrorCode::ConfigLoadError, "secp256k1 data load failed")
        })?;
        if len != config.context_data_size {
            return Err(LockError::new(
                ErrorCode::ConfigLoadError,
                "secp256k1 data size mismatch",
            ));
        }
        Ok(Self::verify_only())
    }

    /// Builds a context from caller-supplied data, checking both its size and
    /// its content hash.
    pub fn from_data(data: &[u8], config: &LockConfig) -> Result<Self, LockError> {
        config.validate()?;
        if data.len() != config.context_data_size {
            return Err(LockError::new(
                ErrorCode::ConfigLoadError,
                "secp256k1 data size mismatch",
            ));
        }
        if blake2b_256(data) != config.context_data_hash {
            return Err(LockError::new(
                ErrorCode::ConfigLoadError,
                "secp256k1 data hash mismatch",
            ));
        }
        Ok(Self::verify_only())
    }

    fn verify_only() -> Self {
        Self {
            secp: Secp256k1::verification_only(),
        }
    }

    /// Recovers the signer's compressed public key from a 65-byte
    /// `r ‖ s ‖ recid` signature over `digest`.
    pub fn recover(
        &self,
        digest: &[u8; 32],
        signature: &[u8],
    ) -> Result<[u8; PUBKEY_COMPRESSED_BYTES], LockError> {
        let sig = parse_recoverable_signature(signature)?;
        let msg = Message::from_digest(*digest);
        let pubkey = self.secp.recover_ecdsa(&msg, &sig).map_err(|_| {
            LockError::new(ErrorCode::CryptoRecoverError, "public key recovery failed")
        })?;
        Ok(pubkey.serialize())
    }
}

pub fn parse_recoverable_signature(signature: &[u8]) -> Result<RecoverableSignature, LockError> {
    if signature.len() != SIGNATURE_BYTES {
        return Err(LockError::new(
            ErrorCode::CryptoParseError,
            "recoverable signature must be 65 bytes",
        ));
    }
    let recid = RecoveryId::from_i32(i32::from(signature[RECID_INDEX]))
        .map_err(|_| LockError::new(ErrorCode::CryptoParseError, "invalid recovery id"))?;
    RecoverableSignature::from_compact(&signature[..RECID_INDEX], recid)
        .map_err(|_| LockError::new(ErrorCode::CryptoParseError, "invalid compact signature"))
}

/// Produces the 65-byte lock payload for `digest`. Used to build fixtures.
pub fn sign_recoverable(secret_key: &SecretKey, digest: &[u8; 32]) -> [u8; SIGNATURE_BYTES] {
    let secp = Secp256k1::signing_only();
    let sig = secp.sign_ecdsa_recoverable(&Message::from_digest(*digest), secret_key);
    let (recid, compact) = sig.serialize_compact();
    let mut out = [0u8; SIGNATURE_BYTES];
    out[..RECID_INDEX].copy_from_slice(&compact);
    out[RECID_INDEX] = recid.to_i32() as u8;
    out
}
