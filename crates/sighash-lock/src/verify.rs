use crate::config::LockConfig;
use crate::constants::{BLAKE160_BYTES, MAX_WITNESS_SIZE};
use crate::error::LockError;
use crate::host::LedgerHost;
use crate::identity::pubkey_identity;
use crate::secp::VerificationContext;
use crate::sighash::sighash_all_digest;
use crate::witness_args::take_lock_field;
use crate::witness_source::load_first_witness;

/// Recovers the blake160 identity that signed the current script group.
///
/// The caller compares the result with the identity committed in its script
/// args; nothing here decides whether the spend is allowed.
pub fn validate_sighash_all<H: LedgerHost + ?Sized>(
    host: &H,
    config: &LockConfig,
) -> Result<[u8; BLAKE160_BYTES], LockError> {
    config.validate()?;

    let mut witness = [0u8; MAX_WITNESS_SIZE];
    let witness_len = load_first_witness(host, config, &mut witness)?;
    let witness0 = &mut witness[..witness_len];

    let signature = take_lock_field(witness0)?;
    let digest = sighash_all_digest(host, witness0)?;

    let context = VerificationContext::load(host, config)?;
    let pubkey = context.recover(&digest, &signature)?;
    pubkey_identity(&pubkey)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub success: bool,
    pub identity: Option<[u8; BLAKE160_BYTES]>,
    pub error: Option<LockError>,
}

impl From<Result<[u8; BLAKE160_BYTES], LockError>> for Verdict {
    fn from(r: Result<[u8; BLAKE160_BYTES], LockError>) -> Self {
        match r {
            Ok(identity) => Verdict {
                success: true,
                identity: Some(identity),
                error: None,
            },
            Err(e) => Verdict {
                success: false,
                identity: None,
                error: Some(e),
            },
        }
    }
}

pub fn verify<H: LedgerHost + ?Sized>(host: &H, config: &LockConfig) -> Verdict {
    validate_sighash_all(host, config).into()
}
