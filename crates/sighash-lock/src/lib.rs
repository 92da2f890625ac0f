pub mod config;
pub mod constants;
pub mod error;
mod hash;
pub mod host;
mod identity;
pub mod mem_host;
pub mod secp;
pub mod sighash;
pub mod verify;
pub mod witness_args;
mod wire_read;
mod witness_source;

pub use config::LockConfig;
pub use error::{ErrorCode, LockError};
pub use hash::{blake160, blake2b_256, new_blake2b};
pub use host::{LedgerHost, Source, SysError};
pub use identity::pubkey_identity;
pub use mem_host::MemoryHost;
pub use secp::{parse_recoverable_signature, sign_recoverable, VerificationContext};
pub use sighash::{load_tx_hash, sighash_all_digest, SighashHasher};
pub use verify::{validate_sighash_all, verify, Verdict};
pub use witness_args::{extract_witness_lock, take_lock_field, WitnessArgs};
pub use witness_source::{load_first_witness, WitnessSource};
