pub const BLAKE2B_HASH_BYTES: usize = 32;
pub const BLAKE160_BYTES: usize = 20;
pub const CKB_HASH_PERSONALIZATION: &[u8; 16] = b"ckb-default-hash";

pub const TX_HASH_BYTES: usize = 32;
pub const SIGNATURE_BYTES: usize = 65;
pub const RECID_INDEX: usize = 64;
pub const PUBKEY_COMPRESSED_BYTES: usize = 33;

pub const ONE_BATCH_SIZE: usize = 32_768;
pub const MAX_WITNESS_SIZE: usize = 32_768;

pub const WITNESS_ARGS_FIELD_COUNT: usize = 3;
pub const MOLECULE_NUMBER_BYTES: usize = 4;

pub const SECP256K1_DATA_SIZE: usize = 1_049_600;

/// Data hash of the `secp256k1_data` cell deployed in the genesis block.
pub const SECP256K1_DATA_HASH: [u8; 32] = [
    0x97, 0x99, 0xbe, 0xe2, 0x51, 0xb9, 0x75, 0xb8, 0x2c, 0x45, 0xa0, 0x21, 0x54, 0xce, 0x28,
    0xce, 0xc8, 0x9c, 0x58, 0x53, 0xec, 0xc1, 0x4d, 0x12, 0xb7, 0xb8, 0xcc, 0xcf, 0xc1, 0x9e,
    0x0a, 0xf4,
];
