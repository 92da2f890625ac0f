use secp256k1::{PublicKey, Secp256k1, SecretKey};
use sighash_lock::constants::{RECID_INDEX, SIGNATURE_BYTES};
use sighash_lock::{
    blake160, blake2b_256, extract_witness_lock, new_blake2b, sign_recoverable,
    validate_sighash_all, verify, ErrorCode, LockConfig, MemoryHost, WitnessArgs,
};

fn context_data() -> Vec<u8> {
    vec![0xc0u8; 512]
}

fn config() -> LockConfig {
    let data = context_data();
    LockConfig {
        context_data_hash: blake2b_256(&data),
        context_data_size: data.len(),
        ..LockConfig::default()
    }
}

fn scenario_digest(witness0: &[u8]) -> [u8; 32] {
    let mut h = new_blake2b();
    h.update(&[0u8; 32]);
    h.update(&(witness0.len() as u64).to_le_bytes());
    h.update(witness0);
    let mut r = [0u8; 32];
    r.copy_from_slice(h.finalize().as_bytes());
    r
}

#[test]
fn single_input_scenario() {
    let sk = SecretKey::from_slice(&[0x3cu8; 32]).expect("sk");
    let pk = PublicKey::from_secret_key(&Secp256k1::new(), &sk);
    let want_identity = blake160(&pk.serialize());

    let unsigned = WitnessArgs::with_lock(vec![0u8; SIGNATURE_BYTES]).to_bytes();
    let digest = scenario_digest(&unsigned);
    let signature = sign_recoverable(&sk, &digest);

    let mut signed = unsigned.clone();
    let lock = extract_witness_lock(&signed).expect("lock");
    signed[lock.clone()].copy_from_slice(&signature);

    let host = MemoryHost::new([0u8; 32], 1)
        .with_witnesses(vec![signed.clone()])
        .with_group_inputs(vec![0])
        .with_cell_dep(context_data());
    let verdict = verify(&host, &config());
    assert!(verdict.success, "{:?}", verdict.error);
    assert_eq!(verdict.identity, Some(want_identity));

    // Same witness produced by the fixture signer.
    let mut resigned = MemoryHost::new([0u8; 32], 1)
        .with_witnesses(vec![unsigned])
        .with_group_inputs(vec![0])
        .with_cell_dep(context_data());
    resigned.sign_group(&sk).expect("sign");
    assert_eq!(resigned.witnesses[0], signed);

    // Flip the recovery id byte.
    let mut tampered = signed;
    tampered[lock.start + RECID_INDEX] ^= 0x01;
    let host = host.with_witnesses(vec![tampered]);
    match validate_sighash_all(&host, &config()) {
        Ok(identity) => assert_ne!(identity, want_identity),
        Err(e) => assert!(matches!(
            e.code,
            ErrorCode::CryptoRecoverError | ErrorCode::CryptoParseError
        )),
    }
}

#[test]
fn tampered_extra_witness_changes_identity() {
    let sk = SecretKey::from_slice(&[0x51u8; 32]).expect("sk");
    let pk = PublicKey::from_secret_key(&Secp256k1::new(), &sk);
    let unsigned = WitnessArgs::with_lock(vec![0u8; SIGNATURE_BYTES]).to_bytes();

    let mut host = MemoryHost::new([0x99u8; 32], 1)
        .with_witnesses(vec![unsigned, b"extra".to_vec()])
        .with_group_inputs(vec![0])
        .with_cell_dep(context_data());
    host.sign_group(&sk).expect("sign");
    assert_eq!(
        validate_sighash_all(&host, &config()).expect("ok"),
        blake160(&pk.serialize())
    );

    host.witnesses[1] = b"extrA".to_vec();
    match validate_sighash_all(&host, &config()) {
        Ok(identity) => assert_ne!(identity, blake160(&pk.serialize())),
        Err(e) => assert_eq!(e.code, ErrorCode::CryptoRecoverError),
    }
}

#[test]
fn multi_input_group_signature() {
    let sk = SecretKey::from_slice(&[0x0fu8; 32]).expect("sk");
    let pk = PublicKey::from_secret_key(&Secp256k1::new(), &sk);
    let lock = || WitnessArgs::with_lock(vec![0u8; SIGNATURE_BYTES]).to_bytes();
    let mut host = MemoryHost::new([0x44u8; 32], 4)
        .with_witnesses(vec![
            vec![],
            lock(),
            vec![],
            WitnessArgs {
                input_type: Some(vec![0xee; 40_000]),
                ..WitnessArgs::default()
            }
            .to_bytes(),
        ])
        .with_group_inputs(vec![1, 3])
        .with_cell_dep(vec![0u8; 8])
        .with_cell_dep(context_data());
    host.sign_group(&sk).expect("sign");
    let identity = validate_sighash_all(&host, &config()).expect("ok");
    assert_eq!(identity, blake160(&pk.serialize()));
}

#[test]
fn sign_recoverable_sets_recid_byte() {
    let sk = SecretKey::from_slice(&[0x21u8; 32]).expect("sk");
    let sig = sign_recoverable(&sk, &[0xabu8; 32]);
    assert!(sig[RECID_INDEX] < 4);
}
