use secp256k1::SecretKey;
use serde::{Deserialize, Serialize};
use sighash_lock::{
    blake160, extract_witness_lock, pubkey_identity, sighash_all_digest, take_lock_field, verify,
    LockConfig, MemoryHost,
};

#[derive(Deserialize)]
struct Request {
    op: String,

    #[serde(default)]
    config: LockConfig,

    #[serde(default)]
    tx_hash: String,

    #[serde(default)]
    input_count: usize,

    #[serde(default)]
    witnesses: Vec<String>,

    #[serde(default)]
    group_inputs: Vec<usize>,

    #[serde(default)]
    cell_deps: Vec<String>,

    #[serde(default)]
    secret_key: String,

    #[serde(default)]
    pubkey: String,
}

#[derive(Default, Serialize)]
struct Response {
    ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    err: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    exit_code: Option<i8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    lock: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    lock_offset: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    digest: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    identity: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    signature: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    witnesses: Option<Vec<String>>,
}

fn fail(err: impl Into<String>) -> Response {
    Response {
        ok: false,
        err: Some(err.into()),
        ..Response::default()
    }
}

fn lock_fail(e: sighash_lock::LockError) -> Response {
    Response {
        exit_code: Some(e.code.exit_code()),
        ..fail(e.code.as_str())
    }
}

fn decode_list(items: &[String]) -> Result<Vec<Vec<u8>>, String> {
    items
        .iter()
        .map(|s| hex::decode(s).map_err(|_| "bad hex".to_string()))
        .collect()
}

fn build_host(req: &Request) -> Result<MemoryHost, String> {
    let tx_hash: [u8; 32] = hex::decode(&req.tx_hash)
        .map_err(|_| "bad hex".to_string())?
        .try_into()
        .map_err(|_| "tx_hash must be 32 bytes".to_string())?;
    let mut host = MemoryHost::new(tx_hash, req.input_count)
        .with_witnesses(decode_list(&req.witnesses)?)
        .with_group_inputs(req.group_inputs.clone());
    for dep in decode_list(&req.cell_deps)? {
        host = host.with_cell_dep(dep);
    }
    Ok(host)
}

fn first_group_witness(host: &MemoryHost) -> Result<Vec<u8>, String> {
    host.group_inputs
        .first()
        .and_then(|&i| host.witnesses.get(i))
        .cloned()
        .ok_or_else(|| "missing group witness #0".to_string())
}

fn handle(req: Request) -> Response {
    match req.op.as_str() {
        "blake160" => {
            let pubkey = match hex::decode(&req.pubkey) {
                Ok(v) => v,
                Err(_) => return fail("bad hex"),
            };
            match pubkey_identity(&pubkey) {
                Ok(id) => Response {
                    ok: true,
                    identity: Some(hex::encode(id)),
                    ..Response::default()
                },
                Err(e) => lock_fail(e),
            }
        }
        "extract_lock" => {
            let host = match build_host(&req) {
                Ok(h) => h,
                Err(e) => return fail(e),
            };
            let w0 = match first_group_witness(&host) {
                Ok(w) => w,
                Err(e) => return fail(e),
            };
            match extract_witness_lock(&w0) {
                Ok(range) => Response {
                    ok: true,
                    lock_offset: Some(range.start),
                    lock: Some(hex::encode(&w0[range])),
                    ..Response::default()
                },
                Err(e) => lock_fail(e),
            }
        }
        "digest" => {
            let host = match build_host(&req) {
                Ok(h) => h,
                Err(e) => return fail(e),
            };
            let mut w0 = match first_group_witness(&host) {
                Ok(w) => w,
                Err(e) => return fail(e),
            };
            let digest = take_lock_field(&mut w0).and_then(|_| sighash_all_digest(&host, &w0));
            match digest {
                Ok(d) => Response {
                    ok: true,
                    digest: Some(hex::encode(d)),
                    ..Response::default()
                },
                Err(e) => lock_fail(e),
            }
        }
        "verify" => {
            let host = match build_host(&req) {
                Ok(h) => h,
                Err(e) => return fail(e),
            };
            let verdict = verify(&host, &req.config);
            match verdict.error {
                None => Response {
                    ok: verdict.success,
                    identity: verdict.identity.map(hex::encode),
                    ..Response::default()
                },
                Some(e) => lock_fail(e),
            }
        }
        "sign" => {
            let mut host = match build_host(&req) {
                Ok(h) => h,
                Err(e) => return fail(e),
            };
            let secret_key = match hex::decode(&req.secret_key)
                .ok()
                .and_then(|b| SecretKey::from_slice(&b).ok())
            {
                Some(sk) => sk,
                None => return fail("bad secret_key"),
            };
            let pubkey = secret_key.public_key(&secp256k1::Secp256k1::signing_only());
            match host.sign_group(&secret_key) {
                Ok(sig) => Response {
                    ok: true,
                    signature: Some(hex::encode(sig)),
                    identity: Some(hex::encode(blake160(&pubkey.serialize()))),
                    witnesses: Some(host.witnesses.iter().map(hex::encode).collect()),
                    ..Response::default()
                },
                Err(e) => lock_fail(e),
            }
        }
        other => {
            eprintln!("op: unknown operation {other:?}");
            fail("unknown op")
        }
    }
}

fn main() {
    let resp = match serde_json::from_reader::<_, Request>(std::io::stdin()) {
        Ok(req) => handle(req),
        Err(e) => {
            eprintln!("request: {e}");
            fail(format!("bad request: {e}"))
        }
    };
    if let Err(e) = serde_json::to_writer(std::io::stdout(), &resp) {
        eprintln!("response: {e}");
        std::process::exit(1);
    }
}
