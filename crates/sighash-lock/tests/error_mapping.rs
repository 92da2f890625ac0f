use sighash_lock::{ErrorCode, LockError, SysError};

#[test]
fn error_code_as_str_covers_all_variants() {
    // Every variant is listed so renames show up as test failures.
    let cases: &[(ErrorCode, &str, i8)] = &[
        (ErrorCode::ArgumentLengthError, "ERR_ARGUMENTS_LEN", -1),
        (ErrorCode::EncodingError, "ERR_ENCODING", -2),
        (ErrorCode::SyscallError, "ERR_SYSCALL", -3),
        (ErrorCode::CryptoRecoverError, "ERR_SECP_RECOVER_PUBKEY", -11),
        (ErrorCode::CryptoParseError, "ERR_SECP_PARSE_SIGNATURE", -14),
        (
            ErrorCode::CryptoSerializeError,
            "ERR_SECP_SERIALIZE_PUBKEY",
            -15,
        ),
        (ErrorCode::ConfigLoadError, "ERR_SECP_LOADING_DATA", -101),
    ];

    for (code, want, exit) in cases {
        assert_eq!(code.as_str(), *want);
        assert_eq!(code.exit_code(), *exit);
    }
}

#[test]
fn lock_error_display() {
    let e = LockError::new(ErrorCode::EncodingError, "");
    assert_eq!(e.to_string(), "ERR_ENCODING");
    let e2 = LockError::new(ErrorCode::EncodingError, "bad");
    assert_eq!(e2.to_string(), "ERR_ENCODING: bad");
}

#[test]
fn sys_errors_map_to_syscall_error() {
    for err in [
        SysError::IndexOutOfBound,
        SysError::ItemMissing,
        SysError::LengthNotEnough(3),
        SysError::Encoding,
        SysError::Unknown(99),
    ] {
        let e: LockError = err.into();
        assert_eq!(e.code, ErrorCode::SyscallError, "{err:?}");
    }
}
