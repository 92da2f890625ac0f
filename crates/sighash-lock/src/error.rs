use core::fmt;

use crate::host::SysError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    SyscallError,
    EncodingError,
    ArgumentLengthError,
    CryptoParseError,
    CryptoRecoverError,
    CryptoSerializeError,
    ConfigLoadError,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::SyscallError => "ERR_SYSCALL",
            ErrorCode::EncodingError => "ERR_ENCODING",
            ErrorCode::ArgumentLengthError => "ERR_ARGUMENTS_LEN",
            ErrorCode::CryptoParseError => "ERR_SECP_PARSE_SIGNATURE",
            ErrorCode::CryptoRecoverError => "ERR_SECP_RECOVER_PUBKEY",
            ErrorCode::CryptoSerializeError => "ERR_SECP_SERIALIZE_PUBKEY",
            ErrorCode::ConfigLoadError => "ERR_SECP_LOADING_DATA",
        }
    }

    /// Script exit code used by secp256k1 lock scripts on the ledger.
    pub fn exit_code(self) -> i8 {
        match self {
            ErrorCode::ArgumentLengthError => -1,
            ErrorCode::EncodingError => -2,
            ErrorCode::SyscallError => -3,
            ErrorCode::CryptoRecoverError => -11,
            ErrorCode::CryptoParseError => -14,
            ErrorCode::CryptoSerializeError => -15,
            ErrorCode::ConfigLoadError => -101,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LockError {
    pub code: ErrorCode,
    pub msg: &'static str,
}

impl LockError {
    pub fn new(code: ErrorCode, msg: &'static str) -> Self {
        Self { code, msg }
    }
}

impl fmt::Display for LockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.msg.is_empty() {
            write!(f, "{}", self.code.as_str())
        } else {
            write!(f, "{}: {}", self.code.as_str(), self.msg)
        }
    }
}

impl std::error::Error for LockError {}

impl From<SysError> for LockError {
    fn from(err: SysError) -> Self {
        let msg = match err {
            SysError::IndexOutOfBound => "syscall: index out of bound",
            SysError::ItemMissing => "syscall: item missing",
            SysError::LengthNotEnough(_) => "syscall: length not enough",
            SysError::Encoding => "syscall: encoding",
            SysError::Unknown(_) => "syscall: unknown error",
        };
        LockError::new(ErrorCode::SyscallError, msg)
    }
}
