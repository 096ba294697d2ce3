use thiserror::Error;

/// Every failure a solve run can surface. None of them are recovered from
/// inside the engine; they travel unchanged to the process boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KnapsackError {
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },
    #[error("invalid parameter {name} = {value}: must be non-negative")]
    InvalidParameter { name: &'static str, value: i128 },
    #[error("dp table needs {requested_bytes} bytes, limit is {limit_bytes} bytes")]
    ResourceExhausted {
        requested_bytes: u128,
        limit_bytes: u64,
    },
    #[error("unsupported algorithm selector `{0}` (expected 0/dp, 1/greedy or 2/backtracking)")]
    UnsupportedSelector(String),
}

pub type KnapsackResult<T> = std::result::Result<T, KnapsackError>;
