use thiserror::Error;

/// Specialisation of `std::Result`.
pub type Result<T, E = BlindSignatureError> = std::result::Result<T, E>;
pub type Error = BlindSignatureError;

#[derive(Error, Debug)]
/// error variants.
pub enum BlindSignatureError {
    #[error("invalid {field} length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("blinder is not pending, finish was already called")]
    InvalidState,

    #[error("random number generator failed: {0}")]
    Rng(#[from] rand::Error),
}
