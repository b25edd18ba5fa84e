use blake2::digest::typenum::{IsGreaterOrEqual, True, U32};
use blake2::digest::{Digest, OutputSizeUser};

/// Generates `e = H(r || m)`, truncated to the first 32 bytes.
///
/// The digest output is cut rather than reduced so the challenge has the
/// same width as a scalar; `H` must produce at least 32 bytes.
pub fn generate_challenge<H>(r: &[u8; 32], message: &[u8]) -> [u8; 32]
where
    H: Digest,
    <H as OutputSizeUser>::OutputSize: IsGreaterOrEqual<U32, Output = True>,
{
    let digest = H::new().chain_update(r).chain_update(message).finalize();

    let mut e = [0u8; 32];
    e.copy_from_slice(&digest[..32]);
    e
}
