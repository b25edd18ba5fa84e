use crate::error::{Error, Result};
use crate::utils::to_array;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Length of an encoded [`UnblindedSignature`]: `e || s || r`.
pub const SIGNATURE_LENGTH: usize = 96;

/// The signature produced once a blinded signature has been unblinded.
///
/// Carries the challenge `e`, the unblinded share `s` and the blinding
/// commitment `r`. Checking it against the signer's public key is left to
/// the verifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnblindedSignature {
    e: [u8; 32],
    s: [u8; 32],
    r: [u8; 32],
}

impl UnblindedSignature {
    /// Assembles a signature from its three parts.
    pub fn new(e: [u8; 32], s: [u8; 32], r: [u8; 32]) -> Self {
        Self { e, s, r }
    }

    /// The challenge.
    pub fn e(&self) -> &[u8; 32] {
        &self.e
    }

    /// The unblinded signature share.
    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }

    /// The blinding commitment.
    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    /// Splits the signature into `(e, s, r)`.
    pub fn into_parts(self) -> ([u8; 32], [u8; 32], [u8; 32]) {
        (self.e, self.s, self.r)
    }

    /// Encodes the signature as `e || s || r`.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut out = [0u8; SIGNATURE_LENGTH];
        out[..32].copy_from_slice(&self.e);
        out[32..64].copy_from_slice(&self.s);
        out[64..].copy_from_slice(&self.r);
        out
    }
}

impl From<[u8; SIGNATURE_LENGTH]> for UnblindedSignature {
    fn from(b: [u8; SIGNATURE_LENGTH]) -> Self {
        let mut e = [0u8; 32];
        let mut s = [0u8; 32];
        let mut r = [0u8; 32];
        e.copy_from_slice(&b[..32]);
        s.copy_from_slice(&b[32..64]);
        r.copy_from_slice(&b[64..]);
        Self { e, s, r }
    }
}

impl TryFrom<&[u8]> for UnblindedSignature {
    type Error = Error;

    fn try_from(b: &[u8]) -> Result<Self> {
        let bytes: [u8; SIGNATURE_LENGTH] = to_array("signature", b)?;
        Ok(Self::from(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_is_e_s_r() {
        let sig = UnblindedSignature::new([1u8; 32], [2u8; 32], [3u8; 32]);
        let bytes = sig.to_bytes();

        assert!(bytes[..32].iter().all(|b| *b == 1));
        assert!(bytes[32..64].iter().all(|b| *b == 2));
        assert!(bytes[64..].iter().all(|b| *b == 3));
        assert_eq!(UnblindedSignature::from(bytes), sig);
    }

    #[test]
    fn wrong_length_is_rejected() {
        let short = [0u8; SIGNATURE_LENGTH - 1];
        let result = UnblindedSignature::try_from(&short[..]);
        assert!(matches!(
            result,
            Err(Error::InvalidLength {
                field: "signature",
                expected: SIGNATURE_LENGTH,
                actual: 95,
            })
        ));
    }
}
