//! Requester side of a blind signature protocol over Curve25519.
//!
//! ```
//! use ecbs::{Blinder, Group, X25519};
//!
//! # fn main() -> ecbs::Result<()> {
//! // the signer's commitment scalar, received from the signer
//! let commitment = [0x01u8; 32];
//! let (ep, mut blinder) = Blinder::begin(&commitment, b"Test message")?;
//!
//! // send `ep` to the signer and wait for its blinded signature
//! let blinded_signature = X25519::mul(&[0x42u8; 32], &ep);
//!
//! let signature = blinder.finish(&blinded_signature)?;
//! assert_eq!(signature.to_bytes().len(), 96);
//! assert!(blinder.finish(&blinded_signature).is_err());
//! # Ok(())
//! # }
//! ```
//!
//! This crate does no IO: moving `ep` and the blinded signature between the
//! requester and the signer is left to the caller.

mod blinder;
mod challenge;
mod error;
mod group;
mod signature;
mod utils;

pub use crate::blinder::Blinder;
pub use crate::challenge::generate_challenge;
pub use crate::error::{BlindSignatureError, Error, Result};
pub use crate::group::{Group, X25519};
pub use crate::signature::{UnblindedSignature, SIGNATURE_LENGTH};

/// Installs an `env_logger` logger at debug level for programs using this crate.
///
/// Fails if a logger is already installed.
#[cfg(feature = "env_logger")]
pub fn init_logger() -> std::result::Result<(), log::SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .try_init()
}

#[cfg(all(test, feature = "env_logger"))]
mod tests {
    use super::*;

    #[test]
    fn init_logger_installs_once() {
        // other tests in this binary may have installed a logger already
        let _ = init_logger();
        assert!(init_logger().is_err());
    }
}
