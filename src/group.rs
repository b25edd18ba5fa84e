//! Group arithmetic used by the blinder.
//!
//! Scalars and points are both handled as their 32-byte encodings, so a
//! provider is free to reinterpret one as the other (the blinded challenge
//! uses a point encoding as a scalar multiplier).

use x25519_dalek::{x25519, X25519_BASEPOINT_BYTES};

/// Scalar multiplication over 32-byte encodings.
pub trait Group {
    /// `scalar * Base`
    fn mul_base(scalar: &[u8; 32]) -> [u8; 32];

    /// `scalar * point`
    fn mul(scalar: &[u8; 32], point: &[u8; 32]) -> [u8; 32];
}

/// Curve25519 Montgomery-ladder multiplication as specified by RFC 7748.
///
/// Scalars are clamped before use and only the u-coordinate of a point is
/// carried, so every 32-byte input is accepted.
#[derive(Clone, Copy, Debug, Default)]
pub struct X25519;

impl Group for X25519 {
    fn mul_base(scalar: &[u8; 32]) -> [u8; 32] {
        x25519(*scalar, X25519_BASEPOINT_BYTES)
    }

    fn mul(scalar: &[u8; 32], point: &[u8; 32]) -> [u8; 32] {
        x25519(*scalar, *point)
    }
}
