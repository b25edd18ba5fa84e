use crate::challenge::generate_challenge;
use crate::error::{Error, Result};
use crate::group::{Group, X25519};
use crate::signature::UnblindedSignature;
use crate::utils::{to_array, xor3, xor_into};
use blake2::digest::typenum::{IsGreaterOrEqual, True, U32};
use blake2::digest::{Digest, OutputSizeUser};
use blake2::Blake2b512;
use log::debug;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::fmt;
use std::marker::PhantomData;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// The secret scalars of one signing request.
///
/// `u` blinds the signer's response and `v` masks the final share. Both are
/// wiped when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct BlindingFactors {
    u: [u8; 32],
    v: [u8; 32],
}

impl BlindingFactors {
    pub(crate) fn new(u: [u8; 32], v: [u8; 32]) -> Self {
        Self { u, v }
    }

    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let mut factors = Self::new([0u8; 32], [0u8; 32]);
        rng.try_fill_bytes(&mut factors.u)?;
        rng.try_fill_bytes(&mut factors.v)?;
        Ok(factors)
    }
}

impl fmt::Debug for BlindingFactors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BlindingFactors(..)")
    }
}

struct Pending {
    factors: BlindingFactors,
    r: [u8; 32],
    e: [u8; 32],
}

enum State {
    Pending(Pending),
    Consumed,
}

/// Requester side of a blind signing request.
///
/// A `Blinder` is created by [`Blinder::begin`], which also returns the
/// blinded challenge `ep` for the signer. The signer's answer is turned into
/// an [`UnblindedSignature`] by [`Blinder::finish`], exactly once.
pub struct Blinder<G: Group = X25519> {
    state: State,
    _group: PhantomData<G>,
}

impl Blinder<X25519> {
    /// Starts a request for `message` against the signer's commitment scalar.
    ///
    /// Blinding factors are drawn from the operating system RNG and the
    /// challenge is derived with Blake2b-512.
    ///
    /// # Returns
    ///
    /// The blinded challenge to send to the signer, and the pending `Blinder`.
    pub fn begin(signer_commitment: &[u8; 32], message: &[u8]) -> Result<([u8; 32], Self)> {
        Self::begin_with::<Blake2b512, _>(signer_commitment, message, &mut OsRng)
    }

    /// Same as [`Blinder::begin`] for a commitment received as raw bytes.
    pub fn begin_from_slice(
        signer_commitment: &[u8],
        message: &[u8],
    ) -> Result<([u8; 32], Self)> {
        let signer_commitment = to_array("signer commitment", signer_commitment)?;
        Self::begin(&signer_commitment, message)
    }
}

impl<G: Group> Blinder<G> {
    /// Starts a request with an explicit challenge hash and RNG.
    pub fn begin_with<H, R>(
        signer_commitment: &[u8; 32],
        message: &[u8],
        rng: &mut R,
    ) -> Result<([u8; 32], Self)>
    where
        H: Digest,
        <H as OutputSizeUser>::OutputSize: IsGreaterOrEqual<U32, Output = True>,
        R: RngCore + CryptoRng,
    {
        let factors = BlindingFactors::random(rng)?;
        Ok(Self::from_factors::<H>(factors, signer_commitment, message))
    }

    pub(crate) fn from_factors<H>(
        factors: BlindingFactors,
        signer_commitment: &[u8; 32],
        message: &[u8],
    ) -> ([u8; 32], Self)
    where
        H: Digest,
        <H as OutputSizeUser>::OutputSize: IsGreaterOrEqual<U32, Output = True>,
    {
        let u_point = Zeroizing::new(G::mul_base(&factors.u));

        // r = uB ^ vB ^ kB
        let r = xor3(
            &u_point,
            &G::mul_base(&factors.v),
            &G::mul_base(signer_commitment),
        );
        let e = generate_challenge::<H>(&r, message);

        // uB is the multiplier, e the point
        let ep = G::mul(&u_point, &e);

        debug!("blinding commitment r: {:?}", r);
        debug!("blinded challenge ep: {:?}", ep);

        let blinder = Self {
            state: State::Pending(Pending { factors, r, e }),
            _group: PhantomData,
        };

        (ep, blinder)
    }

    /// Unblinds the signer's response into the final signature.
    ///
    /// A mismatched `blinded_signature` is not detected here, it yields a
    /// signature that fails verification.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] if this blinder was already finished.
    pub fn finish(&mut self, blinded_signature: &[u8; 32]) -> Result<UnblindedSignature> {
        let pending = match &self.state {
            State::Pending(pending) => pending,
            State::Consumed => {
                debug!("finish called on a consumed blinder");
                return Err(Error::InvalidState);
            }
        };

        let mut s = G::mul(&pending.factors.u, blinded_signature);
        xor_into(&mut s, &pending.factors.v);

        debug!("unblinded signature share s: {:?}", s);

        let signature = UnblindedSignature::new(pending.e, s, pending.r);

        // drops the pending state in place, wiping u and v
        self.state = State::Consumed;

        Ok(signature)
    }

    /// Same as [`Blinder::finish`] for a response received as raw bytes.
    ///
    /// A length error leaves the blinder pending.
    pub fn finish_from_slice(&mut self, blinded_signature: &[u8]) -> Result<UnblindedSignature> {
        let blinded_signature = to_array("blinded signature", blinded_signature)?;
        self.finish(&blinded_signature)
    }

    /// Whether [`Blinder::finish`] can still be called.
    pub fn is_pending(&self) -> bool {
        matches!(self.state, State::Pending(_))
    }

    /// The blinding commitment `r`, until the blinder is finished.
    pub fn blinding_commitment(&self) -> Option<&[u8; 32]> {
        match &self.state {
            State::Pending(pending) => Some(&pending.r),
            State::Consumed => None,
        }
    }
}

impl<G: Group> fmt::Debug for Blinder<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Pending(pending) => f
                .debug_struct("Blinder")
                .field("factors", &pending.factors)
                .field("r", &pending.r)
                .field("e", &pending.e)
                .finish(),
            State::Consumed => f.write_str("Blinder(consumed)"),
        }
    }
}
