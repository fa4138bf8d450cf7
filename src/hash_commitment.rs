/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!Hash commitments
//!
//!`C = SHA-256(domain || encode(value) || encode(blinding))`.
//!Binding and hiding rest on the hash function; unlike Pedersen commitments
//!these can't be added together, so `combine` and `negate` always fail.

use num_bigint::{BigInt, Sign};
use sha2::{Digest, Sha256};

use crate::internal_common::*;

///Length in bytes of a hash commitment.
pub const DIGEST_LENGTH: usize = 32;

//field lengths are written as u64, which must be able to hold any usize
const _: () = assert!(usize::BITS <= u64::BITS);

///Append `sign || len (u64, big endian) || magnitude (big endian)`.
///
///The magnitude is minimal, and fields are length-prefixed rather than delimited,
///so distinct integers never produce the same bytes and field boundaries can't shift.
fn encode_integer(out: &mut Vec<u8>, n: &BigInt) {
    let (sign, magnitude) = n.to_bytes_be();
    out.push(match sign {
        Sign::NoSign => 0,
        Sign::Plus => 1,
        Sign::Minus => 2
    });
    out.extend_from_slice(&(magnitude.len() as u64).to_be_bytes());
    out.extend_from_slice(&magnitude);
}

///The canonical, unambiguous byte encoding of an opening: value first, then blinding.
pub fn encode_opening(opening: &Opening) -> Vec<u8> {
    let mut out = Vec::new();
    encode_integer(&mut out, &opening.value);
    encode_integer(&mut out, &opening.blinding);
    return out
}

///Commits by hashing the opening.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HashCommitter;

impl HashCommitter {
    pub fn new() -> Self {
        return Self
    }

    ///Hash commitments are not homomorphic: this always fails.
    ///
    ///Returns `EngineMismatch` if either argument isn't a hash commitment,
    ///otherwise `UnsupportedOperation`.
    pub fn combine(&self, a: &Commitment, b: &Commitment) -> Result<Commitment, CommitmentError> {
        if !a.is_hash() || !b.is_hash() {
            tracing::warn!("refusing to combine commitments from different engines");
            return Err(CommitmentError::EngineMismatch)
        }
        tracing::warn!("refusing to combine hash commitments");
        return Err(CommitmentError::UnsupportedOperation)
    }

    ///Hash commitments have no inverse: this always fails.
    pub fn negate(&self, a: &Commitment) -> Result<Commitment, CommitmentError> {
        if !a.is_hash() {
            return Err(CommitmentError::EngineMismatch)
        }
        return Err(CommitmentError::UnsupportedOperation)
    }

    ///Rehydrate a stored digest as a commitment.
    pub fn from_digest(&self, digest: &[u8]) -> Result<Commitment, CommitmentError> {
        if digest.len() != DIGEST_LENGTH {
            return Err(SerializationError::DecodingError.into())
        }
        return Ok(Commitment::new(Engine::Hash, digest.to_vec()))
    }

} impl CommitmentScheme for HashCommitter {
    fn engine(&self) -> Engine {
        return Engine::Hash
    }

    fn commit(&self, opening: &Opening) -> Commitment {
        let mut hasher = Sha256::new();
        hasher.update((domains::HASH_COMMITMENT.len() as u64).to_be_bytes());
        hasher.update(domains::HASH_COMMITMENT);
        hasher.update(encode_opening(opening));
        return Commitment::new(Engine::Hash, hasher.finalize().to_vec())
    }
}
