/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Domain separated hashing helpers used to derive public parameters.

use blake2::{
    Blake2b,
    Digest,
    digest::consts::{U32, U64}
};
use crate::curve::*;

type Blake2b256 = Blake2b<U32>;
type Blake2b512 = Blake2b<U64>;

//the domain is length-prefixed so that `(domain, msg)` pairs can't be shifted into one another
fn domain_hasher<D: Digest>(domain: &[u8]) -> D {
    let mut hasher = D::new();
    hasher.update((domain.len() as u64).to_be_bytes());
    hasher.update(domain);
    return hasher
}

///Hash bytes to bytes, domain separated.
pub fn domain_h_bytes(msg: &[u8], domain: &[u8]) -> [u8; 32] {
    let mut hasher: Blake2b256 = domain_hasher(domain);
    hasher.update(msg);
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    return out;
}

///Hash bytes to elliptic curve point, domain separated.
pub fn domain_h_point(msg: &[u8], domain: &[u8]) -> RistrettoPoint {
    let mut hasher: Blake2b512 = domain_hasher(domain);
    hasher.update(msg);
    let mut uniform = [0u8; 64];
    uniform.copy_from_slice(&hasher.finalize());
    return RistrettoPoint::from_uniform_bytes(&uniform);
}

///Hash bytes to elliptic curve point.
pub fn h_point(msg: &[u8]) -> RistrettoPoint {
    let mut hasher = Blake2b512::default();
    hasher.update(msg);
    let mut uniform = [0u8; 64];
    uniform.copy_from_slice(&hasher.finalize());
    return RistrettoPoint::from_uniform_bytes(&uniform);
}

pub mod domains {
    //! Pre-defined hash domains

    pub const PEDERSEN_SEEDED_G: &[u8] =    "pedersen_g".as_bytes();
    pub const PEDERSEN_SEEDED_H: &[u8] =    "pedersen_h".as_bytes();

    pub const PARAMS_ID: &[u8] =            "params_id".as_bytes();

    pub const HASH_COMMITMENT: &[u8] =      "hash_commit".as_bytes();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domains_separate_outputs() {
        let msg = b"commitment";
        assert_ne!(
            domain_h_bytes(msg, domains::PEDERSEN_SEEDED_G),
            domain_h_bytes(msg, domains::PEDERSEN_SEEDED_H)
        );
        assert_eq!(
            domain_h_point(msg, domains::PEDERSEN_SEEDED_G),
            domain_h_point(msg, domains::PEDERSEN_SEEDED_G)
        );
    }
}
