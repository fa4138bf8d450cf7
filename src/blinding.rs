/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Blinding factor generation.
//!
//! Blindings come from `thread_rng`, which is a CSPRNG reseeded from the OS.
//! Nothing here can detect a reused blinding factor: that is the caller's responsibility.

use num_bigint::{BigInt, RandBigInt};
use rand::thread_rng;

use crate::types::Opening;

///Bit length of freshly drawn blinding factors.
///This comfortably exceeds the order of any group used in this crate.
pub const BLINDING_BITS: u64 = 256;

///return a uniformly random, non-negative blinding factor of `BLINDING_BITS` bits
pub fn random_blinding() -> BigInt {
    return BigInt::from(thread_rng().gen_biguint(BLINDING_BITS));
}

///The blinding residual `Σ in - Σ out` of a set of openings.
///
///Publishing this reveals nothing about any individual blinding factor,
///and lets a balance check succeed without the blindings having been chosen to cancel.
pub fn excess(inputs: &[Opening], outputs: &[Opening]) -> BigInt {
    let ins: BigInt = inputs.iter().map(|o| &o.blinding).sum();
    let outs: BigInt = outputs.iter().map(|o| &o.blinding).sum();
    return ins - outs
}

///Given every input opening and all but the last output opening,
///build the last output's opening for `value`, with the blinding that makes the blindings cancel exactly.
pub fn balancing_opening(inputs: &[Opening], outputs: &[Opening], value: impl Into<BigInt>) -> Opening {
    return Opening::new(value, excess(inputs, outputs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blindings_are_fresh_and_bounded() {
        let a = random_blinding();
        let b = random_blinding();
        assert_ne!(a, b);
        assert!(a.bits() <= BLINDING_BITS);
        assert!(a >= BigInt::from(0));
    }

    #[test]
    fn balancing_opening_cancels() {
        let inputs = [Opening::random(100), Opening::random(5)];
        let first = Opening::random(60);
        let last = balancing_opening(&inputs, &[first.clone()], 45);
        assert_eq!(last.value, BigInt::from(45));
        assert_eq!(excess(&inputs, &[first, last]), BigInt::from(0));
    }
}
