/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The contract shared by every commitment engine.

use num_bigint::BigInt;

use crate::errors::CommitmentError;
use crate::types::*;

///A hiding, binding commitment scheme.
///
///Every method is a pure function of its arguments and the engine's fixed public parameters,
///so engines can be shared freely between threads.
pub trait CommitmentScheme: Send + Sync {
    ///The engine tag stamped on every commitment this scheme produces.
    fn engine(&self) -> Engine;

    ///Commit to an opening.
    fn commit(&self, opening: &Opening) -> Commitment;

    ///Check that `opening` opens `commitment`.
    ///
    ///A mismatch, including a commitment from another engine, is an ordinary `false`.
    fn verify(&self, commitment: &Commitment, opening: &Opening) -> bool {
        return commitment.engine() == self.engine()
            && &self.commit(opening) == commitment
    }

    ///Like `verify`, but as a `Result` so it can be chained with `?`.
    fn open(&self, commitment: &Commitment, opening: &Opening) -> Result<(), CommitmentError> {
        return match self.verify(commitment, opening) {
            true => Ok(()),
            false => Err(CommitmentError::VerificationFailed)
        }
    }

    ///The canonical form of `opening` for this scheme, the only form `verify` accepts.
    fn reduce(&self, opening: &Opening) -> Opening {
        return opening.clone()
    }

    ///Commit to `value` with a fresh random blinding factor,
    ///returning the commitment and the (canonical) opening that must be kept secret.
    fn commit_random(&self, value: impl Into<BigInt>) -> (Commitment, Opening) where Self: Sized {
        let opening = self.reduce(&Opening::random(value));
        return (self.commit(&opening), opening)
    }
}
