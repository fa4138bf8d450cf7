/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!Pedersen commitments
//!
//!`C = v*G + r*H` over any `Group`. Commitments are additively homomorphic:
//!`commit(v1, r1) + commit(v2, r2) == commit(v1 + v2, r1 + r2)`.

use num_bigint::BigInt;

use crate::internal_common::*;

///Pedersen committer over the group `G`, whose generators are the public parameters.
#[derive(Debug, Clone)]
pub struct AdditiveCommitter<G: Group> {
    group: G,
    params: ParamsId

} impl<G: Group> AdditiveCommitter<G> {
    ///Fix the public parameters. Every party comparing or combining commitments must use equal ones.
    pub fn new(group: G) -> Self {
        let params = group.params_id();
        return Self{group, params}
    }

    pub fn group(&self) -> &G {
        return &self.group
    }

    pub fn params_id(&self) -> ParamsId {
        return self.params
    }

    fn wrap(&self, element: &G::Element) -> Commitment {
        return Commitment::new(self.engine(), self.group.encode(element))
    }

    ///Recover the group element behind a commitment made with these parameters.
    pub(crate) fn element(&self, commitment: &Commitment) -> Result<G::Element, CommitmentError> {
        match commitment.engine() {
            Engine::Additive(params) if params == self.params => {},
            Engine::Additive(_) => {
                tracing::warn!("refusing a commitment made with different public parameters");
                return Err(CommitmentError::EngineMismatch)
            },
            Engine::Hash => {
                tracing::warn!("refusing a hash commitment in an additive operation");
                return Err(CommitmentError::EngineMismatch)
            }
        }
        return Ok(self.group.decode(commitment.as_bytes())?)
    }

    ///Rehydrate a stored commitment, checking that it belongs to these parameters and decodes to a group element.
    pub fn decode(&self, commitment: &Commitment) -> Result<Commitment, CommitmentError> {
        let element = self.element(commitment)?;
        return Ok(self.wrap(&element))
    }

    ///A commitment to `value` with a zero blinding factor, ie a publicly known amount such as a fee.
    pub fn commit_value(&self, value: &BigInt) -> Commitment {
        return self.wrap(&self.group.mul(value, self.group.generators().0))
    }

    ///The commitment to `(0, 0)`, the identity of `combine`.
    pub fn identity(&self) -> Commitment {
        return self.wrap(&self.group.identity())
    }

    ///`a + b`
    pub fn combine(&self, a: &Commitment, b: &Commitment) -> Result<Commitment, CommitmentError> {
        let a = self.element(a)?;
        let b = self.element(b)?;
        return Ok(self.wrap(&self.group.add(&a, &b)))
    }

    ///`-a`, the commitment to `(-v, -r)`
    pub fn negate(&self, a: &Commitment) -> Result<Commitment, CommitmentError> {
        let a = self.element(a)?;
        return Ok(self.wrap(&self.group.neg(&a)))
    }

    ///Add up any number of commitments. The empty sum is `identity()`.
    #[tracing::instrument(name = "pedersen.sum", level = "debug", skip_all)]
    pub fn sum<'a, I>(&self, commitments: I) -> Result<Commitment, CommitmentError>
    where I: IntoIterator<Item = &'a Commitment> {
        return Ok(self.wrap(&self.sum_elements(commitments)?))
    }

    pub(crate) fn sum_elements<'a, I>(&self, commitments: I) -> Result<G::Element, CommitmentError>
    where I: IntoIterator<Item = &'a Commitment> {
        let mut total = self.group.identity();
        for commitment in commitments {
            total = self.group.add(&total, &self.element(commitment)?);
        }
        return Ok(total)
    }

} impl<G: Group> CommitmentScheme for AdditiveCommitter<G> {
    fn engine(&self) -> Engine {
        return Engine::Additive(self.params)
    }

    ///`v*G + r*H`
    fn commit(&self, opening: &Opening) -> Commitment {
        return self.wrap(&self.group.pedersen(&opening.value, &opening.blinding))
    }

    ///Only canonical openings are accepted, so every commitment has exactly one valid opening.
    fn verify(&self, commitment: &Commitment, opening: &Opening) -> bool {
        return self.group.is_canonical(opening)
            && commitment.engine() == self.engine()
            && &self.commit(opening) == commitment
    }

    fn reduce(&self, opening: &Opening) -> Opening {
        return self.group.reduce(opening)
    }
}
