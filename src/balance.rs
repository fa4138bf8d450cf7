/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Zero-sum checks over Pedersen commitments, as used to balance confidential transactions.
//!
//! A balance check only certifies `Σ in - Σ out = 0` in the group.
//! It says nothing about whether any single value was negative or wrapped around the group order;
//! ruling that out needs a range proof on every output.

use num_bigint::BigInt;

use crate::internal_common::*;

///Checks that input and output commitments balance, without opening any of them.
#[derive(Debug, Clone)]
pub struct BalanceChecker<G: Group> {
    committer: AdditiveCommitter<G>

} impl<G: Group> BalanceChecker<G> {
    pub fn new(committer: AdditiveCommitter<G>) -> Self {
        return Self{committer}
    }

    pub fn committer(&self) -> &AdditiveCommitter<G> {
        return &self.committer
    }

    ///`Σ inputs - Σ outputs == 0`
    ///
    ///Both values and blindings have to cancel,
    ///so the last output's blinding is normally chosen with `blinding::balancing_opening`.
    ///Any commitment from another engine or parameter set is an error, never `false`.
    #[tracing::instrument(name = "balance.check_balance", level = "debug", skip_all)]
    pub fn check_balance(&self, inputs: &[Commitment], outputs: &[Commitment]) -> Result<bool, CommitmentError> {
        return self.check(inputs, outputs, &BigInt::from(0), &BigInt::from(0))
    }

    ///`Σ inputs == Σ outputs + extra*G`, where `extra` is a public amount such as a fee.
    #[tracing::instrument(name = "balance.check_balance_with_extra", level = "debug", skip_all)]
    pub fn check_balance_with_extra(&self, inputs: &[Commitment], outputs: &[Commitment], extra: &BigInt)
    -> Result<bool, CommitmentError> {
        return self.check(inputs, outputs, extra, &BigInt::from(0))
    }

    ///`Σ inputs == Σ outputs + extra*G + excess*H`
    ///
    ///`excess` is the published blinding residual (`blinding::excess`),
    ///which lets every commitment keep an independently random blinding factor.
    #[tracing::instrument(name = "balance.check_balance_with_excess", level = "debug", skip_all)]
    pub fn check_balance_with_excess(&self, inputs: &[Commitment], outputs: &[Commitment], extra: &BigInt, excess: &BigInt)
    -> Result<bool, CommitmentError> {
        return self.check(inputs, outputs, extra, excess)
    }

    fn check(&self, inputs: &[Commitment], outputs: &[Commitment], extra: &BigInt, excess: &BigInt)
    -> Result<bool, CommitmentError> {
        let group = self.committer.group();
        let ins = self.committer.sum_elements(inputs)?;
        let outs = self.committer.sum_elements(outputs)?;

        //everything that's supposed to account for the inputs
        let accounted = group.add(&outs, &group.pedersen(extra, excess));
        let residual = group.add(&ins, &group.neg(&accounted));

        let balanced = residual == group.identity();
        tracing::debug!(inputs = inputs.len(), outputs = outputs.len(), balanced);
        return Ok(balanced)
    }
}
