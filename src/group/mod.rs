/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Additive groups that Pedersen commitments can be computed over.
//!
//! A group is the public-parameter object of an `AdditiveCommitter`:
//! it fixes the two generators `G` and `H` for its whole lifetime.
//! `IntegerGroup` is a transparent toy for testing the algebraic laws,
//! `RistrettoGroup` is the one to use when binding actually matters.

mod integer;
mod ristretto;

pub use integer::IntegerGroup;
pub use ristretto::RistrettoGroup;

use std::fmt::Debug;

use num_bigint::BigInt;

use crate::errors::SerializationError;
use crate::hashes::{domain_h_bytes, domains};
use crate::types::{Opening, ParamsId};

///An additive group with two public generators.
pub trait Group: Send + Sync {
    type Element: Clone + PartialEq + Debug + Send + Sync;

    ///Short name, mixed into the parameter id.
    fn label(&self) -> &'static str;

    ///The generators `(G, H)`: values are scaled by `G`, blindings by `H`.
    fn generators(&self) -> (&Self::Element, &Self::Element);

    fn identity(&self) -> Self::Element;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn neg(&self, a: &Self::Element) -> Self::Element;

    ///Scalar multiplication by an arbitrary integer.
    fn mul(&self, scalar: &BigInt, element: &Self::Element) -> Self::Element;

    ///`value * G + blinding * H`
    fn pedersen(&self, value: &BigInt, blinding: &BigInt) -> Self::Element {
        let (g, h) = self.generators();
        return self.add(&self.mul(value, g), &self.mul(blinding, h))
    }

    ///Whether `opening` is the one representative this group accepts when opening a commitment.
    ///
    ///Groups of finite order must insist on reduced integers,
    ///otherwise `(v + order, b)` would open the same commitment as `(v, b)`.
    fn is_canonical(&self, _opening: &Opening) -> bool {
        return true
    }

    ///Map an opening to its canonical representative. It commits to the same element.
    fn reduce(&self, opening: &Opening) -> Opening {
        return opening.clone()
    }

    ///Canonical encoding of an element. Equal elements must encode to equal bytes.
    fn encode(&self, element: &Self::Element) -> Vec<u8>;

    ///Inverse of `encode`. Non-canonical encodings are rejected.
    fn decode(&self, bytes: &[u8]) -> Result<Self::Element, SerializationError>;

    ///Identify this parameter set: a domain separated hash of the label and both generators.
    fn params_id(&self) -> ParamsId {
        let (g, h) = self.generators();
        let (g, h) = (self.encode(g), self.encode(h));
        let mut msg = Vec::new();
        for field in [self.label().as_bytes(), g.as_slice(), h.as_slice()] {
            msg.extend_from_slice(&(field.len() as u64).to_be_bytes());
            msg.extend_from_slice(field);
        }
        return ParamsId(domain_h_bytes(&msg, domains::PARAMS_ID))
    }
}
