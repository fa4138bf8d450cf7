/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use num_bigint::BigInt;
use zeroize::Zeroize;

use super::Group;
use crate::curve::*;
use crate::errors::SerializationError;
use crate::hashes::*;
use crate::types::Opening;

fn in_range(n: &BigInt) -> bool {
    return n.sign() != num_bigint::Sign::Minus && n < &*GROUP_ORDER
}

lazy_static! {
    pub static ref PEDERSEN_G_POINT: RistrettoPoint = pedersen_g_point();
    pub static ref PEDERSEN_H_POINT: RistrettoPoint = pedersen_h_point();
    pub static ref PEDERSEN_G: RistrettoBasepointTable = pedersen_g_table();
    pub static ref PEDERSEN_H: RistrettoBasepointTable = pedersen_h_table();
}

///get `H`: the basepoint hashed to the curve, so nobody knows `log_G(H)`
fn pedersen_h_point() -> RistrettoPoint {
    return h_point(&encode_point(&G_POINT));
}

///get table of precomputed `H` values
fn pedersen_h_table() -> RistrettoBasepointTable {
    return RistrettoBasepointTable::create(&PEDERSEN_H_POINT);
}

///get `G`
fn pedersen_g_point() -> RistrettoPoint {
    return G_POINT;
}

///get table of precomputed `G` values
fn pedersen_g_table() -> RistrettoBasepointTable {
    return G.to_owned();
}

///The Ristretto prime-order group.
///
///Integers are reduced modulo the group order `l`,
///so values and blindings are only meaningful modulo `l`.
#[derive(Clone)]
pub struct RistrettoGroup {
    g: RistrettoPoint,
    h: RistrettoPoint,
    g_table: RistrettoBasepointTable,
    h_table: RistrettoBasepointTable

} impl RistrettoGroup {
    ///The standard parameters: `G` is the Ristretto basepoint, `H` is derived by hashing `G`.
    pub fn new() -> Self {
        return Self{
            g: *PEDERSEN_G_POINT,
            h: *PEDERSEN_H_POINT,
            g_table: PEDERSEN_G.clone(),
            h_table: PEDERSEN_H.clone()
        }
    }

    ///Independent parameters derived from `seed`: both `G` and `H` are hashed to the curve.
    ///
    ///Commitments made under different seeds can't be combined or compared.
    pub fn from_seed(seed: &[u8]) -> Self {
        let g = domain_h_point(seed, domains::PEDERSEN_SEEDED_G);
        let h = domain_h_point(seed, domains::PEDERSEN_SEEDED_H);
        return Self{
            g, h,
            g_table: RistrettoBasepointTable::create(&g),
            h_table: RistrettoBasepointTable::create(&h)
        }
    }

} impl Default for RistrettoGroup {
    fn default() -> Self {
        return Self::new()
    }

} impl fmt::Debug for RistrettoGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RistrettoGroup")
            .field("g", &self.g.compress())
            .field("h", &self.h.compress())
            .finish()
    }

} impl Group for RistrettoGroup {
    type Element = RistrettoPoint;

    fn label(&self) -> &'static str {
        return "ristretto255"
    }

    fn generators(&self) -> (&RistrettoPoint, &RistrettoPoint) {
        return (&self.g, &self.h)
    }

    fn identity(&self) -> RistrettoPoint {
        return RistrettoPoint::identity()
    }

    fn add(&self, a: &RistrettoPoint, b: &RistrettoPoint) -> RistrettoPoint {
        return a + b
    }

    fn neg(&self, a: &RistrettoPoint) -> RistrettoPoint {
        return -a
    }

    fn mul(&self, scalar: &BigInt, element: &RistrettoPoint) -> RistrettoPoint {
        let mut scalar = scalar_from_bigint(scalar);
        let product = scalar * element;
        scalar.zeroize();
        return product
    }

    ///Uses the precomputed generator tables.
    fn pedersen(&self, value: &BigInt, blinding: &BigInt) -> RistrettoPoint {
        let mut value = scalar_from_bigint(value);
        let mut blinding = scalar_from_bigint(blinding);
        //(v * G) + (r * H)
        let commitment = (&value * &self.g_table) + (&blinding * &self.h_table);
        value.zeroize();
        blinding.zeroize();
        return commitment
    }

    ///Both the value and the blinding must lie in `[0, l)`.
    fn is_canonical(&self, opening: &Opening) -> bool {
        return in_range(&opening.value) && in_range(&opening.blinding)
    }

    fn reduce(&self, opening: &Opening) -> Opening {
        return Opening::new(
            scalar_to_bigint(&scalar_from_bigint(&opening.value)),
            scalar_to_bigint(&scalar_from_bigint(&opening.blinding))
        )
    }

    ///32 byte compressed point
    fn encode(&self, element: &RistrettoPoint) -> Vec<u8> {
        return encode_point(element).to_vec()
    }

    fn decode(&self, bytes: &[u8]) -> Result<RistrettoPoint, SerializationError> {
        if bytes.len() != 32 {
            return Err(SerializationError::DecodingError)
        }

        return match CompressedRistretto::from_slice(bytes).decompress() {
            Some(point) => Ok(point),
            None => Err(SerializationError::DecodingError)
        };
    }
}
