/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Elliptic curve functions and constants

pub use curve25519_dalek::{
    constants,
    scalar::Scalar,
    ristretto::{
        RistrettoPoint,
        CompressedRistretto,
        RistrettoBasepointTable,
    },
    traits::{
        Identity,
        IsIdentity,
    }
};
use num_bigint::{BigInt, BigUint, Sign};
use rand::{thread_rng, Rng};

///The basepoint of the elliptic curve.
///`G` is a precomputed table of values, not an EC point, in order to speed up operations.
///To access the EC point itself, use `G_POINT`.
pub const G: &RistrettoBasepointTable = &constants::RISTRETTO_BASEPOINT_TABLE;
///The basepoint of the elliptic curve.
///`G_POINT` is the actual EC point, whereas `G` is a precomputed table of values for faster operations.
pub const G_POINT: RistrettoPoint = constants::RISTRETTO_BASEPOINT_POINT;

lazy_static! {
    ///The order `l` of the Ristretto group, as an integer.
    pub static ref GROUP_ORDER: BigInt = BigInt::from_bytes_le(
        Sign::Plus, constants::BASEPOINT_ORDER.as_bytes());
}

///Encode a point to byte array for hashing purposes.
pub fn encode_point(point: &RistrettoPoint) -> [u8; 32] {
    return point.compress().to_bytes()
}

///Reduce an arbitrary (possibly negative) integer modulo the group order and return it as a scalar.
pub fn scalar_from_bigint(n: &BigInt) -> Scalar {
    let order = &*GROUP_ORDER;
    let reduced = ((n % order) + order) % order;
    let le = reduced.magnitude().to_bytes_le();

    let mut bytes = [0u8; 32];
    bytes[..le.len()].copy_from_slice(&le);
    return Scalar::from_bytes_mod_order(bytes);
}

///Convert a scalar back into its canonical integer representative in `[0, l)`.
pub fn scalar_to_bigint(scalar: &Scalar) -> BigInt {
    return BigInt::from(BigUint::from_bytes_le(scalar.as_bytes()));
}

///return a random scalar
pub fn random_scalar() -> Scalar {
    let mut scalar_bytes = [0u8; 64];
    thread_rng().fill(&mut scalar_bytes[..]);
    return Scalar::from_bytes_mod_order_wide(&scalar_bytes);
}

///return a random point on the curve
pub fn random_point() -> RistrettoPoint {
    return &random_scalar() * G;
}
