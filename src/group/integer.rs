/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use num_bigint::BigInt;
use serde::{Serialize, Deserialize};

use super::Group;
use crate::errors::SerializationError;

///The integers under addition, with two small public generators.
///
///**This is not binding.** Anyone can solve `v*G + b*H = v'*G + b'*H` for another opening.
///It exists so the algebraic laws can be checked with numbers a human can follow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerGroup {
    g: BigInt,
    h: BigInt

} impl IntegerGroup {
    pub fn new(g: impl Into<BigInt>, h: impl Into<BigInt>) -> Self {
        return Self{
            g: g.into(), h: h.into()
        }
    }

} impl Group for IntegerGroup {
    type Element = BigInt;

    fn label(&self) -> &'static str {
        return "integer"
    }

    fn generators(&self) -> (&BigInt, &BigInt) {
        return (&self.g, &self.h)
    }

    fn identity(&self) -> BigInt {
        return BigInt::from(0)
    }

    fn add(&self, a: &BigInt, b: &BigInt) -> BigInt {
        return a + b
    }

    fn neg(&self, a: &BigInt) -> BigInt {
        return -a
    }

    fn mul(&self, scalar: &BigInt, element: &BigInt) -> BigInt {
        return scalar * element
    }

    ///Minimal two's complement, big endian.
    fn encode(&self, element: &BigInt) -> Vec<u8> {
        return element.to_signed_bytes_be()
    }

    fn decode(&self, bytes: &[u8]) -> Result<BigInt, SerializationError> {
        if bytes.is_empty() {
            return Err(SerializationError::DecodingError)
        }
        let element = BigInt::from_signed_bytes_be(bytes);
        //reject redundant sign-extension bytes so every element has exactly one encoding
        if element.to_signed_bytes_be() != bytes {
            return Err(SerializationError::DecodingError)
        }
        return Ok(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example() {
        let group = IntegerGroup::new(5, 7);
        assert_eq!(group.pedersen(&BigInt::from(50), &BigInt::from(10)), BigInt::from(320));
        assert_eq!(group.pedersen(&BigInt::from(30), &BigInt::from(20)), BigInt::from(290));
    }

    #[test]
    fn encoding_is_canonical() {
        let group = IntegerGroup::new(5, 7);
        for n in [0i64, 1, -1, 127, 128, -128, -129, 610, i64::MAX] {
            let element = BigInt::from(n);
            assert_eq!(group.decode(&group.encode(&element)).unwrap(), element);
        }
        //128 padded with a redundant leading zero byte
        assert!(group.decode(&[0, 0, 128]).is_err());
        assert!(group.decode(&[]).is_err());
    }

    #[test]
    fn every_opening_is_canonical() {
        let group = IntegerGroup::new(5, 7);
        let opening = crate::types::Opening::new(-100, BigInt::from(u64::MAX) * BigInt::from(u64::MAX));
        assert!(group.is_canonical(&opening));
        assert_eq!(group.reduce(&opening), opening);
    }

    #[test]
    fn params_id_tracks_generators() {
        let a = IntegerGroup::new(5, 7);
        assert_eq!(a.params_id(), IntegerGroup::new(5, 7).params_id());
        assert_ne!(a.params_id(), IntegerGroup::new(7, 5).params_id());
        assert_ne!(a.params_id(), IntegerGroup::new(5, 8).params_id());
    }

    #[test]
    fn loads_from_config() {
        let stored = serde_json::to_string(&IntegerGroup::new(5, 7)).unwrap();
        let group: IntegerGroup = serde_json::from_str(&stored).unwrap();
        assert_eq!(group, IntegerGroup::new(5, 7));
        assert_eq!(group.params_id(), IntegerGroup::new(5, 7).params_id());
    }
}
