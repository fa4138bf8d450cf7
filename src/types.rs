/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::Add;

use crate::tobytes::*;
use crate::blinding::random_blinding;

use num_bigint::BigInt;
use num_traits::Zero;

///The secret witness of a commitment.
/// * `value`: The quantity being committed to
/// * `blinding`: The random blinding factor which hides `value`
///
///Neither field has a fixed bit width.
///Never reuse a blinding factor for two commitments whose relationship should stay hidden.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Opening {
    pub value: BigInt,
    pub blinding: BigInt

} impl Opening {
    ///Create an opening from a value and a blinding factor
    pub fn new(value: impl Into<BigInt>, blinding: impl Into<BigInt>) -> Self {
        return Self{
            value: value.into(), blinding: blinding.into()
        };
    }

    ///Create an opening for `value` with a freshly drawn blinding factor
    pub fn random(value: impl Into<BigInt>) -> Self {
        return Self::new(value, random_blinding())
    }

} impl Add<&Opening> for &Opening {
    type Output = Opening;

    ///Component-wise sum: `(v1 + v2, b1 + b2)`
    fn add(self, other: &Opening) -> Opening {
        return Opening{
            value: &self.value + &other.value,
            blinding: &self.blinding + &other.blinding
        }
    }

} impl Drop for Opening {
    fn drop(&mut self) {
        //best-effort: BigInt doesn't expose its limbs for zeroizing
        self.value.set_zero();
        self.blinding.set_zero();
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for Opening {}

///Identifies a set of public parameters of an additive committer.
///
///This is a domain-separated digest of the group's label and generators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ParamsId(pub [u8; 32]);

///Which engine produced a commitment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Engine {
    ///An additive (Pedersen) committer with the given public parameters.
    Additive(ParamsId),
    ///The hash committer.
    Hash
}

const TAG_HASH: u8 = 0;
const TAG_ADDITIVE: u8 = 1;

///An opaque, immutable commitment.
///
///Two commitments are equal iff they come from the same engine and their canonical encodings are equal.
///The engine tag is only used to refuse mixing commitments from different engines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "UncheckedCommitment")]
pub struct Commitment {
    engine: Engine,
    bytes: Vec<u8>

} impl Commitment {
    pub(crate) fn new(engine: Engine, bytes: Vec<u8>) -> Self {
        return Self{engine, bytes}
    }

    ///Rebuild a commitment read from storage: digests must be `DIGEST_LENGTH` bytes, group elements non-empty.
    fn checked(engine: Engine, bytes: Vec<u8>) -> Result<Self, SerializationError> {
        let valid = match engine {
            Engine::Hash => bytes.len() == crate::hash_commitment::DIGEST_LENGTH,
            Engine::Additive(_) => !bytes.is_empty()
        };
        if !valid {
            return Err(SerializationError::DecodingError)
        }
        return Ok(Self::new(engine, bytes))
    }

    ///The engine which produced this commitment.
    pub fn engine(&self) -> Engine {
        return self.engine
    }

    ///The canonical encoding of the commitment itself (group element or digest), without the engine tag.
    pub fn as_bytes(&self) -> &[u8] {
        return &self.bytes
    }

    pub fn is_hash(&self) -> bool {
        return self.engine == Engine::Hash
    }
}

//serde goes through `Commitment::checked` too
#[derive(Deserialize)]
struct UncheckedCommitment {
    engine: Engine,
    bytes: Vec<u8>
}

impl TryFrom<UncheckedCommitment> for Commitment {
    type Error = SerializationError;

    fn try_from(raw: UncheckedCommitment) -> Result<Self, SerializationError> {
        return Commitment::checked(raw.engine, raw.bytes)
    }
}

#[cfg(feature = "to_bytes")] impl ToBytes<'_> for Commitment {
    ///`tag || [params id] || commitment bytes`
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        let mut out = Vec::with_capacity(33 + self.bytes.len());
        match self.engine {
            Engine::Hash => out.push(TAG_HASH),
            Engine::Additive(id) => {
                out.push(TAG_ADDITIVE);
                out.extend_from_slice(&id.0);
            }
        }
        out.extend_from_slice(&self.bytes);
        return Ok(out)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        return match bytes.split_first() {
            Some((&TAG_HASH, digest)) => Self::checked(Engine::Hash, digest.to_vec()),
            Some((&TAG_ADDITIVE, rest)) if rest.len() >= 32 => {
                let (id, element) = rest.split_at(32);
                let mut params = [0u8; 32];
                params.copy_from_slice(id);
                Self::checked(Engine::Additive(ParamsId(params)), element.to_vec())
            },
            _ => Err(SerializationError::DecodingError)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openings_add_componentwise() {
        let sum = &Opening::new(50, 10) + &Opening::new(30, 20);
        assert_eq!(sum, Opening::new(80, 30));
    }

    #[test]
    fn random_openings_differ() {
        let a = Opening::random(100);
        let b = Opening::random(100);
        assert_eq!(a.value, b.value);
        assert_ne!(a.blinding, b.blinding);
    }

    #[cfg(feature = "to_bytes")]
    #[test]
    fn commitment_bytes_round_trip() {
        let additive = Commitment::new(Engine::Additive(ParamsId([7u8; 32])), vec!(1, 64));
        let decoded = Commitment::from_bytes(&additive.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded, additive);

        let hash = Commitment::new(Engine::Hash, vec!(9u8; 32));
        let decoded = Commitment::from_bytes(&hash.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded, hash);

        assert!(Commitment::from_bytes(&[TAG_HASH, 1, 2, 3]).is_err());
        assert!(Commitment::from_bytes(&[]).is_err());
        assert!(Commitment::from_bytes(&[5u8; 40]).is_err());
    }

    #[test]
    fn serde_rejects_malformed_commitments() {
        let digest = Commitment::new(Engine::Hash, vec!(3u8; 32));
        let stored = serde_json::to_string(&digest).unwrap();
        assert_eq!(serde_json::from_str::<Commitment>(&stored).unwrap(), digest);

        let short = serde_json::to_string(&Commitment::new(Engine::Hash, vec!(1, 2, 3))).unwrap();
        assert!(serde_json::from_str::<Commitment>(&short).is_err());

        let empty = serde_json::to_string(&Commitment::new(Engine::Additive(ParamsId([0u8; 32])), vec!())).unwrap();
        assert!(serde_json::from_str::<Commitment>(&empty).is_err());
    }

    #[cfg(feature = "to_bytes")]
    #[test]
    fn bincode_rejects_malformed_commitments() {
        let short = bincode::serialize(&Commitment::new(Engine::Hash, vec!(1, 2, 3))).unwrap();
        assert!(bincode::deserialize::<Commitment>(&short).is_err());
        //the checked ToBytes path agrees
        assert!(Commitment::from_bytes(&[TAG_ADDITIVE; 34]).is_ok());
        assert!(Commitment::from_bytes(&[TAG_ADDITIVE; 33]).is_err());
    }

    #[cfg(feature = "to_bytes")]
    #[test]
    fn opening_bytes_round_trip() {
        let opening = Opening::new(BigInt::from(-3), random_blinding());
        let decoded = Opening::from_bytes(&opening.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded, opening);
    }
}
