/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

///Encoding/serialization errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerializationError {
    ///Failure to serialize.
    #[error("Encoding error.")]
    EncodingError,
    ///Failure to deserialize.
    #[error("Decoding error.")]
    DecodingError,
}

///Commitment errors
///
///A failed opening is normally reported as `false` by `verify`;
///`VerificationFailed` only appears when the caller asks for a `Result` via `open`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitmentError {
    ///The opening does not match the commitment.
    #[error("The opening does not match this commitment.")]
    VerificationFailed,
    ///The commitments were produced by different engines, or by additive committers
    ///with different public parameters.
    #[error("Commitments from different engines or parameters cannot be mixed.")]
    EngineMismatch,
    ///The operation is not defined for this kind of commitment,
    ///ie combining or negating hash commitments.
    #[error("Operation not supported by this commitment scheme.")]
    UnsupportedOperation,
    ///Two distinct openings would serialize to the same bytes.
    #[error("Ambiguous opening encoding.")]
    EncodingAmbiguity,
    ///A stored commitment could not be decoded.
    #[error(transparent)]
    Serialization(#[from] SerializationError),
}
