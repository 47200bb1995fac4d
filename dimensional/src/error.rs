/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::vector::DimensionVector;

/// Failures of the run-time checked quantity layer. Statically typed
/// quantities reject the same mistakes at build time instead.
#[derive(Serialize, Deserialize, Error, PartialEq, Eq, Clone, Debug)]
pub enum DimensionError {
    #[error("Incompatible dimensions: {0} <-> {1}")]
    DimensionMismatch(DimensionVector, DimensionVector),
    #[error("Invalid exponent: {0} (must be positive; use division for reciprocals)")]
    InvalidExponent(i32),
    #[error("Exponent overflow: {0} \u{22c5} {1}")]
    ExponentOverflow(DimensionVector, DimensionVector),
    #[error("Exponent overflow: ({0})^{1}")]
    PowerOverflow(DimensionVector, i32),
}
