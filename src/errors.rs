//! Error types produced at the engine's input boundary.
//!
//! The numeric engine itself never fails: invalid arms are excluded from the
//! affected populations and empty populations reduce to zeroed statistics.
//! The only fallible operation is resolving caller-supplied material names.

use thiserror::Error;

/// Error returned when resolving a material name supplied by a caller.
///
/// # Examples
///
/// ```
/// use armstat::{Material, MaterialError};
///
/// let error = "granite".parse::<Material>().expect_err("unknown material rejected");
/// assert_eq!(error, MaterialError::Unknown("granite".to_owned()));
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MaterialError {
    /// Returned when the supplied name does not match any supported material.
    #[error(
        "unknown material {0:?}; expected one of steel, aluminum, titanium, carbonFiber, brass, copper"
    )]
    Unknown(String),
}
