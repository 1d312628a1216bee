//! # Error Types
//!
//! Constructors and accessors in this crate are total and never fail. The
//! only fallible surface is the JSON bridge in [`crate::json`], which
//! reports through [`HalError`].

use thiserror::Error;

/// Error raised while encoding or decoding a HAL document.
#[derive(Error, Debug)]
pub enum HalError {
    /// The base record of a resource already uses a reserved envelope member.
    #[error("base record must not define reserved member `{field}`")]
    ReservedField {
        /// The colliding member name (`_embedded` or `_links`).
        field: String,
    },

    /// A HAL document must be a JSON object.
    #[error("HAL document must be a JSON object, found {found}")]
    NotAnObject {
        /// The JSON kind that was found instead.
        found: &'static str,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
