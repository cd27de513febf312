// src/error.rs

//! Errors raised while ordering candidates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// HRW ordering errors
#[derive(Debug, Error, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum HrwError {
    /// Candidate type has no native ordering and yields no raw identity.
    #[error("candidate kind `{0}` has neither a native ordering nor a raw identity")]
    UnsupportedKind(String),
}

impl HrwError {
    /// `UnsupportedKind` carrying the element type name.
    pub fn unsupported<T: ?Sized>() -> Self {
        HrwError::UnsupportedKind(std::any::type_name::<T>().to_string())
    }
}
