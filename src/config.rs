// src/config.rs

//! Hasher settings shared by every node that must agree on ownership.
//!
//! The struct derives serde so it can sit inside whatever settings the
//! caller already loads; this crate reads no files itself. Missing fields
//! fall back to murmur3 with seed 0.

use serde::{Deserialize, Serialize};

use crate::hasher::{Blake2b32, Blake2b64, Hash32, Hash64, Murmur32, Murmur64};

/// Digest family behind the selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Murmur3,
    Blake2b,
}

/// Which capability to build, and its seed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HasherConfig {
    pub algorithm: HashAlgorithm,
    pub seed: u32,
}

impl HasherConfig {
    pub fn new(algorithm: HashAlgorithm, seed: u32) -> Self {
        Self { algorithm, seed }
    }

    /// 32-bit capability for [`hrw_sort32`](crate::hrw_sort32).
    pub fn build32(&self) -> Box<dyn Hash32 + Send> {
        match self.algorithm {
            HashAlgorithm::Murmur3 => Box::new(Murmur32::new(self.seed)),
            HashAlgorithm::Blake2b => Box::new(Blake2b32::new(self.seed)),
        }
    }

    /// 64-bit capability for [`hrw_sort64`](crate::hrw_sort64).
    pub fn build64(&self) -> Box<dyn Hash64 + Send> {
        match self.algorithm {
            HashAlgorithm::Murmur3 => Box::new(Murmur64::new(self.seed)),
            HashAlgorithm::Blake2b => Box::new(Blake2b64::new(self.seed)),
        }
    }
}
