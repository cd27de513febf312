// src/lib.rs
// -------------------------------------------------
// * candidate.rs : candidate kinds and canonical order
// * finalizer.rs : Murmur3 avalanche finalizers
// * hasher.rs    : hash capabilities (murmur3 / blake2b / std)
// * weight.rs    : index → weight map
// * hrw.rs       : HRW selector (pivot + rotation)
// * config.rs    : serde hasher settings
// -------------------------------------------------

//! rvh_unihrw – uniform HRW (Highest-Random-Weight) ordering
//!
//! * **Deterministic**: same candidates + same key → same order, on every node
//! * **Uniform**: across many keys, each candidate wins about equally often
//! * **Generic**: bytes, text, integers, or any type implementing [`Candidate`]
//!
//! The selector puts the candidates in a key-independent canonical order,
//! derives one pivot from the key, and rotates the slice in place so that
//! index 0 holds the owner and the rest is a ranked fallback list.
//!
//! ```rust
//! use rvh_unihrw::{hrw_sort64, Murmur64};
//!
//! let mut shards = vec![3u32, 1, 2, 0];
//! let mut hasher = Murmur64::new(0);
//! hrw_sort64(&mut shards, b"user:42", &mut hasher).unwrap();
//! let owner = shards[0];
//! # assert!(owner < 4);
//! ```

pub mod candidate;
pub mod config;
pub mod error;
pub mod finalizer;
pub mod hasher;
pub mod hrw;
pub mod weight;

pub use candidate::Candidate;
pub use config::{HashAlgorithm, HasherConfig};
pub use error::HrwError;
pub use finalizer::{finalize32, finalize64, HashWord};
pub use hasher::{
    digest32, digest64, Blake2b32, Blake2b64, BuildHasher64, Hash32, Hash64, HashState, Murmur32,
    Murmur64,
};
pub use hrw::{hrw_sort32, hrw_sort64, pivot32, pivot64, select_owner32, select_owner64};
pub use weight::{weight_map32, weight_map64, WeightMap};
