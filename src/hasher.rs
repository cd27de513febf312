// src/hasher.rs

//! Hash capabilities used by the HRW selector.
//!
//! A capability is reused across many digests: the selector always calls
//! `reset` → `write` → `sum32` / `sum64`, so no state leaks between digests.
//! Widths are separate traits, so a 64-bit-only capability cannot be handed
//! to the 32-bit selector.
//!
//! | type              | width   | backing crate                 |
//! |-------------------|---------|-------------------------------|
//! | [`Murmur32`]      | 32      | `murmur3::murmur3_32`         |
//! | [`Murmur64`]      | 64      | `murmur3::murmur3_x64_128`    |
//! | [`Blake2b32`]     | 32      | `blake2::Blake2b<U4>`         |
//! | [`Blake2b64`]     | 64      | `blake2::Blake2b<U8>`         |
//! | [`BuildHasher64`] | 64      | any `std::hash::BuildHasher`  |

use std::fmt;
use std::hash::{BuildHasher, Hasher};

use blake2::digest::consts::{U4, U8};
use blake2::{Blake2b, Digest};

/// Resettable streaming digest state.
pub trait HashState {
    /// Drops everything absorbed so far; the seed is kept.
    fn reset(&mut self);
    /// Absorbs `data`.
    fn write(&mut self, data: &[u8]);
}

/// Capability producing 32-bit digests.
pub trait Hash32: HashState {
    fn sum32(&self) -> u32;
}

/// Capability producing 64-bit digests.
pub trait Hash64: HashState {
    fn sum64(&self) -> u64;
}

impl<H: HashState + ?Sized> HashState for Box<H> {
    fn reset(&mut self) {
        (**self).reset()
    }

    fn write(&mut self, data: &[u8]) {
        (**self).write(data)
    }
}

impl<H: Hash32 + ?Sized> Hash32 for Box<H> {
    fn sum32(&self) -> u32 {
        (**self).sum32()
    }
}

impl<H: Hash64 + ?Sized> Hash64 for Box<H> {
    fn sum64(&self) -> u64 {
        (**self).sum64()
    }
}

/// One-shot 32-bit digest of `data` on a reused capability.
#[inline]
pub fn digest32<H: Hash32 + ?Sized>(hasher: &mut H, data: &[u8]) -> u32 {
    hasher.reset();
    hasher.write(data);
    hasher.sum32()
}

/// One-shot 64-bit digest of `data` on a reused capability.
#[inline]
pub fn digest64<H: Hash64 + ?Sized>(hasher: &mut H, data: &[u8]) -> u64 {
    hasher.reset();
    hasher.write(data);
    hasher.sum64()
}

// ---------------------------------------------------------------------
// ▼ Murmur3
// ---------------------------------------------------------------------

/// Seeded MurmurHash3 x86_32.
///
/// Input is buffered by `write` and hashed on `sum32`; the buffer keeps its
/// allocation across `reset`.
#[derive(Debug, Clone, Default)]
pub struct Murmur32 {
    seed: u32,
    buf: Vec<u8>,
}

impl Murmur32 {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            buf: Vec::new(),
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl HashState for Murmur32 {
    fn reset(&mut self) {
        self.buf.clear();
    }

    fn write(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }
}

impl Hash32 for Murmur32 {
    fn sum32(&self) -> u32 {
        // read errors are swallowed: the digest of a failed read is 0
        match murmur3::murmur3_32(&mut self.buf.as_slice(), self.seed) {
            Ok(h) => h,
            Err(err) => {
                tracing::warn!(%err, len = self.buf.len(), "murmur3_32 read failed");
                0
            }
        }
    }
}

/// Seeded MurmurHash3 x64_128, truncated to its first 64-bit half (`h1`).
#[derive(Debug, Clone, Default)]
pub struct Murmur64 {
    seed: u32,
    buf: Vec<u8>,
}

impl Murmur64 {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            buf: Vec::new(),
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl HashState for Murmur64 {
    fn reset(&mut self) {
        self.buf.clear();
    }

    fn write(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }
}

impl Hash64 for Murmur64 {
    fn sum64(&self) -> u64 {
        match murmur3::murmur3_x64_128(&mut self.buf.as_slice(), self.seed) {
            Ok(h) => h as u64,
            Err(err) => {
                tracing::warn!(%err, len = self.buf.len(), "murmur3_x64_128 read failed");
                0
            }
        }
    }
}

// ---------------------------------------------------------------------
// ▼ BLAKE2b
// ---------------------------------------------------------------------

/// BLAKE2b with a 4-byte digest, read little-endian.
///
/// The seed is absorbed as a 4-byte little-endian prefix after every reset.
#[derive(Clone)]
pub struct Blake2b32 {
    seed: u32,
    state: Blake2b<U4>,
}

impl Blake2b32 {
    pub fn new(seed: u32) -> Self {
        let mut hasher = Self {
            seed,
            state: <Blake2b<U4> as Digest>::new(),
        };
        Digest::update(&mut hasher.state, seed.to_le_bytes());
        hasher
    }
}

impl Default for Blake2b32 {
    fn default() -> Self {
        Self::new(0)
    }
}

impl fmt::Debug for Blake2b32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blake2b32")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl HashState for Blake2b32 {
    fn reset(&mut self) {
        Digest::reset(&mut self.state);
        Digest::update(&mut self.state, self.seed.to_le_bytes());
    }

    fn write(&mut self, data: &[u8]) {
        Digest::update(&mut self.state, data);
    }
}

impl Hash32 for Blake2b32 {
    fn sum32(&self) -> u32 {
        let out = self.state.clone().finalize();
        let mut word = [0u8; 4];
        word.copy_from_slice(&out);
        u32::from_le_bytes(word)
    }
}

/// BLAKE2b with an 8-byte digest, read little-endian.
#[derive(Clone)]
pub struct Blake2b64 {
    seed: u32,
    state: Blake2b<U8>,
}

impl Blake2b64 {
    pub fn new(seed: u32) -> Self {
        let mut hasher = Self {
            seed,
            state: <Blake2b<U8> as Digest>::new(),
        };
        Digest::update(&mut hasher.state, seed.to_le_bytes());
        hasher
    }
}

impl Default for Blake2b64 {
    fn default() -> Self {
        Self::new(0)
    }
}

impl fmt::Debug for Blake2b64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blake2b64")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl HashState for Blake2b64 {
    fn reset(&mut self) {
        Digest::reset(&mut self.state);
        Digest::update(&mut self.state, self.seed.to_le_bytes());
    }

    fn write(&mut self, data: &[u8]) {
        Digest::update(&mut self.state, data);
    }
}

impl Hash64 for Blake2b64 {
    fn sum64(&self) -> u64 {
        let out = self.state.clone().finalize();
        let mut word = [0u8; 8];
        word.copy_from_slice(&out);
        u64::from_le_bytes(word)
    }
}

// ---------------------------------------------------------------------
// ▼ std::hash adapter
// ---------------------------------------------------------------------

/// Adapts a [`BuildHasher`] into a 64-bit capability; `reset` builds a fresh
/// hasher from the same builder.
///
/// Output is only as stable as the builder: `RandomState` differs between
/// builders, so share one builder for every node that must agree.
pub struct BuildHasher64<S: BuildHasher> {
    builder: S,
    state: S::Hasher,
}

impl<S: BuildHasher> BuildHasher64<S> {
    pub fn new(builder: S) -> Self {
        let state = builder.build_hasher();
        Self { builder, state }
    }
}

impl<S: BuildHasher + Default> Default for BuildHasher64<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: BuildHasher> HashState for BuildHasher64<S> {
    fn reset(&mut self) {
        self.state = self.builder.build_hasher();
    }

    fn write(&mut self, data: &[u8]) {
        Hasher::write(&mut self.state, data);
    }
}

impl<S: BuildHasher> Hash64 for BuildHasher64<S> {
    fn sum64(&self) -> u64 {
        self.state.finish()
    }
}
