// src/finalizer.rs

//! Murmur3 avalanche finalizers (`fmix32` / `fmix64`).
//!
//! Raw digests can have weak low bits, and the pivot is reduced with `%`
//! at every rotation step. The finalizer is applied to the pivot only;
//! per-candidate weights are left as the hasher produced them.

use std::fmt::Debug;

/// 32-bit Murmur3 finalizer.
#[inline]
pub fn finalize32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// 64-bit Murmur3 finalizer.
#[inline]
pub fn finalize64(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
    h ^= h >> 33;
    h = h.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    h ^= h >> 33;
    h
}

/// Digest word of one selector width (`u32` or `u64`).
pub trait HashWord: Copy + Ord + Debug + Send + Sync + 'static {
    /// Applies the width's avalanche finalizer.
    fn avalanche(self) -> Self;

    /// `self mod modulus` as an index. `modulus` must be non-zero.
    fn reduce(self, modulus: usize) -> usize;
}

impl HashWord for u32 {
    #[inline]
    fn avalanche(self) -> Self {
        finalize32(self)
    }

    #[inline]
    fn reduce(self, modulus: usize) -> usize {
        // widened so lengths beyond u32::MAX never truncate to a zero modulus
        (u64::from(self) % modulus as u64) as usize
    }
}

impl HashWord for u64 {
    #[inline]
    fn avalanche(self) -> Self {
        finalize64(self)
    }

    #[inline]
    fn reduce(self, modulus: usize) -> usize {
        (u128::from(self) % modulus as u128) as usize
    }
}
