// src/hrw.rs

//! HRW selector: canonical order, key pivot, single-pass rotation.
//!
//! ```rust
//! use rvh_unihrw::{hrw_sort32, Murmur32};
//!
//! let mut nodes = vec!["c", "a", "b"];
//! let mut hasher = Murmur32::new(0);
//! hrw_sort32(&mut nodes, b"k1", &mut hasher).unwrap();
//! assert_eq!(nodes, ["b", "c", "a"]);
//! ```
//!
//! Only index 0 is the statistically validated winner. The rest of the slice
//! is a deterministic fallback order, but every step reuses the same pivot,
//! so positions past 0 are not independently shuffled.

use crate::candidate::Candidate;
use crate::error::HrwError;
use crate::finalizer::HashWord;
use crate::hasher::{digest32, digest64, Hash32, Hash64};

/// Pivot for the 32-bit selector: `finalize32(hash(key))`.
pub fn pivot32<H: Hash32 + ?Sized>(key: &[u8], hasher: &mut H) -> u32 {
    digest32(hasher, key).avalanche()
}

/// Pivot for the 64-bit selector: `finalize64(hash(key))`.
pub fn pivot64<H: Hash64 + ?Sized>(key: &[u8], hasher: &mut H) -> u64 {
    digest64(hasher, key).avalanche()
}

/// Orders `items` for `key` using 32-bit digests; `items[0]` is the winner.
///
/// Canonical order is established first. On error no pivot is computed and
/// nothing is rotated; for weight-ordered kinds `items` is also untouched.
pub fn hrw_sort32<T, H>(items: &mut [T], key: &[u8], hasher: &mut H) -> Result<(), HrwError>
where
    T: Candidate,
    H: Hash32 + ?Sized,
{
    T::canonical_sort(items, |data| digest32(hasher, data))?;
    let pivot = pivot32(key, hasher);
    rotate(items, pivot);
    Ok(())
}

/// 64-bit counterpart of [`hrw_sort32`].
pub fn hrw_sort64<T, H>(items: &mut [T], key: &[u8], hasher: &mut H) -> Result<(), HrwError>
where
    T: Candidate,
    H: Hash64 + ?Sized,
{
    T::canonical_sort(items, |data| digest64(hasher, data))?;
    let pivot = pivot64(key, hasher);
    rotate(items, pivot);
    Ok(())
}

/// Runs [`hrw_sort32`] and returns the winner (`None` for an empty slice).
pub fn select_owner32<'a, T, H>(
    items: &'a mut [T],
    key: &[u8],
    hasher: &mut H,
) -> Result<Option<&'a T>, HrwError>
where
    T: Candidate,
    H: Hash32 + ?Sized,
{
    hrw_sort32(items, key, hasher)?;
    let items: &'a [T] = items;
    Ok(items.first())
}

/// Runs [`hrw_sort64`] and returns the winner (`None` for an empty slice).
pub fn select_owner64<'a, T, H>(
    items: &'a mut [T],
    key: &[u8],
    hasher: &mut H,
) -> Result<Option<&'a T>, HrwError>
where
    T: Candidate,
    H: Hash64 + ?Sized,
{
    hrw_sort64(items, key, hasher)?;
    let items: &'a [T] = items;
    Ok(items.first())
}

/// Step `i` swaps `i` with `i + pivot mod (len - i)`.
fn rotate<T, W: HashWord>(items: &mut [T], pivot: W) {
    let len = items.len();
    tracing::trace!(len, ?pivot, "hrw rotation");
    for i in 0..len.saturating_sub(1) {
        let offset = pivot.reduce(len - i);
        items.swap(i, i + offset);
    }
}
