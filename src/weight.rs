// src/weight.rs

//! Weight map: one digest per candidate index.
//!
//! Built once per call so the weight-ordered sort compares precomputed
//! words instead of re-hashing on every comparison. Also usable on its own
//! by callers ranking candidates some other way.

use std::ops::Index;

use crate::candidate::Candidate;
use crate::error::HrwError;
use crate::finalizer::HashWord;
use crate::hasher::{digest32, digest64, Hash32, Hash64};

/// Dense `index → weight` map over a candidate slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightMap<W> {
    weights: Vec<W>,
}

impl<W: HashWord> WeightMap<W> {
    /// Hashes every item's raw identity with `digest`, in index order.
    ///
    /// Fails on the first item without a raw identity; `digest` has then been
    /// called only for the items before it.
    pub fn build<T, F>(items: &[T], mut digest: F) -> Result<Self, HrwError>
    where
        T: Candidate,
        F: FnMut(&[u8]) -> W,
    {
        let mut weights = Vec::with_capacity(items.len());
        for item in items {
            let raw = item.raw().ok_or_else(HrwError::unsupported::<T>)?;
            weights.push(digest(&*raw));
        }
        Ok(Self { weights })
    }

    /// Weight of the item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<W> {
        self.weights.get(index).copied()
    }

    /// Number of weighted items.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// `true` when built from an empty slice.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// `(index, weight)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, W)> + '_ {
        self.weights.iter().copied().enumerate()
    }

    /// Weights in index order.
    pub fn as_slice(&self) -> &[W] {
        &self.weights
    }

    /// Indices ordered by ascending weight; equal weights keep index order.
    ///
    /// Weights alone cannot separate colliding identities; the selector's
    /// canonical order additionally compares raw bytes on ties.
    pub fn ascending_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.weights.len()).collect();
        order.sort_by_key(|&i| self.weights[i]);
        order
    }
}

impl<W> Index<usize> for WeightMap<W> {
    type Output = W;

    fn index(&self, index: usize) -> &W {
        &self.weights[index]
    }
}

/// 32-bit weight map of `items`.
pub fn weight_map32<T, H>(items: &[T], hasher: &mut H) -> Result<WeightMap<u32>, HrwError>
where
    T: Candidate,
    H: Hash32 + ?Sized,
{
    WeightMap::build(items, |data| digest32(hasher, data))
}

/// 64-bit weight map of `items`.
pub fn weight_map64<T, H>(items: &[T], hasher: &mut H) -> Result<WeightMap<u64>, HrwError>
where
    T: Candidate,
    H: Hash64 + ?Sized,
{
    WeightMap::build(items, |data| digest64(hasher, data))
}

/// Default canonical order: ascending weight, then raw identity bytes.
///
/// Colliding weights are broken by the identities themselves, so the order
/// never depends on input position; only byte-identical items keep input
/// order. The map is complete before the first move, so a missing raw
/// identity leaves `items` untouched.
pub(crate) fn sort_by_weight<T, W, F>(items: &mut [T], digest: F) -> Result<(), HrwError>
where
    T: Candidate,
    W: HashWord,
    F: FnMut(&[u8]) -> W,
{
    let weights = WeightMap::build(items, digest)?;
    tracing::debug!(len = items.len(), "canonical order by raw-identity weight");
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| {
        weights[a]
            .cmp(&weights[b])
            .then_with(|| items[a].raw().cmp(&items[b].raw()))
    });
    permute(items, order);
    Ok(())
}

/// Moves `items[order[i]]` to position `i`, walking each cycle once.
fn permute<T>(items: &mut [T], mut order: Vec<usize>) {
    debug_assert_eq!(items.len(), order.len());
    for start in 0..order.len() {
        if order[start] == start {
            continue;
        }
        let mut current = start;
        loop {
            let next = order[current];
            order[current] = current;
            if next == start {
                break;
            }
            items.swap(current, next);
            current = next;
        }
    }
}
