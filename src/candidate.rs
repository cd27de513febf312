// src/candidate.rs

//! Candidate kinds and their canonical order.
//!
//! * byte sequences – lexicographic
//! * integers       – numeric
//! * text           – lexicographic over UTF-8 bytes
//! * anything else  – ascending weight of [`Candidate::raw`]
//!
//! Implementing the trait for a node type only needs `raw`:
//!
//! ```rust
//! use std::borrow::Cow;
//! use rvh_unihrw::Candidate;
//!
//! struct Peer { addr: String }
//!
//! impl Candidate for Peer {
//!     fn raw(&self) -> Option<Cow<'_, [u8]>> {
//!         Some(Cow::Borrowed(self.addr.as_bytes()))
//!     }
//! }
//! ```

use std::borrow::Cow;

use bytes::Bytes;

use crate::error::HrwError;
use crate::finalizer::HashWord;
use crate::weight::sort_by_weight;

/// An item that can be ranked by the HRW selector.
pub trait Candidate: Sized {
    /// Raw byte identity hashed into this item's weight.
    ///
    /// `None` marks the kind as unsupported; ordering such a sequence fails
    /// with [`HrwError::UnsupportedKind`] before anything is moved.
    fn raw(&self) -> Option<Cow<'_, [u8]>>;

    /// Rearranges `items` into canonical, key-independent order.
    ///
    /// Default: ascending weight, `digest` called once per item, ties keep
    /// their input order. Kinds with a native ordering override this and
    /// never call `digest`.
    fn canonical_sort<W, F>(items: &mut [Self], digest: F) -> Result<(), HrwError>
    where
        W: HashWord,
        F: FnMut(&[u8]) -> W,
    {
        sort_by_weight(items, digest)
    }
}

macro_rules! native_bytes {
    ($($ty:ty),* $(,)?) => {$(
        impl Candidate for $ty {
            fn raw(&self) -> Option<Cow<'_, [u8]>> {
                Some(Cow::Borrowed(&self[..]))
            }

            fn canonical_sort<W, F>(items: &mut [Self], _digest: F) -> Result<(), HrwError>
            where
                W: HashWord,
                F: FnMut(&[u8]) -> W,
            {
                items.sort_unstable();
                Ok(())
            }
        }
    )*};
}

native_bytes!(Vec<u8>, Box<[u8]>, Bytes);

impl<'a> Candidate for &'a [u8] {
    fn raw(&self) -> Option<Cow<'_, [u8]>> {
        Some(Cow::Borrowed(*self))
    }

    fn canonical_sort<W, F>(items: &mut [Self], _digest: F) -> Result<(), HrwError>
    where
        W: HashWord,
        F: FnMut(&[u8]) -> W,
    {
        items.sort_unstable();
        Ok(())
    }
}

macro_rules! native_text {
    ($($ty:ty),* $(,)?) => {$(
        impl Candidate for $ty {
            fn raw(&self) -> Option<Cow<'_, [u8]>> {
                Some(Cow::Borrowed(self.as_bytes()))
            }

            fn canonical_sort<W, F>(items: &mut [Self], _digest: F) -> Result<(), HrwError>
            where
                W: HashWord,
                F: FnMut(&[u8]) -> W,
            {
                // str's Ord is byte-wise
                items.sort_unstable();
                Ok(())
            }
        }
    )*};
}

native_text!(String, Box<str>);

impl<'a> Candidate for &'a str {
    fn raw(&self) -> Option<Cow<'_, [u8]>> {
        Some(Cow::Borrowed(self.as_bytes()))
    }

    fn canonical_sort<W, F>(items: &mut [Self], _digest: F) -> Result<(), HrwError>
    where
        W: HashWord,
        F: FnMut(&[u8]) -> W,
    {
        items.sort_unstable();
        Ok(())
    }
}

macro_rules! native_int {
    ($($ty:ty),* $(,)?) => {$(
        impl Candidate for $ty {
            /// Little-endian bytes; only used when building a weight map directly.
            fn raw(&self) -> Option<Cow<'_, [u8]>> {
                Some(Cow::Owned(self.to_le_bytes().to_vec()))
            }

            fn canonical_sort<W, F>(items: &mut [Self], _digest: F) -> Result<(), HrwError>
            where
                W: HashWord,
                F: FnMut(&[u8]) -> W,
            {
                items.sort_unstable();
                Ok(())
            }
        }
    )*};
}

native_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
