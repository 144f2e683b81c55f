//! This crate provides a compressed bitmap data structure for `u32` elements,
//! using the [Roaring bitmap compression scheme](https://roaringbitmap.org/).
//!
//! Roaring bitmaps partition the 32 bit universe into 2^16 chunks of 2^16
//! values each, keyed by the high 16 bits. Each chunk is stored as either a
//! sorted array of the low 16 bits (for sparse chunks) or a 8 KiB bitmap (for
//! dense ones), switching representation automatically as values are added
//! and removed so that both set operations and memory stay close to the
//! theoretical optimum across a wide range of cardinalities and
//! distributions.
//!
//! # Examples
//!
//! ```rust
//! use roaring::RoaringBitmap;
//!
//! let mut rb = RoaringBitmap::new();
//! rb.insert(1);
//! rb.insert(100_000);
//! assert!(rb.contains(1));
//! assert_eq!(rb.len(), 2);
//!
//! let primes: RoaringBitmap = (2..100).filter(|&n| (2..n).all(|d| n % d != 0)).collect();
//! assert_eq!(primes.len(), 25);
//! ```

mod bitmap;
mod error;

pub use crate::bitmap::{IntoIter, Iter, RoaringBitmap};
pub use crate::error::NonSortedIntegers;
