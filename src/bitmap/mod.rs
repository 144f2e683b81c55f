mod store;

mod container;
mod util;

// Order of these modules matters as it determines the `impl` blocks order in the docs.
mod cmp;
mod fmt;
mod inherent;
mod iter;
mod ops;
mod range;
mod serialization;

#[cfg(feature = "serde")]
mod serde;

pub use self::iter::{IntoIter, Iter};

use self::container::Container;

/// A compressed bitmap for `u32` values, using the
/// [Roaring bitmap compression scheme](https://roaringbitmap.org/).
///
/// # Examples
///
/// ```rust
/// use roaring::RoaringBitmap;
///
/// let mut rb = RoaringBitmap::new();
/// rb.insert(3);
/// rb.insert(4);
/// assert_eq!(rb.iter().collect::<Vec<u32>>(), vec![3, 4]);
/// ```
#[derive(PartialEq, Clone)]
pub struct RoaringBitmap {
    containers: Vec<Container>,
}
