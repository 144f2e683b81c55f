use std::convert::identity;
use std::iter::{self, FromIterator};
use std::{slice, vec};

use super::container::Container;
use crate::{NonSortedIntegers, RoaringBitmap};

/// An iterator over the values of a [`RoaringBitmap`].
pub struct Iter<'a> {
    inner: iter::FlatMap<
        slice::Iter<'a, Container>,
        &'a Container,
        fn(&'a Container) -> &'a Container,
    >,
    size_hint: u64,
}

/// An owning iterator over the values of a [`RoaringBitmap`].
pub struct IntoIter {
    inner: iter::FlatMap<vec::IntoIter<Container>, Container, fn(Container) -> Container>,
    size_hint: u64,
}

impl Iter<'_> {
    fn new(containers: &[Container]) -> Iter {
        let size_hint = containers.iter().map(|c| c.len()).sum();
        Iter { inner: containers.iter().flat_map(identity as _), size_hint }
    }
}

impl IntoIter {
    fn new(containers: Vec<Container>) -> IntoIter {
        let size_hint = containers.iter().map(|c| c.len()).sum();
        IntoIter { inner: containers.into_iter().flat_map(identity as _), size_hint }
    }
}

impl Iterator for Iter<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.size_hint = self.size_hint.saturating_sub(1);
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.size_hint < usize::MAX as u64 {
            (self.size_hint as usize, Some(self.size_hint as usize))
        } else {
            (usize::MAX, None)
        }
    }
}

impl Iterator for IntoIter {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.size_hint = self.size_hint.saturating_sub(1);
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.size_hint < usize::MAX as u64 {
            (self.size_hint as usize, Some(self.size_hint as usize))
        } else {
            (usize::MAX, None)
        }
    }
}

impl RoaringBitmap {
    /// Iterator over each value stored in the bitmap. Values are guaranteed
    /// to be ordered from smallest to largest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let bitmap = (1..3).collect::<RoaringBitmap>();
    /// let mut iter = bitmap.iter();
    ///
    /// assert_eq!(iter.next(), Some(1));
    /// assert_eq!(iter.next(), Some(2));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter {
        Iter::new(&self.containers)
    }
}

impl<'a> IntoIterator for &'a RoaringBitmap {
    type Item = u32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IntoIterator for RoaringBitmap {
    type Item = u32;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter::new(self.containers)
    }
}

impl FromIterator<u32> for RoaringBitmap {
    fn from_iter<I: IntoIterator<Item = u32>>(iterator: I) -> RoaringBitmap {
        let mut rb = RoaringBitmap::new();
        rb.extend(iterator);
        rb
    }
}

impl Extend<u32> for RoaringBitmap {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iterator: I) {
        for value in iterator {
            self.insert(value);
        }
    }
}

impl RoaringBitmap {
    /// Create a set from a sorted, deduplicated iterator.
    ///
    /// The values of the iterator must be ordered and strictly greater than
    /// the greatest value already in the set. If a value in the iterator
    /// doesn't satisfy this requirement, it is not added and the operation is
    /// stopped.
    ///
    /// Returns `Ok` with the requested `RoaringBitmap`, `Err` describing how
    /// many leading elements were accepted before failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let rb = RoaringBitmap::from_sorted_iter(0..10).unwrap();
    ///
    /// assert!(rb.iter().eq(0..10));
    /// ```
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let integers = 0..10u32;
    /// let error = RoaringBitmap::from_sorted_iter(integers.rev()).unwrap_err();
    ///
    /// assert_eq!(error.valid_until(), 1);
    /// ```
    pub fn from_sorted_iter<I: IntoIterator<Item = u32>>(
        iterator: I,
    ) -> Result<RoaringBitmap, NonSortedIntegers> {
        let mut rb = RoaringBitmap::new();
        rb.append(iterator).map(|_| rb)
    }

    /// Extend the set with a sorted, deduplicated iterator.
    ///
    /// The values of the iterator must be ordered and strictly greater than
    /// the greatest value already in the set. If a value in the iterator
    /// doesn't satisfy this requirement, it is not added and the operation is
    /// stopped.
    ///
    /// Returns `Ok` with the number of elements appended, `Err` describing how
    /// many were appended before an ordering violation occurred.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// assert_eq!(rb.append(0..10), Ok(10));
    ///
    /// assert!(rb.iter().eq(0..10));
    /// ```
    pub fn append<I: IntoIterator<Item = u32>>(
        &mut self,
        iterator: I,
    ) -> Result<u64, NonSortedIntegers> {
        let mut iterator = iterator.into_iter();

        let mut prev: u32 = match iterator.next() {
            None => return Ok(0),
            Some(first) => {
                if let Some(max) = self.max() {
                    if first <= max {
                        return Err(NonSortedIntegers { valid_until: 0 });
                    }
                }

                first
            }
        };

        self.insert(prev);
        let mut count = 1;

        for value in iterator {
            if value <= prev {
                return Err(NonSortedIntegers { valid_until: count });
            } else {
                self.insert(value);
                prev = value;
                count += 1;
            }
        }

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_ordered_across_containers() {
        let rb: RoaringBitmap = [3u32, 70_000, 1].into_iter().collect();
        assert_eq!(rb.iter().collect::<Vec<_>>(), vec![1, 3, 70_000]);
    }

    #[test]
    fn test_into_iter_consumes() {
        let rb: RoaringBitmap = (0..5).collect();
        assert_eq!(rb.into_iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_append_rejects_out_of_order() {
        let mut rb = RoaringBitmap::new();
        assert_eq!(rb.append(vec![1, 2, 3]), Ok(3));
        assert_eq!(rb.append(vec![2, 10]), Err(NonSortedIntegers { valid_until: 0 }));
    }

    #[test]
    fn test_from_sorted_iter_partial_failure() {
        let err = RoaringBitmap::from_sorted_iter(vec![1, 3, 2]).unwrap_err();
        assert_eq!(err.valid_until(), 2);
    }
}
