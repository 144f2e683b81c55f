use std::ops::RangeBounds;

use super::container::Container;
use super::util::{self, convert_range_to_inclusive};
use crate::RoaringBitmap;

impl RoaringBitmap {
    /// Returns the symmetric difference of this bitmap with `range`: a new
    /// bitmap where every value inside `range` has its membership flipped and
    /// every value outside `range` is unchanged.
    ///
    /// A range denoting no values (e.g. `5..5`, or `start >= end`) is a
    /// silent no-op that returns a clone of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let rb: RoaringBitmap = (1..3).collect();
    /// let flipped = rb.flip(2..4);
    ///
    /// assert_eq!(flipped.iter().collect::<Vec<u32>>(), vec![1, 3]);
    /// ```
    pub fn flip<R: RangeBounds<u32>>(&self, range: R) -> RoaringBitmap {
        let (start, end) = match convert_range_to_inclusive(range) {
            Ok(r) => r.into_inner(),
            Err(_) => return self.clone(),
        };

        let (start_hi, start_lo) = util::split(start);
        let (end_hi, end_lo) = util::split(end);

        let mut containers = Vec::new();

        for container in &self.containers {
            if container.key < start_hi || container.key > end_hi {
                containers.push(container.clone());
            }
        }

        let mut hi = start_hi;
        loop {
            let lo = if hi == start_hi { start_lo } else { 0 };
            let high = if hi == end_hi { end_lo } else { u16::MAX };

            match self.containers.binary_search_by_key(&hi, |c| c.key) {
                Ok(loc) => {
                    let flipped = self.containers[loc].not(lo..=high);
                    if flipped.len() != 0 {
                        containers.push(flipped);
                    }
                }
                Err(_) => {
                    let mut container = Container::new(hi);
                    container.insert_range(lo..=high);
                    containers.push(container);
                }
            }

            if hi == end_hi {
                break;
            }
            hi += 1;
        }

        containers.sort_unstable_by_key(|c| c.key);
        RoaringBitmap { containers }
    }

    /// Replaces this bitmap with its symmetric difference with `range`, in
    /// place.
    ///
    /// A range denoting no values is a silent no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// rb.flip_inplace(100..200);
    /// assert_eq!(rb.len(), 100);
    ///
    /// rb.flip_inplace(150..250);
    /// assert_eq!(rb.len(), 100);
    /// assert!(rb.contains(100));
    /// assert!(!rb.contains(150));
    /// assert!(rb.contains(200));
    /// ```
    pub fn flip_inplace<R: RangeBounds<u32>>(&mut self, range: R) {
        let (start, end) = match convert_range_to_inclusive(range) {
            Ok(r) => r.into_inner(),
            Err(_) => return,
        };

        let (start_hi, start_lo) = util::split(start);
        let (end_hi, end_lo) = util::split(end);

        let mut hi = start_hi;
        loop {
            let lo = if hi == start_hi { start_lo } else { 0 };
            let high = if hi == end_hi { end_lo } else { u16::MAX };

            match self.containers.binary_search_by_key(&hi, |c| c.key) {
                Ok(loc) => {
                    self.containers[loc].inot(lo..=high);
                    if self.containers[loc].len() == 0 {
                        self.containers.remove(loc);
                    }
                }
                Err(loc) => {
                    let mut container = Container::new(hi);
                    container.insert_range(lo..=high);
                    self.containers.insert(loc, container);
                }
            }

            if hi == end_hi {
                break;
            }
            hi += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_empty_range_is_noop() {
        let rb: RoaringBitmap = (0..10).collect();
        assert_eq!(rb.flip(5..5), rb);
    }

    #[test]
    fn test_flip_within_single_container() {
        let rb: RoaringBitmap = (1..3).collect();
        let flipped = rb.flip(2..4);
        assert_eq!(flipped.iter().collect::<Vec<u32>>(), vec![1, 3]);
    }

    #[test]
    fn test_flip_across_container_boundary() {
        let rb: RoaringBitmap = [70_000u32].into_iter().collect();
        let flipped = rb.flip(0..70_002);
        assert!(flipped.contains(0));
        assert!(!flipped.contains(70_000));
        assert!(flipped.contains(70_001));
    }

    #[test]
    fn test_flip_is_involution() {
        let rb: RoaringBitmap = (0..5000).step_by(3).collect();
        let flipped_twice = rb.flip(100..4000).flip(100..4000);
        assert_eq!(flipped_twice, rb);
    }

    #[test]
    fn test_flip_inplace_matches_allocating_form() {
        let mut rb: RoaringBitmap = (10..20).collect();
        let expected = rb.flip(15..25);
        rb.flip_inplace(15..25);
        assert_eq!(rb, expected);
    }

    #[test]
    fn test_scenario_double_flip_adjacent_windows() {
        let mut rb = RoaringBitmap::new();
        rb.flip_inplace(100..200);
        assert_eq!(rb.len(), 100);
        assert!(rb.iter().eq(100..200));

        rb.flip_inplace(150..250);
        assert_eq!(rb.len(), 100);
        assert!(rb.contains(100));
        assert!(rb.contains(149));
        assert!(!rb.contains(150));
        assert!(!rb.contains(199));
        assert!(rb.contains(200));
        assert!(rb.contains(249));
    }
}
