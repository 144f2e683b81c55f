use std::mem;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::cmp::Pairs;
use super::container::Container;
use crate::RoaringBitmap;

impl RoaringBitmap {
    /// Computes the len of the intersection with the specified other bitmap
    /// without creating a new bitmap.
    ///
    /// This is faster and more space efficient when you're only interested in
    /// the cardinality of the intersection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let rb1: RoaringBitmap = (1..4).collect();
    /// let rb2: RoaringBitmap = (3..5).collect();
    ///
    /// assert_eq!(rb1.intersection_len(&rb2), (&rb1 & &rb2).len());
    /// ```
    pub fn intersection_len(&self, other: &RoaringBitmap) -> u64 {
        Pairs::new(&self.containers, &other.containers)
            .map(|pair| match pair {
                (Some(lhs), Some(rhs)) => lhs.intersection_len(rhs),
                _otherwise => 0,
            })
            .sum()
    }

    /// Computes the len of the union with the specified other bitmap without
    /// creating a new bitmap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let rb1: RoaringBitmap = (1..4).collect();
    /// let rb2: RoaringBitmap = (3..5).collect();
    ///
    /// assert_eq!(rb1.union_len(&rb2), (&rb1 | &rb2).len());
    /// ```
    pub fn union_len(&self, other: &RoaringBitmap) -> u64 {
        self.len().wrapping_add(other.len()).wrapping_sub(self.intersection_len(other))
    }

    /// Computes the len of the difference with the specified other bitmap
    /// without creating a new bitmap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let rb1: RoaringBitmap = (1..4).collect();
    /// let rb2: RoaringBitmap = (3..5).collect();
    ///
    /// assert_eq!(rb1.difference_len(&rb2), (&rb1 - &rb2).len());
    /// ```
    pub fn difference_len(&self, other: &RoaringBitmap) -> u64 {
        self.len() - self.intersection_len(other)
    }

    /// Computes the len of the symmetric difference with the specified other
    /// bitmap without creating a new bitmap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let rb1: RoaringBitmap = (1..4).collect();
    /// let rb2: RoaringBitmap = (3..5).collect();
    ///
    /// assert_eq!(rb1.symmetric_difference_len(&rb2), (&rb1 ^ &rb2).len());
    /// ```
    pub fn symmetric_difference_len(&self, other: &RoaringBitmap) -> u64 {
        let intersection_len = self.intersection_len(other);
        self.len()
            .wrapping_add(other.len())
            .wrapping_sub(intersection_len)
            .wrapping_sub(intersection_len)
    }
}

impl BitOr<RoaringBitmap> for RoaringBitmap {
    type Output = RoaringBitmap;

    /// A union between two sets.
    fn bitor(mut self, rhs: RoaringBitmap) -> Self::Output {
        BitOrAssign::bitor_assign(&mut self, rhs);
        self
    }
}

impl BitOr<&RoaringBitmap> for RoaringBitmap {
    type Output = RoaringBitmap;

    /// A union between two sets.
    fn bitor(mut self, rhs: &RoaringBitmap) -> Self::Output {
        BitOrAssign::bitor_assign(&mut self, rhs);
        self
    }
}

impl BitOr<RoaringBitmap> for &RoaringBitmap {
    type Output = RoaringBitmap;

    /// A union between two sets.
    fn bitor(self, rhs: RoaringBitmap) -> Self::Output {
        BitOr::bitor(rhs, self)
    }
}

impl BitOr<&RoaringBitmap> for &RoaringBitmap {
    type Output = RoaringBitmap;

    /// A union between two sets.
    fn bitor(self, rhs: &RoaringBitmap) -> Self::Output {
        let mut containers = Vec::new();

        for pair in Pairs::new(&self.containers, &rhs.containers) {
            match pair {
                (Some(lhs), None) => containers.push(lhs.clone()),
                (None, Some(rhs)) => containers.push(rhs.clone()),
                (Some(lhs), Some(rhs)) => containers.push(BitOr::bitor(lhs, rhs)),
                (None, None) => break,
            }
        }

        Self::Output { containers }
    }
}

impl BitOrAssign<RoaringBitmap> for RoaringBitmap {
    /// A union between two sets.
    fn bitor_assign(&mut self, mut rhs: RoaringBitmap) {
        // Apply the union on the biggest map.
        if self.len() < rhs.len() {
            mem::swap(self, &mut rhs);
        }

        for container in rhs.containers {
            let key = container.key;
            match self.containers.binary_search_by_key(&key, |c| c.key) {
                Err(loc) => self.containers.insert(loc, container),
                Ok(loc) => BitOrAssign::bitor_assign(&mut self.containers[loc], container),
            }
        }
    }
}

impl BitOrAssign<&RoaringBitmap> for RoaringBitmap {
    /// A union between two sets.
    fn bitor_assign(&mut self, rhs: &RoaringBitmap) {
        for container in &rhs.containers {
            let key = container.key;
            match self.containers.binary_search_by_key(&key, |c| c.key) {
                Err(loc) => self.containers.insert(loc, container.clone()),
                Ok(loc) => BitOrAssign::bitor_assign(&mut self.containers[loc], container),
            }
        }
    }
}

impl BitAnd<RoaringBitmap> for RoaringBitmap {
    type Output = RoaringBitmap;

    /// An intersection between two sets.
    fn bitand(mut self, rhs: RoaringBitmap) -> Self::Output {
        BitAndAssign::bitand_assign(&mut self, rhs);
        self
    }
}

impl BitAnd<&RoaringBitmap> for RoaringBitmap {
    type Output = RoaringBitmap;

    /// An intersection between two sets.
    fn bitand(mut self, rhs: &RoaringBitmap) -> Self::Output {
        BitAndAssign::bitand_assign(&mut self, rhs);
        self
    }
}

impl BitAnd<RoaringBitmap> for &RoaringBitmap {
    type Output = RoaringBitmap;

    /// An intersection between two sets.
    fn bitand(self, rhs: RoaringBitmap) -> Self::Output {
        BitAnd::bitand(rhs, self)
    }
}

impl BitAnd<&RoaringBitmap> for &RoaringBitmap {
    type Output = RoaringBitmap;

    /// An intersection between two sets.
    fn bitand(self, rhs: &RoaringBitmap) -> RoaringBitmap {
        let mut containers = Vec::new();

        for pair in Pairs::new(&self.containers, &rhs.containers) {
            if let (Some(lhs), Some(rhs)) = pair {
                let container = BitAnd::bitand(lhs, rhs);
                if container.len() != 0 {
                    containers.push(container);
                }
            }
        }

        Self::Output { containers }
    }
}

impl BitAndAssign<RoaringBitmap> for RoaringBitmap {
    /// An intersection between two sets.
    fn bitand_assign(&mut self, mut rhs: RoaringBitmap) {
        // Apply the intersection on the smallest map.
        if rhs.containers.len() < self.containers.len() {
            mem::swap(self, &mut rhs);
        }

        self.containers.retain_mut(|cont| {
            let key = cont.key;
            match rhs.containers.binary_search_by_key(&key, |c| c.key) {
                Ok(loc) => {
                    let rhs_cont = &mut rhs.containers[loc];
                    let rhs_cont = mem::replace(rhs_cont, Container::new(rhs_cont.key));
                    BitAndAssign::bitand_assign(cont, rhs_cont);
                    cont.len() != 0
                }
                Err(_) => false,
            }
        })
    }
}

impl BitAndAssign<&RoaringBitmap> for RoaringBitmap {
    /// An intersection between two sets.
    fn bitand_assign(&mut self, rhs: &RoaringBitmap) {
        self.containers.retain_mut(|cont| {
            let key = cont.key;
            match rhs.containers.binary_search_by_key(&key, |c| c.key) {
                Ok(loc) => {
                    BitAndAssign::bitand_assign(cont, &rhs.containers[loc]);
                    cont.len() != 0
                }
                Err(_) => false,
            }
        })
    }
}

impl Sub<RoaringBitmap> for RoaringBitmap {
    type Output = RoaringBitmap;

    /// A difference between two sets.
    fn sub(mut self, rhs: RoaringBitmap) -> Self::Output {
        SubAssign::sub_assign(&mut self, &rhs);
        self
    }
}

impl Sub<&RoaringBitmap> for RoaringBitmap {
    type Output = RoaringBitmap;

    /// A difference between two sets.
    fn sub(mut self, rhs: &RoaringBitmap) -> Self::Output {
        SubAssign::sub_assign(&mut self, rhs);
        self
    }
}

impl Sub<RoaringBitmap> for &RoaringBitmap {
    type Output = RoaringBitmap;

    /// A difference between two sets.
    fn sub(self, rhs: RoaringBitmap) -> Self::Output {
        Sub::sub(self, &rhs)
    }
}

impl Sub<&RoaringBitmap> for &RoaringBitmap {
    type Output = RoaringBitmap;

    /// A difference between two sets.
    fn sub(self, rhs: &RoaringBitmap) -> Self::Output {
        let mut containers = Vec::new();

        for pair in Pairs::new(&self.containers, &rhs.containers) {
            match pair {
                (Some(lhs), None) => containers.push(lhs.clone()),
                (None, Some(_)) => (),
                (Some(lhs), Some(rhs)) => {
                    let container = Sub::sub(lhs, rhs);
                    if container.len() != 0 {
                        containers.push(container);
                    }
                }
                (None, None) => break,
            }
        }

        Self::Output { containers }
    }
}

impl SubAssign<RoaringBitmap> for RoaringBitmap {
    /// A difference between two sets.
    fn sub_assign(&mut self, rhs: RoaringBitmap) {
        SubAssign::sub_assign(self, &rhs)
    }
}

impl SubAssign<&RoaringBitmap> for RoaringBitmap {
    /// A difference between two sets.
    fn sub_assign(&mut self, rhs: &RoaringBitmap) {
        self.containers.retain_mut(|cont| {
            match rhs.containers.binary_search_by_key(&cont.key, |c| c.key) {
                Ok(loc) => {
                    SubAssign::sub_assign(cont, &rhs.containers[loc]);
                    cont.len() != 0
                }
                Err(_) => true,
            }
        })
    }
}

impl BitXor<RoaringBitmap> for RoaringBitmap {
    type Output = RoaringBitmap;

    /// A symmetric difference between two sets.
    fn bitxor(mut self, rhs: RoaringBitmap) -> Self::Output {
        BitXorAssign::bitxor_assign(&mut self, rhs);
        self
    }
}

impl BitXor<&RoaringBitmap> for RoaringBitmap {
    type Output = RoaringBitmap;

    /// A symmetric difference between two sets.
    fn bitxor(mut self, rhs: &RoaringBitmap) -> Self::Output {
        BitXorAssign::bitxor_assign(&mut self, rhs);
        self
    }
}

impl BitXor<RoaringBitmap> for &RoaringBitmap {
    type Output = RoaringBitmap;

    /// A symmetric difference between two sets.
    fn bitxor(self, rhs: RoaringBitmap) -> Self::Output {
        BitXor::bitxor(rhs, self)
    }
}

impl BitXor<&RoaringBitmap> for &RoaringBitmap {
    type Output = RoaringBitmap;

    /// A symmetric difference between two sets.
    fn bitxor(self, rhs: &RoaringBitmap) -> Self::Output {
        let mut containers = Vec::new();

        for pair in Pairs::new(&self.containers, &rhs.containers) {
            match pair {
                (Some(lhs), None) => containers.push(lhs.clone()),
                (None, Some(rhs)) => containers.push(rhs.clone()),
                (Some(lhs), Some(rhs)) => {
                    let container = BitXor::bitxor(lhs, rhs);
                    if container.len() != 0 {
                        containers.push(container);
                    }
                }
                (None, None) => break,
            }
        }

        Self::Output { containers }
    }
}

impl BitXorAssign<RoaringBitmap> for RoaringBitmap {
    /// A symmetric difference between two sets.
    fn bitxor_assign(&mut self, rhs: RoaringBitmap) {
        for pair in Pairs::new(mem::take(&mut self.containers), rhs.containers) {
            match pair {
                (Some(mut lhs), Some(rhs)) => {
                    BitXorAssign::bitxor_assign(&mut lhs, rhs);
                    if lhs.len() != 0 {
                        self.containers.push(lhs);
                    }
                }
                (Some(lhs), None) => self.containers.push(lhs),
                (None, Some(rhs)) => self.containers.push(rhs),
                (None, None) => break,
            }
        }
    }
}

impl BitXorAssign<&RoaringBitmap> for RoaringBitmap {
    /// A symmetric difference between two sets.
    fn bitxor_assign(&mut self, rhs: &RoaringBitmap) {
        for pair in Pairs::new(mem::take(&mut self.containers), &rhs.containers) {
            match pair {
                (Some(mut lhs), Some(rhs)) => {
                    BitXorAssign::bitxor_assign(&mut lhs, rhs);
                    if lhs.len() != 0 {
                        self.containers.push(lhs);
                    }
                }
                (Some(lhs), None) => self.containers.push(lhs),
                (None, Some(rhs)) => self.containers.push(rhs.clone()),
                (None, None) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bitmap_strategy() -> impl Strategy<Value = RoaringBitmap> {
        proptest::collection::hash_set(any::<u32>(), 0..200)
            .prop_map(|values| values.into_iter().collect())
    }

    #[test]
    fn test_cardinality_helpers_match_operators() {
        let a: RoaringBitmap = (0..1000).collect();
        let b: RoaringBitmap = (500..1500).collect();
        assert_eq!(a.intersection_len(&b), (&a & &b).len());
        assert_eq!(a.union_len(&b), (&a | &b).len());
        assert_eq!(a.difference_len(&b), (&a - &b).len());
        assert_eq!(a.symmetric_difference_len(&b), (&a ^ &b).len());
    }

    proptest! {
        #[test]
        fn test_union_commutative(a in bitmap_strategy(), b in bitmap_strategy()) {
            prop_assert_eq!(&a | &b, &b | &a);
        }

        #[test]
        fn test_intersection_commutative(a in bitmap_strategy(), b in bitmap_strategy()) {
            prop_assert_eq!(&a & &b, &b & &a);
        }

        #[test]
        fn test_union_assign_matches_by_value(a in bitmap_strategy(), b in bitmap_strategy()) {
            let mut assigned = a.clone();
            assigned |= b.clone();
            prop_assert_eq!(assigned, &a | &b);
        }

        #[test]
        fn test_intersection_assign_matches_by_value(a in bitmap_strategy(), b in bitmap_strategy()) {
            let mut assigned = a.clone();
            assigned &= b.clone();
            prop_assert_eq!(assigned, &a & &b);
        }

        #[test]
        fn test_difference_and_symmetric_difference(a in bitmap_strategy(), b in bitmap_strategy()) {
            let diff = &a - &b;
            prop_assert!(diff.is_subset(&a));
            prop_assert!(diff.is_disjoint(&b));

            let xor = &a ^ &b;
            let expected = (&a - &b) | (&b - &a);
            prop_assert_eq!(xor, expected);
        }

        #[test]
        fn test_de_morgan_like_identities(a in bitmap_strategy(), b in bitmap_strategy(), c in bitmap_strategy()) {
            prop_assert_eq!((&a | &b) & &c, (&a & &c) | (&b & &c));
        }
    }
}
