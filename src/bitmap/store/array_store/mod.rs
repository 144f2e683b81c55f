mod scalar;

use std::convert::TryFrom;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitXor, RangeInclusive, Sub, SubAssign};
use std::slice;
use std::vec;

use super::bitmap_store::{BitmapStore, BITMAP_LENGTH};

/// A sparse container: a sorted, deduplicated list of the low 16 bits of each
/// member. Used while a container's cardinality stays below `ARRAY_LIMIT`.
#[derive(Clone, Eq, PartialEq)]
pub struct ArrayStore {
    vec: Vec<u16>,
}

impl ArrayStore {
    pub fn new() -> ArrayStore {
        ArrayStore { vec: Vec::new() }
    }

    /// Create an `ArrayStore` from a `Vec<u16>` known to already be sorted and
    /// deduplicated. Only checked in debug builds.
    pub fn from_vec_unchecked(vec: Vec<u16>) -> ArrayStore {
        if cfg!(debug_assertions) {
            ArrayStore::try_from(vec).unwrap()
        } else {
            ArrayStore { vec }
        }
    }

    pub fn insert(&mut self, index: u16) -> bool {
        self.vec.binary_search(&index).map_err(|loc| self.vec.insert(loc, index)).is_err()
    }

    pub fn insert_range(&mut self, range: RangeInclusive<u16>) -> u64 {
        if range.is_empty() {
            return 0;
        }

        let start = *range.start();
        let end = *range.end();

        let pos_start = self.vec.binary_search(&start).unwrap_or_else(|i| i);
        let pos_end = self
            .vec
            .binary_search(&end)
            .map(|i| i + 1)
            .unwrap_or_else(|i| i);

        let dropped = pos_end - pos_start;
        let new_len = (end - start) as usize + 1;

        let mut to_insert = Vec::with_capacity(new_len);
        to_insert.extend(start..=end);

        self.vec.splice(pos_start..pos_end, to_insert);

        new_len as u64 - dropped as u64
    }

    pub fn push(&mut self, index: u16) {
        debug_assert!(self.max().map_or(true, |max| max < index));
        self.vec.push(index);
    }

    pub(crate) fn push_unchecked(&mut self, index: u16) {
        if cfg!(debug_assertions) {
            self.push(index)
        } else {
            self.vec.push(index);
        }
    }

    pub fn remove(&mut self, index: u16) -> bool {
        self.vec.binary_search(&index).map(|loc| self.vec.remove(loc)).is_ok()
    }

    pub fn remove_range(&mut self, range: RangeInclusive<u16>) -> u64 {
        if range.is_empty() {
            return 0;
        }

        let start = *range.start();
        let end = *range.end();

        let pos_start = self.vec.binary_search(&start).unwrap_or_else(|i| i);
        let pos_end = self.vec.binary_search(&end).map(|i| i + 1).unwrap_or_else(|i| i);

        let removed = pos_end - pos_start;
        self.vec.drain(pos_start..pos_end);
        removed as u64
    }

    pub fn contains(&self, index: u16) -> bool {
        self.vec.binary_search(&index).is_ok()
    }

    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (mut i1, mut i2) = (self.vec.iter(), other.vec.iter());
        let (mut value1, mut value2) = (i1.next(), i2.next());
        loop {
            match (value1, value2) {
                (Some(v1), Some(v2)) => match v1.cmp(v2) {
                    std::cmp::Ordering::Less => value1 = i1.next(),
                    std::cmp::Ordering::Greater => value2 = i2.next(),
                    std::cmp::Ordering::Equal => return false,
                },
                _ => return true,
            }
        }
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }
        let (mut i1, mut i2) = (self.vec.iter(), other.vec.iter());
        let mut value1 = match i1.next() {
            None => return true,
            Some(v) => v,
        };
        for value2 in i2.by_ref() {
            match value1.cmp(value2) {
                std::cmp::Ordering::Less => return false,
                std::cmp::Ordering::Equal => match i1.next() {
                    None => return true,
                    Some(v) => value1 = v,
                },
                std::cmp::Ordering::Greater => continue,
            }
        }
        false
    }

    pub fn intersection_len(&self, other: &Self) -> u64 {
        scalar::intersection_len(&self.vec, &other.vec)
    }

    pub fn intersection_len_bitmap(&self, other: &BitmapStore) -> u64 {
        self.vec.iter().filter(|&&i| other.contains(i)).count() as u64
    }

    pub fn to_bitmap_store(&self) -> BitmapStore {
        let mut bits = Box::new([0u64; BITMAP_LENGTH]);
        for &index in &self.vec {
            bits[key(index)] |= 1 << bit(index);
        }
        BitmapStore::from_unchecked(self.vec.len() as u64, bits)
    }

    pub fn len(&self) -> u64 {
        self.vec.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub fn min(&self) -> Option<u16> {
        self.vec.first().copied()
    }

    pub fn max(&self) -> Option<u16> {
        self.vec.last().copied()
    }

    pub fn rank(&self, index: u16) -> u64 {
        match self.vec.binary_search(&index) {
            Ok(i) => i as u64 + 1,
            Err(i) => i as u64,
        }
    }

    pub fn select(&self, n: u16) -> Option<u16> {
        self.vec.get(n as usize).copied()
    }

    pub fn iter(&self) -> slice::Iter<'_, u16> {
        self.vec.iter()
    }

    pub fn into_iter(self) -> vec::IntoIter<u16> {
        self.vec.into_iter()
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.vec
    }

    /// Complement of `self` restricted to `range`; values outside `range`
    /// are carried over unchanged.
    pub fn not(&self, range: RangeInclusive<u16>) -> ArrayStore {
        if range.is_empty() {
            return self.clone();
        }

        let lo = *range.start();
        let hi = *range.end();

        let pos_lo = self.vec.binary_search(&lo).unwrap_or_else(|i| i);
        let pos_hi = self.vec.binary_search(&hi).map(|i| i + 1).unwrap_or_else(|i| i);
        let in_range = &self.vec[pos_lo..pos_hi];

        let mut out = Vec::with_capacity(self.vec.len() + (hi - lo) as usize + 1);
        out.extend_from_slice(&self.vec[..pos_lo]);

        let mut j = 0;
        let mut v = lo;
        loop {
            if j < in_range.len() && in_range[j] == v {
                j += 1;
            } else {
                out.push(v);
            }
            if v == hi {
                break;
            }
            v += 1;
        }

        out.extend_from_slice(&self.vec[pos_hi..]);
        ArrayStore::from_vec_unchecked(out)
    }
}

impl Default for ArrayStore {
    fn default() -> Self {
        ArrayStore::new()
    }
}

fn key(index: u16) -> usize {
    index as usize / 64
}

fn bit(index: u16) -> usize {
    index as usize % 64
}

/// The reasons a `Vec<u16>` cannot be turned directly into an `ArrayStore`.
#[derive(Debug)]
pub struct Error {
    index: usize,
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    Duplicate,
    OutOfOrder,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Duplicate => {
                write!(f, "Duplicate element found at index: {}", self.index)
            }
            ErrorKind::OutOfOrder => {
                write!(f, "An element was out of order at index: {}", self.index)
            }
        }
    }
}

impl std::error::Error for Error {}

impl TryFrom<Vec<u16>> for ArrayStore {
    type Error = Error;

    fn try_from(vec: Vec<u16>) -> Result<Self, Self::Error> {
        let mut iter = vec.iter().enumerate();
        if let Some((_, mut prev)) = iter.next() {
            for (i, cur) in iter {
                match cur.cmp(prev) {
                    std::cmp::Ordering::Equal => {
                        return Err(Error { index: i, kind: ErrorKind::Duplicate })
                    }
                    std::cmp::Ordering::Less => {
                        return Err(Error { index: i, kind: ErrorKind::OutOfOrder })
                    }
                    std::cmp::Ordering::Greater => (),
                }
                prev = cur;
            }
        }

        Ok(ArrayStore { vec })
    }
}

impl BitOr<Self> for &ArrayStore {
    type Output = ArrayStore;

    fn bitor(self, rhs: Self) -> Self::Output {
        ArrayStore::from_vec_unchecked(scalar::or(&self.vec, &rhs.vec))
    }
}

impl BitAnd<Self> for &ArrayStore {
    type Output = ArrayStore;

    fn bitand(self, rhs: Self) -> Self::Output {
        ArrayStore::from_vec_unchecked(scalar::and(&self.vec, &rhs.vec))
    }
}

impl BitAndAssign<&Self> for ArrayStore {
    fn bitand_assign(&mut self, rhs: &Self) {
        self.vec = scalar::and(&self.vec, &rhs.vec);
    }
}

impl BitAndAssign<&BitmapStore> for ArrayStore {
    fn bitand_assign(&mut self, rhs: &BitmapStore) {
        self.vec.retain(|&i| rhs.contains(i));
    }
}

impl Sub<Self> for &ArrayStore {
    type Output = ArrayStore;

    fn sub(self, rhs: Self) -> Self::Output {
        ArrayStore::from_vec_unchecked(scalar::sub(&self.vec, &rhs.vec))
    }
}

impl SubAssign<&Self> for ArrayStore {
    fn sub_assign(&mut self, rhs: &Self) {
        self.vec = scalar::sub(&self.vec, &rhs.vec);
    }
}

impl SubAssign<&BitmapStore> for ArrayStore {
    fn sub_assign(&mut self, rhs: &BitmapStore) {
        self.vec.retain(|&i| !rhs.contains(i));
    }
}

impl BitXor<Self> for &ArrayStore {
    type Output = ArrayStore;

    fn bitxor(self, rhs: Self) -> Self::Output {
        ArrayStore::from_vec_unchecked(scalar::xor(&self.vec, &rhs.vec))
    }
}

impl fmt::Debug for ArrayStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayStore<{:?}>", self.vec)
    }
}

impl<'a> IntoIterator for &'a ArrayStore {
    type Item = &'a u16;
    type IntoIter = slice::Iter<'a, u16>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ArrayStore {
    type Item = u16;
    type IntoIter = vec::IntoIter<u16>;

    fn into_iter(self) -> Self::IntoIter {
        self.vec.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn into_vec(s: ArrayStore) -> Vec<u16> {
        s.into_iter().collect()
    }

    #[test]
    fn test_array_insert() {
        let mut store = ArrayStore::new();
        assert!(store.insert(5));
        assert!(!store.insert(5));
        assert!(store.insert(1));
        assert_eq!(into_vec(store), vec![1, 5]);
    }

    #[test]
    fn test_array_insert_range() {
        let mut store = ArrayStore::new();
        assert_eq!(store.insert_range(10..=14), 5);
        assert_eq!(into_vec(store.clone()), vec![10, 11, 12, 13, 14]);

        let inserted = store.insert_range(12..=20);
        assert_eq!(inserted, 6);
        assert_eq!(into_vec(store), vec![10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20]);
    }

    #[test]
    fn test_array_insert_range_empty() {
        let mut store = ArrayStore::new();
        assert_eq!(store.insert_range(10..=5), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_array_remove_range() {
        let mut store = ArrayStore::from_vec_unchecked(vec![1, 2, 3, 4, 5]);
        assert_eq!(store.remove_range(2..=4), 3);
        assert_eq!(into_vec(store), vec![1, 5]);
    }

    #[test]
    fn test_array_is_subset() {
        let a = ArrayStore::from_vec_unchecked(vec![1, 2, 3]);
        let b = ArrayStore::from_vec_unchecked(vec![1, 2, 3, 4]);
        assert!(a.is_subset(&b));
        assert!(!b.is_subset(&a));
    }

    #[test]
    fn test_array_to_bitmap_store() {
        let store = ArrayStore::from_vec_unchecked(vec![1, 2, 100, 1000]);
        let bitmap = store.to_bitmap_store();
        assert_eq!(bitmap.len(), 4);
        assert!(bitmap.contains(1));
        assert!(bitmap.contains(1000));
        assert!(!bitmap.contains(3));
    }

    #[test]
    fn test_array_try_from_rejects_duplicates() {
        assert!(ArrayStore::try_from(vec![1, 1, 2]).is_err());
    }

    #[test]
    fn test_array_try_from_rejects_out_of_order() {
        assert!(ArrayStore::try_from(vec![2, 1]).is_err());
    }

    #[test]
    fn test_array_or_and_sub_xor() {
        let a = ArrayStore::from_vec_unchecked(vec![1, 2, 3]);
        let b = ArrayStore::from_vec_unchecked(vec![2, 3, 4]);

        assert_eq!(into_vec(&a | &b), vec![1, 2, 3, 4]);
        assert_eq!(into_vec(&a & &b), vec![2, 3]);
        assert_eq!(into_vec(&a - &b), vec![1]);
        assert_eq!(into_vec(&a ^ &b), vec![1, 4]);
    }
}
