use std::error::Error;
use std::fmt;

/// Error returned when a bulk operation that requires its input to be sorted
/// (`RoaringBitmap::from_sorted_iter`, `RoaringBitmap::append`) is given
/// values that are not strictly increasing.
///
/// `valid_until` reports how many leading elements were accepted before the
/// first out-of-order (or duplicate) value was seen, so a caller can resume
/// or diagnose the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonSortedIntegers {
    pub(crate) valid_until: u64,
}

impl NonSortedIntegers {
    /// The number of elements, starting from the beginning of the input,
    /// that were successfully appended before the ordering violation.
    pub fn valid_until(&self) -> u64 {
        self.valid_until
    }
}

impl fmt::Display for NonSortedIntegers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "integers are not sorted: valid until the {}th integer",
            self.valid_until
        )
    }
}

impl Error for NonSortedIntegers {}
