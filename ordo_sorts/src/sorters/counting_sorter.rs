use crate::error::{Result, SortError};
use crate::ValueSorter;

/// An implementation of [Counting Sort](https://en.wikipedia.org/wiki/Counting_sort)
///
/// # Usage
///```
/// use ordo_sorts::{CountingSorter, ValueSorter};
///
/// let mut slice = [3, 1, 1, 2, 8, 5, 6, 7, 3, 1, 6, 7, 5, 5];
/// CountingSorter::default().sort(&mut slice).unwrap();
/// assert_eq!(slice, [1, 1, 1, 2, 3, 3, 5, 5, 5, 6, 6, 7, 7, 8]);
///```
/// # Explanation
///
/// Counting sort never compares two elements. It tallies how often each value
/// in `0..=max_value` occurs, turns the tally into a prefix-sum table (each
/// entry now holds the number of elements `<=` that value, i.e. one past the
/// value's last output slot), then walks the input backwards placing each
/// element at its decremented table entry. The backwards walk consumes each
/// value's slot range from the back, so duplicates land in their original
/// relative order: the sort is stable. O(n + K) time and space for K =
/// `max_value`.
///
/// Any input value above `max_value` is a precondition violation. It is
/// reported as [`SortError::RangeViolation`] before the slice is touched, so
/// a failed call leaves the input exactly as it was.
#[derive(Debug, Clone, Copy)]
pub struct CountingSorter {
    /// Largest value the frequency table accounts for.
    pub max_value: u32,
}

impl Default for CountingSorter {
    fn default() -> Self {
        Self { max_value: 100 }
    }
}

impl ValueSorter for CountingSorter {
    fn sort(&self, slice: &mut [u32]) -> Result<()> {
        if let Some(&value) = slice.iter().find(|&&v| v > self.max_value) {
            return Err(SortError::RangeViolation {
                value,
                min: 0,
                max: self.max_value,
            });
        }

        let mut counts = vec![0usize; self.max_value as usize + 1];
        for &v in slice.iter() {
            counts[v as usize] += 1;
        }
        for i in 1..counts.len() {
            counts[i] += counts[i - 1];
        }

        let mut sorted = vec![0u32; slice.len()];
        for &v in slice.iter().rev() {
            counts[v as usize] -= 1;
            sorted[counts[v as usize]] = v;
        }
        slice.copy_from_slice(&sorted);

        Ok(())
    }
}
