use crate::error::{Result, SortError};
use crate::ValueSorter;

use clap::ValueEnum;

/// Whether cyclic sort expects a permutation of `[0, n-1]` or of `[1, n]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum RangeStart {
    #[default]
    ZeroBased,
    OneBased,
}

impl RangeStart {
    fn offset(&self) -> u32 {
        match self {
            RangeStart::ZeroBased => 0,
            RangeStart::OneBased => 1,
        }
    }
}

/// An implementation of [Cyclic Sort](https://en.wikipedia.org/wiki/Cycle_sort)
/// specialized for permutations of a contiguous range.
///
/// # Usage
///```
/// use ordo_sorts::{CyclicSorter, RangeStart, ValueSorter};
///
/// let mut slice = [10, 8, 6, 4, 3, 7, 2, 5, 0, 9, 1];
/// CyclicSorter::default().sort(&mut slice).unwrap();
/// assert_eq!(slice, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
///
/// let mut one_based = [3, 1, 2];
/// CyclicSorter { range_start: RangeStart::OneBased }
///     .sort(&mut one_based)
///     .unwrap();
/// assert_eq!(one_based, [1, 2, 3]);
///```
/// # Explanation
///
/// When the input is known to be a permutation of a contiguous range, every
/// value names its own home index. A single left-to-right pass with a cursor
/// does the rest: if the element under the cursor is already home, advance;
/// otherwise swap it into its home position and stay put, since the swap has
/// pulled an arbitrary element under the cursor. Each swap homes at least one
/// element, so the pass finishes after at most n swaps. O(n) time, O(1)
/// space.
///
/// The permutation precondition is load-bearing: a duplicate value would make
/// the swap loop trade the same two elements forever. The input is therefore
/// validated up front, and a bad input fails with a typed error
/// ([`SortError::RangeViolation`] or [`SortError::InvalidPermutation`])
/// before anything is moved.
#[derive(Debug, Clone, Copy, Default)]
pub struct CyclicSorter {
    pub range_start: RangeStart,
}

impl ValueSorter for CyclicSorter {
    fn sort(&self, slice: &mut [u32]) -> Result<()> {
        let offset = self.range_start.offset();
        let n = slice.len() as u32;

        let mut seen = vec![false; slice.len()];
        for &v in slice.iter() {
            if v < offset || v >= offset + n {
                return Err(SortError::RangeViolation {
                    value: v,
                    min: offset,
                    max: offset + n - 1,
                });
            }
            let home = (v - offset) as usize;
            if seen[home] {
                return Err(SortError::InvalidPermutation { value: v });
            }
            seen[home] = true;
        }

        let mut i = 0;
        while i < slice.len() {
            let home = (slice[i] - offset) as usize;
            if home == i {
                i += 1;
            } else {
                slice.swap(i, home);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn arbitrary_zero_based_permutation() {
        let mut slice = [10, 8, 6, 4, 3, 7, 2, 5, 0, 9, 1];
        CyclicSorter::default().sort(&mut slice).unwrap();
        assert_eq!(slice, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn arbitrary_one_based_permutation() {
        let mut slice = [4, 1, 5, 2, 3];
        CyclicSorter {
            range_start: RangeStart::OneBased,
        }
        .sort(&mut slice)
        .unwrap();
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn already_sorted_permutation() {
        let mut slice: Vec<u32> = (0..50).collect();
        CyclicSorter::default().sort(&mut slice).unwrap();
        assert_eq!(slice, (0..50).collect::<Vec<u32>>());
    }

    #[test]
    fn out_of_range_value_is_rejected() {
        let mut slice = [2, 0, 5];
        let err = CyclicSorter::default().sort(&mut slice).unwrap_err();
        assert_eq!(
            err,
            SortError::RangeViolation {
                value: 5,
                min: 0,
                max: 2
            }
        );
        assert_eq!(slice, [2, 0, 5], "input must be left untouched");
    }

    #[test]
    fn zero_is_out_of_range_for_one_based_input() {
        let mut slice = [2, 0, 1];
        let err = CyclicSorter {
            range_start: RangeStart::OneBased,
        }
        .sort(&mut slice)
        .unwrap_err();
        assert_eq!(
            err,
            SortError::RangeViolation {
                value: 0,
                min: 1,
                max: 3
            }
        );
    }

    #[test]
    fn duplicate_value_is_rejected_instead_of_looping() {
        let mut slice = [1, 2, 1, 0];
        let err = CyclicSorter::default().sort(&mut slice).unwrap_err();
        assert_eq!(err, SortError::InvalidPermutation { value: 1 });
        assert_eq!(slice, [1, 2, 1, 0], "input must be left untouched");
    }

    #[test]
    fn simple_edge_cases() {
        let mut empty: Vec<u32> = vec![];
        CyclicSorter::default().sort(&mut empty).unwrap();
        assert_eq!(empty, vec![]);

        let mut one = vec![0];
        CyclicSorter::default().sort(&mut one).unwrap();
        assert_eq!(one, vec![0]);

        let mut two = vec![1, 0];
        CyclicSorter::default().sort(&mut two).unwrap();
        assert_eq!(two, vec![0, 1]);
    }
}
