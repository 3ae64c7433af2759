use crate::error::Result;
use crate::ValueSorter;

/// An implementation of LSD [Radix Sort](https://en.wikipedia.org/wiki/Radix_sort)
///
/// # Usage
///```
/// use ordo_sorts::{RadixSorter, ValueSorter};
///
/// let mut slice = [170, 45, 75, 90, 802, 24, 2, 66];
/// RadixSorter.sort(&mut slice).unwrap();
/// assert_eq!(slice, [2, 24, 45, 66, 75, 90, 170, 802]);
///```
/// # Explanation
///
/// Least-significant-digit radix sort over decimal digits. Each pass scatters
/// the elements into ten buckets keyed by the current digit, preserving
/// arrival order within a bucket, then concatenates the buckets 0 through 9
/// back into the slice. Because every pass is stable, after `max_digits`
/// passes (the digit count of the largest element; zero counts as one digit)
/// the slice is fully sorted. O(n * d) time, O(n) auxiliary space per pass.
///
/// Operates on `u32` only: decimal digits say nothing about sign, so a signed
/// variant would interleave negatives among positives. Taking unsigned input
/// makes that misuse unrepresentable. The trait seam is fallible for
/// uniformity with the other value sorters, but radix sort itself has no
/// failure modes.
#[derive(Default)]
pub struct RadixSorter;

fn digit(value: u32, position: u32) -> usize {
    ((value / 10u32.pow(position)) % 10) as usize
}

fn digit_count(value: u32) -> u32 {
    if value == 0 {
        1
    } else {
        value.ilog10() + 1
    }
}

impl ValueSorter for RadixSorter {
    fn sort(&self, slice: &mut [u32]) -> Result<()> {
        let max_digits = slice.iter().copied().map(digit_count).max().unwrap_or(0);

        for position in 0..max_digits {
            let mut buckets: [Vec<u32>; 10] = Default::default();
            for &v in slice.iter() {
                buckets[digit(v, position)].push(v);
            }

            let mut i = 0;
            for bucket in &buckets {
                for &v in bucket {
                    slice[i] = v;
                    i += 1;
                }
            }
        }

        Ok(())
    }
}
