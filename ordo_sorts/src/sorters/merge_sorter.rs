use crate::Sorter;

/// An implementation of [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort)
///
/// # Usage
///```
/// use ordo_sorts::{MergeSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// MergeSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Classic divide and conquer: split the range at its midpoint, sort each
/// half recursively, then merge the two sorted runs with a linear scan into a
/// temporary buffer sized to the merged range. When both runs offer an equal
/// element the left one is taken first, which is what makes this sort stable.
/// O(n log n) time in every case, O(n) auxiliary space for the merge buffer.
///
/// The buffer copies elements out of the slice, hence the extra `Clone`
/// bound compared to the other comparison sorts.
#[derive(Default)]
pub struct MergeSorter;

impl<T> Sorter<T> for MergeSorter
where
    T: Ord + Clone,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        merge_sort(slice);
    }
}

fn merge_sort<T: Ord + Clone>(slice: &mut [T]) {
    if slice.len() <= 1 {
        return;
    }

    let mid = slice.len() / 2;
    let (left, right) = slice.split_at_mut(mid);
    merge_sort(left);
    merge_sort(right);
    merge(slice, mid);
}

// Merges the two sorted runs slice[..mid] and slice[mid..] in a single linear
// scan. Ties take the left run's element first to keep the sort stable.
fn merge<T: Ord + Clone>(slice: &mut [T], mid: usize) {
    let mut merged = Vec::with_capacity(slice.len());
    let mut left = 0;
    let mut right = mid;

    while left < mid && right < slice.len() {
        if slice[left] <= slice[right] {
            merged.push(slice[left].clone());
            left += 1;
        } else {
            merged.push(slice[right].clone());
            right += 1;
        }
    }
    merged.extend_from_slice(&slice[left..mid]);
    merged.extend_from_slice(&slice[right..]);

    slice.clone_from_slice(&merged);
}
