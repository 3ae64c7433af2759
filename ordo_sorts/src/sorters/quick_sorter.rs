use crate::Sorter;

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort)
///
/// # Usage
///```
/// use ordo_sorts::{QuickSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// QuickSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// In-place Lomuto partitioning with the first element of the range as the
/// pivot. A boundary index tracks the last position known to hold a value
/// `<=` pivot; every element found to be `<=` pivot during the scan is
/// swapped just past the boundary. Once the scan finishes the pivot is
/// swapped into its resolved boundary position and the two sub-ranges on
/// either side are sorted recursively, excluding the pivot itself.
///
/// Average O(n log n). The fixed first-element pivot degrades to O(n^2) time
/// and O(n) recursion depth on already-sorted or adversarial input; that is a
/// known limitation of this pivot choice, kept deliberately. Not stable.
#[derive(Default)]
pub struct QuickSorter;

fn quicksort<T: Ord>(slice: &mut [T]) {
    if slice.len() <= 1 {
        return;
    }

    let (pivot, rest) = slice.split_first_mut().expect("slice is non-empty");

    // Lomuto partition: everything in rest[..boundary] is <= pivot.
    let mut boundary = 0;
    for i in 0..rest.len() {
        if rest[i] <= *pivot {
            rest.swap(boundary, i);
            boundary += 1;
        }
    }

    // rest[boundary - 1] is slice[boundary]; the pivot lands there with all
    // smaller-or-equal elements on its left.
    slice.swap(0, boundary);

    let (left, right) = slice.split_at_mut(boundary);
    quicksort(left);
    quicksort(&mut right[1..]);
}

impl<T> Sorter<T> for QuickSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        quicksort(slice)
    }
}
