use crate::Sorter;

/// An implementation of [Heap Sort](https://en.wikipedia.org/wiki/Heapsort)
///
/// # Usage
///```
/// use ordo_sorts::{HeapSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// HeapSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Two phases, both in place. First the slice is turned into a max-heap by
/// sifting down every internal node, starting from the last non-leaf at
/// `n / 2 - 1` and walking back to the root. Then the heap root (the global
/// maximum) is repeatedly swapped with the last element still inside the
/// heap, the heap boundary shrinks by one, and the new root is sifted back
/// down. O(n log n) time, O(1) auxiliary space; the sift-down is a loop, so
/// there is no recursion stack either. Not stable.
#[derive(Default)]
pub struct HeapSorter;

impl<T> Sorter<T> for HeapSorter
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]) {
        let n = slice.len();
        if n <= 1 {
            return;
        }

        // Bottom-up heap construction.
        for node in (0..n / 2).rev() {
            sift_down(slice, node, n);
        }

        // Pop the maximum into the shrinking sorted suffix.
        for end in (1..n).rev() {
            slice.swap(0, end);
            sift_down(slice, 0, end);
        }
    }
}

// Restores the max-heap property for the subtree rooted at `node`, treating
// `slice[..boundary]` as the heap.
fn sift_down<T: Ord>(slice: &mut [T], mut node: usize, boundary: usize) {
    loop {
        let left = 2 * node + 1;
        if left >= boundary {
            return;
        }

        let mut largest = if slice[left] > slice[node] { left } else { node };
        let right = left + 1;
        if right < boundary && slice[right] > slice[largest] {
            largest = right;
        }

        if largest == node {
            return;
        }
        slice.swap(node, largest);
        node = largest;
    }
}
