use crate::Sorter;

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Usage
///```
/// use ordo_sorts::{InsertionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// InsertionSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Insertion sort grows a sorted prefix by taking the next unsorted element
/// and walking it left, one swap at a time, until the element to its left is
/// no longer greater. Equal elements are never crossed, so the relative order
/// of duplicates survives: this sort is stable. O(n^2) worst case, O(n) on
/// already-sorted input where every element stays put.
#[derive(Default)]
pub struct InsertionSorter;

impl<T> Sorter<T> for InsertionSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        for unsorted in 1..slice.len() {
            let mut i = unsorted;
            while i > 0 && slice[i - 1] > slice[i] {
                slice.swap(i - 1, i);
                i -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        InsertionSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        InsertionSorter.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        InsertionSorter.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn simple_edge_cases() {
        let mut one = vec![1];
        InsertionSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![2, 1];
        InsertionSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        InsertionSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }

    // Orders by key alone; the tag records the original position so tests can
    // observe whether duplicates kept their relative order.
    #[derive(Debug, Clone)]
    struct Tagged {
        key: u32,
        tag: usize,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    #[test]
    fn equal_keys_keep_their_relative_order() {
        let mut slice: Vec<Tagged> = [3, 1, 3, 2, 1, 3]
            .iter()
            .enumerate()
            .map(|(tag, &key)| Tagged { key, tag })
            .collect();
        InsertionSorter.sort(&mut slice);

        let keys: Vec<u32> = slice.iter().map(|t| t.key).collect();
        assert_eq!(keys, vec![1, 1, 2, 3, 3, 3]);

        let tags: Vec<usize> = slice.iter().map(|t| t.tag).collect();
        assert_eq!(tags, vec![1, 4, 3, 0, 2, 5]);
    }
}
