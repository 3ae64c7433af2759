pub mod bubble_sorter;
pub mod counting_sorter;
pub mod cyclic_sorter;
pub mod heap_sorter;
pub mod insertion_sorter;
pub mod merge_sorter;
pub mod quick_sorter;
pub mod radix_sorter;
pub mod selection_sorter;

#[cfg(test)]
mod tests {
    use crate::{
        BubbleSorter, HeapSorter, InsertionSorter, MergeSorter, QuickSorter, SelectionSorter,
        Sorter,
    };
    use rand::Rng;

    fn comparison_sorters() -> Vec<(&'static str, Box<dyn Sorter<u32>>)> {
        vec![
            ("bubble", Box::new(BubbleSorter)),
            ("selection", Box::new(SelectionSorter)),
            ("insertion", Box::new(InsertionSorter)),
            ("merge", Box::new(MergeSorter)),
            ("quick", Box::new(QuickSorter)),
            ("heap", Box::new(HeapSorter)),
        ]
    }

    #[test]
    fn shared_sample_array() {
        for (name, sorter) in comparison_sorters() {
            let mut slice = vec![29, 10, 9, 11, 14, 37, 17];
            sorter.sort(&mut slice);
            assert_eq!(slice, vec![9, 10, 11, 14, 17, 29, 37], "{name}");
        }
    }

    #[test]
    fn permutation_invariant_on_random_input() {
        let mut rng = rand::thread_rng();
        for n in [0, 1, 2, 17, 256] {
            let original: Vec<u32> = (0..n).map(|_| rng.gen_range(0..50)).collect();
            for (name, sorter) in comparison_sorters() {
                let mut sorted = original.clone();
                sorter.sort(&mut sorted);

                let mut expected = original.clone();
                expected.sort();
                assert_eq!(sorted, expected, "{name} on n={n}");
            }
        }
    }

    #[test]
    fn sorting_twice_matches_sorting_once() {
        let mut rng = rand::thread_rng();
        let original: Vec<u32> = (0..100).map(|_| rng.gen_range(0..1000)).collect();
        for (name, sorter) in comparison_sorters() {
            let mut once = original.clone();
            sorter.sort(&mut once);

            let mut twice = once.clone();
            sorter.sort(&mut twice);
            assert_eq!(once, twice, "{name}");
        }
    }

    #[test]
    fn all_equal_elements_left_unchanged() {
        for (name, sorter) in comparison_sorters() {
            let mut slice = vec![7; 12];
            sorter.sort(&mut slice);
            assert_eq!(slice, vec![7; 12], "{name}");
        }
    }

    #[test]
    fn empty_slice_stays_empty() {
        for (name, sorter) in comparison_sorters() {
            let mut slice: Vec<u32> = vec![];
            sorter.sort(&mut slice);
            assert!(slice.is_empty(), "{name}");
        }
    }
}
