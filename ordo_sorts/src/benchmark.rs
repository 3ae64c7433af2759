//! Races the whole algorithm family against each other over growing input
//! sizes, counting comparisons and wall-clock time per sorter.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use prettytable::{row, Table};
use rand::seq::SliceRandom;
use rand::Rng;
use std::{cell::Cell, rc::Rc, time::Instant};

use crate::{
    BubbleSorter, CountingSorter, CyclicSorter, HeapSorter, InsertionSorter, MergeSorter,
    QuickSorter, RadixSorter, SelectionSorter, Sorter, ValueSorter,
};

const SIZES: &[usize] = &[0, 1, 100, 10_000, 100_000, 1_000_000];

// The O(n^2) family (and first-pivot quick sort, which degrades on the sorted
// runs the evaluator produces) sit out above this size.
const QUADRATIC_CUTOFF: usize = 10_000;

const COUNTING_MAX: u32 = 100;

/// Wraps an element so that every comparison made against it bumps a shared
/// counter. The counter does not participate in the ordering.
#[derive(Clone)]
struct SortEvaluator<T> {
    elem: T,
    comparisons: Rc<Cell<usize>>,
}

impl<T> SortEvaluator<T> {
    fn new(elem: T, comparisons: Rc<Cell<usize>>) -> Self {
        Self { elem, comparisons }
    }
}

impl<T: PartialEq> PartialEq for SortEvaluator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.comparisons.set(self.comparisons.get() + 1);
        self.elem == other.elem
    }
}

impl<T: Eq> Eq for SortEvaluator<T> {}

impl<T: PartialOrd> PartialOrd for SortEvaluator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.comparisons.set(self.comparisons.get() + 1);
        self.elem.partial_cmp(&other.elem)
    }
}

impl<T: Ord> Ord for SortEvaluator<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.comparisons.set(self.comparisons.get() + 1);
        self.elem.cmp(&other.elem)
    }
}

fn run_comparison_bench<T, S>(
    sorter: S,
    values: &mut [SortEvaluator<T>],
    comparisons: Rc<Cell<usize>>,
) -> usize
where
    T: Ord + Clone,
    S: Sorter<SortEvaluator<T>>,
{
    comparisons.set(0);
    sorter.sort(values);

    comparisons.get()
}

pub fn run() -> crate::Result<()> {
    let mut random = rand::thread_rng();
    let counter = Rc::new(Cell::new(0));

    // 6 comparison sorters + 3 value sorters per size tier.
    let progress = ProgressBar::new((SIZES.len() * 9) as u64);
    progress.set_style(
        ProgressStyle::with_template(
            "Benchmark -> {spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] ({pos}/{len}, ETA: {eta})",
        )
        .unwrap(),
    );

    for &n in SIZES {
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            values.push(SortEvaluator::new(random.gen::<i32>(), counter.clone()));
        }

        let mut table = Table::new();
        table.add_row(row![
            "Sorter".bold(),
            "Comparisons Made".bold(),
            "Time Taken".bold()
        ]);

        if n <= QUADRATIC_CUTOFF {
            let now = Instant::now();
            let took = run_comparison_bench(BubbleSorter, &mut values, counter.clone());
            table.add_row(row![
                "Bubble Sort",
                took.to_string(),
                format!("{:?}", now.elapsed())
            ]);

            let now = Instant::now();
            let took = run_comparison_bench(SelectionSorter, &mut values, counter.clone());
            table.add_row(row![
                "Selection Sort",
                took.to_string(),
                format!("{:?}", now.elapsed())
            ]);

            let now = Instant::now();
            let took = run_comparison_bench(InsertionSorter, &mut values, counter.clone());
            table.add_row(row![
                "Insertion Sort",
                took.to_string(),
                format!("{:?}", now.elapsed())
            ]);

            // First-element pivot blows the stack on the sorted runs the
            // earlier benches leave behind, so quick sort stays in this tier.
            let mut shuffled = values.clone();
            shuffled.shuffle(&mut random);
            let now = Instant::now();
            let took = run_comparison_bench(QuickSorter, &mut shuffled, counter.clone());
            table.add_row(row![
                "Quick Sort",
                took.to_string(),
                format!("{:?}", now.elapsed())
            ]);
            progress.inc(4);
        } else {
            table.add_row(row!["Bubble Sort", "Skipped".red(), "Too Slow"]);
            table.add_row(row!["Selection Sort", "Skipped".red(), "Too Slow"]);
            table.add_row(row!["Insertion Sort", "Skipped".red(), "Too Slow"]);
            table.add_row(row!["Quick Sort", "Skipped".red(), "Degenerate Pivot"]);
            progress.inc(4);
        }

        let now = Instant::now();
        let took = run_comparison_bench(MergeSorter, &mut values, counter.clone());
        table.add_row(row![
            "Merge Sort",
            took.to_string(),
            format!("{:?}", now.elapsed())
        ]);
        progress.inc(1);

        let now = Instant::now();
        let took = run_comparison_bench(HeapSorter, &mut values, counter.clone());
        table.add_row(row![
            "Heap Sort",
            took.to_string(),
            format!("{:?}", now.elapsed())
        ]);
        progress.inc(1);

        // The value sorters never compare elements, so they run on plain
        // integers and report no comparison count.
        let mut bounded: Vec<u32> = (0..n).map(|_| random.gen_range(0..=COUNTING_MAX)).collect();
        let now = Instant::now();
        CountingSorter {
            max_value: COUNTING_MAX,
        }
        .sort(&mut bounded)?;
        table.add_row(row![
            "Counting Sort",
            "n/a",
            format!("{:?}", now.elapsed())
        ]);
        progress.inc(1);

        let mut unbounded: Vec<u32> = (0..n).map(|_| random.gen::<u32>()).collect();
        let now = Instant::now();
        RadixSorter.sort(&mut unbounded)?;
        table.add_row(row!["Radix Sort", "n/a", format!("{:?}", now.elapsed())]);
        progress.inc(1);

        let mut permutation: Vec<u32> = (0..n as u32).collect();
        permutation.shuffle(&mut random);
        let now = Instant::now();
        CyclicSorter::default().sort(&mut permutation)?;
        table.add_row(row!["Cyclic Sort", "n/a", format!("{:?}", now.elapsed())]);
        progress.inc(1);

        println!(
            "{} {}",
            "List Size -> ".bold().underline().blue(),
            n.to_string().bold()
        );
        table.printstd();
        println!();
    }

    progress.finish_and_clear();

    Ok(())
}
