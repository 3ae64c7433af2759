//! The classic sorting algorithm family — bubble, selection, insertion, merge,
//! quick, heap, counting, radix and cyclic sort — implemented over a uniform,
//! testable contract.
//!
//! Comparison sorts implement [`Sorter`] and work on any `&mut [T]` where
//! `T: Ord`. The non-comparison sorts (counting, radix, cyclic) implement
//! [`ValueSorter`] over `&mut [u32]`: they derive positions from the values
//! themselves and are fallible, since their preconditions (bounded range,
//! valid permutation) can be violated by the input.
//!
//! # Example
//!
//! ```
//! use ordo_sorts::{BubbleSorter, Sorter};
//!
//! let mut slice = vec![1, 3, 2, 5, 4];
//! BubbleSorter.sort(&mut slice);
//! assert_eq!(vec![1, 2, 3, 4, 5], slice);
//! ```
//!
//! Every algorithm upholds the same invariant: the output is a permutation of
//! the input (same multiset of values, same length), ascending under `<=`.
//! [`MergeSorter`], [`InsertionSorter`], [`CountingSorter`] and [`RadixSorter`]
//! are additionally stable; the rest give no stability guarantee.

pub mod benchmark;
mod error;
mod sorters;

pub use error::{Result, SortError};

pub use sorters::bubble_sorter::BubbleSorter;
pub use sorters::counting_sorter::CountingSorter;
pub use sorters::cyclic_sorter::{CyclicSorter, RangeStart};
pub use sorters::heap_sorter::HeapSorter;
pub use sorters::insertion_sorter::InsertionSorter;
pub use sorters::merge_sorter::MergeSorter;
pub use sorters::quick_sorter::QuickSorter;
pub use sorters::radix_sorter::RadixSorter;
pub use sorters::selection_sorter::SelectionSorter;

use clap::{Args, Subcommand, ValueEnum};
use colored::Colorize;

/// A comparison-based sorting algorithm must implement the trait `Sorter`.
///
/// The caller hands over exclusive access to the slice for the duration of the
/// call; the sort mutates it in place and cannot fail.
pub trait Sorter<T>
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]);
}

/// A non-comparison sorting algorithm over non-negative integers.
///
/// These algorithms derive an element's position from its value, so they carry
/// preconditions a caller can violate (a bounded value range for counting
/// sort, a valid permutation for cyclic sort). Violations are detected before
/// the slice is mutated, so on `Err` the input is left untouched.
pub trait ValueSorter {
    fn sort(&self, slice: &mut [u32]) -> Result<()>;
}

/// Selector for the nine algorithm variants, used by the demo driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Counting,
    Radix,
    Cyclic,
}

impl Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Counting => "Counting Sort",
            Algorithm::Radix => "Radix Sort",
            Algorithm::Cyclic => "Cyclic Sort",
        }
    }

    /// The fixed sample array shown when the demo is run without `--input`.
    fn sample(&self) -> &'static [u32] {
        match self {
            Algorithm::Counting => &[3, 1, 1, 2, 8, 5, 6, 7, 3, 1, 6, 7, 5, 5],
            Algorithm::Radix => &[
                9, 23, 6, 235, 563, 34, 99, 999, 4563, 7357, 2463, 5, 2000, 1246, 78,
            ],
            Algorithm::Cyclic => &[10, 8, 6, 4, 3, 7, 2, 5, 0, 9, 1],
            _ => &[29, 10, 9, 11, 14, 37, 17],
        }
    }
}

/// The sorting playground. Run `ordo sorts demo --algorithm bubble` to see a
/// sample array sorted before your eyes, or `ordo sorts bench` to race the
/// whole family against each other.
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct SortsArgs {
    #[command(subcommand)]
    command: SortsCommands,
}

#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
enum SortsCommands {
    /// Sort a sample array with the chosen algorithm and print the before and
    /// after snapshots.
    Demo {
        /// Which algorithm to run.
        #[arg(short, long, value_enum)]
        algorithm: Algorithm,

        /// Comma-separated list of non-negative integers to sort instead of
        /// the built-in sample.
        #[arg(short, long, value_delimiter = ',')]
        input: Option<Vec<u32>>,

        /// Largest value counting sort will accept.
        #[arg(long, default_value_t = 100)]
        max_value: u32,

        /// Whether cyclic sort expects a permutation of [0, n-1] or [1, n].
        #[arg(long, value_enum, default_value_t = RangeStart::ZeroBased)]
        range_start: RangeStart,
    },

    /// Benchmark the whole algorithm family over growing input sizes.
    Bench,
}

impl SortsArgs {
    pub fn run(self) -> Result<()> {
        match self.command {
            SortsCommands::Demo {
                algorithm,
                input,
                max_value,
                range_start,
            } => {
                let mut values = input.unwrap_or_else(|| algorithm.sample().to_vec());

                println!("{}", format!("-----{}-----", algorithm.name()).bold().blue());
                println!("Initial Array:");
                print_values(&values);

                match algorithm {
                    Algorithm::Bubble => BubbleSorter.sort(&mut values),
                    Algorithm::Selection => SelectionSorter.sort(&mut values),
                    Algorithm::Insertion => InsertionSorter.sort(&mut values),
                    Algorithm::Merge => MergeSorter.sort(&mut values),
                    Algorithm::Quick => QuickSorter.sort(&mut values),
                    Algorithm::Heap => HeapSorter.sort(&mut values),
                    Algorithm::Counting => CountingSorter { max_value }.sort(&mut values)?,
                    Algorithm::Radix => RadixSorter.sort(&mut values)?,
                    Algorithm::Cyclic => CyclicSorter { range_start }.sort(&mut values)?,
                }

                println!("Sorted Array:");
                print_values(&values);

                Ok(())
            }
            SortsCommands::Bench => benchmark::run(),
        }
    }
}

fn print_values(values: &[u32]) {
    let line = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("{line}");
}
