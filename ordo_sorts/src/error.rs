use thiserror::Error;

/// Alias for `Result<T, ordo_sorts::SortError>`.
pub type Result<T> = std::result::Result<T, SortError>;

/// Errors raised by the value-based sorters.
///
/// The comparison sorts cannot fail; counting and cyclic sort carry
/// preconditions on the input values and report violations eagerly, before
/// the slice is mutated.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// An input value lies outside the range the algorithm assumes.
    #[error("value {value} lies outside the supported range {min}..={max}")]
    RangeViolation { value: u32, min: u32, max: u32 },

    /// Cyclic sort received an input that is not a bijection onto the
    /// expected range. Left undetected this would spin forever swapping the
    /// duplicate back and forth.
    #[error("value {value} appears more than once; input is not a permutation")]
    InvalidPermutation { value: u32 },
}
