//! Instrumented selection sort.
//!
//! Two variants live under [`selection`]: the textbook single-ended selection sort and a
//! double-ended one that places both the minimum and the maximum of the unsorted window per
//! pass. Both can stop early once the whole slice is detected as sorted, and both report every
//! primitive operation to an optional [`tracker::Instrument`] sink.
//!
//! [`runner`] is the benchmark driver behind the `selection_sort_rs` binary.

// Registers a `SortImpl` for the module it is invoked in, so the shared test suite and the bench
// harness can drive the module's `sort` and `sort_by` functions.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &mut [T])
            where
                T: Ord,
            {
                sort(v);
            }

            #[inline]
            fn sort_by<T, F>(v: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(v, compare);
            }
        }
    };
}

pub mod cli;
pub mod error;
pub mod runner;
pub mod selection;
pub mod tracker;

pub use error::{ParseError, SortError};
pub use selection::{SortOptions, Variant};
pub use tracker::{Instrument, PerformanceTracker};
