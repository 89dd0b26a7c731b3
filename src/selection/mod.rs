//! Selection sort engine.
//!
//! Both variants are `O(N^2)` comparisons and at most `O(N)` swaps. Neither is stable.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, SortError};
use crate::tracker::Instrument;

pub mod double_ended;
pub mod standard;

/// Which selection strategy a sort call uses.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// One minimum per pass, placed at the front of the unsorted window.
    #[default]
    Standard,
    /// Minimum and maximum per pass, placed at both ends of the unsorted window.
    DoubleEnded,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Standard => "standard",
            Variant::DoubleEnded => "double",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Variant::Standard),
            "double" => Ok(Variant::DoubleEnded),
            _ => Err(ParseError::UnknownVariant(s.to_owned())),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SortOptions {
    pub variant: Variant,
    /// Check the whole slice for sortedness after every pass and stop once it is.
    pub early_exit: bool,
}

impl SortOptions {
    pub fn new(variant: Variant, early_exit: bool) -> Self {
        Self {
            variant,
            early_exit,
        }
    }
}

/// Sorts `v` in place, reporting every primitive operation to `tracker`.
///
/// `tracker` is any [`Instrument`]: `Some(&mut PerformanceTracker)`, a custom sink, or `()` when
/// nothing should be counted. `None` for `v` is rejected with [`SortError::MissingInput`]. Slices
/// shorter than two elements are returned untouched without reporting anything.
pub fn sort<T>(
    v: Option<&mut [T]>,
    tracker: impl Instrument,
    options: SortOptions,
) -> Result<(), SortError>
where
    T: Ord,
{
    sort_by(v, |a, b| a.cmp(b), tracker, options)
}

/// Like [`sort`], ordering elements with `compare`.
pub fn sort_by<T, F>(
    v: Option<&mut [T]>,
    mut compare: F,
    mut tracker: impl Instrument,
    options: SortOptions,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let v = v.ok_or(SortError::MissingInput)?;
    if v.len() < 2 {
        return Ok(());
    }

    let is_less = &mut |a: &T, b: &T| compare(a, b) == Ordering::Less;
    match options.variant {
        Variant::Standard => {
            standard::sort_instrumented(v, is_less, &mut tracker, options.early_exit)
        }
        Variant::DoubleEnded => {
            double_ended::sort_instrumented(v, is_less, &mut tracker, options.early_exit)
        }
    }

    Ok(())
}

/// Swaps `v[a]` and `v[b]`. Counts as one swap, two reads and two writes.
#[inline(always)]
fn swap<T, I>(v: &mut [T], a: usize, b: usize, tracker: &mut I)
where
    I: Instrument + ?Sized,
{
    tracker.inc_swap();
    tracker.add_reads(2);
    tracker.add_writes(2);
    v.swap(a, b);
}

/// Checks every adjacent pair of `v`, stopping at the first one out of order.
///
/// Deliberately looks at the whole slice, not only the part that is still unsorted.
fn is_sorted<T, F, I>(v: &[T], is_less: &mut F, tracker: &mut I) -> bool
where
    F: FnMut(&T, &T) -> bool,
    I: Instrument + ?Sized,
{
    for k in 1..v.len() {
        tracker.inc_comparison();
        tracker.add_reads(2);
        if is_less(&v[k], &v[k - 1]) {
            return false;
        }
    }

    true
}
