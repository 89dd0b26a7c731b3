//! Operation counting for the sort engine.
//!
//! The engine is generic over [`Instrument`]. Passing `&mut ()` compiles every report down to
//! nothing, `Option<&mut I>` forwards to `I` only when a sink is present.

use std::fmt;

/// Receives primitive operation counts from the sort engine.
///
/// All methods default to no-ops.
pub trait Instrument {
    #[inline(always)]
    fn inc_comparison(&mut self) {}

    #[inline(always)]
    fn inc_swap(&mut self) {}

    #[inline(always)]
    fn add_reads(&mut self, _count: u64) {}

    #[inline(always)]
    fn add_writes(&mut self, _count: u64) {}

    /// One outer pass of the sort.
    #[inline(always)]
    fn inc_iteration(&mut self) {}

    #[inline(always)]
    fn mark_early_termination(&mut self) {}
}

impl Instrument for () {}

impl<I: Instrument + ?Sized> Instrument for Option<&mut I> {
    #[inline(always)]
    fn inc_comparison(&mut self) {
        if let Some(sink) = self {
            sink.inc_comparison();
        }
    }

    #[inline(always)]
    fn inc_swap(&mut self) {
        if let Some(sink) = self {
            sink.inc_swap();
        }
    }

    #[inline(always)]
    fn add_reads(&mut self, count: u64) {
        if let Some(sink) = self {
            sink.add_reads(count);
        }
    }

    #[inline(always)]
    fn add_writes(&mut self, count: u64) {
        if let Some(sink) = self {
            sink.add_writes(count);
        }
    }

    #[inline(always)]
    fn inc_iteration(&mut self) {
        if let Some(sink) = self {
            sink.inc_iteration();
        }
    }

    #[inline(always)]
    fn mark_early_termination(&mut self) {
        if let Some(sink) = self {
            sink.mark_early_termination();
        }
    }
}

/// Accumulates the counters of one benchmark run.
///
/// Counters are never cleared implicitly, call [`PerformanceTracker::reset`] before reusing a
/// tracker for an unrelated sort.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PerformanceTracker {
    comparisons: u64,
    swaps: u64,
    array_reads: u64,
    array_writes: u64,
    iterations: u64,
    early_terminated: bool,
}

impl PerformanceTracker {
    /// Column names matching [`PerformanceTracker::to_csv_row`].
    pub const CSV_HEADER: &'static str =
        "comparisons,swaps,array_reads,array_writes,iterations,early_terminated";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    pub fn array_reads(&self) -> u64 {
        self.array_reads
    }

    pub fn array_writes(&self) -> u64 {
        self.array_writes
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn was_early_terminated(&self) -> bool {
        self.early_terminated
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn csv_header(&self) -> &'static str {
        Self::CSV_HEADER
    }

    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.comparisons,
            self.swaps,
            self.array_reads,
            self.array_writes,
            self.iterations,
            self.early_terminated
        )
    }
}

impl Instrument for PerformanceTracker {
    #[inline]
    fn inc_comparison(&mut self) {
        self.comparisons += 1;
    }

    #[inline]
    fn inc_swap(&mut self) {
        self.swaps += 1;
    }

    #[inline]
    fn add_reads(&mut self, count: u64) {
        self.array_reads += count;
    }

    #[inline]
    fn add_writes(&mut self, count: u64) {
        self.array_writes += count;
    }

    #[inline]
    fn inc_iteration(&mut self) {
        self.iterations += 1;
    }

    #[inline]
    fn mark_early_termination(&mut self) {
        self.early_terminated = true;
    }
}

impl fmt::Display for PerformanceTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PerformanceTracker{{comparisons={}, swaps={}, array_reads={}, array_writes={}, \
             iterations={}, early_terminated={}}}",
            self.comparisons,
            self.swaps,
            self.array_reads,
            self.array_writes,
            self.iterations,
            self.early_terminated
        )
    }
}
