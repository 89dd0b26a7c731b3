//! Benchmark driver: turns command line values into a [`RunConfig`], generates the input, sorts
//! it with a fresh [`PerformanceTracker`] and renders the result.
//!
//! Bad values never abort a run. They fall back to a default and produce a warning that the
//! caller decides how to surface.

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use sort_test_tools::patterns;
use tracing::debug;

use crate::error::{ParseError, SortError};
use crate::selection::{self, SortOptions, Variant};
use crate::tracker::PerformanceTracker;

pub const DEFAULT_SIZE: usize = 20;

/// Number of leading elements shown in the input and output preview.
pub const PREVIEW_LEN: usize = 50;

/// Upper bound (exclusive) of the values drawn for [`InputMode::Duplicates`].
pub const DUPLICATES_RANGE: i32 = 10;

pub const AUTO_SIZES: [usize; 4] = [20, 50, 200, 1000];

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Shape of the generated input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// `0..n`
    Sorted,
    /// `n-1..=0`
    Reversed,
    /// Uniform in `0..DUPLICATES_RANGE`.
    Duplicates,
    /// Uniform over the full `i32` range.
    #[default]
    Random,
}

impl InputMode {
    pub fn name(self) -> &'static str {
        match self {
            InputMode::Sorted => "sorted",
            InputMode::Reversed => "reversed",
            InputMode::Duplicates => "duplicates",
            InputMode::Random => "random",
        }
    }

    /// Same `len` and `seed` always produce the same sequence.
    pub fn generate(self, len: usize, seed: u64) -> Vec<i32> {
        match self {
            InputMode::Sorted => patterns::ascending(len),
            InputMode::Reversed => patterns::descending(len),
            InputMode::Duplicates => {
                patterns::random_uniform_seeded(len, 0..DUPLICATES_RANGE, seed)
            }
            InputMode::Random => patterns::random_seeded(len, seed),
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sorted" => Ok(InputMode::Sorted),
            "reversed" => Ok(InputMode::Reversed),
            "duplicates" => Ok(InputMode::Duplicates),
            "random" => Ok(InputMode::Random),
            _ => Err(ParseError::UnknownMode(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub size: usize,
    pub mode: InputMode,
    pub variant: Variant,
    pub early_exit: bool,
    pub seed: i64,
}

/// A validated [`RunConfig`] plus the warnings produced while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub config: RunConfig,
    pub warnings: Vec<String>,
}

impl RunConfig {
    /// The run used when fewer than four positional values are given.
    pub fn demo(seed: i64) -> Self {
        Self {
            size: DEFAULT_SIZE,
            mode: InputMode::Random,
            variant: Variant::Standard,
            early_exit: true,
            seed,
        }
    }

    /// Parses `<size> <mode> <algo> <early_exit> [seed] [ignored...]`, seeding from the clock when no usable
    /// seed is given.
    pub fn from_args(args: &[String]) -> Parsed {
        Self::from_args_with_seed(args, time_seed())
    }

    /// Like [`RunConfig::from_args`] with an explicit fallback seed.
    pub fn from_args_with_seed(args: &[String], fallback_seed: i64) -> Parsed {
        let mut warnings = Vec::new();

        let [size, mode, algo, early_exit, rest @ ..] = args else {
            return Parsed {
                config: Self::demo(fallback_seed),
                warnings,
            };
        };

        // Sizes must fit in an `i32`, anything wider is rejected like any other bad value.
        let size = match size.trim().parse::<i32>() {
            Ok(size) => usize::try_from(size).unwrap_or(0),
            Err(_) => {
                warnings.push(format!(
                    "invalid size `{size}`, using default {DEFAULT_SIZE}"
                ));
                DEFAULT_SIZE
            }
        };

        let mode = mode.parse::<InputMode>().unwrap_or_else(|err| {
            warnings.push(format!("{err}, using random"));
            InputMode::Random
        });

        let variant = algo.parse::<Variant>().unwrap_or_else(|err| {
            warnings.push(format!("{err}, using standard"));
            Variant::Standard
        });

        let early_exit = early_exit.trim().eq_ignore_ascii_case("true");

        let seed = match rest.first() {
            Some(raw) => raw.trim().parse::<i64>().unwrap_or_else(|_| {
                warnings.push(format!("invalid seed `{raw}`, using {fallback_seed}"));
                fallback_seed
            }),
            None => fallback_seed,
        };

        if let Some(extra) = rest.get(1..).filter(|extra| !extra.is_empty()) {
            warnings.push(format!(
                "ignoring {} extra argument(s): {}",
                extra.len(),
                extra.join(" ")
            ));
        }

        Parsed {
            config: RunConfig {
                size,
                mode,
                variant,
                early_exit,
                seed,
            },
            warnings,
        }
    }

    pub fn sort_options(&self) -> SortOptions {
        SortOptions::new(self.variant, self.early_exit)
    }
}

/// Nanoseconds since the unix epoch, truncated to 64 bits.
pub fn time_seed() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as i64)
        .unwrap_or_default()
}

/// Every size in [`AUTO_SIZES`] with both variants on random input, early exit on.
pub fn auto_configs(base_seed: i64) -> Vec<RunConfig> {
    let variants = [Variant::Standard, Variant::DoubleEnded];

    AUTO_SIZES
        .iter()
        .flat_map(|&size| variants.iter().map(move |&variant| (size, variant)))
        .zip(1u64..)
        .map(|((size, variant), run)| RunConfig {
            size,
            mode: InputMode::Random,
            variant,
            early_exit: true,
            seed: base_seed ^ GOLDEN_GAMMA.wrapping_mul(run) as i64,
        })
        .collect()
}

/// Outcome of one [`run_once`] call.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub config: RunConfig,
    pub input: Vec<i32>,
    pub output: Vec<i32>,
    pub tracker: PerformanceTracker,
}

pub fn run_once(config: &RunConfig) -> Result<RunReport, SortError> {
    let input = config.mode.generate(config.size, config.seed as u64);
    let mut output = input.clone();
    let mut tracker = PerformanceTracker::new();

    debug!(
        n = config.size,
        mode = %config.mode,
        algo = %config.variant,
        early_exit = config.early_exit,
        seed = config.seed,
        "starting run"
    );

    selection::sort(
        Some(output.as_mut_slice()),
        Some(&mut tracker),
        config.sort_options(),
    )?;

    debug!(
        comparisons = tracker.comparisons(),
        swaps = tracker.swaps(),
        iterations = tracker.iterations(),
        early_terminated = tracker.was_early_terminated(),
        "run finished"
    );

    Ok(RunReport {
        config: config.clone(),
        input,
        output,
        tracker,
    })
}

/// Debug formatting of the first [`PREVIEW_LEN`] elements, with ` …` appended when `v` is longer.
pub fn preview(v: &[i32]) -> String {
    let shown = &v[..v.len().min(PREVIEW_LEN)];
    let ellipsis = if v.len() > PREVIEW_LEN { " …" } else { "" };
    format!("{shown:?}{ellipsis}")
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = &self.config;
        writeln!(f, "=== Run ===")?;
        writeln!(
            f,
            "mode={}, algo={}, early_exit={}, n={}, seed={}",
            config.mode, config.variant, config.early_exit, config.size, config.seed
        )?;
        writeln!(f, "Input:")?;
        writeln!(f, "{}", preview(&self.input))?;
        writeln!(f, "Sorted:")?;
        writeln!(f, "{}", preview(&self.output))?;
        writeln!(f, "Metrics: {}", self.tracker)?;
        writeln!(f, "CSV:")?;
        writeln!(f, "{}", self.tracker.csv_header())?;
        write!(f, "{}", self.tracker.to_csv_row())
    }
}
