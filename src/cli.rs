//! Command line surface of the `selection_sort_rs` binary.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "selection_sort_rs",
    version,
    about = "Runs an instrumented selection sort on generated input and reports the counters",
    after_help = "\
With fewer than four positional values a demo run is performed:
  size 20, random input, standard algorithm, early exit on.

Examples:
  selection_sort_rs 20 random standard true
  selection_sort_rs 1000 reversed double false 42
  selection_sort_rs --auto"
)]
pub struct Cli {
    /// Number of elements to generate, e.g. 20 or 1000
    #[arg(allow_hyphen_values = true)]
    pub size: Option<String>,

    /// Input pattern: random | sorted | reversed | duplicates
    pub mode: Option<String>,

    /// Algorithm: standard | double
    pub algo: Option<String>,

    /// Stop as soon as the array is sorted: true | false
    pub early_exit: Option<String>,

    /// RNG seed, defaults to a time derived value
    #[arg(allow_hyphen_values = true)]
    pub seed: Option<String>,

    /// Anything after the seed. Ignored with a warning.
    #[arg(hide = true, num_args = 0.., allow_hyphen_values = true)]
    pub extra: Vec<String>,

    /// Sweep sizes 20, 50, 200 and 1000 with both algorithms, ignoring positional values
    #[arg(long)]
    pub auto: bool,
}

impl Cli {
    /// The positional values in order, stopping at the first one that is missing.
    pub fn positionals(&self) -> Vec<String> {
        [
            &self.size,
            &self.mode,
            &self.algo,
            &self.early_exit,
            &self.seed,
        ]
        .into_iter()
        .map_while(|arg| arg.clone())
        .chain(self.extra.iter().cloned())
        .collect()
    }
}
