use std::path::PathBuf;
use structopt::StructOpt;

/// Options for the CLI.
#[derive(StructOpt, Debug)]
#[structopt(
    name = "isorun",
    about = "Run test_*.py executables in isolated working directories."
)]
pub struct Opts {
    /// Directory containing the tests.
    #[structopt(name = "TEST_DIR", parse(from_os_str), default_value = ".")]
    pub dir: PathBuf,

    /// Log more. Repeat for more detail (-v info, -vv debug, -vvv trace).
    #[structopt(short, long, parse(from_occurrences))]
    pub verbose: u8,

    /// Disable colored output.
    #[structopt(long)]
    pub no_color: bool,
}

impl Opts {
    /// Log filter implied by the verbosity flag. `RUST_LOG` takes precedence.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
