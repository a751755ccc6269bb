// Clap definitions in derive style

use std::ffi::OsString;

use clap::{Parser, error::ErrorKind};
use log::LevelFilter;

#[derive(clap::Parser, Default)]
#[command(name = "albums", version, about)]
pub struct Cli {
    /// Set the level of verbosity
    /// -v for info, -vv for debug, -vvv for trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse_or_default() -> Self {
        Self::parse_or_default_from(std::env::args_os())
    }

    /// Like `parse_from`, but bad arguments are reported on stderr and
    /// replaced by the defaults instead of exiting. `--help` and
    /// `--version` still print and exit successfully.
    pub fn parse_or_default_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => cli,
            Err(e) => match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
                // Logging is not initialized yet.
                _ => {
                    eprint!("{}", e);
                    Self::default()
                }
            },
        }
    }

    /// `None` leaves the level to `RUST_LOG`.
    pub fn log_level(&self) -> Option<LevelFilter> {
        match self.verbose {
            0 => None,
            1 => Some(LevelFilter::Info),
            2 => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        }
    }
}
