use clap::{error::ErrorKind as ClapErrorKind, CommandFactory};
use log::LevelFilter;

use crate::cli::Args;

#[derive(Copy, Clone, Debug, Default)]
pub enum Verbosity {
    #[default]
    Terse,
    Verbose,
    Trace,
}

impl Verbosity {
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Self::Terse => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Info,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

impl TryFrom<u8> for Verbosity {
    type Error = clap::Error;

    fn try_from(ctr: u8) -> Result<Self, clap::Error> {
        match ctr {
            0 => Ok(Verbosity::Terse),
            1 => Ok(Verbosity::Verbose),
            2 => Ok(Verbosity::Trace),
            _ => Err(Args::command().error(ClapErrorKind::TooManyValues, "too verbose")),
        }
    }
}
