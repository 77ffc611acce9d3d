use camino::Utf8PathBuf;
use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// File whose comma-separated fields should be printed
    pub path: Utf8PathBuf,

    /// Print more detail, repeat for more still
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
