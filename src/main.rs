mod cli;
mod logger;
mod verbosity;

use std::{fs, io, process::ExitCode};

use camino::Utf8Path;
use clap::Parser as _;
use log::{error, trace};

use verdict::{Error, Result};

use crate::{cli::Args, verbosity::Verbosity};

fn main() -> ExitCode {
    let args = Args::parse();
    let verbosity = match Verbosity::try_from(args.verbose) {
        Ok(verbosity) => verbosity,
        Err(err) => err.exit(),
    };
    logger::init(verbosity).visit_unit(
        || (),
        |err| eprintln!("cannot set up logging: {err}"),
    );

    comma_fields(&args.path).fold(
        |fields| {
            fields.iter().for_each(|field| println!("{field}"));
            ExitCode::SUCCESS
        },
        |err| {
            error!("[{}] {err}", err.code());
            ExitCode::FAILURE
        },
    )
}

fn comma_fields(path: &Utf8Path) -> Result<Vec<String>> {
    read_file(path).and_then(|contents| {
        trace!("read {} bytes from {path}", contents.len());
        if !contents.contains(',') {
            return Error::new("no commas found in the file")
                .with_code("NoComma")
                .into_result();
        }
        let fields = contents
            .split(',')
            .map(|field| field.trim().to_string())
            .collect();
        Result::success(fields)
    })
}

// Platform exceptions stop here: io errors become domain errors at the
// boundary where they occur.
fn read_file(path: &Utf8Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(contents) => Result::success(contents),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Error::not_found(format!("cannot find {path}"))
                .with_code("FileNotFound")
                .into_result()
        }
        Err(err) => Error::new(format!("cannot read {path}: {err}")).into_result(),
    }
}
