use log::{Level, LevelFilter, Log, Metadata, Record};

use verdict::{Error, UnitResult};

use crate::verbosity::Verbosity;

pub fn init(verbosity: Verbosity) -> UnitResult {
    let filter = verbosity.level_filter();
    match log::set_boxed_logger(Box::new(Logger { filter })) {
        Ok(()) => {
            log::set_max_level(filter);
            UnitResult::SUCCESS
        }
        Err(err) => Error::new(err.to_string()).with_code("Logger").into_result(),
    }
}

struct Logger {
    filter: LevelFilter,
}

impl Log for Logger {
    #[inline]
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match record.level() {
            Level::Error => eprintln!("error: {}", record.args()),
            Level::Warn => eprintln!("warning: {}", record.args()),
            _ => eprintln!("{}", record.args()),
        }
    }

    fn flush(&self) {}
}
