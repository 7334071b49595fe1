use log::{LevelFilter, Log, Metadata, Record};
use std::env;
use std::io::{self, Write};
use std::str::FromStr;

pub static LOG_ENV_VAR: &str = "MONKEY_LOG";

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                io::stderr(),
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Unset or unrecognised values turn logging off.
pub fn level_filter(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .unwrap_or(LevelFilter::Off)
}

/// Installs the stderr logger at the level named by `MONKEY_LOG`. Calling it
/// again is harmless.
pub fn init() {
    let level = level_filter(env::var(LOG_ENV_VAR).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter(None), LevelFilter::Off);
        assert_eq!(level_filter(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_filter(Some(" TRACE ")), LevelFilter::Trace);
        assert_eq!(level_filter(Some("off")), LevelFilter::Off);
        assert_eq!(level_filter(Some("loud")), LevelFilter::Off);
    }
}
