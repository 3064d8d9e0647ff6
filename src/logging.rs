use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Environment variable holding the log level (`error` .. `trace`).
pub const LOG_ENV: &str = "BROADSIDE_LOG";

/// Writes records to stderr so they stay out of the board display.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// `LEVEL [target] message`, with the target shortened to the part after the
/// crate name so engine lines read `[board]`, `[placement]` and so on.
fn format_record(record: &Record) -> String {
    let target = record.target();
    let short = target
        .strip_prefix("broadside::")
        .unwrap_or(target);
    format!("{:<5} [{}] {}", record.level(), short, record.args())
}

fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger with the level from [`LOG_ENV`], defaulting to
/// `warn` when unset or unparsable. Later calls are ignored.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
