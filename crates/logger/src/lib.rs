use colored::Colorize;
use log::Level;
use std::sync::OnceLock;

#[derive(Clone)]
pub struct Logger;

impl log::Log for Logger {
  fn enabled(&self, metadata: &log::Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &log::Record) {
    if !self.enabled(record.metadata()) {
      return;
    }

    let time = chrono::Local::now()
      .format("%Y-%m-%d %H:%M:%S")
      .to_string()
      .magenta();

    let level = match record.level() {
      Level::Error => "ERROR".red(),
      Level::Warn => "WARN".yellow(),
      Level::Info => "INFO".green(),
      Level::Debug => "DEBUG".blue(),
      Level::Trace => "TRACE".dimmed(),
    };

    let target = record.target().cyan();

    println!("{} {} [{}] {}", time, level, target, record.args());
  }

  fn flush(&self) {}
}

static LOGGER: OnceLock<()> = OnceLock::new();

/// Installs the logger at `Info`. Calling it again is a no-op.
pub fn init_logger() {
  init_logger_with_level(Level::Info);
}

/// Installs the logger once. Later calls only adjust the max level, so tests
/// sharing a process can each pick their own verbosity.
pub fn init_logger_with_level(level: Level) {
  LOGGER.get_or_init(|| {
    // Another crate may have installed a logger first; keep theirs.
    let _ = log::set_logger(&Logger);
  });

  log::set_max_level(level.to_level_filter());
}

#[cfg(test)]
mod tests {
  use super::*;

  // Max level is process-global, so the assertions share one test.
  #[test]
  fn test_init_logger_with_level() {
    init_logger_with_level(Level::Debug);
    init_logger_with_level(Level::Debug);
    assert_eq!(log::max_level(), log::LevelFilter::Debug);

    init_logger_with_level(Level::Warn);

    let logger = Logger;
    let warn = log::MetadataBuilder::new().level(Level::Warn).build();
    let trace = log::MetadataBuilder::new().level(Level::Trace).build();

    assert!(log::Log::enabled(&logger, &warn));
    assert!(!log::Log::enabled(&logger, &trace));
  }
}
