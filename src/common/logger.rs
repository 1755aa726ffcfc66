use std::{
  fs::{self, File, OpenOptions},
  io::{self, BufRead, BufReader, Write},
  path::{Path, PathBuf},
  sync::{Arc, Mutex, OnceLock},
};

use tracing_subscriber::{EnvFilter, fmt::{self, time::LocalTime}, prelude::*};

use crate::configs::{Config, FileLoggingConfig, LoggingConfig};

pub(crate) static GLOBAL_FILE_WRITER: OnceLock<RotatingLogFile> = OnceLock::new();

/// `println!` that is mirrored into the log file once logging is up.
#[macro_export]
macro_rules! log_println {
    () => {{
        std::println!();
        $crate::common::logger::append_to_file_raw("\n");
    }};
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        std::println!("{}", msg);
        $crate::common::logger::append_to_file_raw(&format!("{}\n", msg));
    }};
}

pub fn append_to_file_raw(msg: &str) {
  if let Some(mut writer) = GLOBAL_FILE_WRITER.get().cloned() {
    let _ = writer.write_all(strip_ansi(msg).as_bytes());
  }
}

fn strip_ansi(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  let mut in_escape = false;
  for c in s.chars() {
    match (in_escape, c) {
      (_, '\x1b') => in_escape = true,
      (true, c) if c.is_ascii_alphabetic() => in_escape = false,
      (true, _) => {}
      (false, c) => out.push(c),
    }
  }
  out
}

/// Base level plus extra directives, e.g. `info,vidrelay::resolver=debug`.
pub fn filter_directive(logging: Option<&LoggingConfig>) -> String {
  let level = logging.and_then(|l| l.level.as_deref()).unwrap_or("info");
  match logging.and_then(|l| l.filters.as_deref()).filter(|f| !f.is_empty()) {
    Some(filters) => format!("{},{}", level, filters),
    None => level.to_string(),
  }
}

pub fn init(config: &Config) {
  let logging = config.logging.as_ref();

  // RUST_LOG wins over the config file
  let env_filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(filter_directive(logging)));

  let stdout_layer = fmt::layer()
    .with_timer(LocalTime::rfc_3339())
    .with_target(true)
    .with_thread_ids(true)
    .with_line_number(true)
    .with_file(false);

  let file_layer = logging.and_then(|l| l.file.as_ref()).map(|file| {
    let writer = RotatingLogFile::open(file);
    let _ = GLOBAL_FILE_WRITER.set(writer.clone());
    fmt::layer()
      .with_writer(writer)
      .with_timer(LocalTime::rfc_3339())
      .with_target(true)
      .with_line_number(true)
      .with_ansi(false)
  });

  tracing_subscriber::registry()
    .with(env_filter)
    .with(stdout_layer)
    .with(file_layer)
    .init();
}

/// Append-only log file that keeps roughly the last `max_lines` lines.
#[derive(Clone)]
pub(crate) struct RotatingLogFile {
  path: PathBuf,
  max_lines: usize,
  written: Arc<Mutex<usize>>,
}

impl RotatingLogFile {
  fn open(config: &FileLoggingConfig) -> Self {
    let path = PathBuf::from(&config.path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      if let Err(e) = fs::create_dir_all(parent) {
        eprintln!("Failed to create log directory {}: {}", parent.display(), e);
      }
    }
    Self {
      path,
      max_lines: config.max_lines.max(1) as usize,
      written: Arc::new(Mutex::new(0)),
    }
  }

  fn truncate_head(&self) -> io::Result<()> {
    if !Path::new(&self.path).exists() {
      return Ok(());
    }
    let lines = BufReader::new(File::open(&self.path)?)
      .lines()
      .collect::<Result<Vec<_>, _>>()?;
    if lines.len() <= self.max_lines {
      return Ok(());
    }
    let mut file = File::create(&self.path)?;
    for line in &lines[lines.len() - self.max_lines..] {
      writeln!(file, "{}", line)?;
    }
    Ok(())
  }
}

impl io::Write for RotatingLogFile {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    OpenOptions::new()
      .create(true)
      .append(true)
      .open(&self.path)?
      .write_all(buf)?;

    let mut written = self.written.lock().unwrap_or_else(|e| e.into_inner());
    *written += buf.iter().filter(|&&b| b == b'\n').count();

    // trim once a tenth of the budget (min 50 lines) has accumulated
    if *written >= (self.max_lines / 10).max(50) {
      if let Err(e) = self.truncate_head() {
        eprintln!("Failed to trim log file: {}", e);
      }
      *written = 0;
    }
    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

impl<'a> fmt::MakeWriter<'a> for RotatingLogFile {
  type Writer = Self;

  fn make_writer(&'a self) -> Self::Writer {
    self.clone()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_filter_directive() {
    assert_eq!(filter_directive(None), "info");

    let logging = LoggingConfig {
      level: Some("debug".into()),
      filters: Some("hyper=warn".into()),
      file: None,
    };
    assert_eq!(filter_directive(Some(&logging)), "debug,hyper=warn");

    let logging = LoggingConfig {
      level: None,
      filters: Some(String::new()),
      file: None,
    };
    assert_eq!(filter_directive(Some(&logging)), "info");
  }

  #[test]
  fn test_strip_ansi() {
    assert_eq!(strip_ansi("\x1b[32mready\x1b[0m on :3000"), "ready on :3000");
  }

  #[test]
  fn test_log_file_keeps_tail() {
    let path = std::env::temp_dir().join(format!("vidrelay-log-{}.log", std::process::id()));
    let _ = fs::remove_file(&path);
    let mut writer = RotatingLogFile::open(&FileLoggingConfig {
      path: path.to_string_lossy().into_owned(),
      max_lines: 20,
    });

    for i in 0..120 {
      writer.write_all(format!("line {}\n", i).as_bytes()).unwrap();
    }

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert!(lines.len() <= 70);
    assert_eq!(lines.last(), Some(&"line 119"));
    let _ = fs::remove_file(&path);
  }
}
