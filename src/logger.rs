//! Process-wide verbose logger.
//!
//! Diagnostics are written only after one of the `init_*` functions has
//! installed a sink; until then every message is dropped silently. The
//! enumeration hot loop never logs.

use once_cell::sync::Lazy;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

type Sink = Box<dyn Write + Send>;

static LOGGER: Lazy<Mutex<Option<Sink>>> = Lazy::new(|| Mutex::new(None));

fn install(sink: Sink) {
    match LOGGER.lock() {
        Ok(mut guard) => *guard = Some(sink),
        Err(poisoned) => *poisoned.into_inner() = Some(sink),
    }
}

/// Routes verbose messages to standard error.
pub fn init_stderr_logger() {
    install(Box::new(io::stderr()));
}

/// Routes verbose messages to `path`, truncating any existing file.
pub fn init_file_logger(path: &Path) -> Result<(), io::Error> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    install(Box::new(BufWriter::new(file)));
    Ok(())
}

/// Installs an arbitrary writer as the sink.
pub fn init_writer_logger<W: Write + Send + 'static>(writer: W) {
    install(Box::new(writer));
}

/// Returns `true` when a sink is installed.
pub fn is_enabled() -> bool {
    LOGGER.lock().map(|guard| guard.is_some()).unwrap_or(false)
}

fn write_line(prefix: &str, message: &str) {
    if let Ok(mut guard) = LOGGER.lock() {
        if let Some(writer) = guard.as_mut() {
            if writeln!(writer, "{prefix}{message}").is_err() {
                eprintln!("Fallback (log write failed): {prefix}{message}");
            }
        }
    }
}

/// Writes a verbose message.
pub fn log_verbose_message(message: impl AsRef<str>) {
    write_line("", message.as_ref());
}

/// Writes a verbose warning.
pub fn log_verbose_warning(message: impl AsRef<str>) {
    write_line("WARNING: ", message.as_ref());
}

/// Flushes the installed sink, if any.
pub fn flush() {
    if let Ok(mut guard) = LOGGER.lock() {
        if let Some(writer) = guard.as_mut() {
            let _ = writer.flush();
        }
    }
}
