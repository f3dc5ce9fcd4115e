//! Console sink for rendered tables and diagnostics

use std::io::{self, Write};

/// Where the formatter writes its output
pub trait Console: Send + Sync {
    /// Write a rendered table (stdout for the default console)
    fn out(&self, text: &str) -> io::Result<()>;

    /// Write a diagnostic (stderr for the default console)
    fn err(&self, text: &str) -> io::Result<()>;
}

/// Process stdout/stderr
///
/// Each call is a single `write_all` on the locked stream, so one table is
/// never split by another thread's output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn out(&self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }

    fn err(&self, text: &str) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        stderr.write_all(text.as_bytes())
    }
}
