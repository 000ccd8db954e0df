use std::{collections::VecDeque, io::{BufRead, Write}, sync::{Arc, RwLock}};

/// Where program output goes and program input comes from.
pub trait ConsoleIO {
    /// Writes one full line of program output.
    fn write_line(&self, line: &str) -> std::io::Result<()>;

    /// Shows an input prompt without ending the line.
    fn prompt(&self, text: &str) -> std::io::Result<()>;

    /// Reads one line without its terminator. `None` at end of input.
    fn read_line(&self) -> std::io::Result<Option<String>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsoleIO;

impl ConsoleIO for StdConsoleIO {
    fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{line}")
    }

    fn prompt(&self, text: &str) -> std::io::Result<()> {
        let mut stdout = std::io::stdout().lock();
        write!(stdout, "{text}")?;
        stdout.flush()
    }

    fn read_line(&self) -> std::io::Result<Option<String>> {
        let mut buf = String::new();

        match std::io::stdin().lock().read_line(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(buf.trim_end_matches(['\n', '\r']).to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullConsoleIO;

impl ConsoleIO for NullConsoleIO {
    fn write_line(&self, _line: &str) -> std::io::Result<()> {
        Ok(())
    }

    fn prompt(&self, _text: &str) -> std::io::Result<()> {
        Ok(())
    }

    fn read_line(&self) -> std::io::Result<Option<String>> {
        Ok(None)
    }
}

/// Records output and prompts, and serves queued input lines.
#[derive(Debug, Default, Clone)]
pub struct VectorConsoleIO {
    pub output: Arc<RwLock<Vec<String>>>,
    pub prompts: Arc<RwLock<Vec<String>>>,
    pub input: Arc<RwLock<VecDeque<String>>>,
}

impl VectorConsoleIO {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let console = Self::new();
        console.push_input(lines);
        console
    }

    pub fn push_input<I, S>(&self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut input = write_lock(&self.input);
        input.extend(lines.into_iter().map(Into::into));
    }

    /// Drains the captured output lines.
    pub fn take(&self) -> Vec<String> {
        let mut output = write_lock(&self.output);
        std::mem::take(&mut *output)
    }

    pub fn take_prompts(&self) -> Vec<String> {
        let mut prompts = write_lock(&self.prompts);
        std::mem::take(&mut *prompts)
    }

    pub fn reset(&self) {
        write_lock(&self.output).clear();
        write_lock(&self.prompts).clear();
        write_lock(&self.input).clear();
    }
}

fn write_lock<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    // a poisoned lock still holds usable data for a capture buffer
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl ConsoleIO for VectorConsoleIO {
    fn write_line(&self, line: &str) -> std::io::Result<()> {
        write_lock(&self.output).push(line.to_string());
        Ok(())
    }

    fn prompt(&self, text: &str) -> std::io::Result<()> {
        write_lock(&self.prompts).push(text.to_string());
        Ok(())
    }

    fn read_line(&self) -> std::io::Result<Option<String>> {
        Ok(write_lock(&self.input).pop_front())
    }
}
