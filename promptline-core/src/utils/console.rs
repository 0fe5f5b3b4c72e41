//! # Console Line I/O
//!
//! The prompts never touch `stdin`/`stdout` directly. They talk to a
//! [`Console`], which reads and writes whole lines. This keeps the retry loop
//! testable: swap [`StdConsole`] for a [`ScriptedConsole`] and the same
//! prompt runs against a fixed list of answers.
//!
//! Line terminators (`\n` or `\r\n`) are removed from every line read.
//! Nothing else is trimmed.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// A source of input lines and a sink for output lines.
pub trait Console {
    /// Reads one line without its terminator. `Ok(None)` means end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Writes `line` followed by a newline.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

fn read_buffered<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    strip_line_ending(&mut line);
    Ok(Some(line))
}

/// The process-wide standard streams.
///
/// Each call locks `stdin` or `stdout` only for its own duration and never
/// closes them, so any number of prompts can run one after another.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        read_buffered(&mut io::stdin().lock())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()
    }
}

/// Any buffered reader paired with any writer.
///
/// # Example
/// ```rust
/// use std::io::Cursor;
/// use promptline_core::utils::{BufferedConsole, Terminal};
///
/// let console = BufferedConsole::new(Cursor::new("7\n"), Vec::new());
/// let mut terminal = Terminal::new(console);
/// assert_eq!(terminal.prompt_i32("Pick 1-9:", 1, 9).unwrap(), 7);
///
/// let (_, written) = terminal.into_console().into_parts();
/// assert_eq!(String::from_utf8(written).unwrap(), "Pick 1-9:\n");
/// ```
#[derive(Debug)]
pub struct BufferedConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> BufferedConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Console for BufferedConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        read_buffered(&mut self.reader)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()
    }
}

/// Replays a fixed list of answers and records everything written.
///
/// Once the script runs out, reads report end of input.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Appends more answers to the end of the script.
    pub fn push_answer(&mut self, answer: impl Into<String>) {
        self.answers.push_back(answer.into());
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Every line written so far, in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.answers.pop_front())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }
}
