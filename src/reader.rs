use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, BufRead, Write};

/// One read from the operator: a line with its terminator stripped, or
/// end-of-input. Keeping the two distinct is what lets the loop stop on
/// Ctrl-D while treating a blank line as an ordinary empty command.
pub enum ReadOutcome {
    Line(String),
    Eof,
}

/// Acquires one line of raw input at a time.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome>;
}

/// Interactive source backed by rustyline, used when stdin is a terminal.
///
/// No history is recorded. Ctrl-C cancels the current line and comes back
/// as an empty one, so the loop simply prompts again.
pub struct Editor {
    inner: DefaultEditor,
}

impl Editor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: DefaultEditor::new()?,
        })
    }
}

impl LineSource for Editor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        match self.inner.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Line(String::new())),
            Err(e) => Err(e.into()),
        }
    }
}

/// Plain source over any buffered reader, used for piped input and in tests.
///
/// Writes the prompt (when non-empty) to stdout and flushes before each
/// read; an empty prompt writes nothing.
pub struct Stream<R> {
    input: R,
}

impl<R: BufRead> Stream<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> LineSource for Stream<R> {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        if !prompt.is_empty() {
            let mut stdout = io::stdout();
            stdout.write_all(prompt.as_bytes())?;
            stdout.flush()?;
        }
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(ReadOutcome::Eof);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(ReadOutcome::Line(line))
    }
}
