use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

/// A source of lines for the command session.
pub trait Input {
    /// Shows `prompt` and reads one line.
    ///
    /// The trailing line terminator is stripped. Returns `Ok(None)` once the
    /// input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the prompt or reading the line fails.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

impl<I: Input + ?Sized> Input for &mut I {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        (**self).read_line(prompt)
    }
}

/// Prompts on a writer and reads answers from a buffered reader.
#[derive(Debug)]
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter reading from `reader` and prompting on `writer`.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Input for Prompter<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Replays a fixed sequence of lines.
///
/// Prompts are recorded rather than shown.
#[derive(Debug, Default)]
pub struct Script {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl Script {
    /// Creates a script that answers prompts with `lines`, in order.
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// The prompts shown so far, oldest first.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// The number of lines not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Input for Script {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}
