#![cfg(feature = "std")]

//! Line-based input and output used by the game driver.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::string::String;
use std::vec::Vec;

/// Source of player input and sink for game output.
pub trait Console {
    /// Show `prompt` and read one line. `Ok(None)` means input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Print `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> io::Result<()>;
}

/// Console over the process's stdin and stdout.
pub struct StdConsole {
    stdin: io::StdinLock<'static>,
    stdout: io::Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin().lock(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut out = self.stdout.lock();
        write!(out, "{}", prompt)?;
        out.flush()?;
        let mut line = String::new();
        if self.stdin.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.stdout.lock(), "{}", text)
    }
}

/// Console fed from a fixed list of lines, recording everything written.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Everything written so far, prompts included.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Whole transcript as one string.
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.push(prompt.to_string());
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }
}
