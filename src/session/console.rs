//! Console seam for the interactive session.
//!
//! The controller talks to a `Console` so the integration tests can script
//! a whole session in-process instead of spawning the binary.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Line-oriented interactive console.
pub trait Console {
    /// Print `text` (no trailing newline), flush, and read one line.
    ///
    /// Returns `None` on end of input. The returned line has no trailing
    /// newline and is not otherwise normalized.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>>;

    /// Print one output line.
    fn line(&mut self, text: &str) -> io::Result<()>;
}

/// Real stdin/stdout console used by `commlab parity`.
#[derive(Default)]
pub struct StdioConsole;

impl Console for StdioConsole {
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{text}")?;
        stdout.flush()?;

        let mut buf = String::new();
        let n = io::stdin().lock().read_line(&mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(Some(buf))
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{text}")?;
        Ok(())
    }
}

/// Scripted console: feeds queued answers, records the full transcript.
///
/// Exhausting the script behaves like end of input.
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

    /// Everything printed so far (prompts and lines), in order.
    pub fn transcript(&self) -> String {
        self.transcript.join("\n")
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.transcript.push(text.to_string());
        match self.answers.pop_front() {
            Some(answer) => {
                self.transcript.push(format!("> {answer}"));
                Ok(Some(answer))
            }
            None => Ok(None),
        }
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        self.transcript.push(text.to_string());
        Ok(())
    }
}
