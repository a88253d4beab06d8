use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// The console as seen by a running program. `output` emits exactly the
/// given text with no implicit newline; `input` blocks for one line and
/// yields it without its terminator.
pub trait Host {
    fn output(&mut self, text: &str) -> io::Result<()>;
    fn input(&mut self) -> io::Result<String>;
}

/// Real stdin/stdout. Output is flushed eagerly so that prompts without a
/// trailing newline appear before a blocking read.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleHost;

impl Host for ConsoleHost {
    fn output(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }

    fn input(&mut self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

/// Scripted console for tests: canned input lines, captured output.
#[derive(Debug, Default)]
pub struct ScriptedHost {
    inputs: VecDeque<String>,
    pub output: String,
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inputs<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }
}

impl Host for ScriptedHost {
    fn output(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn input(&mut self) -> io::Result<String> {
        self.inputs
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted input left"))
    }
}
