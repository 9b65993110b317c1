//! Terminal plumbing for the console
//!
//! Commands come from a [`CommandSource`] and the inventory table goes to an
//! [`OutputWriter`], so the console can run against scripted commands.

use std::io::{self, BufRead, Write};

/// Where console commands come from.
pub trait CommandSource {
    /// Show `prompt` and return the next command line, or `None` once the
    /// source has nothing left.
    fn next_command(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

pub trait OutputWriter {
    fn write(&mut self, text: &str);

    fn writeln(&mut self, text: &str) {
        self.write(text);
        self.write("\n");
    }
}

/// Reads commands from stdin and prints to stdout.
pub struct TerminalIO;

impl CommandSource for TerminalIO {
    fn next_command(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{} ", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

impl OutputWriter for TerminalIO {
    fn write(&mut self, text: &str) {
        print!("{}", text);
    }
}
