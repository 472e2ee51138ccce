//! Yes/no prompts on the terminal.

use std::io::{self, BufRead, IsTerminal, Write};

use colored::Colorize;

use crate::catalog::{ConfirmOverwrite, Entry, Language};

/// True when both stdin and stderr are attached to a terminal.
pub fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stderr().is_terminal()
}

/// Asks questions on `output` and reads answers from `input`.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<io::StdinLock<'static>, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask a yes/no question. Anything but `y`/`yes` (including EOF) is no.
    pub fn confirm(&mut self, question: &str) -> bool {
        let _ = write!(self.output, "{} {} ", question, "[y/N]".dimmed());
        let _ = self.output.flush();

        let mut answer = String::new();
        if self.input.read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

impl<R: BufRead, W: Write> ConfirmOverwrite for Prompt<R, W> {
    fn confirm_overwrite(
        &mut self,
        language: &Language,
        path: &str,
        current: &Entry,
        incoming: &str,
    ) -> bool {
        let _ = writeln!(
            self.output,
            "{} {} already exists in {}",
            "warning:".bold().yellow(),
            path.bold(),
            language.code
        );
        let _ = writeln!(self.output, "  current: {}", current);
        let _ = writeln!(self.output, "  new:     {}", incoming);
        self.confirm("Overwrite?")
    }
}
