//! Printing session output to the terminal

use crate::session::{Message, Tone};
use console::{Style, Term};
use std::io;

/// Colored terminal output for a [`Session`](crate::session::Session)
///
/// Colors are only emitted when stdout is a terminal.
pub struct Console {
    term: Term,
}

impl Console {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    /// Print a line of output in the style belonging to its tone
    pub fn print(&self, message: &Message) -> io::Result<()> {
        let styled = style(message.tone).apply_to(&message.text);
        self.term.write_line(&styled.to_string())
    }

    pub fn print_all<'a, I>(&self, messages: I) -> io::Result<()>
    where
        I: IntoIterator<Item = &'a Message>,
    {
        messages
            .into_iter()
            .try_for_each(|message| self.print(message))
    }

    /// Ask for input, without ending the line
    pub fn prompt(&self, text: &str) -> io::Result<()> {
        self.term
            .write_str(&style(Tone::Info).apply_to(text).to_string())?;
        self.term.flush()
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

fn style(tone: Tone) -> Style {
    match tone {
        Tone::Info => Style::new().blue(),
        Tone::Success => Style::new().green(),
        Tone::Error => Style::new().red(),
        Tone::Plain => Style::new(),
    }
}
