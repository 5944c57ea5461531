//! Markdown output to the terminal.
//!
//! Rich mode styles the markdown with termimad; plain mode prints it as is,
//! which keeps output stable for pipes and tests.

use termimad::{crossterm::style::Color, MadSkin};
use wayfarer_core::OperationStatus;

/// Prints markdown either styled or verbatim.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Print a block of markdown.
    pub fn render(&self, markdown: &str) {
        if !self.rich_enabled {
            print!("{markdown}");
            return;
        }
        // Headers keep their hashes so list nesting stays visible.
        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[36m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
    }

    /// Print an error line to stderr.
    pub fn render_error(&self, message: &str) {
        eprint!("{}", self.error_line(message));
    }

    fn error_line(&self, message: &str) -> String {
        let line = OperationStatus::failure(message).to_string();
        if self.rich_enabled {
            line.replacen("Error:", "\x1b[31mError:\x1b[0m", 1)
        } else {
            line
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
