//! Terminal rendering of markdown views and notices
//!
//! Rich mode renders through termimad with colored headers; plain mode prints
//! the markdown as is, which is what tests and pipes see.

use anyhow::Result;
use stride_core::display::{Notice, NoticeKind};
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_fg(Color::Cyan);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                // Keep the hashes visible so step headings stand out
                println!("\x1b[34m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }

    /// Print a one-line notice, colored by kind in rich mode
    pub fn notice(&self, notice: &Notice) -> Result<()> {
        if !self.rich_enabled {
            print!("{notice}");
            return Ok(());
        }

        let color = match notice.kind {
            NoticeKind::Success => "32",
            NoticeKind::Info => "36",
            NoticeKind::Error => "31",
        };
        print!("\x1b[{color}m{notice}\x1b[0m");
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.notice(&Notice::info("plain")).is_ok());
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().rich_enabled);
    }
}
