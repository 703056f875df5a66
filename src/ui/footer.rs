use crate::ui::input::KEY_HINTS;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bottom bar: key hints and version, or the last command failure.
pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, status: Option<&str>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let (left, left_style) = match status {
            Some(error) => (format!(" {error}"), Style::default().fg(STATUS_ERROR)),
            None => (hint_text(), text_style),
        };
        let version = format!("v{VERSION} ");

        // Hints use multi-byte arrows and separators.
        let used = left.chars().count() + version.chars().count();
        let padding = (area.width.saturating_sub(2) as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(left, left_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn hint_text() -> String {
    let hints: Vec<String> = KEY_HINTS
        .iter()
        .map(|(key, label)| format!("{key}: {label}"))
        .collect();
    format!(" {}", hints.join(" │ "))
}
