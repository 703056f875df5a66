use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::theme::{ACCENT, BODY_TEXT, LINK_BG};

pub(super) fn view() -> Vec<Line<'static>> {
    vec![
        Line::styled("This is Home Page", Style::default().fg(BODY_TEXT)),
        Line::from(""),
        link('a', "About Page"),
        Line::from(""),
        link('u', "Authentication Page"),
    ]
}

fn link(key: char, label: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {key} "), Style::default().fg(ACCENT)),
        Span::styled(
            format!(" {label} "),
            Style::default()
                .fg(BODY_TEXT)
                .bg(LINK_BG)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}
