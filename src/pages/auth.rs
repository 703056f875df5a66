use ratatui::style::{Modifier, Style};
use ratatui::text::Line;

use crate::ui::theme::BODY_TEXT;

pub(super) fn view() -> Vec<Line<'static>> {
    vec![
        Line::styled(
            "Authentication Page",
            Style::default().fg(BODY_TEXT).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("Only visible while the auth guard lets you through."),
    ]
}
