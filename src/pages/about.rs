use ratatui::style::{Modifier, Style};
use ratatui::text::Line;

use crate::store::posts::PostsState;
use crate::ui::theme::{BODY_TEXT, HEADING, STATUS_ERROR};

/// Loading wins over error, error wins over data.
pub(super) fn view(posts: &PostsState) -> Vec<Line<'static>> {
    if posts.loading {
        return vec![Line::from("Loading...")];
    }
    if let Some(error) = posts.error_message() {
        return vec![Line::styled(
            format!("Error: {error}"),
            Style::default().fg(STATUS_ERROR),
        )];
    }

    let mut lines = vec![
        Line::styled(
            "About Page",
            Style::default().fg(HEADING).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    for post in &posts.data {
        lines.push(Line::styled(
            post.title.clone(),
            Style::default().fg(BODY_TEXT).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::styled(post.body.clone(), Style::default().fg(BODY_TEXT)));
        lines.push(Line::from(""));
    }
    lines
}
