use crate::router::Suspense;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{ACCENT, OVERLAY_BG, SPINNER_TRACK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};
use ratatui::Frame;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const SPINNER_FRAME_COUNT: usize = SPINNER_FRAMES.len();

pub const SUSPENSE_FALLBACK: &str = "Loading page...";

pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAME_COUNT]
}

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let title = app.current_page().map(|page| page.title());
    frame.render_widget(Header::new().widget(app.location(), title), header);
    frame.render_widget(Clear, body);
    draw_body(frame, app, body);
    frame.render_widget(
        Footer::new().widget(footer, app.last_command_error()),
        footer,
    );

    // Independent of the suspense fallback; both can be active together.
    if app.is_loading() {
        draw_loading_overlay(frame, app, area);
    }
}

fn draw_body(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let block = Block::default()
        .borders(Borders::NONE)
        .padding(Padding::horizontal(2));

    match app.suspense() {
        Suspense::Empty => {}
        Suspense::Pending(_) => {
            let line = Line::from(vec![
                Span::styled(spinner_frame(app.spinner_tick()), Style::default().fg(ACCENT)),
                Span::raw(" "),
                Span::raw(SUSPENSE_FALLBACK),
            ]);
            let area = centered_rect_by_size(body, line.width() as u16, 1);
            frame.render_widget(Paragraph::new(line), area);
        }
        Suspense::Ready(_) => {
            let widget = Paragraph::new(app.page_lines())
                .block(block)
                .wrap(Wrap { trim: false })
                .scroll((app.scroll_offset(), 0));
            frame.render_widget(widget, body);
        }
    }
}

fn draw_loading_overlay(frame: &mut Frame<'_>, app: &App, area: Rect) {
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(OVERLAY_BG)),
        area,
    );

    let spinner = Paragraph::new(Line::from(Span::styled(
        spinner_frame(app.spinner_tick()),
        Style::default().fg(ACCENT).bg(OVERLAY_BG),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(SPINNER_TRACK).bg(OVERLAY_BG))
            .style(Style::default().bg(OVERLAY_BG)),
    );
    frame.render_widget(spinner, centered_rect_by_size(area, 5, 3));
}
