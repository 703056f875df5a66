use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const PAGE_SCROLL: i32 = 10;

/// Key hints shown in the footer, in display order.
pub const KEY_HINTS: [(&str, &str); 6] = [
    ("h", "Home"),
    ("a", "About"),
    ("u", "Auth"),
    ("Backspace", "Back"),
    ("↑/↓", "Scroll"),
    ("q", "Quit"),
];

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('h') => app.navigate("/"),
        KeyCode::Char('a') => app.navigate("/about"),
        KeyCode::Char('u') => app.navigate("/auth"),
        KeyCode::Backspace | KeyCode::Left => app.back(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
        KeyCode::PageUp => app.scroll_by(-PAGE_SCROLL),
        KeyCode::PageDown => app.scroll_by(PAGE_SCROLL),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{shell_router, ConstantAuth, Location, PageModules};
    use crate::store::Store;
    use crossterm::event::KeyEventState;
    use std::sync::Arc;

    fn make_app() -> App {
        let router = shell_router(Arc::new(ConstantAuth(false)), Location::root());
        App::new(Store::default(), router, PageModules::eager())
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn plain_c_does_nothing() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('c'), KeyModifiers::empty()));
        assert!(!app.should_quit());
    }

    #[test]
    fn letter_keys_navigate() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('a'), KeyModifiers::empty()));
        assert_eq!(app.location().as_str(), "/about");
        handle_key(&mut app, press(KeyCode::Backspace, KeyModifiers::empty()));
        assert_eq!(app.location().as_str(), "/");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        let mut key = press(KeyCode::Char('q'), KeyModifiers::empty());
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.should_quit());
    }
}
