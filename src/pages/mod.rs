//! The three pages of the shell and what they do when mounted.

mod about;
mod auth;
mod home;

use ratatui::text::Line;

use crate::store::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    About,
    Auth,
}

/// Side effect a page starts right after it mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountEffect {
    None,
    FetchPosts,
    PreloadImages,
}

impl PageId {
    pub const ALL: [PageId; 3] = [PageId::Home, PageId::About, PageId::Auth];

    pub fn name(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::About => "about",
            PageId::Auth => "auth",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::About => "About",
            PageId::Auth => "Authentication",
        }
    }

    pub fn on_mount(self) -> MountEffect {
        match self {
            PageId::Home => MountEffect::PreloadImages,
            PageId::About => MountEffect::FetchPosts,
            PageId::Auth => MountEffect::None,
        }
    }

    pub fn view(self, state: &AppState) -> Vec<Line<'static>> {
        match self {
            PageId::Home => home::view(),
            PageId::About => about::view(&state.posts),
            PageId::Auth => auth::view(),
        }
    }
}

/// Plain text of rendered lines, one line per row.
pub fn plain_text(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
