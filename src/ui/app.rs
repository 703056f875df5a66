use crate::pages::{MountEffect, PageId};
use crate::router::{Location, PageModules, Resolution, Router, ScrollReset, Suspense};
use crate::store::Store;
use crate::ui::render::SPINNER_FRAME_COUNT;
use ratatui::text::Line;
use tokio::sync::mpsc;

/// Work the UI hands off to the async side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// Resolve an on-demand page module; answered with `AppEvent::PageResolved`.
    ResolvePage { page: PageId },
    FetchPosts,
    /// Home splash: start loading, race preload against a timer, stop loading.
    PreloadImages,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// The navigation shell.
///
/// Owns the router, the scroll reset wrapper and the suspense boundary, and
/// reads everything else from the injected [`Store`].
pub struct App {
    should_quit: bool,
    store: Store,
    router: Router,
    scroll: ScrollReset,
    modules: PageModules,
    suspense: Suspense,
    spinner_tick: usize,
    command_sender: Option<UiCommandSender>,
    last_command_error: Option<String>,
}

impl App {
    pub fn new(store: Store, router: Router, modules: PageModules) -> Self {
        Self {
            should_quit: false,
            store,
            router,
            scroll: ScrollReset::new(),
            modules,
            suspense: Suspense::Empty,
            spinner_tick: 0,
            command_sender: None,
            last_command_error: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn location(&self) -> &Location {
        self.router.current()
    }

    pub fn suspense(&self) -> Suspense {
        self.suspense
    }

    pub fn current_page(&self) -> Option<PageId> {
        match self.suspense {
            Suspense::Ready(page) => Some(page),
            _ => None,
        }
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll.offset()
    }

    pub fn spinner_tick(&self) -> usize {
        self.spinner_tick
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    /// Lines of the mounted page, empty while suspended or unmatched.
    pub fn page_lines(&self) -> Vec<Line<'static>> {
        match self.suspense {
            Suspense::Ready(page) => page.view(&self.store.snapshot()),
            Suspense::Pending(_) | Suspense::Empty => Vec::new(),
        }
    }

    pub fn navigate(&mut self, path: &str) {
        let before = self.router.current().clone();
        let resolution = self.router.navigate(path);
        if resolution.location() == &before && self.shows(resolution.page()) {
            return;
        }
        self.apply(resolution);
    }

    pub fn back(&mut self) {
        if let Some(resolution) = self.router.back() {
            self.apply(resolution);
        }
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.scroll.scroll_by(delta);
    }

    pub fn on_tick(&mut self) {
        if self.suspense.is_pending() || self.store.is_loading() {
            self.spinner_tick = (self.spinner_tick + 1) % SPINNER_FRAME_COUNT;
        }
    }

    /// A page module finished resolving. Mounts it if it is still the one
    /// being waited for; a stale resolution only marks the module as loaded.
    pub fn on_page_resolved(&mut self, page: PageId) {
        self.modules.mark_resolved(page);
        if self.suspense == Suspense::Pending(page) {
            self.mount(page);
        }
    }

    fn shows(&self, page: Option<PageId>) -> bool {
        match (self.suspense, page) {
            (Suspense::Ready(current) | Suspense::Pending(current), Some(page)) => current == page,
            (Suspense::Empty, None) => true,
            _ => false,
        }
    }

    fn apply(&mut self, resolution: Resolution) {
        self.scroll.observe(resolution.location());

        match resolution.page() {
            None => self.suspense = Suspense::Empty,
            Some(page) if self.modules.is_resolved(page) => self.mount(page),
            Some(page) => {
                self.suspense = Suspense::Pending(page);
                if !self.send_command(UiCommand::ResolvePage { page }) {
                    // No worker will answer; mount in place.
                    self.modules.mark_resolved(page);
                    self.mount(page);
                }
            }
        }
    }

    fn mount(&mut self, page: PageId) {
        self.suspense = Suspense::Ready(page);
        tracing::debug!(page = page.name(), "page mounted");
        match page.on_mount() {
            MountEffect::None => {}
            MountEffect::FetchPosts => {
                self.send_command(UiCommand::FetchPosts);
            }
            MountEffect::PreloadImages => {
                self.send_command(UiCommand::PreloadImages);
            }
        }
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "dropping ui command");
                self.last_command_error = Some(format!("Command send failed: {}", err));
                false
            }
        }
    }
}
