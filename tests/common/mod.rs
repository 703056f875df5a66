//! Shared test utilities and stubs.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use postdeck::api::{FetchError, Post, PostSource};
use postdeck::preload::{ImageInfo, ImageLoader, PreloadError};
use postdeck::router::{shell_router, ConstantAuth, Location, PageModules};
use postdeck::store::Store;
use postdeck::ui::app::{App, UiCommand};
use postdeck::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

pub fn post(id: i64, title: &str, body: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        body: body.to_string(),
        user_id: None,
    }
}

/// Builds an app with eagerly resolved pages and a command channel.
pub fn make_app(authenticated: bool) -> (App, mpsc::Receiver<UiCommand>) {
    make_app_with(authenticated, PageModules::eager())
}

pub fn make_app_with(
    authenticated: bool,
    modules: PageModules,
) -> (App, mpsc::Receiver<UiCommand>) {
    let router = shell_router(Arc::new(ConstantAuth(authenticated)), Location::root());
    let mut app = App::new(Store::default(), router, modules);
    let (tx, rx) = mpsc::channel(32);
    app.set_command_sender(tx);
    (app, rx)
}

pub fn drain(rx: &mut mpsc::Receiver<UiCommand>) -> Vec<UiCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}

/// Draws the app into an in-memory terminal and returns its text, row by row.
pub fn render_text(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

/// Post source with a canned answer.
pub struct StaticSource {
    posts: Option<Vec<Post>>,
    status: u16,
    calls: AtomicUsize,
}

impl StaticSource {
    pub fn ok(posts: Vec<Post>) -> Self {
        Self {
            posts: Some(posts),
            status: 200,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            posts: None,
            status,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostSource for StaticSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.posts {
            Some(posts) => Ok(posts.clone()),
            None => Err(FetchError::Status {
                status: self.status,
            }),
        }
    }
}

/// Image loader that fails for chosen locators and can stall forever.
pub struct StubLoader {
    failing: HashSet<String>,
    delay: Duration,
    stall: bool,
    started: AtomicUsize,
    finished: Mutex<Vec<String>>,
}

impl StubLoader {
    pub fn new(failing: &[&str]) -> Self {
        Self {
            failing: failing.iter().map(|s| s.to_string()).collect(),
            delay: Duration::ZERO,
            stall: false,
            started: AtomicUsize::new(0),
            finished: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn stalling() -> Self {
        let mut loader = Self::new(&[]);
        loader.stall = true;
        loader
    }

    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn finished(&self) -> Vec<String> {
        self.finished.lock().clone()
    }
}

#[async_trait]
impl ImageLoader for StubLoader {
    async fn load(&self, locator: &str) -> Result<ImageInfo, PreloadError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        if self.stall {
            std::future::pending::<()>().await;
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.finished.lock().push(locator.to_string());
        if self.failing.contains(locator) {
            return Err(PreloadError::Status {
                url: locator.to_string(),
                status: 404,
            });
        }
        Ok(ImageInfo {
            width: 1,
            height: 1,
        })
    }
}
