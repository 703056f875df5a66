//! Executes [`UiCommand`]s on the tokio runtime.
//!
//! Every command runs in its own task, so a slow fetch never holds up page
//! resolution. Nothing is cancelled: results land in the store even if the
//! page that asked for them is gone.

use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::PostSource;
use crate::config::HomeConfig;
use crate::preload::{preload_images, ImageLoader, PreloadReport};
use crate::router::resolve_page;
use crate::store::loading::LoadingIntent;
use crate::store::{fetch_posts, Store};
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

pub struct CommandWorker {
    store: Store,
    source: Arc<dyn PostSource>,
    loader: Arc<dyn ImageLoader>,
    home: HomeConfig,
    page_load_delay: Duration,
    events: std_mpsc::Sender<AppEvent>,
}

impl CommandWorker {
    pub fn new(
        store: Store,
        source: Arc<dyn PostSource>,
        loader: Arc<dyn ImageLoader>,
        home: HomeConfig,
        page_load_delay: Duration,
        events: std_mpsc::Sender<AppEvent>,
    ) -> Self {
        Self {
            store,
            source,
            loader,
            home,
            page_load_delay,
            events,
        }
    }

    pub fn spawn(self, handle: &Handle, mut commands: mpsc::Receiver<UiCommand>) -> JoinHandle<()> {
        let worker = Arc::new(self);
        handle.spawn(async move {
            while let Some(command) = commands.recv().await {
                let worker = Arc::clone(&worker);
                tokio::spawn(async move { worker.execute(command).await });
            }
            tracing::debug!("command channel closed");
        })
    }

    pub async fn execute(&self, command: UiCommand) {
        tracing::debug!(?command, "executing ui command");
        match command {
            UiCommand::ResolvePage { page } => {
                let page = resolve_page(page, self.page_load_delay).await;
                let _ = self.events.send(AppEvent::PageResolved(page));
            }
            UiCommand::FetchPosts => {
                fetch_posts(&self.store, self.source.as_ref()).await;
            }
            UiCommand::PreloadImages => {
                home_splash(
                    &self.store,
                    Arc::clone(&self.loader),
                    &self.home.images,
                    self.home.splash_timeout(),
                )
                .await;
            }
        }
    }
}

/// Home page splash: raise the loading flag, race the image preloader against
/// `timeout`, then lower the flag. Returns the preload report if the images
/// settled first.
pub async fn home_splash(
    store: &Store,
    loader: Arc<dyn ImageLoader>,
    images: &[String],
    timeout: Duration,
) -> Option<PreloadReport> {
    store.dispatch(LoadingIntent::Start);

    let report = tokio::select! {
        report = preload_images(loader, images) => {
            tracing::debug!(settled = report.settled(), "splash images settled first");
            Some(report)
        }
        _ = tokio::time::sleep(timeout) => {
            tracing::debug!(?timeout, "splash timer won the race");
            None
        }
    };

    store.dispatch(LoadingIntent::Stop);
    report
}

/// Forwards store changes to the UI loop until either side goes away.
pub fn forward_store_changes(
    handle: &Handle,
    store: &Store,
    events: std_mpsc::Sender<AppEvent>,
) -> JoinHandle<()> {
    let mut changes = store.subscribe();
    handle.spawn(async move {
        while changes.changed().await.is_ok() {
            if events.send(AppEvent::StoreChanged).is_err() {
                break;
            }
        }
    })
}
