use std::sync::Arc;

use anyhow::Context;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::api::HttpPostSource;
use crate::config::Config;
use crate::preload::AssetLoader;
use crate::router::{shell_router, ConstantAuth, Location, PageModules};
use crate::shutdown::{listen_for_signals, ShutdownHandle};
use crate::store::Store;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::{forward_store_changes, CommandWorker};

const COMMAND_CHANNEL_SIZE: usize = 32;

/// Runs the terminal UI until the user quits or a shutdown signal arrives.
pub fn run(config: Config, start_path: &str, handle: &Handle) -> anyhow::Result<()> {
    let store = Store::default();
    let source = HttpPostSource::new(&config.posts).context("Failed to build posts client")?;
    let loader = AssetLoader::new(config.home.assets_dir.clone());

    let shutdown = ShutdownHandle::new();
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate, shutdown.clone());
    listen_for_signals(handle, shutdown.clone(), events.sender());

    let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_SIZE);
    let worker = CommandWorker::new(
        store.clone(),
        Arc::new(source),
        Arc::new(loader),
        config.home.clone(),
        config.ui.page_load_delay(),
        events.sender(),
    );
    let worker_task = worker.spawn(handle, command_rx);
    let forward_task = forward_store_changes(handle, &store, events.sender());

    let router = shell_router(
        Arc::new(ConstantAuth(config.auth.authenticated)),
        Location::parse(&config.auth.fallback),
    );
    let mut app = App::new(store, router, PageModules::new());
    app.set_command_sender(command_tx);

    let (mut terminal, guard) = setup_terminal()?;
    app.navigate(start_path);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::PageResolved(page)) => app.on_page_resolved(page),
            Ok(AppEvent::StoreChanged) => {}
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    worker_task.abort();
    forward_task.abort();
    drop(guard);
    tracing::info!("ui stopped");
    Ok(())
}
