pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod pages;
pub mod preload;
pub mod router;
pub mod shutdown;
pub mod store;
pub mod ui;
