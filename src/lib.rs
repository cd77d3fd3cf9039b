pub mod cli;
pub mod config;
pub mod feed;
pub mod loader;
pub mod logging;
pub mod scope;
pub mod store;
pub mod ui;
