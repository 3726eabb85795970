pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod launcher;
pub mod logging;
pub mod scroll_lock;
pub mod site;
pub mod ui;
