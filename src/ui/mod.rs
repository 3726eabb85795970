pub mod app;
pub mod card;
pub mod command;
pub mod events;
pub mod footer;
pub mod layout;
pub mod listeners;
pub mod modal;
pub mod mvi;
pub mod navbar;
pub mod page;
pub mod picture;
pub mod render;
pub mod runtime;
pub mod sections;
pub mod terminal_guard;
pub mod theme;
pub mod toast;
