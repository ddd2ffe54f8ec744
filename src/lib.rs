// src/lib.rs

pub mod api;
pub mod app;
pub mod chat_message;
pub mod chat_view;
pub mod config;
pub mod constants;
pub mod conversation;
pub mod errors;
pub mod key_handlers;
pub mod logging;
pub mod models;
pub mod scroll;
pub mod status_indicator;
pub mod ui;

pub use app::App;
pub use chat_view::{ChatView, ViewEvent};
