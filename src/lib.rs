// src/lib.rs

pub mod app;
pub mod chat;
pub mod config;
pub mod constants;
pub mod contact;
pub mod errors;
pub mod key_handlers;
pub mod log_view;
pub mod logging;
pub mod responder;
pub mod session;
pub mod status_indicator;
pub mod ui;

pub use app::{App, AppScreen};
