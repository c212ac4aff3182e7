//! Inkslate Application
//!
//! The application shell: configuration, the platform-independent `App`
//! and, in the browser, the DOM wiring that feeds it.

mod app;

pub use app::{App, AppConfig, AppError};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
