//! Client-side interaction layer for the Network social app.
//!
//! Four independent flows (compose, like, edit, follow) each disable their
//! control, send a single request to the server's JSON endpoints and reconcile
//! the page with the server-confirmed result.

pub mod config;
pub mod error;
pub mod models;
pub mod page;
pub mod services;
pub mod state;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
pub use state::AppState;
