//! Rollcall — a small student management web app.
//!
//! Server-rendered CRUD over a single `students` table: an axum router
//! maps five endpoints onto a sqlx-backed [`StudentStore`], and a plain
//! HTML view renders the listing plus an add/edit form.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;
pub mod student;
pub mod view;

pub use config::AppConfig;
pub use error::AppError;
pub use state::AppState;
pub use store::{StoreError, StudentStore};
pub use student::{Student, StudentSubmission};

use tracing_subscriber::EnvFilter;

/// Initialise the global `tracing` subscriber.
///
/// Honors `RUST_LOG`; defaults to `info` with `tower_http` at `debug`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".parse().unwrap()),
        )
        .init();
}
