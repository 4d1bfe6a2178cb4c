//! Shared application state.

use crate::config::ServerConfig;
use std::sync::atomic::{AtomicU64, Ordering};

/// State shared by every route handler.
#[derive(Debug)]
pub struct AppState {
    /// Effective server configuration.
    pub config: ServerConfig,
    /// Monotonic counter for render output names.
    render_seq: AtomicU64,
}

impl AppState {
    /// Creates state around a resolved configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            render_seq: AtomicU64::new(0),
        }
    }

    /// Hands out the next render sequence number.
    ///
    /// Unique within the process, so concurrent solve calls never write
    /// the same output file.
    pub fn next_render_seq(&self) -> u64 {
        self.render_seq.fetch_add(1, Ordering::Relaxed)
    }
}
