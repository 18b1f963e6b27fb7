//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! only carries immutable configuration: every generation builds its own
//! parse state, so nothing mutable is shared between requests.

use crate::config::ServerConfig;
use crate::flowchart::RenderOptions;

#[derive(Debug, Clone, Copy, Default)]
pub struct AppState {
    pub render: RenderOptions,
}

impl AppState {
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        Self { render: config.render }
    }
}
