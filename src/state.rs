//! Shared application state.
//!
//! Contains the state that is shared across all request handlers: the
//! configuration, the session store, the navigator, and metrics. Passing it
//! explicitly keeps the guard's session dependency visible instead of hiding
//! it behind a process-wide singleton.

use std::sync::Arc;

use crate::config::ConfigV1;
use crate::metrics::Metrics;
use crate::navigation::Navigator;
use crate::session::SessionStore;

/// Application state shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<ConfigV1>,
    /// Single source of truth for the logged-in user.
    pub session: Arc<SessionStore>,
    /// Route resolution and guarded navigation.
    pub navigator: Arc<Navigator>,
    /// Navigation and session counters.
    pub metrics: Metrics,
}
