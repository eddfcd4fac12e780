//! Shared application state for all routes.

use crate::store::ArticleStore;

#[derive(Clone)]
pub struct AppState {
    /// Constructed once at startup, cloned into each handler.
    pub store: ArticleStore,
}
