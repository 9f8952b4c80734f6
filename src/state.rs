use crate::store::StudentStore;

/// Shared application state, cloned into each handler.
#[derive(Clone)]
pub struct AppState {
    pub store: StudentStore,
}
