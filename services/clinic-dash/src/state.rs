// services/clinic-dash/src/state.rs
//
// Hospital CMS Dashboard - shared application handles
//

use cmskit::session::SessionStore;
use cmskit::{ApiConfig, ApiHandle};

use crate::browser::LocalStorage;

/// Ambient handles every page needs: the API client and the typed session
/// store over browser local storage.
#[derive(Clone)]
pub struct AppState {
    pub api: ApiHandle,
    pub session: SessionStore<LocalStorage>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            api: ApiHandle::new(ApiConfig::from_build_env()),
            session: SessionStore::new(LocalStorage),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to get/create app state.
pub fn use_app_state() -> AppState {
    AppState::new()
}
