use std::sync::Arc;

use axum::extract::FromRef;

use crate::config::Config;
use crate::quiz::generator::QuestionGenerator;
use crate::store::attempts::AttemptStore;
use crate::store::profiles::ProfileStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub profiles: ProfileStore,
    /// Injected behind a trait so the in-memory list can later be swapped
    /// for a persistent store.
    pub attempts: Arc<dyn AttemptStore>,
    pub generator: QuestionGenerator,
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for ProfileStore {
    fn from_ref(state: &AppState) -> Self {
        state.profiles.clone()
    }
}

impl FromRef<AppState> for Arc<dyn AttemptStore> {
    fn from_ref(state: &AppState) -> Self {
        state.attempts.clone()
    }
}

impl FromRef<AppState> for QuestionGenerator {
    fn from_ref(state: &AppState) -> Self {
        state.generator.clone()
    }
}
