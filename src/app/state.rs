// src/app/state.rs

use crate::utils::AppInstant;

#[derive(Clone)]
pub(crate) struct RunningState;

pub(crate) enum AppState {
    Bootstrapping(BootstrapState),
    Running(RunningState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Bootstrapping(BootstrapState::default())
    }
}

/// Before the first refresh cycle lands.
#[derive(Clone)]
pub(crate) struct BootstrapState {
    pub(crate) started: AppInstant,
    pub(crate) engine_error: Option<String>,
}

impl Default for BootstrapState {
    fn default() -> Self {
        Self {
            started: AppInstant::now(),
            engine_error: None,
        }
    }
}
