use eframe::egui::Context;

use crate::app::{App, phases::PhaseView, state::{AppState, BootstrapState}};

// Stays here until the engine delivers its first view (or forever if it failed to start).
impl PhaseView for BootstrapState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_bootstrap_state(ctx, self)
    }
}
