pub(super) mod phase_view;
pub(super) mod bootstrap;
pub(super) mod running;

pub(crate) use phase_view::PhaseView;
