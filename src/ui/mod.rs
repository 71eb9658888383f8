mod screens;
mod styles;
mod ui_config;
mod ui_panels;
mod ui_plot_view;
mod ui_render;
mod ui_text;
mod utils;

pub(crate) use screens::render_bootstrap;

pub(crate) use {
    ui_config::{Panel, UI_CONFIG},
    ui_text::UI_TEXT,
};

pub use utils::{format_grouped, format_money, setup_custom_visuals};
