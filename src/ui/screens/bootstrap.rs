use {
    crate::{
        app::BootstrapState,
        config::{BINANCE, PLOT_CONFIG},
        ui::UI_TEXT,
        utils::format_duration,
    },
    eframe::egui::{CentralPanel, Context, RichText},
};

pub(crate) fn render_bootstrap(ctx: &Context, state: &BootstrapState) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(
                RichText::new(&UI_TEXT.bs_title)
                    .size(24.0)
                    .strong()
                    .color(PLOT_CONFIG.color_warning),
            );
            ui.add_space(20.0);

            if let Some(err) = &state.engine_error {
                ui.label(
                    RichText::new(format!("{}: {}", UI_TEXT.bs_engine_failed, err))
                        .color(PLOT_CONFIG.color_error),
                );
                return;
            }

            ui.spinner();
            ui.add_space(12.0);
            ui.label(
                RichText::new(&UI_TEXT.bs_connecting)
                    .italics()
                    .color(PLOT_CONFIG.color_text_neutral),
            );
            ui.label(
                RichText::new(format!(
                    "{} ({})",
                    BINANCE.ticker_24hr.url,
                    format_duration(state.started.elapsed().as_millis() as i64)
                ))
                .small()
                .color(PLOT_CONFIG.color_text_subdued),
            );
        });
    });
}
