use {
    eframe::egui::{CentralPanel, ComboBox, Context, RichText, ScrollArea, SidePanel, TopBottomPanel, Ui},
    strum::IntoEnumIterator,
};

use crate::{
    App,
    config::{DASHBOARD, FX, PLOT_CONFIG},
    domain::Currency,
    engine::{BannerKind, DashboardView, NoticeLevel},
    ui::{
        Panel, UI_CONFIG, UI_TEXT,
        styles::UiStyleExt,
        ui_panels::render_market_table,
        ui_plot_view::render_price_charts,
    },
    utils::{format_clock, format_duration},
};

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.panel_frame(Panel::Header);

        TopBottomPanel::top("top_header")
            .frame(frame)
            .min_height(30.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading(
                    RichText::new(&UI_TEXT.app_title)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.label_subdued(UI_TEXT.header_caption.as_str());
            });
    }

    /// Operator settings. Any change asks for an immediate refresh.
    pub(crate) fn render_side_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.panel_frame(Panel::Settings);

        SidePanel::left("settings_panel")
            .min_width(UI_CONFIG.side_panel_width)
            .resizable(false)
            .frame(frame)
            .show(ctx, |ui| {
                ui.label_subheader(UI_TEXT.sp_settings_heading.as_str());
                ui.add_space(6.0);

                let mut changed = ui
                    .checkbox(&mut self.show_market_tip, UI_TEXT.sp_show_market_tip.as_str())
                    .changed();
                changed |= ui
                    .checkbox(&mut self.show_drop_alert, UI_TEXT.sp_show_drop_alert.as_str())
                    .changed();

                ui.add_space(10.0);
                if self.conversion_enabled {
                    changed |= self.currency_selector(ui);
                    ui.label_subdued(UI_TEXT.sp_rates_caption.as_str());
                } else {
                    ui.label_subdued(format!("{} {}", UI_TEXT.sp_base_only, FX.base));
                }

                if changed {
                    self.refresh_requested = true;
                }
            });
    }

    fn currency_selector(&mut self, ui: &mut Ui) -> bool {
        let before = self.currency;
        ui.label(UI_TEXT.sp_currency.as_str());
        ComboBox::from_id_salt("currency_selector")
            .selected_text(format!("{} ({})", self.currency, self.currency.symbol()))
            .show_ui(ui, |ui| {
                for currency in Currency::iter() {
                    ui.selectable_value(
                        &mut self.currency,
                        currency,
                        format!("{} ({})", currency, currency.symbol()),
                    );
                }
            });
        self.currency != before
    }

    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.panel_frame(Panel::Status);

        TopBottomPanel::bottom("status_panel")
            .frame(frame)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let Some(engine) = &self.engine else {
                        return;
                    };

                    match engine.view() {
                        Some(view) => ui.metric(
                            &UI_TEXT.st_last_refresh,
                            &format_clock(&view.refreshed_at),
                            PLOT_CONFIG.color_text_primary,
                        ),
                        None => ui.label_subdued(UI_TEXT.st_never_refreshed.as_str()),
                    }
                    ui.separator();

                    if engine.is_cycle_in_flight() {
                        ui.spinner();
                        ui.label_subdued(UI_TEXT.st_refreshing.as_str());
                    } else {
                        let remaining = self
                            .last_cycle_started
                            .map(|t| DASHBOARD.refresh_interval.saturating_sub(t.elapsed()))
                            .unwrap_or_default();
                        ui.metric(
                            &UI_TEXT.st_idle,
                            &format_duration(remaining.as_millis() as i64),
                            PLOT_CONFIG.color_text_primary,
                        );
                    }

                    if let Some(view) = engine.view() {
                        ui.separator();
                        let rate = &view.rate;
                        let color = match rate.warning {
                            Some(_) => PLOT_CONFIG.color_warning,
                            None => PLOT_CONFIG.color_text_primary,
                        };
                        ui.metric(
                            &UI_TEXT.st_rate,
                            &format!("{} {:.4} ({:?})", rate.currency, rate.rate, rate.source),
                            color,
                        );
                    }
                });
            });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.panel_frame(Panel::Dashboard);

        CentralPanel::default().frame(frame).show(ctx, |ui| {
            let Some(view) = self.engine.as_ref().and_then(|e| e.view()) else {
                ui.callout(NoticeLevel::Info, None, &UI_TEXT.cp_waiting_for_data);
                return;
            };
            ScrollArea::vertical()
                .id_salt("dashboard_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| render_dashboard(ui, view));
        });
    }
}

fn render_dashboard(ui: &mut Ui, view: &DashboardView) {
    for notice in &view.notices {
        ui.callout(notice.level, None, &notice.message);
    }

    if view.is_waiting() {
        ui.callout(NoticeLevel::Info, None, &UI_TEXT.cp_waiting_for_data);
        return;
    }

    for banner in view.banners() {
        let title = match banner.kind {
            BannerKind::MarketTip => UI_TEXT.cp_market_tip.as_str(),
            BannerKind::DropAlert => UI_TEXT.cp_drop_alert.as_str(),
        };
        ui.callout(banner.level(), Some(title), &banner.message());
    }

    ui.add_space(UI_CONFIG.section_gap);
    ui.label_subheader(format!("{} ({})", UI_TEXT.cp_table_heading, view.currency.code()));
    render_market_table(ui, view);

    ui.add_space(UI_CONFIG.section_gap);
    ui.separator();
    ui.label_subheader(UI_TEXT.cp_charts_heading.as_str());
    ui.add_space(UI_CONFIG.section_gap / 2.0);
    render_price_charts(ui, &view.charts, view.currency);
}
