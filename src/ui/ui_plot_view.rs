use {
    eframe::egui::{RichText, Ui},
    egui_plot::{Line, Plot, PlotPoints, Points},
};

use crate::{
    config::{DASHBOARD, PLOT_CONFIG},
    domain::Currency,
    engine::PriceChart,
    ui::{UI_TEXT, styles::UiStyleExt, utils::format_money},
};

/// Rolling price charts, `DASHBOARD.chart_columns` per row.
pub(crate) fn render_price_charts(ui: &mut Ui, charts: &[PriceChart], currency: Currency) {
    for chunk in charts.chunks(DASHBOARD.chart_columns) {
        ui.columns(DASHBOARD.chart_columns, |cols| {
            for (col, chart) in cols.iter_mut().zip(chunk) {
                render_price_chart(col, chart, currency);
            }
        });
        ui.add_space(8.0);
    }
}

fn render_price_chart(ui: &mut Ui, chart: &PriceChart, currency: Currency) {
    ui.label_subheader(format!(
        "{} {} ({})",
        chart.symbol,
        UI_TEXT.chart_title_suffix,
        currency.code()
    ));

    let points = chart.points();
    let line = Line::new(chart.symbol.as_str(), PlotPoints::new(points.clone()))
        .color(PLOT_CONFIG.price_line_color)
        .width(PLOT_CONFIG.price_line_width);
    let markers = Points::new(chart.symbol.as_str(), PlotPoints::new(points))
        .color(PLOT_CONFIG.price_line_color)
        .radius(PLOT_CONFIG.marker_radius);

    Plot::new(format!("price_chart_{}", chart.symbol))
        .height(DASHBOARD.chart_height)
        .x_axis_label(UI_TEXT.chart_x_axis.as_str())
        .y_axis_label(format!("{} ({})", UI_TEXT.chart_y_axis, currency.symbol()))
        .allow_scroll(false)
        .allow_drag(false)
        .allow_zoom(false)
        .label_formatter(move |_name, value| {
            format!("#{:.0}\n{}", value.x, format_money(currency, value.y, 2))
        })
        .show(ui, |plot_ui| {
            plot_ui.line(line);
            plot_ui.points(markers);
        });

    if let Some(last) = chart.prices.last() {
        ui.label(RichText::new(format_money(currency, *last, 2)).small());
    }
}
