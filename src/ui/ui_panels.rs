use {
    eframe::egui::{Align, Layout, RichText, Ui},
    egui_extras::{Column, TableBuilder},
};

use crate::{
    config::PLOT_CONFIG,
    engine::{ClassifiedRow, DashboardView},
    ui::{
        UI_CONFIG, UI_TEXT,
        styles::{LevelColor, get_change_color},
        utils::format_money,
    },
};

/// The top-N market table. Rows arrive pre-sorted by quote volume.
pub(crate) fn render_market_table(ui: &mut Ui, view: &DashboardView) {
    let layout = &UI_CONFIG.table;
    let row_height = layout.row_height;
    let [symbol_w, price_w, change_w, suggestion_w, prediction_w, volume_w] =
        layout.min_column_widths;
    let headers = [
        &UI_TEXT.col_symbol,
        &UI_TEXT.col_last_price,
        &UI_TEXT.col_change,
        &UI_TEXT.col_suggestion,
        &UI_TEXT.col_prediction,
        &UI_TEXT.col_volume,
    ];

    TableBuilder::new(ui)
        .id_salt("market_table")
        .striped(true)
        .resizable(false)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::auto().at_least(symbol_w))
        .column(Column::auto().at_least(price_w))
        .column(Column::auto().at_least(change_w))
        .column(Column::auto().at_least(suggestion_w))
        .column(Column::auto().at_least(prediction_w))
        .column(Column::remainder().at_least(volume_w))
        .header(row_height, |mut header| {
            for title in headers {
                header.col(|ui| {
                    ui.strong(title.as_str());
                });
            }
        })
        .body(|mut body| {
            for row in &view.rows {
                body.row(row_height, |mut table_row| {
                    render_row_cells(&mut table_row, row, view);
                });
            }
        });
}

fn render_row_cells(table_row: &mut egui_extras::TableRow<'_, '_>, row: &ClassifiedRow, view: &DashboardView) {
    table_row.col(|ui| {
        ui.label(RichText::new(row.symbol()).strong().color(PLOT_CONFIG.color_text_neutral));
    });
    table_row.col(|ui| {
        ui.label(format_money(view.currency, row.converted_price, 2));
    });
    table_row.col(|ui| {
        ui.label(RichText::new(&row.change_label).color(get_change_color(row.row.price_change_pct)));
    });
    table_row.col(|ui| {
        ui.label(RichText::new(row.suggestion.to_string()).color(row.suggestion.color()));
    });
    table_row.col(|ui| {
        ui.label(RichText::new(row.prediction.to_string()).color(row.prediction.color()));
    });
    table_row.col(|ui| {
        ui.label(format_money(view.currency, row.converted_volume, 0));
    });
}
