//! Chart and semantic color configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub price_line_color: Color32,
    pub price_line_width: f32,
    /// Radius of the per-sample markers drawn on top of the line
    pub marker_radius: f32,

    // --- SEMANTIC COLORS ---
    pub color_up: Color32,
    pub color_down: Color32,
    pub color_success: Color32,
    pub color_info: Color32,
    pub color_warning: Color32,
    pub color_error: Color32,

    pub color_text_neutral: Color32,
    pub color_text_primary: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    price_line_color: Color32::from_rgb(100, 200, 255),
    price_line_width: 1.5,
    marker_radius: 2.5,

    color_up: Color32::from_rgb(0, 200, 120),
    color_down: Color32::from_rgb(230, 80, 80),
    color_success: Color32::from_rgb(80, 220, 100),
    color_info: Color32::from_rgb(100, 170, 255),
    color_warning: Color32::from_rgb(255, 190, 60),
    color_error: Color32::from_rgb(255, 90, 90),

    color_text_neutral: Color32::WHITE,
    color_text_primary: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,
};
