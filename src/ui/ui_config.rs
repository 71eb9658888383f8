use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

/// Colours shared by the panels and the global visuals.
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub dashboard: Color32,
    pub chrome: Color32,
}

/// The four panels the running screen is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Header,
    Settings,
    Status,
    Dashboard,
}

/// Widths of the six market table columns, in display order.
#[derive(Clone, Copy)]
pub struct TableLayout {
    pub row_height: f32,
    pub min_column_widths: [f32; 6],
}

/// Tinted box used for notices and banners.
#[derive(Clone, Copy)]
pub struct CalloutStyle {
    pub fill_alpha: f32,
    pub stroke_width: f32,
    pub corner_radius: u8,
    pub margin: Margin,
    pub gap_after: f32,
}

#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_width: f32,
    pub table: TableLayout,
    pub callout: CalloutStyle,
    /// Vertical gap between dashboard sections (banners, table, charts).
    pub section_gap: f32,
}

pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        subsection_heading: Color32::ORANGE,
        dashboard: Color32::from_rgb(22, 24, 30),
        chrome: Color32::from_rgb(25, 25, 25),
    },
    side_panel_width: 200.0,
    table: TableLayout {
        row_height: 22.0,
        min_column_widths: [110.0, 120.0, 100.0, 120.0, 100.0, 140.0],
    },
    callout: CalloutStyle {
        fill_alpha: 0.12,
        stroke_width: 1.0,
        corner_radius: 4,
        margin: Margin::symmetric(10, 6),
        gap_after: 4.0,
    },
    section_gap: 10.0,
};

impl UiConfig {
    pub fn panel_frame(&self, panel: Panel) -> Frame {
        let (fill, inner_margin) = match panel {
            Panel::Header | Panel::Settings => (self.colors.chrome, Margin::same(8)),
            // Status bar is a single line; keep it thin.
            Panel::Status => (self.colors.chrome, Margin::symmetric(8, 4)),
            Panel::Dashboard => (self.colors.dashboard, Margin::same(12)),
        };
        Frame {
            fill,
            stroke: Stroke::NONE,
            inner_margin,
            ..Default::default()
        }
    }

    pub fn callout_frame(&self, color: Color32) -> Frame {
        let style = &self.callout;
        Frame::new()
            .fill(color.linear_multiply(style.fill_alpha))
            .stroke(Stroke::new(style.stroke_width, color))
            .corner_radius(CornerRadius::same(style.corner_radius))
            .inner_margin(style.margin)
    }
}
