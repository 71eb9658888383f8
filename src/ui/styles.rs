use {
    crate::{
        analysis::{Prediction, Suggestion},
        config::PLOT_CONFIG,
        engine::NoticeLevel,
        ui::UI_CONFIG,
    },
    eframe::egui::{Color32, RichText, Ui},
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

pub trait LevelColor {
    fn color(&self) -> Color32;
}

impl LevelColor for NoticeLevel {
    fn color(&self) -> Color32 {
        match self {
            Self::Success => PLOT_CONFIG.color_success,
            Self::Info => PLOT_CONFIG.color_info,
            Self::Warning => PLOT_CONFIG.color_warning,
            Self::Error => PLOT_CONFIG.color_error,
        }
    }
}

impl LevelColor for Suggestion {
    fn color(&self) -> Color32 {
        match self {
            Self::TrendingUp => PLOT_CONFIG.color_up,
            Self::AvoidFalling => PLOT_CONFIG.color_down,
            Self::Neutral => PLOT_CONFIG.color_text_subdued,
        }
    }
}

impl LevelColor for Prediction {
    fn color(&self) -> Color32 {
        match self {
            Self::LikelyUp => PLOT_CONFIG.color_up,
            Self::LikelyDown => PLOT_CONFIG.color_down,
            Self::Uncertain => PLOT_CONFIG.color_text_subdued,
        }
    }
}

pub fn get_change_color(value: f64) -> Color32 {
    if value > 0.0 {
        PLOT_CONFIG.color_up
    } else {
        PLOT_CONFIG.color_down
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn label_subheader(&mut self, text: impl Into<String>);
    /// Tinted full-width box with an optional bold title, used for notices and banners.
    fn callout(&mut self, level: NoticeLevel, title: Option<&str>, message: &str);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text));
    }

    fn callout(&mut self, level: NoticeLevel, title: Option<&str>, message: &str) {
        let color = level.color();
        UI_CONFIG.callout_frame(color).show(self, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                if let Some(title) = title {
                    ui.label(RichText::new(format!("{}:", title)).strong().color(color));
                }
                ui.label(RichText::new(message).color(PLOT_CONFIG.color_text_neutral));
            });
        });
        self.add_space(UI_CONFIG.callout.gap_after);
    }
}
