use eframe::egui;
use shared::domain::DisplayMode;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(97, 175, 239);
const PANEL_ROUNDING: u8 = 8;

pub fn visuals_for(mode: DisplayMode) -> egui::Visuals {
    let mut visuals = match mode {
        DisplayMode::Dark => {
            let mut v = egui::Visuals::dark();
            v.override_text_color = Some(egui::Color32::from_rgb(171, 178, 191));
            v.window_fill = egui::Color32::from_rgb(40, 44, 52);
            v.panel_fill = egui::Color32::from_rgb(33, 37, 43);
            v.extreme_bg_color = egui::Color32::from_rgb(24, 26, 31);
            v.faint_bg_color = egui::Color32::from_rgb(52, 57, 66);
            v
        }
        DisplayMode::Light => egui::Visuals::light(),
    };

    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT;
    visuals.widgets.active.bg_fill = ACCENT;
    visuals.widgets.hovered.bg_fill = ACCENT.gamma_multiply(0.85);
    visuals.window_corner_radius = egui::CornerRadius::same(PANEL_ROUNDING);
    visuals.menu_corner_radius = egui::CornerRadius::same(PANEL_ROUNDING);
    visuals
}

/// Label for the control that switches to the other mode.
pub fn toggle_label(mode: DisplayMode) -> &'static str {
    match mode {
        DisplayMode::Dark => "\u{2600} Light",
        DisplayMode::Light => "\u{263e} Dark",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_renders_dark() {
        assert!(visuals_for(DisplayMode::default()).dark_mode);
        assert!(!visuals_for(DisplayMode::Light).dark_mode);
    }

    #[test]
    fn toggle_label_names_the_other_mode() {
        assert!(toggle_label(DisplayMode::Dark).ends_with("Light"));
        assert!(toggle_label(DisplayMode::Light).ends_with("Dark"));
    }
}
