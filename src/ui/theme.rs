//! Theme and styling for the UI

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};

use crate::core::{settings, STATUS_RUNNING};

/// Application color palette
pub struct Theme;

impl Theme {
    // Primary colors - indigo accent
    pub const PRIMARY: Color32 = Color32::from_rgb(99, 102, 241); // Indigo-500
    pub const PRIMARY_DARK: Color32 = Color32::from_rgb(67, 56, 202); // Indigo-700

    // Status colors
    pub const SUCCESS: Color32 = Color32::from_rgb(16, 185, 129); // Emerald-500
    pub const WARNING: Color32 = Color32::from_rgb(245, 158, 11); // Amber-500
    pub const ERROR: Color32 = Color32::from_rgb(244, 63, 94); // Rose-500
    pub const ERROR_LIGHT: Color32 = Color32::from_rgb(251, 113, 133); // Rose-400
    pub const INFO: Color32 = Color32::from_rgb(6, 182, 212); // Cyan-500

    // Neutral colors (dark theme)
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(17, 17, 27);
    pub const BG_SECONDARY: Color32 = Color32::from_rgb(24, 24, 37);
    pub const BG_TERTIARY: Color32 = Color32::from_rgb(35, 35, 52);
    pub const BG_HOVER: Color32 = Color32::from_rgb(45, 45, 65);
    pub const BG_ELEVATED: Color32 = Color32::from_rgb(30, 30, 45);

    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(250, 250, 255);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(161, 161, 180);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(113, 113, 132);

    pub const BORDER: Color32 = Color32::from_rgb(50, 50, 70);
    pub const BORDER_LIGHT: Color32 = Color32::from_rgb(38, 38, 55);

    /// Apply the theme chosen in settings
    pub fn apply(ctx: &egui::Context, theme: settings::Theme) {
        match theme {
            settings::Theme::Light => Self::apply_light(ctx),
            // No platform detection yet, System falls back to dark
            settings::Theme::Dark | settings::Theme::System => Self::apply_dark(ctx),
        }
    }

    /// Apply dark theme to egui
    pub fn apply_dark(ctx: &egui::Context) {
        let mut visuals = Visuals::dark();

        visuals.panel_fill = Self::BG_PRIMARY;
        visuals.window_fill = Self::BG_ELEVATED;
        visuals.extreme_bg_color = Self::BG_PRIMARY;
        visuals.faint_bg_color = Self::BG_TERTIARY;

        visuals.widgets.noninteractive.bg_fill = Self::BG_SECONDARY;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(0.5, Self::BORDER_LIGHT);

        visuals.widgets.inactive.bg_fill = Self::BG_TERTIARY;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Self::TEXT_SECONDARY);
        visuals.widgets.inactive.bg_stroke = Stroke::new(0.5, Self::BORDER);

        visuals.widgets.hovered.bg_fill = Self::BG_HOVER;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, Self::PRIMARY.linear_multiply(0.6));

        visuals.window_stroke = Stroke::new(0.5, Self::BORDER);
        visuals.window_shadow = egui::Shadow {
            offset: egui::vec2(0.0, 10.0),
            blur: 30.0,
            spread: 8.0,
            color: Color32::from_black_alpha(120),
        };

        Self::set_style(ctx, visuals);
    }

    /// Apply light theme to egui
    pub fn apply_light(ctx: &egui::Context) {
        let mut visuals = Visuals::light();

        let bg_primary = Color32::from_rgb(249, 250, 251); // Gray-50
        let bg_secondary = Color32::from_rgb(243, 244, 246); // Gray-100
        let bg_tertiary = Color32::from_rgb(229, 231, 235); // Gray-200
        let text_primary = Color32::from_rgb(17, 24, 39); // Gray-900
        let border = Color32::from_rgb(209, 213, 219); // Gray-300

        visuals.panel_fill = bg_primary;
        visuals.window_fill = Color32::WHITE;
        visuals.extreme_bg_color = Color32::WHITE;
        visuals.faint_bg_color = bg_secondary;

        visuals.widgets.noninteractive.bg_fill = bg_secondary;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_primary);
        visuals.widgets.inactive.bg_fill = bg_tertiary;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, Self::PRIMARY.linear_multiply(0.7));

        visuals.window_stroke = Stroke::new(0.5, border);

        Self::set_style(ctx, visuals);
    }

    /// Shared by both themes: rounding, selection, text sizes and spacing
    fn set_style(ctx: &egui::Context, mut visuals: Visuals) {
        for widget in [
            &mut visuals.widgets.noninteractive,
            &mut visuals.widgets.inactive,
            &mut visuals.widgets.hovered,
            &mut visuals.widgets.active,
            &mut visuals.widgets.open,
        ] {
            widget.rounding = Rounding::same(6.0);
        }
        visuals.widgets.active.bg_fill = Self::PRIMARY;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, Self::PRIMARY_DARK);
        visuals.selection.bg_fill = Self::PRIMARY.linear_multiply(0.25);
        visuals.selection.stroke = Stroke::new(1.0, Self::PRIMARY);
        visuals.window_rounding = Rounding::same(10.0);
        visuals.menu_rounding = Rounding::same(8.0);
        visuals.striped = true;

        let mut style = (*ctx.style()).clone();
        style.visuals = visuals;
        style.text_styles = [
            (TextStyle::Small, FontId::new(12.0, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(14.0, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(20.0, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace)),
        ]
        .into();
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.window_margin = egui::Margin::same(16.0);
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
        style.interaction.tooltip_delay = 0.3;

        ctx.set_style(style);
    }

    /// Color for a server status label
    pub fn status_color(status: &str) -> Color32 {
        match status {
            STATUS_RUNNING => Self::SUCCESS,
            "Stopped" => Self::TEXT_MUTED,
            "Frozen" => Self::INFO,
            "Error" => Self::ERROR,
            _ => Self::WARNING,
        }
    }
}

/// Icon characters (using Unicode symbols)
pub struct Icons;

impl Icons {
    pub const PLAY: &'static str = "▶";
    pub const STOP: &'static str = "⏹";
    pub const REFRESH: &'static str = "↻";
    pub const ADD: &'static str = "+";
    pub const SETTINGS: &'static str = "⚙";
    pub const APP: &'static str = "📦";
    pub const TRASH: &'static str = "🗑";
    pub const WARNING: &'static str = "⚠";
}
