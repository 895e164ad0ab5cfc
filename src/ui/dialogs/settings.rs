//! Settings dialog - API endpoint, reload delay, read-only mode and theme

use egui::{Color32, Context, Ui, Vec2};

use crate::core::settings::Theme as SettingsTheme;
use crate::core::Settings;
use crate::ui::dialogs::DialogOutcome;
use crate::ui::theme::Theme;

/// Toggle switch widget
fn toggle_switch(ui: &mut Ui, on: &mut bool) -> egui::Response {
    let (rect, mut response) = ui.allocate_exact_size(Vec2::new(44.0, 24.0), egui::Sense::click());

    if response.clicked() {
        *on = !*on;
        response.mark_changed();
    }

    if ui.is_rect_visible(rect) {
        let how_on = ui.ctx().animate_bool_responsive(response.id, *on);
        let track_color = if *on { Theme::SUCCESS } else { Theme::BG_TERTIARY };

        ui.painter().rect(
            rect,
            egui::Rounding::same(12.0),
            track_color,
            egui::Stroke::new(1.0, if *on { Theme::SUCCESS } else { Theme::BORDER }),
        );

        let circle_x = egui::lerp((rect.left() + 12.0)..=(rect.right() - 12.0), how_on);
        ui.painter().circle(
            egui::pos2(circle_x, rect.center().y),
            9.0,
            Color32::WHITE,
            egui::Stroke::NONE,
        );
    }

    response
}

fn setting_row(ui: &mut Ui, label: &str, description: &str, add_control: impl FnOnce(&mut Ui)) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(label).color(Theme::TEXT_PRIMARY));
            ui.label(
                egui::RichText::new(description)
                    .small()
                    .color(Theme::TEXT_MUTED),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), add_control);
    });
    ui.add_space(10.0);
}

pub fn render(ctx: &Context, draft: &mut Settings) -> DialogOutcome {
    let mut open = true;
    let mut outcome = DialogOutcome::Open;

    egui::Window::new("Settings")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(480.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(egui::RichText::new("API server").color(Theme::TEXT_MUTED));
            ui.add(
                egui::TextEdit::singleline(&mut draft.api_base_url)
                    .hint_text("http://localhost:8080")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(12.0);

            setting_row(ui, "Reload delay", "Wait after a change before refreshing", |ui| {
                ui.add(
                    egui::DragValue::new(&mut draft.reload_delay_ms)
                        .range(100..=60_000)
                        .suffix(" ms"),
                );
            });

            setting_row(ui, "Request timeout", "Give up on the server after", |ui| {
                ui.add(
                    egui::DragValue::new(&mut draft.request_timeout_secs)
                        .range(1..=300)
                        .suffix(" s"),
                );
            });

            setting_row(ui, "Read-only", "Hide start, stop and delete buttons", |ui| {
                toggle_switch(ui, &mut draft.read_only);
            });

            setting_row(ui, "Theme", "Application color scheme", |ui| {
                egui::ComboBox::from_id_salt("theme")
                    .selected_text(draft.theme.label())
                    .show_ui(ui, |ui| {
                        for theme in SettingsTheme::all() {
                            ui.selectable_value(&mut draft.theme, *theme, theme.label());
                        }
                    });
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let save_btn =
                    egui::Button::new(egui::RichText::new("Save").color(Color32::WHITE))
                        .fill(Theme::PRIMARY)
                        .min_size(egui::vec2(90.0, 32.0));
                if ui.add(save_btn).clicked() {
                    outcome = DialogOutcome::Submitted;
                }
                if ui.button("Cancel").clicked() {
                    outcome = DialogOutcome::Cancelled;
                }
            });
        });

    if !open {
        outcome = DialogOutcome::Cancelled;
    }
    outcome
}
