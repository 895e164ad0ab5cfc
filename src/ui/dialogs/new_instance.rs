//! New instance dialog

use egui::{Color32, Context};

use crate::core::CreateInstanceRequest;
use crate::ui::dialogs::DialogOutcome;
use crate::ui::theme::Theme;

/// Label above a single-line input
fn form_field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) -> egui::Response {
    ui.label(
        egui::RichText::new(label)
            .size(12.0)
            .color(Theme::TEXT_MUTED),
    );
    ui.add_space(4.0);
    let response = ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(12.0);
    response
}

pub fn render(ctx: &Context, form: &mut CreateInstanceRequest) -> DialogOutcome {
    let mut open = true;
    let mut outcome = DialogOutcome::Open;

    egui::Window::new("New Instance")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(
            egui::Frame::window(&ctx.style())
                .fill(Theme::BG_ELEVATED)
                .rounding(egui::Rounding::same(12.0))
                .stroke(egui::Stroke::new(1.0, Theme::BORDER))
                .inner_margin(egui::Margin::same(24.0)),
        )
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new("Create New Container")
                    .size(20.0)
                    .strong()
                    .color(Color32::WHITE),
            );
            ui.add_space(16.0);

            let name = form_field(ui, "Instance Name", &mut form.name, "web1");
            if ui.memory(|m| m.focused().is_none()) {
                name.request_focus();
            }
            let image = form_field(ui, "Image", &mut form.image, "ubuntu:22.04");

            let ready = CreateInstanceRequest::from_input(&form.name, &form.image).is_some();
            let enter = image.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.horizontal(|ui| {
                let create_btn = egui::Button::new(
                    egui::RichText::new("Create").color(Color32::WHITE),
                )
                .fill(Theme::PRIMARY)
                .rounding(egui::Rounding::same(8.0))
                .min_size(egui::vec2(100.0, 32.0));

                if ui.add_enabled(ready, create_btn).clicked() || (ready && enter) {
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
