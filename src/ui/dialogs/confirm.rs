//! Confirmation dialog

use egui::Context;

use crate::ui::dialogs::DialogOutcome;
use crate::ui::theme::Theme;

pub fn render(ctx: &Context, title: &str, message: &str) -> DialogOutcome {
    let mut open = true;
    let mut outcome = DialogOutcome::Open;

    egui::Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(350.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui
                    .button(egui::RichText::new("Confirm").color(Theme::ERROR))
                    .clicked()
                {
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
