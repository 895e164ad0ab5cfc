//! One row of the instance list

use egui::{Color32, Ui};

use crate::core::{InstanceAction, InstanceRow, RowClick};
use crate::ui::theme::{Icons, Theme};

use super::status_badge::StatusBadge;

pub struct InstanceRowView;

impl InstanceRowView {
    /// Styled action button
    fn action_button(ui: &mut Ui, icon: &str, label: &str, color: Color32) -> bool {
        let btn = egui::Button::new(
            egui::RichText::new(format!("{} {}", icon, label))
                .size(12.0)
                .color(color),
        )
        .fill(Theme::BG_TERTIARY)
        .rounding(egui::Rounding::same(6.0))
        .min_size(egui::vec2(84.0, 28.0));

        ui.add(btn).clicked()
    }

    fn style(action: InstanceAction) -> (&'static str, Color32) {
        match action {
            InstanceAction::Start => (Icons::PLAY, Theme::SUCCESS),
            InstanceAction::Stop => (Icons::STOP, Theme::WARNING),
            InstanceAction::Delete => (Icons::TRASH, Theme::ERROR_LIGHT),
        }
    }

    /// Draw the row; returns the button clicked this frame, if any
    pub fn show(ui: &mut Ui, row: &InstanceRow) -> Option<RowClick> {
        let mut clicked = None;

        let frame = egui::Frame::none()
            .fill(Theme::BG_SECONDARY)
            .rounding(egui::Rounding::same(8.0))
            .stroke(egui::Stroke::new(1.0, Theme::BORDER_LIGHT))
            .inner_margin(egui::Margin::symmetric(16.0, 10.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&row.name)
                            .strong()
                            .size(15.0)
                            .color(Theme::TEXT_PRIMARY),
                    );
                    ui.label(egui::RichText::new("-").color(Theme::TEXT_MUTED));
                    StatusBadge::show(ui, &row.status);

                    if let Some(kind) = &row.kind {
                        ui.label(
                            egui::RichText::new(kind)
                                .small()
                                .color(Theme::TEXT_MUTED),
                        );
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        // Laid out right-to-left, reversed to keep row order
                        for action in row.actions.iter().rev() {
                            let (icon, color) = Self::style(*action);
                            if Self::action_button(ui, icon, action.label(), color) {
                                clicked = Some(RowClick {
                                    name: row.name.clone(),
                                    action: *action,
                                });
                            }
                        }
                    });
                });
            });
        frame.response.on_hover_text(row.label());

        clicked
    }
}
