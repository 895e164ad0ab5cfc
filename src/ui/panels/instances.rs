//! Instances panel - The display pane: list rows, progress, messages or errors

use egui::Ui;

use crate::core::{InstanceManager, ListView, Pane, RowClick};
use crate::ui::components::InstanceRowView;
use crate::ui::theme::{Icons, Theme};

/// Draw whatever the pane currently holds. Returns the row button clicked
/// this frame; all rows share this one handler.
pub fn render(ui: &mut Ui, manager: &InstanceManager) -> Option<RowClick> {
    match manager.list_view() {
        Some(ListView::Rows(rows)) => {
            ui.label(
                egui::RichText::new(format!("{} instances", rows.len()))
                    .color(Theme::TEXT_SECONDARY),
            );
            ui.add_space(8.0);

            let mut clicked = None;
            egui::ScrollArea::vertical().show(ui, |ui| {
                for row in &rows {
                    if let Some(click) = InstanceRowView::show(ui, row) {
                        clicked = Some(click);
                    }
                    ui.add_space(4.0);
                }
            });
            clicked
        }
        Some(ListView::Placeholder(text)) => {
            render_placeholder(ui, text);
            None
        }
        None => {
            render_status(ui, manager.pane());
            None
        }
    }
}

fn render_placeholder(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(Theme::BG_SECONDARY)
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(32.0))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(Icons::APP).size(48.0));
                ui.add_space(16.0);
                ui.label(
                    egui::RichText::new(text)
                        .size(16.0)
                        .color(Theme::TEXT_SECONDARY),
                );
            });
        });
}

fn render_status(ui: &mut Ui, pane: &Pane) {
    let text = pane.text().unwrap_or_default();
    if text.is_empty() {
        return;
    }

    ui.horizontal(|ui| {
        if pane.is_busy() {
            ui.spinner();
            ui.label(egui::RichText::new(text).color(Theme::TEXT_SECONDARY));
        } else if pane.is_error() {
            ui.label(egui::RichText::new(Icons::WARNING).color(Theme::ERROR));
            ui.label(egui::RichText::new(text).color(Theme::ERROR_LIGHT));
        } else {
            ui.label(egui::RichText::new(text).color(Theme::TEXT_PRIMARY));
        }
    });
}
