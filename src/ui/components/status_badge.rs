//! Status badge component

use egui::{Response, Rounding, Ui, Vec2};

use crate::core::STATUS_RUNNING;
use crate::ui::theme::Theme;

pub struct StatusBadge;

impl StatusBadge {
    /// Pill with a dot and the status label, sized to the text
    pub fn show(ui: &mut Ui, status: &str) -> Response {
        let color = Theme::status_color(status);
        let galley = ui.painter().layout_no_wrap(
            status.to_string(),
            egui::FontId::proportional(12.0),
            color,
        );
        let size = Vec2::new(galley.size().x + 34.0, 24.0);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            painter.rect_filled(rect, Rounding::same(12.0), color.linear_multiply(0.15));
            painter.rect_stroke(
                rect,
                Rounding::same(12.0),
                egui::Stroke::new(1.0, color.linear_multiply(0.3)),
            );

            let dot_center = rect.left_center() + Vec2::new(13.0, 0.0);
            if status == STATUS_RUNNING {
                painter.circle_filled(dot_center, 6.0, color.linear_multiply(0.3));
            }
            painter.circle_filled(dot_center, 4.0, color);

            painter.galley(
                rect.left_center() + Vec2::new(24.0, -galley.size().y / 2.0),
                galley,
                color,
            );
        }

        response
    }
}
