//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use crate::controller::BackendStatus;
use crate::theme::{self, Palette};
use eframe::egui;

/// One rounded chip per badge, in the order given
pub fn badge_chips(ui: &mut egui::Ui, badges: &[String]) {
    ui.horizontal_wrapped(|ui| {
        for badge in badges {
            badge_chip(ui, badge);
        }
    });
}

fn badge_chip(ui: &mut egui::Ui, label: &str) {
    egui::Frame::new()
        .fill(theme::BADGE_BG)
        .corner_radius(theme::RADIUS_PILL)
        .inner_margin(egui::Margin::symmetric(12, 4))
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(format!("{} {}", egui_phosphor::regular::MEDAL, label))
                        .color(theme::BADGE_TEXT)
                        .size(theme::FONT_LABEL),
                )
                .selectable(false),
            );
        });
}

/// `Key Words: a, b, c` with every keyword in red
pub fn keyword_line(ui: &mut egui::Ui, keywords: &[String]) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label("Key Words: ");
        for (i, word) in keywords.iter().enumerate() {
            if i > 0 {
                ui.label(", ");
            }
            ui.label(egui::RichText::new(word).color(theme::KEYWORD_RED));
        }
    });
}

/// Square icon button used for the theme and contrast toggles. Returns true if clicked.
pub fn icon_toggle(
    ui: &mut egui::Ui,
    icon: &str,
    active: bool,
    tooltip: &str,
    palette: &Palette,
) -> bool {
    let size = theme::BUTTON_HEIGHT;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());
    let base = if active { palette.accent } else { palette.bg_elevated };
    let (fill, draw_rect) = theme::button_visual(&response, base, rect);
    let color = if active { palette.accent_text } else { palette.text_secondary };

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
        painter.rect_stroke(
            draw_rect,
            theme::RADIUS_DEFAULT,
            egui::Stroke::new(theme::STROKE_DEFAULT, palette.border),
            egui::StrokeKind::Inside,
        );
        painter.text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(16.0),
            color,
        );
    }
    response.on_hover_text(tooltip).clicked()
}

/// Coloured dot plus text for the backend health. Returns true if clicked.
pub fn backend_status(ui: &mut egui::Ui, status: &BackendStatus, palette: &Palette) -> bool {
    let (color, text) = match status {
        BackendStatus::Unknown => (theme::STATUS_WARNING, "Checking backend..."),
        BackendStatus::Online(_) => (theme::STATUS_SUCCESS, "Backend online"),
        BackendStatus::Offline(_) => (theme::STATUS_ERROR, "Backend offline"),
    };
    let tooltip = match status {
        BackendStatus::Unknown => "Waiting for the backend to answer".to_string(),
        BackendStatus::Online(message) => format!("{}\nClick to check again", message),
        BackendStatus::Offline(error) => format!("{}\nClick to check again", error),
    };

    let response = ui
        .horizontal(|ui| {
            let (dot, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
            ui.painter().circle_filled(dot.center(), 4.0, color);
            ui.add(
                egui::Label::new(
                    egui::RichText::new(text)
                        .size(theme::FONT_SMALL)
                        .color(palette.text_muted),
                )
                .selectable(false)
                .sense(egui::Sense::click()),
            )
        })
        .inner;
    response.on_hover_text(tooltip).clicked()
}

/// Small uppercase section heading
pub fn section_heading(ui: &mut egui::Ui, text: &str, palette: &Palette) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text.to_uppercase())
                .size(theme::FONT_SMALL)
                .strong()
                .color(palette.text_muted),
        )
        .selectable(false),
    );
}
