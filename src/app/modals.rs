//! Modal dialogs (onboarding prompt, alerts)

use super::App;
use crate::controller::Event;
use crate::theme;
use eframe::egui;
use egui_phosphor::regular as icons;

impl App {
    /// Ask for a user ID when none is stored. Skip, Escape or a blank answer
    /// all resolve to the guest identity.
    pub(crate) fn render_identity_modal(&mut self, ctx: &egui::Context) {
        if !self.controller.needs_identity() {
            return;
        }
        let palette = self.palette;
        let mut answer: Option<Option<String>> = None;

        let modal = egui::Modal::new(egui::Id::new("identity_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame(&palette))
            .show(ctx, |ui| {
                ui.set_width(320.0);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(format!("{} Welcome", icons::USER))
                            .size(theme::FONT_HEADING)
                            .strong(),
                    )
                    .selectable(false),
                );
                ui.add_space(theme::SPACING_SM);
                ui.label("Enter a User ID:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.identity_draft)
                        .hint_text("guest")
                        .desired_width(f32::INFINITY),
                );
                response.request_focus();
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                ui.add_space(theme::SPACING_MD);
                ui.horizontal(|ui| {
                    if ui.add(theme::button_accent("Continue", &palette)).clicked() || submitted {
                        answer = Some(Some(self.identity_draft.clone()));
                    }
                    if ui.add(theme::button("Skip")).clicked() {
                        answer = Some(None);
                    }
                });
            });

        if answer.is_none() && modal.should_close() {
            answer = Some(None);
        }
        if let Some(answer) = answer {
            self.identity_draft.clear();
            self.dispatch(ctx, Event::IdentitySubmitted(answer));
        }
    }

    /// Show the oldest queued alert; OK or Escape dismisses it
    pub(crate) fn render_alert_modal(&mut self, ctx: &egui::Context) {
        if self.controller.needs_identity() {
            return;
        }
        let Some(message) = self.controller.current_alert().map(str::to_string) else {
            return;
        };
        let palette = self.palette;
        let mut dismissed = false;

        let modal = egui::Modal::new(egui::Id::new("alert_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame(&palette))
            .show(ctx, |ui| {
                ui.set_max_width(420.0);
                ui.label(egui::RichText::new(&message).size(theme::FONT_BODY));
                ui.add_space(theme::SPACING_MD);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let ok = ui.add(theme::button_accent("OK", &palette));
                    if ok.clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        dismissed = true;
                    }
                });
            });

        if dismissed || modal.should_close() {
            self.dispatch(ctx, Event::AlertDismissed);
        }
    }
}
