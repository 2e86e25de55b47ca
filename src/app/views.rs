//! View rendering (top bar, comment input, results, history, badges, feedback)

use super::App;
use crate::controller::{history_confidence, Event, RequestPhase};
use crate::settings::{ContrastMode, ThemeMode};
use crate::theme;
use crate::ui::charts;
use crate::ui::components;
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular as icons;

impl App {
    pub(crate) fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = self.palette;
        egui::TopBottomPanel::top("top_bar")
            .frame(
                egui::Frame::new()
                    .fill(palette.bg_elevated)
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!("{} Toxicity Checker", icons::SHIELD_WARNING))
                                .size(theme::FONT_TITLE)
                                .strong(),
                        )
                        .selectable(false),
                    );
                    ui.add_space(theme::SPACING_LG);
                    if components::backend_status(ui, self.controller.backend_status(), &palette) {
                        self.dispatch(ctx, Event::HealthCheckRequested);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let prefs = self.controller.preferences();
                        let high = prefs.contrast == ContrastMode::High;
                        if components::icon_toggle(ui, icons::CIRCLE_HALF, high, "High contrast", &palette) {
                            self.dispatch(ctx, Event::ContrastToggled);
                        }
                        let dark = prefs.theme == ThemeMode::Dark;
                        let icon = if dark { icons::SUN } else { icons::MOON };
                        if components::icon_toggle(ui, icon, dark, "Dark mode", &palette) {
                            self.dispatch(ctx, Event::ThemeToggled);
                        }
                        if let Some(user_id) = self.controller.user_id() {
                            ui.add_space(theme::SPACING_MD);
                            ui.label(
                                egui::RichText::new(format!("{} {}", icons::USER, user_id))
                                    .size(theme::FONT_LABEL)
                                    .color(palette.text_muted),
                            );
                        }
                    });
                });
            });
    }

    pub(crate) fn render_main(&mut self, ctx: &egui::Context) {
        let palette = self.palette;
        // Central panel MUST be added LAST after all side/top/bottom panels
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(palette.bg_base)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add_space(theme::SPACING_MD);
                        self.render_comment_card(ui, ctx);
                        ui.add_space(theme::SPACING_LG);
                        if self.controller.results().is_some() {
                            self.render_results_card(ui);
                            ui.add_space(theme::SPACING_LG);
                        }
                        self.render_history_card(ui);
                        ui.add_space(theme::SPACING_LG);
                        self.render_badges_card(ui);
                        ui.add_space(theme::SPACING_LG);
                        self.render_feedback_card(ui, ctx);
                        ui.add_space(theme::SPACING_XL);
                    });
            });
    }

    fn render_comment_card(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let palette = self.palette;
        theme::card_frame(&palette).show(ui, |ui| {
            ui.set_width(ui.available_width());
            components::section_heading(ui, "Comment", &palette);
            let response = ui.add(
                egui::TextEdit::multiline(self.controller.comment_input_mut())
                    .hint_text("Type a comment to analyze...")
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                self.dispatch(ctx, Event::CommentChanged);
            }

            if let Some(feedback) = self.controller.live_feedback() {
                let color = if feedback.is_error() {
                    theme::STATUS_ERROR
                } else {
                    palette.text_secondary
                };
                ui.label(
                    egui::RichText::new(feedback.text())
                        .size(theme::FONT_LABEL)
                        .color(color),
                );
            }

            ui.add_space(theme::SPACING_SM);
            ui.horizontal(|ui| {
                let label = format!("{} Analyze", icons::MAGNIFYING_GLASS);
                if ui.add(theme::button_accent(label, &palette)).clicked() {
                    self.dispatch(ctx, Event::PredictClicked);
                }
                if self.controller.phase() == RequestPhase::Requesting {
                    ui.spinner();
                }
            });
        });
    }

    fn render_results_card(&mut self, ui: &mut egui::Ui) {
        let palette = self.palette;
        let Some(results) = self.controller.results() else {
            return;
        };
        theme::card_frame(&palette).show(ui, |ui| {
            ui.set_width(ui.available_width());
            components::section_heading(ui, "Results", &palette);
            ui.label(
                egui::RichText::new(&results.summary)
                    .size(theme::FONT_HEADING)
                    .strong(),
            );
            components::keyword_line(ui, &results.keywords);
            if let Some(language) = &results.language {
                ui.label(
                    egui::RichText::new(format!("Language: {}", language))
                        .size(theme::FONT_SMALL)
                        .color(palette.text_muted),
                );
            }
            ui.add_space(theme::SPACING_MD);

            ui.horizontal_wrapped(|ui| {
                match self.controller.chart() {
                    Some(chart) => charts::paint_radar(ui, chart, &palette, theme::CHART_SIZE),
                    None => charts::paint_placeholder(
                        ui,
                        "No scores",
                        palette.text_muted,
                        egui::vec2(theme::CHART_SIZE, theme::CHART_SIZE),
                    ),
                }
                let (w, h) = theme::WORD_CLOUD_SIZE;
                match self.controller.word_cloud() {
                    Some(cloud) if !cloud.is_empty() => {
                        charts::paint_word_cloud(ui, cloud, &palette, egui::vec2(w, h))
                    }
                    _ => charts::paint_placeholder(
                        ui,
                        "No keywords",
                        palette.text_muted,
                        egui::vec2(w, h),
                    ),
                }
            });
        });
    }

    fn render_history_card(&mut self, ui: &mut egui::Ui) {
        let palette = self.palette;
        theme::card_frame(&palette).show(ui, |ui| {
            ui.set_width(ui.available_width());
            components::section_heading(ui, "History", &palette);
            let rows = self.controller.history();
            let error = self.controller.history_error();

            ui.push_id("history_table", |ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .vscroll(false)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(Column::remainder().at_least(200.0).clip(true))
                    .column(Column::auto().at_least(110.0))
                    .column(Column::auto().at_least(90.0))
                    .header(theme::HISTORY_ROW_HEIGHT, |mut header| {
                        for title in ["Comment", "Prediction", "Confidence"] {
                            header.col(|ui| {
                                ui.strong(title);
                            });
                        }
                    })
                    .body(|mut body| {
                        for entry in rows {
                            body.row(theme::HISTORY_ROW_HEIGHT, |mut row| {
                                row.col(|ui| {
                                    ui.label(&entry.comment);
                                });
                                row.col(|ui| {
                                    ui.label(&entry.prediction);
                                });
                                row.col(|ui| {
                                    ui.label(history_confidence(entry));
                                });
                            });
                        }
                        if let Some(message) = error {
                            body.row(theme::HISTORY_ROW_HEIGHT, |mut row| {
                                row.col(|ui| {
                                    ui.colored_label(theme::STATUS_ERROR, message);
                                });
                                row.col(|_| {});
                                row.col(|_| {});
                            });
                        }
                    });
            });
        });
    }

    fn render_badges_card(&mut self, ui: &mut egui::Ui) {
        let palette = self.palette;
        theme::card_frame(&palette).show(ui, |ui| {
            ui.set_width(ui.available_width());
            components::section_heading(ui, "Badges", &palette);
            components::badge_chips(ui, self.controller.badges());
        });
    }

    fn render_feedback_card(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let palette = self.palette;
        theme::card_frame(&palette).show(ui, |ui| {
            ui.set_width(ui.available_width());
            components::section_heading(ui, "Feedback", &palette);
            ui.horizontal(|ui| {
                let button_w = 110.0;
                ui.add(
                    egui::TextEdit::singleline(self.controller.feedback_input_mut())
                        .hint_text("Report an incorrect prediction...")
                        .desired_width(ui.available_width() - button_w),
                );
                let label = format!("{} Submit", icons::PAPER_PLANE_TILT);
                if ui.add(theme::button(label)).clicked() {
                    self.dispatch(ctx, Event::FeedbackClicked);
                }
            });
        });
    }
}
