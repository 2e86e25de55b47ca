//! App module - contains the egui shell around the controller

mod modals;
mod requests;
mod views;

use crate::api::ApiClient;
use crate::controller::{Controller, Effect, Event};
use crate::settings::Settings;
use crate::theme::{self, Palette};
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use tokio_util::sync::CancellationToken;
use tracing::debug;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) controller: Controller,
    pub(crate) client: ApiClient,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Background tasks report back through this channel
    pub(crate) events_tx: Sender<Event>,
    pub(crate) events_rx: Receiver<Event>,
    pub(crate) live_cancel: Option<CancellationToken>,
    pub(crate) palette: Palette,
    pub(crate) started: bool,
    // Onboarding prompt text
    pub(crate) identity_draft: String,
    // Settings
    pub(crate) data_dir: PathBuf,
    pub(crate) saved_backend_url: String,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Stored preferences go on before the first frame
        let palette = Palette::for_preferences(settings.preferences());
        theme::apply_visuals(&cc.egui_ctx, &palette);

        let backend_url = settings.effective_backend_url();
        let client = ApiClient::new(&backend_url);
        let controller = Controller::new(
            settings.stored_user_id(),
            settings.preferences(),
            client.base_url(),
        );
        let (events_tx, events_rx) = mpsc::channel();

        Self {
            controller,
            client,
            runtime,
            events_tx,
            events_rx,
            live_cancel: None,
            palette,
            started: false,
            identity_draft: String::new(),
            data_dir,
            saved_backend_url: settings.backend_url,
            window_pos: None,
            window_size: None,
            needs_center: false,
        }
    }

    /// Feed one event to the controller and run whatever it asks for
    pub(crate) fn dispatch(&mut self, ctx: &egui::Context, event: Event) {
        let effects = self.controller.handle(event);
        self.run_effects(ctx, effects);
    }

    pub(crate) fn run_effects(&mut self, ctx: &egui::Context, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Request(call) => self.spawn_call(ctx, call),
                Effect::CancelLive => {
                    if let Some(token) = self.live_cancel.take() {
                        token.cancel();
                    }
                }
                Effect::ApplyPreferences(prefs) => {
                    self.palette = Palette::for_preferences(prefs);
                    theme::apply_visuals(ctx, &self.palette);
                }
                Effect::Persist => self.save_settings(),
            }
        }
    }

    /// Run startup effects once, then apply results from finished requests
    pub(crate) fn pump_events(&mut self, ctx: &egui::Context) {
        if !self.started {
            self.started = true;
            let effects = self.controller.start();
            self.run_effects(ctx, effects);
        }
        while let Ok(event) = self.events_rx.try_recv() {
            debug!(event = event_name(&event), "Applying background result");
            self.dispatch(ctx, event);
        }
    }

    pub fn save_settings(&self) {
        let prefs = self.controller.preferences();
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            user_id: self.controller.user_id().map(str::to_string),
            theme: prefs.theme,
            contrast: prefs.contrast,
            backend_url: self.saved_backend_url.clone(),
        };
        settings.save(&self.data_dir);
    }
}

fn event_name(event: &Event) -> &'static str {
    match event {
        Event::LivePredictionFinished { .. } => "live_prediction",
        Event::PredictionFinished { .. } => "prediction",
        Event::FeedbackFinished(_) => "feedback",
        Event::HistoryLoaded(_) => "history",
        Event::HealthChecked(_) => "health",
        _ => "ui",
    }
}
