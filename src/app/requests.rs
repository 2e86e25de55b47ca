//! Backend request logic

use super::App;
use crate::controller::{ApiCall, Event};
use eframe::egui;
use std::sync::mpsc::Sender;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Hand a finished request back to the UI thread and wake it up.
fn deliver(tx: &Sender<Event>, ctx: &egui::Context, event: Event) {
    if tx.send(event).is_err() {
        debug!("UI gone, dropping request result");
        return;
    }
    ctx.request_repaint();
}

impl App {
    pub(crate) fn spawn_call(&mut self, ctx: &egui::Context, call: ApiCall) {
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        let ctx = ctx.clone();

        match call {
            ApiCall::LivePredict { seq, comment, user_id } => {
                // A newer keystroke supersedes whatever is still running
                if let Some(previous) = self.live_cancel.take() {
                    previous.cancel();
                }
                let token = CancellationToken::new();
                self.live_cancel = Some(token.clone());

                self.runtime.spawn(async move {
                    tokio::select! {
                        _ = token.cancelled() => {
                            debug!(seq, "Live prediction cancelled");
                        }
                        result = client.predict(&comment, &user_id) => {
                            deliver(&tx, &ctx, Event::LivePredictionFinished { seq, result });
                        }
                    }
                });
            }
            ApiCall::Predict { comment, user_id } => {
                self.runtime.spawn(async move {
                    let result = client.predict(&comment, &user_id).await;
                    deliver(&tx, &ctx, Event::PredictionFinished { comment, result });
                });
            }
            ApiCall::Feedback { user_id, comment, issue } => {
                self.runtime.spawn(async move {
                    let result = client.submit_feedback(&user_id, &comment, &issue).await;
                    deliver(&tx, &ctx, Event::FeedbackFinished(result));
                });
            }
            ApiCall::History { user_id } => {
                self.runtime.spawn(async move {
                    let result = client.history(&user_id).await;
                    deliver(&tx, &ctx, Event::HistoryLoaded(result));
                });
            }
            ApiCall::Health => {
                self.runtime.spawn(async move {
                    let result = client.health().await;
                    deliver(&tx, &ctx, Event::HealthChecked(result));
                });
            }
        }
    }
}
