//! Client UI controller
//!
//! Owns everything the window shows. User actions and backend replies come in
//! as [`Event`]s; [`Controller::handle`] updates state and returns the
//! [`Effect`]s the shell must run (HTTP calls, persisting settings, applying
//! visuals). Nothing in here touches the network, the filesystem or egui,
//! which keeps every interaction testable.

use crate::constants::GUEST_USER_ID;
use crate::error::ApiError;
use crate::settings::Preferences;
use crate::types::{format_confidence, HistoryEntry, HistoryResponse, Prediction};
use crate::ui::charts::{RadarChart, WordCloud};
use std::collections::VecDeque;
use tracing::{debug, error, info, warn};

pub const EMPTY_COMMENT_ALERT: &str = "Please enter a comment.";
pub const EMPTY_FEEDBACK_ALERT: &str = "Please enter feedback.";
pub const FEEDBACK_SENT_ALERT: &str = "Feedback submitted successfully.";

#[derive(Debug)]
pub enum Event {
    /// Answer from the onboarding prompt; `None` when it was dismissed
    IdentitySubmitted(Option<String>),
    /// The comment box was edited through [`Controller::comment_input_mut`]
    CommentChanged,
    PredictClicked,
    FeedbackClicked,
    ThemeToggled,
    ContrastToggled,
    AlertDismissed,
    HealthCheckRequested,
    LivePredictionFinished {
        seq: u64,
        result: Result<Prediction, ApiError>,
    },
    PredictionFinished {
        comment: String,
        result: Result<Prediction, ApiError>,
    },
    FeedbackFinished(Result<(), ApiError>),
    HistoryLoaded(Result<HistoryResponse, ApiError>),
    HealthChecked(Result<String, ApiError>),
}

/// Backend call to issue
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    /// Prediction for the live feedback line, superseded by the next keystroke
    LivePredict {
        seq: u64,
        comment: String,
        user_id: String,
    },
    Predict {
        comment: String,
        user_id: String,
    },
    Feedback {
        user_id: String,
        comment: String,
        issue: String,
    },
    History {
        user_id: String,
    },
    Health,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Request(ApiCall),
    /// Abort any in-flight live prediction
    CancelLive,
    ApplyPreferences(Preferences),
    /// Write identity and preferences to settings
    Persist,
}

/// The line under the comment box
#[derive(Debug, Clone, PartialEq)]
pub enum LiveFeedback {
    Summary(String),
    Error(String),
}

impl LiveFeedback {
    pub fn text(&self) -> &str {
        match self {
            LiveFeedback::Summary(s) | LiveFeedback::Error(s) => s,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LiveFeedback::Error(_))
    }
}

/// Text part of the results panel
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub summary: String,
    pub keywords: Vec<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BackendStatus {
    Unknown,
    Online(String),
    Offline(String),
}

/// Lifecycle of explicit predictions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPhase {
    Idle,
    Requesting,
}

pub struct Controller {
    user_id: Option<String>,
    preferences: Preferences,
    backend_url: String,
    comment_input: String,
    feedback_input: String,
    live_seq: u64,
    live_feedback: Option<LiveFeedback>,
    results: Option<ResultsView>,
    chart: Option<RadarChart>,
    charts_created: u64,
    word_cloud: Option<WordCloud>,
    history: Vec<HistoryEntry>,
    history_error: Option<String>,
    badges: Vec<String>,
    alerts: VecDeque<String>,
    predictions_in_flight: usize,
    backend_status: BackendStatus,
}

impl Controller {
    pub fn new(user_id: Option<String>, preferences: Preferences, backend_url: &str) -> Self {
        Self {
            user_id,
            preferences,
            backend_url: backend_url.to_string(),
            comment_input: String::new(),
            feedback_input: String::new(),
            live_seq: 0,
            live_feedback: None,
            results: None,
            chart: None,
            charts_created: 0,
            word_cloud: None,
            history: Vec::new(),
            history_error: None,
            badges: Vec::new(),
            alerts: VecDeque::new(),
            predictions_in_flight: 0,
            backend_status: BackendStatus::Unknown,
        }
    }

    /// Effects to run once at startup. Preferences come first.
    pub fn start(&mut self) -> Vec<Effect> {
        let mut effects = vec![Effect::ApplyPreferences(self.preferences)];
        match &self.user_id {
            Some(user_id) => effects.push(Effect::Request(ApiCall::History {
                user_id: user_id.clone(),
            })),
            None => info!("No stored identity, waiting for onboarding"),
        }
        effects.push(Effect::Request(ApiCall::Health));
        effects
    }

    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::IdentitySubmitted(answer) => self.resolve_identity(answer),
            Event::CommentChanged => self.on_comment_changed(),
            Event::PredictClicked => self.on_predict_clicked(),
            Event::FeedbackClicked => self.on_feedback_clicked(),
            Event::ThemeToggled => {
                self.preferences.theme = self.preferences.theme.toggled();
                debug!(theme = ?self.preferences.theme, "Theme toggled");
                vec![Effect::ApplyPreferences(self.preferences), Effect::Persist]
            }
            Event::ContrastToggled => {
                self.preferences.contrast = self.preferences.contrast.toggled();
                debug!(contrast = ?self.preferences.contrast, "Contrast toggled");
                vec![Effect::ApplyPreferences(self.preferences), Effect::Persist]
            }
            Event::AlertDismissed => {
                self.alerts.pop_front();
                vec![]
            }
            Event::HealthCheckRequested => {
                self.backend_status = BackendStatus::Unknown;
                vec![Effect::Request(ApiCall::Health)]
            }
            Event::LivePredictionFinished { seq, result } => {
                self.on_live_prediction(seq, result);
                vec![]
            }
            Event::PredictionFinished { comment, result } => {
                self.on_prediction(comment, result);
                vec![]
            }
            Event::FeedbackFinished(result) => {
                self.on_feedback(result);
                vec![]
            }
            Event::HistoryLoaded(result) => {
                self.on_history(result);
                vec![]
            }
            Event::HealthChecked(result) => {
                self.backend_status = match result {
                    Ok(message) => BackendStatus::Online(message),
                    Err(e) => {
                        warn!(error = %e, "Backend health check failed");
                        BackendStatus::Offline(e.to_string())
                    }
                };
                vec![]
            }
        }
    }

    fn resolve_identity(&mut self, answer: Option<String>) -> Vec<Effect> {
        if self.user_id.is_some() {
            return vec![];
        }
        let user_id = answer
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .unwrap_or(GUEST_USER_ID)
            .to_string();
        info!(user_id = %user_id, "Identity resolved");
        self.user_id = Some(user_id.clone());
        vec![
            Effect::Persist,
            Effect::Request(ApiCall::History { user_id }),
        ]
    }

    fn on_comment_changed(&mut self) -> Vec<Effect> {
        // Any edit makes the previous live request stale
        self.live_seq += 1;
        let comment = self.comment_input.trim();
        if comment.is_empty() {
            self.live_feedback = None;
            return vec![Effect::CancelLive];
        }
        let Some(user_id) = self.user_id.clone() else {
            return vec![];
        };
        vec![Effect::Request(ApiCall::LivePredict {
            seq: self.live_seq,
            comment: comment.to_string(),
            user_id,
        })]
    }

    fn on_live_prediction(&mut self, seq: u64, result: Result<Prediction, ApiError>) {
        if seq != self.live_seq {
            debug!(seq, latest = self.live_seq, "Discarding stale live prediction");
            return;
        }
        self.live_feedback = Some(match result {
            Ok(p) => LiveFeedback::Summary(format!("Real-time: {}", p.summary())),
            Err(e) => {
                error!(error = %e, "Real-time feedback failed");
                LiveFeedback::Error(format!(
                    "Error: {}. Ensure the backend server is running at {}.",
                    e, self.backend_url
                ))
            }
        });
    }

    fn on_predict_clicked(&mut self) -> Vec<Effect> {
        let comment = self.comment_input.trim();
        if comment.is_empty() {
            self.alerts.push_back(EMPTY_COMMENT_ALERT.to_string());
            return vec![];
        }
        let Some(user_id) = self.user_id.clone() else {
            return vec![];
        };
        self.predictions_in_flight += 1;
        vec![Effect::Request(ApiCall::Predict {
            comment: comment.to_string(),
            user_id,
        })]
    }

    fn on_prediction(&mut self, comment: String, result: Result<Prediction, ApiError>) {
        self.predictions_in_flight = self.predictions_in_flight.saturating_sub(1);
        let p = match result {
            Ok(p) => p,
            Err(e) => {
                error!(error = %e, "Prediction failed");
                self.alerts
                    .push_back(format!("Error analyzing comment: {}", e));
                return;
            }
        };

        self.results = Some(ResultsView {
            summary: format!("Prediction: {}", p.summary()),
            keywords: p.explanation.clone(),
            language: p.language.clone(),
        });

        // Only one chart may exist: drop the old one before building the next
        if let Some(old) = self.chart.take() {
            debug!(chart = old.id(), "Destroying previous radar chart");
        }
        self.charts_created += 1;
        self.chart = Some(RadarChart::new(self.charts_created, &p.scores));

        self.word_cloud = Some(WordCloud::new(&p.explanation));

        self.history.insert(
            0,
            HistoryEntry {
                comment,
                prediction: p.prediction.clone(),
                confidence: p.confidence,
            },
        );
        self.badges = p.badges;
        info!(prediction = %p.prediction, confidence = p.confidence, "Prediction rendered");
    }

    fn on_feedback_clicked(&mut self) -> Vec<Effect> {
        let issue = self.feedback_input.trim();
        if issue.is_empty() {
            self.alerts.push_back(EMPTY_FEEDBACK_ALERT.to_string());
            return vec![];
        }
        let Some(user_id) = self.user_id.clone() else {
            return vec![];
        };
        vec![Effect::Request(ApiCall::Feedback {
            user_id,
            comment: self.comment_input.clone(),
            issue: issue.to_string(),
        })]
    }

    fn on_feedback(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                info!("Feedback submitted");
                self.alerts.push_back(FEEDBACK_SENT_ALERT.to_string());
                self.feedback_input.clear();
            }
            Err(e) => {
                error!(error = %e, "Feedback submission failed");
                self.alerts
                    .push_back(format!("Error submitting feedback: {}", e));
            }
        }
    }

    fn on_history(&mut self, result: Result<HistoryResponse, ApiError>) {
        match result {
            Ok(response) => {
                debug!(
                    rows = response.history.len(),
                    badges = response.badges.len(),
                    "History loaded"
                );
                self.history = response.history;
                self.history_error = None;
                self.badges = response.badges;
            }
            Err(e) => {
                error!(error = %e, "History load failed");
                self.history.clear();
                self.history_error = Some(format!("Error loading history: {}", e));
            }
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn needs_identity(&self) -> bool {
        self.user_id.is_none()
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn comment_input_mut(&mut self) -> &mut String {
        &mut self.comment_input
    }

    pub fn feedback_input_mut(&mut self) -> &mut String {
        &mut self.feedback_input
    }

    pub fn live_feedback(&self) -> Option<&LiveFeedback> {
        self.live_feedback.as_ref()
    }

    /// `None` until the first successful prediction reveals the panel
    pub fn results(&self) -> Option<&ResultsView> {
        self.results.as_ref()
    }

    pub fn chart(&self) -> Option<&RadarChart> {
        self.chart.as_ref()
    }

    pub fn word_cloud(&self) -> Option<&WordCloud> {
        self.word_cloud.as_ref()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn history_error(&self) -> Option<&str> {
        self.history_error.as_deref()
    }

    pub fn badges(&self) -> &[String] {
        &self.badges
    }

    pub fn current_alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    pub fn phase(&self) -> RequestPhase {
        if self.predictions_in_flight > 0 {
            RequestPhase::Requesting
        } else {
            RequestPhase::Idle
        }
    }

    pub fn backend_status(&self) -> &BackendStatus {
        &self.backend_status
    }
}

/// Confidence column text for a history row
pub fn history_confidence(entry: &HistoryEntry) -> String {
    format_confidence(entry.confidence)
}
