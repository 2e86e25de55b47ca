//! Common types and data structures

use serde::{Deserialize, Serialize};

/// Body of `POST /predict`
#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub comment: &'a str,
    pub user_id: &'a str,
}

/// Body of `POST /feedback`
#[derive(Debug, Serialize)]
pub struct FeedbackRequest<'a> {
    pub user_id: &'a str,
    pub comment: &'a str,
    pub issue: &'a str,
}

/// Classification returned by `POST /predict`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub prediction: String,
    pub confidence: f64,
    pub sentiment: f64,
    #[serde(default)]
    pub explanation: Vec<String>,
    pub scores: [f64; 6],
    #[serde(default)]
    pub badges: Vec<String>,
    /// Detected language, when the backend reports one
    #[serde(default)]
    pub language: Option<String>,
}

impl Prediction {
    /// `"{label} (Confidence: 87.34%), Sentiment: Negative"`
    pub fn summary(&self) -> String {
        format!(
            "{} (Confidence: {}), Sentiment: {}",
            self.prediction,
            format_confidence(self.confidence),
            Sentiment::from_score(self.sentiment).label()
        )
    }
}

/// One row of the history table
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryEntry {
    pub comment: String,
    pub prediction: String,
    pub confidence: f64,
}

/// Response of `GET /history`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    pub badges: Vec<String>,
}

/// Response of `GET /`
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Sentiment::Positive
        } else if score < 0.0 {
            Sentiment::Negative
        } else {
            // zero and NaN
            Sentiment::Neutral
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

/// Render a [0,1] confidence as a percentage with two decimals
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.2}%", confidence * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_sign_selects_label() {
        assert_eq!(Sentiment::from_score(0.4).label(), "Positive");
        assert_eq!(Sentiment::from_score(-2.0).label(), "Negative");
        assert_eq!(Sentiment::from_score(0.0).label(), "Neutral");
        assert_eq!(Sentiment::from_score(-0.0).label(), "Neutral");
        assert_eq!(Sentiment::from_score(f64::NAN).label(), "Neutral");
    }

    #[test]
    fn confidence_has_two_decimals() {
        assert_eq!(format_confidence(0.8734), "87.34%");
        assert_eq!(format_confidence(0.91), "91.00%");
        assert_eq!(format_confidence(0.0), "0.00%");
        assert_eq!(format_confidence(1.0), "100.00%");
    }

    #[test]
    fn prediction_decodes_without_optional_fields() {
        let json = r#"{"prediction":"Non-Toxic","confidence":0.5,"sentiment":0.0,"scores":[0,0,0,0,0,0]}"#;
        let p: Prediction = serde_json::from_str(json).unwrap();
        assert!(p.explanation.is_empty());
        assert!(p.badges.is_empty());
        assert_eq!(p.language, None);
        assert_eq!(p.summary(), "Non-Toxic (Confidence: 50.00%), Sentiment: Neutral");
    }

    #[test]
    fn prediction_rejects_wrong_score_count() {
        let json = r#"{"prediction":"Toxic","confidence":0.5,"sentiment":0.0,"scores":[0.1,0.2]}"#;
        assert!(serde_json::from_str::<Prediction>(json).is_err());
    }

    #[test]
    fn request_bodies_use_backend_field_names() {
        let body = serde_json::to_value(FeedbackRequest {
            user_id: "u1",
            comment: "c",
            issue: "wrong label",
        })
        .unwrap();
        assert_eq!(body["user_id"], "u1");
        assert_eq!(body["comment"], "c");
        assert_eq!(body["issue"], "wrong label");
    }
}
