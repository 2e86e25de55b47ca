//! HTTP client for the classification backend

use crate::error::ApiError;
use crate::types::*;
use serde::de::DeserializeOwned;
use tracing::debug;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn predict(&self, comment: &str, user_id: &str) -> Result<Prediction, ApiError> {
        let url = self.url("/predict");
        debug!(url = %url, len = comment.len(), "Sending predict request");
        let response = self
            .http
            .post(&url)
            .json(&PredictRequest { comment, user_id })
            .send()
            .await?;
        read_json(response, &url).await
    }

    pub async fn submit_feedback(
        &self,
        user_id: &str,
        comment: &str,
        issue: &str,
    ) -> Result<(), ApiError> {
        let url = self.url("/feedback");
        debug!(url = %url, "Sending feedback");
        let response = self
            .http
            .post(&url)
            .json(&FeedbackRequest { user_id, comment, issue })
            .send()
            .await?;
        // Body content beyond the error check is irrelevant
        read_json::<serde_json::Value>(response, &url).await?;
        Ok(())
    }

    pub async fn history(&self, user_id: &str) -> Result<HistoryResponse, ApiError> {
        let url = self.url("/history");
        debug!(url = %url, user_id, "Fetching history");
        let response = self
            .http
            .get(&url)
            .query(&[("user_id", user_id)])
            .send()
            .await?;
        read_json(response, &url).await
    }

    pub async fn health(&self) -> Result<String, ApiError> {
        let url = self.url("/");
        let response = self.http.get(&url).send().await?;
        let health: HealthResponse = read_json(response, &url).await?;
        Ok(health.message)
    }
}

/// Check status, then the `error` field, then decode the payload.
async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    url: &str,
) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        // Backend puts a reason in `error` on 4xx/5xx; it is optional here
        let detail = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| error_field(&v));
        return Err(ApiError::Status {
            status: status.as_u16(),
            url: url.to_string(),
            detail,
        });
    }

    let bytes = response.bytes().await?;
    let value: serde_json::Value = serde_json::from_slice(&bytes)?;
    if let Some(message) = error_field(&value) {
        return Err(ApiError::Backend(message));
    }
    Ok(serde_json::from_value(value)?)
}

fn error_field(value: &serde_json::Value) -> Option<String> {
    match value.get("error")? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    async fn serve(router: Router) -> ApiClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        ApiClient::new(&format!("http://{}/", addr))
    }

    fn stupid_prediction() -> Value {
        json!({
            "prediction": "toxic",
            "confidence": 0.91,
            "sentiment": -2,
            "explanation": ["stupid"],
            "scores": [0.9, 0.1, 0.2, 0.05, 0.8, 0.1],
            "badges": ["First Analysis"]
        })
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:5000///");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("/predict"), "http://localhost:5000/predict");
    }

    #[tokio::test]
    async fn predict_sends_comment_and_user() {
        let router = Router::new().route(
            "/predict",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["comment"], "You are stupid");
                assert_eq!(body["user_id"], "alice");
                Json(stupid_prediction())
            }),
        );
        let client = serve(router).await;
        let p = client.predict("You are stupid", "alice").await.unwrap();
        assert_eq!(p.prediction, "toxic");
        assert_eq!(p.scores.len(), 6);
        assert_eq!(p.badges, vec!["First Analysis".to_string()]);
    }

    #[tokio::test]
    async fn non_success_status_is_status_error() {
        let router = Router::new().route(
            "/predict",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "Prediction failed: boom"})),
                )
            }),
        );
        let client = serve(router).await;
        let err = client.predict("hi", "alice").await.unwrap_err();
        match &err {
            ApiError::Status { status, detail, .. } => {
                assert_eq!(*status, 500);
                assert_eq!(detail.as_deref(), Some("Prediction failed: boom"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("Status: 500"));
    }

    #[tokio::test]
    async fn error_field_in_success_body_is_backend_error() {
        let router = Router::new().route(
            "/predict",
            post(|| async { Json(json!({"error": "model not loaded"})) }),
        );
        let client = serve(router).await;
        let err = client.predict("hi", "alice").await.unwrap_err();
        assert!(matches!(err, ApiError::Backend(ref m) if m == "model not loaded"));
    }

    #[tokio::test]
    async fn feedback_accepts_any_object() {
        let router = Router::new().route(
            "/feedback",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["issue"], "not toxic");
                Json(json!({"status": "success"}))
            }),
        );
        let client = serve(router).await;
        client.submit_feedback("alice", "hello", "not toxic").await.unwrap();
    }

    #[tokio::test]
    async fn history_encodes_user_id_query() {
        let router = Router::new().route(
            "/history",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                assert_eq!(q.get("user_id").map(String::as_str), Some("a b&c"));
                Json(json!({
                    "history": [{"comment": "hi", "prediction": "Non-Toxic", "confidence": 0.7}],
                    "badges": []
                }))
            }),
        );
        let client = serve(router).await;
        let history = client.history("a b&c").await.unwrap();
        assert_eq!(history.history.len(), 1);
        assert!(history.badges.is_empty());
    }

    #[tokio::test]
    async fn health_returns_message() {
        let router = Router::new().route(
            "/",
            get(|| async { Json(json!({"message": "Toxic Comment Classifier API is running"})) }),
        );
        let client = serve(router).await;
        assert_eq!(
            client.health().await.unwrap(),
            "Toxic Comment Classifier API is running"
        );
    }

    #[tokio::test]
    async fn unreachable_backend_is_transport_error() {
        // Bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = ApiClient::new(&format!("http://{}", addr));
        let err = client.history("alice").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
