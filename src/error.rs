use thiserror::Error;

/// Failure of one backend call. `Display` is the message shown to the user.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response
    #[error("HTTP error! Status: {status}, URL: {url}{}", detail_suffix(.detail))]
    Status {
        status: u16,
        url: String,
        detail: Option<String>,
    },
    /// 2xx response whose body carries an `error` field
    #[error("Backend error: {0}")]
    Backend(String),
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!(" ({})", d),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_names_code_and_url() {
        let err = ApiError::Status {
            status: 500,
            url: "http://localhost:5000/predict".into(),
            detail: None,
        };
        assert_eq!(
            err.to_string(),
            "HTTP error! Status: 500, URL: http://localhost:5000/predict"
        );
    }

    #[test]
    fn status_message_appends_backend_detail() {
        let err = ApiError::Status {
            status: 400,
            url: "http://localhost:5000/feedback".into(),
            detail: Some("Invalid input".into()),
        };
        assert!(err.to_string().ends_with("/feedback (Invalid input)"));
    }

    #[test]
    fn backend_message_is_prefixed() {
        assert_eq!(
            ApiError::Backend("model missing".into()).to_string(),
            "Backend error: model missing"
        );
    }
}
