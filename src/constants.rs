//! Application constants and configuration

pub const APP_NAME: &str = "Toxicity Checker";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Overrides the backend URL for one session without touching settings.json
pub const BACKEND_URL_ENV: &str = "TOXICITY_BACKEND_URL";

/// Fallback identity when the onboarding prompt is skipped or left blank
pub const GUEST_USER_ID: &str = "guest";

/// Toxicity facets, in the order the backend reports `scores`
pub const CATEGORY_LABELS: [&str; 6] = [
    "Toxic",
    "Severe Toxic",
    "Obscene",
    "Threat",
    "Insult",
    "Identity Hate",
];

pub const CHART_MAX: f32 = 100.0;

// Word cloud parameters
pub const WORD_CLOUD_WEIGHT: f32 = 50.0;
pub const WORD_CLOUD_WEIGHT_FACTOR: f32 = 2.0;
