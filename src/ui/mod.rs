//! UI module - contains UI rendering components
//!
//! Widgets and painters live here; panel layout lives in `app`.

pub mod charts;
pub mod components;
