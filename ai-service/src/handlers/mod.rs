//! HTTP handlers for the AI service.

pub mod health;
pub mod metrics;
pub mod recommend;
pub mod root;

pub use health::{health_check, readiness_check};
pub use metrics::metrics_endpoint;
pub use recommend::{recommend_events, recommend_interests};
pub use root::index;
