pub mod metrics;
pub mod recommender;

pub use metrics::{get_metrics, init_metrics};
pub use recommender::{RecommendationProvider, StaticRecommendations};
