use crate::models::{Event, Interest};
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    Json,
};

/// Raw query pairs in request order. Repeated keys are kept.
pub type QueryPairs = Vec<(String, String)>;

/// Value of the last occurrence of `key`, so `?k=a&k=b` reads as `b`.
pub fn last_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .rev()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

pub async fn recommend_events(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Json<Vec<Event>> {
    let zip_code = last_param(&pairs, "zip_code");
    let events = state.recommender.events(zip_code);

    tracing::debug!(
        zip_code = zip_code.unwrap_or("-"),
        count = events.len(),
        "Selected event recommendations"
    );

    Json(events)
}

pub async fn recommend_interests(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Json<Vec<Interest>> {
    let profession = last_param(&pairs, "profession");
    let interests = state.recommender.interests(profession);

    tracing::debug!(
        profession = profession.unwrap_or("-"),
        count = interests.len(),
        "Selected interest recommendations"
    );

    Json(interests)
}
