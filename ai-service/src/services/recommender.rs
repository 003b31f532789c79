//! Recommendation source abstraction.
//!
//! Handlers only see [`RecommendationProvider`]; the shipped implementation
//! serves a fixed catalogue keyed on zip code and profession.

use crate::models::event::{DEFAULT_EVENTS, NYC_EVENTS};
use crate::models::interest::{DEFAULT_INTERESTS, SOFTWARE_INTERESTS};
use crate::models::{Event, Interest};

/// Zip code that selects the New York event list.
pub const NYC_ZIP_CODE: &str = "10001";

/// Case-sensitive marker that selects the software interest list.
pub const SOFTWARE_PROFESSION_MARKER: &str = "Software";

pub trait RecommendationProvider: Send + Sync {
    /// Events for a zip code. Never empty.
    fn events(&self, zip_code: Option<&str>) -> Vec<Event>;

    /// Interests for a profession. Never empty.
    fn interests(&self, profession: Option<&str>) -> Vec<Interest>;
}

/// Hard-coded catalogue with no external inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRecommendations;

impl StaticRecommendations {
    pub fn new() -> Self {
        Self
    }
}

impl RecommendationProvider for StaticRecommendations {
    fn events(&self, zip_code: Option<&str>) -> Vec<Event> {
        match zip_code {
            Some(NYC_ZIP_CODE) => NYC_EVENTS.to_vec(),
            _ => DEFAULT_EVENTS.to_vec(),
        }
    }

    fn interests(&self, profession: Option<&str>) -> Vec<Interest> {
        match profession {
            Some(p) if p.contains(SOFTWARE_PROFESSION_MARKER) => SOFTWARE_INTERESTS.to_vec(),
            _ => DEFAULT_INTERESTS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_ids(events: &[Event]) -> Vec<u32> {
        events.iter().map(|e| e.id).collect()
    }

    fn interest_ids(interests: &[Interest]) -> Vec<u32> {
        interests.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_nyc_zip_selects_nyc_events() {
        let events = StaticRecommendations::new().events(Some("10001"));
        assert_eq!(event_ids(&events), vec![1, 2]);
        assert_eq!(events[0].title, "Tech Meetup NYC");
        assert_eq!(events[1].title, "Afro-Tech Summit");
    }

    #[test]
    fn test_other_zip_codes_fall_back() {
        let provider = StaticRecommendations::new();
        for zip in [None, Some("99999"), Some(""), Some(" 10001"), Some("100010")] {
            assert_eq!(event_ids(&provider.events(zip)), vec![3, 4], "zip {:?}", zip);
        }
    }

    #[test]
    fn test_software_substring_selects_software_interests() {
        let provider = StaticRecommendations::new();
        for profession in ["Software Engineer", "Senior Software Developer", "Software"] {
            assert_eq!(
                interest_ids(&provider.interests(Some(profession))),
                vec![1, 2, 3],
                "profession {}",
                profession
            );
        }
    }

    #[test]
    fn test_software_match_is_case_sensitive() {
        let interests = StaticRecommendations::new().interests(Some("software engineer"));
        assert_eq!(interest_ids(&interests), vec![4, 5, 6]);
    }

    #[test]
    fn test_missing_or_unrelated_profession_falls_back() {
        let provider = StaticRecommendations::new();
        for profession in [None, Some("Nurse"), Some("")] {
            assert_eq!(interest_ids(&provider.interests(profession)), vec![4, 5, 6]);
        }
    }
}
