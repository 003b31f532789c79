use serde::Serialize;

/// A recommended activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: u32,
    pub title: &'static str,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: &'static str,
    pub location: &'static str,
}

/// Events suggested for the 10001 zip code.
pub static NYC_EVENTS: [Event; 2] = [
    Event {
        id: 1,
        title: "Tech Meetup NYC",
        date: "2024-11-15",
        location: "Manhattan, NY",
    },
    Event {
        id: 2,
        title: "Afro-Tech Summit",
        date: "2024-12-01",
        location: "Brooklyn, NY",
    },
];

/// Events suggested for every other zip code, or none.
pub static DEFAULT_EVENTS: [Event; 2] = [
    Event {
        id: 3,
        title: "Global Diaspora Conference",
        date: "2024-11-20",
        location: "Online",
    },
    Event {
        id: 4,
        title: "Local Cultural Festival",
        date: "2024-11-25",
        location: "City Center",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_serializes_flat() {
        let value = serde_json::to_value(NYC_EVENTS[0]).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "title": "Tech Meetup NYC",
                "date": "2024-11-15",
                "location": "Manhattan, NY"
            })
        );
    }

    #[test]
    fn test_ids_unique_within_each_list() {
        for list in [&NYC_EVENTS, &DEFAULT_EVENTS] {
            let mut ids: Vec<u32> = list.iter().map(|e| e.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), list.len());
        }
    }
}
