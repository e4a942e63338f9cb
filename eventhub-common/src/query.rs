//! Listing query engine
//!
//! Free-text search plus categorical facets, combined with logical AND.
//! The filter is stable: matches come back in catalog order and the input
//! is never mutated. Which fields participate in text search and which
//! facets a record exposes differ per domain and are supplied through
//! `Queryable` rather than hard-coded per listing.

use serde::Deserialize;

use crate::models::{TicketingEvent, VotingEvent};

/// Facet sentinel meaning "no restriction"
pub const ALL: &str = "All";

/// Filter specification for listing pages.
///
/// Deserializes directly from a listing URL's query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterSpec {
    /// Free-text query; empty or absent matches everything
    pub q: Option<String>,
    /// Status facet; `"All"` or absent disables it
    pub status: Option<String>,
    /// Category facet; `"All"` or absent disables it
    pub category: Option<String>,
}

/// Record types the query engine can filter
pub trait Queryable {
    /// Fields participating in free-text search
    fn search_text(&self) -> [&str; 2];

    /// Status facet value, for domains that have one
    fn status(&self) -> Option<&str> {
        None
    }

    /// Category facet value
    fn category(&self) -> &str;
}

impl Queryable for VotingEvent {
    fn search_text(&self) -> [&str; 2] {
        [&self.title, &self.event_code]
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn category(&self) -> &str {
        &self.category
    }
}

impl Queryable for TicketingEvent {
    // No status facet in the ticketing domain: an enabled status
    // constraint never matches a ticketing record.
    fn search_text(&self) -> [&str; 2] {
        [&self.title, &self.venue]
    }

    fn category(&self) -> &str {
        &self.category
    }
}

/// Filter records against a spec, preserving input order.
///
/// Every enabled predicate must hold. No matches yields an empty vector,
/// not an error; the caller renders the empty state.
pub fn filter<'a, T: Queryable>(records: &'a [T], spec: &FilterSpec) -> Vec<&'a T> {
    let needle = spec
        .q
        .as_deref()
        .map(str::to_lowercase)
        .filter(|q| !q.is_empty());

    records
        .iter()
        .filter(|record| {
            let matches_text = match &needle {
                None => true,
                Some(needle) => record
                    .search_text()
                    .iter()
                    .any(|field| field.to_lowercase().contains(needle.as_str())),
            };

            matches_text
                && facet_matches(spec.status.as_deref(), record.status())
                && facet_matches(spec.category.as_deref(), Some(record.category()))
        })
        .collect()
}

/// A facet constraint passes when disabled (`None` or `"All"`) or when
/// the record's value is an exact match.
fn facet_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(value) if value == ALL => true,
        Some(value) => actual == Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventStatus, TicketType};

    fn voting_event(code: &str, title: &str, status: EventStatus, category: &str) -> VotingEvent {
        VotingEvent {
            id: 1,
            event_code: code.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            status,
            date: "Jan 10, 2026".to_string(),
            image: "https://images.example.com/event.jpg".to_string(),
            location: "Accra, Ghana".to_string(),
            vote_price: 1.0,
            categories: Vec::new(),
        }
    }

    fn sample_catalog() -> Vec<VotingEvent> {
        vec![
            voting_event("MIS7", "Miss Ghana", EventStatus::Live, "Pageantry"),
            voting_event("BTA2", "Best Teacher", EventStatus::Ended, "Awards"),
        ]
    }

    fn spec(q: &str, status: &str, category: &str) -> FilterSpec {
        FilterSpec {
            q: Some(q.to_string()),
            status: Some(status.to_string()),
            category: Some(category.to_string()),
        }
    }

    #[test]
    fn test_text_match_with_open_facets() {
        let events = sample_catalog();
        let result = filter(&events, &spec("miss", "All", "All"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Miss Ghana");
    }

    #[test]
    fn test_status_facet_alone() {
        let events = sample_catalog();
        let result = filter(&events, &spec("", "Ended", "All"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Best Teacher");
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let events = sample_catalog();
        // Live AND Awards matches neither record
        assert!(filter(&events, &spec("", "Live", "Awards")).is_empty());
    }

    #[test]
    fn test_empty_spec_matches_everything() {
        let events = sample_catalog();
        assert_eq!(filter(&events, &FilterSpec::default()).len(), 2);
    }

    #[test]
    fn test_text_matches_event_code_case_insensitively() {
        let events = sample_catalog();
        let result = filter(&events, &spec("mis7", "All", "All"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].event_code, "MIS7");
    }

    #[test]
    fn test_matches_keep_catalog_order() {
        let events = vec![
            voting_event("ZEB9", "Zebra Awards", EventStatus::Live, "Awards"),
            voting_event("AAR1", "Aardvark Awards", EventStatus::Live, "Awards"),
            voting_event("MIS7", "Miss Ghana", EventStatus::Live, "Pageantry"),
        ];
        let result = filter(&events, &spec("awards", "All", "All"));
        let codes: Vec<&str> = result.iter().map(|e| e.event_code.as_str()).collect();
        assert_eq!(codes, vec!["ZEB9", "AAR1"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let events = sample_catalog();
        let before = events.clone();
        let _ = filter(&events, &spec("miss", "Live", "Pageantry"));
        assert_eq!(events, before);
    }

    fn ticketing_event(code: &str, title: &str, venue: &str, category: &str) -> TicketingEvent {
        TicketingEvent {
            id: 1,
            event_code: code.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            venue: venue.to_string(),
            date: "Feb 21, 2026".to_string(),
            image: "https://images.example.com/event.jpg".to_string(),
            description: None,
            ticket_types: vec![TicketType { name: "Regular".to_string(), price: 50.0 }],
        }
    }

    #[test]
    fn test_ticketing_text_matches_venue() {
        let events = vec![
            ticketing_event("ADF1", "Accra December Fest", "El Wak Stadium, Accra", "Concerts"),
            ticketing_event("GPL2", "Premier League Final", "Baba Yara Stadium, Kumasi", "Sports"),
        ];
        let result = filter(&events, &spec("kumasi", "All", "All"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].event_code, "GPL2");
    }

    #[test]
    fn test_ticketing_category_facet() {
        let events = vec![
            ticketing_event("ADF1", "Accra December Fest", "El Wak Stadium, Accra", "Concerts"),
            ticketing_event("GPL2", "Premier League Final", "Baba Yara Stadium, Kumasi", "Sports"),
        ];
        let result = filter(&events, &spec("", "All", "Sports"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Premier League Final");
    }

    #[test]
    fn test_ticketing_never_matches_enabled_status() {
        let events = vec![ticketing_event(
            "ADF1",
            "Accra December Fest",
            "El Wak Stadium, Accra",
            "Concerts",
        )];
        assert!(filter(&events, &spec("", "Live", "All")).is_empty());
    }
}
