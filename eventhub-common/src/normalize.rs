//! Catalog normalization
//!
//! The data source may omit `event_code`, `location`, and `vote_price`.
//! Every raw record crosses through `normalize_voting` exactly once, when
//! the catalog is built, so all entry points (listing, detail, vote,
//! nominate) see the same fully populated record.
//!
//! Normalization is pure and total: any structurally valid raw record
//! yields a complete record, the input is never mutated, and re-running
//! a normalized record through is a no-op.

use crate::models::{RawVotingEvent, VotingEvent};

/// Location used when the source record has none
pub const FALLBACK_LOCATION: &str = "Accra, Ghana";

/// Vote price (GHS) used when the source record has none, or a
/// non-positive one
pub const FALLBACK_VOTE_PRICE: f64 = 1.0;

/// Derive a human-readable event code from the title and id.
///
/// First three characters of the title (the entire title when shorter),
/// upper-cased, followed by the id: "Miss Ghana" + 7 becomes "MIS7".
/// Deterministic: the same title and id always yield the same code.
pub fn derive_event_code(title: &str, id: u32) -> String {
    let prefix: String = title.chars().take(3).collect();
    format!("{}{}", prefix.to_uppercase(), id)
}

/// Normalize a raw voting event into a fully populated record.
///
/// Already-populated fields pass through unchanged; only absent (or, for
/// the price, non-positive) values fall back.
pub fn normalize_voting(raw: &RawVotingEvent) -> VotingEvent {
    let event_code = match raw.event_code.as_deref() {
        Some(code) if !code.is_empty() => code.to_string(),
        _ => derive_event_code(&raw.title, raw.id),
    };

    let location = raw
        .location
        .clone()
        .unwrap_or_else(|| FALLBACK_LOCATION.to_string());

    // One rule for the price: absent and non-positive both fall back.
    let vote_price = match raw.vote_price {
        Some(price) if price > 0.0 => price,
        _ => FALLBACK_VOTE_PRICE,
    };

    VotingEvent {
        id: raw.id,
        event_code,
        title: raw.title.clone(),
        category: raw.category.clone(),
        status: raw.status,
        date: raw.date.clone(),
        image: raw.image.clone(),
        location,
        vote_price,
        categories: raw.categories.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventStatus;

    fn raw_event() -> RawVotingEvent {
        RawVotingEvent {
            id: 7,
            title: "Miss Ghana".to_string(),
            category: "Pageantry".to_string(),
            status: EventStatus::Live,
            date: "Dec 12, 2026".to_string(),
            image: "https://images.example.com/miss-ghana.jpg".to_string(),
            event_code: None,
            location: None,
            vote_price: None,
            categories: Vec::new(),
        }
    }

    #[test]
    fn test_derive_event_code() {
        assert_eq!(derive_event_code("Miss Ghana", 7), "MIS7");
        assert_eq!(derive_event_code("ghana music awards", 1), "GHA1");
    }

    #[test]
    fn test_derive_event_code_short_title() {
        // Titles under three characters use the whole title, no padding
        assert_eq!(derive_event_code("Go", 4), "GO4");
        assert_eq!(derive_event_code("X", 9), "X9");
    }

    #[test]
    fn test_missing_event_code_is_derived() {
        let event = normalize_voting(&raw_event());
        assert_eq!(event.event_code, "MIS7");
    }

    #[test]
    fn test_present_event_code_is_preserved() {
        let mut raw = raw_event();
        raw.event_code = Some("MGH2026".to_string());
        assert_eq!(normalize_voting(&raw).event_code, "MGH2026");
    }

    #[test]
    fn test_empty_event_code_treated_as_absent() {
        let mut raw = raw_event();
        raw.event_code = Some(String::new());
        assert_eq!(normalize_voting(&raw).event_code, "MIS7");
    }

    #[test]
    fn test_location_fallback() {
        assert_eq!(normalize_voting(&raw_event()).location, FALLBACK_LOCATION);

        let mut raw = raw_event();
        raw.location = Some("Kumasi, Ghana".to_string());
        assert_eq!(normalize_voting(&raw).location, "Kumasi, Ghana");
    }

    #[test]
    fn test_vote_price_fallback_absent() {
        assert_eq!(normalize_voting(&raw_event()).vote_price, FALLBACK_VOTE_PRICE);
    }

    #[test]
    fn test_vote_price_fallback_non_positive() {
        let mut raw = raw_event();
        raw.vote_price = Some(-3.0);
        assert_eq!(normalize_voting(&raw).vote_price, FALLBACK_VOTE_PRICE);

        raw.vote_price = Some(0.0);
        assert_eq!(normalize_voting(&raw).vote_price, FALLBACK_VOTE_PRICE);
    }

    #[test]
    fn test_vote_price_preserved() {
        let mut raw = raw_event();
        raw.vote_price = Some(2.5);
        assert_eq!(normalize_voting(&raw).vote_price, 2.5);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let once = normalize_voting(&raw_event());
        let twice = normalize_voting(&RawVotingEvent::from(once.clone()));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let raw = raw_event();
        let before = raw.clone();
        let _ = normalize_voting(&raw);
        assert_eq!(raw, before);
    }
}
