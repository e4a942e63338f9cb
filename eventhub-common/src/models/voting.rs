//! Voting-domain catalog records
//!
//! `RawVotingEvent` is the shape records have in the data source, where
//! `event_code`, `location`, and `vote_price` may be absent. The
//! normalizer (`crate::normalize`) turns a raw record into a fully
//! populated `VotingEvent` as it enters the catalog; nothing downstream
//! of the catalog ever sees a raw record.

use serde::{Deserialize, Serialize};

/// Lifecycle of a voting event. Exactly one value at a time; doubles as a
/// listing facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    Live,
    Upcoming,
    Ended,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Live => "Live",
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Ended => "Ended",
        }
    }
}

/// Voting event as present in the raw data source
///
/// Optional fields are absent in well-formed data, never empty strings;
/// the normalizer treats an empty `event_code` as absent anyway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawVotingEvent {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub status: EventStatus,
    pub date: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_price: Option<f64>,
    #[serde(default)]
    pub categories: Vec<VoteCategory>,
}

/// Fully populated voting event (post-normalization)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VotingEvent {
    pub id: u32,
    /// Unique human-readable code; derived from the title when the data
    /// source omits it
    pub event_code: String,
    pub title: String,
    /// Open-ended facet (Awards, Pageantry, School, ...)
    pub category: String,
    pub status: EventStatus,
    pub date: String,
    pub image: String,
    pub location: String,
    /// Price of a single vote in GHS; always positive
    pub vote_price: f64,
    pub categories: Vec<VoteCategory>,
}

impl VotingEvent {
    /// Scan this event's categories in order for a candidate.
    ///
    /// Candidate ids are unique within an event, so the first match is
    /// the only match.
    pub fn find_candidate(&self, candidate_id: &str) -> Option<&Candidate> {
        self.categories
            .iter()
            .flat_map(|category| category.candidates.iter())
            .find(|candidate| candidate.id == candidate_id)
    }
}

impl From<VotingEvent> for RawVotingEvent {
    /// A normalized event viewed as a raw record: every optional field is
    /// present. Feeding it back through the normalizer changes nothing.
    fn from(event: VotingEvent) -> Self {
        RawVotingEvent {
            id: event.id,
            title: event.title,
            category: event.category,
            status: event.status,
            date: event.date,
            image: event.image,
            event_code: Some(event.event_code),
            location: Some(event.location),
            vote_price: Some(event.vote_price),
            categories: event.categories,
        }
    }
}

/// Award category within an event. Owns its candidates exclusively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteCategory {
    pub id: String,
    pub name: String,
    pub candidates: Vec<Candidate>,
}

/// Nominee record; a leaf with no normalization rules of its own
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Unique within the owning event
    pub id: String,
    pub name: String,
    pub photo: String,
}
