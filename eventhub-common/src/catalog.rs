//! Code-keyed catalog index
//!
//! A catalog is built once, at startup, from the static data source and
//! is immutable afterwards. Source order is preserved (listings show
//! records in catalog order); code lookups go through a code → position
//! map. Lookup misses are routine outcomes, not errors.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::models::{Candidate, RawVotingEvent, TicketingEvent, VotingEvent};
use crate::normalize;

/// Record types a catalog can index
pub trait CatalogRecord {
    /// Unique human-readable code of this record
    fn event_code(&self) -> &str;
}

impl CatalogRecord for VotingEvent {
    fn event_code(&self) -> &str {
        &self.event_code
    }
}

impl CatalogRecord for TicketingEvent {
    fn event_code(&self) -> &str {
        &self.event_code
    }
}

/// Immutable, order-preserving collection of records keyed by event code
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    records: Vec<T>,
    by_code: HashMap<String, usize>,
}

impl<T: CatalogRecord> Catalog<T> {
    /// Build a catalog, rejecting duplicate event codes.
    ///
    /// Codes must be unique after normalization; a collision means the
    /// data source is broken and the process should not come up.
    pub fn new(records: Vec<T>) -> Result<Self> {
        let mut by_code = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            let code = record.event_code().to_string();
            if by_code.insert(code, position).is_some() {
                return Err(Error::DuplicateEventCode(record.event_code().to_string()));
            }
        }
        Ok(Self { records, by_code })
    }

    /// Look up a record by exact event code (case-sensitive)
    pub fn find_by_code(&self, code: &str) -> Option<&T> {
        self.by_code.get(code).map(|&position| &self.records[position])
    }

    /// Records in source order
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Catalog<VotingEvent> {
    /// Build the voting catalog, normalizing every raw record on the way
    /// in
    pub fn from_raw(raw: &[RawVotingEvent]) -> Result<Self> {
        Self::new(raw.iter().map(normalize::normalize_voting).collect())
    }

    /// Resolve an event by code, then scan its categories in order for
    /// the candidate. `None` when either level misses.
    pub fn find_candidate(
        &self,
        event_code: &str,
        candidate_id: &str,
    ) -> Option<(&VotingEvent, &Candidate)> {
        let event = self.find_by_code(event_code)?;
        let candidate = event.find_candidate(candidate_id)?;
        Some((event, candidate))
    }
}

impl Catalog<TicketingEvent> {
    /// Build the ticketing catalog.
    ///
    /// Ticketing codes come straight from the source. A record with no
    /// ticket tiers is rejected here so the "starting from" price always
    /// exists downstream.
    pub fn from_records(records: Vec<TicketingEvent>) -> Result<Self> {
        for record in &records {
            if record.ticket_types.is_empty() {
                return Err(Error::InvalidRecord {
                    code: record.event_code.clone(),
                    reason: "no ticket types".to_string(),
                });
            }
        }
        Self::new(records)
    }
}
