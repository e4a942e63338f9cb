//! Static catalog data source
//!
//! The catalogs ship as JSON datasets embedded in the binary; a
//! deployment can override either file from a data directory. Raw voting
//! records are normalized exactly once, here, as they enter the catalog.
//! The loaders return snapshots for the caller to own and thread through
//! explicitly; there is no process-wide catalog state.

use std::path::Path;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{RawVotingEvent, TicketingEvent, VotingEvent};

/// Embedded voting-events dataset
pub const VOTING_EVENTS_JSON: &str = include_str!("../data/voting_events.json");

/// Embedded ticketing-events dataset
pub const TICKETING_EVENTS_JSON: &str = include_str!("../data/ticketing_events.json");

/// File name expected inside a data directory for the voting catalog
pub const VOTING_EVENTS_FILE: &str = "voting_events.json";

/// File name expected inside a data directory for the ticketing catalog
pub const TICKETING_EVENTS_FILE: &str = "ticketing_events.json";

/// Parse and normalize a voting catalog from JSON text
pub fn voting_catalog_from_str(json: &str) -> Result<Catalog<VotingEvent>> {
    let raw: Vec<RawVotingEvent> = serde_json::from_str(json)?;
    Catalog::from_raw(&raw)
}

/// Parse a ticketing catalog from JSON text
pub fn ticketing_catalog_from_str(json: &str) -> Result<Catalog<TicketingEvent>> {
    let records: Vec<TicketingEvent> = serde_json::from_str(json)?;
    Catalog::from_records(records)
}

/// The embedded voting catalog
pub fn default_voting_catalog() -> Result<Catalog<VotingEvent>> {
    voting_catalog_from_str(VOTING_EVENTS_JSON)
}

/// The embedded ticketing catalog
pub fn default_ticketing_catalog() -> Result<Catalog<TicketingEvent>> {
    ticketing_catalog_from_str(TICKETING_EVENTS_JSON)
}

/// Load the voting catalog from `<dir>/voting_events.json`
pub fn voting_catalog_from_dir(dir: &Path) -> Result<Catalog<VotingEvent>> {
    let text = std::fs::read_to_string(dir.join(VOTING_EVENTS_FILE))?;
    voting_catalog_from_str(&text)
}

/// Load the ticketing catalog from `<dir>/ticketing_events.json`
pub fn ticketing_catalog_from_dir(dir: &Path) -> Result<Catalog<TicketingEvent>> {
    let text = std::fs::read_to_string(dir.join(TICKETING_EVENTS_FILE))?;
    ticketing_catalog_from_str(&text)
}

/// Load both catalogs: from a data directory when one is given, else the
/// embedded datasets
pub fn load_catalogs(
    data_dir: Option<&Path>,
) -> Result<(Catalog<VotingEvent>, Catalog<TicketingEvent>)> {
    match data_dir {
        Some(dir) => Ok((voting_catalog_from_dir(dir)?, ticketing_catalog_from_dir(dir)?)),
        None => Ok((default_voting_catalog()?, default_ticketing_catalog()?)),
    }
}
