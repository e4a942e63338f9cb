//! Ticketing-domain catalog records
//!
//! Structurally parallel to the voting domain but an independent catalog:
//! event codes are assigned in the data source (never derived) and the
//! only listing facet is `category`.

use serde::{Deserialize, Serialize};

/// Ticketed event (concerts, sports, theater)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketingEvent {
    pub id: u32,
    /// Unique human-readable code, present in the data source
    pub event_code: String,
    pub title: String,
    /// Open-ended facet (Concerts, Sports, Theater, ...)
    pub category: String,
    pub venue: String,
    pub date: String,
    pub image: String,
    /// Absent descriptions fall back to a placeholder at render time,
    /// not here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered tiers; the first entry is the "starting from" price shown
    /// by listings. Never empty once a catalog accepts the record.
    pub ticket_types: Vec<TicketType>,
}

impl TicketingEvent {
    /// Listing price ("starting from"): the first ticket tier's price
    pub fn starting_price(&self) -> Option<f64> {
        self.ticket_types.first().map(|tier| tier.price)
    }

    /// Find a tier by name (case-sensitive)
    pub fn ticket_type(&self, name: &str) -> Option<&TicketType> {
        self.ticket_types.iter().find(|tier| tier.name == name)
    }
}

/// Ticket tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketType {
    pub name: String,
    /// Price in GHS
    pub price: f64,
}
