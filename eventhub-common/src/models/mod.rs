//! Catalog record models

pub mod ticketing;
pub mod voting;

pub use ticketing::{TicketType, TicketingEvent};
pub use voting::{Candidate, EventStatus, RawVotingEvent, VoteCategory, VotingEvent};
