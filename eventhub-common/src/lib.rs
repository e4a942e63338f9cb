//! # EventHub Common Library
//!
//! Shared core for the EventHub services including:
//! - Catalog record models (voting and ticketing domains)
//! - Normalization of raw catalog records
//! - Code-keyed catalog index with nested candidate lookup
//! - Listing query engine (free text + facets)
//! - Transaction reference type
//! - Configuration loading
//! - Embedded catalog datasets

pub mod catalog;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod normalize;
pub mod query;
pub mod reference;

pub use catalog::{Catalog, CatalogRecord};
pub use error::{Error, Result};
pub use models::{
    Candidate, EventStatus, RawVotingEvent, TicketType, TicketingEvent, VoteCategory, VotingEvent,
};
pub use query::{FilterSpec, Queryable};
pub use reference::TransactionRef;
