//! List Synchronization
//!
//! Per-entity list state plus the generic controller that keeps it in step
//! with the server by re-reading the whole collection after every write.

mod controller;
mod state;

pub use controller::{ListController, Refresh};
pub use state::{FetchTicket, Fetched, ListState, Phase, RequestSequence};
