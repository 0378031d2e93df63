//! List State
//!
//! Explicit state objects for fetched data. Each fetch takes a ticket; only
//! the response to the most recently issued ticket may replace what is shown.

use std::fmt;

use crate::domain::{rows, RecordId, Resource, RowView};

/// Identifies one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl fmt::Display for FetchTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic ticket source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSequence {
    issued: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }

    pub fn is_latest(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.issued
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Showing the last applied fetch
    #[default]
    Idle,
    /// The latest issued fetch has not resolved yet
    Loading,
}

/// A value replaced wholesale by the response to the latest issued fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fetched<T> {
    value: T,
    phase: Phase,
    sequence: RequestSequence,
}

impl<T> Fetched<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            phase: Phase::Idle,
            sequence: RequestSequence::default(),
        }
    }

    /// Value of the last applied fetch
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Idle/Loading -> Loading
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.phase = Phase::Loading;
        self.sequence.issue()
    }

    /// Replace the value if `ticket` is still the latest.
    ///
    /// Returns false (and changes nothing) for a stale response.
    pub fn apply(&mut self, ticket: FetchTicket, value: T) -> bool {
        if !self.sequence.is_latest(ticket) {
            return false;
        }
        self.value = value;
        self.phase = Phase::Idle;
        true
    }

    /// The fetch for `ticket` failed; keep the value that is on screen.
    pub fn abandon(&mut self, ticket: FetchTicket) -> bool {
        if !self.sequence.is_latest(ticket) {
            return false;
        }
        self.phase = Phase::Idle;
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<R> {
    records: Fetched<Vec<R>>,
}

impl<R> Default for ListState<R> {
    fn default() -> Self {
        Self {
            records: Fetched::new(Vec::new()),
        }
    }
}

impl<R: Resource> ListState<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records of the last applied fetch, in server order
    pub fn records(&self) -> &[R] {
        self.records.value()
    }

    pub fn phase(&self) -> Phase {
        self.records.phase()
    }

    pub fn is_loading(&self) -> bool {
        self.records.is_loading()
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.records().iter().any(|r| r.id() == id)
    }

    pub fn rows(&self) -> Vec<RowView> {
        rows(self.records())
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.records.begin_fetch()
    }

    pub fn apply(&mut self, ticket: FetchTicket, records: Vec<R>) -> bool {
        self.records.apply(ticket, records)
    }

    pub fn abandon(&mut self, ticket: FetchTicket) -> bool {
        self.records.abandon(ticket)
    }
}
