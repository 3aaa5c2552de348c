//! Search session: query, results and the stale-response guard.
//!
//! User edits and completed fetches can interleave: a user may change
//! the query again before an earlier fetch resolves. The displayed
//! result set must be last-write-wins, so every fetch is tagged with
//! the generation of the query snapshot it was issued for, and a result
//! is applied only while its generation is still current.

use crate::domain::Itinerary;
use crate::presenter::Pager;
use crate::query::QueryState;

/// Token tying an in-flight fetch to the query snapshot it serves.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: u64,
    query: QueryState,
}

impl FetchTicket {
    /// The query snapshot this fetch was issued for.
    pub fn query(&self) -> &QueryState {
        &self.query
    }
}

/// The single current query plus the single current result list.
///
/// Owned by the surrounding application; all operations run on one
/// logical thread, so no internal locking is needed.
#[derive(Debug, Default)]
pub struct SearchSession {
    query: QueryState,
    generation: u64,
    results: Vec<Itinerary>,
    pager: Pager,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current query.
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Edit the query. Any fetch issued before the edit becomes stale:
    /// its result will be discarded on arrival.
    pub fn edit_query(&mut self, edit: impl FnOnce(&mut QueryState)) {
        edit(&mut self.query);
        self.generation += 1;
    }

    /// Snapshot the current query into a ticket for a new fetch.
    ///
    /// Issuing a new ticket invalidates all earlier ones, so of several
    /// overlapping fetches only the latest can land.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket {
            generation: self.generation,
            query: self.query.clone(),
        }
    }

    /// Apply a completed fetch if its ticket is still current.
    ///
    /// Returns whether the result was applied. Applying replaces the
    /// result list and resets the page to 0; a stale result leaves the
    /// session untouched.
    pub fn apply(&mut self, ticket: &FetchTicket, results: Vec<Itinerary>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.results = results;
        self.pager.reset();
        true
    }

    /// The full current result list.
    pub fn results(&self) -> &[Itinerary] {
        &self.results
    }

    /// The window of results for the current page.
    pub fn current_window(&self) -> &[Itinerary] {
        self.pager.window(&self.results)
    }

    /// The current page index.
    pub fn page(&self) -> usize {
        self.pager.page()
    }

    /// Advance a page if the next window is non-empty.
    pub fn next_page(&mut self) -> bool {
        let total = self.results.len();
        self.pager.next(total)
    }

    /// Go back a page, never below 0.
    pub fn prev_page(&mut self) -> bool {
        self.pager.prev()
    }
}
