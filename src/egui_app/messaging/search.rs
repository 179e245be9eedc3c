//! User Search Engine
//!
//! Debounced, page-accumulating search over the user directory, used
//! when starting a new conversation. Keystrokes arm a deadline checked
//! once per frame; the fetch for a page is tagged with the term it was
//! issued for, and responses for a superseded term are discarded rather
//! than overwriting newer results.

use std::sync::mpsc::{channel, Receiver};
use std::time::{Duration, Instant};

use crate::egui_app::api::DirectoryApi;
use crate::egui_app::config::Config;
use crate::shared::model::{Contact, Session};
use crate::shared::ApiError;

/// Quiet time before an edited query is dispatched
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Queries shorter than this never hit the network
pub const MIN_QUERY_LEN: usize = 2;

/// What the results panel should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Blank query; show the available-contacts partition instead
    Idle,
    /// Query too short to search
    TooShort,
    /// A fetch is pending or the debounce is still running
    Searching,
    /// The search ran and found nothing
    NoResults,
    /// Results are available
    Ready,
}

struct InFlight {
    term: String,
    page: u32,
    limit: u32,
    rx: Receiver<Result<Vec<Contact>, ApiError>>,
}

/// Debounced incremental search state
pub struct UserSearch {
    pub query: String,
    results: Vec<Contact>,
    page: u32,
    has_more: bool,
    /// Term the accumulated results belong to; `None` until a page has
    /// been applied, which distinguishes "not searched yet" from
    /// "searched, found nothing"
    searched_term: Option<String>,
    debounce_deadline: Option<Instant>,
    in_flight: Option<InFlight>,
}

impl Default for UserSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl UserSearch {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            page: 1,
            has_more: false,
            searched_term: None,
            debounce_deadline: None,
            in_flight: None,
        }
    }

    pub fn results(&self) -> &[Contact] {
        &self.results
    }

    fn term(&self) -> &str {
        self.query.trim()
    }

    /// Drop everything: query, results, timers, in-flight request.
    /// Used when a conversation is opened or the panel is closed.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Keystroke hook; `now` is injected for testability
    pub fn note_edited(&mut self, now: Instant) {
        let term = self.term();
        if term.is_empty() {
            // Blank bypasses the network entirely.
            self.results.clear();
            self.has_more = false;
            self.searched_term = None;
            self.debounce_deadline = None;
            self.in_flight = None;
            return;
        }
        if term.chars().count() < MIN_QUERY_LEN {
            self.results.clear();
            self.has_more = false;
            self.searched_term = None;
            self.debounce_deadline = None;
            return;
        }
        self.debounce_deadline = Some(now + DEBOUNCE);
    }

    /// If the debounce has expired, consume it and return the page-1
    /// dispatch for the current term.
    pub fn take_due_dispatch(&mut self, now: Instant) -> Option<(String, u32)> {
        let deadline = self.debounce_deadline?;
        if now < deadline {
            return None;
        }
        self.debounce_deadline = None;
        self.page = 1;
        Some((self.term().to_string(), 1))
    }

    /// Dispatch for the next page, when the scroll sentinel became
    /// visible. Only while more pages may exist, the term is searchable
    /// and nothing else is pending.
    pub fn next_page_dispatch(&mut self) -> Option<(String, u32)> {
        if !self.has_more
            || self.in_flight.is_some()
            || self.debounce_deadline.is_some()
            || self.term().chars().count() < MIN_QUERY_LEN
        {
            return None;
        }
        Some((self.term().to_string(), self.page + 1))
    }

    /// Apply a finished page. Responses for a superseded term are
    /// discarded; page 1 replaces the accumulated results, later pages
    /// append. A page shorter than `limit` marks the term exhausted.
    pub fn apply(&mut self, term: &str, page: u32, limit: u32, result: Result<Vec<Contact>, ApiError>) {
        if term != self.term() {
            tracing::debug!("discarding stale search page for '{}'", term);
            return;
        }
        match result {
            Ok(contacts) => {
                self.has_more = contacts.len() as u32 == limit;
                if page == 1 {
                    self.results = contacts;
                } else {
                    self.results.extend(contacts);
                }
                self.page = page;
                self.searched_term = Some(term.to_string());
            }
            Err(e) => {
                tracing::warn!("user search failed for '{}': {}", term, e);
                // Stop the sentinel from hammering a failing backend;
                // the next keystroke starts over.
                self.has_more = false;
            }
        }
    }

    /// What the results panel should render right now
    pub fn status(&self) -> SearchStatus {
        let term = self.term();
        if term.is_empty() {
            return SearchStatus::Idle;
        }
        if term.chars().count() < MIN_QUERY_LEN {
            return SearchStatus::TooShort;
        }
        if !self.results.is_empty() {
            return SearchStatus::Ready;
        }
        if self.in_flight.is_some() || self.debounce_deadline.is_some() {
            return SearchStatus::Searching;
        }
        if self.searched_term.as_deref() == Some(term) {
            return SearchStatus::NoResults;
        }
        SearchStatus::Searching
    }

    /// Frame hook: fire a due debounce and collect any finished page
    pub fn tick(&mut self, config: &Config, session: &Session, now: Instant) {
        if let Some((term, page)) = self.take_due_dispatch(now) {
            self.dispatch(config, session, term, page);
        }
        self.poll();
    }

    /// Scroll-sentinel hook
    pub fn request_next_page(&mut self, config: &Config, session: &Session) {
        if let Some((term, page)) = self.next_page_dispatch() {
            self.dispatch(config, session, term, page);
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether the sentinel should be rendered at all
    pub fn may_have_more(&self) -> bool {
        self.has_more
    }

    fn dispatch(&mut self, config: &Config, session: &Session, term: String, page: u32) {
        let limit = config.search_page_size();
        let (tx, rx) = channel();
        {
            let config = config.clone();
            let session = session.clone();
            let term = term.clone();
            std::thread::spawn(move || {
                let api = DirectoryApi::new(config);
                let _ = tx.send(api.search(&session, &term, page, limit));
            });
        }
        // Overwriting a previous in-flight request drops its receiver;
        // the late response then has nowhere to land.
        self.in_flight = Some(InFlight { term, page, limit, rx });
    }

    fn poll(&mut self) {
        let result = match &self.in_flight {
            Some(fl) => match fl.rx.try_recv() {
                Ok(result) => result,
                Err(_) => return,
            },
            None => return,
        };
        if let Some(InFlight { term, page, limit, .. }) = self.in_flight.take() {
            self.apply(&term, page, limit, result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::model::Role;

    const LIMIT: u32 = 10;

    fn contacts(count: usize) -> Vec<Contact> {
        (0..count)
            .map(|i| Contact {
                id: i as i64,
                name: format!("User {}", i),
                role: Role::Student,
            })
            .collect()
    }

    fn t0() -> Instant {
        Instant::now()
    }

    #[test]
    fn test_debounce_collapses_rapid_edits_into_one_dispatch() {
        let mut search = UserSearch::new();
        let start = t0();

        search.query = "a".to_string();
        search.note_edited(start);
        search.query = "ab".to_string();
        search.note_edited(start + Duration::from_millis(100));
        search.query = "abc".to_string();
        search.note_edited(start + Duration::from_millis(200));

        // Deadline tracks the last keystroke.
        assert!(search.take_due_dispatch(start + Duration::from_millis(400)).is_none());

        let dispatch = search.take_due_dispatch(start + Duration::from_millis(501));
        assert_eq!(dispatch, Some(("abc".to_string(), 1)));

        // Consumed; nothing further fires.
        assert!(search.take_due_dispatch(start + Duration::from_millis(600)).is_none());
    }

    #[test]
    fn test_single_char_query_never_arms_the_debounce() {
        let mut search = UserSearch::new();
        search.query = "a".to_string();
        search.note_edited(t0());
        assert!(search.take_due_dispatch(t0() + Duration::from_secs(1)).is_none());
        assert_eq!(search.status(), SearchStatus::TooShort);
    }

    #[test]
    fn test_blank_query_clears_results_without_network() {
        let mut search = UserSearch::new();
        search.query = "ana".to_string();
        search.note_edited(t0());
        search.apply("ana", 1, LIMIT, Ok(contacts(10)));
        assert_eq!(search.results().len(), 10);

        search.query = "   ".to_string();
        search.note_edited(t0());
        assert!(search.results().is_empty());
        assert!(!search.may_have_more());
        assert_eq!(search.status(), SearchStatus::Idle);
        assert!(search.take_due_dispatch(t0() + Duration::from_secs(1)).is_none());
    }

    #[test]
    fn test_stale_page_for_superseded_term_is_discarded() {
        let mut search = UserSearch::new();
        search.query = "ana".to_string();

        // A page issued for an earlier term lands after the query moved on.
        search.apply("an", 1, LIMIT, Ok(contacts(10)));
        assert!(search.results().is_empty());

        search.apply("ana", 1, LIMIT, Ok(contacts(3)));
        assert_eq!(search.results().len(), 3);
    }

    #[test]
    fn test_full_page_keeps_paging_short_page_exhausts() {
        let mut search = UserSearch::new();
        search.query = "ana".to_string();

        search.apply("ana", 1, LIMIT, Ok(contacts(10)));
        assert!(search.may_have_more());
        assert_eq!(search.next_page_dispatch(), Some(("ana".to_string(), 2)));

        search.apply("ana", 2, LIMIT, Ok(contacts(3)));
        assert_eq!(search.results().len(), 13);
        assert!(!search.may_have_more());
        assert!(search.next_page_dispatch().is_none());
    }

    #[test]
    fn test_empty_page_exhausts() {
        let mut search = UserSearch::new();
        search.query = "zz".to_string();
        search.apply("zz", 1, LIMIT, Ok(vec![]));
        assert!(!search.may_have_more());
        assert_eq!(search.status(), SearchStatus::NoResults);
    }

    #[test]
    fn test_page_one_replaces_accumulated_results() {
        let mut search = UserSearch::new();
        search.query = "ana".to_string();
        search.apply("ana", 1, LIMIT, Ok(contacts(10)));
        search.apply("ana", 2, LIMIT, Ok(contacts(10)));
        assert_eq!(search.results().len(), 20);

        // A re-search of the same term starts the accumulation over.
        search.apply("ana", 1, LIMIT, Ok(contacts(4)));
        assert_eq!(search.results().len(), 4);
    }

    #[test]
    fn test_next_page_suppressed_while_debounce_armed() {
        let mut search = UserSearch::new();
        search.query = "ana".to_string();
        search.apply("ana", 1, LIMIT, Ok(contacts(10)));

        search.query = "anab".to_string();
        search.note_edited(t0());
        assert!(search.next_page_dispatch().is_none());
    }

    #[test]
    fn test_fetch_error_stops_the_sentinel() {
        let mut search = UserSearch::new();
        search.query = "ana".to_string();
        search.apply("ana", 1, LIMIT, Ok(contacts(10)));
        assert!(search.may_have_more());

        search.apply("ana", 2, LIMIT, Err(ApiError::network("down")));
        assert!(!search.may_have_more());
        // Accumulated results survive the failure.
        assert_eq!(search.results().len(), 10);
    }

    #[test]
    fn test_status_transitions() {
        let mut search = UserSearch::new();
        assert_eq!(search.status(), SearchStatus::Idle);

        search.query = "an".to_string();
        search.note_edited(t0());
        assert_eq!(search.status(), SearchStatus::Searching);

        search.take_due_dispatch(t0() + Duration::from_secs(1));
        search.apply("an", 1, LIMIT, Ok(contacts(2)));
        assert_eq!(search.status(), SearchStatus::Ready);
    }
}
