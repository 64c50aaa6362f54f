//! Debounced search-as-you-type.
//!
//! [`SearchController`] is a sans-IO state machine: it never sleeps and never
//! performs a request. It tells its driver what to do through [`Directive`]s
//! and [`SearchRequest`]s, and the driver reports back with
//! [`SearchController::complete`]. Two drivers exist: the tokio
//! [`session`] below and the browser driver in the landing crate.
//!
//! Ordering rests on tickets. Every schedulable keystroke mints a [`Ticket`]
//! with a fresh sequence number, only the newest pending ticket may fire,
//! and only the newest fired ticket may write results. A slow response for
//! an older query is dropped on arrival instead of overwriting newer results.

#[cfg(feature = "runtime")]
pub mod session;

use std::time::Duration;

use tracing::debug;

use crate::catalog::CarSummary;
use crate::config::SearchSettings;

/// Identity of one scheduled search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Monotonic sequence number, starting at 1.
    pub fn seq(self) -> u64 {
        self.0
    }
}

/// What the driver must do with its debounce timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directive {
    /// Cancel the pending timer, if any. Nothing is scheduled.
    Cancel,
    /// Cancel the pending timer, then call [`SearchController::fire`] with
    /// this ticket once the delay has passed without further input.
    Schedule(Ticket, Duration),
}

/// A request the driver must perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    /// Pass back to [`SearchController::complete`]
    pub ticket: Ticket,
    /// Query text at the moment the timer fired
    pub query: String,
}

/// Everything the search widget renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchView {
    /// Input value, updated on every keystroke
    pub query: String,
    /// Rows of the latest applied search
    pub results: Vec<CarSummary>,
    /// Spinner state
    pub searching: bool,
    /// Results panel visibility
    pub panel_open: bool,
}

/// Debounce and ordering state for the search widget.
#[derive(Clone, Debug)]
pub struct SearchController {
    settings: SearchSettings,
    view: SearchView,
    last_seq: u64,
    pending: Option<Ticket>,
    issued: Option<Ticket>,
}

impl SearchController {
    /// Fresh controller with an empty query.
    pub fn new(settings: SearchSettings) -> Self {
        Self {
            settings,
            view: SearchView::default(),
            last_seq: 0,
            pending: None,
            issued: None,
        }
    }

    /// Record a keystroke.
    ///
    /// The query is stored immediately. Short queries reset the widget
    /// synchronously; anything else arms a fresh debounce ticket.
    pub fn input(&mut self, raw: impl Into<String>) -> Directive {
        self.view.query = raw.into();

        if !self.is_searchable() {
            self.reset();
            return Directive::Cancel;
        }

        self.last_seq += 1;
        let ticket = Ticket(self.last_seq);
        self.pending = Some(ticket);
        self.view.searching = true;
        debug!(seq = ticket.seq(), query = %self.view.query, "search scheduled");
        Directive::Schedule(ticket, self.settings.quiet_interval)
    }

    /// The debounce timer for `ticket` elapsed.
    ///
    /// Returns the request to perform, or `None` if the ticket was superseded
    /// or cleared in the meantime.
    pub fn fire(&mut self, ticket: Ticket) -> Option<SearchRequest> {
        if self.pending != Some(ticket) {
            debug!(seq = ticket.seq(), "superseded timer ignored");
            return None;
        }
        self.pending = None;
        self.issued = Some(ticket);
        debug!(seq = ticket.seq(), query = %self.view.query, "search issued");
        Some(SearchRequest {
            ticket,
            query: self.view.query.clone(),
        })
    }

    /// A request finished. Returns whether its results were applied.
    pub fn complete(&mut self, ticket: Ticket, results: Vec<CarSummary>) -> bool {
        if self.issued != Some(ticket) {
            debug!(seq = ticket.seq(), "stale response dropped");
            return false;
        }
        self.issued = None;
        self.view.results = results;
        self.view.panel_open = true;
        self.view.searching = self.pending.is_some();
        true
    }

    /// The user picked a result.
    ///
    /// Returns the chosen row for whoever handles navigation; the widget is
    /// cleared either way.
    pub fn select(&mut self, id: &str) -> (Option<CarSummary>, Directive) {
        let chosen = self.view.results.iter().find(|car| car.id == id).cloned();
        (chosen, self.clear())
    }

    /// Empty the query and hide the panel.
    pub fn clear(&mut self) -> Directive {
        self.view.query.clear();
        self.reset();
        Directive::Cancel
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> SearchView {
        self.view.clone()
    }

    /// Current input value.
    pub fn query(&self) -> &str {
        &self.view.query
    }

    /// Whether a search is scheduled but has not fired.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Controller tuning.
    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    fn is_searchable(&self) -> bool {
        self.view.query.trim().chars().count() >= self.settings.min_query_len
    }

    fn reset(&mut self) {
        self.pending = None;
        self.issued = None;
        self.view.results.clear();
        self.view.panel_open = false;
        self.view.searching = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::static_candidates;
    use pretty_assertions::assert_eq;

    fn controller() -> SearchController {
        SearchController::new(SearchSettings::default())
    }

    fn scheduled(directive: Directive) -> Ticket {
        match directive {
            Directive::Schedule(ticket, _) => ticket,
            Directive::Cancel => panic!("expected a scheduled search"),
        }
    }

    #[test]
    fn short_queries_never_schedule() {
        let mut search = controller();
        for raw in ["", "a", " a ", "\t\n", "  é  "] {
            assert_eq!(search.input(raw), Directive::Cancel, "query {raw:?}");
            let view = search.view();
            assert_eq!(view.query, raw);
            assert!(!view.searching);
            assert!(!view.panel_open);
            assert!(view.results.is_empty());
        }
        assert!(!search.has_pending());
    }

    #[test]
    fn searchable_query_arms_quiet_interval() {
        let mut search = controller();
        let directive = search.input("fe");
        assert_eq!(
            directive,
            Directive::Schedule(Ticket(1), Duration::from_millis(300))
        );
        assert!(search.view().searching);
        assert!(search.has_pending());
    }

    #[test]
    fn only_the_newest_ticket_fires() {
        let mut search = controller();
        let first = scheduled(search.input("fe"));
        let second = scheduled(search.input("fer"));
        assert!(second > first);

        assert_eq!(search.fire(first), None);
        let request = search.fire(second).expect("newest ticket fires");
        assert_eq!(request.query, "fer");
        assert_eq!(search.fire(second), None, "a ticket fires once");
    }

    #[test]
    fn fired_query_is_the_current_text_verbatim() {
        let mut search = controller();
        let ticket = scheduled(search.input("  Porsche 911 "));
        assert_eq!(search.fire(ticket).unwrap().query, "  Porsche 911 ");
    }

    #[test]
    fn completion_opens_panel_with_results() {
        let mut search = controller();
        let ticket = scheduled(search.input("porsche"));
        search.fire(ticket);

        let rows = static_candidates();
        assert!(search.complete(ticket, rows.clone()));

        let view = search.view();
        assert_eq!(view.results, rows);
        assert!(view.panel_open);
        assert!(!view.searching);
    }

    #[test]
    fn later_request_wins_a_race() {
        let mut search = controller();
        let older = scheduled(search.input("fer"));
        search.fire(older);
        let newer = scheduled(search.input("ferrari"));
        search.fire(newer);

        let newer_rows = vec![static_candidates().remove(0)];
        assert!(search.complete(newer, newer_rows.clone()));
        assert!(!search.complete(older, static_candidates()));
        assert_eq!(search.view().results, newer_rows);
    }

    #[test]
    fn response_before_newer_fire_keeps_spinner() {
        let mut search = controller();
        let older = scheduled(search.input("bug"));
        search.fire(older);
        scheduled(search.input("bugatti"));

        assert!(search.complete(older, static_candidates()));
        let view = search.view();
        assert!(view.panel_open);
        assert!(view.searching, "a newer search is still pending");
    }

    #[test]
    fn shortening_the_query_discards_in_flight_response() {
        let mut search = controller();
        let ticket = scheduled(search.input("mc"));
        search.fire(ticket);
        search.input("m");

        assert!(!search.complete(ticket, static_candidates()));
        let view = search.view();
        assert!(!view.panel_open);
        assert!(view.results.is_empty());
    }

    #[test]
    fn select_returns_row_and_clears() {
        let mut search = controller();
        let ticket = scheduled(search.input("por"));
        search.fire(ticket);
        search.complete(ticket, static_candidates());

        let (chosen, directive) = search.select("2");
        assert_eq!(chosen.map(|c| c.name), Some("Porsche 911 GT3 RS".to_string()));
        assert_eq!(directive, Directive::Cancel);
        assert_eq!(search.view(), SearchView::default());
    }

    #[test]
    fn select_unknown_id_still_clears() {
        let mut search = controller();
        search.input("lambo");
        let (chosen, _) = search.select("nope");
        assert_eq!(chosen, None);
        assert_eq!(search.query(), "");
        assert!(!search.has_pending());
    }

    #[test]
    fn clear_cancels_pending_timer() {
        let mut search = controller();
        let ticket = scheduled(search.input("chiron"));
        assert_eq!(search.clear(), Directive::Cancel);
        assert_eq!(search.fire(ticket), None);
        assert!(!search.view().searching);
    }

    #[test]
    fn threshold_follows_settings() {
        let mut search = SearchController::new(SearchSettings {
            min_query_len: 4,
            quiet_interval: Duration::from_millis(50),
        });
        assert_eq!(search.input("gt-"), Directive::Cancel);
        assert_eq!(
            search.input("gt-r"),
            Directive::Schedule(Ticket(1), Duration::from_millis(50))
        );
    }
}
