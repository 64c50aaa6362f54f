//! Tokio driver for [`SearchController`].
//!
//! One task, one event loop: keystrokes come in over a channel, the single
//! debounce timer and every in-flight request are polled from the same
//! `select!`, and the rendered [`SearchView`] goes out on a `watch` channel.
//! Nothing is spawned per request, so dropping the session drops the timer
//! and every outstanding request with it.
//!
//! Backend futures need not be `Send`; run the session on a `LocalSet`
//! (or any current-thread executor).

use std::future::pending;
use std::pin::Pin;
use std::rc::Rc;

use futures::StreamExt;
use futures::future::{FutureExt, LocalBoxFuture};
use futures::stream::FuturesUnordered;
use tokio::sync::{mpsc, watch};
use tokio::time::{Sleep, sleep};
use tracing::{debug, info};

use crate::backend::{DegradingBackend, Resolved, SearchBackend};
use crate::catalog::CarSummary;
use crate::config::SearchSettings;

use super::{Directive, SearchController, SearchRequest, SearchView, Ticket};

/// Input to a running session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchEvent {
    /// New input value (one per keystroke)
    Input(String),
    /// Result row with this id was picked
    Select(String),
    /// Clear button
    Clear,
}

type InFlight = LocalBoxFuture<'static, (Ticket, Resolved<Vec<CarSummary>>)>;

/// The event loop. Obtain with [`SearchSession::new`], then `.run().await`.
pub struct SearchSession<B> {
    controller: SearchController,
    backend: Rc<DegradingBackend<B>>,
    events: mpsc::UnboundedReceiver<SearchEvent>,
    view: watch::Sender<SearchView>,
    selections: mpsc::UnboundedSender<CarSummary>,
}

/// Caller side of a [`SearchSession`]. Dropping every handle stops the session.
pub struct SessionHandle {
    events: mpsc::UnboundedSender<SearchEvent>,
    view: watch::Receiver<SearchView>,
    selections: mpsc::UnboundedReceiver<CarSummary>,
}

impl<B: SearchBackend + 'static> SearchSession<B> {
    /// Create a session and its handle.
    pub fn new(backend: DegradingBackend<B>, settings: SearchSettings) -> (Self, SessionHandle) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (view_tx, view_rx) = watch::channel(SearchView::default());
        let (selections_tx, selections_rx) = mpsc::unbounded_channel();

        let session = Self {
            controller: SearchController::new(settings),
            backend: Rc::new(backend),
            events: events_rx,
            view: view_tx,
            selections: selections_tx,
        };
        let handle = SessionHandle {
            events: events_tx,
            view: view_rx,
            selections: selections_rx,
        };
        (session, handle)
    }

    /// Drive the session until every handle is gone.
    pub async fn run(mut self) {
        let mut debounce: Option<(Ticket, Pin<Box<Sleep>>)> = None;
        let mut in_flight: FuturesUnordered<InFlight> = FuturesUnordered::new();

        loop {
            tokio::select! {
                event = self.events.recv() => {
                    let Some(event) = event else { break };
                    // Whatever the directive, the previous timer is gone.
                    debounce = match self.handle(event) {
                        Directive::Cancel => None,
                        Directive::Schedule(ticket, delay) => Some((ticket, Box::pin(sleep(delay)))),
                    };
                    self.publish();
                }
                ticket = expire(&mut debounce) => {
                    debounce = None;
                    if let Some(request) = self.controller.fire(ticket) {
                        in_flight.push(self.request(request));
                    }
                }
                Some((ticket, resolved)) = in_flight.next(), if !in_flight.is_empty() => {
                    if self.controller.complete(ticket, resolved.items) {
                        self.publish();
                    }
                }
            }
        }

        debug!(abandoned = in_flight.len(), "search session closed");
    }

    fn handle(&mut self, event: SearchEvent) -> Directive {
        match event {
            SearchEvent::Input(raw) => self.controller.input(raw),
            SearchEvent::Clear => self.controller.clear(),
            SearchEvent::Select(id) => {
                let (chosen, directive) = self.controller.select(&id);
                if let Some(car) = chosen {
                    info!(id = %car.id, name = %car.name, "car selected");
                    // Nobody listening for selections is fine.
                    let _ = self.selections.send(car);
                }
                directive
            }
        }
    }

    fn request(&self, request: SearchRequest) -> InFlight {
        let backend = Rc::clone(&self.backend);
        async move {
            let resolved = backend.search(&request.query).await;
            (request.ticket, resolved)
        }
        .boxed_local()
    }

    fn publish(&self) {
        self.view.send_replace(self.controller.view());
    }
}

/// Resolves when the armed timer elapses; never resolves when disarmed.
async fn expire(debounce: &mut Option<(Ticket, Pin<Box<Sleep>>)>) -> Ticket {
    match debounce {
        Some((ticket, timer)) => {
            timer.as_mut().await;
            *ticket
        }
        None => pending().await,
    }
}

impl SessionHandle {
    /// Send a keystroke. Returns `false` if the session has stopped.
    pub fn input(&self, raw: impl Into<String>) -> bool {
        self.events.send(SearchEvent::Input(raw.into())).is_ok()
    }

    /// Pick a result row by id.
    pub fn select(&self, id: impl Into<String>) -> bool {
        self.events.send(SearchEvent::Select(id.into())).is_ok()
    }

    /// Press the clear button.
    pub fn clear(&self) -> bool {
        self.events.send(SearchEvent::Clear).is_ok()
    }

    /// Latest published view.
    pub fn view(&self) -> SearchView {
        self.view.borrow().clone()
    }

    /// A receiver that observes every published view.
    pub fn subscribe(&self) -> watch::Receiver<SearchView> {
        self.view.clone()
    }

    /// Next picked row, or `None` once the session has stopped.
    pub async fn next_selection(&mut self) -> Option<CarSummary> {
        self.selections.recv().await
    }
}
