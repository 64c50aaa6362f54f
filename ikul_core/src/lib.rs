//! # ikul-core
//!
//! Behavioral core of the IKUL cars landing page.
//!
//! Everything the page does that is not markup lives here, so it can be
//! exercised natively without a browser:
//!
//! - **Catalog** - car records, the static fallback catalog and its filter
//! - **Backends** - the [`SearchBackend`] capability with a live HTTP
//!   implementation, a static one, and the degrading wrapper that picks
//!   between them
//! - **Search** - the debounced, sequence-fenced [`SearchController`] and a
//!   tokio event loop that drives it
//! - **Timing** - placeholder rotation, fixed phase timelines for the
//!   preloader/hero/reveal animations, and scoped timer ownership
//!
//! ## Quick Start
//!
//! ```rust
//! use ikul_core::{Directive, SearchController, SearchSettings};
//!
//! let mut search = SearchController::new(SearchSettings::default());
//!
//! // One character: nothing is scheduled.
//! assert!(matches!(search.input("p"), Directive::Cancel));
//!
//! // Two characters: a search is armed behind the quiet interval.
//! let Directive::Schedule(ticket, delay) = search.input("po") else {
//!     unreachable!()
//! };
//! assert_eq!(delay.as_millis(), 300);
//!
//! // The timer elapsed: issue the request for the current query.
//! let request = search.fire(ticket).expect("pending ticket fires");
//! assert_eq!(request.query, "po");
//! ```
//!
//! ---
//!
//! Developed by the IKUL cars team (c)2025

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backend;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod placeholder;
pub mod search;
pub mod timeline;
pub mod timers;

pub use backend::{DegradingBackend, HttpBackend, Resolved, SearchBackend, Source, StaticBackend};
pub use catalog::{Car, CarSummary};
pub use config::{AppConfig, SearchSettings};
pub use error::{BackendError, ConfigError, TimelineError};
pub use placeholder::PlaceholderCycle;
pub use search::{Directive, SearchController, SearchRequest, SearchView, Ticket};
pub use timeline::{Cue, HeroPhase, PreloaderPhase, RevealPhase, Timeline};
pub use timers::{CancelTimer, TimerSet};

#[cfg(feature = "runtime")]
pub use search::session::{SearchEvent, SearchSession, SessionHandle};
