//! Catalog API access.
//!
//! [`SearchBackend`] is the capability the page needs from the catalog:
//! search rows and the weekly drop. Two implementations exist:
//!
//! - [`HttpBackend`] - the live API over reqwest
//! - [`StaticBackend`] - the hardcoded catalog
//!
//! [`DegradingBackend`] is the degraded-mode policy between them: ask the
//! live API, and on any failure log it and answer from the static catalog.
//! It never fails, so callers have no error branch to render.

mod fallback;
mod http;

use std::future::Future;

use tracing::{debug, warn};

use crate::catalog::{Car, CarSummary};
use crate::error::BackendError;

pub use fallback::StaticBackend;
pub use http::HttpBackend;

/// Source of catalog data.
pub trait SearchBackend {
    /// Rows matching `query` (name, brand or model).
    fn search(&self, query: &str)
    -> impl Future<Output = Result<Vec<CarSummary>, BackendError>>;

    /// The current weekly drop.
    fn latest(&self) -> impl Future<Output = Result<Vec<Car>, BackendError>>;
}

/// Where a [`Resolved`] answer came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    /// The live catalog API
    Live,
    /// The static catalog, because the API failed or is not configured
    Fallback,
}

/// An answer that is always available.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved<T> {
    /// Payload
    pub items: T,
    /// Live or fallback
    pub source: Source,
}

/// Live backend with static fallback.
#[derive(Clone, Debug)]
pub struct DegradingBackend<P> {
    primary: Option<P>,
    fallback: StaticBackend,
}

impl<P: SearchBackend> DegradingBackend<P> {
    /// Ask `primary` first, fall back on failure.
    pub fn new(primary: P) -> Self {
        Self {
            primary: Some(primary),
            fallback: StaticBackend,
        }
    }

    /// No live API at all; every answer is static.
    pub fn offline() -> Self {
        Self {
            primary: None,
            fallback: StaticBackend,
        }
    }

    /// Whether a live API is configured.
    pub fn is_online(&self) -> bool {
        self.primary.is_some()
    }

    /// Search rows for `query`. Results from the API are passed through verbatim.
    pub async fn search(&self, query: &str) -> Resolved<Vec<CarSummary>> {
        if let Some(primary) = &self.primary {
            match primary.search(query).await {
                Ok(items) => {
                    debug!(query, hits = items.len(), "search answered by api");
                    return Resolved {
                        items,
                        source: Source::Live,
                    };
                }
                Err(error) => warn!(%error, query, "search failed, serving static results"),
            }
        }
        Resolved {
            items: self.fallback.filter(query),
            source: Source::Fallback,
        }
    }

    /// The weekly drop.
    pub async fn latest(&self) -> Resolved<Vec<Car>> {
        if let Some(primary) = &self.primary {
            match primary.latest().await {
                Ok(items) => {
                    return Resolved {
                        items,
                        source: Source::Live,
                    };
                }
                Err(error) => warn!(%error, "latest drop unavailable, serving static showcase"),
            }
        }
        Resolved {
            items: self.fallback.showcase(),
            source: Source::Fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::static_showcase;
    use pretty_assertions::assert_eq;

    /// Backend that always errors.
    struct Down;

    impl SearchBackend for Down {
        async fn search(&self, _query: &str) -> Result<Vec<CarSummary>, BackendError> {
            Err(BackendError::Status {
                status: 503,
                url: "http://down/api/cars/search".into(),
            })
        }

        async fn latest(&self) -> Result<Vec<Car>, BackendError> {
            Err(BackendError::InvalidBaseUrl("mailto:down".into()))
        }
    }

    /// Backend that answers with a fixed row regardless of query.
    struct Canned;

    impl SearchBackend for Canned {
        async fn search(&self, _query: &str) -> Result<Vec<CarSummary>, BackendError> {
            Ok(vec![CarSummary {
                id: "x".into(),
                name: "McLaren 720S".into(),
                brand: "McLaren".into(),
                model: "720S".into(),
                year: 2022,
            }])
        }

        async fn latest(&self) -> Result<Vec<Car>, BackendError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn live_results_pass_through_unfiltered() {
        let backend = DegradingBackend::new(Canned);
        let resolved = backend.search("ferrari").await;
        assert_eq!(resolved.source, Source::Live);
        assert_eq!(resolved.items[0].name, "McLaren 720S");
    }

    #[tokio::test]
    async fn failed_search_serves_filtered_static_rows() {
        let backend = DegradingBackend::new(Down);
        let resolved = backend.search("BUGATTI").await;
        assert_eq!(resolved.source, Source::Fallback);
        let names: Vec<_> = resolved.items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bugatti Chiron"]);
    }

    #[tokio::test]
    async fn failed_latest_serves_static_showcase() {
        let backend = DegradingBackend::new(Down);
        let resolved = backend.latest().await;
        assert_eq!(resolved.source, Source::Fallback);
        assert_eq!(resolved.items, static_showcase());
    }

    #[tokio::test]
    async fn empty_live_answer_is_not_a_failure() {
        let backend = DegradingBackend::new(Canned);
        let resolved = backend.latest().await;
        assert_eq!(resolved.source, Source::Live);
        assert!(resolved.items.is_empty());
    }

    #[tokio::test]
    async fn offline_backend_never_asks_primary() {
        let backend = DegradingBackend::<Canned>::offline();
        assert!(!backend.is_online());
        let resolved = backend.search("porsche").await;
        assert_eq!(resolved.source, Source::Fallback);
        assert_eq!(resolved.items.len(), 1);
    }
}
