//! Live catalog API client.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::catalog::{Car, CarSummary};
use crate::config::AppConfig;
use crate::error::BackendError;

use super::SearchBackend;

/// Client for `GET /api/cars/search` and `GET /api/cars/latest`.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base: Url,
}

impl HttpBackend {
    /// Build a client rooted at `base`.
    ///
    /// `timeout` bounds each request on native targets; in the browser the
    /// fetch API owns request lifetime.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, BackendError> {
        if base.cannot_be_a_base() {
            return Err(BackendError::InvalidBaseUrl(base.to_string()));
        }

        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(timeout);
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            client: builder.build()?,
            base,
        })
    }

    /// Build from resolved configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, BackendError> {
        Self::new(config.backend_url.clone(), config.request_timeout)
    }

    /// `{base}/api/cars/search?q=<query>`
    pub fn search_url(&self, query: &str) -> Url {
        let mut url = self.endpoint(&["api", "cars", "search"]);
        url.query_pairs_mut().append_pair("q", query);
        url
    }

    /// `{base}/api/cars/latest`
    pub fn latest_url(&self) -> Url {
        self.endpoint(&["api", "cars", "latest"])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        // `new` rejected cannot-be-a-base urls
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, BackendError> {
        debug!(%url, "catalog request");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.json().await?)
    }
}

impl SearchBackend for HttpBackend {
    async fn search(&self, query: &str) -> Result<Vec<CarSummary>, BackendError> {
        self.get_json(self.search_url(query)).await
    }

    async fn latest(&self) -> Result<Vec<Car>, BackendError> {
        self.get_json(self.latest_url()).await
    }
}
