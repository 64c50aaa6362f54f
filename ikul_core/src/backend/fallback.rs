//! The hardcoded catalog as a backend.

use crate::catalog::{Car, CarSummary, filter_candidates, static_candidates, static_showcase};
use crate::error::BackendError;

use super::SearchBackend;

/// Answers from the static catalog. Never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticBackend;

impl StaticBackend {
    /// Static rows matching `query`.
    pub fn filter(&self, query: &str) -> Vec<CarSummary> {
        filter_candidates(&static_candidates(), query)
    }

    /// The static weekly drop.
    pub fn showcase(&self) -> Vec<Car> {
        static_showcase()
    }
}

impl SearchBackend for StaticBackend {
    async fn search(&self, query: &str) -> Result<Vec<CarSummary>, BackendError> {
        Ok(self.filter(query))
    }

    async fn latest(&self) -> Result<Vec<Car>, BackendError> {
        Ok(self.showcase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(rows: &[CarSummary]) -> Vec<&str> {
        rows.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn every_showcase_car_is_searchable_offline() {
        let fallback = StaticBackend;
        for car in fallback.showcase() {
            assert_eq!(names(&fallback.filter(&car.model)), vec![car.name.as_str()]);
        }
        assert_eq!(names(&fallback.filter("bugatti")), vec!["Bugatti Chiron"]);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let fallback = StaticBackend;
        assert_eq!(names(&fallback.filter("  porsche")), vec!["Porsche 911 GT3 RS"]);
        assert_eq!(names(&fallback.filter("ferrari\t")), vec!["Ferrari 296 GTB"]);
    }
}
