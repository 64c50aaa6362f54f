//! Car records and the static catalog used when the API is unreachable.
//!
//! These types mirror the JSON the catalog API serves:
//!
//! - [`CarSummary`] - one row of `GET /api/cars/search`
//! - [`Car`] - one card of `GET /api/cars/latest`
//!
//! # Example
//!
//! ```rust
//! use ikul_core::catalog::{filter_candidates, static_candidates};
//!
//! let hits = filter_candidates(&static_candidates(), "PORSCHE");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].model, "911 GT3 RS");
//! ```

use serde::{Deserialize, Serialize};

/// A search result row.
///
/// `id` is unique within one result set; it is not stable across searches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarSummary {
    /// Record id
    pub id: String,
    /// Display name, e.g. "Ferrari 296 GTB"
    pub name: String,
    /// Manufacturer
    pub brand: String,
    /// Model designation
    pub model: String,
    /// Model year
    pub year: i32,
}

impl CarSummary {
    /// Case-insensitive substring match against name, brand and model.
    ///
    /// The query is trimmed first, so `" fer"` matches Ferrari.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        [&self.name, &self.brand, &self.model]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Full showcase record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Car {
    /// Record id
    pub id: String,
    /// Display name
    pub name: String,
    /// Manufacturer
    pub brand: String,
    /// Model designation
    pub model: String,
    /// Model year
    pub year: i32,
    /// Peak output in HP
    pub horsepower: u32,
    /// Top speed in MPH
    pub top_speed: u32,
    /// Engine description, e.g. "4.0L Flat-6"
    pub engine: String,
    /// 0-60 MPH in seconds
    pub acceleration_0_60: f32,
    /// Photo shown at rest
    pub image_url: String,
    /// Photo shown in blueprint (hover) mode
    pub blueprint_image_url: String,
    /// One-line pitch
    pub description: String,
    /// Part of the current weekly drop
    #[serde(default)]
    pub is_latest: bool,
}

impl Car {
    /// Project to the search-row shape.
    pub fn summary(&self) -> CarSummary {
        CarSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            brand: self.brand.clone(),
            model: self.model.clone(),
            year: self.year,
        }
    }
}

/// Filter search candidates the way the API would, client-side.
pub fn filter_candidates(candidates: &[CarSummary], query: &str) -> Vec<CarSummary> {
    candidates
        .iter()
        .filter(|car| car.matches(query))
        .cloned()
        .collect()
}

/// Search candidates for degraded mode: the static showcase, summarized.
pub fn static_candidates() -> Vec<CarSummary> {
    static_showcase().iter().map(Car::summary).collect()
}

/// The weekly drop shown when `/api/cars/latest` is unreachable.
pub fn static_showcase() -> Vec<Car> {
    vec![
        Car {
            id: "1".into(),
            name: "Ferrari 296 GTB".into(),
            brand: "Ferrari".into(),
            model: "296 GTB".into(),
            year: 2024,
            horsepower: 818,
            top_speed: 205,
            engine: "2.9L V6 Hybrid".into(),
            acceleration_0_60: 2.9,
            image_url: "https://images.unsplash.com/photo-1583121274602-3e2820c69888?w=800".into(),
            blueprint_image_url:
                "https://images.unsplash.com/photo-1558618047-3c8c76ca7d13?w=800".into(),
            description: "The ultimate expression of Ferrari's hybrid technology".into(),
            is_latest: true,
        },
        Car {
            id: "2".into(),
            name: "Porsche 911 GT3 RS".into(),
            brand: "Porsche".into(),
            model: "911 GT3 RS".into(),
            year: 2024,
            horsepower: 518,
            top_speed: 184,
            engine: "4.0L Flat-6".into(),
            acceleration_0_60: 3.0,
            image_url: "https://images.unsplash.com/photo-1655827763440-7905302b75ff?w=800".into(),
            blueprint_image_url:
                "https://images.unsplash.com/photo-1485291571150-772bcfc10da5?w=800".into(),
            description: "Track-focused precision engineering".into(),
            is_latest: true,
        },
        Car {
            id: "3".into(),
            name: "Bugatti Chiron".into(),
            brand: "Bugatti".into(),
            model: "Chiron".into(),
            year: 2024,
            horsepower: 1479,
            top_speed: 261,
            engine: "8.0L W16 Quad-Turbo".into(),
            acceleration_0_60: 2.4,
            image_url: "https://images.unsplash.com/photo-1557349504-2f6a19aff9d5?w=800".into(),
            blueprint_image_url:
                "https://images.unsplash.com/photo-1532578498858-e21a39e0a449?w=800".into(),
            description: "The pinnacle of automotive engineering".into(),
            is_latest: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn matches_any_field_ignoring_case() {
        let ferrari = static_candidates().remove(0);
        assert!(ferrari.matches("ferr"));
        assert!(ferrari.matches("296 gtb"));
        assert!(ferrari.matches("  FERRARI "));
        assert!(!ferrari.matches("chiron"));
    }

    #[test]
    fn filter_keeps_catalog_order() {
        let hits = filter_candidates(&static_candidates(), "r");
        let names: Vec<_> = hits.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Ferrari 296 GTB", "Porsche 911 GT3 RS", "Bugatti Chiron"]
        );
        assert!(filter_candidates(&static_candidates(), "mclaren").is_empty());
    }

    #[test]
    fn latest_payload_deserializes_without_is_latest() {
        let json = r#"[{
            "id": "abc", "name": "Nissan GT-R", "brand": "Nissan", "model": "GT-R",
            "year": 2023, "horsepower": 565, "top_speed": 196, "engine": "3.8L V6 Twin-Turbo",
            "acceleration_0_60": 2.9, "image_url": "a.jpg", "blueprint_image_url": "b.jpg",
            "description": "Godzilla"
        }]"#;
        let cars: Vec<Car> = serde_json::from_str(json).expect("valid payload");
        assert_eq!(cars.len(), 1);
        assert!(!cars[0].is_latest);
        assert_eq!(cars[0].summary().brand, "Nissan");
    }

    #[test]
    fn static_showcase_ids_are_unique() {
        let mut ids: Vec<_> = static_showcase().into_iter().map(|c| c.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}
