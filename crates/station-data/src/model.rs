// Copyright 2026 Laddkarta Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Station records and the AC/DC current type.
//!
//! Station data is externally supplied and read-only: records are
//! deserialized once at load time and never mutated afterwards.

use serde::Deserialize;

/// Placeholder shown wherever a station has no known price.
pub const UNKNOWN_PRICE: &str = "Okänt";

/// Charging current type of a station.
///
/// This is a closed enumeration: a record carrying any other tag fails to
/// deserialize and is dropped by the loader, so unknown types never reach
/// the filter or the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CurrentType {
    #[serde(rename = "AC")]
    Ac,
    #[serde(rename = "DC")]
    Dc,
}

impl CurrentType {
    /// The tag as it appears in the source data and the UI.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CurrentType::Ac => "AC",
            CurrentType::Dc => "DC",
        }
    }
}

/// A single charging station record.
#[derive(Debug, Clone, Deserialize)]
pub struct Station {
    /// Unique identifier, stable across renders (list/marker key).
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Operator display name.
    pub operator: String,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
    /// Price per kWh. Absent in the source data for some stations.
    #[serde(default)]
    pub price: Option<f64>,
    /// Charging current type (AC or DC).
    #[serde(rename = "type")]
    pub station_type: CurrentType,
    /// Power rating in kW.
    pub power: f64,
}

impl Station {
    /// Price line as rendered in both the popup and the list card.
    ///
    /// A missing price renders the explicit placeholder instead of being
    /// omitted: `Pris: Okänt kr/kWh`.
    #[must_use]
    pub fn price_label(&self) -> String {
        match self.price {
            Some(price) => format!("Pris: {} kr/kWh", price),
            None => format!("Pris: {} kr/kWh", UNKNOWN_PRICE),
        }
    }

    /// Power line as rendered in both the popup and the list card.
    #[must_use]
    pub fn power_label(&self) -> String {
        format!("Effekt: {} kW", self.power)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_deserialize() {
        let json = r#"{"id": 1, "name": "A", "operator": "X",
                       "lat": 59.3, "lng": 18.0, "type": "AC", "power": 22}"#;
        let station: Station = serde_json::from_str(json).unwrap();

        assert_eq!(station.id, 1);
        assert_eq!(station.station_type, CurrentType::Ac);
        assert_eq!(station.price, None);
    }

    #[test]
    fn test_station_with_price() {
        let json = r#"{"id": 2, "name": "B", "operator": "Y",
                       "lat": 60.0, "lng": 17.0, "price": 5.5, "type": "DC", "power": 50}"#;
        let station: Station = serde_json::from_str(json).unwrap();

        assert_eq!(station.price, Some(5.5));
        assert_eq!(station.price_label(), "Pris: 5.5 kr/kWh");
    }

    #[test]
    fn test_missing_price_renders_placeholder() {
        let json = r#"{"id": 1, "name": "A", "operator": "X",
                       "lat": 59.3, "lng": 18.0, "type": "AC", "power": 22}"#;
        let station: Station = serde_json::from_str(json).unwrap();

        assert_eq!(station.price_label(), "Pris: Okänt kr/kWh");
    }

    #[test]
    fn test_unknown_current_type_rejected() {
        let json = r#"{"id": 3, "name": "C", "operator": "Z",
                       "lat": 59.0, "lng": 18.0, "type": "CHAdeMO", "power": 50}"#;
        let result: Result<Station, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }

    #[test]
    fn test_power_label() {
        let json = r#"{"id": 1, "name": "A", "operator": "X",
                       "lat": 59.3, "lng": 18.0, "type": "AC", "power": 22}"#;
        let station: Station = serde_json::from_str(json).unwrap();

        assert_eq!(station.power_label(), "Effekt: 22 kW");
    }
}
