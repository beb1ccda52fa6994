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

//! Station data library for loading and filtering EV charging station data.
//!
//! This library provides the data layer for the Laddkarta map viewer. It is
//! split into layers that can be used independently or composed together:
//!
//! - **Model layer**: Station records and the AC/DC current type
//! - **Loader layer**: One-shot fetch and lenient parsing of a station document
//! - **Filter layer**: Pure, order-preserving filtering by current type
//! - **Store layer**: Process-local station state, published exactly once
//!
//! # Quick Start
//!
//! ```
//! use station_data::{loader, FilterState};
//!
//! let doc = br#"{"stations": [
//!     {"id": 1, "name": "Vasastan Laddpark", "operator": "InCharge",
//!      "lat": 59.34, "lng": 18.05, "price": 4.5, "type": "AC", "power": 22}
//! ]}"#;
//!
//! let outcome = loader::parse_document(doc).unwrap();
//! let filters = FilterState::default();
//! let visible = filters.apply(&outcome.stations);
//! assert_eq!(visible.len(), 1);
//! ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod store;

pub use filter::FilterState;
pub use loader::{LoadError, LoadOutcome};
pub use model::{CurrentType, Station};
pub use store::{LoadPhase, SharedStationStore, StationStore};
