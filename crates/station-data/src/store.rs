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

//! Process-local station state.
//!
//! The store starts empty, receives the result of the one-shot load
//! exactly once, and is read-only afterwards. The view renders a valid
//! empty state while the load is still in flight.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use log::warn;

use crate::loader::LoadOutcome;
use crate::model::Station;

/// Lifecycle of the station list within a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// Initial state; the fetch has not resolved yet.
    Loading,
    /// The document was fetched and parsed.
    Loaded,
    /// The fetch or the envelope parse failed. The list stays empty.
    Failed(String),
}

/// Station list plus load lifecycle, shared between the loader task and
/// the view.
#[derive(Debug)]
pub struct StationStore {
    stations: Vec<Station>,
    phase: LoadPhase,
    skipped: usize,
    loaded_at: Option<DateTime<Utc>>,
}

impl Default for StationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StationStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stations: Vec::new(),
            phase: LoadPhase::Loading,
            skipped: 0,
            loaded_at: None,
        }
    }

    /// Publish the load result. Only the first publish takes effect; the
    /// station list is immutable for the rest of the session.
    pub fn publish(&mut self, outcome: LoadOutcome) {
        if self.phase != LoadPhase::Loading {
            warn!("Ignoring station publish after load already settled");
            return;
        }
        self.stations = outcome.stations;
        self.skipped = outcome.skipped;
        self.phase = LoadPhase::Loaded;
        self.loaded_at = Some(Utc::now());
    }

    /// Record a failed load. The station list stays empty.
    pub fn fail(&mut self, message: String) {
        if self.phase != LoadPhase::Loading {
            warn!("Ignoring station load failure after load already settled");
            return;
        }
        self.phase = LoadPhase::Failed(message);
    }

    #[must_use]
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    #[must_use]
    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    /// Number of malformed records dropped during the load.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// When the load settled successfully.
    #[must_use]
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }
}

pub type SharedStationStore = Arc<Mutex<StationStore>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_document;

    fn outcome() -> LoadOutcome {
        parse_document(
            br#"{"stations": [
                {"id": 1, "name": "A", "operator": "X",
                 "lat": 59.3, "lng": 18.0, "type": "AC", "power": 22}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_store_starts_empty_and_loading() {
        let store = StationStore::new();
        assert!(store.stations().is_empty());
        assert_eq!(*store.phase(), LoadPhase::Loading);
        assert!(store.loaded_at().is_none());
    }

    #[test]
    fn test_publish_settles_store() {
        let mut store = StationStore::new();
        store.publish(outcome());

        assert_eq!(store.stations().len(), 1);
        assert_eq!(*store.phase(), LoadPhase::Loaded);
        assert!(store.loaded_at().is_some());
    }

    #[test]
    fn test_second_publish_ignored() {
        let mut store = StationStore::new();
        store.publish(outcome());

        let mut second = outcome();
        second.stations.clear();
        store.publish(second);

        assert_eq!(store.stations().len(), 1);
    }

    #[test]
    fn test_failure_after_publish_ignored() {
        let mut store = StationStore::new();
        store.publish(outcome());
        store.fail("too late".to_string());

        assert_eq!(*store.phase(), LoadPhase::Loaded);
    }

    #[test]
    fn test_failed_load_keeps_list_empty() {
        let mut store = StationStore::new();
        store.fail("connection refused".to_string());

        assert!(store.stations().is_empty());
        assert!(matches!(store.phase(), LoadPhase::Failed(_)));
    }
}
