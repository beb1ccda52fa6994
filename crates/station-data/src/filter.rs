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

//! Visibility filtering by current type.
//!
//! Both the marker layer and the list view render the subset produced
//! here, so the filter is the single source of truth for what is visible.

use crate::model::{CurrentType, Station};

/// Visibility flags for the two station types.
///
/// The flags are independent; a station is kept when the flag for its own
/// type is set. Both default to on (show everything). Filter state lives
/// for the session only and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterState {
    pub show_ac: bool,
    pub show_dc: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            show_ac: true,
            show_dc: true,
        }
    }
}

impl FilterState {
    /// Whether a single station passes the filter.
    #[must_use]
    pub fn matches(&self, station: &Station) -> bool {
        match station.station_type {
            CurrentType::Ac => self.show_ac,
            CurrentType::Dc => self.show_dc,
        }
    }

    /// Filter a station list, preserving the original relative order.
    ///
    /// Pure and referentially transparent: the same inputs always yield
    /// the same ordered subset. No re-sort takes place.
    #[must_use]
    pub fn apply<'a>(&self, stations: &'a [Station]) -> Vec<&'a Station> {
        stations.iter().filter(|s| self.matches(s)).collect()
    }
}
