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

//! One-shot loading of the station document.
//!
//! The loader issues a single read of a static resource (an HTTP GET for
//! `http(s)://` sources, a filesystem read for anything else) and parses
//! it into station records. There is no retry, no polling, and no
//! incremental update.
//!
//! Parsing is lenient at the record level: a malformed record (missing
//! required field, wrong type, unknown current-type tag) is skipped and
//! logged, and its well-formed neighbors survive. A failure to parse the
//! document envelope is fatal to the load.

use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::model::Station;

/// Errors that can occur while loading the station document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server returned HTTP {0}")]
    HttpStatus(u16),

    #[error("failed to read {path}: {source}")]
    File {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid station document: {0}")]
    Document(#[from] serde_json::Error),
}

/// Result of a successful load: the parsed stations plus the number of
/// records that were dropped as malformed.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub stations: Vec<Station>,
    pub skipped: usize,
}

/// Document envelope: `{ "stations": [ ... ] }`.
///
/// Records are kept as raw JSON values so that one bad record does not
/// poison the whole document.
#[derive(Debug, Deserialize)]
struct RawDocument {
    stations: Vec<serde_json::Value>,
}

/// Parse a station document, skipping malformed records.
pub fn parse_document(bytes: &[u8]) -> Result<LoadOutcome, LoadError> {
    let document: RawDocument = serde_json::from_slice(bytes)?;

    let mut stations = Vec::with_capacity(document.stations.len());
    let mut skipped = 0;

    for value in document.stations {
        // Pull the id out before the strict parse so a rejected record can
        // still be identified in the log.
        let id = value.get("id").cloned();

        match serde_json::from_value::<Station>(value) {
            Ok(station) => stations.push(station),
            Err(e) => {
                skipped += 1;
                match id {
                    Some(id) => warn!("Skipping malformed station record (id {}): {}", id, e),
                    None => warn!("Skipping malformed station record without id: {}", e),
                }
            }
        }
    }

    debug!(
        "Parsed station document: {} stations, {} skipped",
        stations.len(),
        skipped
    );

    Ok(LoadOutcome { stations, skipped })
}

/// Fetch and parse the station document from a URL or a local file path.
///
/// This is the single read of the loader contract. The caller decides
/// where the result is published and how a failure is surfaced.
pub async fn fetch_stations(source: &str) -> Result<LoadOutcome, LoadError> {
    let bytes = if source.starts_with("http://") || source.starts_with("https://") {
        let response = reqwest::get(source).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus(status.as_u16()));
        }
        response.bytes().await?.to_vec()
    } else {
        std::fs::read(source).map_err(|e| LoadError::File {
            path: source.to_string(),
            source: e,
        })?
    };

    parse_document(&bytes)
}
