//! One-shot background fetch of NASA's NeoWs near-Earth-object feed.
//!
//! The render loop is synchronous, so the request runs on a worker thread
//! and hands its result back over a channel that the loop polls once per
//! frame. A failed fetch is logged and the handle simply never yields.

use std::collections::BTreeMap;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

pub const DEFAULT_ENDPOINT: &str = "https://api.nasa.gov/neo/rest/v1/feed";

#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub endpoint: String,
    pub start_date: String,
    pub end_date: String,
    pub api_key: String,
}

/// One record from the feed, trimmed to the fields the overlay shows.
#[derive(Debug, Clone, Deserialize)]
pub struct NeoRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "is_potentially_hazardous_asteroid")]
    pub potentially_hazardous: bool,
    #[serde(default)]
    pub estimated_diameter: Option<EstimatedDiameter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EstimatedDiameter {
    pub kilometers: DiameterRange,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiameterRange {
    #[serde(rename = "estimated_diameter_min")]
    pub min_km: f64,
    #[serde(rename = "estimated_diameter_max")]
    pub max_km: f64,
}

/// The feed groups records by date; a BTreeMap keeps the flattening
/// deterministic (ascending date order).
#[derive(Debug, Deserialize)]
struct FeedResponse {
    near_earth_objects: BTreeMap<String, Vec<NeoRecord>>,
}

fn flatten(response: FeedResponse) -> Vec<NeoRecord> {
    response.near_earth_objects.into_values().flatten().collect()
}

fn fetch(config: &FeedConfig) -> Result<Vec<NeoRecord>> {
    let response = reqwest::blocking::Client::new()
        .get(&config.endpoint)
        .query(&[
            ("start_date", config.start_date.as_str()),
            ("end_date", config.end_date.as_str()),
            ("api_key", config.api_key.as_str()),
        ])
        .send()
        .context("near-Earth-object feed request failed")?
        .error_for_status()
        .context("near-Earth-object feed returned an error status")?;

    let parsed: FeedResponse = response
        .json()
        .context("malformed near-Earth-object feed response")?;
    Ok(flatten(parsed))
}

/// Handle to the in-flight fetch. Polled by the render loop; yields the
/// record list at most once and `None` forever after.
pub struct FeedHandle {
    rx: Option<Receiver<Vec<NeoRecord>>>,
}

impl FeedHandle {
    /// A handle that never yields, for runs with the feed disabled.
    pub fn disabled() -> Self {
        FeedHandle { rx: None }
    }

    pub fn poll(&mut self) -> Option<Vec<NeoRecord>> {
        let rx = self.rx.take()?;
        match rx.try_recv() {
            Ok(records) => Some(records),
            Err(TryRecvError::Empty) => {
                self.rx = Some(rx);
                None
            }
            // Worker logged its own failure; stop polling.
            Err(TryRecvError::Disconnected) => None,
        }
    }
}

pub fn spawn_fetch(config: FeedConfig) -> FeedHandle {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || match fetch(&config) {
        Ok(records) => {
            debug!(count = records.len(), "near-Earth-object feed fetched");
            let _ = tx.send(records);
        }
        Err(err) => warn!("near-Earth-object feed fetch failed: {err:#}"),
    });
    FeedHandle { rx: Some(rx) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "element_count": 3,
        "near_earth_objects": {
            "2024-10-02": [
                {
                    "id": "3542519",
                    "name": "(2010 PK9)",
                    "is_potentially_hazardous_asteroid": true,
                    "estimated_diameter": {
                        "kilometers": {
                            "estimated_diameter_min": 0.122,
                            "estimated_diameter_max": 0.273
                        }
                    }
                }
            ],
            "2024-10-01": [
                {
                    "id": "2465633",
                    "name": "465633 (2009 JR5)",
                    "is_potentially_hazardous_asteroid": false
                },
                {
                    "id": "3726710",
                    "name": "(2015 RC)",
                    "is_potentially_hazardous_asteroid": false
                }
            ]
        }
    }"#;

    #[test]
    fn flattens_in_date_order() {
        let response: FeedResponse = serde_json::from_str(SAMPLE).unwrap();
        let records = flatten(response);

        assert_eq!(records.len(), 3);
        // 2024-10-01 entries come first even though they appear second in
        // the document.
        assert_eq!(records[0].id, "2465633");
        assert_eq!(records[1].id, "3726710");
        assert_eq!(records[2].id, "3542519");
    }

    #[test]
    fn hazard_flag_and_diameter_survive() {
        let response: FeedResponse = serde_json::from_str(SAMPLE).unwrap();
        let records = flatten(response);

        let pk9 = records.iter().find(|r| r.id == "3542519").unwrap();
        assert!(pk9.potentially_hazardous);
        let diameter = pk9.estimated_diameter.as_ref().unwrap();
        assert!((diameter.kilometers.min_km - 0.122).abs() < 1e-9);
        assert!((diameter.kilometers.max_km - 0.273).abs() < 1e-9);

        let jr5 = records.iter().find(|r| r.id == "2465633").unwrap();
        assert!(!jr5.potentially_hazardous);
        assert!(jr5.estimated_diameter.is_none());
    }

    #[test]
    fn disabled_handle_never_yields() {
        let mut handle = FeedHandle::disabled();
        assert!(handle.poll().is_none());
        assert!(handle.poll().is_none());
    }

    #[test]
    fn handle_yields_exactly_once() {
        let (tx, rx) = mpsc::channel();
        let mut handle = FeedHandle { rx: Some(rx) };

        assert!(handle.poll().is_none());
        tx.send(vec![]).unwrap();
        assert!(handle.poll().is_some());
        assert!(handle.poll().is_none());
    }
}
