//! Snapshot wire format for the link store.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A whole-store snapshot as it appears on disk.
///
/// The JSON field names (`URLToID` / `IDToURL`) are fixed by the historical
/// file format; snapshots written by earlier deployments must keep loading.
/// Missing fields decode as empty maps.
///
/// ```json
/// { "URLToID": { "https://example.com": "1" }, "IDToURL": { "1": "https://example.com" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "URLToID", default)]
    pub url_to_id: HashMap<String, String>,

    #[serde(rename = "IDToURL", default)]
    pub id_to_url: HashMap<String, String>,
}

impl Snapshot {
    /// Number of link pairs in the snapshot.
    pub fn len(&self) -> usize {
        self.url_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.url_to_id.is_empty()
    }

    /// Encodes the snapshot to its on-disk JSON representation.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Decodes a snapshot from its on-disk JSON representation.
    ///
    /// Fails on malformed input without producing a partial snapshot; the
    /// loader keeps the current store when this returns an error.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
