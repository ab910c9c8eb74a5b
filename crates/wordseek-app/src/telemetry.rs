//! Inventory telemetry at the system boundary.

use std::{fs, path::Path};

use serde::Deserialize;
use wordseek_scheduler::{InventorySnapshot, UserProgressSnapshot};

/// A telemetry document: inventory counts plus optional user progress.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct Telemetry {
    /// Current puzzle counts.
    pub(crate) inventory: InventorySnapshot,
    /// Where users are in the level progression.
    pub(crate) progress: UserProgressSnapshot,
}

/// Reads telemetry from a JSON counts file.
///
/// Failures never propagate: a missing or unreadable file yields zeroed
/// snapshots, which the scheduler treats conservatively (empty inventory
/// reads as fully consumed, so generation proceeds).
pub(crate) fn load(path: Option<&Path>) -> Telemetry {
    let Some(path) = path else {
        log::info!("no telemetry file given; assuming empty inventory");
        return Telemetry::default();
    };
    match read(path) {
        Ok(telemetry) => telemetry,
        Err(err) => {
            log::warn!("telemetry unavailable ({err}); assuming empty inventory");
            Telemetry::default()
        }
    }
}

fn read(path: &Path) -> Result<Telemetry, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
