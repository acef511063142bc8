use crate::config::Config;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// The `docs.metadata.json` file published next to the reference pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsMetadata {
    pub name: String,
    pub version: String,
    pub language: String,
    pub stem: String,
    pub update_time: Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    pub seconds: u64,
    pub nanos: u32,
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        // Clocks set before 1970 are reported as the epoch
        let elapsed = time.duration_since(UNIX_EPOCH).unwrap_or_default();
        Self {
            seconds: elapsed.as_secs(),
            nanos: elapsed.subsec_nanos(),
        }
    }
}

impl DocsMetadata {
    pub fn new(config: &Config, update_time: SystemTime) -> Self {
        Self {
            name: config.package_name(),
            version: config.version.clone(),
            language: "cpp".to_string(),
            stem: format!("/cpp/docs/reference/{}/latest", config.library),
            update_time: update_time.into(),
        }
    }
}

/// Renders `docs.metadata.json` as pretty-printed JSON.
pub fn generate_metadata(config: &Config, update_time: SystemTime) -> Result<String> {
    Ok(serde_json::to_string_pretty(&DocsMetadata::new(config, update_time))?)
}
