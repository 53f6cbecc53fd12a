use chrono::{DateTime, Utc};

use crate::types::identifiers::DatasetVersion;

pub const REGIONS: &str = "regions";
pub const DISTRICT_CROPS: &str = "district_crops";
pub const CROP_LIBRARY: &str = "crop_library";
pub const CROP_DETAILS: &str = "crop_details";

/// Dataset names in the order they are hashed and listed in the manifest.
pub const DATASET_NAMES: [&str; 4] = [CROP_DETAILS, CROP_LIBRARY, DISTRICT_CROPS, REGIONS];

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BundleBuildConfig {
    pub version: String,
    pub hash_algorithm: String,
}

impl BundleBuildConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            hash_algorithm: "sha256".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ManifestDatasetEntry {
    pub name: String,
    pub version: DatasetVersion,
    pub file: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BundleManifest {
    pub bundle_version: DatasetVersion,
    pub build_config: BundleBuildConfig,
    pub created_at: DateTime<Utc>, // informational only
    pub dataset_count: usize,
    pub datasets: Vec<ManifestDatasetEntry>,
}

impl BundleManifest {
    pub fn entry(&self, name: &str) -> Option<&ManifestDatasetEntry> {
        self.datasets.iter().find(|entry| entry.name == name)
    }
}

pub fn dataset_file(name: &str) -> String {
    format!("datasets/{name}.json")
}
