use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, info};

use crate::bundle::bundle::ReferenceBundle;
use crate::bundle::versioning::{
    dataset_file, BundleBuildConfig, BundleManifest, ManifestDatasetEntry, CROP_DETAILS,
    CROP_LIBRARY, DISTRICT_CROPS, REGIONS,
};
use crate::catalog::{CropCatalogEntry, ReferenceData};
use crate::types::identifiers::DatasetVersion;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Output directory already exists: {0}")]
    OutputExists(PathBuf),
    #[error("Dataset {name} hash mismatch: manifest says {expected}, content hashes to {actual}")]
    VersionMismatch {
        name: String,
        expected: String,
        actual: String,
    },
    #[error("Manifest lists unknown dataset: {0}")]
    UnknownDataset(String),
    #[error("Manifest is missing dataset: {0}")]
    MissingDataset(String),
}

#[derive(Serialize)]
struct CropLibraryRef<'a> {
    crop_library: &'a [CropCatalogEntry],
}

/// BundleBuilder is single-threaded and non-reentrant by design.
pub struct BundleBuilder {
    config: BundleBuildConfig,
}

impl BundleBuilder {
    pub fn new(config: BundleBuildConfig) -> Self {
        Self { config }
    }

    /// Write `data` as a reference bundle at `output_dir`.
    ///
    /// The alias table is not part of the bundle; readers use the builtin one.
    pub fn build(
        &self,
        data: &ReferenceData,
        output_dir: &Path,
    ) -> Result<ReferenceBundle, BundleError> {
        if output_dir.exists() {
            return Err(BundleError::OutputExists(output_dir.to_path_buf()));
        }

        // 1. Serialize every dataset. Maps are BTreeMaps so key order is fixed.
        let mut payloads: BTreeMap<&str, Vec<u8>> = BTreeMap::new();
        payloads.insert(REGIONS, serde_json::to_vec_pretty(&data.regions)?);
        payloads.insert(DISTRICT_CROPS, serde_json::to_vec_pretty(&data.district_crops)?);
        payloads.insert(
            CROP_LIBRARY,
            serde_json::to_vec_pretty(&CropLibraryRef {
                crop_library: &data.catalog,
            })?,
        );
        payloads.insert(CROP_DETAILS, serde_json::to_vec_pretty(&data.details)?);

        // 2. Bundle version: config, then "name:version" per dataset in name order
        let mut version_hasher = Sha256::new();
        let config_json = serde_json::to_vec(&self.config)?;
        version_hasher.update(&config_json);

        let mut entries = Vec::with_capacity(payloads.len());
        for (name, bytes) in &payloads {
            let version = DatasetVersion::from_content(bytes);
            let line = format!("{}:{}", name, version.as_str());
            version_hasher.update(line.as_bytes());

            entries.push(ManifestDatasetEntry {
                name: name.to_string(),
                version,
                file: dataset_file(name),
            });
        }

        let bundle_version = DatasetVersion::from_digest(&version_hasher.finalize());

        // Note: created_at is strictly informational
        let manifest = BundleManifest {
            bundle_version: bundle_version.clone(),
            build_config: self.config.clone(),
            created_at: Utc::now(),
            dataset_count: entries.len(),
            datasets: entries,
        };

        // 3. Write to a temp dir named after the bundle version, then rename
        let temp_suffix = format!("tmp.{}", &bundle_version.as_str()[7..19]);
        let temp_dir = output_dir.with_extension(temp_suffix);

        // Clean up any stale temp dir from a crashed previous run of THIS specific version
        if temp_dir.exists() {
            fs::remove_dir_all(&temp_dir)?;
        }
        fs::create_dir_all(temp_dir.join("datasets"))?;

        for entry in &manifest.datasets {
            let path = temp_dir.join(&entry.file);
            let bytes = &payloads[entry.name.as_str()];
            fs::write(&path, bytes)?;
            fs::File::open(&path)?.sync_all()?;
            debug!(dataset = %entry.name, version = %entry.version.as_str(), "wrote dataset");
        }

        let manifest_path = temp_dir.join("manifest.json");
        let f_man = fs::File::create(manifest_path)?;
        serde_json::to_writer_pretty(&f_man, &manifest)?;
        f_man.sync_all()?;

        fs::rename(&temp_dir, output_dir)?;

        info!(
            path = %output_dir.display(),
            version = %bundle_version.as_str(),
            "built reference bundle"
        );

        Ok(ReferenceBundle {
            root: output_dir.to_path_buf(),
            manifest,
        })
    }
}
