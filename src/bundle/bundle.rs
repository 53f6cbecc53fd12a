// Read side of a reference bundle:
// no mutation
// no "update" methods
// every dataset verified against the manifest on load

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::bundle::builder::BundleError;
use crate::bundle::versioning::{
    BundleManifest, CROP_DETAILS, CROP_LIBRARY, DATASET_NAMES, DISTRICT_CROPS, REGIONS,
};
use crate::catalog::{
    CropDetailRecord, CropLibraryFile, DistrictEligibility, ReferenceData, RegionDirectory,
};
use crate::types::identifiers::DatasetVersion;

#[derive(Debug)]
pub struct ReferenceBundle {
    pub root: PathBuf,
    pub manifest: BundleManifest,
}

impl ReferenceBundle {
    /// Read the manifest of the bundle at `root`. Datasets are not touched
    /// until [`load`](Self::load).
    pub fn open(root: &Path) -> Result<Self, BundleError> {
        let f = fs::File::open(root.join("manifest.json"))?;
        let manifest: BundleManifest = serde_json::from_reader(f)?;

        for entry in &manifest.datasets {
            if !DATASET_NAMES.contains(&entry.name.as_str()) {
                return Err(BundleError::UnknownDataset(entry.name.clone()));
            }
        }
        for name in DATASET_NAMES {
            if manifest.entry(name).is_none() {
                return Err(BundleError::MissingDataset(name.to_string()));
            }
        }

        Ok(Self {
            root: root.to_path_buf(),
            manifest,
        })
    }

    /// Load and verify every dataset, returning reference data versioned by
    /// the bundle version.
    pub fn load(&self) -> Result<ReferenceData, BundleError> {
        let regions: RegionDirectory = self.read_dataset(REGIONS)?;
        let district_crops: DistrictEligibility = self.read_dataset(DISTRICT_CROPS)?;
        let library: CropLibraryFile = self.read_dataset(CROP_LIBRARY)?;
        let details: BTreeMap<String, CropDetailRecord> = self.read_dataset(CROP_DETAILS)?;

        info!(
            version = %self.manifest.bundle_version.as_str(),
            regions = regions.len(),
            districts = district_crops.len(),
            crops = library.crop_library.len(),
            details = details.len(),
            "loaded reference bundle"
        );

        Ok(
            ReferenceData::new(regions, district_crops, library.crop_library, details)
                .with_version(self.manifest.bundle_version.clone()),
        )
    }

    fn read_dataset<T: DeserializeOwned>(&self, name: &str) -> Result<T, BundleError> {
        let entry = self
            .manifest
            .entry(name)
            .ok_or_else(|| BundleError::MissingDataset(name.to_string()))?;

        let bytes = fs::read(self.root.join(&entry.file))?;

        // Verify version matches manifest (recompute from content)
        let actual = DatasetVersion::from_content(&bytes);
        if actual != entry.version {
            warn!(dataset = name, "dataset content does not match manifest");
            return Err(BundleError::VersionMismatch {
                name: name.to_string(),
                expected: entry.version.as_str().to_string(),
                actual: actual.as_str().to_string(),
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}
