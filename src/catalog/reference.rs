use std::collections::BTreeMap;

use crate::catalog::alias::AliasTable;
use crate::catalog::library::{CropCatalogEntry, CropDetailRecord, CropLibraryFile};
use crate::catalog::regions::{DistrictEligibility, RegionDirectory};
use crate::types::identifiers::{CropKey, DatasetVersion};

/// All static inputs of the recommendation panel, loaded wholesale.
///
/// Read-only after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    pub regions: RegionDirectory,
    pub district_crops: DistrictEligibility,
    pub catalog: Vec<CropCatalogEntry>,
    /// Keyed by canonical crop key.
    pub details: BTreeMap<String, CropDetailRecord>,
    pub aliases: AliasTable,
    pub version: DatasetVersion,
}

impl ReferenceData {
    /// Assemble reference data in memory with the builtin alias table.
    pub fn new(
        regions: RegionDirectory,
        district_crops: DistrictEligibility,
        catalog: Vec<CropCatalogEntry>,
        details: BTreeMap<String, CropDetailRecord>,
    ) -> Self {
        Self {
            regions,
            district_crops,
            catalog,
            details,
            aliases: AliasTable::builtin(),
            version: DatasetVersion::unversioned(),
        }
    }

    /// Parse the four datasets from their JSON text. The version is the hash
    /// of the four texts joined by newlines.
    pub fn from_json_strs(
        regions: &str,
        district_crops: &str,
        crop_library: &str,
        crop_details: &str,
    ) -> Result<Self, serde_json::Error> {
        let region_directory: RegionDirectory = serde_json::from_str(regions)?;
        let eligibility: DistrictEligibility = serde_json::from_str(district_crops)?;
        let library: CropLibraryFile = serde_json::from_str(crop_library)?;
        let details: BTreeMap<String, CropDetailRecord> = serde_json::from_str(crop_details)?;

        let combined = [regions, district_crops, crop_library, crop_details].join("\n");

        Ok(
            Self::new(region_directory, eligibility, library.crop_library, details)
                .with_version(DatasetVersion::from_content(combined.as_bytes())),
        )
    }

    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn with_version(mut self, version: DatasetVersion) -> Self {
        self.version = version;
        self
    }

    pub fn key_for(&self, name: &str) -> Option<CropKey> {
        self.aliases.key_for(name)
    }

    /// Detail record of a crop given by any spelling.
    pub fn details_for(&self, name: &str) -> Option<&CropDetailRecord> {
        let key = self.key_for(name)?;
        self.details.get(key.as_str())
    }
}
