use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalog::alias::AliasTable;
use crate::types::identifiers::CropKey;

/// Region (state) to its districts. Regions iterate in name order; districts
/// keep dataset order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionDirectory {
    inner: BTreeMap<String, Vec<String>>,
}

impl RegionDirectory {
    pub fn new(inner: BTreeMap<String, Vec<String>>) -> Self {
        Self { inner }
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Districts of `region` in dataset order; empty for unknown regions.
    pub fn districts(&self, region: &str) -> &[String] {
        self.inner.get(region).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, region: &str, district: &str) -> bool {
        self.districts(region).iter().any(|d| d == district)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// District to the crops grown there, in whatever spelling the source used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistrictEligibility {
    inner: BTreeMap<String, Vec<String>>,
}

impl DistrictEligibility {
    pub fn new(inner: BTreeMap<String, Vec<String>>) -> Self {
        Self { inner }
    }

    pub fn crops_for(&self, district: &str) -> &[String] {
        self.inner.get(district).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Canonical keys of the crops grown in `district`.
    pub fn eligible_keys(&self, district: &str, aliases: &AliasTable) -> BTreeSet<CropKey> {
        self.crops_for(district)
            .iter()
            .filter_map(|name| aliases.key_for(name))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eligible_keys_normalize_spellings() {
        let mut inner = BTreeMap::new();
        inner.insert(
            "Guntur".to_string(),
            vec!["Rice".into(), "Chilli".into(), "Cotton ".into(), "".into()],
        );
        let eligibility = DistrictEligibility::new(inner);
        let keys = eligibility.eligible_keys("Guntur", &AliasTable::builtin());
        let keys: Vec<&str> = keys.iter().map(CropKey::as_str).collect();
        assert_eq!(keys, vec!["chillies", "cotton", "paddy"]);
        assert!(eligibility
            .eligible_keys("Nowhere", &AliasTable::builtin())
            .is_empty());
    }

    #[test]
    fn region_lookup() {
        let mut inner = BTreeMap::new();
        inner.insert("Punjab".to_string(), vec!["Ludhiana".into(), "Amritsar".into()]);
        let regions = RegionDirectory::new(inner);
        assert!(regions.contains("Punjab", "Amritsar"));
        assert!(!regions.contains("Punjab", "Pune"));
        assert!(regions.districts("Kerala").is_empty());
    }

    #[test]
    fn regions_are_listed_in_name_order() {
        let regions: RegionDirectory = serde_json::from_str(
            r#"{"Telangana": ["Warangal"], "Andhra Pradesh": ["Guntur", "Anantapur"]}"#,
        )
        .unwrap();
        assert_eq!(regions.regions().collect::<Vec<_>>(), ["Andhra Pradesh", "Telangana"]);
        assert_eq!(regions.districts("Andhra Pradesh"), ["Guntur", "Anantapur"]);
    }
}
