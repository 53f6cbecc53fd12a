use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Canonical crop identifier used to join the eligibility, catalog and
/// detail datasets.
///
/// Keys are produced by [`AliasTable::key_for`](crate::catalog::AliasTable::key_for);
/// a key is always lowercase and free of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CropKey(String);

impl CropKey {
    pub(crate) fn from_normalized(normalized: impl Into<String>) -> Self {
        CropKey(normalized.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CropKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize a free-form crop spelling: lowercase, all whitespace and byte
/// order marks removed.
pub fn normalize_crop_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{FEFF}')
        .collect::<String>()
        .to_lowercase()
}

/// Content hash version of a dataset or a whole reference bundle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetVersion(String);

impl DatasetVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        DatasetVersion(format!("sha256:{hex}"))
    }

    pub(crate) fn from_digest(digest: &[u8]) -> Self {
        DatasetVersion(format!("sha256:{}", hex::encode(digest)))
    }

    /// Version used for data assembled in memory and never hashed.
    pub fn unversioned() -> Self {
        DatasetVersion("unversioned".into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
