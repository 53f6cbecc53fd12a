pub mod builder;
pub mod bundle;
pub mod versioning;

pub use builder::{BundleBuilder, BundleError};
pub use bundle::ReferenceBundle;
pub use versioning::{BundleBuildConfig, BundleManifest, ManifestDatasetEntry, DATASET_NAMES};
