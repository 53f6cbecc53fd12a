use serde::{Deserialize, Serialize};

use crate::catalog::{CropCatalogEntry, CropDetailRecord, IndexRange};
use crate::types::identifiers::{CropKey, DatasetVersion};
use crate::types::selection::Selection;

/// The three suitability indices derived from a selection, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexTriple {
    pub vdli: f64,
    pub smi: f64,
    pub mhi: f64,
}

impl IndexTriple {
    /// Number of the entry's three ranges that contain the matching index.
    pub fn range_matches(&self, entry: &CropCatalogEntry) -> u8 {
        u8::from(entry.vdli.contains(self.vdli))
            + u8::from(entry.smi.contains(self.smi))
            + u8::from(entry.mhi.contains(self.mhi))
    }
}

/// A recommended crop returned in the output.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub key: CropKey,

    pub vdli: IndexRange,
    pub smi: IndexRange,
    pub mhi: IndexRange,

    /// How many of the three ranges matched (2 or 3).
    pub range_matches: u8,
    /// Profit used for ranking; 0 when the crop has no detail record.
    pub profit_per_acre: f64,

    pub details: Option<CropDetailRecord>,
}

impl Recommendation {
    /// Whether a panel can render this crop. Entries without a detail record
    /// keep their ranking slot but have nothing to show.
    pub fn is_displayable(&self) -> bool {
        self.details.is_some()
    }
}

/// Metadata describing how a recommendation list was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSummary {
    pub dataset_version: DatasetVersion,
    pub profile: String,

    pub catalog_size: usize,
    pub district_eligible: usize,
    pub range_qualified: usize,
    /// Qualified crops that also have a detail record.
    pub displayable: usize,
}

/// The final result of evaluating one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub selection: Selection,
    pub indices: Option<IndexTriple>,
    pub recommendations: Vec<Recommendation>,
    pub summary: RecommendationSummary,
}

impl RecommendationReport {
    /// Recommendations that carry a detail record, in ranked order.
    pub fn displayable(&self) -> impl Iterator<Item = &Recommendation> {
        self.recommendations.iter().filter(|r| r.is_displayable())
    }
}

/// Internal: a catalog entry that passed filtering but is not yet ranked.
/// Holds references into the reference data to avoid cloning prematurely.
#[derive(Debug, Clone)]
pub struct ScoredCrop<'a> {
    pub entry: &'a CropCatalogEntry,
    pub key: CropKey,
    pub range_matches: u8,
    pub details: Option<&'a CropDetailRecord>,
}

impl ScoredCrop<'_> {
    pub fn profit(&self) -> f64 {
        self.details.map_or(0.0, |d| d.avg_profit_per_acre)
    }
}
