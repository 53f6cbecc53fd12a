use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` bound on one index. Serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct IndexRange {
    pub min: f64,
    pub max: f64,
}

impl IndexRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl From<[f64; 2]> for IndexRange {
    fn from([min, max]: [f64; 2]) -> Self {
        Self { min, max }
    }
}

impl From<IndexRange> for [f64; 2] {
    fn from(range: IndexRange) -> Self {
        [range.min, range.max]
    }
}

/// One crop of the recommendation catalog with its suitability ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropCatalogEntry {
    pub name: String,
    pub vdli: IndexRange,
    pub smi: IndexRange,
    pub mhi: IndexRange,
}

/// On-disk shape of the catalog dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CropLibraryFile {
    pub crop_library: Vec<CropCatalogEntry>,
}

/// A list of strings, or a single free-text value where the data has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrList {
    List(Vec<String>),
    Text(String),
}

impl TextOrList {
    pub fn items(&self) -> Vec<&str> {
        match self {
            TextOrList::List(items) => items.iter().map(String::as_str).collect(),
            TextOrList::Text(text) => vec![text.as_str()],
        }
    }
}

/// Fertilizer advice: either per growth stage or a single note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fertilizers {
    ByStage(BTreeMap<String, TextOrList>),
    Text(String),
}

/// Agronomic detail for one canonical crop key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropDetailRecord {
    #[serde(default)]
    pub soil: Vec<String>,
    #[serde(default)]
    pub water: String,
    #[serde(default)]
    pub avg_yield_kg_per_acre: f64,
    #[serde(default)]
    pub investment_per_acre: f64,
    #[serde(default)]
    pub avg_profit_per_acre: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fertilizers: Option<Fertilizers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pests: Option<TextOrList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<TextOrList>,
}

impl CropDetailRecord {
    /// Investment and profit as percentage shares of their sum, each capped
    /// at 100. `None` when the sum is zero.
    pub fn cost_profit_split(&self) -> Option<(f64, f64)> {
        let total = self.investment_per_acre + self.avg_profit_per_acre;
        if total == 0.0 {
            return None;
        }
        let cost = (self.investment_per_acre / total * 100.0).min(100.0);
        let profit = (self.avg_profit_per_acre / total * 100.0).min(100.0);
        Some((cost, profit))
    }
}
