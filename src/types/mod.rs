pub mod identifiers;
pub mod recommendation;
pub mod selection;

pub use identifiers::{normalize_crop_name, CropKey, DatasetVersion};
pub use recommendation::{
    IndexTriple, Recommendation, RecommendationReport, RecommendationSummary, ScoredCrop,
};
pub use selection::{Season, Selection, SelectionParseError, WaterSource};
