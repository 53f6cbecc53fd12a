use std::cmp::Ordering;

use crate::types::recommendation::ScoredCrop;

pub trait CropRanker {
    /// Higher ranks first.
    fn rank_value(&self, crop: &ScoredCrop<'_>) -> f64;

    /// Stable descending sort by [`rank_value`](Self::rank_value); ties keep
    /// their incoming order.
    fn rank(&self, crops: &mut [ScoredCrop<'_>]) {
        crops.sort_by(|a, b| {
            self.rank_value(b)
                .partial_cmp(&self.rank_value(a))
                .unwrap_or(Ordering::Equal)
        });
    }
}

/// v0: rank by average profit per acre; crops without details count as 0.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProfitRanker;

impl CropRanker for ProfitRanker {
    fn rank_value(&self, crop: &ScoredCrop<'_>) -> f64 {
        crop.profit()
    }
}
