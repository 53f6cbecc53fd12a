pub mod filters;
pub mod indices;
pub mod ranking;
pub mod seed;

use tracing::debug;

use crate::catalog::ReferenceData;
use crate::types::recommendation::{
	Recommendation, RecommendationReport, RecommendationSummary, ScoredCrop,
};
use crate::types::selection::Selection;
pub use filters::{filter_catalog, FilterResult, MIN_RANGE_MATCHES};
pub use indices::{derive_indices, IndexAdjustment, IndexProfile};
pub use ranking::{CropRanker, ProfitRanker};
pub use seed::{round_hundredths, seed_hash, seeded_value};

pub struct Recommender<R> {
	profile: IndexProfile,
	ranker: R,
}

impl Default for Recommender<ProfitRanker> {
	fn default() -> Self {
		Self {
			profile: IndexProfile::v0(),
			ranker: ProfitRanker,
		}
	}
}

impl<R> Recommender<R>
where
	R: CropRanker,
{
	pub fn new(profile: IndexProfile, ranker: R) -> Self {
		Self { profile, ranker }
	}

	pub fn profile(&self) -> &IndexProfile {
		&self.profile
	}

	/// Ranked recommendations for `selection`; empty when it is not ready.
	pub fn recommend(&self, data: &ReferenceData, selection: &Selection) -> Vec<Recommendation> {
		self.report(data, selection).recommendations
	}

	pub fn report(&self, data: &ReferenceData, selection: &Selection) -> RecommendationReport {
		let mut summary = RecommendationSummary {
			dataset_version: data.version.clone(),
			profile: self.profile.name.clone(),
			catalog_size: data.catalog.len(),
			district_eligible: 0,
			range_qualified: 0,
			displayable: 0,
		};

		// 0. Not ready: nothing to compute, not an error
		let Some(indices) = self.profile.derive(selection) else {
			return RecommendationReport {
				selection: selection.clone(),
				indices: None,
				recommendations: Vec::new(),
				summary,
			};
		};

		// 1. Filtering Phase
		let FilterResult {
			mut candidates,
			district_eligible,
		} = filter_catalog(data, &selection.district, &indices);

		// 2. Ordering Phase
		self.ranker.rank(&mut candidates);

		debug_assert!(candidates
			.windows(2)
			.all(|w| self.ranker.rank_value(&w[0]) >= self.ranker.rank_value(&w[1])));

		let recommendations: Vec<Recommendation> =
			candidates.into_iter().map(into_recommendation).collect();

		summary.district_eligible = district_eligible;
		summary.range_qualified = recommendations.len();
		summary.displayable = recommendations.iter().filter(|r| r.is_displayable()).count();

		debug!(
			district = %selection.district,
			vdli = indices.vdli,
			smi = indices.smi,
			mhi = indices.mhi,
			eligible = district_eligible,
			returned = recommendations.len(),
			"evaluated selection"
		);

		RecommendationReport {
			selection: selection.clone(),
			indices: Some(indices),
			recommendations,
			summary,
		}
	}
}

fn into_recommendation(crop: ScoredCrop<'_>) -> Recommendation {
	let profit_per_acre = crop.profit();
	Recommendation {
		name: crop.entry.name.clone(),
		key: crop.key,
		vdli: crop.entry.vdli,
		smi: crop.entry.smi,
		mhi: crop.entry.mhi,
		range_matches: crop.range_matches,
		profit_per_acre,
		details: crop.details.cloned(),
	}
}
