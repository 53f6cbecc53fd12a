//! Current selection plus the recommendations derived from it.

use crate::catalog::ReferenceData;
use crate::scoring::{CropRanker, ProfitRanker, Recommender};
use crate::types::recommendation::{Recommendation, RecommendationReport};
use crate::types::selection::{Season, Selection, WaterSource};

/// Holds the selection a user is editing and recomputes the report on every
/// change. Nothing else mutates the report.
pub struct RecommendationSession<'a, R = ProfitRanker> {
    data: &'a ReferenceData,
    recommender: Recommender<R>,
    selection: Selection,
    report: RecommendationReport,
    generation: u64,
}

impl<'a> RecommendationSession<'a, ProfitRanker> {
    pub fn new(data: &'a ReferenceData) -> Self {
        Self::with_recommender(data, Recommender::default())
    }
}

impl<'a, R: CropRanker> RecommendationSession<'a, R> {
    pub fn with_recommender(data: &'a ReferenceData, recommender: Recommender<R>) -> Self {
        let selection = Selection::default();
        let report = recommender.report(data, &selection);
        Self {
            data,
            recommender,
            selection,
            report,
            generation: 0,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn report(&self) -> &RecommendationReport {
        &self.report
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.report.recommendations
    }

    /// Bumped on every recompute.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Districts offered for the current region.
    pub fn district_options(&self) -> &[String] {
        self.data.regions.districts(&self.selection.region)
    }

    /// Changing the region clears the district.
    pub fn set_region(&mut self, region: impl Into<String>) {
        let region = region.into();
        if region != self.selection.region {
            self.selection.district.clear();
        }
        self.selection.region = region;
        self.recompute();
    }

    pub fn set_district(&mut self, district: impl Into<String>) {
        self.selection.district = district.into();
        self.recompute();
    }

    pub fn set_season(&mut self, season: Option<Season>) {
        self.selection.season = season;
        self.recompute();
    }

    pub fn set_water_source(&mut self, water_source: Option<WaterSource>) {
        self.selection.water_source = water_source;
        self.recompute();
    }

    /// Replace the whole selection at once.
    pub fn replace(&mut self, selection: Selection) {
        self.selection = selection;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.report = self.recommender.report(self.data, &self.selection);
        self.generation += 1;
    }
}
