use krishi_core::catalog::ReferenceData;
use krishi_core::scoring::{Recommender, MIN_RANGE_MATCHES};
use krishi_core::types::{Season, Selection, WaterSource};

fn reference() -> ReferenceData {
    ReferenceData::from_json_strs(
        include_str!("fixtures/regions.json"),
        include_str!("fixtures/district_crops.json"),
        include_str!("fixtures/crop_library.json"),
        include_str!("fixtures/crop_details.json"),
    )
    .unwrap()
}

fn all_selections(data: &ReferenceData) -> Vec<Selection> {
    let mut selections = Vec::new();
    for region in data.regions.regions() {
        for district in data.regions.districts(region) {
            for season in Season::ALL {
                for water in WaterSource::ALL {
                    selections.push(Selection::new(region, district.as_str(), season, water));
                }
            }
        }
    }
    selections
}

#[test]
fn invariant_recommendations_are_eligible_matched_and_sorted() {
    let data = reference();
    let recommender = Recommender::default();

    for selection in all_selections(&data) {
        let report = recommender.report(&data, &selection);
        let indices = report.indices.expect("ready selection must derive indices");
        let eligible = data
            .district_crops
            .eligible_keys(&selection.district, &data.aliases);

        for value in [indices.vdli, indices.smi, indices.mhi] {
            assert!((0.0..=1.0).contains(&value), "index {value} out of [0, 1]");
        }

        for rec in &report.recommendations {
            assert!(eligible.contains(&rec.key), "{} not grown in {}", rec.name, selection.district);

            let matches = u8::from(rec.vdli.contains(indices.vdli))
                + u8::from(rec.smi.contains(indices.smi))
                + u8::from(rec.mhi.contains(indices.mhi));
            assert!(matches >= MIN_RANGE_MATCHES, "{} matched only {matches}", rec.name);
            assert_eq!(matches, rec.range_matches);

            let expected_profit = data
                .details_for(&rec.name)
                .map_or(0.0, |d| d.avg_profit_per_acre);
            assert_eq!(rec.profit_per_acre, expected_profit);
        }

        assert!(
            report
                .recommendations
                .windows(2)
                .all(|w| w[0].profit_per_acre >= w[1].profit_per_acre),
            "not sorted by profit for {selection:?}"
        );

        assert_eq!(report.summary.range_qualified, report.recommendations.len());
        assert!(report.summary.district_eligible >= report.summary.range_qualified);
        assert_eq!(report.summary.displayable, report.displayable().count());
    }
}

#[test]
fn invariant_recommend_is_deterministic() {
    let data = reference();
    let recommender = Recommender::default();

    for selection in all_selections(&data) {
        let first = serde_json::to_string(&recommender.report(&data, &selection)).unwrap();
        for _ in 0..3 {
            let again = serde_json::to_string(&recommender.report(&data, &selection)).unwrap();
            assert_eq!(first, again, "non-deterministic output for {selection:?}");
        }
    }
}

#[test]
fn invariant_any_empty_field_yields_nothing() {
    let data = reference();
    let recommender = Recommender::default();
    let full = Selection::new("Andhra Pradesh", "Guntur", Season::Kharif, WaterSource::Canal);
    assert!(!recommender.recommend(&data, &full).is_empty());

    let mut no_region = full.clone();
    no_region.region.clear();
    let mut no_district = full.clone();
    no_district.district.clear();
    let mut no_season = full.clone();
    no_season.season = None;
    let mut no_water = full.clone();
    no_water.water_source = None;

    for selection in [Selection::default(), no_region, no_district, no_season, no_water] {
        let report = recommender.report(&data, &selection);
        assert!(report.recommendations.is_empty());
        assert_eq!(report.indices, None);
        assert_eq!(report.summary.district_eligible, 0);
    }
}

#[test]
fn crops_without_details_keep_their_slot_at_the_end() {
    let data = reference();
    let selection = Selection::new("Andhra Pradesh", "Guntur", Season::Kharif, WaterSource::Canal);
    let report = Recommender::default().report(&data, &selection);

    let last = report.recommendations.last().unwrap();
    assert_eq!(last.name, "Bajra");
    assert_eq!(last.key.as_str(), "pearl_millet");
    assert_eq!(last.profit_per_acre, 0.0);
    assert!(!last.is_displayable());

    let shown: Vec<&str> = report.displayable().map(|r| r.name.as_str()).collect();
    assert_eq!(shown, vec!["Turmeric", "Chillies", "Paddy"]);
    assert_eq!(report.summary.district_eligible, 5);
    assert_eq!(report.summary.range_qualified, 4);
    assert_eq!(report.summary.displayable, 3);
}

#[test]
fn profit_ties_keep_catalog_order() {
    let data = reference();
    let selection = Selection::new("Andhra Pradesh", "Guntur", Season::Kharif, WaterSource::Canal);
    let recs = Recommender::default().recommend(&data, &selection);

    // Turmeric precedes Chillies in the catalog; both earn 60000.
    assert_eq!(recs[0].name, "Turmeric");
    assert_eq!(recs[1].name, "Chillies");
    assert_eq!(recs[0].profit_per_acre, recs[1].profit_per_acre);
}

#[test]
fn alias_spellings_share_one_key() {
    let data = reference();
    let paddy = data.key_for("paddy").unwrap();
    for name in ["Rice", "rice", "RICE "] {
        assert_eq!(data.key_for(name), Some(paddy.clone()));
    }
    assert_eq!(
        data.details_for("RICE ").map(|d| d.avg_profit_per_acre),
        Some(22000.0)
    );
}
