use krishi_core::catalog::ReferenceData;
use krishi_core::scoring::Recommender;
use krishi_core::types::{Season, Selection, WaterSource};
use krishi_core::RecommendationSession;

fn reference() -> ReferenceData {
    ReferenceData::from_json_strs(
        include_str!("fixtures/regions.json"),
        include_str!("fixtures/district_crops.json"),
        include_str!("fixtures/crop_library.json"),
        include_str!("fixtures/crop_details.json"),
    )
    .unwrap()
}

fn names(session: &RecommendationSession<'_>) -> Vec<String> {
    session
        .recommendations()
        .iter()
        .map(|r| r.name.clone())
        .collect()
}

#[test]
fn fresh_session_recommends_nothing() {
    let data = reference();
    let session = RecommendationSession::new(&data);

    assert_eq!(session.generation(), 0);
    assert_eq!(session.selection(), &Selection::default());
    assert!(session.report().indices.is_none());
    assert!(session.recommendations().is_empty());
    assert!(session.district_options().is_empty());
}

#[test]
fn every_setter_recomputes() {
    let data = reference();
    let mut session = RecommendationSession::new(&data);

    session.set_region("Andhra Pradesh");
    assert_eq!(session.generation(), 1);
    assert_eq!(session.district_options(), ["Guntur", "Krishna"]);
    assert!(session.recommendations().is_empty());

    session.set_district("Guntur");
    session.set_season(Some(Season::Kharif));
    assert_eq!(session.generation(), 3);
    assert!(session.report().indices.is_none());

    session.set_water_source(Some(WaterSource::Canal));
    assert_eq!(session.generation(), 4);
    assert_eq!(names(&session), ["Turmeric", "Chillies", "Paddy", "Bajra"]);

    session.set_water_source(Some(WaterSource::Borewell));
    assert_eq!(names(&session), ["Chillies", "Cotton", "Paddy"]);

    session.set_season(None);
    assert!(session.report().indices.is_none());
    assert!(session.recommendations().is_empty());
}

#[test]
fn region_change_clears_district() {
    let data = reference();
    let mut session = RecommendationSession::new(&data);
    session.replace(Selection::new(
        "Andhra Pradesh",
        "Guntur",
        Season::Kharif,
        WaterSource::Canal,
    ));
    assert!(!session.recommendations().is_empty());

    session.set_region("Andhra Pradesh");
    assert_eq!(session.selection().district, "Guntur");
    assert!(!session.recommendations().is_empty());

    session.set_region("Punjab");
    assert_eq!(session.selection().district, "");
    assert_eq!(session.district_options(), ["Ludhiana", "Amritsar"]);
    assert!(session.recommendations().is_empty());
    assert_eq!(session.selection().season, Some(Season::Kharif));
}

#[test]
fn session_matches_direct_recommendation() {
    let data = reference();
    let selection = Selection::new("Punjab", "Ludhiana", Season::Kharif, WaterSource::Canal);

    let mut session = RecommendationSession::with_recommender(&data, Recommender::default());
    session.replace(selection.clone());

    assert_eq!(
        session.report(),
        &Recommender::default().report(&data, &selection)
    );
    assert_eq!(names(&session), ["Paddy", "Wheat"]);
}
