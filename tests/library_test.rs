use meal_makeover_rs::library::{
    recommend, search, write_library_csv, DietPreference, Goal, LibraryTag, LIBRARY,
};
use tempfile::NamedTempFile;

#[test]
fn test_empty_search_returns_whole_library() {
    let cards = search("", None);
    assert_eq!(cards.len(), LIBRARY.len());
    assert_eq!(cards[0].name, "Grilled Tandoori Chicken");
    assert_eq!(cards[13].name, "Grilled Chicken Burger");
}

#[test]
fn test_search_matches_original_name() {
    let names: Vec<&str> = search("noodles", None).iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Vegetable Noodle Bowl"]);

    let names: Vec<&str> = search("BIRYANI", None).iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Brown Rice Chicken Biryani"]);
}

#[test]
fn test_tag_filter_keeps_order() {
    let ids: Vec<u32> = search("", Some(LibraryTag::DiabeticFriendly))
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![5, 7, 8, 11, 13]);
}

#[test]
fn test_search_and_tag_combine() {
    let ids: Vec<u32> = search("grilled", Some(LibraryTag::HeartHealthy))
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![5]);

    assert!(search("pizza", Some(LibraryTag::LowCarb)).is_empty());
}

#[test]
fn test_csv_export_roundtrip_row_count() {
    let cards = search("", Some(LibraryTag::HighProtein));
    let file = NamedTempFile::new().unwrap();
    write_library_csv(&cards, file.path()).unwrap();

    let mut rdr = csv::Reader::from_path(file.path()).unwrap();
    assert_eq!(rdr.records().count(), cards.len());
}

#[test]
fn test_recommendations() {
    let rec = recommend(Goal::HealthyLifestyle, DietPreference::Balanced).unwrap();
    assert_eq!(rec.title, "Holistic Wellness");
    assert_eq!(rec.benefits[0], "Variety of nutrients");

    assert!(recommend(Goal::GainMuscle, DietPreference::Balanced).is_none());
}
