use super::*;

fn table(pairs: &[(&str, &str)]) -> RatingTable {
    RatingTable::from_pairs(
        pairs
            .iter()
            .map(|(country, cert)| (country.to_string(), cert.to_string())),
    )
}

#[test]
fn test_preferred_country_wins() {
    let ratings = table(&[("JP", "G"), ("CN", "PG"), ("US", "PG-13")]);
    assert_eq!(select_rating(&ratings), Some(("US", "PG-13")));

    let ratings = table(&[("JP", "G"), ("HK", "IIA"), ("GB", "12A")]);
    assert_eq!(select_rating(&ratings), Some(("GB", "12A")));
}

#[test]
fn test_falls_back_to_first_inserted() {
    let ratings = table(&[("KR", "15"), ("FR", "TP"), ("DE", "12")]);
    assert_eq!(select_rating(&ratings), Some(("KR", "15")));
}

#[test]
fn test_empty_table_selects_nothing() {
    assert_eq!(select_rating(&RatingTable::default()), None);
}

#[test]
fn test_first_certification_per_country_kept() {
    let ratings = table(&[("us", "R"), ("US", "PG"), ("CN", ""), ("CN", "G")]);

    assert_eq!(ratings.len(), 2);
    assert_eq!(ratings.get("US"), Some("R"));
    assert_eq!(ratings.get("cn"), Some("G"));
}

#[test]
fn test_from_details() {
    let details: EntityDetails = serde_json::from_str(
        r#"{
            "id": 1,
            "content_ratings": {"results": [
                {"iso_3166_1": "KR", "rating": "15"},
                {"iso_3166_1": "HK", "rating": "IIB"}
            ]}
        }"#,
    )
    .unwrap();

    let ratings = RatingTable::from_details(&details);
    assert_eq!(select_rating(&ratings), Some(("HK", "IIB")));
}
