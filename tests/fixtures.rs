//! Integration tests for fixture loading, end to end through the composer.

use bracket_layout::{
    compute_layout, load_bracket, read_matches_csv, read_matches_json, BracketInput,
    FixtureError, LayoutConfig, Party, GRAND_FINAL_ID,
};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

#[test]
fn demo_single_elimination_json() {
    let input = load_bracket(&fixture("single_elimination.json")).unwrap();
    let BracketInput::Single(matches) = &input else {
        panic!("expected a single-elimination fixture");
    };
    assert_eq!(matches.len(), 22);
    assert_eq!(matches[0].top_party, Some(Party::named("Team A")));
    assert_eq!(matches[0].number_of_rounds, Some(3));
    assert!(matches[21].top_party.is_none());

    let diagram = compute_layout(&input, &LayoutConfig::default()).unwrap();
    assert!(diagram.warnings.is_empty());
    // Rounds of 12, 6, 3 and 1.
    assert_eq!(diagram.label_nodes().count(), 4);
    assert_eq!(diagram.edges.len(), 21);
}

#[test]
fn demo_three_matches_json() {
    let input = load_bracket(&fixture("three_matches.json")).unwrap();
    let diagram = compute_layout(&input, &LayoutConfig::default()).unwrap();
    assert_eq!(diagram.edges.len(), 2);
    assert!(diagram.warnings.is_empty());
}

#[test]
fn demo_double_elimination_json() {
    let input = load_bracket(&fixture("double_elimination.json")).unwrap();
    let BracketInput::Double { upper, lower } = &input else {
        panic!("expected a double-elimination fixture");
    };
    assert_eq!(upper.len(), 3);
    assert_eq!(lower.len(), 3);

    let diagram = compute_layout(&input, &LayoutConfig::default()).unwrap();
    let sources: Vec<&str> = diagram
        .incoming(GRAND_FINAL_ID)
        .into_iter()
        .map(|e| e.source.as_str())
        .collect();
    assert_eq!(sources, vec!["upper-m3", "lower-m3"]);
}

#[test]
fn double_elimination_csv() {
    let input = load_bracket(&fixture("double_elimination.csv")).unwrap();
    let BracketInput::Double { upper, lower } = &input else {
        panic!("expected a double-elimination fixture");
    };
    assert_eq!(upper.len(), 7);
    assert_eq!(lower.len(), 3);
    assert!(upper[4].top_party.is_none());
    assert_eq!(upper[0].name.as_deref(), Some("Winners R1 M1"));

    let diagram = compute_layout(&input, &LayoutConfig::default()).unwrap();
    assert!(diagram.warnings.is_empty());
    let sources: Vec<&str> = diagram
        .incoming(GRAND_FINAL_ID)
        .into_iter()
        .map(|e| e.source.as_str())
        .collect();
    assert_eq!(sources, vec!["w7", "l3"]);
}

#[test]
fn single_elimination_csv_without_section_column() {
    let input = load_bracket(&fixture("single_elimination.csv")).unwrap();
    let BracketInput::Single(matches) = &input else {
        panic!("expected a single-elimination fixture");
    };
    assert_eq!(matches.len(), 7);
    assert_eq!(matches[6].number_of_rounds, Some(5));
    assert_eq!(matches[4].bottom_party, None);
}

#[test]
fn csv_with_unknown_section_is_rejected() {
    let data = "id,name,top,bottom,rounds,section\n\
                a,,X,Y,,winners\n\
                b,,Z,W,,sideways\n";
    let err = read_matches_csv(data.as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        FixtureError::UnknownSection { row: 2, ref value } if value == "sideways"
    ));
}

#[test]
fn csv_with_missing_section_is_rejected() {
    let data = "id,name,top,bottom,rounds,section\n\
                a,,X,Y,,losers\n\
                b,,,,,\n";
    let err = read_matches_csv(data.as_bytes()).unwrap_err();
    assert!(matches!(err, FixtureError::MissingSection { row: 2 }));
}

#[test]
fn malformed_json_is_reported() {
    let err = read_matches_json(&b"{ \"upper\": [ "[..]).unwrap_err();
    assert!(matches!(err, FixtureError::Json(_)));
    assert!(err.to_string().starts_with("Invalid JSON fixture"));
}

#[test]
fn missing_file_is_reported() {
    let err = load_bracket(&fixture("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, FixtureError::Io(_)));
}
