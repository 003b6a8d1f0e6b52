//! Tests for the lesson catalog surface.

use uilab::catalog::{Topic, all, by_number, by_topic};

#[test]
fn test_topics_cover_the_course_in_blocks_of_five() {
    let expected = [
        (Topic::Composition, 1..=5),
        (Topic::Events, 6..=10),
        (Topic::Forms, 11..=15),
        (Topic::Routing, 16..=20),
        (Topic::Memoization, 21..=25),
        (Topic::Registration, 26..=30),
    ];
    for (topic, numbers) in expected {
        let got: Vec<u8> = by_topic(topic).map(|e| e.number).collect();
        let want: Vec<u8> = numbers.collect();
        assert_eq!(got, want, "{topic:?}");
    }
}

#[test]
fn test_catalog_serializes_to_json() {
    let json = serde_json::to_value(all()).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 30);
    assert_eq!(entries[13]["title"], "Multi-Step Form");
    assert_eq!(entries[13]["topic"], "Forms");
    assert!(entries[13]["instructions"].as_array().unwrap().len() >= 3);
}

#[test]
fn test_titles_are_unique() {
    let mut titles: Vec<&str> = all().iter().map(|e| e.title).collect();
    titles.sort_unstable();
    titles.dedup();
    assert_eq!(titles.len(), 30);
}

#[test]
fn test_by_number_round_trip() {
    for exercise in all() {
        assert_eq!(by_number(exercise.number).unwrap().title, exercise.title);
    }
}
