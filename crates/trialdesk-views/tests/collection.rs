use uuid::Uuid;

use trialdesk_core::models::study::Study;
use trialdesk_views::collection::Collection;
use trialdesk_views::error::ViewError;

fn study(title: &str) -> Study {
    Study {
        id: Some(Uuid::new_v4()),
        name: title.to_lowercase().replace(' ', "-"),
        title: title.to_string(),
        code: "000".to_string(),
        short_title: title.to_string(),
        ..Study::default()
    }
}

fn by_title() -> Collection<Study> {
    Collection::new(|a: &Study, b: &Study| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
}

fn titles(collection: &Collection<Study>) -> Vec<&str> {
    collection.items().iter().map(|s| s.title.as_str()).collect()
}

#[test]
fn set_all_reestablishes_the_sort_order() {
    let mut collection = by_title();
    collection.set_all(vec![study("Zeta"), study("Alpha")]);

    assert_eq!(titles(&collection), vec!["Alpha", "Zeta"]);
}

#[test]
fn upsert_appends_and_resorts() {
    let mut collection = by_title();
    collection.set_all(vec![study("Alpha"), study("Zeta")]);

    collection.upsert(study("Mid")).unwrap();

    assert_eq!(titles(&collection), vec!["Alpha", "Mid", "Zeta"]);
}

#[test]
fn upsert_replaces_by_id_without_duplicating() {
    let mut collection = by_title();
    let original = study("Alpha");
    collection.set_all(vec![original.clone(), study("Zeta")]);

    let mut renamed = original.clone();
    renamed.title = "Omega".to_string();
    collection.upsert(renamed).unwrap();

    assert_eq!(collection.len(), 2);
    assert_eq!(titles(&collection), vec!["Omega", "Zeta"]);
    assert_eq!(
        collection.get(original.id.unwrap()).unwrap().title,
        "Omega"
    );
}

#[test]
fn upsert_rejects_unsaved_entities() {
    let mut collection = by_title();
    let mut draft = study("Draft");
    draft.id = None;

    let error = collection.upsert(draft).unwrap_err();
    assert!(matches!(error, ViewError::Unsaved));
    assert!(collection.is_empty());
}

#[test]
fn removing_an_absent_id_is_a_noop() {
    let mut collection = by_title();
    collection.set_all(vec![study("Alpha")]);

    collection.remove(Uuid::new_v4());

    assert_eq!(collection.len(), 1);
}

#[test]
fn remove_where_drops_every_match() {
    let mut collection = by_title();
    collection.set_all(vec![study("Alpha"), study("Albatross"), study("Zeta")]);

    collection.remove_where(|s| s.title.starts_with("Al"));

    assert_eq!(titles(&collection), vec!["Zeta"]);
}

#[test]
fn sort_by_swaps_the_comparator() {
    let mut collection = by_title();
    collection.set_all(vec![study("Alpha"), study("Zeta")]);

    collection.sort_by(|a: &Study, b: &Study| {
        b.title.to_lowercase().cmp(&a.title.to_lowercase())
    });

    assert_eq!(titles(&collection), vec!["Zeta", "Alpha"]);
}

#[test]
fn filtered_matches_case_insensitively_and_preserves_order() {
    let mut collection = by_title();
    collection.set_all(vec![
        study("Adverse Events"),
        study("Demographics"),
        study("Demo Run"),
    ]);

    let visible = collection.filtered(Some("DEMO"));
    let visible: Vec<&str> = visible.iter().map(|s| s.title.as_str()).collect();

    assert_eq!(visible, vec!["Demo Run", "Demographics"]);
}

#[test]
fn empty_and_absent_queries_are_the_identity_projection() {
    let mut collection = by_title();
    collection.set_all(vec![study("Alpha"), study("Zeta")]);

    let all: Vec<&str> = collection.items().iter().map(|s| s.title.as_str()).collect();

    for query in [None, Some(""), Some("   ")] {
        let visible: Vec<&str> = collection
            .filtered(query)
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(visible, all);
    }
}

#[test]
fn filter_with_no_match_is_empty_not_an_error() {
    let mut collection = by_title();
    collection.set_all(vec![study("Alpha")]);

    assert!(collection.filtered(Some("xyzzy")).is_empty());
}
