use std::time::Duration;

use uuid::Uuid;

use trialdesk_core::models::form::{Form, FormStatus, FormVersion};
use trialdesk_core::models::patient::Patient;
use trialdesk_core::models::visit::{Visit, VisitStatus};
use trialdesk_views::filter::{Debouncer, matches};

fn vitals() -> Form {
    Form {
        id: Some(Uuid::new_v4()),
        name: "vitals".to_string(),
        title: "Vital Signs".to_string(),
        versions: vec![FormVersion {
            label: "v2".to_string(),
            status: FormStatus::Published,
            publish_date: Some(jiff::civil::date(2024, 3, 1)),
            retract_date: None,
        }],
        ..Form::default()
    }
}

#[test]
fn matching_is_case_insensitive_substring() {
    let form = vitals();
    assert!(matches(&form, "vital"));
    assert!(matches(&form, "signs"));
    assert!(!matches(&form, "demographics"));
}

#[test]
fn nested_version_status_and_dates_are_searchable() {
    let form = vitals();
    assert!(matches(&form, "published"));
    assert!(matches(&form, "2024-03"));
}

#[test]
fn patient_visits_contribute_status_and_date() {
    let patient = Patient {
        id: Some(Uuid::new_v4()),
        pid: "XXX-001".to_string(),
        site: "UCSD".to_string(),
        visits: vec![Visit {
            id: Some(Uuid::new_v4()),
            visit_date: Some(jiff::civil::date(2024, 10, 23)),
            status: VisitStatus::Missed,
            ..Visit::default()
        }],
        ..Patient::default()
    };

    assert!(matches(&patient, "missed"));
    assert!(matches(&patient, "2024-10-23"));
    assert!(matches(&patient, "xxx-001"));
}

#[tokio::test]
async fn a_lone_input_settles_with_its_value() {
    let debouncer = Debouncer::new(Duration::from_millis(10));
    assert_eq!(
        debouncer.settle("vit".to_string()).await,
        Some("vit".to_string())
    );
}

#[tokio::test]
async fn a_newer_input_supersedes_the_older_one() {
    let debouncer = Debouncer::new(Duration::from_millis(20));

    let (first, second) = tokio::join!(
        debouncer.settle("vit".to_string()),
        debouncer.settle("vital".to_string()),
    );

    assert_eq!(first, None);
    assert_eq!(second, Some("vital".to_string()));
}

#[tokio::test]
async fn sequential_inputs_each_settle() {
    let debouncer = Debouncer::new(Duration::from_millis(5));

    assert!(debouncer.settle("a".to_string()).await.is_some());
    assert!(debouncer.settle("b".to_string()).await.is_some());
}
