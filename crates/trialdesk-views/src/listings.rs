//! Composition-root constructors for the standard listing screens.
//!
//! The hosting page builds one controller per mount point and drives it
//! with the shared [`ResourceClient`](trialdesk_client::resource::ResourceClient);
//! nothing here is discovered ambiently.

use uuid::Uuid;

use trialdesk_core::models::form::Form;
use trialdesk_core::models::patient::Patient;
use trialdesk_core::models::study::Study;
use trialdesk_core::models::visit::Visit;
use trialdesk_core::urls;

use crate::collection::Collection;
use crate::controller::{ListController, Routes};

/// Forms listing, ordered by title, case-insensitively.
pub fn forms() -> ListController<Form> {
    let collection = Collection::new(|a: &Form, b: &Form| {
        a.title.to_lowercase().cmp(&b.title.to_lowercase())
    });
    ListController::new(Routes::new(urls::FORMS, "forms"), collection)
}

/// Studies listing, ordered by title, case-insensitively.
pub fn studies() -> ListController<Study> {
    let collection = Collection::new(|a: &Study, b: &Study| {
        a.title.to_lowercase().cmp(&b.title.to_lowercase())
    });
    ListController::new(Routes::new(urls::STUDIES, "studies"), collection)
}

/// Patients of one study, ordered by site-assigned pid.
pub fn patients(study_id: Uuid) -> ListController<Patient> {
    let collection = Collection::new(|a: &Patient, b: &Patient| a.pid.cmp(&b.pid));
    ListController::new(
        Routes::nested(urls::study_patients(study_id), "patients", urls::PATIENTS),
        collection,
    )
}

/// Visits of one patient, most recent first.
pub fn visits(patient_id: Uuid) -> ListController<Visit> {
    let collection = Collection::new(|a: &Visit, b: &Visit| b.visit_date.cmp(&a.visit_date));
    ListController::new(
        Routes::nested(urls::patient_visits(patient_id), "visits", urls::VISITS),
        collection,
    )
}
