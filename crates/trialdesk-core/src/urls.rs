//! REST endpoint path conventions.
//!
//! Pure string functions — no HTTP dependency. These define the canonical
//! resource layout of the trialdesk API.

use uuid::Uuid;

pub const FORMS: &str = "/forms";

pub fn form(id: Uuid) -> String {
    format!("/forms/{id}")
}

pub const STUDIES: &str = "/studies";

pub fn study(id: Uuid) -> String {
    format!("/studies/{id}")
}

pub fn study_patients(study_id: Uuid) -> String {
    format!("/studies/{study_id}/patients")
}

pub const PATIENTS: &str = "/patients";

pub fn patient(id: Uuid) -> String {
    format!("/patients/{id}")
}

pub fn patient_visits(patient_id: Uuid) -> String {
    format!("/patients/{patient_id}/visits")
}

pub const VISITS: &str = "/visits";

pub fn visit(id: Uuid) -> String {
    format!("/visits/{id}")
}
