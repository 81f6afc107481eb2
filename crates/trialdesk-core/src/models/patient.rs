use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::entity::Entity;
use crate::models::visit::Visit;

/// An enrolled patient, with the visit summaries shown on the listing row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub id: Option<Uuid>,
    /// Site-assigned patient identifier, e.g. `"XXX-001"`.
    pub pid: String,
    pub site: String,
    #[serde(default)]
    pub references: Vec<String>,
    #[serde(default)]
    pub visits: Vec<Visit>,
    pub created_at: Option<jiff::Timestamp>,
    pub updated_at: Option<jiff::Timestamp>,
}

/// Fields the server accepts for a patient create or update. Visits are
/// managed through their own endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientRest {
    pub pid: String,
    pub site: String,
    pub references: Vec<String>,
}

impl Entity for Patient {
    type Rest = PatientRest;

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn to_rest(&self) -> PatientRest {
        PatientRest {
            pid: self.pid.clone(),
            site: self.site.clone(),
            references: self.references.clone(),
        }
    }

    fn search_terms(&self, out: &mut Vec<String>) {
        out.push(self.pid.clone());
        out.push(self.site.clone());
        out.extend(self.references.iter().cloned());
        for visit in &self.visits {
            out.push(visit.status.as_str().to_string());
            if let Some(date) = visit.visit_date {
                out.push(date.to_string());
            }
        }
    }
}
