use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::entity::Entity;

/// One scheduled or completed patient visit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Visit {
    pub id: Option<Uuid>,
    pub visit_date: Option<jiff::civil::Date>,
    #[serde(default)]
    pub cycles: Vec<String>,
    #[serde(default)]
    pub status: VisitStatus,
    pub created_at: Option<jiff::Timestamp>,
    pub updated_at: Option<jiff::Timestamp>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VisitStatus {
    #[default]
    Pending,
    Complete,
    Missed,
}

impl VisitStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Complete => "complete",
            Self::Missed => "missed",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisitRest {
    pub visit_date: Option<jiff::civil::Date>,
    pub cycles: Vec<String>,
    pub status: VisitStatus,
}

impl Entity for Visit {
    type Rest = VisitRest;

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn to_rest(&self) -> VisitRest {
        VisitRest {
            visit_date: self.visit_date,
            cycles: self.cycles.clone(),
            status: self.status,
        }
    }

    fn search_terms(&self, out: &mut Vec<String>) {
        out.push(self.status.as_str().to_string());
        if let Some(date) = self.visit_date {
            out.push(date.to_string());
        }
        out.extend(self.cycles.iter().cloned());
    }
}
