use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::entity::Entity;

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Study {
    pub id: Option<Uuid>,
    pub name: String,
    pub title: String,
    pub code: String,
    pub short_title: String,
    pub consent_date: Option<jiff::civil::Date>,
    pub created_at: Option<jiff::Timestamp>,
    pub updated_at: Option<jiff::Timestamp>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudyRest {
    pub name: String,
    pub title: String,
    pub code: String,
    pub short_title: String,
    pub consent_date: Option<jiff::civil::Date>,
}

impl Entity for Study {
    type Rest = StudyRest;

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn to_rest(&self) -> StudyRest {
        StudyRest {
            name: self.name.clone(),
            title: self.title.clone(),
            code: self.code.clone(),
            short_title: self.short_title.clone(),
            consent_date: self.consent_date,
        }
    }

    fn search_terms(&self, out: &mut Vec<String>) {
        out.push(self.name.clone());
        out.push(self.title.clone());
        out.push(self.code.clone());
        out.push(self.short_title.clone());
    }
}
