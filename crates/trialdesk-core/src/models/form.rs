use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::entity::Entity;

/// A data-capture form, with its published versions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Form {
    pub id: Option<Uuid>,
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub versions: Vec<FormVersion>,
    pub created_at: Option<jiff::Timestamp>,
    pub updated_at: Option<jiff::Timestamp>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormVersion {
    pub label: String,
    #[serde(default)]
    pub status: FormStatus,
    pub publish_date: Option<jiff::civil::Date>,
    pub retract_date: Option<jiff::civil::Date>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FormStatus {
    #[default]
    Draft,
    Published,
    Retracted,
}

impl FormStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Retracted => "retracted",
        }
    }
}

/// Fields the server accepts for a form create or update. Versions are
/// managed through their own endpoints and never travel with the form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormRest {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
}

impl Entity for Form {
    type Rest = FormRest;

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn to_rest(&self) -> FormRest {
        FormRest {
            name: self.name.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }

    fn search_terms(&self, out: &mut Vec<String>) {
        out.push(self.name.clone());
        out.push(self.title.clone());
        for version in &self.versions {
            out.push(version.label.clone());
            out.push(version.status.as_str().to_string());
            if let Some(date) = version.publish_date {
                out.push(date.to_string());
            }
            if let Some(date) = version.retract_date {
                out.push(date.to_string());
            }
        }
    }
}
