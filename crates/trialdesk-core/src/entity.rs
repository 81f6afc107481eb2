use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::CoreError;

/// Contract every REST-backed record implements.
///
/// An entity is constructed empty (`Default`), filled wholesale from a
/// server snapshot via [`Entity::update`], and projected back to the
/// allow-listed write shape via [`Entity::to_rest`]. Fields are never
/// patched one at a time from the network; local edits happen on a draft
/// clone owned by the edit session.
pub trait Entity: Clone + Default + Serialize + DeserializeOwned {
    /// Allow-listed projection the server accepts on create and update.
    type Rest: Serialize + DeserializeOwned;

    /// Server-assigned identifier, absent while unsaved.
    fn id(&self) -> Option<Uuid>;

    /// True until the server has assigned an id.
    fn is_new(&self) -> bool {
        self.id().is_none()
    }

    /// Replace every field from a full server snapshot.
    ///
    /// `None` resets the record to its empty state. A snapshot that fails
    /// to decode (missing required field, wrong shape) leaves the record
    /// untouched; unknown fields in the snapshot are ignored. Partial
    /// snapshots are not supported; the server always sends the whole
    /// record back.
    fn update(&mut self, raw: Option<serde_json::Value>) -> Result<(), CoreError> {
        match raw {
            Some(value) => *self = serde_json::from_value(value)?,
            None => *self = Self::default(),
        }
        Ok(())
    }

    /// The write projection. Server-managed and transient fields stay out
    /// of network payloads.
    fn to_rest(&self) -> Self::Rest;

    /// Push the field values the live text filter searches.
    ///
    /// By convention: name/title-class fields, plus the status and date
    /// fields of nested child records.
    fn search_terms(&self, out: &mut Vec<String>);
}

/// Build an entity directly from a server snapshot.
pub fn from_snapshot<E: Entity>(raw: serde_json::Value) -> Result<E, CoreError> {
    let mut entity = E::default();
    entity.update(Some(raw))?;
    Ok(entity)
}
