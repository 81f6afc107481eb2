use serde_json::Value;
use uuid::Uuid;

use trialdesk_client::envelope;
use trialdesk_client::error::ApiError;
use trialdesk_client::resource::{ResourceClient, Verb};
use trialdesk_core::entity::{Entity, from_snapshot};

use crate::collection::Collection;
use crate::error::ViewError;
use crate::session::{EditSession, Mode};

/// Endpoint wiring for one listing screen.
#[derive(Debug, Clone)]
pub struct Routes {
    /// Collection endpoint: listing GET, create POST.
    collection: String,
    /// Key of the listing envelope, e.g. `"forms"`.
    listing_key: &'static str,
    /// Prefix for per-entity endpoints; usually equals `collection`.
    entity_prefix: String,
}

impl Routes {
    pub fn new(collection: impl Into<String>, listing_key: &'static str) -> Self {
        let collection = collection.into();
        Self {
            entity_prefix: collection.clone(),
            collection,
            listing_key,
        }
    }

    /// Children listed under a parent but addressed flat, e.g. visits
    /// listed at `/patients/{id}/visits` and addressed at `/visits/{id}`.
    pub fn nested(
        collection: impl Into<String>,
        listing_key: &'static str,
        entity_prefix: impl Into<String>,
    ) -> Self {
        Self {
            collection: collection.into(),
            listing_key,
            entity_prefix: entity_prefix.into(),
        }
    }

    fn entity(&self, id: Uuid) -> String {
        format!("{}/{}", self.entity_prefix, id)
    }
}

/// One mutating request captured at commit time.
///
/// Stamped with the session generation so its response is recognized as
/// stale if the session moves on before the round trip finishes.
#[derive(Debug)]
pub struct PendingCommit {
    generation: u64,
    mode: Mode,
    verb: Verb,
    path: String,
    body: Option<Value>,
}

impl PendingCommit {
    pub fn verb(&self) -> Verb {
        self.verb
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

/// What became of a finished commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Collection updated, session back to Idle.
    Committed,
    /// Failure recorded on the surface; session kept open for correction.
    Failed,
    /// Response arrived for a session that no longer exists; discarded.
    Stale,
}

/// Glue for one listing screen: collection + edit session + routes.
pub struct ListController<E: Entity> {
    pub collection: Collection<E>,
    pub session: EditSession<E>,
    routes: Routes,
    filter: Option<String>,
}

impl<E: Entity> ListController<E> {
    pub fn new(routes: Routes, collection: Collection<E>) -> Self {
        Self {
            collection,
            session: EditSession::default(),
            routes,
            filter: None,
        }
    }

    /// Fetch the listing and replace the collection.
    pub async fn load(&mut self, client: &ResourceClient) -> Result<(), ViewError> {
        let value = client.get(&self.routes.collection).await?;
        let mut entities = Vec::new();
        for raw in envelope::items(value, self.routes.listing_key)? {
            entities.push(from_snapshot::<E>(raw)?);
        }
        self.collection.set_all(entities);
        Ok(())
    }

    /// Install the settled filter query (the host passes the debounced
    /// value, not raw keystrokes).
    pub fn set_filter(&mut self, query: Option<String>) {
        self.filter = query;
    }

    /// The filtered view the host renders.
    pub fn visible(&self) -> Vec<&E> {
        self.collection.filtered(self.filter.as_deref())
    }

    /// Capture the mutating request for the current session.
    ///
    /// Rejects double submission while a commit is in flight; the gate
    /// lives here, not in whatever disables the submit button.
    pub fn begin_commit(&mut self) -> Result<PendingCommit, ViewError> {
        if self.session.is_busy() {
            return Err(ViewError::CommitInFlight);
        }

        let mode = self.session.mode();
        let (verb, path, body) = match mode {
            Mode::Idle => return Err(ViewError::NothingToCommit),
            Mode::Adding => {
                let draft = self.session.draft().ok_or(ViewError::NothingToCommit)?;
                let body = serde_json::to_value(draft.to_rest()).map_err(ViewError::Encode)?;
                (Verb::Post, self.routes.collection.clone(), Some(body))
            }
            Mode::Editing => {
                let id = self.session.selected().ok_or(ViewError::NothingToCommit)?;
                let draft = self.session.draft().ok_or(ViewError::NothingToCommit)?;
                let body = serde_json::to_value(draft.to_rest()).map_err(ViewError::Encode)?;
                (Verb::Put, self.routes.entity(id), Some(body))
            }
            Mode::Deleting => {
                let id = self.session.selected().ok_or(ViewError::NothingToCommit)?;
                (Verb::Delete, self.routes.entity(id), None)
            }
        };

        let generation = self.session.mark_busy();
        Ok(PendingCommit {
            generation,
            mode,
            verb,
            path,
            body,
        })
    }

    /// Apply a finished round trip.
    ///
    /// Success merges the canonical server entity and closes the session;
    /// failure lands on the surface and leaves mode, selection, and draft
    /// intact so the user can correct and resubmit. Either way the busy
    /// flag drops, unless the response is stale, in which case nothing is
    /// touched at all.
    pub fn apply_outcome(
        &mut self,
        pending: PendingCommit,
        result: Result<Value, ApiError>,
    ) -> CommitOutcome {
        if !self.session.finish(pending.generation) {
            tracing::debug!(path = %pending.path, "discarding stale response");
            return CommitOutcome::Stale;
        }

        let value = match result {
            Ok(value) => value,
            Err(error) => {
                self.session.surface_mut().absorb(&error);
                return CommitOutcome::Failed;
            }
        };

        match self.merge_success(pending.mode, value) {
            Ok(()) => {
                self.session.clear();
                CommitOutcome::Committed
            }
            Err(error) => {
                tracing::error!(%error, "could not merge committed entity");
                self.session.surface_mut().set_banner(error.to_string());
                CommitOutcome::Failed
            }
        }
    }

    /// begin → send → apply in one call.
    pub async fn commit(&mut self, client: &ResourceClient) -> Result<CommitOutcome, ViewError> {
        let pending = self.begin_commit()?;
        let result = client
            .send(pending.verb, &pending.path, pending.body.as_ref())
            .await;
        Ok(self.apply_outcome(pending, result))
    }

    fn merge_success(&mut self, mode: Mode, value: Value) -> Result<(), ViewError> {
        match mode {
            Mode::Adding => {
                self.collection.upsert(from_snapshot::<E>(value)?)?;
            }
            Mode::Editing => {
                let id = self.session.selected().ok_or(ViewError::NothingToCommit)?;
                match self.collection.get_mut(id) {
                    // in-place update keeps the record other views hold
                    Some(current) => {
                        current.update(Some(value))?;
                        self.collection.resort();
                    }
                    None => {
                        tracing::warn!(%id, "edited entity left the collection; merging as insert");
                        self.collection.upsert(from_snapshot::<E>(value)?)?;
                    }
                }
            }
            Mode::Deleting => {
                let id = self.session.selected().ok_or(ViewError::NothingToCommit)?;
                self.collection.remove(id);
            }
            Mode::Idle => {}
        }
        Ok(())
    }
}
