use trialdesk_core::entity::Entity;
use uuid::Uuid;

use crate::error::ViewError;
use crate::surface::ErrorSurface;

/// Mutually exclusive UI modes of one listing screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    Adding,
    Editing,
    Deleting,
}

/// Add/edit/delete session over one collection.
///
/// Owns the single draft and the selected id. Every mode change passes
/// through [`clear`](Self::clear), which also bumps the generation so a
/// response still in flight for the abandoned session is recognized and
/// discarded when it lands.
#[derive(Debug, Default)]
pub struct EditSession<E: Entity> {
    mode: Mode,
    selected: Option<Uuid>,
    draft: Option<E>,
    busy: bool,
    generation: u64,
    surface: ErrorSurface,
}

impl<E: Entity> EditSession<E> {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Id of the entity being edited or deleted.
    pub fn selected(&self) -> Option<Uuid> {
        self.selected
    }

    pub fn draft(&self) -> Option<&E> {
        self.draft.as_ref()
    }

    /// The working copy the form inputs bind to.
    pub fn draft_mut(&mut self) -> Option<&mut E> {
        self.draft.as_mut()
    }

    /// True while a commit round trip is in flight; the UI disables its
    /// controls off this flag.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn surface(&self) -> &ErrorSurface {
        &self.surface
    }

    pub(crate) fn surface_mut(&mut self) -> &mut ErrorSurface {
        &mut self.surface
    }

    /// Back to Idle: drop the draft and selection, clear errors, and
    /// invalidate any response still in flight.
    pub fn clear(&mut self) {
        self.mode = Mode::Idle;
        self.selected = None;
        self.draft = None;
        self.busy = false;
        self.generation += 1;
        self.surface.clear();
    }

    /// Open an empty draft.
    pub fn start_add(&mut self) {
        self.clear();
        self.draft = Some(E::default());
        self.mode = Mode::Adding;
    }

    /// Open a draft copy of `entity`. The original stays untouched until a
    /// commit succeeds.
    pub fn start_edit(&mut self, entity: &E) -> Result<(), ViewError> {
        let id = entity.id().ok_or(ViewError::Unsaved)?;
        self.clear();
        self.selected = Some(id);
        self.draft = Some(entity.clone());
        self.mode = Mode::Editing;
        Ok(())
    }

    /// Mark `entity` for deletion. No draft is opened; the entity itself
    /// is the subject.
    pub fn start_delete(&mut self, entity: &E) -> Result<(), ViewError> {
        let id = entity.id().ok_or(ViewError::Unsaved)?;
        self.clear();
        self.selected = Some(id);
        self.mode = Mode::Deleting;
        Ok(())
    }

    /// Gate a commit: record the in-flight state and hand back the
    /// generation the response must still match.
    pub(crate) fn mark_busy(&mut self) -> u64 {
        self.busy = true;
        self.generation
    }

    /// Close out a round trip. Returns false when the session has moved on
    /// since the request was issued, in which case the caller must discard
    /// the response.
    pub(crate) fn finish(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.busy = false;
        true
    }
}
