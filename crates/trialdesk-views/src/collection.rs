use std::cmp::Ordering;

use trialdesk_core::entity::Entity;
use uuid::Uuid;

use crate::error::ViewError;
use crate::filter;

/// Total order used to keep a collection sorted.
pub type Order<E> = Box<dyn Fn(&E, &E) -> Ordering + Send + Sync>;

/// The authoritative in-memory list behind one listing view.
///
/// Insertion order carries no meaning; the stored comparator re-establishes
/// order after every merge. Persisted entities are unique by id, and
/// unsaved drafts are never admitted.
pub struct Collection<E: Entity> {
    items: Vec<E>,
    order: Order<E>,
}

impl<E: Entity> Collection<E> {
    pub fn new(order: impl Fn(&E, &E) -> Ordering + Send + Sync + 'static) -> Self {
        Self {
            items: Vec::new(),
            order: Box::new(order),
        }
    }

    /// Replace the whole list (initial load) and re-sort.
    pub fn set_all(&mut self, items: Vec<E>) {
        self.items = items;
        self.resort();
    }

    /// Merge one canonical server entity: replace by id or append, then
    /// re-sort. Entities without a server id are rejected: a draft joins
    /// the collection only once the server has named it.
    pub fn upsert(&mut self, entity: E) -> Result<(), ViewError> {
        let id = entity.id().ok_or(ViewError::Unsaved)?;
        match self.items.iter().position(|e| e.id() == Some(id)) {
            Some(index) => self.items[index] = entity,
            None => self.items.push(entity),
        }
        self.resort();
        Ok(())
    }

    /// Remove by id. Removing an absent id is a no-op, not an error.
    pub fn remove(&mut self, id: Uuid) {
        self.items.retain(|e| e.id() != Some(id));
    }

    /// Remove everything the predicate matches. No-op when nothing matches.
    pub fn remove_where(&mut self, mut pred: impl FnMut(&E) -> bool) {
        self.items.retain(|e| !pred(e));
    }

    /// Swap the comparator and stable-sort under it.
    pub fn sort_by(&mut self, order: impl Fn(&E, &E) -> Ordering + Send + Sync + 'static) {
        self.order = Box::new(order);
        self.resort();
    }

    /// Case-insensitive substring filter over each entity's searchable
    /// fields, preserving collection order. An empty or absent query is
    /// the identity projection.
    pub fn filtered(&self, query: Option<&str>) -> Vec<&E> {
        match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(query) => {
                let needle = query.to_lowercase();
                self.items
                    .iter()
                    .filter(|e| filter::matches(*e, &needle))
                    .collect()
            }
            None => self.items.iter().collect(),
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&E> {
        self.items.iter().find(|e| e.id() == Some(id))
    }

    pub(crate) fn get_mut(&mut self, id: Uuid) -> Option<&mut E> {
        self.items.iter_mut().find(|e| e.id() == Some(id))
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn resort(&mut self) {
        let Self { items, order } = self;
        items.sort_by(|a, b| order(a, b));
    }
}
