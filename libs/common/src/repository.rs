//! Generic in-memory repository for identifiable entities
//!
//! This module provides a type-parameterized store that keeps one entity
//! type in an ordered in-process list and exposes the CRUD primitives the
//! services are built on.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// A record addressable by a globally unique identifier
///
/// The identifier is assigned once and never changes for the lifetime of
/// the record.
pub trait Entity {
    /// The record's identifier
    fn id(&self) -> Uuid;
}

/// In-memory store for a single entity type
///
/// Clones share the same underlying list, so a repository handle can be
/// kept in application state and cloned into every handler. Every
/// operation goes through the store-wide lock; readers never observe a
/// half-applied update.
pub struct InMemoryRepository<T> {
    data: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for InMemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl<T> InMemoryRepository<T>
where
    T: Entity + Clone,
{
    /// Create a repository seeded with the given entities
    pub fn new(data: Vec<T>) -> Self {
        Self {
            data: Arc::new(RwLock::new(data)),
        }
    }

    /// Get all stored entities in insertion order
    pub async fn get_all(&self) -> Vec<T> {
        self.data.read().await.clone()
    }

    /// Find an entity by its identifier
    pub async fn get_by_id(&self, id: Uuid) -> Option<T> {
        self.data
            .read()
            .await
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    /// Delete the entity with the given identifier
    ///
    /// Returns whether a removal occurred; an absent identifier is not an
    /// error.
    pub async fn delete_by_id(&self, id: Uuid) -> bool {
        let mut data = self.data.write().await;

        match data.iter().position(|item| item.id() == id) {
            Some(index) => {
                data.remove(index);
                debug!("Deleted entity {}", id);
                true
            }
            None => false,
        }
    }

    /// Add a new entity and return its identifier
    ///
    /// An identifier collision is a no-op: the store keeps the entity it
    /// already holds and returns that entity's identifier.
    pub async fn add(&self, new_item: T) -> Uuid {
        let mut data = self.data.write().await;

        if let Some(existing) = data.iter().find(|item| item.id() == new_item.id()) {
            debug!("Entity {} already present, keeping existing", existing.id());
            return existing.id();
        }

        let id = new_item.id();
        data.push(new_item);
        id
    }

    /// Replace the entity sharing the item's identifier with the item
    ///
    /// Upserts under a single write guard: an existing entity is replaced
    /// in place, an absent one is appended. Either way `get_by_id` returns
    /// the new item afterwards.
    pub async fn update(&self, item: T) {
        let mut data = self.data.write().await;

        match data.iter().position(|existing| existing.id() == item.id()) {
            Some(index) => data[index] = item,
            None => data.push(item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: Uuid,
        body: String,
    }

    impl Entity for Note {
        fn id(&self) -> Uuid {
            self.id
        }
    }

    fn note(body: &str) -> Note {
        Note {
            id: Uuid::new_v4(),
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn added_entity_is_found_by_id() {
        let repository = InMemoryRepository::new(vec![]);
        let first = note("first");

        let id = repository.add(first.clone()).await;

        assert_eq!(id, first.id);
        assert_eq!(repository.get_by_id(first.id).await, Some(first));
    }

    #[tokio::test]
    async fn add_keeps_first_entity_on_identifier_collision() {
        let repository = InMemoryRepository::new(vec![]);
        let first = note("first");
        let second = Note {
            id: first.id,
            body: "second".to_string(),
        };

        repository.add(first.clone()).await;
        let id = repository.add(second).await;

        assert_eq!(id, first.id);
        assert_eq!(repository.get_all().await, vec![first]);
    }

    #[tokio::test]
    async fn delete_of_absent_id_returns_false_and_changes_nothing() {
        let stored = note("stored");
        let repository = InMemoryRepository::new(vec![stored.clone()]);

        assert!(!repository.delete_by_id(Uuid::new_v4()).await);
        assert_eq!(repository.get_all().await, vec![stored]);
    }

    #[tokio::test]
    async fn delete_of_present_id_removes_the_entity() {
        let stored = note("stored");
        let repository = InMemoryRepository::new(vec![stored.clone()]);

        assert!(repository.delete_by_id(stored.id).await);
        assert_eq!(repository.get_by_id(stored.id).await, None);
    }

    #[tokio::test]
    async fn update_replaces_an_existing_entity_in_place() {
        let first = note("first");
        let second = note("second");
        let repository = InMemoryRepository::new(vec![first.clone(), second.clone()]);

        let replacement = Note {
            id: first.id,
            body: "replaced".to_string(),
        };
        repository.update(replacement.clone()).await;

        assert_eq!(repository.get_by_id(first.id).await, Some(replacement.clone()));
        // in-place replacement keeps insertion order
        assert_eq!(repository.get_all().await, vec![replacement, second]);
    }

    #[tokio::test]
    async fn update_of_an_absent_id_inserts_the_entity() {
        let repository = InMemoryRepository::new(vec![note("stored")]);
        let fresh = note("fresh");

        repository.update(fresh.clone()).await;

        assert_eq!(repository.get_by_id(fresh.id).await, Some(fresh));
    }
}
