use crate::database::error::DbResult;
use async_trait::async_trait;

/// Base repository trait defining common database operations
///
/// Records in this crate are never deleted, so there is no delete operation.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Associated type for the entity this repository manages
    type Entity: Send + Sync;

    /// Key the entity is stored under
    type Id: Copy + Send + Sync + 'static;

    /// Find an entity by its ID
    async fn find_by_id(&self, id: Self::Id) -> DbResult<Option<Self::Entity>>;

    /// Find all entities, newest first
    async fn find_all(&self) -> DbResult<Vec<Self::Entity>>;

    /// Insert a new entity
    async fn insert(&self, entity: &Self::Entity) -> DbResult<Self::Entity>;

    /// Persist the mutable parts of an existing entity
    async fn update(&self, entity: &Self::Entity) -> DbResult<Self::Entity>;

    /// Check if an entity exists by ID
    async fn exists(&self, id: Self::Id) -> DbResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
