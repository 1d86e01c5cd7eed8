//! Generic repository trait for the external datastore.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::pagination::{PageRequest, PageResponse};

/// Generic CRUD repository trait.
///
/// Each entity gets a strongly typed repository. Entity-specific query
/// methods (lookup by slug, by email, ...) live on the concrete repository
/// structs.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static + serde::Serialize,
    Id: Send + Sync + 'static + ?Sized,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: &Id) -> AppResult<Option<Entity>>;

    /// Find all entities, newest first, with pagination.
    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Entity>>;

    /// Create a new entity and return it.
    async fn create(&self, entity: Entity) -> AppResult<Entity>;

    /// Replace an existing entity and return the stored version.
    async fn update(&self, entity: Entity) -> AppResult<Entity>;

    /// Delete an entity by its primary key. Returns `true` if deleted.
    async fn delete(&self, id: &Id) -> AppResult<bool>;

    /// Count total entities.
    async fn count(&self) -> AppResult<u64>;
}
