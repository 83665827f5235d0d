use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, rejecting a duplicate id
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // updates an existing entity, returns 0 when the id is unknown
    async fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    async fn get(&self, id: &str) -> LibraryResult<Option<Entity>>;

    // delete an entity, returns 0 when the id is unknown
    async fn delete(&self, id: &str) -> LibraryResult<usize>;

    // all entities, in no particular order
    async fn list(&self) -> LibraryResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    InMemory,
    SeededInMemory,
}

impl RepositoryStore {
    pub fn for_seed(seed_books: bool) -> RepositoryStore {
        if seed_books {
            RepositoryStore::SeededInMemory
        } else {
            RepositoryStore::InMemory
        }
    }
}
