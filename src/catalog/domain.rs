pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    // stores the draft under a freshly generated id, ignoring any id it carries
    async fn add_book(&self, draft: &BookDto) -> LibraryResult<BookDto>;
    // no-op when the id is unknown
    async fn remove_book(&self, id: &str) -> LibraryResult<()>;
    // replaces title and author of an existing book, None when the id is unknown
    async fn update_book(&self, id: &str, draft: &BookDto) -> LibraryResult<Option<BookDto>>;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<Option<BookDto>>;
    async fn find_books(&self) -> LibraryResult<Vec<BookDto>>;
}
