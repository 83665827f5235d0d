use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

/// Process-lifetime book store. Reads share the lock, writes hold it exclusively.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RwLock<HashMap<String, BookEntity>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<BookEntity>) -> Self {
        let books = books.into_iter()
            .map(|b| (b.id(), b))
            .collect();
        Self { books: RwLock::new(books) }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let id = entity.id();
        if id.is_empty() {
            return Err(LibraryError::validation("book_id must not be empty", None));
        }
        let mut books = self.books.write().await;
        if books.contains_key(&id) {
            return Err(LibraryError::duplicate_key(
                format!("book already exists for {}", id).as_str()));
        }
        debug!(book_id = %id, "book stored");
        books.insert(id, entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        match books.get_mut(&entity.id()) {
            Some(existing) => {
                existing.title = entity.title.to_string();
                existing.author = entity.author.to_string();
                debug!(book_id = %entity.book_id, "book replaced");
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn get(&self, id: &str) -> LibraryResult<Option<BookEntity>> {
        Ok(self.books.read().await.get(id).cloned())
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let removed = self.books.write().await.remove(id);
        if removed.is_some() {
            debug!(book_id = %id, "book removed");
        }
        Ok(removed.map_or(0, |_| 1))
    }

    async fn list(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().await.values().cloned().collect())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn len(&self) -> usize {
        self.books.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::domain::Identifiable;
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;

    #[tokio::test]
    async fn test_should_create_get_books() {
        let books_repo = MemoryBookRepository::new();
        let book = BookEntity::new("test book", "author");
        let size = books_repo.create(&book).await.expect("should create book");
        assert_eq!(1, size);

        let loaded = books_repo.get(book.book_id.as_str()).await.expect("should return book");
        assert_eq!(Some(book), loaded);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_books() {
        let books_repo = MemoryBookRepository::new();
        let book = BookEntity::new("test book", "author");
        books_repo.create(&book).await.expect("should create book");

        let mut copy = book.clone();
        copy.title = "other".to_string();
        let res = books_repo.create(&copy).await;
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));

        let loaded = books_repo.get(book.book_id.as_str()).await.expect("should return book");
        assert_eq!(Some(book), loaded);
        assert_eq!(1, books_repo.len().await);
    }

    #[tokio::test]
    async fn test_should_reject_empty_id() {
        let books_repo = MemoryBookRepository::new();
        let mut book = BookEntity::new("test book", "author");
        book.book_id = String::new();
        let res = books_repo.create(&book).await;
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        assert!(books_repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_should_create_update_books() {
        let books_repo = MemoryBookRepository::new();
        let mut book = BookEntity::new("test book", "author");
        books_repo.create(&book).await.expect("should create book");

        book.title = "new title".to_string();
        book.author = "new author".to_string();
        let size = books_repo.update(&book).await.expect("should update book");
        assert_eq!(1, size);

        let loaded = books_repo.get(book.book_id.as_str()).await.expect("should return book")
            .expect("book should exist");
        assert_eq!("new title", loaded.title.as_str());
        assert_eq!("new author", loaded.author.as_str());
    }

    #[tokio::test]
    async fn test_should_not_upsert_missing_books() {
        let books_repo = MemoryBookRepository::new();
        let book = BookEntity::new("test book", "author");
        let size = books_repo.update(&book).await.expect("should update book");
        assert_eq!(0, size);
        assert!(books_repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_should_create_delete_books() {
        let books_repo = MemoryBookRepository::new();
        let book = BookEntity::new("test book", "author");
        books_repo.create(&book).await.expect("should create book");

        let deleted = books_repo.delete(book.book_id.as_str()).await.expect("should delete book");
        assert_eq!(1, deleted);
        let deleted = books_repo.delete(book.book_id.as_str()).await.expect("should delete book");
        assert_eq!(0, deleted);

        let loaded = books_repo.get(book.book_id.as_str()).await.expect("should not fail");
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_should_list_books() {
        let books_repo = MemoryBookRepository::with_books(vec![
            BookEntity::new("a", "x"),
            BookEntity::new("b", "y"),
        ]);
        books_repo.create(&BookEntity::new("c", "z")).await.expect("should create book");
        let mut titles: Vec<String> = books_repo.list().await.expect("should list books")
            .into_iter().map(|b| b.title).collect();
        titles.sort();
        assert_eq!(vec!["a", "b", "c"], titles);
    }

    #[tokio::test]
    async fn test_should_key_seeded_books_by_id() {
        let seeded = vec![BookEntity::new("a", "x"), BookEntity::new("b", "y")];
        let books_repo = MemoryBookRepository::with_books(seeded.clone());
        assert_eq!(2, books_repo.len().await);
        for book in seeded {
            let loaded = books_repo.get(book.id().as_str()).await.expect("should return book");
            assert_eq!(Some(book), loaded);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_should_serialize_concurrent_writers() {
        let books_repo = Arc::new(MemoryBookRepository::new());
        let mut handles = Vec::new();
        for i in 0..50 {
            let repo = Arc::clone(&books_repo);
            handles.push(tokio::spawn(async move {
                let book = BookEntity::new(format!("title_{}", i).as_str(), "author");
                repo.create(&book).await.expect("should create book");
                if i % 2 == 0 {
                    repo.delete(book.book_id.as_str()).await.expect("should delete book");
                }
            }));
        }
        for handle in handles {
            handle.await.expect("task should finish");
        }
        assert_eq!(25, books_repo.len().await);
    }
}
