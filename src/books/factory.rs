use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::repository::RepositoryStore;

pub fn create_book_repository(store: RepositoryStore) -> Box<dyn BookRepository> {
    match store {
        RepositoryStore::InMemory => {
            Box::new(MemoryBookRepository::new())
        }
        RepositoryStore::SeededInMemory => {
            Box::new(MemoryBookRepository::with_books(seed_books()))
        }
    }
}

fn seed_books() -> Vec<BookEntity> {
    vec![
        BookEntity::new("Learning Go: An Idiomatic Approach to Real-World Go Programming", "Jon Bodner"),
        BookEntity::new("Introduction to Algorithms, fourth edition 4th", "Thomas H. Cormen"),
        BookEntity::new("Clean Code: A Handbook of Agile Software Craftsmanship", "Robert C. Martin"),
    ]
}

#[cfg(test)]
mod tests {
    use crate::books::factory::create_book_repository;
    use crate::books::repository::BookRepository;
    use crate::core::repository::{Repository, RepositoryStore};

    #[tokio::test]
    async fn test_should_create_empty_repository() {
        let repo = create_book_repository(RepositoryStore::InMemory);
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_should_create_seeded_repository() {
        let repo = create_book_repository(RepositoryStore::SeededInMemory);
        let books = repo.list().await.expect("should list books");
        assert_eq!(3, books.len());
        assert!(books.iter().any(|b| b.author == "Robert C. Martin"));
    }
}
