use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::gateway::events::EventPublisher;

pub struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(book_repository: Box<dyn BookRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            book_repository,
            events_publisher,
        }
    }

    // Publish failures are logged; the store change stands.
    async fn publish(&self, event: serde_json::Result<DomainEvent>) {
        let res = match event {
            Ok(event) => self.events_publisher.publish(&event).await,
            Err(err) => Err(err.into()),
        };
        if let Err(err) = res {
            warn!("failed to publish domain event: {}", err);
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, draft: &BookDto) -> LibraryResult<BookDto> {
        let book = BookDto {
            id: Uuid::new_v4().to_string(),
            title: draft.title.to_string(),
            author: draft.author.to_string(),
        };
        self.book_repository.create(&BookEntity::from(&book)).await?;
        self.publish(DomainEvent::added("books", book.id.as_str(), &book)).await;
        Ok(book)
    }

    async fn remove_book(&self, id: &str) -> LibraryResult<()> {
        if self.book_repository.delete(id).await? > 0 {
            let data = id.to_string();
            self.publish(DomainEvent::deleted("books", id, &data)).await;
        }
        Ok(())
    }

    async fn update_book(&self, id: &str, draft: &BookDto) -> LibraryResult<Option<BookDto>> {
        let book = BookDto {
            id: id.to_string(),
            title: draft.title.to_string(),
            author: draft.author.to_string(),
        };
        if self.book_repository.update(&BookEntity::from(&book)).await? == 0 {
            return Ok(None);
        }
        self.publish(DomainEvent::updated("books", id, &book)).await;
        Ok(Some(book))
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<Option<BookDto>> {
        self.book_repository.get(id).await.map(|b| b.as_ref().map(BookDto::from))
    }

    async fn find_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.list().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }
}
