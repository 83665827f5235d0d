use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::{null_as_empty, BookDto};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// book_id comes from the request path; an id in the payload never wins.
#[derive(Debug, Deserialize)]
pub struct UpdateBookCommandRequest {
    #[serde(skip)]
    pub book_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: &str, title: &str, author: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
        }
    }
    pub fn build_book(&self) -> BookDto {
        BookDto::draft(self.title.as_str(), self.author.as_str())
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    pub book: Option<BookDto>,
}

impl UpdateBookCommandResponse {
    pub fn new(book: Option<BookDto>) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(req.book_id.as_str(), &req.build_book()).await
            .map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::repository::RepositoryStore;

    fn build_service() -> Arc<dyn CatalogService> {
        factory::create_catalog_service(RepositoryStore::InMemory).into()
    }

    #[tokio::test]
    async fn test_should_run_update_book() {
        let svc = build_service();
        let add_cmd = AddBookCommand::new(svc.clone());
        let update_cmd = UpdateBookCommand::new(svc);

        let added = add_cmd.execute(AddBookCommandRequest::new("A", "B"))
            .await.expect("should add book");
        let req = UpdateBookCommandRequest::new(added.book.id.as_str(), "C", "D");
        let res = update_cmd.execute(req).await.expect("should update book");
        let book = res.book.expect("book should exist");
        assert_eq!(added.book.id, book.id);
        assert_eq!("C", book.title.as_str());
    }

    #[tokio::test]
    async fn test_should_skip_update_of_missing_book() {
        let svc = build_service();
        let update_cmd = UpdateBookCommand::new(svc.clone());

        let res = update_cmd.execute(UpdateBookCommandRequest::new("does-not-exist", "C", "D"))
            .await.expect("should not fail");
        assert!(res.book.is_none());
        assert!(svc.find_books().await.expect("should list books").is_empty());
    }

    #[tokio::test]
    async fn test_should_not_take_id_from_payload() {
        let req: UpdateBookCommandRequest = serde_json::from_str(r#"{"book_id":"x","id":"y","title":"C","author":"D"}"#)
            .expect("should parse request");
        assert!(req.book_id.is_empty());
        assert_eq!("C", req.title.as_str());
    }

    #[tokio::test]
    async fn test_should_parse_null_fields_as_empty() {
        let req: UpdateBookCommandRequest = serde_json::from_str(r#"{"title":"C","author":null}"#)
            .expect("should parse request");
        assert_eq!("C", req.title.as_str());
        assert_eq!("", req.author.as_str());
    }
}
