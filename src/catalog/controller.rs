use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/books", get(find_books).post(add_book))
        .route("/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .with_state(state)
}

pub fn book_location(id: &str) -> String {
    format!("/books/{}", id)
}

// The body is parsed here rather than by the Json extractor so that a
// malformed payload is always a 400, whatever the content-type says.
pub async fn add_book(
    State(state): State<AppState>,
    body: Bytes) -> Result<impl IntoResponse, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_slice(&body).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.catalog).execute(req).await?;
    let location = book_location(res.book.id.as_str());
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(res.book)))
}

pub async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<BookDto>, ServerError> {
    let req = GetBookCommandRequest { book_id };
    let res = GetBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res.book))
}

pub async fn find_books(
    State(state): State<AppState>) -> Result<Json<Vec<BookDto>>, ServerError> {
    let res = ListBooksCommand::new(state.catalog).execute(ListBooksCommandRequest::default()).await?;
    Ok(Json(res.books))
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    body: Bytes) -> Result<StatusCode, ServerError> {
    let mut req: UpdateBookCommandRequest = serde_json::from_slice(&body).map_err(json_to_server_error)?;
    req.book_id = book_id;
    let _ = UpdateBookCommand::new(state.catalog).execute(req).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<StatusCode, ServerError> {
    let req = RemoveBookCommandRequest { book_id };
    let _ = RemoveBookCommand::new(state.catalog).execute(req).await?;
    Ok(StatusCode::NO_CONTENT)
}
