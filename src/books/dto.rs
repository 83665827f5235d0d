use serde::{Deserialize, Deserializer, Serialize};
use crate::books::domain::model::BookEntity;

// BookDto is the wire shape of a book: {"id", "title", "author"}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
}

impl BookDto {
    /// A book without an identifier, as supplied by a client on write.
    pub fn draft(title: &str, author: &str) -> BookDto {
        BookDto {
            id: String::new(),
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}

/// Reads a JSON string field, treating `null` the same as a missing field.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
    where D: Deserializer<'de> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.book_id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
        }
    }
}
