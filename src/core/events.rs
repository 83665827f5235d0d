use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::library::LibraryResult;
use crate::utils::date::serializer;

// DomainEventType defines type of event for domain changes
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Updated,
    Deleted,
}

impl Display for DomainEventType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DomainEventType::Added => write!(f, "Added"),
            DomainEventType::Updated => write!(f, "Updated"),
            DomainEventType::Deleted => write!(f, "Deleted"),
        }
    }
}

// DomainEvent records a single change applied to the catalog
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub key: String,
    pub kind: DomainEventType,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn added<T: Serialize>(name: &str, key: &str, data: &T) -> serde_json::Result<Self> {
        Self::build(name, key, DomainEventType::Added, data)
    }

    pub fn updated<T: Serialize>(name: &str, key: &str, data: &T) -> serde_json::Result<Self> {
        Self::build(name, key, DomainEventType::Updated, data)
    }

    pub fn deleted<T: Serialize>(name: &str, key: &str, data: &T) -> serde_json::Result<Self> {
        Self::build(name, key, DomainEventType::Deleted, data)
    }

    /// The event as a single JSON document, timestamp included.
    pub fn to_json(&self) -> LibraryResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn build<T: Serialize>(name: &str, key: &str, kind: DomainEventType, data: &T) -> serde_json::Result<Self> {
        Ok(DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            key: key.to_string(),
            kind,
            json_data: serde_json::to_string(data)?,
            created_at: Utc::now().naive_utc(),
        })
    }
}
