use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use crate::core::events::{DomainEvent, DomainEventType};
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// Records published events so tests can inspect them.
#[derive(Debug, Default, Clone)]
pub struct MemoryPublisher {
    events: Arc<Mutex<Vec<(DomainEventType, String)>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> Vec<(DomainEventType, String)> {
        self.events.lock().expect("events lock").clone()
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        self.events.lock().expect("events lock").push((event.kind, event.key.to_string()));
        Ok(())
    }
}
