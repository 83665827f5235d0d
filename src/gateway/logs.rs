use async_trait::async_trait;
use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

/// Publishes domain events as structured log records.
#[derive(Debug, Default)]
pub struct LogsPublisher {}

impl LogsPublisher {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl EventPublisher for LogsPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let json = event.to_json()?;
        info!(
            event_id = %event.event_id,
            kind = %event.kind,
            event = %json,
            "domain event"
        );
        Ok(())
    }
}
