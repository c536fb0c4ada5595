//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: the form front-end drives the bedtime use cases.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive form until the user quits.
    async fn run(&self) -> Result<(), DomainError>;
}
