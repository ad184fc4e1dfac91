//! Health service trait and its static implementation.

use async_trait::async_trait;

use crate::status::HealthStatus;

/// Supplies the current health of the service.
///
/// The HTTP layer is generic over this trait, so callers inject the
/// implementation when building application state.
#[async_trait]
pub trait HealthService: Send + Sync {
    /// Returns the current health status. Never fails.
    async fn health(&self) -> HealthStatus;
}

/// Health service that always reports `UP` with the fixed service version.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticHealthService;

impl StaticHealthService {
    /// Creates a new static health service.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HealthService for StaticHealthService {
    #[tracing::instrument(skip(self))]
    async fn health(&self) -> HealthStatus {
        let status = HealthStatus::up();
        tracing::debug!(status = %status.status, version = %status.version, "health requested");
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_up_with_version() {
        let service = StaticHealthService::new();
        let status = service.health().await;
        assert_eq!(status, HealthStatus::new("UP", "1.0.0"));
    }

    #[tokio::test]
    async fn repeated_calls_return_equal_values() {
        let service = StaticHealthService::new();
        let first = service.health().await;
        for _ in 0..10 {
            assert_eq!(service.health().await, first);
        }
    }

    #[tokio::test]
    async fn usable_as_trait_object() {
        let service: Box<dyn HealthService> = Box::new(StaticHealthService::default());
        assert!(service.health().await.is_up());
    }
}
