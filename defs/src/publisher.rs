use async_trait::async_trait;

/// Seam for the pub/sub backend. The production implementation wraps the SNS
/// client; tests substitute a recording mock.
#[async_trait]
pub trait NotificationPublisher: Send + Sync {
    /// Publishes one message to the given topic and returns the provider
    /// message id.
    async fn publish(
        &self,
        topic_arn: &str,
        message: &str,
        subject: &str,
    ) -> Result<String, anyhow::Error>;
}
