use alert_defs::NotificationPublisher;
use async_trait::async_trait;
use log::info;
use once_cell::sync::OnceCell;

static SNS_PUBLISHER: OnceCell<SnsPublisher> = OnceCell::new();

pub struct SnsPublisher {
    client: aws_sdk_sns::Client,
}

impl SnsPublisher {
    pub async fn new() -> Self {
        let shared_config = aws_config::from_env().load().await;
        Self {
            client: aws_sdk_sns::Client::new(&shared_config),
        }
    }
}

#[async_trait]
impl NotificationPublisher for SnsPublisher {
    async fn publish(
        &self,
        topic_arn: &str,
        message: &str,
        subject: &str,
    ) -> Result<String, anyhow::Error> {
        info!("Publishing notification to topic {}", topic_arn);

        let result = self
            .client
            .publish()
            .topic_arn(topic_arn)
            .message(message)
            .subject(subject)
            .send()
            .await?;

        Ok(result.message_id().unwrap_or("").to_string())
    }
}

/// Builds the shared SNS publisher. Called once from main before the runtime
/// loop starts so every invocation reuses the same client.
pub async fn initialize_sns_publisher() {
    let publisher = SnsPublisher::new().await;
    if SNS_PUBLISHER.set(publisher).is_err() {
        info!("SNS publisher already initialized");
    }
}

pub fn sns_publisher() -> &'static SnsPublisher {
    SNS_PUBLISHER
        .get()
        .expect("SNS publisher not initialized, call initialize_sns_publisher first")
}
