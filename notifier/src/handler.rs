use alert_defs::{NotificationPublisher, NotificationRequest, MAINTENANCE_ALERT_SUBJECT};
use log::{error, info};
use serde_json::{json, Value};

/// Relays a failed-maintenance-job event to its SNS topic and reports the
/// outcome in the API Gateway response shape. Any failure, from a malformed
/// payload to an SNS rejection, ends up in the 500 arm; the caller always
/// gets a well-formed response.
pub async fn handle_failure_event(
    publisher: &dyn NotificationPublisher,
    payload: &Value,
) -> Value {
    match relay_notification(publisher, payload).await {
        Ok(message_id) => {
            info!("Notification sent (SNS message id: {})", message_id);
            json!({
                "statusCode": 200,
                "body": serde_json::to_string("Notification Sent").unwrap(),
            })
        }
        Err(e) => {
            let error_message = format!("Failed to send notification: {}", e);
            error!("{}", error_message);
            json!({
                "statusCode": 500,
                "body": serde_json::to_string(&json!({ "error": error_message })).unwrap(),
            })
        }
    }
}

async fn relay_notification(
    publisher: &dyn NotificationPublisher,
    payload: &Value,
) -> Result<String, anyhow::Error> {
    let request = NotificationRequest::from_payload(payload)?;
    publisher
        .publish(
            &request.sns_topic_arn,
            &request.message,
            MAINTENANCE_ALERT_SUBJECT,
        )
        .await
}
