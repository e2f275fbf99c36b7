use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Subject line attached to every alert
pub const MAINTENANCE_ALERT_SUBJECT: &str = "Partition Maintenance job has Errors!!!";

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct NotificationRequest {
    pub sns_topic_arn: String,
    pub message: String,
}

impl NotificationRequest {
    /// Extracts the notification request from a raw invocation payload.
    /// Both fields must be present as strings.
    pub fn from_payload(payload: &Value) -> Result<Self, anyhow::Error> {
        let sns_topic_arn = payload
            .get("sns_topic_arn")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow!("Missing 'sns_topic_arn' parameter"))?;
        let message = payload
            .get("message")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow!("Missing 'message' parameter"))?;

        Ok(Self {
            sns_topic_arn: sns_topic_arn.to_string(),
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_from_payload_valid() {
        let payload = json!({
            "sns_topic_arn": "arn:aws:sns:us-west-2:123456789012:maintenance-alerts",
            "message": "job X failed"
        });
        let request = NotificationRequest::from_payload(&payload).unwrap();
        assert_eq!(
            request.sns_topic_arn,
            "arn:aws:sns:us-west-2:123456789012:maintenance-alerts"
        );
        assert_eq!(request.message, "job X failed");
    }

    #[test]
    fn test_from_payload_ignores_extra_fields() {
        let payload = json!({
            "sns_topic_arn": "arn:aws:sns:us-west-2:123456789012:maintenance-alerts",
            "message": "job X failed",
            "requestContext": { "requestId": "abc-123" }
        });
        let request = NotificationRequest::from_payload(&payload).unwrap();
        assert_eq!(request.message, "job X failed");
    }

    #[test]
    fn test_from_payload_missing_topic_arn() {
        let payload = json!({ "message": "job X failed" });
        let err = NotificationRequest::from_payload(&payload).unwrap_err();
        assert_eq!(err.to_string(), "Missing 'sns_topic_arn' parameter");
    }

    #[test]
    fn test_from_payload_missing_message() {
        let payload = json!({ "sns_topic_arn": "arn:aws:sns:us-west-2:123456789012:t" });
        let err = NotificationRequest::from_payload(&payload).unwrap_err();
        assert_eq!(err.to_string(), "Missing 'message' parameter");
    }

    #[test]
    fn test_from_payload_non_string_message() {
        // A non-string value is treated the same as an absent one
        let payload = json!({
            "sns_topic_arn": "arn:aws:sns:us-west-2:123456789012:t",
            "message": { "nested": true }
        });
        let err = NotificationRequest::from_payload(&payload).unwrap_err();
        assert_eq!(err.to_string(), "Missing 'message' parameter");
    }
}
