mod notification;
mod publisher;

pub use notification::{NotificationRequest, MAINTENANCE_ALERT_SUBJECT};
pub use publisher::NotificationPublisher;
