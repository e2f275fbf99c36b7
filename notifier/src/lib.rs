mod handler;
mod sns;

pub use handler::handle_failure_event;
pub use sns::{initialize_sns_publisher, sns_publisher, SnsPublisher};
