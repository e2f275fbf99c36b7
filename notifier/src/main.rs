use alert_utils::setup_logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use log::info;
use notifier::{handle_failure_event, initialize_sns_publisher, sns_publisher};
use serde_json::Value;

async fn func(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let (event, _context) = event.into_parts();

    let response = handle_failure_event(sns_publisher(), &event).await;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_logging().unwrap();
    initialize_sns_publisher().await;

    info!("Starting partition maintenance failure notifier");

    let fun = service_fn(func);
    lambda_runtime::run(fun).await?;

    Ok(())
}
