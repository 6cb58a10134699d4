use std::sync::Arc;

use launchdash::CallbackRegistry;
use launchdash::run_main;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create callback registry and register the dashboard charts
    let mut registry = CallbackRegistry::new();
    registry.register(launchdash::charts::OutcomePieCallback::new());
    registry.register(launchdash::charts::PayloadScatterCallback::new());

    // Run the shared main function
    run_main(Arc::new(registry)).await?;
    Ok(())
}
