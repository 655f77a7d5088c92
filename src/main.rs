use std::error::Error;

use tracing_subscriber::{Layer, filter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod console;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from a .env file when present.
    dotenvy::dotenv().ok();

    let env_filter = llm_gateway::telemetry::env_filter("info");

    // Gateway events go through the crate-scoped layer (RFC3339 UTC,
    // file:line); everything else through the plain layer. The per-event
    // filters keep the two disjoint.
    let plain_layer = fmt::layer().with_target(false).with_filter(filter::filter_fn(
        |meta| !meta.target().starts_with(llm_gateway::telemetry::TARGET_PREFIX),
    ));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(llm_gateway::telemetry::layer())
        .with(plain_layer)
        .init();

    // `cooking-assistant serve` starts the HTTP API; the default is the
    // interactive console session.
    if std::env::args().nth(1).as_deref() == Some("serve") {
        tracing::info!("starting HTTP API");
        api::start().await?;
    } else {
        console::run().await?;
    }

    Ok(())
}
