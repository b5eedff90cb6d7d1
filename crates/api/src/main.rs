use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::app::build_router;
use api::gql::build_schema;
use api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    // The data-source services are external collaborators; the bundled
    // in-memory implementations stand in for them here.
    let state = AppState::in_memory();
    let schema = build_schema(state);
    let router = build_router(schema);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(4000);

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("GraphQL server listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;

    Ok(())
}
