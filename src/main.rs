use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use hospital_core::{
    open_store, store_backend_from_env_value, CoreConfig, PatientService,
    DEFAULT_COLLECTION_NAME, DEFAULT_DATABASE_NAME, DEFAULT_MONGO_DETAILS,
};

/// Main entry point for the hospital patient service
///
/// Opens the patient store once, then serves the REST API until the process is stopped.
///
/// # Environment Variables
/// - `HOSPITAL_REST_ADDR`: REST server address (default: "0.0.0.0:8000")
/// - `MONGO_DETAILS`: MongoDB connection string (default: "mongodb://localhost:27017")
/// - `HOSPITAL_DATABASE`: Database name (default: "patient")
/// - `HOSPITAL_COLLECTION`: Collection name (default: "personal")
/// - `HOSPITAL_STORE`: Store backend, `mongodb` or `memory` (default: "mongodb")
///
/// # Returns
/// * `Ok(())` - If the server starts and shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration, store connection or server startup fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hospital=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr =
        std::env::var("HOSPITAL_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());
    let mongo_details =
        std::env::var("MONGO_DETAILS").unwrap_or_else(|_| DEFAULT_MONGO_DETAILS.into());
    let database_name =
        std::env::var("HOSPITAL_DATABASE").unwrap_or_else(|_| DEFAULT_DATABASE_NAME.into());
    let collection_name =
        std::env::var("HOSPITAL_COLLECTION").unwrap_or_else(|_| DEFAULT_COLLECTION_NAME.into());
    let store_backend = store_backend_from_env_value(std::env::var("HOSPITAL_STORE").ok())?;

    let cfg = CoreConfig::new(store_backend, mongo_details, &database_name, &collection_name)?;
    tracing::info!(
        backend = %cfg.store_backend(),
        database = cfg.database_name(),
        collection = cfg.collection_name(),
        "++ Opening patient store"
    );
    let store = open_store(&cfg).await?;
    let state = AppState::new(PatientService::new(store));

    tracing::info!("++ Starting hospital REST on {}", rest_addr);
    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, api_rest::router(state)).await?;

    Ok(())
}
