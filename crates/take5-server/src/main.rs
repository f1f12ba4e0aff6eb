use take5_server::{build_app, config::AppConfig};

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🌿 Take 5 API initializing...");

    let config = AppConfig::from_lookup(|key| secrets.get(key)).map_err(anyhow::Error::from)?;
    let router = build_app(&config)?;

    Ok(router.into())
}
