use color_eyre::eyre::Result;
use relibot_webhook::{config::new_config, setup_app, setup_tracing, shutdown_signal};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    setup_tracing()?;

    let settings = new_config()?;
    let addr = settings.base.address;
    info!(addr = &addr.to_string(), "Will use socket address");

    let app = setup_app(&settings)?;

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
