use anyhow::Context;
use libris_api::HttpBooksApi;
use libris_app::modules::books::BooksManager;
use libris_app::term::Session;
use libris_kernel::settings::Settings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load Libris settings")?;
    libris_telemetry::init(&settings.telemetry)
        .with_context(|| "failed to initialize telemetry")?;

    tracing::info!(
        env = ?settings.environment,
        api = %settings.api.base_url,
        "libris-app bootstrap starting"
    );

    let api = HttpBooksApi::from_settings(&settings.api)
        .with_context(|| "failed to build Books API client")?;

    let mut session = Session::new(BooksManager::new(api));
    session.run().await?;

    tracing::info!("libris-app session ended");
    Ok(())
}
