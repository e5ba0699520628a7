use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use collegehub_lib::{
    config::{self, AppConfig},
    core::setup_storage,
};
use log::info;

pub(crate) mod router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::init();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_config = AppConfig::from_env().context("Failed to load configuration")?;
    let storage = setup_storage(&app_config)
        .await
        .context("Failed to set up storage")?;
    let state = web::Data::new(router::AppState::new(storage, app_config.development));

    info!(
        "Starting server on {}:{} with {:?} storage",
        app_config.host, app_config.port, app_config.storage
    );
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(router::cors())
            .app_data(state.clone())
            .configure(router::configure)
            .default_service(web::route().to(router::not_found))
    })
    .bind((app_config.host.as_str(), app_config.port))?
    .run()
    .await?;
    Ok(())
}
