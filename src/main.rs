use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use hrmanager_backend::{config::Settings, db, routes};
use log::info;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let settings = Settings::from_env()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;

    // Handlers acquire a connection per request from this pool.
    let pool = db::create_pool(&settings)
        .await
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;

    info!(
        "Starting server at {} (database: {}, delete policy: {})",
        settings.bind_address, settings.database_url, settings.delete_policy
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .configure(routes)
    })
    .bind(&settings.bind_address)?
    .run()
    .await
}
