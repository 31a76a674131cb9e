use std::sync::Arc;

use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use pushkind_store::config::ServerConfig;
use pushkind_store::db::{establish_connection_pool, run_migrations};
use pushkind_store::media::{MEDIA_URL, MediaStore};
use pushkind_store::repository::DieselRepository;
use pushkind_store::routes;
use pushkind_store::services::notifications::{LoggingOrderListener, OrderNotifier};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let config = ServerConfig::from_env();

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    match run_migrations(&pool) {
        Ok(0) => {}
        Ok(applied) => log::info!("Applied {applied} pending migration(s)"),
        Err(e) => {
            log::error!("Failed to run migrations: {e}");
            std::process::exit(1);
        }
    }

    let repo = DieselRepository::new(pool);
    let notifier = OrderNotifier::new().with_listener(Arc::new(LoggingOrderListener));
    let media = MediaStore::new(&config.media_root);

    if let Err(e) = std::fs::create_dir_all(media.root()) {
        log::error!("Failed to create media root {}: {e}", config.media_root);
        std::process::exit(1);
    }

    log::info!("Listening on {}:{}", config.address, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(routes::configure)
            .service(Files::new(MEDIA_URL, media.root()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(notifier.clone()))
            .app_data(web::Data::new(media.clone()))
    })
    .bind((config.address.as_str(), config.port))?
    .run()
    .await
}
