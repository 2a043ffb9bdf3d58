use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use tracing::info;
use user_directory::config::EnvConfig;
use user_directory::db::memory_service::MemoryService;
use user_directory::routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = config.bind_addr();

    let memory_service = Arc::new(MemoryService::new());

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&memory_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
