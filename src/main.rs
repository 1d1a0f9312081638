use actix_cors::Cors;
use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlers, Logger};
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

mod config;
mod database;
mod middleware;
mod post;
mod router;
mod utils;

use config::AppConfig;
use database::post_store::PostStore;
use middleware::not_found::not_found;
use post::post_service::PostService;
use router::index::routes;

#[get("/")]
async fn default() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Social API is running 🚀")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();

    if let Some(dir) = config.posts_file.parent().filter(|d| !d.as_os_str().is_empty()) {
        if let Err(e) = std::fs::create_dir_all(dir) {
            error!("Failed to create data directory {}: {}", dir.display(), e);
        }
    }

    let store = PostStore::new(&config.posts_file);
    info!("Using posts file {}", store.path().display());
    let post_service = web::Data::new(PostService::new(store));

    info!("Server running on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(post_service.clone())
            .configure(routes)
            .wrap(ErrorHandlers::new().handler(StatusCode::NOT_FOUND, not_found))
            .service(default)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    info!("Server has stopped");

    Ok(())
}
