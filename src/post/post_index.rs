use super::post_controller::{create_post, list_posts};
use crate::utils::error::CustomError;
use actix_web::web;

pub fn post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/posts")
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                CustomError::BadRequestError(err.to_string()).into()
            }))
            .route("", web::post().to(create_post))
            .route("", web::get().to(list_posts)),
    );
}
