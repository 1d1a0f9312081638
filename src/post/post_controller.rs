use crate::post::post_model::CreatePostRequest;
use crate::post::post_service::PostService;
use crate::utils::error::CustomError;
use actix_web::{HttpResponse, Responder, web};

pub async fn create_post(
    post_service: web::Data<PostService>,
    post: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, CustomError> {
    let post = post.into_inner();

    let created = post_service
        .create_post(
            post.content.as_ref(),
            post.author.as_ref(),
            post.tags.as_ref(),
        )
        .await?;

    Ok(HttpResponse::Created().json(created))
}

pub async fn list_posts(post_service: web::Data<PostService>) -> impl Responder {
    HttpResponse::Ok().json(post_service.list_posts().await)
}
