use actix_web::{get, post, web};
use std::sync::Arc;

use crate::db::memory_service::MemoryService;
use crate::routes::user::LIST_PATH;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::User;

#[get("/delete/{id}")]
pub async fn delete_confirm(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<MemoryService>>,
    path: web::Path<i32>,
) -> ApiResult<User> {
    let user = db.get_user_by_id(path.into_inner()).await?;
    Ok(ApiResponse::Ok(user))
}

// Unlike the confirmation page, an unknown id here is not a 404.
#[post("/delete/{id}")]
pub async fn delete(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<MemoryService>>,
    path: web::Path<i32>,
) -> ApiResult<()> {
    db.delete_user(path.into_inner()).await;
    Ok(ApiResponse::Redirect(LIST_PATH))
}
