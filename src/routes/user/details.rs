use actix_web::{get, web};
use std::sync::Arc;

use crate::db::memory_service::MemoryService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::User;

#[get("/details/{id}")]
pub async fn details(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<MemoryService>>,
    path: web::Path<i32>,
) -> ApiResult<User> {
    let user = db.get_user_by_id(path.into_inner()).await?;
    Ok(ApiResponse::Ok(user))
}
