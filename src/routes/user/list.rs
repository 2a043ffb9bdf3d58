use actix_web::{get, web};
use std::sync::Arc;

use crate::db::memory_service::MemoryService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::ListView;

#[get("")]
pub async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<MemoryService>>,
) -> ApiResult<ListView> {
    Ok(ApiResponse::Ok(ListView {
        users: db.list_users().await,
    }))
}
