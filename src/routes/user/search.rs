use actix_web::{get, web};
use std::sync::Arc;

use crate::db::memory_service::MemoryService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{SearchParams, SearchView};

#[get("/search")]
pub async fn search(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<MemoryService>>,
    params: web::Query<SearchParams>,
) -> ApiResult<SearchView> {
    let query = params.into_inner().query;
    let users = db.search_users(query.as_deref()).await;

    Ok(ApiResponse::Ok(SearchView { query, users }))
}
