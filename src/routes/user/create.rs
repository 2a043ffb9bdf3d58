use actix_web::{get, post, web};
use std::sync::Arc;

use crate::db::memory_service::MemoryService;
use crate::routes::user::{form_or_default, UserBody, LIST_PATH};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::FormView;

#[get("/create")]
pub async fn create_form(
    _req: actix_web::HttpRequest,
) -> ApiResult<FormView> {
    Ok(ApiResponse::Ok(FormView::default()))
}

#[post("/create")]
pub async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<MemoryService>>,
    body: Option<UserBody>,
) -> ApiResult<FormView> {
    let form = form_or_default(body);

    match db.create_user(&form).await {
        Ok(_) => Ok(ApiResponse::Redirect(LIST_PATH)),
        Err(AppError::Validation(errors)) => Ok(ApiResponse::Invalid(FormView {
            id: None,
            user: form,
            errors,
        })),
        Err(e) => Err(e),
    }
}
