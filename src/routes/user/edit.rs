use actix_web::{get, post, web};
use std::sync::Arc;

use crate::db::memory_service::MemoryService;
use crate::routes::user::{form_or_default, UserBody, LIST_PATH};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{FormView, UserForm};

#[get("/edit/{id}")]
pub async fn edit_form(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<MemoryService>>,
    path: web::Path<i32>,
) -> ApiResult<FormView> {
    let user = db.get_user_by_id(path.into_inner()).await?;

    Ok(ApiResponse::Ok(FormView {
        id: Some(user.id),
        user: UserForm::from(&user),
        errors: Vec::new(),
    }))
}

#[post("/edit/{id}")]
pub async fn edit(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<MemoryService>>,
    path: web::Path<i32>,
    body: Option<UserBody>,
) -> ApiResult<FormView> {
    let id = path.into_inner();
    let form = form_or_default(body);

    match db.update_user(id, &form).await {
        Ok(_) => Ok(ApiResponse::Redirect(LIST_PATH)),
        Err(AppError::Validation(errors)) => Ok(ApiResponse::Invalid(FormView {
            id: Some(id),
            user: form,
            errors,
        })),
        Err(e) => Err(e),
    }
}
