use serde::Serialize;
use crate::types::error::AppError;
use actix_web::{http::header, HttpResponse, Responder};

pub enum ApiResponse<T> {
    Ok(T),
    EmptyOk,
    /// A form that failed validation, rendered again with its errors.
    Invalid(T),
    /// 303 so the browser follows up with a GET.
    Redirect(&'static str),
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(v),
            ApiResponse::EmptyOk => HttpResponse::Ok().finish(),
            ApiResponse::Invalid(v) => HttpResponse::UnprocessableEntity().json(v),
            ApiResponse::Redirect(location) => HttpResponse::SeeOther()
                .insert_header((header::LOCATION, location))
                .finish(),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;
