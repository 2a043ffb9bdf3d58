use actix_web::web::{Either, Form, Json};

use crate::types::user::UserForm;

pub mod create;
pub mod delete;
pub mod details;
pub mod edit;
pub mod list;
pub mod search;

/// Where successful writes send the browser.
pub const LIST_PATH: &str = "/user";

/// Browser forms post urlencoded bodies, API clients post JSON.
pub type UserBody = Either<Json<UserForm>, Form<UserForm>>;

/// A missing or unreadable body binds as an empty form, so validation
/// (or the id lookup) decides the response instead of the extractor.
pub fn form_or_default(body: Option<UserBody>) -> UserForm {
    body.map(|b| b.into_inner()).unwrap_or_default()
}
