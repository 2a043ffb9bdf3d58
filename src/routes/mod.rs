use actix_web::web;

pub mod health;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/user")
            .service(user::list::list)
            .service(user::details::details)
            .service(user::create::create_form)
            .service(user::create::create)
            .service(user::edit::edit_form)
            .service(user::edit::edit)
            .service(user::delete::delete_confirm)
            .service(user::delete::delete)
            .service(user::search::search)
    );
}
