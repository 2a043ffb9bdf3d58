use actix_web::{web, App};
use std::sync::Arc;
use user_directory::{
    db::memory_service::MemoryService,
    types::user::{User, UserForm},
};

pub struct TestClient {
    pub db: Arc<MemoryService>,
}

impl TestClient {
    pub fn new(db: Arc<MemoryService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(user_directory::routes::configure_routes)
    }

    #[allow(dead_code)]
    pub async fn create_test_user(&self, name: &str) -> User {
        self.db
            .create_user(&UserForm::new(name, &format!("{}@test.com", name.to_lowercase())))
            .await
            .expect("Failed to create test user")
    }
}
