use std::sync::Arc;
use user_directory::db::memory_service::MemoryService;

pub mod client;

pub struct TestContext {
    pub db: Arc<MemoryService>,
}

impl TestContext {
    pub fn new() -> TestContext {
        TestContext {
            db: Arc::new(MemoryService::new()),
        }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use user_directory::types::user::UserForm;

    pub fn sample_user() -> UserForm {
        UserForm::new("Test User", "test@example.com")
    }

    pub fn sample_user_named(name: &str) -> UserForm {
        UserForm::new(name, &format!("{}@example.com", name.to_lowercase()))
    }
}
