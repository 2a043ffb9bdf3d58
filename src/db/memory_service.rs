use tokio::sync::RwLock;
use tracing::info;

use crate::types::user::User;

/// The process-wide user collection. Shared with handlers through
/// `web::Data<Arc<MemoryService>>`; every operation holds the lock for its
/// whole read or read-modify-write.
#[derive(Default)]
pub struct MemoryService {
    pub(crate) users: RwLock<Vec<User>>,
}

impl MemoryService {
    pub fn new() -> Self {
        info!("Initializing in-memory user store...");
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}
