use crate::db::memory_service::MemoryService;
use crate::types::{
    error::AppError,
    user::{User, UserForm},
};
use crate::utils::validation::validate;
use tracing::{debug, info};

impl MemoryService {
    pub async fn list_users(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<User, AppError> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    pub async fn create_user(&self, form: &UserForm) -> Result<User, AppError> {
        let valid = validate(form).map_err(AppError::Validation)?;

        let mut users = self.users.write().await;
        let id = users.iter().map(|u| u.id).max().map_or(1, |max| max + 1);
        let user = User {
            id,
            name: valid.name,
            email: valid.email,
        };
        users.push(user.clone());

        info!(id, "Created user");
        Ok(user)
    }

    /// The id is checked before the form, so a missing record wins over a bad form.
    pub async fn update_user(&self, id: i32, form: &UserForm) -> Result<User, AppError> {
        let mut users = self.users.write().await;
        let existing = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(AppError::NotFound)?;

        let valid = validate(form).map_err(AppError::Validation)?;
        existing.name = valid.name;
        existing.email = valid.email;

        info!(id, "Updated user");
        Ok(existing.clone())
    }

    /// Removing an unknown id is not an error. Returns whether a record went away.
    pub async fn delete_user(&self, id: i32) -> bool {
        let mut users = self.users.write().await;
        match users.iter().position(|u| u.id == id) {
            Some(index) => {
                users.remove(index);
                info!(id, "Deleted user");
                true
            }
            None => {
                debug!(id, "Delete requested for unknown user");
                false
            }
        }
    }

    /// Case-insensitive substring match on name. An empty query returns everything.
    pub async fn search_users(&self, query: Option<&str>) -> Vec<User> {
        let users = self.users.read().await;
        let query = match query {
            Some(q) if !q.is_empty() => q.to_lowercase(),
            _ => return users.clone(),
        };

        let results: Vec<User> = users
            .iter()
            .filter(|u| u.name.to_lowercase().contains(&query))
            .cloned()
            .collect();
        debug!(query = %query, hits = results.len(), "Searched users");
        results
    }
}
