use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Submitted name/email. Any `id` in the body is ignored.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserForm {
    pub fn new(name: &str, email: &str) -> Self {
        UserForm {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
        }
    }
}

impl From<&User> for UserForm {
    fn from(user: &User) -> Self {
        UserForm::new(&user.name, &user.email)
    }
}

/// A form that passed presence validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidUser {
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ListView {
    pub users: Vec<User>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct FormView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub user: UserForm,
    pub errors: Vec<FieldError>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SearchView {
    pub query: Option<String>,
    pub users: Vec<User>,
}

#[derive(Deserialize, Debug)]
pub struct SearchParams {
    pub query: Option<String>,
}
