use crate::types::user::{FieldError, UserForm, ValidUser};

/// Absent, empty and whitespace-only values all count as missing.
fn required(
    value: Option<&str>,
    field: &str,
    label: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v.to_string()),
        _ => {
            errors.push(FieldError {
                field: field.to_string(),
                message: format!("The {label} field is required."),
            });
            None
        }
    }
}

/// Presence checks shared by create and edit. Reports every failing field.
pub fn validate(form: &UserForm) -> Result<ValidUser, Vec<FieldError>> {
    let mut errors = Vec::new();
    let name = required(form.name.as_deref(), "name", "Name", &mut errors);
    let email = required(form.email.as_deref(), "email", "Email", &mut errors);

    match (name, email) {
        (Some(name), Some(email)) => Ok(ValidUser { name, email }),
        _ => Err(errors),
    }
}
