use entity::user;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

use super::{required, FieldView, FormErrors, REQUIRED_MESSAGE};

/// Sign-up form. Nothing mounts a handler for it yet.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl UserForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();

        for (name, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("password", &self.password),
        ] {
            if !required(value) {
                errors.add(name, REQUIRED_MESSAGE);
            }
        }

        errors.into_result()
    }

    pub fn fields(&self, errors: &FormErrors) -> Vec<FieldView> {
        vec![
            FieldView::text("name", "Name", &self.name, errors),
            FieldView::text("email", "Email", &self.email, errors),
            // never echo a password back into the page
            FieldView::text("password", "Password", "", errors).input_type("password"),
        ]
    }

    pub fn into_active_model(self) -> user::ActiveModel {
        user::ActiveModel {
            name: Set(self.name),
            email: Set(self.email),
            password: Set(self.password),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields_are_required() {
        let errors = UserForm {
            name: "Ada".to_string(),
            ..Default::default()
        }
        .validate()
        .unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), None);
        assert_eq!(errors.get("email"), Some(REQUIRED_MESSAGE));
        assert_eq!(errors.get("password"), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn password_is_not_rendered() {
        let form = UserForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        assert_eq!(form.validate(), Ok(()));

        let fields = form.fields(&FormErrors::new());
        assert_eq!(fields[2].value, "");
        assert_eq!(fields[2].input_type, "password");
    }

    #[test]
    fn maps_onto_user_columns() {
        let user = UserForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        }
        .into_active_model();

        assert_eq!(user.email, Set("ada@example.com".to_string()));
        assert_eq!(user.password, Set("hunter2".to_string()));
    }
}
