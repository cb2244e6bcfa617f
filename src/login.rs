//! Sign-in form. There is no authentication behind it: any non-empty email
//! and password are accepted.

use crate::error::ValidationError;
use crate::form::{Field, FieldErrors};

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub errors: FieldErrors,
}

impl LoginForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            _ => {
                log::debug!("Login form has no {:?} field", field);
                return;
            }
        }
        self.errors.clear(field);
    }

    pub fn submit(&mut self) -> Result<(), ValidationError> {
        self.errors = FieldErrors::check(&[
            (Field::Email, self.email.as_str()),
            (Field::Password, self.password.as_str()),
        ]);
        self.errors.clone().into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_login_rejected() {
        let mut form = LoginForm::default();
        let err = form.submit().unwrap_err();
        assert_eq!(err.fields(), &[Field::Email, Field::Password]);
    }

    #[test]
    fn test_any_credentials_accepted() {
        let mut form = LoginForm::default();
        form.set(Field::Email, "user@example.com".to_string());
        form.set(Field::Password, "x".to_string());
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_unrelated_field_ignored() {
        let mut form = LoginForm::default();
        form.set(Field::Relation, "Friend".to_string());
        assert!(form.email.is_empty());
        assert!(form.password.is_empty());
    }
}
