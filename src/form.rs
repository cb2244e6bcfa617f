use crate::error::ValidationError;

/// Every input field that takes part in required-field validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Relation,
    Email,
    Password,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Phone => "Phone number",
            Field::Relation => "Relation",
            Field::Email => "Email",
            Field::Password => "Password",
        }
    }

    /// Inline message shown under an empty field
    pub fn required_message(&self) -> String {
        format!("{} is required", self.label())
    }
}

/// Per-field "missing" flags for a form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    missing: Vec<Field>,
}

impl FieldErrors {
    /// Flags every field whose trimmed value is empty, keeping form order
    pub fn check(fields: &[(Field, &str)]) -> Self {
        let missing = fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
            .collect();
        Self { missing }
    }

    pub fn has(&self, field: Field) -> bool {
        self.missing.contains(&field)
    }

    pub fn clear(&mut self, field: Field) {
        self.missing.retain(|f| *f != field);
    }

    pub fn is_empty(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(self.missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_flags_blank_and_whitespace() {
        let errors = FieldErrors::check(&[
            (Field::Name, "Ada"),
            (Field::Phone, "   "),
            (Field::Relation, ""),
        ]);
        assert!(!errors.has(Field::Name));
        assert!(errors.has(Field::Phone));
        assert!(errors.has(Field::Relation));
    }

    #[test]
    fn test_clear_single_field() {
        let mut errors = FieldErrors::check(&[(Field::Email, ""), (Field::Password, "")]);
        errors.clear(Field::Email);
        assert!(!errors.has(Field::Email));
        assert!(errors.has(Field::Password));
    }

    #[test]
    fn test_into_result() {
        assert!(FieldErrors::check(&[(Field::Name, "x")]).into_result().is_ok());
        let err = FieldErrors::check(&[(Field::Name, ""), (Field::Phone, "1")])
            .into_result()
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingFields(vec![Field::Name]));
    }

    #[test]
    fn test_required_message() {
        assert_eq!(Field::Relation.required_message(), "Relation is required");
    }
}
