//! # Emergency Contacts
//!
//! The contact list and the add-contact form. Both live only as long as the
//! screen that owns them; the list is re-seeded from fixtures every time the
//! contacts screen opens, and a submitted form is never appended to it.

use crate::error::ValidationError;
use crate::fixtures::mock_contacts;
use crate::form::{Field, FieldErrors};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: u32,
    pub name: String,
    pub phone: String,
    pub relation: String,
}

impl Contact {
    pub fn new(id: u32, name: &str, phone: &str, relation: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            phone: phone.to_string(),
            relation: relation.to_string(),
        }
    }
}

/// Contacts shown on the Emergency Contacts screen
#[derive(Debug, Clone)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    pub fn from_fixtures() -> Self {
        Self::new(mock_contacts())
    }

    /// Removes the contact with `id`, keeping the order of the rest
    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.id != id);
        self.contacts.len() != before
    }

    pub fn get(&self, id: u32) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

/// A validated contact from the add-contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    pub relation: String,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub relation: String,
    pub errors: FieldErrors,
}

impl ContactForm {
    /// Stores the value and clears that field's error
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Relation => self.relation = value,
            Field::Email | Field::Password => {
                log::debug!("Contact form has no {:?} field", field);
                return;
            }
        }
        self.errors.clear(field);
    }

    pub fn submit(&mut self) -> Result<NewContact, ValidationError> {
        self.errors = FieldErrors::check(&[
            (Field::Name, self.name.as_str()),
            (Field::Phone, self.phone.as_str()),
            (Field::Relation, self.relation.as_str()),
        ]);
        self.errors.clone().into_result()?;

        Ok(NewContact {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            relation: self.relation.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_removes_only_that_id() {
        let mut book = ContactBook::from_fixtures();
        assert!(book.delete(2));

        let ids: Vec<u32> = book.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(book.get(1).map(|c| c.name.as_str()), Some("John Doe"));
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut book = ContactBook::from_fixtures();
        assert!(!book.delete(42));
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn test_delete_all() {
        let mut book = ContactBook::from_fixtures();
        for id in [1, 2, 3] {
            book.delete(id);
        }
        assert!(book.is_empty());
    }

    #[test]
    fn test_submit_flags_every_empty_field() {
        let mut form = ContactForm::default();
        form.set(Field::Phone, "911".to_string());

        let err = form.submit().unwrap_err();
        assert_eq!(err.fields(), &[Field::Name, Field::Relation]);
        assert!(form.errors.has(Field::Name));
        assert!(!form.errors.has(Field::Phone));
        assert!(form.errors.has(Field::Relation));
    }

    #[test]
    fn test_editing_clears_field_error() {
        let mut form = ContactForm::default();
        let _ = form.submit();
        form.set(Field::Name, "A".to_string());

        assert!(!form.errors.has(Field::Name));
        assert!(form.errors.has(Field::Phone));
    }

    #[test]
    fn test_submit_trims_values() {
        let mut form = ContactForm::default();
        form.set(Field::Name, "  Ada Lovelace ".to_string());
        form.set(Field::Phone, "+44 20 7946 0000".to_string());
        form.set(Field::Relation, "Friend ".to_string());

        let contact = form.submit().unwrap();
        assert_eq!(contact.name, "Ada Lovelace");
        assert_eq!(contact.relation, "Friend");
        assert!(form.errors.is_empty());
    }
}
