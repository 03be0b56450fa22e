//! Customer domain entity

use chrono::{DateTime, Utc};

use crate::domain::validation::{normalize_tax_id, validate_email, validate_tax_id};
use crate::domain::{DomainError, DomainResult};

/// Registered customer, identified at the counter by CPF
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: String,
    pub name: String,
    /// CPF, digits only
    pub tax_id: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full set of editable customer fields
#[derive(Debug, Clone)]
pub struct CustomerChanges {
    pub name: String,
    pub tax_id: String,
    pub email: String,
    pub phone: String,
}

impl Customer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        tax_id: &str,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> DomainResult<Self> {
        let now = Utc::now();
        let customer = Self {
            id: id.into(),
            name: name.into(),
            tax_id: normalize_tax_id(tax_id),
            email: email.into(),
            phone: phone.into(),
            created_at: now,
            updated_at: now,
        };

        customer.validate()?;
        Ok(customer)
    }

    /// Checks required fields first, then formats.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.is_empty() {
            return Err(DomainError::validation("name must not be empty"));
        }
        if self.phone.is_empty() {
            return Err(DomainError::validation("phone must not be empty"));
        }
        if !validate_tax_id(&self.tax_id) {
            return Err(DomainError::validation("invalid CPF"));
        }
        if !validate_email(&self.email) {
            return Err(DomainError::validation("invalid email"));
        }
        Ok(())
    }

    /// Returns a copy with every editable field replaced and revalidated.
    /// `self` is left untouched when validation fails.
    pub fn with_changes(&self, changes: CustomerChanges) -> DomainResult<Self> {
        let updated = Self {
            id: self.id.clone(),
            name: changes.name,
            tax_id: normalize_tax_id(&changes.tax_id),
            email: changes.email,
            phone: changes.phone,
            created_at: self.created_at,
            updated_at: Utc::now(),
        };

        updated.validate()?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Customer {
        Customer::new("c-1", "Maria", "111.444.777-35", "maria@example.com", "11999990000").unwrap()
    }

    fn changes() -> CustomerChanges {
        CustomerChanges {
            name: "Maria Silva".into(),
            tax_id: "52998224725".into(),
            email: "maria.silva@example.com".into(),
            phone: "11988887777".into(),
        }
    }

    #[test]
    fn new_customer_stamps_identical_timestamps() {
        let c = sample();
        assert_eq!(c.created_at, c.updated_at);
        assert_eq!(c.tax_id, "11144477735");
    }

    #[test]
    fn empty_name_is_reported_before_format_errors() {
        let err = Customer::new("c-1", "", "123", "bad", "").unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref m) if m == "name must not be empty"));
    }

    #[test]
    fn empty_phone_is_reported_before_cpf() {
        let err = Customer::new("c-1", "Maria", "123", "maria@example.com", "").unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref m) if m == "phone must not be empty"));
    }

    #[test]
    fn whitespace_only_text_counts_as_present() {
        let c = Customer::new("c-1", " ", "11144477735", "maria@example.com", "  ").unwrap();
        assert_eq!(c.name, " ");
        assert_eq!(c.phone, "  ");
    }

    #[test]
    fn invalid_cpf_and_email() {
        let err = Customer::new("c-1", "Maria", "11111111111", "maria@example.com", "1199").unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref m) if m == "invalid CPF"));

        let err = Customer::new("c-1", "Maria", "11144477735", "MARIA@EXAMPLE.COM", "1199").unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref m) if m == "invalid email"));
    }

    #[test]
    fn with_changes_keeps_identity_and_creation_time() {
        let original = sample();
        let updated = original.with_changes(changes()).unwrap();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at >= original.updated_at);
        assert_eq!(updated.tax_id, "52998224725");
        assert_eq!(updated.name, "Maria Silva");
    }

    #[test]
    fn with_changes_rejects_invalid_fields() {
        let original = sample();
        let mut bad = changes();
        bad.email = "not-an-email".into();
        assert!(original.with_changes(bad).is_err());
        assert_eq!(original.email, "maria@example.com");
    }
}
