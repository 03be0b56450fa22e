//! Customer service: registration and profile maintenance
//!
//! HTTP handlers are thin wrappers that delegate here.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::validation::{normalize_tax_id, validate_tax_id};
use crate::domain::{Customer, CustomerChanges, CustomerRepository, DomainError, DomainResult};

pub struct CustomerService {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { repo }
    }

    /// Registers a new customer. The CPF must not belong to anyone else.
    pub async fn create(&self, input: CustomerChanges) -> DomainResult<Customer> {
        let tax_id = normalize_tax_id(&input.tax_id);
        if self.tax_id_taken(&tax_id, None).await {
            return Err(DomainError::Conflict(format!("customer with CPF {}", tax_id)));
        }

        let customer = Customer::new(
            Uuid::new_v4().to_string(),
            input.name,
            &input.tax_id,
            input.email,
            input.phone,
        )?;
        self.repo.create(&customer).await?;

        info!(customer_id = %customer.id, "Customer created");
        Ok(customer)
    }

    pub async fn get(&self, id: &str) -> DomainResult<Customer> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Customer", "id", id))
    }

    /// Looks a customer up by CPF; punctuation in `raw` is ignored.
    pub async fn get_by_tax_id(&self, raw: &str) -> DomainResult<Customer> {
        if !validate_tax_id(raw) {
            return Err(DomainError::validation("invalid CPF"));
        }

        let tax_id = normalize_tax_id(raw);
        self.repo
            .find_by_tax_id(&tax_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Customer", "cpf", tax_id))
    }

    pub async fn list(&self) -> DomainResult<Vec<Customer>> {
        self.repo.find_all().await
    }

    /// Replaces every editable field. Nothing is written if the new values
    /// fail validation.
    pub async fn update(&self, id: &str, changes: CustomerChanges) -> DomainResult<Customer> {
        let existing = self.get(id).await?;

        let tax_id = normalize_tax_id(&changes.tax_id);
        if tax_id != existing.tax_id && self.tax_id_taken(&tax_id, Some(id)).await {
            return Err(DomainError::Conflict(format!("customer with CPF {}", tax_id)));
        }

        let updated = existing.with_changes(changes)?;
        self.repo.update(&updated).await?;

        info!(customer_id = %updated.id, "Customer updated");
        Ok(updated)
    }

    /// Storage reports `NotFound` when there was nothing to delete.
    pub async fn delete(&self, id: &str) -> DomainResult<()> {
        self.repo.delete(id).await?;
        info!(customer_id = %id, "Customer deleted");
        Ok(())
    }

    /// Fast-path uniqueness check; the storage unique index is the real guard.
    ///
    /// A failed lookup counts as "not taken".
    async fn tax_id_taken(&self, tax_id: &str, except_id: Option<&str>) -> bool {
        match self.repo.find_by_tax_id(tax_id).await {
            Ok(Some(other)) => Some(other.id.as_str()) != except_id,
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "CPF uniqueness lookup failed, assuming no conflict");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::infrastructure::storage::InMemoryCustomerRepository;

    fn input(name: &str, tax_id: &str, email: &str) -> CustomerChanges {
        CustomerChanges {
            name: name.into(),
            tax_id: tax_id.into(),
            email: email.into(),
            phone: "11999990000".into(),
        }
    }

    fn service() -> CustomerService {
        CustomerService::new(Arc::new(InMemoryCustomerRepository::default()))
    }

    /// Every lookup fails, writes succeed.
    struct FlakyLookupRepository;

    #[async_trait]
    impl CustomerRepository for FlakyLookupRepository {
        async fn create(&self, _: &Customer) -> DomainResult<()> {
            Ok(())
        }
        async fn find_by_id(&self, _: &str) -> DomainResult<Option<Customer>> {
            Err(DomainError::Storage("connection refused".into()))
        }
        async fn find_by_tax_id(&self, _: &str) -> DomainResult<Option<Customer>> {
            Err(DomainError::Storage("connection refused".into()))
        }
        async fn find_all(&self) -> DomainResult<Vec<Customer>> {
            Err(DomainError::Storage("connection refused".into()))
        }
        async fn update(&self, _: &Customer) -> DomainResult<()> {
            Ok(())
        }
        async fn delete(&self, _: &str) -> DomainResult<()> {
            Ok(())
        }
    }

    /// Holds one customer; lookups by CPF fail, writes succeed.
    struct FailingTaxIdLookupRepository {
        existing: Customer,
    }

    #[async_trait]
    impl CustomerRepository for FailingTaxIdLookupRepository {
        async fn create(&self, _: &Customer) -> DomainResult<()> {
            Ok(())
        }
        async fn find_by_id(&self, id: &str) -> DomainResult<Option<Customer>> {
            Ok(Some(self.existing.clone()).filter(|c| c.id == id))
        }
        async fn find_by_tax_id(&self, _: &str) -> DomainResult<Option<Customer>> {
            Err(DomainError::Storage("connection refused".into()))
        }
        async fn find_all(&self) -> DomainResult<Vec<Customer>> {
            Ok(vec![self.existing.clone()])
        }
        async fn update(&self, _: &Customer) -> DomainResult<()> {
            Ok(())
        }
        async fn delete(&self, _: &str) -> DomainResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn duplicate_cpf_is_a_conflict() {
        let svc = service();
        svc.create(input("Ana", "111.444.777-35", "ana@example.com"))
            .await
            .unwrap();

        let err = svc
            .create(input("Bia", "11144477735", "bia@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        svc.create(input("Bia", "52998224725", "bia@example.com"))
            .await
            .unwrap();
        assert_eq!(svc.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn lookup_by_cpf_equals_lookup_by_id() {
        let svc = service();
        let created = svc
            .create(input("Ana", "111.444.777-35", "ana@example.com"))
            .await
            .unwrap();

        let by_id = svc.get(&created.id).await.unwrap();
        let by_cpf = svc.get_by_tax_id("111.444.777-35").await.unwrap();
        assert_eq!(by_id, by_cpf);
        assert_eq!(by_cpf, created);
    }

    #[tokio::test]
    async fn lookup_by_invalid_or_unknown_cpf() {
        let svc = service();
        assert!(matches!(
            svc.get_by_tax_id("123").await,
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            svc.get_by_tax_id("52998224725").await,
            Err(DomainError::NotFound { field: "cpf", .. })
        ));
    }

    #[tokio::test]
    async fn invalid_fields_are_rejected_on_create() {
        let svc = service();
        let err = svc
            .create(input("Ana", "11111111111", "ana@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_requires_existing_customer() {
        let svc = service();
        let err = svc
            .update("missing", input("Ana", "11144477735", "ana@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Customer", .. }));
    }

    #[tokio::test]
    async fn update_keeps_own_cpf_but_rejects_anothers() {
        let svc = service();
        let ana = svc
            .create(input("Ana", "11144477735", "ana@example.com"))
            .await
            .unwrap();
        svc.create(input("Bia", "52998224725", "bia@example.com"))
            .await
            .unwrap();

        let renamed = svc
            .update(&ana.id, input("Ana Maria", "111.444.777-35", "ana@example.com"))
            .await
            .unwrap();
        assert_eq!(renamed.name, "Ana Maria");
        assert_eq!(renamed.created_at, ana.created_at);

        let err = svc
            .update(&ana.id, input("Ana", "52998224725", "ana@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn failed_revalidation_persists_nothing() {
        let svc = service();
        let ana = svc
            .create(input("Ana", "11144477735", "ana@example.com"))
            .await
            .unwrap();

        let err = svc
            .update(&ana.id, input("", "11144477735", "ana@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(svc.get(&ana.id).await.unwrap().name, "Ana");
    }

    #[tokio::test]
    async fn lookup_errors_during_uniqueness_check_are_swallowed() {
        let svc = CustomerService::new(Arc::new(FlakyLookupRepository));
        let created = svc
            .create(input("Ana", "11144477735", "ana@example.com"))
            .await
            .unwrap();
        assert_eq!(created.tax_id, "11144477735");

        // everything else propagates storage failures
        assert!(matches!(
            svc.get(&created.id).await,
            Err(DomainError::Storage(_))
        ));
    }

    #[tokio::test]
    async fn lookup_errors_during_update_uniqueness_check_are_swallowed() {
        let existing =
            Customer::new("c-1", "Ana", "11144477735", "ana@example.com", "11999990000").unwrap();
        let svc = CustomerService::new(Arc::new(FailingTaxIdLookupRepository { existing }));

        let updated = svc
            .update("c-1", input("Ana", "529.982.247-25", "ana@example.com"))
            .await
            .unwrap();
        assert_eq!(updated.tax_id, "52998224725");
        assert_eq!(updated.id, "c-1");
    }

    #[tokio::test]
    async fn delete_missing_customer_is_not_found() {
        let svc = service();
        assert!(matches!(
            svc.delete("missing").await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
