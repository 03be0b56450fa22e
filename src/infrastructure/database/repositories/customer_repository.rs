//! SeaORM implementation of CustomerRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::debug;

use super::{db_err, db_err_with_conflict};
use crate::domain::{Customer, CustomerRepository, DomainError, DomainResult};
use crate::infrastructure::database::entities::customer;

pub struct SeaOrmCustomerRepository {
    db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn tax_id_taken(tax_id: &str) -> String {
    format!("customer with CPF {}", tax_id)
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn create(&self, c: &Customer) -> DomainResult<()> {
        debug!(customer_id = %c.id, "Inserting customer");
        customer::ActiveModel::from(c)
            .insert(&self.db)
            .await
            .map_err(|e| db_err_with_conflict(e, || tax_id_taken(&c.tax_id)))?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Customer>> {
        let model = customer::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(Customer::from))
    }

    async fn find_by_tax_id(&self, tax_id: &str) -> DomainResult<Option<Customer>> {
        let model = customer::Entity::find()
            .filter(customer::Column::TaxId.eq(tax_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(Customer::from))
    }

    async fn find_all(&self) -> DomainResult<Vec<Customer>> {
        let models = customer::Entity::find()
            .order_by_asc(customer::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(Customer::from).collect())
    }

    async fn update(&self, c: &Customer) -> DomainResult<()> {
        debug!(customer_id = %c.id, "Updating customer");
        match customer::ActiveModel::from(c).update(&self.db).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(DomainError::not_found("Customer", "id", &c.id)),
            Err(e) => Err(db_err_with_conflict(e, || tax_id_taken(&c.tax_id))),
        }
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let result = customer::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Customer", "id", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::repositories::test_db;

    fn maria() -> Customer {
        Customer::new("c-1", "Maria", "111.444.777-35", "maria@example.com", "11999990000").unwrap()
    }

    #[tokio::test]
    async fn find_by_tax_id_matches_find_by_id() {
        let repo = SeaOrmCustomerRepository::new(test_db().await);
        repo.create(&maria()).await.unwrap();

        let by_id = repo.find_by_id("c-1").await.unwrap().unwrap();
        let by_tax_id = repo.find_by_tax_id("11144477735").await.unwrap().unwrap();
        assert_eq!(by_id, by_tax_id);
        assert_eq!(by_id.name, "Maria");
    }

    #[tokio::test]
    async fn unique_index_reports_conflict() {
        let repo = SeaOrmCustomerRepository::new(test_db().await);
        repo.create(&maria()).await.unwrap();

        let twin = Customer::new("c-2", "Joana", "11144477735", "joana@example.com", "1188").unwrap();
        let err = repo.create(&twin).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn update_and_delete_missing_rows_are_not_found() {
        let repo = SeaOrmCustomerRepository::new(test_db().await);
        let ghost = maria();

        assert!(matches!(
            repo.update(&ghost).await,
            Err(DomainError::NotFound { entity: "Customer", .. })
        ));
        assert!(matches!(
            repo.delete("c-1").await,
            Err(DomainError::NotFound { entity: "Customer", .. })
        ));
    }

    #[tokio::test]
    async fn list_is_ordered_by_name() {
        let repo = SeaOrmCustomerRepository::new(test_db().await);
        let zeca = Customer::new("c-2", "Zeca", "52998224725", "zeca@example.com", "1177").unwrap();
        repo.create(&zeca).await.unwrap();
        repo.create(&maria()).await.unwrap();

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Maria", "Zeca"]);
    }
}
