//! SeaORM implementation of ProductRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::debug;

use super::db_err;
use crate::domain::{Category, DomainError, DomainResult, Product, ProductRepository};
use crate::infrastructure::database::entities::product::{self, ProductCategory};

pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn create(&self, p: &Product) -> DomainResult<()> {
        debug!(product_id = %p.id, category = %p.category, "Inserting product");
        product::ActiveModel::from(p)
            .insert(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Product>> {
        let model = product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(Product::from))
    }

    async fn find_all(&self) -> DomainResult<Vec<Product>> {
        let models = product::Entity::find()
            .order_by_asc(product::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_category(&self, category: Category) -> DomainResult<Vec<Product>> {
        let models = product::Entity::find()
            .filter(product::Column::Category.eq(ProductCategory::from(category)))
            .order_by_asc(product::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn update(&self, p: &Product) -> DomainResult<()> {
        debug!(product_id = %p.id, "Updating product");
        match product::ActiveModel::from(p).update(&self.db).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(DomainError::not_found("Product", "id", &p.id)),
            Err(e) => Err(db_err(e)),
        }
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let result = product::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Product", "id", id));
        }
        Ok(())
    }
}
