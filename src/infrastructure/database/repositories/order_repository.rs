//! SeaORM implementation of OrderRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Select, Set, TransactionTrait,
};
use tracing::debug;

use super::db_err;
use crate::domain::{DomainError, DomainResult, Order, OrderRepository, OrderStatus};
use crate::infrastructure::database::entities::{order, order_item};

pub struct SeaOrmOrderRepository {
    db: DatabaseConnection,
}

impl SeaOrmOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs the header query, then loads the items of every returned order
    /// in one go.
    async fn load(&self, query: Select<order::Entity>) -> DomainResult<Vec<Order>> {
        let headers = query.all(&self.db).await.map_err(db_err)?;
        if headers.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = headers.iter().map(|h| h.id.clone()).collect();
        let rows = order_item::Entity::find()
            .filter(order_item::Column::OrderId.is_in(ids))
            .order_by_asc(order_item::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut items_by_order: HashMap<String, Vec<order_item::Model>> = HashMap::new();
        for row in rows {
            items_by_order.entry(row.order_id.clone()).or_default().push(row);
        }

        Ok(headers
            .into_iter()
            .map(|h| {
                let items = items_by_order.remove(&h.id).unwrap_or_default();
                h.into_domain(items)
            })
            .collect())
    }
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn create(&self, o: &Order) -> DomainResult<()> {
        debug!(order_id = %o.id, items = o.items.len(), "Inserting order");

        let txn = self.db.begin().await.map_err(db_err)?;

        order::ActiveModel::from(o)
            .insert(&txn)
            .await
            .map_err(db_err)?;

        let items: Vec<order_item::ActiveModel> = o
            .items
            .iter()
            .map(|item| order_item::ActiveModel::for_order(&o.id, item))
            .collect();
        if !items.is_empty() {
            order_item::Entity::insert_many(items)
                .exec(&txn)
                .await
                .map_err(db_err)?;
        }

        // dropping `txn` on any early return above rolls everything back
        txn.commit().await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Order>> {
        let orders = self
            .load(order::Entity::find().filter(order::Column::Id.eq(id)))
            .await?;
        Ok(orders.into_iter().next())
    }

    async fn find_all(&self) -> DomainResult<Vec<Order>> {
        self.load(
            order::Entity::find()
                .order_by_desc(order::Column::CreatedAt)
                .order_by_asc(order::Column::Id),
        )
        .await
    }

    async fn find_by_status(&self, status: OrderStatus) -> DomainResult<Vec<Order>> {
        self.load(
            order::Entity::find()
                .filter(order::Column::Status.eq(order::Status::from(status)))
                .order_by_asc(order::Column::CreatedAt)
                .order_by_asc(order::Column::Id),
        )
        .await
    }

    async fn find_by_customer(&self, customer_id: &str) -> DomainResult<Vec<Order>> {
        self.load(
            order::Entity::find()
                .filter(order::Column::CustomerId.eq(customer_id))
                .order_by_desc(order::Column::CreatedAt)
                .order_by_asc(order::Column::Id),
        )
        .await
    }

    async fn update_status(&self, o: &Order) -> DomainResult<()> {
        debug!(order_id = %o.id, status = %o.status, "Updating order status");

        let active = order::ActiveModel {
            id: Set(o.id.clone()),
            status: Set(o.status.into()),
            updated_at: Set(o.updated_at),
            ..Default::default()
        };

        match active.update(&self.db).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(DomainError::not_found("Order", "id", &o.id)),
            Err(e) => Err(db_err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderItem;
    use crate::infrastructure::database::repositories::test_db;

    fn item(product_id: &str, price: f64, quantity: i32, note: Option<&str>) -> OrderItem {
        OrderItem {
            product_id: product_id.into(),
            name: format!("Produto {product_id}"),
            price,
            quantity,
            note: note.map(String::from),
        }
    }

    fn order(id: &str, customer_id: Option<&str>) -> Order {
        Order::new(
            id,
            customer_id.map(String::from),
            vec![item("p-2", 10.0, 2, Some("sem cebola")), item("p-1", 5.5, 1, None)],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn order_round_trips_with_items_in_request_order() {
        let repo = SeaOrmOrderRepository::new(test_db().await);
        repo.create(&order("o-1", None)).await.unwrap();

        let stored = repo.find_by_id("o-1").await.unwrap().unwrap();
        assert_eq!(stored.total, 25.5);
        assert_eq!(stored.status, OrderStatus::Received);
        assert_eq!(stored.customer_id, None);
        assert_eq!(stored.items.len(), 2);
        assert_eq!(stored.items[0].product_id, "p-2");
        assert_eq!(stored.items[0].note.as_deref(), Some("sem cebola"));
        assert_eq!(stored.items[1].product_id, "p-1");
    }

    #[tokio::test]
    async fn failed_insert_leaves_no_items_behind() {
        let db = test_db().await;
        let repo = SeaOrmOrderRepository::new(db.clone());
        repo.create(&order("o-1", None)).await.unwrap();

        // same primary key: header insert fails inside the transaction
        assert!(repo.create(&order("o-1", None)).await.is_err());

        let rows = order_item::Entity::find().all(&db).await.unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn status_update_and_filters() {
        let repo = SeaOrmOrderRepository::new(test_db().await);
        let mut first = order("o-1", None);
        repo.create(&first).await.unwrap();
        repo.create(&order("o-2", None)).await.unwrap();

        first.update_status(OrderStatus::Ready);
        repo.update_status(&first).await.unwrap();

        let ready = repo.find_by_status(OrderStatus::Ready).await.unwrap();
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].id, "o-1");
        assert_eq!(ready[0].items.len(), 2);

        let received = repo.find_by_status(OrderStatus::Received).await.unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].id, "o-2");
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn status_update_of_missing_order_is_not_found() {
        let repo = SeaOrmOrderRepository::new(test_db().await);
        let ghost = order("o-404", None);
        assert!(matches!(
            repo.update_status(&ghost).await,
            Err(DomainError::NotFound { entity: "Order", .. })
        ));
    }
}
