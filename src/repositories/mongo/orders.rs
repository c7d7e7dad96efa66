//! 주문 컬렉션

use async_trait::async_trait;
use mongodb::bson::doc;
use crate::core::errors::AppResult;
use crate::domain::entities::Order;
use crate::domain::models::pagination::PageRequest;
use crate::repositories::orders::OrderRepository;
use super::{map_mongo_error, MongoUnitOfWork, ORDERS};

#[async_trait]
impl OrderRepository for MongoUnitOfWork {
    async fn insert_order(&mut self, order: &Order) -> AppResult<()> {
        self.collection::<Order>(ORDERS)
            .insert_one(order)
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)?;
        Ok(())
    }

    async fn find_order(&mut self, order_id: &str) -> AppResult<Option<Order>> {
        self.collection::<Order>(ORDERS)
            .find_one(doc! { "_id": order_id })
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)
    }

    async fn list_orders_for_user(&mut self, user_id: &str, page: PageRequest) -> AppResult<(Vec<Order>, u64)> {
        let filter = doc! { "user_id": user_id };

        let total = self
            .collection::<Order>(ORDERS)
            .count_documents(filter.clone())
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)?;

        let cursor = self
            .collection::<Order>(ORDERS)
            .find(filter)
            .sort(doc! { "created_at": -1, "_id": -1 })
            .skip(page.offset())
            .limit(page.limit as i64)
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)?;

        let orders = self.collect(cursor).await?;
        Ok((orders, total))
    }
}
