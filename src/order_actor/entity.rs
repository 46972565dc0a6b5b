//! Entity trait implementation for [`Order`].
//!
//! The id comes from the actor's millisecond clock; total, date and status are stamped
//! at construction.

use super::OrderError;
use crate::model::{Order, OrderCreate, OrderId};
use async_trait::async_trait;
use chrono::Utc;
use store_actor::ActorEntity;
use tracing::info;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = OrderError;

    const STORAGE_KEY: &'static str = "orders";
    const REFRESH_BEFORE_CREATE: bool = true;

    fn id(&self) -> OrderId {
        self.id
    }

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.items.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        Ok(Order::new(id, params, Utc::now()))
    }

    fn validate(&self) -> Result<(), OrderError> {
        if self.items.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        if let Some(line) = self.items.iter().find(|line| line.quantity == 0) {
            return Err(OrderError::ValidationError(format!(
                "item {} has quantity 0",
                line.item.id
            )));
        }
        if !self.total.is_finite() || self.total < 0.0 {
            return Err(OrderError::ValidationError(format!(
                "invalid total {}",
                self.total
            )));
        }
        Ok(())
    }

    async fn on_create(&mut self, _ctx: &()) -> Result<(), OrderError> {
        info!(
            order_id = %self.id,
            lines = self.items.len(),
            total = self.total,
            payment = %self.payment_method,
            "Order placed"
        );
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), OrderError> {
        Ok(())
    }
}
