//! Entity trait implementation for [`CartLine`].
//!
//! The line id is the menu item id, so the actor keeps at most one line per item.

use super::{CartAction, CartError};
use crate::model::{CartLine, CartLineCreate, MenuItemId};
use async_trait::async_trait;
use store_actor::ActorEntity;

impl CartLine {
    fn bump(&mut self) -> Result<u32, CartError> {
        self.quantity = self
            .quantity
            .checked_add(1)
            .ok_or(CartError::QuantityOverflow(self.item.id))?;
        Ok(self.quantity)
    }
}

#[async_trait]
impl ActorEntity for CartLine {
    type Id = MenuItemId;
    type Create = CartLineCreate;
    type Action = CartAction;
    type ActionResult = u32;
    type Context = ();
    type Error = CartError;

    const STORAGE_KEY: &'static str = "cart";

    fn id(&self) -> MenuItemId {
        self.item.id
    }

    fn from_create_params(_id: MenuItemId, params: CartLineCreate) -> Result<Self, CartError> {
        Ok(CartLine::new(params.item))
    }

    fn natural_id(params: &CartLineCreate) -> Option<MenuItemId> {
        Some(params.item.id)
    }

    fn validate(&self) -> Result<(), CartError> {
        if self.quantity == 0 {
            return Err(CartError::InvalidQuantity {
                id: self.item.id,
                quantity: self.quantity,
            });
        }
        Ok(())
    }

    /// Adding an item that is already in the cart increments its quantity. The line keeps
    /// the item copy it was created with.
    async fn on_merge(&mut self, _params: CartLineCreate, _ctx: &()) -> Result<bool, CartError> {
        self.bump()?;
        Ok(true)
    }

    async fn handle_action(&mut self, action: CartAction, _ctx: &()) -> Result<u32, CartError> {
        match action {
            CartAction::Increase => self.bump(),
            CartAction::Decrease => {
                if self.quantity > 1 {
                    self.quantity -= 1;
                }
                Ok(self.quantity)
            }
        }
    }
}
