//! Error types for the cart actor.

use crate::model::MenuItemId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// A stored line with quantity 0.
    #[error("Invalid quantity {quantity} for item {id}")]
    InvalidQuantity { id: MenuItemId, quantity: u32 },

    /// Quantity would overflow.
    #[error("Quantity limit reached for item {0}")]
    QuantityOverflow(MenuItemId),

    /// Menu lookup failed while adding an item.
    #[error("Catalog lookup failed: {0}")]
    Catalog(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
