use crate::model::{MenuItem, MenuItemId};
use serde::{Deserialize, Serialize};

/// One line of the cart: a copy of the menu item plus a quantity.
///
/// The item's fields are flattened next to `quantity` on the wire, matching what the
/// storefront has always stored under `cart`:
///
/// ```text
/// [{"id":3,"name":"Butter Chicken","category":"main-course","price":350,...,"quantity":2}]
/// ```
///
/// Invariant: `quantity >= 1`; the cart holds at most one line per item id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub item: MenuItem,
    pub quantity: u32,
}

/// Payload for adding an item to the cart. The line id is the item id.
#[derive(Debug, Clone)]
pub struct CartLineCreate {
    pub item: MenuItem,
}

impl CartLine {
    pub fn new(item: MenuItem) -> Self {
        Self { item, quantity: 1 }
    }

    pub fn item_id(&self) -> MenuItemId {
        self.item.id
    }

    /// price × quantity
    pub fn line_total(&self) -> f64 {
        self.item.price * f64::from(self.quantity)
    }
}

/// Σ price × quantity over `lines`.
pub fn cart_total(lines: &[CartLine]) -> f64 {
    lines.iter().map(CartLine::line_total).sum()
}

/// Σ quantity over `lines`; the number shown on the cart badge.
pub fn item_count(lines: &[CartLine]) -> u32 {
    lines.iter().map(|line| line.quantity).sum()
}
