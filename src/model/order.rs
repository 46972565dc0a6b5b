/// A completed checkout.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](store_actor::ActorEntity) trait and is owned by
/// the order actor. Orders are appended once and never mutated or deleted.
use crate::model::{cart_total, CartLine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for orders: the creation time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<OrderId> for u64 {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Upi,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown payment method: {0}")]
pub struct ParsePaymentMethodError(pub String);

impl FromStr for PaymentMethod {
    type Err = ParsePaymentMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(PaymentMethod::Cash),
            "card" => Ok(PaymentMethod::Card),
            "upi" => Ok(PaymentMethod::Upi),
            other => Err(ParsePaymentMethodError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer: Customer,
    /// Snapshot of the cart at checkout.
    pub items: Vec<CartLine>,
    pub total: f64,
    pub payment_method: PaymentMethod,
    pub date: DateTime<Utc>,
    pub status: OrderStatus,
}

/// Payload for placing an order. Total, date and status are filled in by the order actor.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer: Customer,
    pub items: Vec<CartLine>,
    pub payment_method: PaymentMethod,
}

impl Order {
    pub fn new(id: impl Into<OrderId>, params: OrderCreate, date: DateTime<Utc>) -> Self {
        let total = cart_total(&params.items);
        Self {
            id: id.into(),
            customer: params.customer,
            items: params.items,
            total,
            payment_method: params.payment_method,
            date,
            status: OrderStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, MenuItem, MenuItemId};

    fn customer() -> Customer {
        Customer {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            phone: "9876543210".into(),
            address: "12 MG Road".into(),
        }
    }

    #[test]
    fn test_order_wire_format_is_camel_case() {
        let line = CartLine {
            item: MenuItem {
                id: MenuItemId(9),
                name: "Mango Lassi".into(),
                category: Category::Beverages,
                price: 100.0,
                description: String::new(),
                image: String::new(),
            },
            quantity: 2,
        };
        let order = Order::new(
            OrderId(1_700_000_000_000),
            OrderCreate {
                customer: customer(),
                items: vec![line],
                payment_method: PaymentMethod::Upi,
            },
            Utc::now(),
        );

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["paymentMethod"], "upi");
        assert_eq!(value["status"], "pending");
        assert_eq!(value["total"], 200.0);
        assert_eq!(value["items"][0]["quantity"], 2);
        assert!(value["date"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_payment_method_parsing() {
        assert_eq!("card".parse::<PaymentMethod>().unwrap(), PaymentMethod::Card);
        assert!("cheque".parse::<PaymentMethod>().is_err());
        assert!("".parse::<PaymentMethod>().is_err());
    }
}
