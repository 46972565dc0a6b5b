//! Table rows and aggregates rendered by the admin dashboard.

use crate::model::{MenuItem, MenuItemId, Order, OrderId};
use chrono::NaiveDate;

const CELL_WIDTH: usize = 50;

fn head(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuRow {
    pub id: MenuItemId,
    pub name: String,
    /// Category with its first `-` replaced by a space.
    pub category: String,
    pub price: f64,
    /// First 50 characters, always followed by `...`.
    pub description: String,
}

impl From<&MenuItem> for MenuRow {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            category: item.category.label(),
            price: item.price,
            description: format!("{}...", head(&item.description, CELL_WIDTH)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub id: OrderId,
    pub customer: String,
    /// `name (qty), ...`, cut to 50 characters.
    pub items: String,
    pub total: f64,
    pub payment_method: String,
    pub date: NaiveDate,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        let summary = order
            .items
            .iter()
            .map(|line| format!("{} ({})", line.item.name, line.quantity))
            .collect::<Vec<_>>()
            .join(", ");
        let items = if summary.chars().count() > CELL_WIDTH {
            format!("{}...", head(&summary, CELL_WIDTH))
        } else {
            summary
        };

        Self {
            id: order.id,
            customer: order.customer.name.clone(),
            items,
            total: order.total,
            payment_method: order.payment_method.as_str().to_uppercase(),
            date: order.date.date_naive(),
        }
    }
}

/// Overview cards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardStats {
    pub menu_items: usize,
    pub orders: usize,
    pub revenue: f64,
}

impl DashboardStats {
    pub fn compute(menu: &[MenuItem], orders: &[Order]) -> Self {
        Self {
            menu_items: menu.len(),
            orders: orders.len(),
            revenue: orders.iter().map(|order| order.total).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_actor::default_menu;
    use crate::model::{CartLine, Customer, OrderCreate, PaymentMethod};
    use chrono::{TimeZone, Utc};

    fn order(lines: Vec<(usize, u32)>) -> Order {
        let menu = default_menu();
        let items = lines
            .into_iter()
            .map(|(index, quantity)| CartLine {
                item: menu[index].clone(),
                quantity,
            })
            .collect();
        Order::new(
            OrderId(1_718_000_000_000),
            OrderCreate {
                customer: Customer {
                    name: "Kabir".into(),
                    email: "k@example.com".into(),
                    phone: "1".into(),
                    address: "x".into(),
                },
                items,
                payment_method: PaymentMethod::Upi,
            },
            Utc.with_ymd_and_hms(2024, 6, 10, 23, 30, 0).unwrap(),
        )
    }

    #[test]
    fn test_menu_row_formatting() {
        let menu = default_menu();
        let row = MenuRow::from(&menu[3]);
        assert_eq!(row.category, "main course");
        assert_eq!(
            row.description,
            "Fragrant basmati rice with aromatic spices and veg..."
        );

        let short = MenuRow::from(&menu[6]);
        assert!(short.description.ends_with("syrup..."));
    }

    #[test]
    fn test_order_row_summary() {
        let row = OrderRow::from(&order(vec![(2, 2), (8, 1)]));
        assert_eq!(row.items, "Butter Chicken (2), Mango Lassi (1)");
        assert_eq!(row.payment_method, "UPI");
        assert_eq!(row.date, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        assert_eq!(row.total, 800.0);

        let long = OrderRow::from(&order(vec![(2, 1), (4, 1), (7, 1), (9, 1)]));
        assert_eq!(long.items.chars().count(), 53);
        assert!(long.items.ends_with("..."));
    }

    #[test]
    fn test_stats() {
        let orders = vec![order(vec![(0, 1)]), order(vec![(2, 2)])];
        let stats = DashboardStats::compute(&default_menu(), &orders);
        assert_eq!(
            stats,
            DashboardStats {
                menu_items: 10,
                orders: 2,
                revenue: 850.0
            }
        );
    }
}
