//! # Checkout
//!
//! Turns the current cart plus a validated [`CheckoutForm`] into an [`Order`](crate::model::Order):
//!
//! 1. Snapshot the cart; an empty cart is rejected.
//! 2. Validate the form; every field failure is reported together.
//! 3. Append the order through the order actor (which re-reads the stored log first).
//! 4. Clear the cart.
//!
//! Steps 1 and 2 change nothing on failure. Once step 3 succeeds the order stands: a
//! failure to clear the cart is logged and the order id is still returned.

pub mod error;
pub mod form;

pub use error::*;
pub use form::*;

use crate::clients::{CartClient, OrderClient};
use crate::model::{OrderCreate, OrderId};
use store_actor::ActorClient;
use tracing::{info, instrument, warn};

#[instrument(skip_all)]
pub async fn place_order(
    cart: &CartClient,
    orders: &OrderClient,
    form: &CheckoutForm,
) -> Result<OrderId, CheckoutError> {
    let items = cart.list().await?;
    if items.is_empty() {
        warn!("Checkout with an empty cart");
        return Err(CheckoutError::EmptyCart);
    }

    let (customer, payment_method) = form.validate().map_err(|errors| {
        warn!(problems = errors.len(), "Checkout form rejected");
        CheckoutError::Invalid(errors)
    })?;

    let id = orders
        .place_order(OrderCreate {
            customer,
            items,
            payment_method,
        })
        .await?;
    if let Err(e) = cart.clear().await {
        warn!(order_id = %id, error = %e, "Order placed but the cart was not cleared");
    }

    info!(order_id = %id, "Checkout complete");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_actor::default_menu;
    use crate::clients::CatalogClient;
    use crate::model::{CartLine, MenuItem, Order};
    use store_actor::mock::MockClient;
    use store_actor::FrameworkError;

    fn form() -> CheckoutForm {
        CheckoutForm {
            name: "Nisha".into(),
            email: "nisha@example.com".into(),
            phone: "9000000002".into(),
            address: "7 Lake View".into(),
            payment_method: "upi".into(),
        }
    }

    #[tokio::test]
    async fn test_failed_cart_clear_still_reports_the_order() {
        let catalog = MockClient::<MenuItem>::new();
        let mut cart_mock = MockClient::<CartLine>::new();
        cart_mock
            .expect_list()
            .return_ok(vec![CartLine::new(default_menu().remove(0))]);
        cart_mock.expect_clear().return_err(FrameworkError::ActorClosed);
        let mut orders_mock = MockClient::<Order>::new();
        orders_mock.expect_create().return_ok(OrderId(1_720_000_000_000));

        let cart = CartClient::new(cart_mock.client(), CatalogClient::new(catalog.client()));
        let orders = OrderClient::new(orders_mock.client());

        let id = place_order(&cart, &orders, &form()).await.unwrap();
        assert_eq!(id, OrderId(1_720_000_000_000));
        cart_mock.verify();
        orders_mock.verify();
    }

    #[tokio::test]
    async fn test_failed_append_keeps_the_cart() {
        let catalog = MockClient::<MenuItem>::new();
        let mut cart_mock = MockClient::<CartLine>::new();
        cart_mock
            .expect_list()
            .return_ok(vec![CartLine::new(default_menu().remove(0))]);
        let mut orders_mock = MockClient::<Order>::new();
        orders_mock.expect_create().return_err(FrameworkError::ActorClosed);

        let cart = CartClient::new(cart_mock.client(), CatalogClient::new(catalog.client()));
        let orders = OrderClient::new(orders_mock.client());

        assert!(matches!(
            place_order(&cart, &orders, &form()).await,
            Err(CheckoutError::Order(_))
        ));
        // No clear was sent.
        cart_mock.verify();
    }
}
