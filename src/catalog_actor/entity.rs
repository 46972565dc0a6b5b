//! Entity trait implementation for [`MenuItem`].

use super::{default_menu, CatalogError};
use crate::model::{MenuItem, MenuItemCreate, MenuItemId};
use async_trait::async_trait;
use store_actor::ActorEntity;
use tracing::debug;

fn check_price(price: f64) -> Result<(), CatalogError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(CatalogError::InvalidPrice(price))
    }
}

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CatalogError;

    const STORAGE_KEY: &'static str = "menuItems";

    fn id(&self) -> MenuItemId {
        self.id
    }

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, CatalogError> {
        check_price(params.price)?;
        if params.name.trim().is_empty() {
            return Err(CatalogError::EmptyField("name"));
        }
        Ok(MenuItem::new(id, params))
    }

    fn seed() -> Vec<Self> {
        default_menu()
    }

    fn validate(&self) -> Result<(), CatalogError> {
        check_price(self.price)
    }

    async fn on_create(&mut self, _ctx: &()) -> Result<(), CatalogError> {
        debug!(name = %self.name, category = %self.category, "New menu item");
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), CatalogError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn params(price: f64) -> MenuItemCreate {
        MenuItemCreate {
            name: "Samosa".into(),
            category: Category::Appetizers,
            price,
            description: "Fried pastry".into(),
            image: "assets/images/samosa.jpg".into(),
        }
    }

    #[test]
    fn test_negative_and_nan_prices_are_rejected() {
        let id = MenuItemId(1);
        assert!(MenuItem::from_create_params(id, params(0.0)).is_ok());
        assert_eq!(
            MenuItem::from_create_params(id, params(-1.0)),
            Err(CatalogError::InvalidPrice(-1.0))
        );
        assert!(MenuItem::from_create_params(id, params(f64::NAN)).is_err());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut p = params(10.0);
        p.name = "   ".into();
        assert_eq!(
            MenuItem::from_create_params(MenuItemId(1), p),
            Err(CatalogError::EmptyField("name"))
        );
    }
}
