//! The "add menu item" form.

use crate::model::{Category, MenuItemCreate};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuField {
    Name,
    Category,
    Price,
    Description,
    Image,
}

impl Display for MenuField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MenuField::Name => "name",
            MenuField::Category => "category",
            MenuField::Price => "price",
            MenuField::Description => "description",
            MenuField::Image => "image",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MenuFormError {
    #[error("{0} is required")]
    Required(MenuField),
    #[error("unknown category {0:?}")]
    UnknownCategory(String),
    #[error("price {0:?} is not a non-negative number")]
    InvalidPrice(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItemForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub description: String,
    pub image: String,
}

impl MenuItemForm {
    pub fn validate(&self) -> Result<MenuItemCreate, Vec<MenuFormError>> {
        let mut errors = Vec::new();
        let mut required = |field: MenuField, value: &str| -> String {
            let value = value.trim();
            if value.is_empty() {
                errors.push(MenuFormError::Required(field));
            }
            value.to_string()
        };

        let name = required(MenuField::Name, &self.name);
        let category = required(MenuField::Category, &self.category);
        let price = required(MenuField::Price, &self.price);
        let description = required(MenuField::Description, &self.description);
        let image = required(MenuField::Image, &self.image);

        let category = match category.parse::<Category>() {
            Ok(category) => Some(category),
            Err(_) if category.is_empty() => None,
            Err(_) => {
                errors.push(MenuFormError::UnknownCategory(category));
                None
            }
        };

        let price = match price.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
            _ if price.is_empty() => None,
            _ => {
                errors.push(MenuFormError::InvalidPrice(price));
                None
            }
        };

        match (category, price) {
            (Some(category), Some(price)) if errors.is_empty() => Ok(MenuItemCreate {
                name,
                category,
                price,
                description,
                image,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> MenuItemForm {
        MenuItemForm {
            name: "Gulab Jamun".into(),
            category: "desserts".into(),
            price: " 90.5 ".into(),
            description: "Milk dumplings in syrup".into(),
            image: "assets/images/gulab-jamun.jpg".into(),
        }
    }

    #[test]
    fn test_valid_form() {
        let params = form().validate().unwrap();
        assert_eq!(params.category, Category::Desserts);
        assert_eq!(params.price, 90.5);
    }

    #[test]
    fn test_bad_price_and_category() {
        let mut f = form();
        f.price = "-3".into();
        f.category = "soups".into();
        f.image = String::new();
        assert_eq!(
            f.validate().unwrap_err(),
            vec![
                MenuFormError::Required(MenuField::Image),
                MenuFormError::UnknownCategory("soups".into()),
                MenuFormError::InvalidPrice("-3".into()),
            ]
        );

        f = form();
        f.price = "NaN".into();
        assert!(f.validate().is_err());
    }
}
