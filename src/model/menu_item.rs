/// A dish on the menu.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](store_actor::ActorEntity) trait and is owned by
/// the catalog actor. See [`crate::catalog_actor`] for creation, seeding and validation.
///
/// Menu items are created (seed data or the admin form) and deleted, never edited in place.
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub u64);

impl From<u64> for MenuItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<MenuItemId> for u64 {
    fn from(id: MenuItemId) -> Self {
        id.0
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Menu section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Appetizers,
    MainCourse,
    Desserts,
    Beverages,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Appetizers,
        Category::MainCourse,
        Category::Desserts,
        Category::Beverages,
    ];

    /// Wire name, e.g. `main-course`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Appetizers => "appetizers",
            Category::MainCourse => "main-course",
            Category::Desserts => "desserts",
            Category::Beverages => "beverages",
        }
    }

    /// Badge text, e.g. `main course`.
    pub fn label(&self) -> String {
        self.as_str().replacen('-', " ", 1)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Category filter of the menu page: everything, or one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == *category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CategoryFilter::All),
            other => other.parse().map(CategoryFilter::Only),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub description: String,
    /// Image URI.
    pub image: String,
}

/// Payload for adding a menu item; the id is assigned by the catalog actor.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemCreate {
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub description: String,
    pub image: String,
}

impl MenuItem {
    pub fn new(id: impl Into<MenuItemId>, params: MenuItemCreate) -> Self {
        Self {
            id: id.into(),
            name: params.name,
            category: params.category,
            price: params.price,
            description: params.description,
            image: params.image,
        }
    }
}
