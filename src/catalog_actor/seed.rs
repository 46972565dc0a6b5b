//! The default menu: ten dishes across the four categories, ids 1 through 10.

use crate::model::{Category, MenuItem, MenuItemId};

const DEFAULT_MENU: [(&str, Category, f64, &str, &str); 10] = [
    (
        "Spring Rolls",
        Category::Appetizers,
        150.0,
        "Crispy vegetable spring rolls served with sweet chili sauce",
        "assets/images/spring-rolls.jpg",
    ),
    (
        "Paneer Tikka",
        Category::Appetizers,
        200.0,
        "Marinated cottage cheese grilled to perfection",
        "assets/images/paneer-tikka.jpg",
    ),
    (
        "Butter Chicken",
        Category::MainCourse,
        350.0,
        "Tender chicken in rich tomato and butter gravy",
        "assets/images/butter-chicken.jpg",
    ),
    (
        "Biryani",
        Category::MainCourse,
        300.0,
        "Fragrant basmati rice with aromatic spices and vegetables",
        "assets/images/biryani.jpg",
    ),
    (
        "Margherita Pizza",
        Category::MainCourse,
        400.0,
        "Classic pizza with tomato sauce, mozzarella, and basil",
        "assets/images/pizza.jpg",
    ),
    (
        "Pasta Alfredo",
        Category::MainCourse,
        280.0,
        "Creamy fettuccine pasta with parmesan cheese",
        "assets/images/pasta.jpg",
    ),
    (
        "Cake",
        Category::Desserts,
        80.0,
        "Soft milk dumplings soaked in rose-flavored syrup",
        "assets/images/gulab-jamun.jpg",
    ),
    (
        "Chocolate Brownie",
        Category::Desserts,
        120.0,
        "Rich chocolate brownie with vanilla ice cream",
        "assets/images/chocolate-brownie.jpg",
    ),
    (
        "Mango Lassi",
        Category::Beverages,
        100.0,
        "Traditional yogurt-based mango smoothie",
        "assets/images/mango-lassi.jpg",
    ),
    (
        "Cold Coffee",
        Category::Beverages,
        120.0,
        "Chilled roasted coffee with milk and ice cream",
        "assets/images/cold-coffee.jpg",
    ),
];

pub fn default_menu() -> Vec<MenuItem> {
    DEFAULT_MENU
        .iter()
        .zip(1u64..)
        .map(|(&(name, category, price, description, image), id)| MenuItem {
            id: MenuItemId(id),
            name: name.to_string(),
            category,
            price,
            description: description.to_string(),
            image: image.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_menu_shape() {
        let menu = default_menu();
        assert_eq!(menu.len(), 10);
        assert_eq!(menu[2].name, "Butter Chicken");
        assert_eq!(menu[2].price, 350.0);

        let ids: Vec<u64> = menu.iter().map(|item| item.id.0).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());

        let categories: HashSet<_> = menu.iter().map(|item| item.category).collect();
        assert_eq!(categories.len(), 4);
    }
}
