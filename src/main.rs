use restaurant_ordering::admin::MenuItemForm;
use restaurant_ordering::checkout::CheckoutForm;
use restaurant_ordering::config::AppConfig;
use restaurant_ordering::lifecycle::{AdminConsole, Storefront};
use restaurant_ordering::model::{Category, CategoryFilter};
use store_actor::tracing::setup_tracing;
use store_actor::MemoryStore;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = AppConfig::from_env()?;
    let store = config.open_store().await?;
    info!(?config, "Starting restaurant ordering demo");

    // Customer session
    let mut shop = Storefront::start(&config, store.clone()).await?;

    let span = tracing::info_span!("customer");
    let order = async {
        let menu = shop.load_menu(CategoryFilter::All).await?;
        info!(items = menu.len(), "Menu loaded");

        let mains = shop.load_menu(Category::MainCourse.into()).await?;
        for item in mains.iter().take(2) {
            shop.add_to_cart(item.id).await?;
        }
        if let Some(first) = mains.first() {
            shop.increase(first.id).await?;
        }
        let total = shop.begin_checkout().await?;
        info!(badge = shop.badge(), total, "Cart ready");

        let form = CheckoutForm {
            name: "Demo Customer".to_string(),
            email: "demo@example.com".to_string(),
            phone: "9876543210".to_string(),
            address: "1 Demo Street".to_string(),
            payment_method: "cash".to_string(),
        };
        let id = shop.place_order(&form).await?;
        Ok::<_, Box<dyn std::error::Error>>(id)
    }
    .instrument(span)
    .await;

    match order {
        Ok(order_id) => info!(%order_id, "Order processed successfully"),
        Err(e) => error!(error = %e, "Order processing failed"),
    }
    for notice in shop.notices() {
        info!(level = %notice.level, message = %notice.message, "Storefront notice");
    }
    shop.shutdown().await?;

    // Admin session
    let mut admin = AdminConsole::start(&config, store, MemoryStore::new().shared()).await?;

    let span = tracing::info_span!("admin");
    async {
        if admin.login("admin", "wrong").await.is_err() {
            info!("Rejected bad password as expected");
        }
        admin.login("admin", "admin123").await?;

        let stats = admin.dashboard_stats().await?;
        info!(?stats, "Overview");

        let id = admin
            .add_menu_item(&MenuItemForm {
                name: "Masala Chai".to_string(),
                category: "beverages".to_string(),
                price: "60".to_string(),
                description: "Spiced milk tea".to_string(),
                image: "assets/images/masala-chai.jpg".to_string(),
            })
            .await?;
        admin.delete_menu_item(id, &|_: &str| true).await?;

        for row in admin.order_rows().await? {
            info!(order_id = %row.id, customer = %row.customer, items = %row.items, total = row.total, "Order");
        }
        admin.logout().await?;
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    admin.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
