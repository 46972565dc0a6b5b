use crate::admin::{
    AdminError, AdminView, Confirm, DashboardStats, MenuItemForm, MenuRow, OrderRow, Section,
    SessionManager, DELETE_ITEM_PROMPT,
};
use crate::clients::{CatalogClient, OrderClient};
use crate::config::AppConfig;
use crate::model::MenuItemId;
use crate::notice::{Notice, NoticeBoard, NoticeLevel};
use store_actor::{ActorClient, SharedStore};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{join_all, ShutdownError};

/// The admin page.
///
/// Runs its own catalog and order actors over the shared backing store, so it sees what
/// the storefront persisted, not what the storefront holds in memory. Navigation reloads
/// both collections from storage.
pub struct AdminConsole {
    pub catalog: CatalogClient,
    pub orders: OrderClient,
    session: SessionManager,
    view: AdminView,
    username: Option<String>,
    notices: NoticeBoard,
    handles: Vec<JoinHandle<()>>,
}

impl AdminConsole {
    /// Spawns the actors and restores a previous login from `session_store`.
    pub async fn start(
        config: &AppConfig,
        store: SharedStore,
        session_store: SharedStore,
    ) -> Result<Self, AdminError> {
        let capacity = config.channel_capacity;
        let (catalog_actor, catalog) = crate::catalog_actor::new(capacity, store.clone());
        let (order_actor, orders) = crate::order_actor::new(capacity, store);

        let handles = vec![
            tokio::spawn(catalog_actor.run(())),
            tokio::spawn(order_actor.run(())),
        ];

        let mut console = Self {
            catalog,
            orders,
            session: SessionManager::new(session_store),
            view: AdminView::LoggedOut,
            username: None,
            notices: NoticeBoard::new(config.notice_ttl),
            handles,
        };
        console.check_session().await?;
        Ok(console)
    }

    /// Switches to the dashboard if the session flag is set.
    pub async fn check_session(&mut self) -> Result<AdminView, AdminError> {
        if let Some(session) = self.session.restore().await? {
            self.enter(session.username).await?;
        }
        Ok(self.view)
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), AdminError> {
        match self.session.login(username, password).await {
            Ok(session) => self.enter(session.username).await,
            Err(e @ AdminError::InvalidCredentials) => {
                self.notices.post(NoticeLevel::Danger, e.to_string());
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn logout(&mut self) -> Result<(), AdminError> {
        self.session.logout().await?;
        self.username = None;
        self.view = AdminView::LoggedOut;
        Ok(())
    }

    pub fn view(&self) -> AdminView {
        self.view
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    fn require_login(&self) -> Result<(), AdminError> {
        if self.view.is_logged_in() {
            Ok(())
        } else {
            warn!("Admin operation while logged out");
            Err(AdminError::NotLoggedIn)
        }
    }

    /// Re-reads the menu and the order log, then shows `section`.
    pub async fn navigate(&mut self, section: Section) -> Result<DashboardStats, AdminError> {
        self.require_login()?;
        self.show(section).await?;
        self.dashboard_stats().await
    }

    /// Opens the overview; the user only counts as logged in once it loaded.
    async fn enter(&mut self, username: String) -> Result<(), AdminError> {
        self.show(Section::Overview).await?;
        self.username = Some(username);
        Ok(())
    }

    async fn show(&mut self, section: Section) -> Result<(), AdminError> {
        let menu_items = self.catalog.reload().await?;
        let orders = self.orders.reload().await?;
        debug!(?section, menu_items, orders, "Admin navigation");
        self.view = AdminView::LoggedIn(section);
        Ok(())
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, AdminError> {
        self.require_login()?;
        let menu = self.catalog.list().await?;
        let orders = self.orders.list().await?;
        Ok(DashboardStats::compute(&menu, &orders))
    }

    pub async fn menu_rows(&self) -> Result<Vec<MenuRow>, AdminError> {
        self.require_login()?;
        let menu = self.catalog.list().await?;
        Ok(menu.iter().map(MenuRow::from).collect())
    }

    pub async fn order_rows(&self) -> Result<Vec<OrderRow>, AdminError> {
        self.require_login()?;
        let orders = self.orders.list().await?;
        Ok(orders.iter().map(OrderRow::from).collect())
    }

    pub async fn add_menu_item(&mut self, form: &MenuItemForm) -> Result<MenuItemId, AdminError> {
        self.require_login()?;
        let params = match form.validate() {
            Ok(params) => params,
            Err(errors) => {
                let e = AdminError::Invalid(errors);
                self.notices.post(NoticeLevel::Warning, e.to_string());
                return Err(e);
            }
        };
        let id = self.catalog.add_item(params).await?;
        self.notices.post(NoticeLevel::Success, "Menu item added successfully!");
        Ok(id)
    }

    /// Deletes after a yes from `confirm`. Returns `false` when declined or absent.
    pub async fn delete_menu_item(
        &mut self,
        id: MenuItemId,
        confirm: &impl Confirm,
    ) -> Result<bool, AdminError> {
        self.require_login()?;
        if !confirm.confirm(DELETE_ITEM_PROMPT) {
            debug!(%id, "Delete declined");
            return Ok(false);
        }
        let removed = self.catalog.remove_item(id).await?;
        if removed {
            self.notices.post(NoticeLevel::Success, "Menu item deleted successfully!");
        }
        Ok(removed)
    }

    pub fn notices(&mut self) -> &[Notice] {
        self.notices.active()
    }

    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down admin console...");
        drop(self.catalog);
        drop(self.orders);
        join_all(self.handles).await?;
        info!("Admin console shutdown complete.");
        Ok(())
    }
}
