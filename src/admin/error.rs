use super::MenuFormError;
use crate::catalog_actor::CatalogError;
use crate::order_actor::OrderError;
use store_actor::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Invalid username or password!")]
    InvalidCredentials,

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Please correct the menu item form ({} problems)", .0.len())]
    Invalid(Vec<MenuFormError>),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error("Session storage error: {0}")]
    Session(#[from] StorageError),
}
