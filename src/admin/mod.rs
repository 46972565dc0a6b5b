//! # Admin
//!
//! Building blocks of the admin dashboard: the login session, the view state machine,
//! the add-item form, the delete confirmation, and the table rows and aggregates.
//! [`AdminConsole`](crate::lifecycle::AdminConsole) wires them to the catalog and order actors.
//!
//! ```text
//! LoggedOut --login / restored session--> LoggedIn(Overview)
//! LoggedIn(_) --navigate(section)--> LoggedIn(section)
//! LoggedIn(_) --logout--> LoggedOut
//! ```

pub mod confirm;
pub mod error;
pub mod form;
pub mod rows;
pub mod session;
pub mod view;

pub use confirm::*;
pub use error::*;
pub use form::*;
pub use rows::*;
pub use session::*;
pub use view::*;
