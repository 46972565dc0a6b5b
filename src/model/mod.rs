//! Pure data structures (DTOs) persisted by the actors, plus the small helpers that
//! compute over them.

pub mod cart;
pub mod menu_item;
pub mod order;

pub use cart::*;
pub use menu_item::*;
pub use order::*;
