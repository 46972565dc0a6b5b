//! # Restaurant Ordering
//!
//! The data-flow core of a restaurant ordering site: a customer storefront (menu, cart,
//! checkout) and an admin dashboard (menu editor, order viewer), persisted as JSON blobs
//! in a key/value backing store.
//!
//! ## Core Components
//!
//! - **[model]**: Pure data structures ([`MenuItem`](model::MenuItem), [`CartLine`](model::CartLine),
//!   [`Order`](model::Order)) with their wire formats.
//! - **[catalog_actor], [cart_actor], [order_actor]**: `ActorEntity` implementations, one
//!   persisted collection each (`menuItems`, `cart`, `orders`).
//! - **[clients]**: Type-safe wrappers (e.g. [`CartClient`](clients::CartClient)) that hide the
//!   message passing.
//! - **[checkout]**, **[admin]**: form validation, sessions, table rows.
//! - **[lifecycle]**: the [`Storefront`](lifecycle::Storefront) and
//!   [`AdminConsole`](lifecycle::AdminConsole) controllers.
//! - **[config]**, **[notice]**: environment configuration and transient messages.
//!
//! ## Testing
//!
//! See [`store_actor::mock`] for utilities to test clients without spawning actors, and
//! the `tests/` directory for whole-controller scenarios over a `MemoryStore`.

pub mod admin;
pub mod cart_actor;
pub mod catalog_actor;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod notice;
pub mod order_actor;
