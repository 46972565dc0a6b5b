//! Custom actions for the cart actor.
//!
//! Handled by [`impl ActorEntity for CartLine`](crate::model::CartLine#impl-ActorEntity-for-CartLine).

/// Quantity changes on one cart line.
///
/// Both actions return the line's quantity after the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    /// Adds one.
    Increase,
    /// Removes one, but never goes below 1. Use a delete to drop the line.
    Decrease,
}
