//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the subscriber used by the binaries. Actors and clients log
//! through `tracing` with structured fields (`entity_type`, `id`, `size`), so the compact
//! format hides the module path (`with_target(false)`).
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle: Actor started, Created, Deleted, Shutdown
//! RUST_LOG=debug cargo run    # plus every request with its payload
//! ```

/// Initializes the global subscriber, filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
