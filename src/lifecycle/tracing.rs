//! # Logging
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run     # payloads, store reads and writes
//! ```
//!
//! With `info`, one order looks roughly like:
//!
//! ```text
//! INFO Actor started entity_type="OrderSession"
//! INFO login: Login accepted username="alice"
//! INFO Created entity_type="OrderSession" id=session_1 size=1
//! INFO Order placed session_id=session_1 order_id=48213 total=6.50
//! INFO Rendering receipt QR code size=200 bytes=75
//! ```
//!
//! Actor logs carry an `entity_type` field instead of a module path, so the
//! target is hidden.

/// Installs the global subscriber. Call once, before the first log line.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
