//! # Cafe Order
//!
//! > **The order-session core of a small cafe storefront.**
//!
//! A user registers, logs in, toggles items from a fixed menu, places the order
//! and gets back a summary plus a QR-encodable receipt. Screens, QR drawing and
//! credential storage sit behind narrow traits; this crate holds the state
//! machine and the receipt encoding.
//!
//! ## Architecture Notes
//!
//! ### 1. One actor owns every session
//! Sessions are [`OrderSession`](model::OrderSession) entities inside a single
//! [`ResourceActor`](framework::ResourceActor). Requests are handled one at a time,
//! so each toggle, place or reset is atomic without locks.
//!
//! ### 2. Typed errors per module
//! Each layer has its own `thiserror` enum. The actor boxes entity errors into
//! [`FrameworkError`](framework::FrameworkError) and
//! [`SessionClient`](clients::SessionClient) downcasts them back into
//! [`SessionError`](session_actor::SessionError).
//!
//! ### 3. Placement never waits on storage
//! `PlaceOrder` updates the session first and spawns the receipt write. A failed
//! write is logged and reported through [`PersistHandle`](receipt::PersistHandle),
//! never rolled back.
//!
//! ### 4. Late-bound context
//! Catalog, receipt writer and order id source reach the actor through
//! [`SessionContext`](session_actor::SessionContext) at `run`, not at construction.
//!
//! ## Module Tour
//!
//! - [`framework`]: generic actor, client and mocks
//! - [`model`]: menu, sessions, users, receipts
//! - [`session_actor`]: the order state machine as actor actions
//! - [`clients`]: typed [`SessionClient`](clients::SessionClient)
//! - [`receipt`]: encoding, background persistence, summary, QR hand-off
//! - [`storage`]: key-value persistence
//! - [`auth`]: registration and login
//! - [`navigation`]: screen transitions
//! - [`lifecycle`]: [`CafeSystem`](lifecycle::CafeSystem), config and logging
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod auth;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod navigation;
pub mod receipt;
pub mod session_actor;
pub mod storage;
