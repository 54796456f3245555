//! Plain data: the menu, order sessions, stored users and receipts.
//!
//! [`OrderSession`] implements [`ActorEntity`](crate::framework::ActorEntity) in
//! [`crate::session_actor`]; everything else here is passive data.

pub mod menu;
pub mod receipt;
pub mod session;
pub mod user;

pub use menu::*;
pub use receipt::*;
pub use session::*;
pub use user::*;
