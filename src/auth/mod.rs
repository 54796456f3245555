//! Registration and login against the locally stored account.

pub mod credentials;
pub mod error;

pub use credentials::{CredentialVerifier, StoredCredentials};
pub use error::AuthError;
