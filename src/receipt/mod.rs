//! # Receipt Encoding
//!
//! Turns a placed [`OrderSession`](crate::model::OrderSession) into its canonical
//! [`ReceiptPayload`](crate::model::ReceiptPayload), persists it under
//! [`RECEIPT_KEY`](crate::storage::RECEIPT_KEY) and hands the same string to a
//! [`QrRenderer`].
//!
//! Persistence happens in the background: see [`ReceiptWriter::persist`] and
//! [`PersistHandle`].

pub mod display;
pub mod encoder;
pub mod error;
pub mod summary;
pub mod writer;

pub use display::{QrRenderer, RecordingQrRenderer, TracingQrRenderer, DEFAULT_QR_SIZE};
pub use encoder::{build_receipt, decode, encode, encode_for_display};
pub use error::ReceiptError;
pub use summary::OrderSummary;
pub use writer::{PersistHandle, ReceiptWriter};
