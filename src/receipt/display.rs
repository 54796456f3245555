//! Hand-off of the canonical receipt string to a QR code renderer.

use std::sync::Mutex;
use tracing::info;

/// Edge length in pixels used when none is configured.
pub const DEFAULT_QR_SIZE: u32 = 200;

/// Draws a QR symbol for `data`. Symbol generation itself lives outside this crate.
pub trait QrRenderer: Send + Sync {
    fn render(&self, data: &str, size: u32);
}

/// Logs the hand-off instead of drawing anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingQrRenderer;

impl QrRenderer for TracingQrRenderer {
    fn render(&self, data: &str, size: u32) {
        info!(size, bytes = data.len(), "Rendering receipt QR code");
    }
}

/// Keeps every rendered payload. Useful in tests.
#[derive(Debug, Default)]
pub struct RecordingQrRenderer {
    rendered: Mutex<Vec<(String, u32)>>,
}

impl RecordingQrRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rendered(&self) -> Vec<(String, u32)> {
        self.rendered
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl QrRenderer for RecordingQrRenderer {
    fn render(&self, data: &str, size: u32) {
        self.rendered
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((data.to_string(), size));
    }
}
