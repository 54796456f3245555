//! Screen transitions requested by the core.

use std::fmt;
use std::sync::Mutex;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Register,
    Login,
    MainApp,
    HomeScreen,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Register => "Register",
            Screen::Login => "Login",
            Screen::MainApp => "MainApp",
            Screen::HomeScreen => "HomeScreen",
        };
        f.write_str(name)
    }
}

/// Moves the UI to another screen. Rendering is not the core's concern.
pub trait Navigator: Send + Sync {
    fn navigate(&self, screen: Screen);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, screen: Screen) {
        info!(%screen, "Navigate");
    }
}

/// Remembers every requested screen in order.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<Screen>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<Screen> {
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, screen: Screen) {
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(screen);
    }
}
