//! Environment-driven settings.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `CAFE_CHANNEL_BUFFER` | 32 | session actor queue capacity |
//! | `CAFE_QR_SIZE` | 200 | QR edge length in pixels |
//! | `CAFE_STORE_PATH` | unset | JSON file backing the store; memory if unset |
//! | `CAFE_EMPTY_ORDERS` | reject | `reject` or `allow` |
//! | `CAFE_ORDER_IDS` | random | `random` or `sequential` |

use crate::model::EmptyOrderPolicy;
use crate::receipt::DEFAULT_QR_SIZE;
use crate::session_actor::OrderIdScheme;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub channel_buffer: usize,
    pub qr_size: u32,
    pub store_path: Option<PathBuf>,
    pub empty_orders: EmptyOrderPolicy,
    pub order_ids: OrderIdScheme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            qr_size: DEFAULT_QR_SIZE,
            store_path: None,
            empty_orders: EmptyOrderPolicy::Reject,
            order_ids: OrderIdScheme::Random,
        }
    }
}

impl AppConfig {
    /// Reads the process environment. Never fails; bad values fall back to defaults.
    pub fn from_env() -> Self {
        Self::load(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over explicit pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let pairs: Vec<(&str, &str)> = pairs.into_iter().collect();
        Self::load(|key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        })
    }

    fn load(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let requested = try_load(&lookup, "CAFE_CHANNEL_BUFFER", defaults.channel_buffer);
        let channel_buffer = match requested {
            0 => {
                warn!("CAFE_CHANNEL_BUFFER must be positive, using default");
                defaults.channel_buffer
            }
            n => n,
        };
        Self {
            channel_buffer,
            qr_size: try_load(&lookup, "CAFE_QR_SIZE", defaults.qr_size),
            store_path: lookup("CAFE_STORE_PATH")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            empty_orders: try_load(&lookup, "CAFE_EMPTY_ORDERS", defaults.empty_orders),
            order_ids: try_load(&lookup, "CAFE_ORDER_IDS", defaults.order_ids),
        }
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
    T::Err: Display,
{
    match lookup(key) {
        None => {
            info!("{key} not set, using default: {default:?}");
            default
        }
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value: {e}, using default: {default:?}");
            default
        }),
    }
}
