//! Order number generation.

use crate::model::{OrderId, ORDER_ID_LIMIT};
use rand::Rng;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};

/// Source of order numbers. Results must lie in `[0, ORDER_ID_LIMIT)`.
pub trait OrderIdGenerator: Send + Sync {
    fn next_id(&self) -> OrderId;
}

/// Uniform random ids. Collisions are possible and not checked.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomOrderIds;

impl OrderIdGenerator for RandomOrderIds {
    fn next_id(&self) -> OrderId {
        OrderId(rand::thread_rng().gen_range(0..ORDER_ID_LIMIT))
    }
}

/// Counts upward and wraps at the limit, so ids are unique until the
/// first wrap.
#[derive(Debug, Default)]
pub struct SequentialOrderIds {
    next: AtomicU32,
}

impl SequentialOrderIds {
    pub fn starting_at(first: u32) -> Self {
        Self {
            next: AtomicU32::new(first % ORDER_ID_LIMIT),
        }
    }
}

impl OrderIdGenerator for SequentialOrderIds {
    fn next_id(&self) -> OrderId {
        let raw = self.next.fetch_add(1, Ordering::SeqCst);
        OrderId(raw % ORDER_ID_LIMIT)
    }
}

/// Which generator [`AppConfig`](crate::lifecycle::AppConfig) selects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderIdScheme {
    #[default]
    Random,
    Sequential,
}

impl OrderIdScheme {
    pub fn generator(self) -> std::sync::Arc<dyn OrderIdGenerator> {
        match self {
            OrderIdScheme::Random => std::sync::Arc::new(RandomOrderIds),
            OrderIdScheme::Sequential => std::sync::Arc::new(SequentialOrderIds::default()),
        }
    }
}

impl FromStr for OrderIdScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "sequential" => Ok(Self::Sequential),
            other => Err(format!("expected `random` or `sequential`, got `{other}`")),
        }
    }
}
