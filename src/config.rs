use crate::ast::DEFAULT_MAX_DEPTH;
use log::warn;
use std::num::NonZeroUsize;
use std::time::Duration;

pub const DEFAULT_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

pub const CACHE_CAPACITY_VAR: &str = "CALCULUS_CACHE_CAPACITY";
pub const CACHE_TTL_VAR: &str = "CALCULUS_CACHE_TTL_SECS";
pub const MAX_DEPTH_VAR: &str = "CALCULUS_MAX_DEPTH";

/// Settings for a [`Calculator`](crate::Calculator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Maximum number of cached results before the least recently used is evicted.
    pub cache_capacity: NonZeroUsize,
    /// Lifetime of a cached result, measured from insertion.
    pub cache_ttl: Duration,
    /// Deepest syntax tree accepted; deeper input fails instead of exhausting the stack.
    pub max_depth: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            cache_ttl: DEFAULT_CACHE_TTL,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CalculatorConfig {
    pub fn with_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Reads `CALCULUS_CACHE_CAPACITY`, `CALCULUS_CACHE_TTL_SECS` and
    /// `CALCULUS_MAX_DEPTH` from the process environment, falling back to the
    /// defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Invalid values are
    /// logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(CACHE_CAPACITY_VAR) {
            match raw.trim().parse::<NonZeroUsize>() {
                Ok(capacity) => config.cache_capacity = capacity,
                Err(e) => warn!("Ignoring {}={:?}: {}", CACHE_CAPACITY_VAR, raw, e),
            }
        }

        if let Some(raw) = lookup(CACHE_TTL_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => config.cache_ttl = Duration::from_secs(secs),
                Err(e) => warn!("Ignoring {}={:?}: {}", CACHE_TTL_VAR, raw, e),
            }
        }

        if let Some(raw) = lookup(MAX_DEPTH_VAR) {
            match raw.trim().parse::<NonZeroUsize>() {
                Ok(max_depth) => config.max_depth = max_depth.get(),
                Err(e) => warn!("Ignoring {}={:?}: {}", MAX_DEPTH_VAR, raw, e),
            }
        }

        config
    }
}
