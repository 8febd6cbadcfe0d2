use crate::cache::ExpressionCache;
use crate::config::CalculatorConfig;
use crate::error::EvaluationError;
use log::debug;
use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};

/// Cache counters. Every miss is one run of the lexer, parser and evaluator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Entry point for evaluating expressions with memoized results.
///
/// All methods take `&self`; share one calculator between threads with `Arc`.
#[derive(Debug)]
pub struct Calculator {
    cache: ExpressionCache,
    max_depth: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            cache: ExpressionCache::new(config.cache_capacity, config.cache_ttl),
            max_depth: config.max_depth,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Evaluates `expression`, reusing a cached result for the exact same text.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` with the value, possibly infinite or NaN after a division by zero.
    /// * `Err(EvaluationError)` if the text fails to tokenize or parse, or nests deeper
    ///   than the configured `max_depth`. Failures are not cached.
    pub fn evaluate_expression(&self, expression: &str) -> Result<f64, EvaluationError> {
        if let Some(result) = self.cache.lookup(expression) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("Cached result for {:?}: {}", expression, result);
            return Ok(result);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let result = crate::evaluate_expression_with_limit(expression, self.max_depth)?;
        self.cache.insert(expression, result);
        Ok(result)
    }

    /// Evaluates every expression in parallel. Results keep the input order.
    pub fn evaluate_batch(&self, expressions: &[&str]) -> Vec<Result<f64, EvaluationError>> {
        expressions
            .par_iter()
            .map(|expression| self.evaluate_expression(expression))
            .collect()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}
