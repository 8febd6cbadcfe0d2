pub mod ast;
pub mod cache;
pub mod calculator;
pub mod config;
pub mod error;
pub mod history;

pub use calculator::{CacheStats, Calculator};
pub use config::CalculatorConfig;
pub use error::{EvaluationError, LexError, ParseError};

use ast::{evaluate, parse_with_limit, tokenize, DEFAULT_MAX_DEPTH};
use log::debug;

/// Runs the lexer, parser and evaluator on `expression` without any caching.
pub fn evaluate_expression(expression: &str) -> Result<f64, EvaluationError> {
    evaluate_expression_with_limit(expression, DEFAULT_MAX_DEPTH)
}

/// Uncached pipeline rejecting syntax trees deeper than `max_depth`.
pub fn evaluate_expression_with_limit(
    expression: &str,
    max_depth: usize,
) -> Result<f64, EvaluationError> {
    let tokens = tokenize(expression)?;
    let ast = parse_with_limit(&tokens, max_depth)?;
    debug!("Evaluating AST of depth {}", ast.depth());
    Ok(evaluate(&ast))
}
