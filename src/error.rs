use thiserror::Error;

/// Raised by the lexer when no token pattern matches at the scan position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
}

/// Raised by the parser for a structurally invalid token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty expression")]
    EmptyExpression,
    #[error("Unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("Unexpected token \"{token}\"")]
    UnexpectedToken { token: String },
    #[error("Expected right parenthesis")]
    MissingClosingParen,
    #[error("Unexpected trailing token \"{token}\"")]
    TrailingToken { token: String },
    #[error("Invalid numeric literal \"{literal}\"")]
    InvalidNumber { literal: String },
    #[error("Expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Error surfaced by the calculator for any failed evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl EvaluationError {
    /// Human-readable message, as stored in the evaluation history.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_error_message() {
        let error = LexError::UnexpectedCharacter {
            character: '#',
            position: 1,
        };
        assert_eq!(error.to_string(), "Unexpected character '#' at position 1");
    }

    #[test]
    fn test_evaluation_error_is_transparent() {
        let error: EvaluationError = ParseError::MissingClosingParen.into();
        assert_eq!(error.message(), "Expected right parenthesis");

        let error: EvaluationError = ParseError::UnexpectedToken {
            token: ")".to_string(),
        }
        .into();
        assert_eq!(error.message(), "Unexpected token \")\"");

        let error: EvaluationError = ParseError::NestingTooDeep { limit: 256 }.into();
        assert_eq!(error.message(), "Expression nested deeper than 256 levels");
    }
}
