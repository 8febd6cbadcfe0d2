use crate::error::LexError;
use log::debug;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    NumericLiteral,
    Plus,
    Minus,
    Multiply,
    Divide,
    LeftParen,
    RightParen,
    EndOfInput,
}

/// A lexical token borrowing its lexeme from the tokenized input.
///
/// Every kind except [`TokenKind::EndOfInput`] carries the exact matched text.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    kind: TokenKind,
    lexeme: Option<&'a str>,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, lexeme: &'a str) -> Self {
        debug_assert_ne!(kind, TokenKind::EndOfInput);
        Self {
            kind,
            lexeme: Some(lexeme),
        }
    }

    pub fn end() -> Self {
        Self {
            kind: TokenKind::EndOfInput,
            lexeme: None,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> Option<&'a str> {
        self.lexeme
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lexeme {
            Some(lexeme) => write!(f, "{}", lexeme),
            None => write!(f, "<EOF>"),
        }
    }
}

#[derive(Debug, Copy, Clone)]
enum Pattern {
    /// A digit run, optionally followed by `.` and a second digit run.
    Number,
    Symbol(char),
    Whitespace,
}

impl Pattern {
    /// Length in bytes of the match anchored at the start of `input`, zero if none.
    fn match_len(&self, input: &str) -> usize {
        match self {
            Pattern::Number => {
                let integral = digit_run(input);
                if integral == 0 {
                    return 0;
                }
                let rest = &input[integral..];
                match rest.strip_prefix('.') {
                    Some(fraction) if digit_run(fraction) > 0 => {
                        integral + 1 + digit_run(fraction)
                    }
                    _ => integral,
                }
            }
            Pattern::Symbol(symbol) => {
                if input.starts_with(*symbol) {
                    symbol.len_utf8()
                } else {
                    0
                }
            }
            Pattern::Whitespace => input
                .chars()
                .take_while(|c| c.is_whitespace())
                .map(char::len_utf8)
                .sum(),
        }
    }
}

fn digit_run(input: &str) -> usize {
    input.bytes().take_while(u8::is_ascii_digit).count()
}

/// Patterns in priority order. `None` marks whitespace, which is skipped.
const MATCHERS: [(Pattern, Option<TokenKind>); 8] = [
    (Pattern::Number, Some(TokenKind::NumericLiteral)),
    (Pattern::Symbol('+'), Some(TokenKind::Plus)),
    (Pattern::Symbol('-'), Some(TokenKind::Minus)),
    (Pattern::Symbol('*'), Some(TokenKind::Multiply)),
    (Pattern::Symbol('/'), Some(TokenKind::Divide)),
    (Pattern::Symbol('('), Some(TokenKind::LeftParen)),
    (Pattern::Symbol(')'), Some(TokenKind::RightParen)),
    (Pattern::Whitespace, None),
];

/// Splits `input` into tokens, dropping whitespace and appending a single
/// [`TokenKind::EndOfInput`] sentinel.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, LexError> {
    debug!("Tokenizing expression: {:?}", input);
    let mut tokens = Vec::new();
    let mut position = 0;

    while let Some(character) = input[position..].chars().next() {
        let rest = &input[position..];
        let (len, kind) = MATCHERS
            .iter()
            .find_map(|(pattern, kind)| match pattern.match_len(rest) {
                0 => None,
                len => Some((len, *kind)),
            })
            .ok_or(LexError::UnexpectedCharacter {
                character,
                position,
            })?;

        if let Some(kind) = kind {
            tokens.push(Token::new(kind, &rest[..len]));
        }
        position += len;
    }

    tokens.push(Token::end());
    debug!("Tokens: {:?}", tokens);
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .unwrap()
            .iter()
            .map(|token| token.kind())
            .collect()
    }

    #[test]
    fn test_single_digit() {
        let tokens = tokenize("2").unwrap();
        assert_eq!(
            tokens,
            vec![Token::new(TokenKind::NumericLiteral, "2"), Token::end()]
        );
    }

    #[test]
    fn test_digit_run_is_one_literal() {
        let tokens = tokenize("23").unwrap();
        assert_eq!(
            tokens,
            vec![Token::new(TokenKind::NumericLiteral, "23"), Token::end()]
        );
    }

    #[test]
    fn test_decimal_literal() {
        let tokens = tokenize("2.5").unwrap();
        assert_eq!(
            tokens,
            vec![Token::new(TokenKind::NumericLiteral, "2.5"), Token::end()]
        );
    }

    #[test]
    fn test_operators_and_parentheses() {
        for (input, kind) in [
            ("+", TokenKind::Plus),
            ("-", TokenKind::Minus),
            ("*", TokenKind::Multiply),
            ("/", TokenKind::Divide),
            ("(", TokenKind::LeftParen),
            (")", TokenKind::RightParen),
        ] {
            assert_eq!(
                tokenize(input).unwrap(),
                vec![Token::new(kind, input), Token::end()]
            );
        }
    }

    #[test]
    fn test_whitespace_is_dropped() {
        assert_eq!(tokenize("  2 + 3  ").unwrap(), tokenize("2+3").unwrap());
        assert_eq!(kinds("\t2\n*\r3"), kinds("2*3"));
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(tokenize("").unwrap(), vec![Token::end()]);
        assert_eq!(tokenize("   ").unwrap(), vec![Token::end()]);
    }

    #[test]
    fn test_lexemes_reproduce_input_without_whitespace() {
        let input = " (12 + 3.25)* -4 / 7 ";
        let joined: String = tokenize(input)
            .unwrap()
            .iter()
            .filter_map(|token| token.lexeme())
            .collect();
        let expected: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(joined, expected);
    }

    #[test]
    fn test_full_expression() {
        assert_eq!(
            kinds("2 * (23/(3*3))- 23"),
            vec![
                TokenKind::NumericLiteral,
                TokenKind::Multiply,
                TokenKind::LeftParen,
                TokenKind::NumericLiteral,
                TokenKind::Divide,
                TokenKind::LeftParen,
                TokenKind::NumericLiteral,
                TokenKind::Multiply,
                TokenKind::NumericLiteral,
                TokenKind::RightParen,
                TokenKind::RightParen,
                TokenKind::Minus,
                TokenKind::NumericLiteral,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_unexpected_character() {
        assert_eq!(
            tokenize("2#3"),
            Err(LexError::UnexpectedCharacter {
                character: '#',
                position: 1,
            })
        );
    }

    #[test]
    fn test_unexpected_character_after_whitespace() {
        assert_eq!(
            tokenize("2 + x"),
            Err(LexError::UnexpectedCharacter {
                character: 'x',
                position: 4,
            })
        );
    }

    #[test]
    fn test_dangling_decimal_point() {
        assert_eq!(
            tokenize("2."),
            Err(LexError::UnexpectedCharacter {
                character: '.',
                position: 1,
            })
        );
        assert!(tokenize(".5").is_err());
    }

    #[test]
    fn test_scientific_notation_is_rejected() {
        assert_eq!(
            tokenize("1e5"),
            Err(LexError::UnexpectedCharacter {
                character: 'e',
                position: 1,
            })
        );
    }

    #[test]
    fn test_tokenize_is_deterministic() {
        let input = "(-2 +3)*5 /2";
        assert_eq!(tokenize(input).unwrap(), tokenize(input).unwrap());
    }
}
