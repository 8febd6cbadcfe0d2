use crate::ast::{ASTNode, Operator, Token, TokenKind, UnaryOperator};
use crate::error::ParseError;
use log::debug;

/// Deepest syntax tree [`parse`] accepts before giving up.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parses a token sequence into a syntax tree, rejecting trees deeper than
/// [`DEFAULT_MAX_DEPTH`].
///
/// Grammar, lowest to highest binding:
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/') factor)*
/// factor     := ('+' | '-') factor | NUMBER | '(' expression ')'
/// ```
///
/// The whole sequence must be consumed; anything left before the
/// end-of-input sentinel is reported as [`ParseError::TrailingToken`].
pub fn parse(tokens: &[Token<'_>]) -> Result<ASTNode, ParseError> {
    parse_with_limit(tokens, DEFAULT_MAX_DEPTH)
}

/// Like [`parse`], with an explicit bound on the tree depth (a lone literal
/// has depth 1). Exceeding it yields [`ParseError::NestingTooDeep`], which
/// also keeps the parser's own recursion bounded.
pub fn parse_with_limit(tokens: &[Token<'_>], max_depth: usize) -> Result<ASTNode, ParseError> {
    let mut cursor = TokenCursor::new(tokens, max_depth);
    if cursor.peek().kind() == TokenKind::EndOfInput {
        return Err(ParseError::EmptyExpression);
    }

    let ast = cursor.expression()?.node;

    let next = cursor.peek();
    if next.kind() != TokenKind::EndOfInput {
        return Err(ParseError::TrailingToken {
            token: next.to_string(),
        });
    }

    debug!("Parsed AST: {}", ast);
    Ok(ast)
}

/// A parsed node together with its depth.
struct Subtree {
    node: ASTNode,
    depth: usize,
}

/// Read position into an immutable token slice.
struct TokenCursor<'t, 'a> {
    tokens: &'t [Token<'a>],
    position: usize,
    max_depth: usize,
    /// Open parentheses and unary signs on the current recursion path.
    nesting: usize,
}

impl<'t, 'a> TokenCursor<'t, 'a> {
    fn new(tokens: &'t [Token<'a>], max_depth: usize) -> Self {
        Self {
            tokens,
            position: 0,
            max_depth,
            nesting: 0,
        }
    }

    /// Running off the end of the slice reads as end of input.
    fn peek(&self) -> Token<'a> {
        self.tokens
            .get(self.position)
            .copied()
            .unwrap_or_else(Token::end)
    }

    fn advance(&mut self) -> Token<'a> {
        let token = self.peek();
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    fn too_deep(&self) -> ParseError {
        ParseError::NestingTooDeep {
            limit: self.max_depth,
        }
    }

    fn wrap(&self, node: ASTNode, depth: usize) -> Result<Subtree, ParseError> {
        if depth > self.max_depth {
            return Err(self.too_deep());
        }
        Ok(Subtree { node, depth })
    }

    /// Runs `parse` one nesting level deeper, failing before recursing past the limit.
    fn nested<F>(&mut self, parse: F) -> Result<Subtree, ParseError>
    where
        F: FnOnce(&mut Self) -> Result<Subtree, ParseError>,
    {
        if self.nesting >= self.max_depth {
            return Err(self.too_deep());
        }
        self.nesting += 1;
        let result = parse(self);
        self.nesting -= 1;
        result
    }

    fn expression(&mut self) -> Result<Subtree, ParseError> {
        let mut left = self.term()?;

        loop {
            let operator = match self.peek().kind() {
                TokenKind::Plus => Operator::Add,
                TokenKind::Minus => Operator::Subtract,
                _ => break,
            };
            self.advance();

            let right = self.term()?;
            let depth = 1 + left.depth.max(right.depth);
            left = self.wrap(ASTNode::binary(left.node, operator, right.node), depth)?;
        }

        Ok(left)
    }

    fn term(&mut self) -> Result<Subtree, ParseError> {
        let mut left = self.factor()?;

        loop {
            let operator = match self.peek().kind() {
                TokenKind::Multiply => Operator::Multiply,
                TokenKind::Divide => Operator::Divide,
                _ => break,
            };
            self.advance();

            let right = self.factor()?;
            let depth = 1 + left.depth.max(right.depth);
            left = self.wrap(ASTNode::binary(left.node, operator, right.node), depth)?;
        }

        Ok(left)
    }

    fn factor(&mut self) -> Result<Subtree, ParseError> {
        let token = self.advance();

        match token.kind() {
            TokenKind::Plus => self.unary(UnaryOperator::Plus),
            TokenKind::Minus => self.unary(UnaryOperator::Minus),
            TokenKind::NumericLiteral => {
                let literal = token.lexeme().unwrap_or_default();
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| ParseError::InvalidNumber {
                        literal: literal.to_string(),
                    })?;
                self.wrap(ASTNode::Number(value), 1)
            }
            TokenKind::LeftParen => {
                let inner = self.nested(Self::expression)?;
                if self.advance().kind() != TokenKind::RightParen {
                    return Err(ParseError::MissingClosingParen);
                }
                self.wrap(ASTNode::group(inner.node), inner.depth + 1)
            }
            TokenKind::EndOfInput => Err(ParseError::UnexpectedEndOfInput),
            TokenKind::Multiply | TokenKind::Divide | TokenKind::RightParen => {
                Err(unexpected(token))
            }
        }
    }

    fn unary(&mut self, operator: UnaryOperator) -> Result<Subtree, ParseError> {
        let operand = self.nested(Self::factor)?;
        self.wrap(ASTNode::unary(operator, operand.node), operand.depth + 1)
    }
}

fn unexpected(token: Token<'_>) -> ParseError {
    ParseError::UnexpectedToken {
        token: token.to_string(),
    }
}
