use std::fmt;

mod evaluator;
mod lexer;
mod parser;

pub use evaluator::evaluate;
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::{parse, parse_with_limit, DEFAULT_MAX_DEPTH};

/// Syntax tree produced by [`parse`]. Each node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum ASTNode {
    Number(f64),
    UnaryOperation {
        operator: UnaryOperator,
        operand: Box<ASTNode>,
    },
    BinaryOperation {
        left: Box<ASTNode>,
        operator: Operator,
        right: Box<ASTNode>,
    },
    Group(Box<ASTNode>),
}

impl ASTNode {
    pub fn unary(operator: UnaryOperator, operand: ASTNode) -> Self {
        ASTNode::UnaryOperation {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: ASTNode, operator: Operator, right: ASTNode) -> Self {
        ASTNode::BinaryOperation {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn group(inner: ASTNode) -> Self {
        ASTNode::Group(Box::new(inner))
    }

    /// Nesting depth of the tree; a lone literal has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            ASTNode::Number(_) => 1,
            ASTNode::UnaryOperation { operand, .. } => 1 + operand.depth(),
            ASTNode::BinaryOperation { left, right, .. } => 1 + left.depth().max(right.depth()),
            ASTNode::Group(inner) => 1 + inner.depth(),
        }
    }
}

impl fmt::Display for ASTNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ASTNode::Number(value) => write!(f, "{}", value),
            ASTNode::UnaryOperation { operator, operand } => write!(f, "{}{}", operator, operand),
            ASTNode::BinaryOperation {
                left,
                operator,
                right,
            } => write!(f, "[{} {} {}]", left, operator, right),
            ASTNode::Group(inner) => write!(f, "({})", inner),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Applies the operator with IEEE-754 semantics; dividing by zero yields
    /// an infinity or NaN instead of failing.
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Plus,
    Minus,
}

impl UnaryOperator {
    pub fn apply(&self, operand: f64) -> f64 {
        match self {
            UnaryOperator::Plus => operand,
            UnaryOperator::Minus => -operand,
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOperator::Plus => write!(f, "+"),
            UnaryOperator::Minus => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero_follows_ieee() {
        assert_eq!(Operator::Divide.apply(1.0, 0.0), f64::INFINITY);
        assert_eq!(Operator::Divide.apply(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_display_and_depth() {
        let ast = ASTNode::binary(
            ASTNode::group(ASTNode::binary(
                ASTNode::unary(UnaryOperator::Minus, ASTNode::Number(2.0)),
                Operator::Add,
                ASTNode::Number(3.0),
            )),
            Operator::Multiply,
            ASTNode::Number(5.0),
        );
        assert_eq!(ast.to_string(), "[([-2 + 3]) * 5]");
        assert_eq!(ast.depth(), 5);
    }
}
