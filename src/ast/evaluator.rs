use crate::ast::ASTNode;

/// Reduces a syntax tree to its numeric value.
///
/// Evaluation cannot fail: division follows IEEE-754, so a zero
/// denominator produces an infinity or NaN.
pub fn evaluate(ast: &ASTNode) -> f64 {
    match ast {
        ASTNode::Number(value) => *value,
        ASTNode::UnaryOperation { operator, operand } => operator.apply(evaluate(operand)),
        ASTNode::BinaryOperation {
            left,
            operator,
            right,
        } => {
            let left_value = evaluate(left);
            let right_value = evaluate(right);
            operator.apply(left_value, right_value)
        }
        ASTNode::Group(inner) => evaluate(inner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{parse, tokenize, Operator, UnaryOperator};

    fn eval_str(input: &str) -> f64 {
        evaluate(&parse(&tokenize(input).unwrap()).unwrap())
    }

    #[test]
    fn test_direct_ast_binary_operation() {
        let ast = ASTNode::binary(ASTNode::Number(50.0), Operator::Add, ASTNode::Number(20.0));
        assert_eq!(evaluate(&ast), 70.0);
    }

    #[test]
    fn test_direct_ast_unary_operation() {
        let ast = ASTNode::unary(
            UnaryOperator::Minus,
            ASTNode::group(ASTNode::unary(UnaryOperator::Plus, ASTNode::Number(4.0))),
        );
        assert_eq!(evaluate(&ast), -4.0);
    }

    #[test]
    fn test_simple_binary_expression() {
        assert_eq!(eval_str("100 + 50"), 150.0);
        assert_eq!(eval_str("100 - 50"), 50.0);
        assert_eq!(eval_str("100 * 50"), 5000.0);
        assert_eq!(eval_str("100 / 50"), 2.0);
    }

    #[test]
    fn test_precedence_and_associativity() {
        assert_eq!(eval_str("2+3*4"), 14.0);
        assert_eq!(eval_str("2-3-4"), -5.0);
        assert_eq!(eval_str("(2+3)*4"), 20.0);
        assert_eq!(eval_str("16/4/2"), 2.0);
    }

    #[test]
    fn test_unary_and_nested_groups() {
        assert_eq!(eval_str("(-2 +3)*5 /2"), 2.5);
        assert_eq!(eval_str("2 + 3* ((4 + -5))"), -1.0);
        assert_eq!(eval_str("--2"), 2.0);
        assert_eq!(eval_str("+-2"), -2.0);
    }

    #[test]
    fn test_decimal_operands() {
        assert_eq!(eval_str("1.5 * 4"), 6.0);
        assert_eq!(eval_str("0.25 + 0.25"), 0.5);
    }

    #[test]
    fn test_edge_case_division_by_zero() {
        assert_eq!(eval_str("1/0"), f64::INFINITY);
        assert_eq!(eval_str("-1/0"), f64::NEG_INFINITY);
        assert!(eval_str("0/0").is_nan());
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let input = "2 * (23/(3*3))- 23 * (2*3)";
        assert_eq!(eval_str(input), eval_str(input));
        assert_eq!(eval_str(input), 2.0 * (23.0 / (3.0 * 3.0)) - 23.0 * (2.0 * 3.0));
    }
}
