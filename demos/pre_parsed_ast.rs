use calculus_rs::ast::{evaluate, parse, tokenize};

fn main() {
    pretty_env_logger::init();

    let expression = "2 + 3* ((4 + -5))";
    let tokens = tokenize(expression).expect("Failed to tokenize");
    let ast = parse(&tokens).expect("Failed to parse");

    println!("Tokens: {:?}", tokens);
    println!("AST: {}", ast);
    println!("Result: {}", evaluate(&ast));
}
