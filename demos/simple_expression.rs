use calculus_rs::Calculator;

fn main() {
    pretty_env_logger::init();

    let calculator = Calculator::default();
    let expressions = [
        "2+3*4",
        "(2+3)*4",
        "(-2 +3)*5 /2",
        "2 * (23/(3*3))- 23 * (2*3)",
        "1/0",
        "2+",
        "2#3",
    ];

    for expression in expressions {
        match calculator.evaluate_expression(expression) {
            Ok(result) => println!("{} = {}", expression, result),
            Err(err) => println!("{} -> error: {}", expression, err),
        }
    }

    // Same text again, served from the cache.
    let result = calculator.evaluate_expression("2+3*4").unwrap();
    println!("2+3*4 = {} ({:?})", result, calculator.stats());
}
