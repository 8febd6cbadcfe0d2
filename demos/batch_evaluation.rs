use calculus_rs::history::{History, HistorySink};
use calculus_rs::Calculator;

fn main() {
    pretty_env_logger::init();

    let expressions = ["10 / 4", "(10 + 20) * 3 / (4 - 1) + 5", "--7", "(1", "10 / 4"];

    let calculator = Calculator::default();
    let history = History::new();

    let results = calculator.evaluate_batch(&expressions);
    for (expression, outcome) in expressions.iter().zip(&results) {
        history.record(expression, outcome);
    }

    for (i, record) in history.records().iter().enumerate() {
        println!("Result {}: {:?}", i, record);
    }
    println!("{:?}", calculator.stats());
}
