use calculus_rs::history::{History, HistoryRecord, HistorySink};
use calculus_rs::{Calculator, CalculatorConfig};
use log::{info, warn};
use std::io;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::io::{AsyncBufReadExt, BufReader};

fn unix_seconds(timestamp: SystemTime) -> u64 {
    timestamp
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

fn print_history(history: &History) {
    for record in history.records() {
        match record {
            HistoryRecord::Success {
                result,
                query,
                timestamp,
            } => println!("[{}] {} = {}", unix_seconds(timestamp), query, result),
            HistoryRecord::Failure {
                message,
                query,
                timestamp,
            } => println!("[{}] {} -> error: {}", unix_seconds(timestamp), query, message),
        }
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let config = CalculatorConfig::from_env();
    info!(
        "Cache capacity {}, ttl {:?}, max depth {}",
        config.cache_capacity, config.cache_ttl, config.max_depth
    );

    let calculator = Arc::new(Calculator::new(config));
    let history = History::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        if line.is_empty() {
            continue;
        }

        match line.trim() {
            ":history" => print_history(&history),
            ":stats" => {
                let stats = calculator.stats();
                println!(
                    "hits: {}, misses: {}, cached: {}",
                    stats.hits,
                    stats.misses,
                    calculator.cached_entries()
                );
            }
            _ => {
                let worker = Arc::clone(&calculator);
                let query = line.clone();
                let outcome = tokio::task::spawn_blocking(move || worker.evaluate_expression(&query))
                    .await
                    .map_err(io::Error::other)?;

                history.record(&line, &outcome);
                match outcome {
                    Ok(result) => println!("= {}", result),
                    Err(e) => {
                        warn!("Evaluation of {:?} failed: {}", line, e);
                        println!("error: {}", e);
                    }
                }
            }
        }
    }

    info!("Input closed after {} evaluations", history.len());
    Ok(())
}
