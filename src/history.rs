use crate::error::EvaluationError;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::SystemTime;

/// One evaluation attempt as seen by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryRecord {
    Success {
        result: f64,
        query: String,
        timestamp: SystemTime,
    },
    Failure {
        message: String,
        query: String,
        timestamp: SystemTime,
    },
}

impl HistoryRecord {
    pub fn query(&self) -> &str {
        match self {
            HistoryRecord::Success { query, .. } | HistoryRecord::Failure { query, .. } => query,
        }
    }

    pub fn timestamp(&self) -> SystemTime {
        match self {
            HistoryRecord::Success { timestamp, .. }
            | HistoryRecord::Failure { timestamp, .. } => *timestamp,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, HistoryRecord::Success { .. })
    }
}

/// Receiver of evaluation outcomes. The calculator never calls this itself;
/// whoever drives it records each attempt.
pub trait HistorySink {
    fn record_success(&self, result: f64, query: &str, timestamp: SystemTime);

    fn record_failure(&self, message: &str, query: &str, timestamp: SystemTime);

    /// Records `outcome` stamped with the current time.
    fn record(&self, query: &str, outcome: &Result<f64, EvaluationError>) {
        let now = SystemTime::now();
        match outcome {
            Ok(result) => self.record_success(*result, query, now),
            Err(e) => self.record_failure(&e.message(), query, now),
        }
    }
}

/// Append-only, in-memory history shared between threads.
#[derive(Debug, Default)]
pub struct History {
    records: Mutex<Vec<HistoryRecord>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<HistoryRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of all records in insertion order.
    pub fn records(&self) -> Vec<HistoryRecord> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl HistorySink for History {
    fn record_success(&self, result: f64, query: &str, timestamp: SystemTime) {
        self.lock().push(HistoryRecord::Success {
            result,
            query: query.to_string(),
            timestamp,
        });
    }

    fn record_failure(&self, message: &str, query: &str, timestamp: SystemTime) {
        self.lock().push(HistoryRecord::Failure {
            message: message.to_string(),
            query: query.to_string(),
            timestamp,
        });
    }
}
