use crate::application::engine::LoanSimulator;
use crate::domain::loan::{LoanRequest, LoanResult};
use crate::error::{ComputationFault, LoanError, Result};
use chrono::NaiveDate;
use std::sync::Arc;

/// Outcome of one request in a batch, tagged with the caller's row number.
#[derive(Debug)]
pub struct BatchOutcome {
    pub row: usize,
    pub result: Result<LoanResult>,
}

/// Simulates every request on its own tokio task, all against the same `today`.
///
/// Outcomes come back in input order regardless of completion order.
pub async fn simulate_batch(
    simulator: Arc<LoanSimulator>,
    today: NaiveDate,
    requests: Vec<(usize, LoanRequest)>,
) -> Vec<BatchOutcome> {
    let handles: Vec<_> = requests
        .into_iter()
        .map(|(row, request)| {
            let simulator = Arc::clone(&simulator);
            let handle = tokio::spawn(async move { simulator.simulate_on(&request, today) });
            (row, handle)
        })
        .collect();

    let mut outcomes = Vec::with_capacity(handles.len());
    for (row, handle) in handles {
        let result = handle.await.unwrap_or_else(|e| {
            tracing::error!(row, error = %e, "simulation task failed");
            Err(LoanError::Computation(ComputationFault::WorkerAborted))
        });
        outcomes.push(BatchOutcome { row, result });
    }
    outcomes
}
