use miette::Diagnostic;
use thiserror::Error;

/// Problems with a loan request that the caller can correct.
///
/// The messages are part of the public contract and are rendered verbatim.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Loan amount is required")]
    MissingAmount,
    #[error("Birth date is required")]
    MissingBirthDate,
    #[error("Payment term is required")]
    MissingTerm,
    #[error("Loan amount must be greater than zero")]
    NonPositiveAmount,
    #[error("Payment term must be greater than zero")]
    NonPositiveTerm,
    #[error("Birth date cannot be in the future")]
    FutureBirthDate,
}

/// Internal cause of a failed calculation. Logged, never shown to callers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputationFault {
    #[error("decimal overflow while {0}")]
    Overflow(&'static str),
    #[error("division by zero while {0}")]
    DivisionByZero(&'static str),
    #[error("simulation worker aborted")]
    WorkerAborted,
}

#[derive(Error, Diagnostic, Debug)]
pub enum LoanError {
    #[error(transparent)]
    #[diagnostic(code(loansim::validation))]
    Validation(#[from] ValidationError),
    #[error("Error calculating loan simulation")]
    #[diagnostic(code(loansim::computation))]
    Computation(ComputationFault),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoanError {
    /// The internal fault behind a `Computation` error, for logging.
    pub fn fault(&self) -> Option<ComputationFault> {
        match self {
            LoanError::Computation(fault) => Some(*fault),
            _ => None,
        }
    }
}

impl From<ComputationFault> for LoanError {
    fn from(fault: ComputationFault) -> Self {
        LoanError::Computation(fault)
    }
}

pub type Result<T> = std::result::Result<T, LoanError>;
