use thiserror::Error;

/// Error type that captures ledger failures.
///
/// The first five variants are validation failures raised by ledger mutations. They are
/// reported before any field is touched, so a rejected call leaves the ledger unchanged.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Must be larger than zero: {0}")]
    InvalidAmount(f64),
    #[error("Not enough bank for budget: {required} required, {available} uncommitted")]
    InsufficientFunds { required: f64, available: f64 },
    #[error("Not enough budget for transaction: `{budget}` has {remaining}, {requested} requested")]
    InsufficientBudget {
        budget: String,
        remaining: f64,
        requested: f64,
    },
    #[error("Name was used: {0}")]
    DuplicateName(String),
    #[error("Budget not found: {0}")]
    NotFound(String),
    #[error("Snapshot schema {found} is newer than supported schema {supported}")]
    UnsupportedSchema { found: u8, supported: u8 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl LedgerError {
    /// True for errors the caller can fix by adjusting its input.
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            LedgerError::UnsupportedSchema { .. } | LedgerError::Io(_) | LedgerError::Serde(_)
        )
    }
}
