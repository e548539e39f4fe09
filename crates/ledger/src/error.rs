//! Operation errors for the account ledger.

use thiserror::Error;

/// Result type for account operations.
pub type AccountResult<T> = Result<T, AccountError>;

/// Rejected-operation error.
///
/// Every variant means the operation was refused before any state change;
/// the ledger is never left partially mutated. Callers match on the variant,
/// not the message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AccountError {
    /// The amount passed to deposit or withdraw was zero or negative.
    /// Carries the invalid amount.
    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(i64),

    /// A 4th+ deposit was attempted on one calendar date.
    /// Carries the cap.
    #[error("daily deposit cap of {0} reached")]
    DailyDepositCapReached(u32),

    /// The withdrawal amount exceeds the current balance.
    /// Carries the current balance.
    #[error("insufficient funds: current balance is {0}")]
    InsufficientFunds(i64),

    /// The withdrawal amount exceeds what is still allowed today.
    /// Carries the remaining daily allowance.
    #[error("daily withdrawal limit exceeded: {0} remaining today")]
    DailyWithdrawalLimitExceeded(i64),
}
