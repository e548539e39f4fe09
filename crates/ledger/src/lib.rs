//! Single-account movement ledger.
//!
//! An [`Account`] holds an append-only sequence of [`Movement`]s and exposes
//! two validated operations, deposit and withdraw. Validation always runs
//! before mutation: a rejected operation returns a typed [`AccountError`]
//! and leaves the ledger untouched.

pub mod account;
pub mod error;
pub mod movement;

pub use account::{
    Account, AccountCommand, AccountEvent, AccountId, DepositFunds, FundsDeposited,
    FundsWithdrawn, WithdrawFunds, DAILY_DEPOSIT_CAP, DAILY_WITHDRAWAL_LIMIT,
};
pub use error::{AccountError, AccountResult};
pub use movement::{Movement, MovementKind};
