use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use passbook_core::ValueObject;

/// Kind of a recorded movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

/// One recorded transaction (immutable).
///
/// Amounts are stored positive in the account currency's smallest unit; the
/// kind decides the sign of the balance contribution. Movements are created
/// only by the [`Account`](crate::Account) that owns them and never change
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    date: NaiveDate,
    amount: i64,
    kind: MovementKind,
}

impl Movement {
    pub(crate) fn new(date: NaiveDate, amount: i64, kind: MovementKind) -> Self {
        debug_assert!(amount > 0, "movements store positive amounts");
        Self { date, amount, kind }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Positive amount in the smallest currency unit.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn kind(&self) -> MovementKind {
        self.kind
    }

    pub fn is_deposit(&self) -> bool {
        self.kind == MovementKind::Deposit
    }

    pub fn is_withdrawal(&self) -> bool {
        self.kind == MovementKind::Withdrawal
    }

    /// True when this is a deposit booked on `date`.
    pub fn deposited_on(&self, date: NaiveDate) -> bool {
        self.is_deposit() && self.date == date
    }

    /// True when this is a withdrawal booked on `date`.
    pub fn withdrawn_on(&self, date: NaiveDate) -> bool {
        self.is_withdrawal() && self.date == date
    }

    /// Contribution to the balance: positive for deposits, negative for
    /// withdrawals.
    pub fn signed_amount(&self) -> i64 {
        match self.kind {
            MovementKind::Deposit => self.amount,
            MovementKind::Withdrawal => -self.amount,
        }
    }
}

impl ValueObject for Movement {}
