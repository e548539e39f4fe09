use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use passbook_core::{Aggregate, AggregateId, AggregateRoot};
use passbook_events::Event;

use crate::error::{AccountError, AccountResult};
use crate::movement::{Movement, MovementKind};

/// Maximum number of deposits allowed per calendar date.
pub const DAILY_DEPOSIT_CAP: u32 = 3;

/// Maximum cumulative withdrawal amount allowed per calendar date, in the
/// smallest currency unit.
pub const DAILY_WITHDRAWAL_LIMIT: i64 = 1000;

/// Account identifier (aggregate id).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub AggregateId);

impl AccountId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Aggregate root: Account (single-account movement ledger).
///
/// Holds an append-only list of [`Movement`]s; insertion order is call
/// order. Balance and the per-date totals are derived on demand, never
/// stored. Nothing is removed or rewritten for the lifetime of the value.
///
/// Not internally synchronized: if an instance must be shared across
/// threads, guard it with one mutex so each operation's check-then-append
/// stays a single critical section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    movements: Vec<Movement>,
    version: u64,
}

impl Account {
    /// Create an empty account.
    pub fn new(id: AccountId) -> Self {
        Self {
            id,
            movements: Vec::new(),
            version: 0,
        }
    }

    /// Create an account seeded with an initial deposit.
    ///
    /// The seed goes through the same validated deposit path as any other
    /// deposit, so it must be positive and it counts toward the daily cap.
    pub fn with_initial_deposit(
        id: AccountId,
        amount: i64,
        date: NaiveDate,
    ) -> AccountResult<Self> {
        let mut account = Self::new(id);
        account.deposit(amount, date)?;
        Ok(account)
    }

    pub fn id_typed(&self) -> AccountId {
        self.id
    }

    /// The recorded movements, oldest first.
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    /// Net balance: deposits add, withdrawals subtract.
    ///
    /// Recomputed on each call. Ledgers stay small here; a running total
    /// updated on append would only pay off at sizes this model never sees.
    pub fn balance(&self) -> i64 {
        self.movements.iter().map(Movement::signed_amount).sum()
    }

    /// Sum of withdrawal amounts booked on `date`.
    pub fn amount_withdrawn_on(&self, date: NaiveDate) -> i64 {
        self.movements
            .iter()
            .filter(|movement| movement.withdrawn_on(date))
            .map(Movement::amount)
            .sum()
    }

    /// Number of deposits booked on `date`.
    pub fn deposit_count_on(&self, date: NaiveDate) -> u32 {
        self.movements
            .iter()
            .filter(|movement| movement.deposited_on(date))
            .count() as u32
    }

    /// Deposit `amount` on `date`.
    ///
    /// Checks, in order: amount positivity, then the daily deposit cap for
    /// `date`. The first failing check returns and nothing is appended.
    pub fn deposit(&mut self, amount: i64, date: NaiveDate) -> AccountResult<()> {
        let command = AccountCommand::DepositFunds(DepositFunds {
            account_id: self.id,
            amount,
            date,
        });
        self.execute(&command)
    }

    /// Withdraw `amount` on `date`.
    ///
    /// Checks, in order: amount positivity, then sufficient funds, then the
    /// remaining daily withdrawal allowance for `date`. The first failing
    /// check returns and nothing is appended.
    pub fn withdraw(&mut self, amount: i64, date: NaiveDate) -> AccountResult<()> {
        let command = AccountCommand::WithdrawFunds(WithdrawFunds {
            account_id: self.id,
            amount,
            date,
        });
        self.execute(&command)
    }

    fn execute(&mut self, command: &AccountCommand) -> AccountResult<()> {
        let events = self.handle(command)?;
        for event in &events {
            self.apply(event);
        }
        Ok(())
    }
}

impl AggregateRoot for Account {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: DepositFunds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositFunds {
    pub account_id: AccountId,
    /// Positive amount in the smallest currency unit.
    pub amount: i64,
    /// The calendar date the deposit is booked under ("today" as supplied
    /// by the caller, so day boundaries stay testable).
    pub date: NaiveDate,
}

/// Command: WithdrawFunds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawFunds {
    pub account_id: AccountId,
    /// Positive amount in the smallest currency unit.
    pub amount: i64,
    /// The calendar date the withdrawal is booked under.
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountCommand {
    DepositFunds(DepositFunds),
    WithdrawFunds(WithdrawFunds),
}

/// Event: FundsDeposited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundsDeposited {
    pub account_id: AccountId,
    pub amount: i64,
    pub date: NaiveDate,
}

/// Event: FundsWithdrawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundsWithdrawn {
    pub account_id: AccountId,
    pub amount: i64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountEvent {
    FundsDeposited(FundsDeposited),
    FundsWithdrawn(FundsWithdrawn),
}

impl Event for AccountEvent {
    fn event_type(&self) -> &'static str {
        match self {
            AccountEvent::FundsDeposited(_) => "ledger.account.funds_deposited",
            AccountEvent::FundsWithdrawn(_) => "ledger.account.funds_withdrawn",
        }
    }

    fn schema_version(&self) -> u32 {
        1
    }

    fn occurred_on(&self) -> NaiveDate {
        match self {
            AccountEvent::FundsDeposited(e) => e.date,
            AccountEvent::FundsWithdrawn(e) => e.date,
        }
    }
}

impl Aggregate for Account {
    type Command = AccountCommand;
    type Event = AccountEvent;
    type Error = AccountError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            AccountEvent::FundsDeposited(e) => {
                self.movements
                    .push(Movement::new(e.date, e.amount, MovementKind::Deposit));
            }
            AccountEvent::FundsWithdrawn(e) => {
                self.movements
                    .push(Movement::new(e.date, e.amount, MovementKind::Withdrawal));
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            AccountCommand::DepositFunds(cmd) => self.handle_deposit(cmd),
            AccountCommand::WithdrawFunds(cmd) => self.handle_withdraw(cmd),
        }
    }
}

impl Account {
    fn handle_deposit(&self, cmd: &DepositFunds) -> Result<Vec<AccountEvent>, AccountError> {
        debug_assert_eq!(cmd.account_id, self.id, "command routed to wrong account");
        ensure_positive_amount(cmd.amount)?;
        self.ensure_below_deposit_cap(cmd.date)?;

        Ok(vec![AccountEvent::FundsDeposited(FundsDeposited {
            account_id: cmd.account_id,
            amount: cmd.amount,
            date: cmd.date,
        })])
    }

    fn handle_withdraw(&self, cmd: &WithdrawFunds) -> Result<Vec<AccountEvent>, AccountError> {
        debug_assert_eq!(cmd.account_id, self.id, "command routed to wrong account");
        ensure_positive_amount(cmd.amount)?;
        self.ensure_sufficient_funds(cmd.amount)?;
        self.ensure_within_daily_limit(cmd.amount, cmd.date)?;

        Ok(vec![AccountEvent::FundsWithdrawn(FundsWithdrawn {
            account_id: cmd.account_id,
            amount: cmd.amount,
            date: cmd.date,
        })])
    }

    fn ensure_below_deposit_cap(&self, date: NaiveDate) -> AccountResult<()> {
        if self.deposit_count_on(date) >= DAILY_DEPOSIT_CAP {
            return Err(AccountError::DailyDepositCapReached(DAILY_DEPOSIT_CAP));
        }
        Ok(())
    }

    fn ensure_sufficient_funds(&self, amount: i64) -> AccountResult<()> {
        let balance = self.balance();
        if balance - amount < 0 {
            return Err(AccountError::InsufficientFunds(balance));
        }
        Ok(())
    }

    fn ensure_within_daily_limit(&self, amount: i64, date: NaiveDate) -> AccountResult<()> {
        let remaining = DAILY_WITHDRAWAL_LIMIT - self.amount_withdrawn_on(date);
        if amount > remaining {
            return Err(AccountError::DailyWithdrawalLimitExceeded(remaining));
        }
        Ok(())
    }
}

fn ensure_positive_amount(amount: i64) -> AccountResult<()> {
    if amount <= 0 {
        return Err(AccountError::NonPositiveAmount(amount));
    }
    Ok(())
}
