//! End-to-end flows over the public API, driven the way an embedding
//! process would drive them: observability initialized once, dates supplied
//! by the caller.

use chrono::NaiveDate;
use passbook_core::{Aggregate, AggregateId, AggregateRoot};
use passbook_events::Event;
use passbook_ledger::{Account, AccountCommand, AccountError, AccountId, WithdrawFunds};

fn setup() -> (AccountId, NaiveDate) {
    passbook_observability::init();
    (
        AccountId::new(AggregateId::new()),
        NaiveDate::from_ymd_opt(2026, 8, 21).unwrap(),
    )
}

#[test]
fn a_day_at_the_counter() {
    let (id, today) = setup();
    let tomorrow = today.succ_opt().unwrap();

    let mut account = Account::with_initial_deposit(id, 1000, today).unwrap();
    tracing::info!(account = %id, balance = account.balance(), "account opened");

    account.withdraw(200, today).unwrap();
    assert_eq!(account.balance(), 800);
    assert_eq!(account.amount_withdrawn_on(today), 200);

    assert_eq!(
        account.withdraw(850, today).unwrap_err(),
        AccountError::DailyWithdrawalLimitExceeded(800)
    );

    account.withdraw(800, today).unwrap();
    assert_eq!(account.balance(), 0);

    // Two more deposits fit under today's cap, the third does not.
    account.deposit(20, today).unwrap();
    account.deposit(20, today).unwrap();
    assert_eq!(
        account.deposit(20, today).unwrap_err(),
        AccountError::DailyDepositCapReached(3)
    );

    // Day boundary: both the deposit cap and the withdrawal allowance reset.
    account.deposit(20, tomorrow).unwrap();
    account.withdraw(60, tomorrow).unwrap();
    assert_eq!(account.balance(), 0);
    assert_eq!(account.amount_withdrawn_on(tomorrow), 60);
    assert_eq!(account.movements().len(), 7);
}

#[test]
fn command_pipeline_emits_then_applies() {
    let (id, today) = setup();
    let mut account = Account::with_initial_deposit(id, 500, today).unwrap();

    let cmd = AccountCommand::WithdrawFunds(WithdrawFunds {
        account_id: id,
        amount: 120,
        date: today,
    });

    let events = account.handle(&cmd).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type(), "ledger.account.funds_withdrawn");
    assert_eq!(events[0].schema_version(), 1);
    assert_eq!(events[0].occurred_on(), today);

    // Decision did not mutate; application does.
    assert_eq!(account.balance(), 500);
    for event in &events {
        account.apply(event);
    }
    assert_eq!(account.balance(), 380);
    assert_eq!(account.version(), 2);
}

#[test]
fn event_wire_shape_is_stable() {
    let (id, today) = setup();
    let account = Account::with_initial_deposit(id, 300, today).unwrap();

    let cmd = AccountCommand::WithdrawFunds(WithdrawFunds {
        account_id: id,
        amount: 50,
        date: today,
    });
    let events = account.handle(&cmd).unwrap();

    let json = serde_json::to_value(&events[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "FundsWithdrawn": {
                "account_id": id.to_string(),
                "amount": 50,
                "date": "2026-08-21",
            }
        })
    );

    // Movements serialize with lowercase kinds.
    let movement_json = serde_json::to_value(account.movements()[0]).unwrap();
    assert_eq!(movement_json["kind"], "deposit");
}

#[test]
fn rejected_operations_never_leave_partial_state() {
    let (id, today) = setup();
    let mut account = Account::with_initial_deposit(id, 100, today).unwrap();
    let snapshot = account.clone();

    assert!(matches!(
        account.withdraw(0, today).unwrap_err(),
        AccountError::NonPositiveAmount(0)
    ));
    assert!(matches!(
        account.withdraw(5000, today).unwrap_err(),
        AccountError::InsufficientFunds(100)
    ));

    assert_eq!(account, snapshot);
}
