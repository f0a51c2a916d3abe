use fleetbot::{Ledger, LedgerError, MemoryLedger};

#[test]
fn test_first_sight_creates_zero_account() {
    let mut ledger = MemoryLedger::new();
    assert_eq!(ledger.get_balance(42), Ok(0));
}

#[test]
fn test_change_balance_accumulates() {
    let mut ledger = MemoryLedger::new();
    assert_eq!(ledger.change_balance(1, 10), Ok(10));
    assert_eq!(ledger.change_balance(1, -3), Ok(7));
    assert_eq!(ledger.get_balance(1), Ok(7));
}

#[test]
fn test_insufficient_funds_fails_without_mutation() {
    let mut ledger = MemoryLedger::new().with_account(1, 4);
    let err = ledger.change_balance(1, -5).unwrap_err();
    assert_eq!(
        err,
        LedgerError::InsufficientFunds {
            required: 5,
            balance: 4
        }
    );
    // failure left the balance alone
    assert_eq!(ledger.get_balance(1), Ok(4));
}

#[test]
fn test_insufficient_funds_message_names_amounts() {
    let mut ledger = MemoryLedger::new();
    let err = ledger.change_balance(7, -12).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("12"), "missing required amount: {text}");
    assert!(text.contains('0'), "missing balance: {text}");
}

#[test]
fn test_accounts_are_independent() {
    let mut ledger = MemoryLedger::new().with_account(1, 100);
    ledger.change_balance(2, 5).unwrap();
    assert_eq!(ledger.get_balance(1), Ok(100));
    assert_eq!(ledger.get_balance(2), Ok(5));
}
