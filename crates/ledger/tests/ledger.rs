use chrono::Utc;

use ledger::{Ledger, LedgerError, MoneyCents, Summary, Transaction, TransactionKind};

fn cents(value: i64) -> MoneyCents {
    MoneyCents::new(value)
}

#[test]
fn record_round_trips_fields() {
    let mut ledger = Ledger::new();

    let tx = ledger
        .income(cents(100_000), "  Salary  ", Some("January".to_string()))
        .unwrap();

    assert_eq!(tx.id, 1);
    assert_eq!(tx.kind, TransactionKind::Income);
    assert_eq!(tx.amount, cents(100_000));
    assert_eq!(tx.category, "Salary");
    assert_eq!(tx.note.as_deref(), Some("January"));
}

#[test]
fn negative_amount_is_rejected() {
    let mut ledger = Ledger::new();

    let result = ledger.expense(cents(-500), "Refund", None);

    assert!(matches!(result, Err(LedgerError::InvalidAmount(_))));
    assert!(ledger.is_empty());
}

#[test]
fn blank_category_is_rejected() {
    let mut ledger = Ledger::new();

    for category in ["", "   ", "\t\n"] {
        let result = ledger.income(cents(100), category, None);
        assert!(matches!(result, Err(LedgerError::InvalidCategory(_))));
    }
    assert_eq!(ledger.len(), 0);
}

#[test]
fn zero_amount_is_accepted() {
    let mut ledger = Ledger::new();

    let tx = ledger.expense(MoneyCents::ZERO, "Adjustment", None).unwrap();

    assert_eq!(tx.amount, MoneyCents::ZERO);
    assert_eq!(ledger.len(), 1);
}

#[test]
fn appends_preserve_insertion_order() {
    let mut ledger = Ledger::new();
    let categories = ["Salary", "Groceries", "Rent", "Utilities", "Books"];

    for category in categories {
        ledger.income(cents(100), category, None).unwrap();
    }

    let stored: Vec<&str> = ledger
        .transactions()
        .iter()
        .map(|tx| tx.category.as_str())
        .collect();
    assert_eq!(stored, categories);

    let ids: Vec<u64> = ledger.transactions().iter().map(|tx| tx.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn rejected_input_does_not_advance_the_sequence() {
    let mut ledger = Ledger::new();

    ledger.income(cents(100), "Salary", None).unwrap();
    ledger.expense(cents(-1), "Refund", None).unwrap_err();
    let tx = ledger.expense(cents(200), "Groceries", None).unwrap();

    assert_eq!(tx.id, 2);
    assert_eq!(ledger.len(), 2);
}

#[test]
fn empty_ledger_summary_is_zero() {
    let ledger = Ledger::new();

    assert_eq!(ledger.summary(), Summary::ZERO);
}

#[test]
fn summary_matches_running_totals() {
    let mut ledger = Ledger::new();
    let entries = [
        (TransactionKind::Income, 123_45),
        (TransactionKind::Expense, 10_00),
        (TransactionKind::Income, 0),
        (TransactionKind::Expense, 99_99),
        (TransactionKind::Income, 2_000_00),
    ];

    let mut income = MoneyCents::ZERO;
    let mut expenses = MoneyCents::ZERO;

    for (kind, amount) in entries {
        ledger.record(kind, cents(amount), "Misc", None).unwrap();
        match kind {
            TransactionKind::Income => income += cents(amount),
            TransactionKind::Expense => expenses += cents(amount),
        }

        let summary = ledger.summary();
        assert_eq!(summary.total_income, income);
        assert_eq!(summary.total_expenses, expenses);
        assert_eq!(summary.net_balance, income - expenses);
    }
}

#[test]
fn summary_concrete_scenario() {
    let mut ledger = Ledger::new();

    ledger
        .income("1000.00".parse().unwrap(), "Salary", None)
        .unwrap();
    ledger
        .expense(
            "250.50".parse().unwrap(),
            "Groceries",
            Some("weekly shop".to_string()),
        )
        .unwrap();
    ledger
        .expense("99.99".parse().unwrap(), "Utilities", None)
        .unwrap();

    let categories: Vec<&str> = ledger
        .transactions()
        .iter()
        .map(|tx| tx.category.as_str())
        .collect();
    assert_eq!(categories, ["Salary", "Groceries", "Utilities"]);

    let summary = ledger.summary();
    assert_eq!(summary.total_income, cents(1_000_00));
    assert_eq!(summary.total_expenses, cents(350_49));
    assert_eq!(summary.net_balance, cents(649_51));
}

#[test]
fn restore_resequences_and_preserves_history() {
    let mut ledger = Ledger::new();
    ledger.income(cents(1_000_00), "Salary", None).unwrap();
    ledger
        .expense(cents(250_50), "Groceries", Some("weekly shop".to_string()))
        .unwrap();

    let saved = ledger.transactions().to_vec();
    let mut restored = Ledger::restore(saved).unwrap();

    assert_eq!(restored.transactions(), ledger.transactions());
    assert_eq!(restored.summary(), ledger.summary());

    let tx = restored.expense(cents(99_99), "Utilities", None).unwrap();
    assert_eq!(tx.id, 3);
}

#[test]
fn restore_rejects_invalid_entries() {
    let tampered = vec![Transaction {
        id: 7,
        kind: TransactionKind::Expense,
        recorded_at: Utc::now(),
        amount: cents(-5_00),
        category: "Refund".to_string(),
        note: None,
    }];

    assert!(matches!(
        Ledger::restore(tampered),
        Err(LedgerError::InvalidAmount(_))
    ));
}
