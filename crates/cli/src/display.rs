//! Terminal rendering for transactions and summaries.

use crossterm::style::Stylize;
use ledger::{Summary, Transaction, TransactionKind};

/// Formats one stored transaction as a single display line.
pub fn transaction_line(tx: &Transaction) -> String {
    let amount = match tx.kind {
        TransactionKind::Income => format!("+{}", tx.amount).green(),
        TransactionKind::Expense => format!("-{}", tx.amount).red(),
    };

    let mut line = format!(
        "#{:<4} {}  {:<8} {:<14} {}",
        tx.id,
        tx.recorded_at.format("%Y-%m-%d %H:%M"),
        tx.kind,
        tx.category,
        amount
    );
    if let Some(note) = &tx.note
        && !note.is_empty()
    {
        line.push_str("  ");
        line.push_str(note);
    }
    line
}

pub fn print_transactions(transactions: &[Transaction]) {
    if transactions.is_empty() {
        println!("The ledger is empty. Use `add` to record a transaction.");
        return;
    }

    println!("--- Transaction History ---");
    for tx in transactions {
        println!("{}", transaction_line(tx));
    }
}

pub fn print_summary(summary: &Summary) {
    let net = summary.net_balance.to_string();
    let net = if summary.net_balance.is_negative() {
        net.red()
    } else {
        net.green()
    };

    println!("--- Financial Summary ---");
    println!(
        "Total income:   {}",
        summary.total_income.to_string().green()
    );
    println!(
        "Total expenses: {}",
        format!("-{}", summary.total_expenses).red()
    );
    println!("Net balance:    {net}");
}
