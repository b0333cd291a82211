use chrono::Utc;

pub use error::LedgerError;
pub use money::MoneyCents;
pub use summary::Summary;
pub use transactions::{Transaction, TransactionKind};

mod error;
mod money;
mod summary;
mod transactions;

type ResultLedger<T> = Result<T, LedgerError>;

/// The in-memory transaction history for one session.
///
/// The ledger owns its transactions exclusively: appends go through
/// [`record`] (or the [`income`]/[`expense`] wrappers), which validate the
/// input, assign the next sequence id and a UTC stamp, and push the entry at
/// the end. Reads hand out shared references only, so stored entries are
/// immutable for the rest of the session.
///
/// [`record`]: Ledger::record
/// [`income`]: Ledger::income
/// [`expense`]: Ledger::expense
#[derive(Debug)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    next_id: u64,
}

impl Ledger {
    /// Creates an empty ledger. Sequence ids start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuilds a ledger from a previously recorded history.
    ///
    /// Every entry is re-validated through [`Transaction::new`] and sequence
    /// ids are reassigned in input order, so chronology follows the order of
    /// `transactions` regardless of the ids it carries. `recorded_at` stamps
    /// are preserved. Fails with the first validation error and builds
    /// nothing on failure.
    pub fn restore(transactions: Vec<Transaction>) -> ResultLedger<Self> {
        let mut ledger = Self::new();
        for tx in transactions {
            let stored = Transaction::new(
                ledger.next_id,
                tx.kind,
                tx.recorded_at,
                tx.amount,
                &tx.category,
                tx.note,
            )?;
            ledger.next_id += 1;
            ledger.transactions.push(stored);
        }
        Ok(ledger)
    }

    /// Validates and appends a new transaction, returning the stored entry.
    ///
    /// On a validation error nothing is appended and the sequence counter
    /// does not advance.
    pub fn record(
        &mut self,
        kind: TransactionKind,
        amount: MoneyCents,
        category: &str,
        note: Option<String>,
    ) -> ResultLedger<&Transaction> {
        let tx = Transaction::new(self.next_id, kind, Utc::now(), amount, category, note)?;
        self.next_id += 1;
        self.transactions.push(tx);

        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// Records an income transaction.
    pub fn income(
        &mut self,
        amount: MoneyCents,
        category: &str,
        note: Option<String>,
    ) -> ResultLedger<&Transaction> {
        self.record(TransactionKind::Income, amount, category, note)
    }

    /// Records an expense transaction.
    pub fn expense(
        &mut self,
        amount: MoneyCents,
        category: &str,
        note: Option<String>,
    ) -> ResultLedger<&Transaction> {
        self.record(TransactionKind::Expense, amount, category, note)
    }

    /// Returns the full history, oldest first.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Computes the summary totals over the whole history.
    ///
    /// Recomputed from scratch on every call; the result is a pure fold over
    /// [`transactions`](Ledger::transactions).
    #[must_use]
    pub fn summary(&self) -> Summary {
        let (income, expenses) = self.transactions.iter().fold(
            (MoneyCents::ZERO, MoneyCents::ZERO),
            |acc, tx| match tx.kind {
                TransactionKind::Income => (acc.0 + tx.amount, acc.1),
                TransactionKind::Expense => (acc.0, acc.1 + tx.amount),
            },
        );

        Summary {
            total_income: income,
            total_expenses: expenses,
            net_balance: income - expenses,
        }
    }

    /// Number of recorded transactions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Returns `true` if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
