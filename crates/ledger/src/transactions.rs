//! Transaction primitives.
//!
//! A `Transaction` is one immutable financial event. Validation happens in
//! [`Transaction::new`], the single boundary where raw input becomes a
//! well-formed value; the [`Ledger`] never stores anything that did not pass
//! through it.
//!
//! [`Ledger`]: crate::Ledger

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{LedgerError, MoneyCents, ResultLedger};

/// Classification of a transaction, fixing the sign of its contribution to
/// the summary totals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(LedgerError::InvalidKind(format!(
                "expected income or expense, got: {other}"
            ))),
        }
    }
}

/// One immutable entry in the ledger.
///
/// `id` and `recorded_at` are assigned by the [`Ledger`] at append time and
/// never supplied by callers; `id` is the authoritative chronological
/// position.
///
/// [`Ledger`]: crate::Ledger
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub kind: TransactionKind,
    pub recorded_at: DateTime<Utc>,
    pub amount: MoneyCents,
    pub category: String,
    pub note: Option<String>,
}

impl Transaction {
    /// Validates raw input and builds a transaction.
    ///
    /// The category is stored trimmed of surrounding whitespace.
    pub fn new(
        id: u64,
        kind: TransactionKind,
        recorded_at: DateTime<Utc>,
        amount: MoneyCents,
        category: &str,
        note: Option<String>,
    ) -> ResultLedger<Self> {
        if amount.is_negative() {
            return Err(LedgerError::InvalidAmount(
                "amount must be >= 0".to_string(),
            ));
        }

        let category = category.trim();
        if category.is_empty() {
            return Err(LedgerError::InvalidCategory(
                "category must not be blank".to_string(),
            ));
        }

        Ok(Self {
            id,
            kind,
            recorded_at,
            amount,
            category: category.to_string(),
            note,
        })
    }
}
