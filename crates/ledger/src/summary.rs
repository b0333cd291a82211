//! Aggregate figures derived from a transaction history.

use serde::{Deserialize, Serialize};

use crate::MoneyCents;

/// Totals over a ledger: income, expenses, and their difference.
///
/// All figures are exact integer-cents values; an empty ledger yields all
/// zeros.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_income: MoneyCents,
    pub total_expenses: MoneyCents,
    pub net_balance: MoneyCents,
}

impl Summary {
    pub const ZERO: Summary = Summary {
        total_income: MoneyCents::ZERO,
        total_expenses: MoneyCents::ZERO,
        net_balance: MoneyCents::ZERO,
    };
}
