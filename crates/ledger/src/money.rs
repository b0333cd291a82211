use std::{
    fmt,
    ops::{Add, AddAssign, Sub},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::LedgerError;

/// Monetary amount stored as a signed number of **cents**.
///
/// Every amount and total in the crate is one of these; keeping the
/// arithmetic in integer cents makes summary totals exact for any input
/// with at most two decimals.
///
/// ```rust
/// use ledger::MoneyCents;
///
/// let price: MoneyCents = "249.99".parse().unwrap();
/// assert_eq!(price.cents(), 24_999);
/// assert_eq!(price.to_string(), "$249.99");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyCents(i64);

impl MoneyCents {
    pub const ZERO: MoneyCents = MoneyCents(0);

    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for MoneyCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            f.write_str("-")?;
        }
        let abs = self.0.unsigned_abs();
        write!(f, "${}.{:02}", abs / 100, abs % 100)
    }
}

impl Add for MoneyCents {
    type Output = MoneyCents;

    fn add(self, rhs: MoneyCents) -> MoneyCents {
        MoneyCents(self.0 + rhs.0)
    }
}

impl AddAssign for MoneyCents {
    fn add_assign(&mut self, rhs: MoneyCents) {
        self.0 += rhs.0;
    }
}

impl Sub for MoneyCents {
    type Output = MoneyCents;

    fn sub(self, rhs: MoneyCents) -> MoneyCents {
        MoneyCents(self.0 - rhs.0)
    }
}

impl FromStr for MoneyCents {
    type Err = LedgerError;

    /// Parses a decimal amount such as `10`, `10.5` or `10,50`.
    ///
    /// An optional leading `+`/`-` is accepted; anything beyond two
    /// fraction digits is rejected rather than rounded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = |why: &str| LedgerError::InvalidAmount(format!("{why}: {s:?}"));

        let mut text = s.trim();
        let mut negative = false;
        if let Some(rest) = text.strip_prefix(['-', '+']) {
            negative = text.starts_with('-');
            text = rest;
        }

        let (whole, frac) = text.split_once(['.', ',']).unwrap_or((text, ""));
        if whole.is_empty()
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(bad("not a decimal amount"));
        }
        if frac.len() > 2 {
            return Err(bad("more than two decimals"));
        }

        // Accumulate whole and fraction digits straight into cents, then
        // scale up when fewer than two fraction digits were given.
        let mut cents = 0i64;
        for b in whole.bytes().chain(frac.bytes()) {
            cents = cents
                .checked_mul(10)
                .and_then(|v| v.checked_add(i64::from(b - b'0')))
                .ok_or_else(|| bad("amount out of range"))?;
        }
        for _ in frac.len()..2 {
            cents = cents
                .checked_mul(10)
                .ok_or_else(|| bad("amount out of range"))?;
        }

        Ok(MoneyCents(if negative { -cents } else { cents }))
    }
}
