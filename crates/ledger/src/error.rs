//! The module contains the errors the ledger can produce.
//!
//! All variants are validation failures at the transaction boundary, i.e.
//! caller errors:
//!
//! - [`InvalidAmount`] raised for a negative or unparseable amount.
//! - [`InvalidCategory`] raised for a category that is blank after trimming.
//! - [`InvalidKind`] raised when a string does not name a transaction kind.
//!
//! [`InvalidAmount`]: LedgerError::InvalidAmount
//! [`InvalidCategory`]: LedgerError::InvalidCategory
//! [`InvalidKind`]: LedgerError::InvalidKind
use thiserror::Error;

/// Ledger validation errors.
///
/// Once a transaction passes validation the store itself cannot fail, so
/// this enum is the whole error surface of the crate.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("invalid category: {0}")]
    InvalidCategory(String),
    #[error("invalid transaction kind: {0}")]
    InvalidKind(String),
}
