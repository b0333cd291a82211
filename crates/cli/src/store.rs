//! Session persistence for the ledger.
//!
//! The core library never touches the filesystem; this module is the
//! collaborator that replays a saved history into a fresh [`Ledger`] on
//! startup and serializes the history back after a change. The on-disk
//! format is a JSON array of transactions.

use std::{fs, io, path::Path};

use ledger::{Ledger, Transaction};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Ledger(#[from] ledger::LedgerError),
}

/// Loads the ledger from `path`. A missing file means a fresh session.
pub fn load(path: &Path) -> Result<Ledger, StoreError> {
    if !path.exists() {
        tracing::debug!("no ledger file at {}, starting empty", path.display());
        return Ok(Ledger::new());
    }

    let raw = fs::read_to_string(path)?;
    let transactions: Vec<Transaction> = serde_json::from_str(&raw)?;
    let ledger = Ledger::restore(transactions)?;
    tracing::debug!(
        "loaded {} transactions from {}",
        ledger.len(),
        path.display()
    );
    Ok(ledger)
}

/// Writes the full history to `path`.
pub fn save(path: &Path, ledger: &Ledger) -> Result<(), StoreError> {
    let raw = serde_json::to_string_pretty(ledger.transactions())?;
    fs::write(path, raw)?;
    tracing::debug!(
        "saved {} transactions to {}",
        ledger.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use ledger::{LedgerError, MoneyCents};

    use super::*;

    fn test_path(name: &str) -> PathBuf {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_ledgers");
        fs::create_dir_all(&root).unwrap();
        root.join(format!("{name}.json"))
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = test_path("round_trip");
        let mut ledger = Ledger::new();
        ledger
            .income(MoneyCents::new(1_000_00), "Salary", None)
            .unwrap();
        ledger
            .expense(
                MoneyCents::new(250_50),
                "Groceries",
                Some("weekly shop".to_string()),
            )
            .unwrap();

        save(&path, &ledger).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded.transactions(), ledger.transactions());
        assert_eq!(loaded.summary(), ledger.summary());
    }

    #[test]
    fn load_missing_file_starts_empty() {
        let path = test_path("missing");
        let _ = fs::remove_file(&path);

        let loaded = load(&path).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn load_rejects_tampered_amounts() {
        let path = test_path("tampered");
        fs::write(
            &path,
            r#"[{"id":1,"kind":"expense","recorded_at":"2026-01-05T09:30:00Z","amount":-500,"category":"Refund","note":null}]"#,
        )
        .unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Ledger(LedgerError::InvalidAmount(_))
        ));
    }
}
