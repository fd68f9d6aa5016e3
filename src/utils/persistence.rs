//! JSON snapshots of a [`UserLedger`].

use std::{collections::HashSet, fs, path::Path};

use crate::{errors::LedgerError, ledger::UserLedger};

/// Stages the snapshot next to `path` as `<name>.<ext>.tmp`, then renames it into place so a
/// failed write never truncates an existing snapshot.
pub fn save_ledger_to_file(ledger: &UserLedger, path: &Path) -> Result<(), LedgerError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(ledger)?;
    let tmp = staging_path(path);
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    tracing::debug!(
        path = %path.display(),
        budgets = ledger.budgets().len(),
        transactions = ledger.transactions().len(),
        "ledger snapshot written"
    );
    Ok(())
}

/// Loads a snapshot and checks it before handing it out.
///
/// Snapshots written by a newer schema are refused, as are snapshots whose budget names are
/// no longer unique.
pub fn load_ledger_from_file(path: &Path) -> Result<UserLedger, LedgerError> {
    let data = fs::read_to_string(path)?;
    let ledger: UserLedger = serde_json::from_str(&data)?;

    let supported = UserLedger::schema_version_default();
    if ledger.schema_version() > supported {
        tracing::warn!(
            path = %path.display(),
            found = ledger.schema_version(),
            supported,
            "refusing snapshot from a newer schema"
        );
        return Err(LedgerError::UnsupportedSchema {
            found: ledger.schema_version(),
            supported,
        });
    }

    let mut seen = HashSet::new();
    if let Some(clash) = ledger
        .budgets()
        .iter()
        .find(|budget| !seen.insert(budget.name.as_str()))
    {
        return Err(LedgerError::DuplicateName(clash.name.clone()));
    }

    Ok(ledger)
}

fn staging_path(path: &Path) -> std::path::PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.tmp"),
        None => "tmp".to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
