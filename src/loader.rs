use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::NaiveDate;

use crate::error::Result;
use crate::ledger::{self, CLIENT_COLUMN, SALESPERSON_COLUMN};

pub const DUE_COLUMN: &str = "Venc.";
pub const BALANCE_COLUMN: &str = "Saldo(R$)";

/// Label shown for rows no salesperson list claimed.
pub const UNASSIGNED_LABEL: &str = "-";

// ---------------------------------------------------------------------------
// Parsing helpers
// ---------------------------------------------------------------------------

/// Day-first due date. ISO is also accepted since pass-through ledgers may
/// already carry it. Anything else is an unknown date, never an error.
pub fn parse_date_dayfirst(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    for fmt in ["%d/%m/%Y", "%d/%m/%y", "%Y-%m-%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(date);
        }
    }
    None
}

/// Brazilian locale decimal: thousands '.' dropped, decimal ',' becomes '.'.
/// "1.234,56" parses to 1234.56; garbage falls back to 0.0.
pub fn parse_balance(raw: &str) -> f64 {
    let s = raw
        .replace('.', "")
        .replace(',', ".")
        .replace('"', "")
        .replace("R$", "");
    s.trim().parse().unwrap_or(0.0)
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// One row of the enriched snapshot, typed for filtering and aggregation.
/// The salesperson is an opaque categorical label, not a number.
#[derive(Debug, Clone)]
pub struct Entry {
    pub client: String,
    pub salesperson: String,
    pub due: Option<NaiveDate>,
    pub balance: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub entries: Vec<Entry>,
}

impl Snapshot {
    /// Parse the enriched snapshot. The four expected columns must be
    /// present; individual bad dates or balances degrade per row instead.
    pub fn load(path: &Path) -> Result<Self> {
        let table = ledger::read_table(path)?;
        let client_idx = ledger::find_column(&table.headers, CLIENT_COLUMN, path)?;
        let vend_idx = ledger::find_column(&table.headers, SALESPERSON_COLUMN, path)?;
        let due_idx = ledger::find_column(&table.headers, DUE_COLUMN, path)?;
        let bal_idx = ledger::find_column(&table.headers, BALANCE_COLUMN, path)?;

        let mut entries = Vec::with_capacity(table.rows.len());
        for fields in &table.rows {
            let get = |i: usize| fields.get(i).map(String::as_str).unwrap_or("");
            let raw_vend = get(vend_idx).trim();
            entries.push(Entry {
                client: get(client_idx).to_string(),
                salesperson: if raw_vend.is_empty() {
                    UNASSIGNED_LABEL.to_string()
                } else {
                    raw_vend.to_string()
                },
                due: parse_date_dayfirst(get(due_idx)),
                balance: parse_balance(get(bal_idx)),
            });
        }
        Ok(Snapshot { entries })
    }

    /// Distinct salesperson labels for the dashboard selector. Numeric
    /// labels sort numerically; anything else (including "-") sorts last.
    pub fn salesperson_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .entries
            .iter()
            .map(|e| e.salesperson.clone())
            .collect();
        labels.sort_by_key(|l| (l.parse::<u32>().map_or(u32::MAX, |n| n), l.clone()));
        labels.dedup();
        labels
    }
}

// ---------------------------------------------------------------------------
// Load cache
// ---------------------------------------------------------------------------

/// Memoized snapshot load keyed on path + modification time. The dashboard
/// goes through here on every interaction; the file is only re-parsed when
/// it actually changed on disk.
pub struct SnapshotCache {
    state: Option<CacheState>,
}

struct CacheState {
    path: PathBuf,
    modified: SystemTime,
    snapshot: Snapshot,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self { state: None }
    }

    pub fn load(&mut self, path: &Path) -> Result<&Snapshot> {
        let modified = std::fs::metadata(path)?.modified()?;
        let fresh = self
            .state
            .as_ref()
            .is_some_and(|s| s.path.as_path() == path && s.modified == modified);
        if !fresh {
            let snapshot = Snapshot::load(path)?;
            self.state = Some(CacheState {
                path: path.to_path_buf(),
                modified,
                snapshot,
            });
        }
        match &self.state {
            Some(state) => Ok(&state.snapshot),
            None => unreachable!("cache populated above"),
        }
    }
}
