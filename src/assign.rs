use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::ledger::{self, Ledger, CLIENT_COLUMN};
use crate::normalize;

/// Extensions recognized as tabular data when scanning the list directory.
#[cfg(feature = "xlsx")]
const DATA_EXTENSIONS: &[&str] = &["csv", "xlsx"];
#[cfg(not(feature = "xlsx"))]
const DATA_EXTENSIONS: &[&str] = &["csv"];

/// One salesperson's client list. Identity is positional: the i-th file in
/// lexicographic filename order is salesperson i (1-based).
pub struct ClientList {
    pub filename: String,
    pub clients: HashSet<String>,
}

pub struct AssignCount {
    pub salesperson: u32,
    pub filename: String,
    pub assigned: usize,
}

/// Collect recognized list files in lexicographic filename order and load
/// each into a set of normalized client names. A missing or empty directory
/// yields no lists, and therefore zero assignments.
pub fn load_client_lists(dir: &Path) -> Result<Vec<ClientList>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(Vec::new()),
    };

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let recognized = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| DATA_EXTENSIONS.iter().any(|x| e.eq_ignore_ascii_case(x)));
        if path.is_file() && recognized {
            paths.push(path);
        }
    }
    paths.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));

    paths.iter().map(|p| load_client_list(p)).collect()
}

fn load_client_list(path: &Path) -> Result<ClientList> {
    let table = ledger::read_table(path)?;
    let idx = ledger::find_column(&table.headers, CLIENT_COLUMN, path)?;

    // Duplicates within one list collapse here; empty names never match.
    let clients = table
        .rows
        .iter()
        .filter_map(|fields| fields.get(idx))
        .map(|raw| normalize::client_name(raw))
        .filter(|name| !name.is_empty())
        .collect();

    Ok(ClientList {
        filename: path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string(),
        clients,
    })
}

/// First match wins: walk the lists in file order and stamp every still
/// unassigned ledger row whose normalized client the list contains. Rows
/// matched by an earlier list are never revisited; rows matching no list
/// keep an unset salesperson. Returns the newly assigned count per list.
pub fn assign_salespeople(ledger: &mut Ledger, lists: &[ClientList]) -> Vec<AssignCount> {
    let client_idx = ledger.client_idx;
    let mut counts = Vec::with_capacity(lists.len());

    for (i, list) in lists.iter().enumerate() {
        let salesperson = i as u32 + 1;
        let mut assigned = 0usize;
        for row in &mut ledger.rows {
            if row.salesperson.is_some() {
                continue;
            }
            let client = &row.fields[client_idx];
            if !client.is_empty() && list.clients.contains(client) {
                row.salesperson = Some(salesperson);
                assigned += 1;
            }
        }
        counts.push(AssignCount {
            salesperson,
            filename: list.filename.clone(),
            assigned,
        });
    }
    counts
}
