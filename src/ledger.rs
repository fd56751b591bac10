use std::path::Path;

use crate::error::{CobrancaError, Result};
use crate::normalize;

pub const CLIENT_COLUMN: &str = "Cliente";
pub const SALESPERSON_COLUMN: &str = "Vendedor";

// ---------------------------------------------------------------------------
// Raw table reading — shared by the ledger, the client lists and the
// snapshot loader. Semicolon-delimited CSV, or XLSX behind the feature.
// ---------------------------------------------------------------------------

pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn read_table(path: &Path) -> Result<RawTable> {
    #[cfg(feature = "xlsx")]
    if path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("xlsx"))
    {
        return read_workbook(path);
    }
    read_delimited(path)
}

fn read_delimited(path: &Path) -> Result<RawTable> {
    let file = std::fs::File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(std::io::BufReader::new(file));

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();
    let mut rows = Vec::new();
    for result in rdr.records() {
        let Ok(record) = result else { continue };
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }
    Ok(RawTable { headers, rows })
}

#[cfg(feature = "xlsx")]
fn read_workbook(path: &Path) -> Result<RawTable> {
    use calamine::Reader;

    let mut workbook = calamine::open_workbook_auto(path)
        .map_err(|e| CobrancaError::Spreadsheet(format!("failed to open {}: {e}", path.display())))?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| CobrancaError::Spreadsheet(format!("no sheets in {}", path.display())))?;
    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| CobrancaError::Spreadsheet(format!("failed to read sheet {sheet}: {e}")))?;

    let mut rows_iter = range.rows();
    let headers: Vec<String> = match rows_iter.next() {
        Some(row) => row.iter().map(|c| cell_to_string(c).trim().to_string()).collect(),
        None => Vec::new(),
    };
    let rows = rows_iter
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();
    Ok(RawTable { headers, rows })
}

#[cfg(feature = "xlsx")]
fn cell_to_string(cell: &calamine::Data) -> String {
    use calamine::Data;
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => excel_serial_to_date(dt.as_f64()),
        other => other.to_string(),
    }
}

/// Convert an Excel serial date to day-first text.
#[cfg(any(feature = "xlsx", test))]
pub fn excel_serial_to_date(serial: f64) -> String {
    // Excel epoch is 1899-12-30 (accounting for the 1900 leap year bug)
    let base = chrono::NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    let date = base + chrono::Duration::days(serial as i64);
    date.format("%d/%m/%Y").to_string()
}

pub fn find_column(headers: &[String], name: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| CobrancaError::MissingColumn(name.to_string(), path.display().to_string()))
}

// ---------------------------------------------------------------------------
// The general ledger
// ---------------------------------------------------------------------------

/// One ledger row: every original field in order, plus the salesperson
/// index once assignment has run. Once set, the index is never overwritten.
#[derive(Debug, Clone)]
pub struct LedgerRow {
    pub fields: Vec<String>,
    pub salesperson: Option<u32>,
}

/// The ledger held in memory between load and snapshot write. Only the
/// "Cliente" column is interpreted (and normalized in place); every other
/// column passes through untouched.
#[derive(Debug, Clone)]
pub struct Ledger {
    pub headers: Vec<String>,
    pub client_idx: usize,
    pub rows: Vec<LedgerRow>,
}

pub fn read_ledger(path: &Path) -> Result<Ledger> {
    let table = read_table(path)?;
    let client_idx = find_column(&table.headers, CLIENT_COLUMN, path)?;
    let width = table.headers.len();

    let rows = table
        .rows
        .into_iter()
        .map(|mut fields| {
            fields.resize(width, String::new());
            fields[client_idx] = normalize::client_name(&fields[client_idx]);
            LedgerRow {
                fields,
                salesperson: None,
            }
        })
        .collect();

    Ok(Ledger {
        headers: table.headers,
        client_idx,
        rows,
    })
}

/// Write the enriched ledger: all original columns plus a trailing integer
/// "Vendedor" column, empty where no list matched. This file is the sole
/// artifact the dashboard consumes.
pub fn write_snapshot(ledger: &Ledger, path: &Path) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().delimiter(b';').from_path(path)?;

    let mut headers = ledger.headers.clone();
    headers.push(SALESPERSON_COLUMN.to_string());
    wtr.write_record(&headers)?;

    for row in &ledger.rows {
        let mut record = row.fields.clone();
        record.push(row.salesperson.map(|v| v.to_string()).unwrap_or_default());
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_csv(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_ledger_normalizes_client_column_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "geral.csv",
            "Documento;Cliente;Venc.;Saldo(R$)\nNF-001;  joão ;15/03/2025;1.234,56\n",
        );
        let ledger = read_ledger(&path).unwrap();
        assert_eq!(ledger.client_idx, 1);
        assert_eq!(ledger.rows.len(), 1);
        assert_eq!(ledger.rows[0].fields[1], "JOAO");
        // Other columns untouched
        assert_eq!(ledger.rows[0].fields[0], "NF-001");
        assert_eq!(ledger.rows[0].fields[3], "1.234,56");
        assert_eq!(ledger.rows[0].salesperson, None);
    }

    #[test]
    fn test_read_ledger_pads_short_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "geral.csv",
            "Cliente;Venc.;Saldo(R$)\nMARIA;10/01/2025\n",
        );
        let ledger = read_ledger(&path).unwrap();
        assert_eq!(ledger.rows[0].fields.len(), 3);
        assert_eq!(ledger.rows[0].fields[2], "");
    }

    #[test]
    fn test_read_ledger_requires_client_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "geral.csv", "Nome;Saldo\nfoo;1\n");
        let err = read_ledger(&path).unwrap_err();
        assert!(err.to_string().contains("Cliente"));
    }

    #[test]
    fn test_write_snapshot_appends_salesperson_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "geral.csv",
            "Cliente;Saldo(R$)\nJOAO;100,00\nPEDRO;50,00\n",
        );
        let mut ledger = read_ledger(&path).unwrap();
        ledger.rows[0].salesperson = Some(2);

        let out = dir.path().join("out.csv");
        write_snapshot(&ledger, &out).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), "Cliente;Saldo(R$);Vendedor");
        assert_eq!(lines.next().unwrap(), "JOAO;100,00;2");
        assert_eq!(lines.next().unwrap(), "PEDRO;50,00;");
    }

    #[test]
    fn test_excel_serial_to_date() {
        assert_eq!(excel_serial_to_date(45667.0), "10/01/2025");
    }
}
