use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{Datelike, NaiveDate};

use crate::loader::Entry;

pub const PAGE_SIZE: usize = 10;
pub const TOP_DEBTORS: usize = 10;

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// User-selected dashboard filters. `salesperson: None` means "all",
/// `range: None` means no due-date window.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    pub salesperson: Option<String>,
    pub range: Option<(NaiveDate, NaiveDate)>,
}

impl Filter {
    /// The date window is inclusive at both ends. Rows with unknown due
    /// dates are excluded whenever a window is active.
    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(label) = &self.salesperson {
            if &entry.salesperson != label {
                return false;
            }
        }
        if let Some((start, end)) = self.range {
            match entry.due {
                Some(due) => {
                    if due < start || due > end {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    }
}

pub fn apply<'a>(entries: &'a [Entry], filter: &Filter) -> Vec<&'a Entry> {
    entries.iter().filter(|e| filter.matches(e)).collect()
}

// ---------------------------------------------------------------------------
// Aggregations — read-only projections over the filtered subset
// ---------------------------------------------------------------------------

pub struct Kpis {
    pub total_balance: f64,
    pub open_count: usize,
    pub distinct_clients: usize,
}

pub fn kpis(entries: &[&Entry]) -> Kpis {
    let distinct: HashSet<&str> = entries.iter().map(|e| e.client.as_str()).collect();
    Kpis {
        total_balance: entries.iter().map(|e| e.balance).sum(),
        open_count: entries.len(),
        distinct_clients: distinct.len(),
    }
}

/// Balance summed per calendar month of due date ("YYYY-MM"), chronological.
/// Rows with unknown due dates are excluded.
pub fn monthly_series(entries: &[&Entry]) -> Vec<(String, f64)> {
    let mut by_month: BTreeMap<String, f64> = BTreeMap::new();
    for e in entries {
        if let Some(due) = e.due {
            let key = format!("{:04}-{:02}", due.year(), due.month());
            *by_month.entry(key).or_default() += e.balance;
        }
    }
    by_month.into_iter().collect()
}

/// Sum balance by key, sorted descending by total. Keys are collected in
/// input order and the sort is stable, so ties keep first-seen order.
fn ranked_totals<'a>(
    entries: &[&'a Entry],
    key: impl Fn(&'a Entry) -> &'a str,
) -> Vec<(String, f64)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(String, f64)> = Vec::new();
    for e in entries {
        let k = key(e);
        match index.get(k) {
            Some(&i) => totals[i].1 += e.balance,
            None => {
                index.insert(k, totals.len());
                totals.push((k.to_string(), e.balance));
            }
        }
    }
    totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    totals
}

/// Top clients by summed outstanding balance, descending.
pub fn top_debtors(entries: &[&Entry]) -> Vec<(String, f64)> {
    let mut ranked = ranked_totals(entries, |e| e.client.as_str());
    ranked.truncate(TOP_DEBTORS);
    ranked
}

/// All salesperson labels by summed outstanding balance, descending.
pub fn salesperson_ranking(entries: &[&Entry]) -> Vec<(String, f64)> {
    ranked_totals(entries, |e| e.salesperson.as_str())
}

// ---------------------------------------------------------------------------
// Pagination — recent clients, date-descending
// ---------------------------------------------------------------------------

/// Total pages for the recent-clients table: at least 1, even when empty.
pub fn page_count(row_count: usize) -> usize {
    row_count.div_ceil(PAGE_SIZE).max(1)
}

/// Page numbers are 1-based and clamp to the valid range, never erroring.
pub fn clamp_page(page: usize, row_count: usize) -> usize {
    page.clamp(1, page_count(row_count))
}

/// One page of entries sorted by due date descending, unknown dates last.
/// Ties keep original order (stable sort).
pub fn recent_page<'a>(entries: &[&'a Entry], page: usize) -> Vec<&'a Entry> {
    let mut sorted: Vec<&Entry> = entries.to_vec();
    sorted.sort_by(|a, b| match (a.due, b.due) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    let page = clamp_page(page, sorted.len());
    sorted
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(client: &str, salesperson: &str, due: Option<(i32, u32, u32)>, balance: f64) -> Entry {
        Entry {
            client: client.to_string(),
            salesperson: salesperson.to_string(),
            due: due.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            balance,
        }
    }

    fn sample() -> Vec<Entry> {
        vec![
            entry("JOAO", "1", Some((2025, 1, 10)), 100.0),
            entry("MARIA", "2", Some((2025, 1, 20)), 250.0),
            entry("JOAO", "1", Some((2025, 2, 5)), 50.0),
            entry("PEDRO", "-", None, 75.0),
            entry("ANA", "2", Some((2025, 3, 1)), 300.0),
        ]
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let entries = sample();
        let filtered = apply(&entries, &Filter::default());
        assert_eq!(filtered.len(), entries.len());
    }

    #[test]
    fn test_filter_by_salesperson_exact() {
        let entries = sample();
        let filter = Filter {
            salesperson: Some("2".to_string()),
            range: None,
        };
        let filtered = apply(&entries, &filter);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|e| e.salesperson == "2"));
    }

    #[test]
    fn test_date_range_inclusive_both_ends() {
        let entries = sample();
        let filter = Filter {
            salesperson: None,
            range: Some((
                NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
                NaiveDate::from_ymd_opt(2025, 2, 5).unwrap(),
            )),
        };
        let filtered = apply(&entries, &filter);
        // Boundary rows retained; unknown-date PEDRO and out-of-range ANA excluded.
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|e| e.client != "PEDRO" && e.client != "ANA"));
    }

    #[test]
    fn test_kpis() {
        let entries = sample();
        let filtered = apply(&entries, &Filter::default());
        let k = kpis(&filtered);
        assert_eq!(k.open_count, 5);
        assert_eq!(k.distinct_clients, 4);
        assert!((k.total_balance - 775.0).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_series_chronological_excludes_unknown() {
        let entries = sample();
        let filtered = apply(&entries, &Filter::default());
        let series = monthly_series(&filtered);
        assert_eq!(
            series,
            vec![
                ("2025-01".to_string(), 350.0),
                ("2025-02".to_string(), 50.0),
                ("2025-03".to_string(), 300.0),
            ]
        );
    }

    #[test]
    fn test_top_debtors_descending() {
        let entries = sample();
        let filtered = apply(&entries, &Filter::default());
        let top = top_debtors(&filtered);
        assert_eq!(top[0], ("ANA".to_string(), 300.0));
        assert_eq!(top[1], ("MARIA".to_string(), 250.0));
        assert_eq!(top[2], ("JOAO".to_string(), 150.0));
        assert_eq!(top[3], ("PEDRO".to_string(), 75.0));
    }

    #[test]
    fn test_top_debtors_capped_at_ten() {
        let entries: Vec<Entry> = (0..25)
            .map(|i| entry(&format!("C{i:02}"), "1", None, i as f64))
            .collect();
        let filtered = apply(&entries, &Filter::default());
        assert_eq!(top_debtors(&filtered).len(), TOP_DEBTORS);
    }

    #[test]
    fn test_ranking_ties_keep_first_seen_order() {
        let entries = vec![
            entry("B", "2", None, 100.0),
            entry("A", "1", None, 100.0),
        ];
        let filtered = apply(&entries, &Filter::default());
        let ranking = salesperson_ranking(&filtered);
        assert_eq!(ranking[0].0, "2");
        assert_eq!(ranking[1].0, "1");
    }

    #[test]
    fn test_page_count_and_clamping() {
        assert_eq!(page_count(0), 1);
        assert_eq!(page_count(10), 1);
        assert_eq!(page_count(11), 2);
        assert_eq!(page_count(25), 3);
        assert_eq!(clamp_page(5, 25), 3);
        assert_eq!(clamp_page(0, 25), 1);
        assert_eq!(clamp_page(2, 25), 2);
        assert_eq!(clamp_page(1, 0), 1);
    }

    #[test]
    fn test_recent_page_date_descending_unknown_last() {
        let entries = sample();
        let filtered = apply(&entries, &Filter::default());
        let page = recent_page(&filtered, 1);
        let clients: Vec<&str> = page.iter().map(|e| e.client.as_str()).collect();
        assert_eq!(clients, vec!["ANA", "JOAO", "MARIA", "JOAO", "PEDRO"]);
    }

    #[test]
    fn test_recent_page_slicing() {
        let entries: Vec<Entry> = (0u32..25)
            .map(|i| entry(&format!("C{i:02}"), "1", Some((2025, 1, 1 + (i % 28))), 1.0))
            .collect();
        let filtered = apply(&entries, &Filter::default());
        assert_eq!(recent_page(&filtered, 1).len(), 10);
        assert_eq!(recent_page(&filtered, 3).len(), 5);
        // Out-of-range page clamps instead of erroring
        assert_eq!(recent_page(&filtered, 99).len(), 5);
    }
}
