use std::collections::HashMap;
use std::path::Path;

use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::{money, number};
use crate::loader::Snapshot;
use crate::settings::{load_settings, shellexpand_path};
use crate::views;

pub fn run(file_arg: Option<&str>) -> Result<()> {
    let settings = load_settings();
    let path = shellexpand_path(file_arg.unwrap_or(&settings.snapshot_path));

    println!("Snapshot:   {path}");
    let snapshot = Snapshot::load(Path::new(&path))?;

    let all = views::apply(&snapshot.entries, &views::Filter::default());
    let kpis = views::kpis(&all);

    println!("Rows:       {}", number(kpis.open_count as i64));
    println!("Clients:    {}", number(kpis.distinct_clients as i64));
    println!("Total due:  {}", money(kpis.total_balance));
    println!();

    let mut row_counts: HashMap<&str, usize> = HashMap::new();
    for e in &all {
        *row_counts.entry(e.salesperson.as_str()).or_default() += 1;
    }

    let mut table = Table::new();
    table.set_header(vec!["Vendedor", "Rows", "Outstanding"]);
    for (label, total) in views::salesperson_ranking(&all) {
        table.add_row(vec![
            Cell::new(&label),
            Cell::new(number(*row_counts.get(label.as_str()).unwrap_or(&0) as i64)),
            Cell::new(money(total)),
        ]);
    }
    println!("{table}");

    Ok(())
}
