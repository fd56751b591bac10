use std::path::Path;

use colored::Colorize;

use crate::assign;
use crate::error::Result;
use crate::ledger;
use crate::settings::{load_settings, save_settings, shellexpand_path};

pub fn run(ledger_arg: Option<&str>, lists_arg: Option<&str>, output_arg: Option<&str>) -> Result<()> {
    let mut settings = load_settings();
    let ledger_path = shellexpand_path(ledger_arg.unwrap_or(&settings.ledger_path));
    let lists_dir = shellexpand_path(lists_arg.unwrap_or(&settings.lists_dir));
    let output_path = shellexpand_path(output_arg.unwrap_or(&settings.snapshot_path));

    let mut ledger = ledger::read_ledger(Path::new(&ledger_path))?;
    println!(
        "Loaded {} ledger rows from {}",
        ledger.rows.len(),
        ledger_path.bold()
    );

    let lists = assign::load_client_lists(Path::new(&lists_dir))?;
    if lists.is_empty() {
        println!(
            "{}",
            format!("No salesperson lists found in {lists_dir} — every row stays unassigned.")
                .yellow()
        );
    }

    let counts = assign::assign_salespeople(&mut ledger, &lists);
    for c in &counts {
        let noun = if c.assigned == 1 { "row" } else { "rows" };
        println!(
            "Salesperson {} ({}): {} {} assigned",
            c.salesperson,
            c.filename,
            c.assigned.to_string().bold(),
            noun
        );
    }

    ledger::write_snapshot(&ledger, Path::new(&output_path))?;

    let assigned: usize = counts.iter().map(|c| c.assigned).sum();
    println!(
        "{} {} of {} rows assigned. Snapshot written to {}",
        "Done.".green().bold(),
        assigned,
        ledger.rows.len(),
        output_path.bold()
    );

    // Remember the resolved paths so dashboard/status find the snapshot.
    settings.ledger_path = ledger_path;
    settings.lists_dir = lists_dir;
    settings.snapshot_path = output_path;
    save_settings(&settings)?;
    Ok(())
}
