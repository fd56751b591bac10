use std::path::Path;

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;

/// Binary under test, with HOME pointed at the temp dir so settings
/// never touch the real user config.
fn cobranca(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cobranca").unwrap();
    cmd.env("HOME", home);
    cmd
}

fn write_fixtures(dir: &Path) -> Result<()> {
    std::fs::write(
        dir.join("geral.csv"),
        "Documento;Cliente;Venc.;Saldo(R$)\n\
         NF-1;JOÃO;15/01/2025;1.234,56\n\
         NF-2;joão ;20/01/2025;100,00\n\
         NF-3;MARIA;05/02/2025;500,00\n\
         NF-4;PEDRO;10/02/2025;75,00\n",
    )?;
    let lists = dir.join("vendedores");
    std::fs::create_dir_all(&lists)?;
    std::fs::write(lists.join("01_primeiro.csv"), "Cliente\nJOÃO\n")?;
    std::fs::write(lists.join("02_segundo.csv"), "Cliente\nMARIA\nJOAO\n")?;
    Ok(())
}

#[test]
fn reconcile_assigns_first_match_and_writes_snapshot() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_fixtures(dir.path())?;

    cobranca(dir.path())
        .arg("reconcile")
        .arg(dir.path().join("geral.csv"))
        .arg("--lists")
        .arg(dir.path().join("vendedores"))
        .arg("--output")
        .arg(dir.path().join("out.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Salesperson 1 (01_primeiro.csv): 2 rows"))
        .stdout(predicate::str::contains("Salesperson 2 (02_segundo.csv): 1 row"))
        .stdout(predicate::str::contains("3 of 4 rows assigned"));

    let snapshot = std::fs::read_to_string(dir.path().join("out.csv"))?;
    let mut lines = snapshot.lines();
    assert_eq!(lines.next().unwrap(), "Documento;Cliente;Venc.;Saldo(R$);Vendedor");
    // Client names come out normalized; PEDRO stays unassigned
    assert_eq!(lines.next().unwrap(), "NF-1;JOAO;15/01/2025;1.234,56;1");
    assert_eq!(lines.next().unwrap(), "NF-2;JOAO;20/01/2025;100,00;1");
    assert_eq!(lines.next().unwrap(), "NF-3;MARIA;05/02/2025;500,00;2");
    assert_eq!(lines.next().unwrap(), "NF-4;PEDRO;10/02/2025;75,00;");
    Ok(())
}

#[test]
fn reconcile_without_lists_leaves_everything_unassigned() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_fixtures(dir.path())?;

    cobranca(dir.path())
        .arg("reconcile")
        .arg(dir.path().join("geral.csv"))
        .arg("--lists")
        .arg(dir.path().join("no_such_dir"))
        .arg("--output")
        .arg(dir.path().join("out.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("0 of 4 rows assigned"));

    let snapshot = std::fs::read_to_string(dir.path().join("out.csv"))?;
    for line in snapshot.lines().skip(1) {
        assert!(line.ends_with(';'), "expected unassigned row, got: {line}");
    }
    Ok(())
}

#[test]
fn reconcile_missing_ledger_is_fatal() -> Result<()> {
    let dir = tempfile::tempdir()?;
    cobranca(dir.path())
        .arg("reconcile")
        .arg(dir.path().join("nope.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
    Ok(())
}

#[test]
fn reconcile_ledger_without_client_column_is_fatal() -> Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("geral.csv"), "Nome;Saldo\nfoo;1\n")?;
    cobranca(dir.path())
        .arg("reconcile")
        .arg(dir.path().join("geral.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cliente"));
    Ok(())
}

#[test]
fn status_summarizes_snapshot() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_fixtures(dir.path())?;

    cobranca(dir.path())
        .arg("reconcile")
        .arg(dir.path().join("geral.csv"))
        .arg("--lists")
        .arg(dir.path().join("vendedores"))
        .arg("--output")
        .arg(dir.path().join("out.csv"))
        .assert()
        .success();

    cobranca(dir.path())
        .arg("status")
        .arg(dir.path().join("out.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows:       4"))
        .stdout(predicate::str::contains("Clients:    3"))
        .stdout(predicate::str::contains("R$ 1.909,56"));
    Ok(())
}

#[test]
fn demo_writes_sample_data_that_reconciles() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let data = dir.path().join("data");

    cobranca(dir.path())
        .arg("demo")
        .arg("--dir")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample data ready"));

    // Demo stored the paths in settings, so a bare reconcile works
    cobranca(dir.path())
        .arg("reconcile")
        .assert()
        .success()
        .stdout(predicate::str::contains("Snapshot written"));

    assert!(data.join("geral_com_vendedor.csv").exists());
    Ok(())
}
