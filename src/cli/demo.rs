use std::path::Path;

use colored::Colorize;

use crate::error::Result;
use crate::settings::{load_settings, save_settings, shellexpand_path};

struct DemoRow {
    document: &'static str,
    client: &'static str,
    due: &'static str,
    balance: &'static str,
}

const LEDGER_ROWS: &[DemoRow] = &[
    DemoRow { document: "NF-1001", client: "joão pereira ", due: "05/01/2025", balance: "1.250,00" },
    DemoRow { document: "NF-1002", client: "Maria Souza", due: "12/01/2025", balance: "480,50" },
    DemoRow { document: "NF-1003", client: "AÇOUGUE DO ZÉ", due: "20/01/2025", balance: "2.310,75" },
    DemoRow { document: "NF-1004", client: "Padaria São João", due: "28/01/2025", balance: "156,90" },
    DemoRow { document: "NF-1005", client: "MERCADO BOM PREÇO", due: "03/02/2025", balance: "3.420,00" },
    DemoRow { document: "NF-1006", client: "joão pereira", due: "10/02/2025", balance: "890,25" },
    DemoRow { document: "NF-1007", client: "Construtora Horizonte", due: "14/02/2025", balance: "12.500,00" },
    DemoRow { document: "NF-1008", client: "José Armazéns", due: "21/02/2025", balance: "640,10" },
    DemoRow { document: "NF-1009", client: "Pedro Alves", due: "27/02/2025", balance: "75,00" },
    DemoRow { document: "NF-1010", client: "Farmácia Central", due: "06/03/2025", balance: "1.020,40" },
    DemoRow { document: "NF-1011", client: "Transportes Silva", due: "13/03/2025", balance: "5.675,80" },
    DemoRow { document: "NF-1012", client: "Maria Souza", due: "19/03/2025", balance: "730,00" },
    DemoRow { document: "NF-1013", client: "Oficina do Carlão", due: "a combinar", balance: "310,00" },
    DemoRow { document: "NF-1014", client: "AÇOUGUE DO ZÉ", due: "02/04/2025", balance: "1.890,30" },
    DemoRow { document: "NF-1015", client: "Construtora Horizonte", due: "09/04/2025", balance: "8.240,60" },
    DemoRow { document: "NF-1016", client: "Mercado Bom Preço", due: "16/04/2025", balance: "2.115,45" },
    DemoRow { document: "NF-1017", client: "joão pereira", due: "23/04/2025", balance: "455,00" },
    DemoRow { document: "NF-1018", client: "Farmácia Central", due: "30/04/2025", balance: "985,20" },
    DemoRow { document: "NF-1019", client: "Padaria São João", due: "07/05/2025", balance: "210,35" },
    DemoRow { document: "NF-1020", client: "Pedro Alves", due: "14/05/2025", balance: "1.340,00" },
];

const LISTS: &[(&str, &[&str])] = &[
    (
        "carteira_ana.csv",
        &["João Pereira", "Açougue do Zé", "Padaria São João", "Transportes Silva"],
    ),
    (
        "carteira_bruno.csv",
        // João also appears here; the earlier list keeps him.
        &["Maria Souza", "Mercado Bom Preço", "José Armazéns", "João Pereira"],
    ),
    (
        "carteira_carla.csv",
        &["Construtora Horizonte", "Farmácia Central"],
    ),
];

pub fn run(dir_arg: Option<&str>) -> Result<()> {
    let dir = shellexpand_path(dir_arg.unwrap_or("."));
    let base = Path::new(&dir);
    std::fs::create_dir_all(base)?;

    let ledger_path = base.join("geral.csv");
    let mut wtr = csv::WriterBuilder::new().delimiter(b';').from_path(&ledger_path)?;
    wtr.write_record(["Documento", "Cliente", "Venc.", "Saldo(R$)"])?;
    for row in LEDGER_ROWS {
        wtr.write_record([row.document, row.client, row.due, row.balance])?;
    }
    wtr.flush()?;
    println!(
        "Wrote {} ({} rows)",
        ledger_path.display().to_string().bold(),
        LEDGER_ROWS.len()
    );

    let lists_dir = base.join("vendedores");
    std::fs::create_dir_all(&lists_dir)?;
    for (filename, clients) in LISTS {
        let path = lists_dir.join(filename);
        let mut wtr = csv::WriterBuilder::new().delimiter(b';').from_path(&path)?;
        wtr.write_record(["Cliente"])?;
        for client in *clients {
            wtr.write_record([*client])?;
        }
        wtr.flush()?;
        println!(
            "Wrote {} ({} clients)",
            path.display().to_string().bold(),
            clients.len()
        );
    }

    let mut settings = load_settings();
    settings.ledger_path = ledger_path.to_string_lossy().to_string();
    settings.lists_dir = lists_dir.to_string_lossy().to_string();
    settings.snapshot_path = base.join("geral_com_vendedor.csv").to_string_lossy().to_string();
    save_settings(&settings)?;

    println!();
    println!("{}", "Sample data ready. Next:".green().bold());
    println!("  cobranca reconcile");
    println!("  cobranca dashboard");
    Ok(())
}
