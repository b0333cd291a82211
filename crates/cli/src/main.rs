use std::{error::Error, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use ledger::{MoneyCents, TransactionKind};

mod display;
mod store;

#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Command line personal finance ledger")]
struct Cli {
    /// Ledger file (also read from `TALLY_LEDGER`).
    #[arg(long, env = "TALLY_LEDGER", default_value = "./tally.json")]
    ledger_file: PathBuf,

    /// Diagnostics level (also read from `TALLY_LOG`).
    #[arg(long, env = "TALLY_LOG", default_value = "warn")]
    log: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a new transaction.
    Add(AddArgs),
    /// List every recorded transaction, oldest first.
    View,
    /// Show total income, total expenses and net balance.
    Summary,
}

#[derive(Args, Debug)]
struct AddArgs {
    /// Transaction kind: income or expense.
    #[arg(value_parser = parse_kind)]
    kind: TransactionKind,

    /// Amount, e.g. 100.50.
    #[arg(value_parser = parse_amount, allow_hyphen_values = true)]
    amount: MoneyCents,

    /// Category label, e.g. Groceries.
    category: String,

    /// Optional note.
    note: Option<String>,
}

fn parse_kind(raw: &str) -> Result<TransactionKind, String> {
    TransactionKind::try_from(raw).map_err(|err| err.to_string())
}

fn parse_amount(raw: &str) -> Result<MoneyCents, String> {
    raw.parse::<MoneyCents>().map_err(|err| err.to_string())
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(format!("tally={level},ledger={level}", level = cli.log))
        .init();

    let mut book = store::load(&cli.ledger_file)?;

    match cli.command {
        Command::Add(args) => {
            let tx = book.record(args.kind, args.amount, &args.category, args.note)?;
            tracing::info!(id = tx.id, "transaction recorded");
            println!("Recorded:");
            println!("{}", display::transaction_line(tx));
            store::save(&cli.ledger_file, &book)?;
        }
        Command::View => display::print_transactions(book.transactions()),
        Command::Summary => display::print_summary(&book.summary()),
    }

    Ok(())
}
