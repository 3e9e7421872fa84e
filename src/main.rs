mod models;
mod storage;
mod types;

use std::fmt::Display;
use std::io::{stderr, stdin, BufRead};
use std::path::Path;

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing::warn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::models::TransactionKind;
use crate::storage::CashStore;
use crate::types::Amount;

const DEFAULT_LEDGER_PATH: &str = "transactions.txt";

fn main() -> Result<()> {
    //NOTE: Two optional positional arguments do not justify pulling in clap.
    let args: Vec<String> = std::env::args().collect();

    let path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_LEDGER_PATH);
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let mut store = CashStore::open(path)?;

    println!("cashbook: ledger file [{}]", store.path().display());
    println!("Type 'help' for commands.");
    render(&store);

    for line in stdin().lock().lines() {
        if !dispatch(&mut store, &line?) {
            break;
        }
    }

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: The shell owns stdout, so all logging goes to stderr.
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

/// Runs one command line. Returns false when the shell should exit.
fn dispatch(store: &mut CashStore, line: &str) -> bool {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some(&command) = words.first() else {
        return true;
    };

    match command {
        "deposit" => record(store, TransactionKind::Deposit, &words),
        "withdraw" => record(store, TransactionKind::Withdraw, &words),
        "delete" => delete(store, &words),
        "save" => save(store, &words),
        "reset" => match store.reset() {
            Ok(()) => render(store),
            Err(error) => report(error),
        },
        "list" => render(store),
        "help" => print_help(),
        "quit" | "exit" => return false,
        _ => println!("Unknown command [{command}]. Type 'help' for commands."),
    }

    true
}

fn record(store: &mut CashStore, kind: TransactionKind, words: &[&str]) {
    let Some(raw_amount) = words.get(1) else {
        println!("Usage: {} <amount> [note]", kind.as_str().to_lowercase());
        return;
    };

    let amount = match raw_amount.parse::<Amount>() {
        Ok(amount) => amount,
        Err(error) => return report(error),
    };
    let note = words[2..].join(" ");

    let outcome = match kind {
        TransactionKind::Deposit => store.deposit(amount, &note),
        TransactionKind::Withdraw => store.withdraw(amount, &note),
    };
    match outcome {
        Ok(_) => render(store),
        Err(error) => report(error),
    }
}

fn delete(store: &mut CashStore, words: &[&str]) {
    let Some(raw_index) = words.get(1) else {
        println!("Usage: delete <index>");
        return;
    };

    match raw_index.parse::<usize>() {
        Ok(index) => match store.remove(index) {
            Ok(removed) => {
                println!("Removed {removed}");
                render(store);
            }
            Err(error) => report(error),
        },
        Err(_) => println!("error: [{raw_index}] is not a record index"),
    }
}

fn save(store: &mut CashStore, words: &[&str]) {
    let destination = words.get(1).map(Path::new);

    match store.export_and_clear(destination) {
        Ok(()) => {
            if destination.is_some() {
                render(store);
            }
        }
        Err(error) => report(error),
    }
}

/// Prints every record with its delete index, then the balance line.
fn render(store: &CashStore) {
    for (index, record) in store.records().iter().enumerate() {
        println!("[{index}] {record}");
    }
    println!("Current Cash: ${:.2}", store.balance());
}

fn report(error: impl Display) {
    warn!("{error}");
    println!("error: {error}");
}

fn print_help() {
    println!("Commands:");
    println!("  deposit <amount> [note]   record money coming in");
    println!("  withdraw <amount> [note]  record money going out");
    println!("  delete <index>            drop one record by its listed index");
    println!("  save [path]               export every record to [path] and start fresh");
    println!("  reset                     drop every record");
    println!("  list                      show all records and the current balance");
    println!("  quit                      leave the shell");
}
