use std::env;
use std::fs::{create_dir_all, File};
use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Duration, Local};
use rand::seq::IndexedRandom;
use rand::{Rng, RngExt};
use rust_decimal::Decimal;

const PROBABILITY_DEPOSIT: f64 = 0.55;

const DEPOSIT_NOTES: [&str; 5] = ["paycheck", "refund", "birthday gift", "sold couch", "tax return"];
const WITHDRAW_NOTES: [&str; 6] = ["groceries", "rent", "coffee", "gas", "dinner out", "utilities"];

struct GeneratorConfig {
    num_records: usize,
    output_path: String,
}

impl GeneratorConfig {
    fn from_args() -> Self {
        let args: Vec<String> = env::args().collect();
        let num_records = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(50);
        let output_path = args.get(2).cloned().unwrap_or_else(|| "transactions.txt".to_string());

        Self { num_records, output_path }
    }
}

fn main() -> io::Result<()> {
    let config = GeneratorConfig::from_args();

    println!(
        "Generating {} records in {}...",
        config.num_records, config.output_path
    );

    if let Some(parent) = Path::new(&config.output_path).parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }

    let file = File::create(&config.output_path)?;
    let mut writer = io::BufWriter::new(file);

    let mut rng = rand::rng();
    let mut moment: DateTime<Local> = Local::now() - Duration::days(config.num_records as i64 / 2 + 1);

    for _ in 0..config.num_records {
        moment = moment + Duration::minutes(rng.random_range(45..=2_000));
        let timestamp = moment.format("%Y-%m-%d %H:%M:%S").to_string();

        if rng.random_bool(PROBABILITY_DEPOSIT) {
            generate_deposit(&mut writer, &mut rng, &timestamp)?;
        } else {
            generate_withdrawal(&mut writer, &mut rng, &timestamp)?;
        }
    }

    writer.flush()?;
    println!("Generation complete.");

    Ok(())
}

/// Renders a decimal the way the shell writes amounts: shortest form, with
/// a trailing `.0` on whole numbers.
fn render_amount(amount: Decimal) -> String {
    let shortest = amount.normalize();
    if shortest.is_integer() {
        format!("{shortest}.0")
    } else {
        shortest.to_string()
    }
}

fn generate_deposit<W: Write, R: Rng>(writer: &mut W, rng: &mut R, timestamp: &str) -> io::Result<()> {
    let note = DEPOSIT_NOTES.choose(rng).unwrap();
    let amount = Decimal::new(rng.random_range(500..=300_000), 2);

    writeln!(writer, "{} - Deposit ({}): {}", timestamp, note, render_amount(amount))
}

fn generate_withdrawal<W: Write, R: Rng>(writer: &mut W, rng: &mut R, timestamp: &str) -> io::Result<()> {
    let note = WITHDRAW_NOTES.choose(rng).unwrap();
    let amount = -Decimal::new(rng.random_range(100..=20_000), 2);

    writeln!(writer, "{} - Withdraw ({}): {}", timestamp, note, render_amount(amount))
}
