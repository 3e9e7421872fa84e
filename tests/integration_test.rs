use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use anyhow::{anyhow, Result};
use chrono::{Duration, Local};
use rand::seq::IndexedRandom;
use rand::RngExt;
use rust_decimal::Decimal;

/// Runs the shell in `dir` with `commands` piped to stdin and waits for exit.
fn run_shell(dir: &Path, commands: &str) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_cashbook");

    let mut child = Command::new(binary_path)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let stdin = child
        .stdin
        .as_mut()
        .ok_or_else(|| anyhow!("shell stdin was not piped"))?;
    // The shell exits without reading stdin when it refuses its ledger file,
    // so a broken pipe here is not a failure.
    let _ = stdin.write_all(commands.as_bytes());

    Ok(child.wait_with_output()?)
}

fn read_ledger(dir: &Path) -> Result<String> {
    Ok(fs::read_to_string(dir.join("transactions.txt"))?)
}

fn last_balance_line(stdout: &str) -> Option<&str> {
    stdout.lines().filter(|line| line.starts_with("Current Cash:")).last()
}

fn is_timestamp(text: &str) -> bool {
    text.len() == 19
        && text.char_indices().all(|(position, character)| match position {
            4 | 7 => character == '-',
            10 => character == ' ',
            13 | 16 => character == ':',
            _ => character.is_ascii_digit(),
        })
}

#[test]
fn test_shell_records_deposits_and_withdrawals() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let output = run_shell(
        dir.path(),
        "deposit 100.00 paycheck\nwithdraw 25.50 groceries\nquit\n",
    )?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Current Cash: $100.00"));
    assert_eq!(last_balance_line(&stdout), Some("Current Cash: $74.50"));

    let written = read_ledger(dir.path())?;
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(is_timestamp(&lines[0][..19]));
    assert_eq!(&lines[0][19..], " - Deposit (paycheck): 100.0");
    assert_eq!(&lines[1][19..], " - Withdraw (groceries): -25.5");

    Ok(())
}

#[test]
fn test_shell_reloads_the_ledger_between_runs() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let first = run_shell(
        dir.path(),
        "deposit 100.00 paycheck\nwithdraw 25.50 groceries\nquit\n",
    )?;
    assert!(first.status.success());

    let second = run_shell(dir.path(), "quit\n")?;
    assert!(second.status.success());

    let stdout = String::from_utf8(second.stdout)?;
    assert!(stdout.contains("[0] "));
    assert!(stdout.contains("[1] "));
    assert!(stdout.contains("Deposit (paycheck): 100.0"));
    assert!(stdout.contains("Withdraw (groceries): -25.5"));
    assert_eq!(last_balance_line(&stdout), Some("Current Cash: $74.50"));

    Ok(())
}

#[test]
fn test_shell_loads_a_randomly_generated_ledger() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let notes = ["paycheck", "groceries", "rent", "refund"];
    let mut rng = rand::rng();
    let mut moment = Local::now() - Duration::days(30);
    let mut total_cents: i64 = 0;
    let mut text = String::new();

    for _ in 0..25 {
        moment = moment + Duration::minutes(rng.random_range(45..=2_000));
        let note = notes.choose(&mut rng).unwrap();

        let (kind, cents) = if rng.random_bool(0.5) {
            ("Deposit", rng.random_range(1..=30_000))
        } else {
            ("Withdraw", -rng.random_range(1..=30_000))
        };
        total_cents += cents;

        let amount = Decimal::new(cents, 2).normalize();
        let rendered = if amount.is_integer() { format!("{amount}.0") } else { amount.to_string() };

        text.push_str(&format!(
            "{} - {} ({}): {}\n",
            moment.format("%Y-%m-%d %H:%M:%S"),
            kind,
            note,
            rendered
        ));
    }

    fs::write(dir.path().join("transactions.txt"), &text)?;

    let output = run_shell(dir.path(), "quit\n")?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("[24] "));

    let expected = format!("Current Cash: ${}", Decimal::new(total_cents, 2));
    assert_eq!(last_balance_line(&stdout), Some(expected.as_str()));

    Ok(())
}

#[test]
fn test_shell_delete_drops_one_record() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let output = run_shell(
        dir.path(),
        "deposit 10 first\ndeposit 20 second\ndeposit 40 third\ndelete 1\nquit\n",
    )?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Removed "));
    assert_eq!(last_balance_line(&stdout), Some("Current Cash: $50.00"));

    let written = read_ledger(dir.path())?;
    assert_eq!(written.lines().count(), 2);
    assert!(!written.contains("second"));

    Ok(())
}

#[test]
fn test_shell_save_exports_and_starts_fresh() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let output = run_shell(
        dir.path(),
        "deposit 100.00 paycheck\nwithdraw 25.50 groceries\nsave backup.txt\nquit\n",
    )?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Current Cash: $74.50"));
    assert_eq!(last_balance_line(&stdout), Some("Current Cash: $0.00"));

    let exported = fs::read_to_string(dir.path().join("backup.txt"))?;
    assert_eq!(exported.lines().count(), 2);
    assert!(exported.contains("Deposit (paycheck): 100.0"));
    assert!(exported.contains("Withdraw (groceries): -25.5"));

    assert_eq!(read_ledger(dir.path())?, "");

    Ok(())
}

#[test]
fn test_shell_save_without_destination_changes_nothing() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let output = run_shell(dir.path(), "deposit 100.00 paycheck\nsave\nquit\n")?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(last_balance_line(&stdout), Some("Current Cash: $100.00"));
    assert_eq!(read_ledger(dir.path())?.lines().count(), 1);

    Ok(())
}

#[test]
fn test_shell_reset_clears_everything() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let output = run_shell(dir.path(), "deposit 100.00 paycheck\nreset\nquit\n")?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(last_balance_line(&stdout), Some("Current Cash: $0.00"));
    assert_eq!(read_ledger(dir.path())?, "");

    Ok(())
}

#[test]
fn test_shell_rejects_a_bad_amount() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let output = run_shell(dir.path(), "deposit lots\nquit\n")?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("error:"));
    assert!(!dir.path().join("transactions.txt").exists());

    Ok(())
}

#[test]
fn test_shell_delete_out_of_range_reports_and_keeps_state() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let output = run_shell(dir.path(), "deposit 10 only\ndelete 7\nquit\n")?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("error:"));
    assert_eq!(last_balance_line(&stdout), Some("Current Cash: $10.00"));
    assert_eq!(read_ledger(dir.path())?.lines().count(), 1);

    Ok(())
}

#[test]
fn test_shell_refuses_a_malformed_ledger_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("transactions.txt"), "not a ledger line\n")?;

    let output = run_shell(dir.path(), "quit\n")?;
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Malformed line [1]"));

    Ok(())
}

#[test]
fn test_shell_reports_unknown_commands() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let output = run_shell(dir.path(), "flip\nquit\n")?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Unknown command [flip]"));

    Ok(())
}
