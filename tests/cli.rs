//! End-to-end tests of the `expenses` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", data_dir.path())
        .env_remove("EXPENSES_LOG");
    cmd
}

fn add(data_dir: &TempDir, args: &[&str]) {
    expenses(data_dir).arg("add").args(args).assert().success();
}

#[test]
fn add_then_list() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, &["12.50", "Food", "--date", "2024-01-05", "-m", "Lunch"]);

    expenses(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("$12.50"))
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("1 expense(s)"));

    assert!(data_dir.path().join("expenses.json").exists());
}

#[test]
fn negative_amount_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    expenses(&data_dir)
        .args(["add", "-5", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative"));

    expenses(&data_dir)
        .args(["add", "$-5", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative"));

    expenses(&data_dir)
        .args(["add", "x12", "Food"])
        .assert()
        .failure();

    expenses(&data_dir)
        .args(["report", "total"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$0.00 across 0 expense(s)"));
}

#[test]
fn invalid_date_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    expenses(&data_dir)
        .args(["add", "10", "Food", "--date", "2024-02-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn reports_match_scenario() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, &["12.50", "Food", "--date", "2024-01-05"]);
    add(&data_dir, &["7.50", "Food", "--date", "2024-02-10"]);
    add(&data_dir, &["20.00", "Transport", "--date", "2024-02-15"]);

    expenses(&data_dir)
        .args(["report", "category"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$20.00"))
        .stdout(predicate::str::contains("Transport"));

    expenses(&data_dir)
        .args(["report", "period", "--granularity", "month"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01"))
        .stdout(predicate::str::contains("$27.50"));

    expenses(&data_dir)
        .args(["report", "total"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$40.00 across 3 expense(s)"));

    expenses(&data_dir)
        .args(["report", "category", "--name", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total spent on 'food': $20.00"));
}

#[test]
fn edit_and_delete_by_short_id() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, &["12.50", "Food", "--date", "2024-01-05"]);

    let json = std::fs::read_to_string(data_dir.path().join("expenses.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let uuid = value["expenses"][0]["id"].as_str().unwrap().to_string();
    let short = format!("exp-{}", &uuid[..8]);

    expenses(&data_dir)
        .args(["edit", &short, "--amount", "15", "--category", "Groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$15.00"))
        .stdout(predicate::str::contains("Groceries"));

    expenses(&data_dir)
        .args(["show", &uuid])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"));

    expenses(&data_dir)
        .args(["delete", &short])
        .assert()
        .success();

    expenses(&data_dir)
        .args(["delete", &short])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn corrupt_file_is_reported() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(data_dir.path().join("expenses.json"), "not json").unwrap();

    expenses(&data_dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupt data"));
}

#[test]
fn init_with_samples_then_chart() {
    let data_dir = TempDir::new().unwrap();

    expenses(&data_dir)
        .args(["init", "--sample"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 4 sample expenses."));
    assert!(data_dir.path().join("config.json").exists());

    expenses(&data_dir)
        .args(["chart", "pie"])
        .assert()
        .success();
    let svg = std::fs::read_to_string(data_dir.path().join("charts").join("pie.svg")).unwrap();
    assert_eq!(svg.matches("class=\"slice\"").count(), 4);

    let trend = data_dir.path().join("trend.svg");
    expenses(&data_dir)
        .args(["chart", "trend", "--output"])
        .arg(&trend)
        .assert()
        .success();
    assert!(trend.exists());
}

#[test]
fn chart_of_empty_store_fails() {
    let data_dir = TempDir::new().unwrap();

    expenses(&data_dir)
        .args(["chart", "category"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to plot"));
}

#[test]
fn export_csv_to_stdout() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, &["12.50", "Food", "--date", "2024-01-05"]);

    expenses(&data_dir)
        .args(["export", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "id,date,category,amount,description\n",
        ))
        .stdout(predicate::str::contains(",2024-01-05,Food,12.50,"));
}

#[test]
fn history_lists_mutations() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, &["12.50", "Food", "--date", "2024-01-05"]);

    expenses(&data_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE"));
}

#[test]
fn data_dir_flag_overrides_environment() {
    let env_dir = TempDir::new().unwrap();
    let flag_dir = TempDir::new().unwrap();

    expenses(&env_dir)
        .arg("--data-dir")
        .arg(flag_dir.path())
        .args(["add", "3", "Coffee"])
        .assert()
        .success();

    assert!(flag_dir.path().join("expenses.json").exists());
    assert!(!env_dir.path().join("expenses.json").exists());
}
