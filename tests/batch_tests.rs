use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_batch_end_to_end() {
    let file = common::request_csv(&[
        "10000.00, 1994-06-15, 12",
        "10000.00, 1994-06-15, 24",
        "250000, 1960-01-01, 360",
    ])
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("loansim"));
    cmd.arg("--as-of").arg("2024-06-15").arg("batch").arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "row,monthlyPayment,totalAmount,totalInterest,annualInterestRatePercent",
        ))
        .stdout(predicate::str::contains("1,846.94,10163.24,163.24,3.00"))
        .stdout(predicate::str::contains("2,429.81,10315.49,315.49,3.00"))
        .stdout(predicate::str::contains("3,1193.54,429673.76,179673.76,4.00"));
}

#[test]
fn test_batch_reports_bad_rows_and_continues() {
    let file = common::request_csv(&[
        "10000.00, 1994-06-15, 12",
        "0, 1994-06-15, 12",
        "100, 1994-06-15, 0",
        "100, 2030-01-01, 12",
        ", 1994-06-15, 12",
        "not_a_number, 1994-06-15, 12",
        "10000.00, 1994-06-15, 24",
    ])
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("loansim"));
    cmd.arg("--as-of").arg("2024-06-15").arg("batch").arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains(
            "Error in row 2: Loan amount must be greater than zero",
        ))
        .stderr(predicate::str::contains(
            "Error in row 3: Payment term must be greater than zero",
        ))
        .stderr(predicate::str::contains(
            "Error in row 4: Birth date cannot be in the future",
        ))
        .stderr(predicate::str::contains("Error in row 5: Loan amount is required"))
        .stderr(predicate::str::contains("Error in row 6: CSV error"))
        .stdout(predicate::str::contains("1,846.94,10163.24,163.24,3.00"))
        .stdout(predicate::str::contains("7,429.81,10315.49,315.49,3.00"));
}

#[test]
fn test_batch_missing_input_file() {
    let mut cmd = Command::new(cargo_bin!("loansim"));
    cmd.arg("batch").arg("does/not/exist.csv");

    cmd.assert().failure();
}
