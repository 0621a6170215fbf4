//! End-to-end tests for the cleaning pipeline over policy tables on disk.
//!
//! These tests ensure that:
//! 1. A CSV source loads and passes every cleaning step
//! 2. Row-level rules hold on the cleaned output
//! 3. Long-tail brands and models collapse to exactly the configured sizes
//! 4. The command-line binary writes the table and its JSON report

use std::collections::HashSet;
use std::io::Write;
use std::process::Command;

use insurance_cleaner::io::TableLoader;
use insurance_cleaner::{CleaningConfig, CleaningError, CleaningReport, TableCleaner};
use polars::prelude::*;
use tempfile::{Builder, NamedTempFile, TempDir};

const HEADER: &str = "Unique number,Citizenship,Gender,Loss_amount,Accident_region,Age,Driving_experience,Vehicle_type,Year_of_manufacture,Insurance_period,Privileges,Color,Brand,Model,City";

// ==================== Helper Functions ====================

fn write_csv(rows: &[String]) -> NamedTempFile {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file.flush().unwrap();
    file
}

fn scenario_rows() -> Vec<String> {
    [
        "1,KZ,M,0,,20,25,Легковые автомобили,2010-01-01,01.01.2024-31.12.2024,,белый,Toyota,Camry,Алматы",
        "2,KZ,F,0,,20,5,Легковые автомобили,2015-03-10,01.01.2024-31.03.2024,,\" Темно-Серый \",Лада,Granta,\"Алматы, мкр. Самал\"",
        "3,KZ,M,0,,40,10,Прицеп к грузовой а/м,2012-01-01,01.01.2024-31.03.2024,,белый,Kia,Rio,Тараз",
        "4,KZ,F,120.5,Астана,38,20,Грузовые автомобили,unknown,15.06.2023-14.06.2024,Инвалид 1 группы,розовый,Lada,.,Nowhereville",
        "5,RU,M,0,,55,30,\"Автобусы, свыше 16 п/м\",2000-07-01,01.01.2024,,,,Sprinter,",
    ]
    .iter()
    .map(|row| row.to_string())
    .collect()
}

fn clean_scenario() -> DataFrame {
    let file = write_csv(&scenario_rows());
    TableCleaner::from_path(file.path()).unwrap().clean().unwrap()
}

fn str_column(df: &DataFrame, name: &str) -> Vec<Option<String>> {
    df.column(name)
        .unwrap()
        .cast(&DataType::String)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect()
}

fn i64_column(df: &DataFrame, name: &str) -> Vec<Option<i64>> {
    df.column(name)
        .unwrap()
        .cast(&DataType::Int64)
        .unwrap()
        .i64()
        .unwrap()
        .into_iter()
        .collect()
}

// ==================== Scenario Tests ====================

#[test]
fn test_rows_removed_by_experience_and_trailer_rules() {
    let df = clean_scenario();
    // policy 1 (experience above age) and policy 3 (trailer) are gone
    assert_eq!(df.height(), 3);
}

#[test]
fn test_experience_within_age() {
    let df = clean_scenario();
    let ages = i64_column(&df, "Age");
    let experience = i64_column(&df, "Driving_experience");

    assert_eq!(experience, vec![Some(2), Some(20), Some(30)]);
    for (age, exp) in ages.into_iter().zip(experience) {
        let (age, exp) = (age.unwrap(), exp.unwrap());
        assert!(0 <= exp && exp <= age);
    }
}

#[test]
fn test_vehicle_types_are_canonical() {
    let df = clean_scenario();
    let canonical = ["Легковые автомобили", "Мотоциклы", "Грузовые", "Автобусы"];
    for value in str_column(&df, "Vehicle_type").into_iter().flatten() {
        assert!(canonical.contains(&value.as_str()), "{value}");
    }
}

#[test]
fn test_derived_columns() {
    let df = clean_scenario();

    assert_eq!(i64_column(&df, "Car_age"), vec![Some(10), None, Some(25)]);
    assert_eq!(i64_column(&df, "Insurance_months"), vec![Some(3), Some(12), None]);

    for dropped in [
        "Unique number",
        "Citizenship",
        "Gender",
        "Loss_amount",
        "Accident_region",
        "Year_of_manufacture",
        "Insurance_period",
        "start_date",
        "end_date",
        "City",
    ] {
        assert!(df.column(dropped).is_err(), "{dropped} should be dropped");
    }
}

#[test]
fn test_categorical_columns() {
    let df = clean_scenario();

    assert_eq!(
        str_column(&df, "Privileges"),
        vec![
            Some("Не инвалид".to_string()),
            Some("Инвалид 1 группы".to_string()),
            Some("Не инвалид".to_string())
        ]
    );
    assert_eq!(
        str_column(&df, "Color"),
        vec![
            Some("Серый".to_string()),
            Some("Прочие".to_string()),
            Some("Прочие".to_string())
        ]
    );
    assert_eq!(
        str_column(&df, "Brand"),
        vec![
            Some("Lada".to_string()),
            Some("Lada".to_string()),
            Some("Other".to_string())
        ]
    );
    assert_eq!(
        str_column(&df, "Model"),
        vec![
            Some("Granta".to_string()),
            Some("Unknown".to_string()),
            Some("Sprinter".to_string())
        ]
    );
    assert_eq!(
        str_column(&df, "Region"),
        vec![
            Some("Алматинская область".to_string()),
            Some("Unknown".to_string()),
            Some("Unknown".to_string())
        ]
    );
}

#[test]
fn test_repeated_runs_are_identical() {
    let file = write_csv(&scenario_rows());
    let first = TableCleaner::from_path(file.path()).unwrap().clean().unwrap();
    let second = TableCleaner::from_path(file.path()).unwrap().clean().unwrap();
    assert!(first.equals_missing(&second));
}

#[test]
fn test_unsupported_source_is_load_error() {
    let result = TableCleaner::from_path("data_insurance.xlsx");
    assert!(matches!(result, Err(CleaningError::Load { .. })));
}

// ==================== Top-N Collapsing ====================

#[test]
fn test_exactly_top_brands_and_models_keep_names() {
    // brand k appears k + 1 times; models cycle through 60 names
    let mut rows = Vec::new();
    let mut id = 0;
    for k in 0..45 {
        for _ in 0..=k {
            id += 1;
            rows.push(format!(
                "{id},KZ,M,0,,40,10,Легковые автомобили,2015-01-01,01.01.2024-31.12.2024,,белый,Brand{k},Model{},Алматы",
                id % 60
            ));
        }
    }
    let file = write_csv(&rows);
    let df = TableCleaner::from_path(file.path()).unwrap().clean().unwrap();
    assert_eq!(df.height(), rows.len());

    let distinct = |name: &str| -> HashSet<String> {
        str_column(&df, name)
            .into_iter()
            .flatten()
            .filter(|v| v != "Other")
            .collect()
    };

    let brands = distinct("Brand");
    assert_eq!(brands.len(), 37);
    assert!(brands.contains("Brand44"));
    assert!(!brands.contains("Brand7"));
    assert_eq!(distinct("Model").len(), 50);
}

#[test]
fn test_configured_top_sizes() {
    let file = write_csv(&scenario_rows());
    let config = CleaningConfig::from_toml_str("top_brands = 1\ntop_models = 1\n").unwrap();
    let df = TableCleaner::from_path_with_config(file.path(), config)
        .unwrap()
        .clean()
        .unwrap();

    let models: HashSet<String> = str_column(&df, "Model").into_iter().flatten().collect();
    assert_eq!(models.len(), 2);
    assert!(models.contains("Other"));
}

// ==================== Command Line ====================

#[test]
fn test_cli_writes_table_and_report() {
    let input = write_csv(&scenario_rows());
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("cleaned.parquet");
    let report = dir.path().join("report.json");

    let status = Command::new(env!("CARGO_BIN_EXE_clean_insurance"))
        .arg(input.path())
        .arg("-o")
        .arg(&output)
        .args(["--format", "parquet"])
        .arg("--report")
        .arg(&report)
        .status()
        .unwrap();
    assert!(status.success());

    let cleaned = TableLoader::load(&output).unwrap();
    assert_eq!(cleaned.height(), 3);

    let summary: CleaningReport =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(summary.input_rows, 5);
    assert_eq!(summary.output_rows, 3);
    assert_eq!(summary.steps.len(), 9);
}

#[test]
fn test_cli_fails_on_missing_input() {
    let status = Command::new(env!("CARGO_BIN_EXE_clean_insurance"))
        .arg("/nonexistent/policies.csv")
        .status()
        .unwrap();
    assert!(!status.success());
}

#[test]
fn test_cli_log_filter_from_environment() {
    let input = write_csv(&scenario_rows());
    let dir = TempDir::new().unwrap();
    let run = |filter: &str| {
        let output = Command::new(env!("CARGO_BIN_EXE_clean_insurance"))
            .arg(input.path())
            .arg("-o")
            .arg(dir.path().join("cleaned.csv"))
            .env("RUST_LOG", filter)
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8_lossy(&output.stdout).into_owned()
    };

    // module-level directive enables the library's debug records
    let verbose = run("insurance_cleaner=debug");
    assert!(verbose.contains("reading CSV"), "{verbose}");

    let quiet = run("warn");
    assert!(!quiet.contains("reading CSV"));
    assert!(!quiet.contains("cleaning finished"));
}
