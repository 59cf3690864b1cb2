//! End-to-end tests for the `studio` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CSV: &str = "\
id,name,industry,stage,revenue,burn,runway,cac,ltv,users,churn,growthRate,riskLevel,nextSteps
a,Orbit,SpaceTech,Seed,2000,3000,4.5,10,25,12,1.5,-2,high,Find a launch partner|Cut burn
b,Brokenco,SaaS,MVP,1000,500,9,0,100,40,2,5,medium,
";

fn studio(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("studio").unwrap();
    // keep the developer's own config out of the way
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env_remove("STUDIO_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// SUMMARY
// =============================================================================

#[test]
fn summary_of_sample_roster() {
    let home = TempDir::new().unwrap();
    studio(&home)
        .args(["--format", "minimal", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Startups=3"))
        .stdout(predicate::str::contains("Total Revenue=$65500"))
        .stdout(predicate::str::contains("Total Users=6000"))
        .stdout(predicate::str::contains("Avg Growth=14.6%"))
        .stdout(predicate::str::contains("Industries=3"));
}

#[test]
fn summary_as_json() {
    let home = TempDir::new().unwrap();
    let output = studio(&home).args(["-f", "json", "summary"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["startup_count"], 3);
    assert_eq!(json["total_users"], 6000);
    assert_eq!(json["distinct_industry_count"], 3);
}

// =============================================================================
// CARDS
// =============================================================================

#[test]
fn cards_show_every_sample_startup() {
    let home = TempDir::new().unwrap();
    studio(&home)
        .arg("cards")
        .assert()
        .success()
        .stdout(predicate::str::contains("ScaleLens"))
        .stdout(predicate::str::contains("12.0x"))
        .stdout(predicate::str::contains("13.7x"))
        .stdout(predicate::str::contains("20.0x"));
}

#[test]
fn cards_degrade_bad_record() {
    let home = TempDir::new().unwrap();
    let data = write(&home, "startups.csv", CSV);

    studio(&home)
        .args(["cards", "--input"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Orbit"))
        .stdout(predicate::str::contains("2.5x"))
        .stdout(predicate::str::contains("metrics unavailable"))
        .stderr(predicate::str::contains("b: metrics unavailable"));
}

// =============================================================================
// SHOW
// =============================================================================

#[test]
fn show_lists_next_steps() {
    let home = TempDir::new().unwrap();
    studio(&home)
        .args(["show", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AgroTech"))
        .stdout(predicate::str::contains("18 months"))
        .stdout(predicate::str::contains("3. Hire VP of Sales and 2 AEs"));
}

#[test]
fn show_unknown_id_fails() {
    let home = TempDir::new().unwrap();
    studio(&home)
        .args(["show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown startup '42'"));
}

#[test]
fn show_json_from_csv() {
    let home = TempDir::new().unwrap();
    let data = write(&home, "startups.csv", CSV);

    let output = studio(&home)
        .args(["--format", "json", "show", "a", "--input"])
        .arg(&data)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["record"]["name"], "Orbit");
    assert_eq!(json["view"]["runway_health_tier"], "critical");
    assert_eq!(json["record"]["nextSteps"][1], "Cut burn");
}

// =============================================================================
// BUCKETS
// =============================================================================

#[test]
fn buckets_by_risk() {
    let home = TempDir::new().unwrap();
    studio(&home)
        .args(["--format", "csv", "buckets", "--by", "risk"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("bucket,count,revenue,weight,users,average_growth"))
        .stdout(predicate::str::contains("low,2,$53500"))
        .stdout(predicate::str::contains("medium,1,$12000"));
}

// =============================================================================
// INPUT AND CONFIG
// =============================================================================

#[test]
fn unsupported_input_fails() {
    let home = TempDir::new().unwrap();
    let data = write(&home, "startups.txt", "");

    studio(&home)
        .args(["summary", "--input"])
        .arg(&data)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported input file"));
}

#[test]
fn config_file_sets_data_and_format() {
    let home = TempDir::new().unwrap();
    let data = write(&home, "startups.csv", CSV);
    let config = write(
        &home,
        "studio.toml",
        &format!("data_file = {:?}\nformat = \"minimal\"\n", data.display().to_string()),
    );

    studio(&home)
        .arg("--config")
        .arg(&config)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Startups=2"))
        .stdout(predicate::str::contains("Total Revenue=$3000"));
}

#[test]
fn missing_config_file_fails() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("typo.toml");

    studio(&home)
        .arg("--config")
        .arg(&missing)
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));

    studio(&home)
        .env("STUDIO_CONFIG", &missing)
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("typo.toml: file not found"));
}

#[test]
fn config_init_then_show() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("nested").join("studio.toml");

    studio(&home)
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .success();
    assert!(fs::read_to_string(&path).unwrap().contains("[metrics]"));

    // refuses to overwrite without --force
    studio(&home)
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .failure();

    let output = studio(&home)
        .arg("--config")
        .arg(&path)
        .args(["config", "show", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["format"], "table");
    assert_eq!(json["metrics"]["parallel_threshold"], 100);
}
