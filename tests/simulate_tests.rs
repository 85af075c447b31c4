use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

const REGISTER_YAML: &str = r#"
name: Demo
risks:
  - id: R-1
    probability: 0.5
    cost:
      optimistic: 1000
      most_likely: 2000
      pessimistic: 3000
  - id: R-2
    probability: 1
    cost:
      optimistic: 100
      most_likely: 100
      pessimistic: 100
"#;

fn run_simulation(seed: &str) -> String {
    let temp = assert_fs::TempDir::new().unwrap();
    let input_file = temp.child("register.yaml");
    input_file.write_str(REGISTER_YAML).unwrap();
    let output_file = temp.child("exposure.yaml");

    let mut cmd = assert_cmd::cargo_bin_cmd!("risktrack");
    cmd.args([
        "simulate",
        "-i",
        input_file.path().to_str().unwrap(),
        "-o",
        output_file.path().to_str().unwrap(),
        "-n",
        "40",
        "--seed",
        seed,
    ]);
    cmd.assert().success().stdout(predicate::str::contains(
        "Exposure simulation for 2 risks written to",
    ));

    fs::read_to_string(output_file.path()).unwrap()
}

#[test]
fn simulate_writes_exposure_report() {
    let output = run_simulation("11");

    assert!(output.contains("data_source: register.yaml"));
    assert!(output.contains("iterations: 40"));
    assert!(output.contains("simulated_risks: 2"));
    assert!(output.contains("total_emv: 1100.0"));
    assert!(output.contains("p50:"));
    assert!(output.contains("p85:"));
}

#[test]
fn seeded_simulations_are_reproducible() {
    assert_eq!(run_simulation("5"), run_simulation("5"));
}

#[test]
fn simulate_rejects_zero_iterations() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input_file = temp.child("register.yaml");
    input_file.write_str(REGISTER_YAML).unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("risktrack");
    cmd.args([
        "simulate",
        "-i",
        input_file.path().to_str().unwrap(),
        "-o",
        temp.path().join("out.yaml").to_str().unwrap(),
        "-n",
        "0",
    ]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("iterations must be greater than zero"));
}
