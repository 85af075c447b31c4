use assert_fs::prelude::*;
use predicates::prelude::*;

const REGISTER_YAML: &str = r#"
name: Hospital Wing
critical_dates:
  - id: CD-1
    title: Practical completion notice
    due_date: 2026-11-30
  - id: CD-2
    title: Extension of time claim
    due_date: 2026-11-02
    reminder_days: 5
    reminder_day_type: business
  - id: CD-3
    title: Insurance renewal
    due_date: 2026-10-01
  - id: CD-4
    title: Retention release
    due_date: 2026-10-01
    completed: true
"#;

#[test]
fn reminders_list_due_and_overdue_dates() {
    let input_file = assert_fs::NamedTempFile::new("register.yaml").unwrap();
    input_file.write_str(REGISTER_YAML).unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("risktrack");
    cmd.args([
        "reminders",
        "-i",
        input_file.path().to_str().unwrap(),
        "--today",
        "2026-10-27",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("CD-3 | 2026-10-01 | overdue | -26"))
        .stdout(predicate::str::contains("CD-2 | 2026-11-02 | due soon | 6"))
        .stdout(predicate::str::contains("CD-1").not())
        .stdout(predicate::str::contains("CD-4").not());
}

#[test]
fn reminders_use_the_lead_from_settings() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input_file = temp.child("register.yaml");
    input_file.write_str(REGISTER_YAML).unwrap();
    let settings_file = temp.child("settings.yaml");
    settings_file.write_str("reminder_lead_days: 40\n").unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("risktrack");
    cmd.args([
        "reminders",
        "-i",
        input_file.path().to_str().unwrap(),
        "--today",
        "2026-10-27",
        "--config",
        settings_file.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("CD-1 | 2026-11-30 | due soon | 34"));
}

#[test]
fn reminders_honour_calendar_holidays() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input_file = temp.child("register.yaml");
    input_file.write_str(REGISTER_YAML).unwrap();
    let calendar_file = temp.child("calendar.yaml");
    calendar_file
        .write_str("free_date_ranges:\n  - start_date: 2026-10-26\n    end_date: 2026-10-30\n")
        .unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("risktrack");
    cmd.args([
        "reminders",
        "-i",
        input_file.path().to_str().unwrap(),
        "--today",
        "2026-10-23",
        "-c",
        calendar_file.path().to_str().unwrap(),
    ]);

    // five working days before Mon 2 Nov, skipping the holiday week, is Mon 19 Oct
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("CD-2 | 2026-11-02 | due soon | 10"));
}

#[test]
fn reminders_reject_malformed_today() {
    let input_file = assert_fs::NamedTempFile::new("register.yaml").unwrap();
    input_file.write_str(REGISTER_YAML).unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("risktrack");
    cmd.args([
        "reminders",
        "-i",
        input_file.path().to_str().unwrap(),
        "--today",
        "tomorrow",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse date"));
}
