use ipc::core::{Basket, Evaluation, Session};
use tracing::info;

mod test_utils {
    use std::fs;

    pub fn write_config(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            r#"
currency_symbol: "$"
reference:
  series: ["Tu IPC mensual", "IPC NOA", "IPC Nacional"]
  user_series: "Tu IPC mensual"
  points:
    - { label: "Jul-2025", values: [2.3, 2.0, 1.9] }
    - { label: "Ago-2025", values: [2.3, 2.2, 2.0] }
"#,
        )
        .expect("Failed to write config file");
        path
    }

    pub fn write_entries(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("entries.yaml");
        fs::write(&path, content).expect("Failed to write entries file");
        path
    }
}

#[test_log::test]
fn test_full_app_flow_with_entries_file() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir);
    let entries_path = test_utils::write_entries(
        &dir,
        "\"Carnes y derivados\": 300\nFrutas: 100\n\"Transporte público\": 600\n",
    );

    let result = ipc::run_command(
        ipc::AppCommand::Calc(ipc::CalcOptions {
            entries_path: Some(entries_path),
            monthly_ipc: Some(2.5),
            ..Default::default()
        }),
        Some(config_path.to_str().unwrap()),
    );
    assert!(
        result.is_ok(),
        "Calc command failed with: {:?}",
        result.err()
    );
}

#[test_log::test]
fn test_full_app_flow_json_with_assignments() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir);

    let result = ipc::run_command(
        ipc::AppCommand::Calc(ipc::CalcOptions {
            assignments: vec!["Educación=250".to_string(), "Frutas=0".to_string()],
            json: true,
            ..Default::default()
        }),
        Some(config_path.to_str().unwrap()),
    );
    assert!(result.is_ok(), "Calc command failed with: {:?}", result.err());
}

#[test_log::test]
fn test_all_zero_entries_are_not_an_error() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir);

    let result = ipc::run_command(
        ipc::AppCommand::Calc(ipc::CalcOptions::default()),
        Some(config_path.to_str().unwrap()),
    );
    assert!(result.is_ok());
}

#[test_log::test]
fn test_negative_entry_fails_the_command() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir);
    let entries_path = test_utils::write_entries(&dir, "Frutas: -100\n");

    let result = ipc::run_command(
        ipc::AppCommand::Calc(ipc::CalcOptions {
            entries_path: Some(entries_path),
            ..Default::default()
        }),
        Some(config_path.to_str().unwrap()),
    );
    let err = result.expect_err("Negative entry must be rejected");
    info!("Rejected with: {err:#}");
    assert!(format!("{err:#}").contains("non-negative"));
}

#[test_log::test]
fn test_container_name_is_not_an_item() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir);

    let result = ipc::run_command(
        ipc::AppCommand::Calc(ipc::CalcOptions {
            assignments: vec!["Transporte=600".to_string()],
            ..Default::default()
        }),
        Some(config_path.to_str().unwrap()),
    );
    assert!(result.is_err());
}

#[test_log::test]
fn test_missing_config_file_fails() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("absent.yaml");

    let result = ipc::run_command(ipc::AppCommand::Basket, Some(missing.to_str().unwrap()));
    let err = result.expect_err("Missing config must fail");
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test_log::test]
fn test_session_pipeline_scenario() {
    let mut session = Session::new(Basket::standard());
    // Setting order differs from basket order on purpose
    for (name, value) in [
        ("Transporte público", 600.0),
        ("Frutas", 100.0),
        ("Carnes y derivados", 300.0),
    ] {
        session
            .entries_mut()
            .set_by_name(name, value)
            .expect("Valid entry");
    }

    let evaluation = session.calculate().expect("Pipeline must run").clone();
    let Evaluation::Computed { result, chart } = evaluation else {
        panic!("Expected computed evaluation");
    };
    assert_eq!(result.total, 1000.0);

    let pairs: Vec<(&str, f64)> = chart.iter().map(|s| (s.label, s.value)).collect();
    assert_eq!(
        pairs,
        vec![
            ("Carnes y derivados", 300.0),
            ("Frutas", 100.0),
            ("Transporte público", 600.0),
        ]
    );

    let shares: Vec<f64> = ["Carnes y derivados", "Frutas", "Transporte público"]
        .iter()
        .map(|n| {
            result
                .share_of(Basket::standard().leaf(n).unwrap())
                .unwrap()
        })
        .collect();
    assert_eq!(shares, vec![30.0, 10.0, 60.0]);

    let sum: f64 = result.shares.iter().map(|s| s.share_percent).sum();
    assert!((sum - 100.0).abs() <= 0.01 * result.shares.len() as f64);
}
