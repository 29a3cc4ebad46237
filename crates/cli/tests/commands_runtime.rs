use std::env;
use std::sync::{Mutex, OnceLock};

use serde_json::Value;

use mostrador_cli::commands::{config, doctor, products, RunOptions};

#[test]
fn products_list_returns_config_failure_with_invalid_env() {
    with_env(&[("MOSTRADOR_API_BASE_URL", "ftp://store")], || {
        let result = products::list(&RunOptions::default());
        assert_eq!(result.exit_code, 2, "expected config validation failure code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "products list");
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["error_class"], "config");
    });
}

#[test]
fn config_command_attributes_sources() {
    with_env(&[("MOSTRADOR_API_TIMEOUT_SECS", "45")], || {
        let options = RunOptions { base_url: Some("http://flagged:8080".to_string()) };
        let output = config::run(&options);

        assert!(output.contains("- api.base_url = http://flagged:8080 (source: flag (--base-url))"));
        assert!(output.contains("- api.timeout_secs = 45 (source: env (MOSTRADOR_API_TIMEOUT_SECS))"));
        assert!(output.contains("- logging.level = info (source: default)"));
    });
}

#[test]
fn config_command_reports_validation_failures() {
    with_env(&[("MOSTRADOR_API_TIMEOUT_SECS", "0")], || {
        let output = config::run(&RunOptions::default());
        assert!(output.starts_with("config validation failed:"));
        assert!(output.contains("api.timeout_secs"));
    });
}

#[test]
fn doctor_skips_reachability_when_config_is_invalid() {
    with_env(&[("MOSTRADOR_API_BASE_URL", "ftp://store")], || {
        let report: Value =
            serde_json::from_str(&doctor::run(&RunOptions::default(), true)).expect("doctor JSON");

        assert_eq!(report["overall_status"], "fail");
        assert_eq!(report["checks"][0]["name"], "config_validation");
        assert_eq!(report["checks"][0]["status"], "fail");
        assert_eq!(report["checks"][1]["name"], "api_reachability");
        assert_eq!(report["checks"][1]["status"], "skipped");
    });
}

#[test]
fn doctor_reports_unreachable_service() {
    // Discard port, nothing listens there.
    with_env(&[], || {
        let options = RunOptions { base_url: Some("http://127.0.0.1:9".to_string()) };
        let report: Value = serde_json::from_str(&doctor::run(&options, true)).expect("doctor JSON");

        assert_eq!(report["overall_status"], "fail");
        assert_eq!(report["checks"][0]["status"], "pass");
        assert_eq!(report["checks"][1]["name"], "api_reachability");
        assert_eq!(report["checks"][1]["status"], "fail");
        let details = report["checks"][1]["details"].as_str().unwrap_or_default();
        assert!(details.contains("http://127.0.0.1:9"));
    });
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn with_env(vars: &[(&str, &str)], test_fn: impl FnOnce()) {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let _guard =
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("env mutex should not be poisoned");

    let keys = [
        "MOSTRADOR_API_BASE_URL",
        "MOSTRADOR_API_TIMEOUT_SECS",
        "MOSTRADOR_LOGGING_LEVEL",
        "MOSTRADOR_LOGGING_FORMAT",
        "MOSTRADOR_LOG_LEVEL",
        "MOSTRADOR_LOG_FORMAT",
    ];

    let previous_values: Vec<(&str, Option<String>)> =
        keys.iter().map(|key| (*key, env::var(key).ok())).collect();

    for key in &keys {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    test_fn();

    for (key, value) in previous_values {
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
    }
}
