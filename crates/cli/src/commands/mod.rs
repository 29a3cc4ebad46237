pub mod config;
pub mod doctor;
pub mod orders;
pub mod products;

use serde::Serialize;
use tracing::level_filters::LevelFilter;

use mostrador_api::StoreClient;
use mostrador_core::config::{AppConfig, ConfigOverrides, LoadOptions, LogFormat};

use crate::controller::Controller;
use crate::view::TerminalView;

// Exit codes: 2 config, 3 client construction, 4 runtime construction,
// 5 operation failure.
const EXIT_CONFIG: u8 = 2;
const EXIT_CLIENT: u8 = 3;
const EXIT_RUNTIME: u8 = 4;
const EXIT_OPERATION: u8 = 5;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
}

impl CommandResult {
    pub fn failure(command: &str, error_class: &str, message: impl Into<String>, exit_code: u8) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(payload) }
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

/// Options shared by every subcommand, sourced from global flags.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub base_url: Option<String>,
}

impl RunOptions {
    fn load_options(&self) -> LoadOptions {
        LoadOptions {
            overrides: ConfigOverrides { base_url: self.base_url.clone(), log_level: None },
            ..LoadOptions::default()
        }
    }
}

fn init_logging(config: &AppConfig) {
    let level: LevelFilter = config.logging.level.parse().unwrap_or(LevelFilter::INFO);

    // Subsequent inits in the same process are fine to ignore.
    let builder = tracing_subscriber::fmt().with_target(false).with_max_level(level);
    let _ = match config.logging.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

/// Loads config, wires up the client and the terminal view, runs one
/// controller operation on a current-thread runtime, and renders.
fn execute<F>(options: &RunOptions, command: &str, operation: F) -> CommandResult
where
    F: FnOnce(&tokio::runtime::Runtime, &mut Controller<StoreClient, TerminalView>) -> bool,
{
    let config = match AppConfig::load(options.load_options()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(command, "config", error.to_string(), EXIT_CONFIG)
        }
    };
    init_logging(&config);

    let client = match StoreClient::new(&config.api.base_url, config.api.timeout_secs) {
        Ok(client) => client,
        Err(error) => {
            return CommandResult::failure(command, "client_init", error.to_string(), EXIT_CLIENT)
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            return CommandResult::failure(
                command,
                "runtime",
                format!("failed to initialize async runtime: {error}"),
                EXIT_RUNTIME,
            )
        }
    };

    let mut controller = Controller::new(client, TerminalView::new());
    let succeeded = operation(&runtime, &mut controller);
    let output = controller.into_view().into_output();

    CommandResult { exit_code: if succeeded { 0 } else { EXIT_OPERATION }, output }
}
