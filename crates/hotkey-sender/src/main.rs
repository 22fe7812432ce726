//! hotkey-send — command-line front end for the injection engine.
//!
//! # Usage
//!
//! ```text
//! hotkey-send [OPTIONS] <COMMAND>
//!
//! Commands:
//!   press <KEY>           Press and release a hot key (enter, f10, num5, ...)
//!   hold <MODIFIER>       Push ctrl or alt down and leave it down
//!   release <MODIFIER>    Let ctrl or alt up
//!   run <ACTION>...       Execute catalog actions in order (pressEnter holdAlt ...)
//!   list [--json]         Print the action catalog
//!   config-path           Print the config file location
//!   init-config [--force] Write a default config file
//!
//! Options:
//!   --config <PATH>       Config file [env: HOTKEY_SEND_CONFIG]
//!   --backend <BACKEND>   native | recording (overrides config)
//!   --delay-ms <MS>       Pause between `run` actions (overrides config)
//! ```
//!
//! The process exits non-zero when the OS accepts fewer events than an
//! action requires.  With the `recording` backend nothing reaches the OS;
//! the events that would have been sent are printed instead.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use hotkey_core::{ActionBinding, HotKey, KeyAction, KeyCatalog, Modifier};
use hotkey_sender::application::hotkey_state::{GameEvent, HotKeyStateMachine};
use hotkey_sender::application::inject_keys::{InjectionEngine, InputInjector};
use hotkey_sender::infrastructure::input_injection::build_injector;
use hotkey_sender::infrastructure::input_injection::recording::RecordingInjector;
use hotkey_sender::infrastructure::storage::config::{
    config_file_path, load_config_from, save_config_to, AppConfig, Backend,
};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Injects hot-key presses and modifier holds as scan-code keyboard input.
#[derive(Debug, Parser)]
#[command(name = "hotkey-send", version)]
struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true, env = "HOTKEY_SEND_CONFIG")]
    config: Option<PathBuf>,

    /// Injection backend; overrides `[injection] backend`.
    #[arg(long, global = true)]
    backend: Option<Backend>,

    /// Milliseconds to wait between `run` actions; overrides
    /// `[injection] action_delay_ms`.
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Press and release a hot key.
    Press { key: HotKey },
    /// Push a modifier down and leave it down.
    Hold { modifier: Modifier },
    /// Let a modifier up.
    Release { modifier: Modifier },
    /// Execute catalog actions in order.
    Run {
        #[arg(required = true)]
        actions: Vec<KeyAction>,
        /// Start the hot-key state machine inside a game.
        #[arg(long)]
        in_game: bool,
    },
    /// Print the action catalog.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Print the config file location.
    ConfigPath,
    /// Write a default config file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    fn config_path(&self) -> anyhow::Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => config_file_path().context("no --config given and no platform config dir"),
        }
    }

    fn backend(&self, config: &AppConfig) -> Backend {
        self.backend.unwrap_or(config.injection.backend)
    }

    fn action_delay(&self, config: &AppConfig) -> Duration {
        Duration::from_millis(self.delay_ms.unwrap_or(config.injection.action_delay_ms))
    }

    /// The actions this invocation executes, empty for non-injecting commands.
    fn actions(&self) -> Vec<KeyAction> {
        match &self.command {
            Command::Press { key } => vec![KeyAction::Press(*key)],
            Command::Hold { modifier } => vec![KeyAction::Hold(*modifier)],
            Command::Release { modifier } => vec![KeyAction::Release(*modifier)],
            Command::Run { actions, .. } => actions.clone(),
            Command::List { .. } | Command::ConfigPath | Command::InitConfig { .. } => Vec::new(),
        }
    }
}

/// One row of `list --json`.
#[derive(Serialize)]
struct CatalogRow {
    name: &'static str,
    vk: u16,
    #[serde(flatten)]
    binding: ActionBinding,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let catalog = Arc::new(KeyCatalog::standard());

    match &cli.command {
        Command::List { json } => {
            init_tracing("info");
            print_catalog(&catalog, *json)
        }
        Command::ConfigPath => {
            init_tracing("info");
            println!("{}", cli.config_path()?.display());
            Ok(())
        }
        Command::InitConfig { force } => {
            init_tracing("info");
            let path = cli.config_path()?;
            init_config(&path, *force)?;
            println!("wrote {}", path.display());
            Ok(())
        }
        Command::Press { .. }
        | Command::Hold { .. }
        | Command::Release { .. }
        | Command::Run { .. } => {
            let config_path = cli.config_path()?;
            let config = load_config_from(&config_path)
                .with_context(|| format!("loading {}", config_path.display()))?;
            init_tracing(&config.general.log_level);

            let in_game = matches!(cli.command, Command::Run { in_game: true, .. });
            inject(&cli, &config, catalog, in_game)
        }
    }
}

/// Logs go to stderr so `list --json` output stays machine-readable.
fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

/// Writes a default config to `path`.  The existing file is never read, so a
/// malformed one can be replaced with `--force`.
fn init_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    save_config_to(&AppConfig::default(), path)?;
    Ok(())
}

fn inject(
    cli: &Cli,
    config: &AppConfig,
    catalog: Arc<KeyCatalog>,
    in_game: bool,
) -> anyhow::Result<()> {
    let backend = cli.backend(config);

    let recorder = (backend == Backend::Recording).then(|| Arc::new(RecordingInjector::new()));
    let injector: Arc<dyn InputInjector> = match &recorder {
        Some(recorder) => Arc::clone(recorder) as Arc<dyn InputInjector>,
        None => build_injector(backend)?,
    };
    let engine = InjectionEngine::new(catalog, injector);

    let mut hotkeys = HotKeyStateMachine::new();
    if in_game {
        hotkeys.handle(GameEvent::EnterGame);
    }

    let result = run_actions(&engine, &cli.actions(), cli.action_delay(config), &mut hotkeys);
    info!(
        %backend,
        state = ?hotkeys.state(),
        keys_activated = hotkeys.keys_activated(),
        "done"
    );

    if let Some(recorder) = recorder {
        for event in recorder.events() {
            println!("{event}");
        }
    }
    result
}

/// Executes `actions` in order, feeding every fully accepted one to `hotkeys`.
///
/// Keeps going after a rejected action.
///
/// # Errors
///
/// Returns an error if any action was not fully accepted by the OS.
fn run_actions(
    engine: &InjectionEngine,
    actions: &[KeyAction],
    delay: Duration,
    hotkeys: &mut HotKeyStateMachine,
) -> anyhow::Result<()> {
    let mut failed = 0usize;
    for (i, action) in actions.iter().copied().enumerate() {
        if i > 0 && !delay.is_zero() {
            std::thread::sleep(delay);
        }
        match engine.execute(action) {
            Ok(()) => {
                if let Some(event) = GameEvent::from_action(action) {
                    hotkeys.handle(event);
                }
            }
            Err(e) => {
                error!(%action, "{e}");
                failed += 1;
            }
        }
    }
    info!(actions = actions.len(), failed, "actions executed");

    if failed > 0 {
        bail!("{failed} of {} actions were not fully accepted by the OS", actions.len());
    }
    Ok(())
}

fn print_catalog(catalog: &KeyCatalog, json: bool) -> anyhow::Result<()> {
    if json {
        let rows: Vec<CatalogRow> = catalog
            .entries()
            .map(|(action, binding)| CatalogRow {
                name: action.name(),
                vk: binding.key.vk(),
                binding,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for (action, binding) in catalog.entries() {
            let key = binding.key.to_string();
            println!("{:<16} {key:<20} {}", action.name(), binding.class);
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use hotkey_sender::application::hotkey_state::HotKeyState;
    use hotkey_sender::infrastructure::input_injection::recording::Acceptance;

    #[test]
    fn test_cli_press_parses_key_name() {
        // Arrange / Act
        let cli = Cli::parse_from(["hotkey-send", "press", "enter"]);

        // Assert
        assert_eq!(cli.actions(), vec![KeyAction::Press(HotKey::Enter)]);
    }

    #[test]
    fn test_cli_hold_and_release_parse_modifier_aliases() {
        let hold = Cli::parse_from(["hotkey-send", "hold", "ctrl"]);
        let release = Cli::parse_from(["hotkey-send", "release", "Alt"]);
        assert_eq!(hold.actions(), vec![KeyAction::Hold(Modifier::Control)]);
        assert_eq!(release.actions(), vec![KeyAction::Release(Modifier::Alt)]);
    }

    #[test]
    fn test_cli_run_keeps_action_order() {
        let cli = Cli::parse_from(["hotkey-send", "run", "holdAlt", "pressF1", "releaseAlt"]);
        assert_eq!(
            cli.actions(),
            vec![
                KeyAction::Hold(Modifier::Alt),
                KeyAction::Press(HotKey::F1),
                KeyAction::Release(Modifier::Alt),
            ]
        );
    }

    #[test]
    fn test_cli_run_rejects_unknown_action() {
        let result = Cli::try_parse_from(["hotkey-send", "run", "pressF11"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_run_requires_an_action() {
        assert!(Cli::try_parse_from(["hotkey-send", "run"]).is_err());
    }

    #[test]
    fn test_cli_backend_overrides_config() {
        // Arrange
        let mut config = AppConfig::default();
        config.injection.backend = Backend::Native;
        let cli = Cli::parse_from(["hotkey-send", "--backend", "recording", "press", "f10"]);

        // Act / Assert
        assert_eq!(cli.backend(&config), Backend::Recording);
    }

    #[test]
    fn test_cli_without_overrides_uses_config() {
        let mut config = AppConfig::default();
        config.injection.action_delay_ms = 40;
        let cli = Cli::parse_from(["hotkey-send", "list"]);
        assert_eq!(cli.backend(&config), config.injection.backend);
        assert_eq!(cli.action_delay(&config), Duration::from_millis(40));
        assert!(cli.actions().is_empty());
    }

    #[test]
    fn test_cli_delay_override() {
        let cli = Cli::parse_from(["hotkey-send", "run", "pressEnter", "--delay-ms", "15"]);
        assert_eq!(cli.action_delay(&AppConfig::default()), Duration::from_millis(15));
    }

    #[test]
    fn test_cli_explicit_config_path_wins() {
        let cli = Cli::parse_from(["hotkey-send", "--config", "/tmp/hk.toml", "config-path"]);
        assert_eq!(cli.config_path().unwrap(), PathBuf::from("/tmp/hk.toml"));
    }

    #[test]
    fn test_inject_with_recording_backend_succeeds() {
        let cli = Cli::parse_from([
            "hotkey-send",
            "--backend",
            "recording",
            "run",
            "holdCtrl",
            "pressNum1",
            "releaseCtrl",
        ]);
        let catalog = Arc::new(KeyCatalog::standard());
        let result = inject(&cli, &AppConfig::default(), catalog, false);
        assert!(result.is_ok());
    }

    // ── Exit status ───────────────────────────────────────────────────────────

    fn make_engine(injector: RecordingInjector) -> InjectionEngine {
        InjectionEngine::new(Arc::new(KeyCatalog::standard()), Arc::new(injector))
    }

    #[test]
    fn test_run_actions_fails_when_os_rejects_and_skips_state_machine() {
        // Arrange
        let engine = make_engine(RecordingInjector::with_acceptance(Acceptance::RejectAll));
        let mut hotkeys = HotKeyStateMachine::new();
        hotkeys.handle(GameEvent::EnterGame);

        // Act
        let actions = [KeyAction::Press(HotKey::Enter)];
        let result = run_actions(&engine, &actions, Duration::ZERO, &mut hotkeys);

        // Assert
        assert!(result.is_err(), "a rejected action must fail the run");
        assert_eq!(hotkeys.state(), HotKeyState::InGame, "rejected Enter must not open chat");
    }

    #[test]
    fn test_run_actions_continues_after_a_partial_rejection() {
        // Arrange: the Enter press gets 1 of 2 events through, F10 none
        let engine = make_engine(RecordingInjector::with_acceptance(Acceptance::AcceptFirst(1)));
        let mut hotkeys = HotKeyStateMachine::new();

        // Act
        let actions = [KeyAction::Press(HotKey::Enter), KeyAction::Press(HotKey::F10)];
        let result = run_actions(&engine, &actions, Duration::ZERO, &mut hotkeys);

        // Assert
        let message = result.expect_err("partial acceptance is a failure").to_string();
        assert!(message.starts_with("2 of 2 actions"), "got {message:?}");
    }

    #[test]
    fn test_run_actions_feeds_accepted_actions_to_state_machine() {
        let engine = make_engine(RecordingInjector::new());
        let mut hotkeys = HotKeyStateMachine::new();
        hotkeys.handle(GameEvent::EnterGame);

        let actions = [KeyAction::Press(HotKey::F10)];
        run_actions(&engine, &actions, Duration::ZERO, &mut hotkeys).expect("accepted");

        assert_eq!(hotkeys.state(), HotKeyState::Menu);
        assert!(!hotkeys.keys_activated());
    }

    // ── init-config ───────────────────────────────────────────────────────────

    fn temp_config_path(tag: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("hotkey_send_cli_{}_{tag}", std::process::id()))
            .join("config.toml")
    }

    #[test]
    fn test_init_config_force_replaces_malformed_file() {
        // Arrange
        let path = temp_config_path("malformed");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[[[ broken").unwrap();

        // Act
        init_config(&path, true).expect("force overwrites without parsing");

        // Assert
        let loaded = load_config_from(&path).expect("rewritten file parses");
        assert_eq!(loaded, AppConfig::default());

        // Cleanup
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_init_config_without_force_keeps_existing_file() {
        // Arrange
        let path = temp_config_path("existing");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[[[ broken").unwrap();

        // Act
        let result = init_config(&path, false);

        // Assert
        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[[[ broken");

        // Cleanup
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }
}
