mod logging;

use std::fmt;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use mindcare_core::model::RoomId;
use services::{AppServices, Clock};
use storage::Storage;
use tracing::Level;
use ui::{App, AppContext};

use crate::logging::{LogFormat, init_logging, parse_log_level};

const DEFAULT_DB_URL: &str = "sqlite://mindcare.sqlite3";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownSubcommand(String),
    InvalidDbUrl { raw: String },
    InvalidLogLevel { raw: String },
    InvalidLogFormat { raw: String },
    InvalidRoomId { raw: String },
    MissingRoom,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownSubcommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidLogLevel { raw } => write!(f, "invalid --log-level value: {raw}"),
            ArgsError::InvalidLogFormat { raw } => {
                write!(f, "invalid --log-format value: {raw} (expected compact or pretty)")
            }
            ArgsError::InvalidRoomId { raw } => write!(f, "invalid --room value: {raw}"),
            ArgsError::MissingRoom => write!(f, "reset requires --room <id>"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui       [options]");
    eprintln!("  cargo run -p app -- progress [options]");
    eprintln!("  cargo run -p app -- reset    --room <id> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --db <sqlite_url>            default {DEFAULT_DB_URL}");
    eprintln!("  --log-level <level>          trace|debug|info|warn|error (default info)");
    eprintln!("  --log-format <format>        compact|pretty (default compact)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MINDCARE_DB_URL, MINDCARE_LOG, RUST_LOG");
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Ui,
    Progress,
    Reset { room: RoomId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Ui,
    Progress,
    Reset,
}

impl CommandKind {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "progress" => Some(Self::Progress),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }
}

/// Values taken from the environment before flags are applied.
#[derive(Debug, Default)]
struct EnvDefaults {
    db_url: Option<String>,
    log_level: Option<String>,
}

impl EnvDefaults {
    fn from_env() -> Self {
        Self {
            db_url: std::env::var("MINDCARE_DB_URL").ok(),
            log_level: std::env::var("MINDCARE_LOG").ok(),
        }
    }
}

#[derive(Debug)]
struct Args {
    command: Command,
    db_url: String,
    log_level: Level,
    log_format: LogFormat,
}

impl Args {
    /// `Ok(None)` means help was requested.
    fn parse(argv: Vec<String>, env: EnvDefaults) -> Result<Option<Self>, ArgsError> {
        let mut argv = argv.into_iter().peekable();

        // Default behavior: launching UI when no subcommand is provided.
        let kind = match argv.peek().map(String::as_str) {
            None => CommandKind::Ui,
            Some(first) if first.starts_with('-') => CommandKind::Ui,
            Some(first) => {
                let kind = CommandKind::from_arg(first)
                    .ok_or_else(|| ArgsError::UnknownSubcommand(first.to_string()))?;
                argv.next();
                kind
            }
        };

        let mut db_url = env
            .db_url
            .map_or_else(|| DEFAULT_DB_URL.to_string(), normalize_sqlite_url);
        let mut log_level = match env.log_level {
            Some(raw) => parse_log_level(&raw).ok_or(ArgsError::InvalidLogLevel { raw })?,
            None => Level::INFO,
        };
        let mut log_format = LogFormat::default();
        let mut room = None;

        while let Some(arg) = argv.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut argv, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--log-level" => {
                    let value = require_value(&mut argv, "--log-level")?;
                    log_level = parse_log_level(&value)
                        .ok_or(ArgsError::InvalidLogLevel { raw: value })?;
                }
                "--log-format" => {
                    let value = require_value(&mut argv, "--log-format")?;
                    log_format = value
                        .parse()
                        .map_err(|raw| ArgsError::InvalidLogFormat { raw })?;
                }
                "--room" if kind == CommandKind::Reset => {
                    let value = require_value(&mut argv, "--room")?;
                    let parsed = value
                        .parse::<RoomId>()
                        .map_err(|_| ArgsError::InvalidRoomId { raw: value.clone() })?;
                    room = Some(parsed);
                }
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let command = match kind {
            CommandKind::Ui => Command::Ui,
            CommandKind::Progress => Command::Progress,
            CommandKind::Reset => Command::Reset {
                room: room.ok_or(ArgsError::MissingRoom)?,
            },
        };

        Ok(Some(Self {
            command,
            db_url,
            log_level,
            log_format,
        }))
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

async fn print_progress(services: &AppServices) {
    let overview = services.dashboard().overview().await;
    for room in &overview.rooms {
        println!(
            "{:<14} {:>3}%  {}/{} modules",
            room.room.id(),
            room.percent,
            room.completed,
            room.room.module_count()
        );
    }
    println!(
        "overall        {:>3}%  {}/{} modules, {} rooms joined",
        overview.overall_percent,
        overview.completed_modules,
        overview.total_modules,
        overview.rooms_joined
    );
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let parsed = match Args::parse(argv, EnvDefaults::from_env()) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };

    init_logging(parsed.log_level, parsed.log_format)?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let storage = Storage::sqlite(&parsed.db_url).await?;
    let services = AppServices::from_storage(&storage, Clock::system())?;
    tracing::info!(db = %parsed.db_url, "storage ready");

    match parsed.command {
        Command::Ui => {
            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("MindCare")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(AppContext::new(services))
                .launch(App);
            Ok(())
        }
        Command::Progress => {
            print_progress(&services).await;
            Ok(())
        }
        Command::Reset { room } => {
            services.rooms().reset_room(&room).await?;
            println!("progress cleared for room {room}");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
