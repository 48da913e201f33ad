//! Hospital-records command-line entry point.
//!
//! # Responsibility
//! - Parse arguments and resolve database/logging configuration.
//! - Open one connection, dispatch the selected command on stdin/stdout.
//! - Translate failures into stderr messages and exit codes.
//! - Flush buffered log lines before the process exits.

use clap::{Parser, ValueEnum};
use hospital_core::{
    core_version, default_log_dir, default_log_level, dispatch, flush_logging, init_logging,
    open_db, CommandError, CommandKind, Console, DbConfig, OutputFormat,
};
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const EXIT_COMMAND_FAILED: u8 = 1;
const EXIT_UNKNOWN_COMMAND: u8 = 2;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Query and update the hospital-records database.
///
/// Run without a selector to list the available commands.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Command number from the menu (1-4)
    #[arg(allow_negative_numbers = true)]
    selector: Option<i64>,

    /// Path of the SQLite database file [env: HOSPITAL_DB_PATH] [default: hospital.db]
    #[arg(long)]
    db: Option<PathBuf>,

    /// Report output format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, env = "HOSPITAL_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long, env = "HOSPITAL_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let code = run_cli(Args::parse());
    flush_logging();
    code
}

fn run_cli(args: Args) -> ExitCode {
    let Some(selector) = args.selector else {
        println!("{}", CommandKind::menu());
        return ExitCode::SUCCESS;
    };

    let Some(kind) = CommandKind::from_selector(selector) else {
        eprintln!("Command not found");
        return ExitCode::from(EXIT_UNKNOWN_COMMAND);
    };

    let level = args
        .log_level
        .unwrap_or_else(|| default_log_level().to_string());
    let log_dir = args.log_dir.unwrap_or_else(default_log_dir);
    if let Err(err) = init_logging(&level, &log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok core_version={} selector={}",
        core_version(),
        selector
    );

    match run(kind, DbConfig::resolve(args.db), args.format.into()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(EXIT_COMMAND_FAILED)
        }
    }
}

fn run(kind: CommandKind, config: DbConfig, format: OutputFormat) -> Result<(), CommandError> {
    let conn = open_db(&config)?;
    // JSON owns stdout; prompts move to stderr.
    let prompts: Box<dyn Write> = match format {
        OutputFormat::Text => Box::new(io::stdout()),
        OutputFormat::Json => Box::new(io::stderr()),
    };
    let mut console = Console::new(io::stdin().lock(), io::stdout(), prompts);
    dispatch(kind, &conn, &mut console, format)
}
