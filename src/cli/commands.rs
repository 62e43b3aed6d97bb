//! CLI command implementations
//!
//! All subsystem wiring happens here; `main.rs` only dispatches. The
//! `query` command assembles a `RawQuery` from its flags so one-shot
//! queries run through exactly the pipeline HTTP requests do.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::observability::Logger;
use crate::query::{QueryEngine, QueryResult, QuerySpec, RawQuery};
use crate::server::{self, ServerConfig};
use crate::store::FileLogStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parses arguments and runs the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Init { config } => init(&config),
        Command::Serve { config } => serve(&config),
        Command::Query {
            config,
            search,
            statuses,
            order_by,
            order_direction,
            skip,
            take,
        } => {
            let raw = RawQuery {
                search,
                order_by,
                order_direction,
                skip,
                take,
                statuses,
            };
            query(&config, &raw)
        }
    }
}

/// Writes a default config file and creates an empty data file.
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::AlreadyInitialized(
            config_path.display().to_string(),
        ));
    }

    let config = ServerConfig::default();
    fs::write(config_path, serde_json::to_string_pretty(&config)?)?;

    if !config.data_file.exists() {
        FileLogStore::write_records(&config.data_file, &[])?;
    }

    println!("initialized {}", config_path.display());
    Ok(())
}

/// Boots the store and serves HTTP until shutdown.
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let store = open_store(&config)?;
    let engine = QueryEngine::new(Arc::new(store));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(&config, engine))?;
    Ok(())
}

/// Runs one query and prints the result as JSON.
pub fn query(config_path: &Path, raw: &RawQuery) -> CliResult<()> {
    let result = run_query(config_path, raw)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn run_query(config_path: &Path, raw: &RawQuery) -> CliResult<QueryResult> {
    let config = load_config(config_path)?;
    let spec = QuerySpec::parse(raw)?;
    let store = open_store(&config)?;
    let engine = QueryEngine::new(Arc::new(store));

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(engine.execute(&spec))?;
    Ok(result)
}

/// Missing file yields defaults; a present but malformed file is fatal.
fn load_config(path: &Path) -> CliResult<ServerConfig> {
    if !path.exists() {
        Logger::info(
            "CONFIG_LOADED",
            &[("path", &path.display().to_string()), ("source", "defaults")],
        );
        return Ok(ServerConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: ServerConfig = serde_json::from_str(&contents)
        .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;

    Logger::info("CONFIG_LOADED", &[("path", &path.display().to_string())]);
    Ok(config)
}

fn open_store(config: &ServerConfig) -> CliResult<FileLogStore> {
    let store = FileLogStore::open(&config.data_file)?;
    Logger::info(
        "STORE_OPENED",
        &[
            ("path", &config.data_file.display().to_string()),
            ("records", &store.len().to_string()),
        ],
    );
    Ok(store)
}
