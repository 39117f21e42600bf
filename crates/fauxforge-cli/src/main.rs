mod logging;
mod settings;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::Value;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use fauxforge_core::{GenerateDataRequest, api_json_schemas};
use fauxforge_generate::{GenerationEngine, GenerationError, GeneratorRegistry};
use fauxforge_server::{AppState, ServerError, wait_for_shutdown_signal};
use fauxforge_store::{DatasetStore, FileStore, MemoryStore, StoreError};
use logging::{LogFormat, LoggingError, init_logging};
use settings::{ServerSettings, SettingsError, StorageKind};

#[derive(Debug, Error)]
enum CliError {
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error("invalid request: {0}")]
    Request(#[from] fauxforge_core::Error),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("server error: {0}")]
    Server(#[from] ServerError),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "fauxforge", version, about = "Schema-driven fake data service")]
struct Cli {
    /// Log output format.
    #[arg(long, global = true, value_enum, default_value = "pretty")]
    log_format: LogFormat,
    /// Append logs to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API.
    Serve(ServeArgs),
    /// Generate a dataset from a schema file.
    Generate(GenerateArgs),
    /// List the scalar tags with a dedicated generator.
    Tags,
    /// Print the JSON Schemas of the HTTP request and response bodies.
    JsonSchema,
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Address to listen on.
    #[arg(long)]
    listen: Option<SocketAddr>,
    /// Directory holding stored datasets.
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Dataset storage backend.
    #[arg(long, value_enum)]
    storage: Option<StorageKind>,
    /// Largest accepted record count per request.
    #[arg(long)]
    max_count: Option<usize>,
    /// Deepest schema nesting accepted.
    #[arg(long)]
    max_depth: Option<usize>,
    /// Largest upper bound an array node may declare.
    #[arg(long)]
    max_array_len: Option<usize>,
    /// Most values a single request may generate.
    #[arg(long)]
    max_values: Option<usize>,
    /// Seconds a generation request may run before it is abandoned.
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Base URL for image nodes.
    #[arg(long)]
    image_base_url: Option<String>,
}

impl ServeArgs {
    fn apply(self, settings: &mut ServerSettings) {
        if let Some(listen) = self.listen {
            settings.listen_addr = listen;
        }
        if let Some(dir) = self.data_dir {
            settings.data_dir = dir;
        }
        if let Some(storage) = self.storage {
            settings.storage = storage;
        }
        if let Some(max_count) = self.max_count {
            settings.max_count = max_count;
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = max_depth;
        }
        if let Some(max_array_len) = self.max_array_len {
            settings.max_array_len = max_array_len;
        }
        if let Some(max_values) = self.max_values {
            settings.max_values = max_values;
        }
        if let Some(secs) = self.timeout_secs {
            settings.generation_timeout_secs = secs;
        }
        if let Some(url) = self.image_base_url {
            settings.image_base_url = url;
        }
    }
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// JSON file holding the record schema.
    #[arg(long)]
    schema: PathBuf,
    /// Number of records to generate.
    #[arg(long)]
    count: u64,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Write the dataset to this file instead of stdout.
    #[arg(long, conflicts_with = "store_dir")]
    out: Option<PathBuf>,
    /// Store the dataset in this directory and print its key.
    #[arg(long)]
    store_dir: Option<PathBuf>,
    /// TOML settings file; supplies depth and image limits.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_file.as_deref())?;

    match cli.command {
        Command::Serve(args) => run_serve(args).await,
        Command::Generate(args) => run_generate(args).await,
        Command::Tags => {
            for tag in GeneratorRegistry::new().tags() {
                println!("{tag}");
            }
            Ok(())
        }
        Command::JsonSchema => {
            println!("{}", serde_json::to_string_pretty(&api_json_schemas())?);
            Ok(())
        }
    }
}

async fn run_serve(args: ServeArgs) -> Result<(), CliError> {
    let mut settings = ServerSettings::load(args.config.as_deref())?;
    args.apply(&mut settings);
    settings.validate()?;

    let engine = Arc::new(GenerationEngine::new(settings.generate_options()));
    let store: Arc<dyn DatasetStore> = match settings.storage {
        StorageKind::File => Arc::new(FileStore::open(&settings.data_dir)?),
        StorageKind::Memory => Arc::new(MemoryStore::new()),
    };
    info!(
        storage = ?settings.storage,
        max_count = settings.max_count,
        max_depth = settings.max_depth,
        max_array_len = settings.max_array_len,
        timeout_secs = settings.generation_timeout_secs,
        "starting fauxforge"
    );

    let listener = TcpListener::bind(settings.listen_addr)
        .await
        .map_err(ServerError::from)?;
    let cancel = CancellationToken::new();
    tokio::spawn(wait_for_shutdown_signal(cancel.clone()));

    let state = AppState::new(engine, store, settings.server_config());
    fauxforge_server::serve(listener, state, cancel).await?;
    Ok(())
}

async fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let settings = ServerSettings::load(args.config.as_deref())?;
    settings.validate()?;

    let schema = read_json(&args.schema)?;
    let request = GenerateDataRequest::new(schema, args.count);
    let validated = request.validate(settings.max_count)?;

    let engine = GenerationEngine::new(settings.generate_options());
    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };
    let result = engine.run(&validated.schema, validated.count, &mut rng, None)?;

    if let Some(dir) = args.store_dir {
        let store = FileStore::open(dir)?;
        let key = store.put(&result.records).await?;
        println!("{key}");
    } else {
        let encoded = serde_json::to_string_pretty(&result.records)?;
        match args.out {
            Some(path) => {
                std::fs::write(&path, encoded)?;
                info!(path = %path.display(), records = result.records.len(), "dataset written");
            }
            None => println!("{encoded}"),
        }
    }
    Ok(())
}

fn read_json(path: &Path) -> Result<Value, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}
