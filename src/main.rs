use std::path::PathBuf;

use clap::Parser;

use couchdb_openapi::config::{self, ConnectionConfig, OutputFormat, OutputSpec};
use couchdb_openapi::errors::SpecResult;
use couchdb_openapi::generate;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate an OpenAPI spec from a running CouchDB server", long_about = None)]
struct Cli {
    /// CouchDB server URL
    #[arg(short, long, default_value = "http://localhost:5984")]
    url: String,

    /// Username for basic authentication (or COUCHDB_USER)
    #[arg(long)]
    username: Option<String>,

    /// Password for basic authentication (or COUCHDB_PASSWORD)
    #[arg(long)]
    password: Option<String>,

    /// Output file path
    #[arg(short, long, default_value = "couchdb-openapi.json")]
    output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[tokio::main]
async fn main() {
    load_env();
    init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(path) => println!("OpenAPI spec saved to: {}", path.display()),
        Err(err) => {
            eprintln!("error ({}): {}", err.class(), err);
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> SpecResult<PathBuf> {
    let (username, password) = config::resolve_credentials(cli.username, cli.password);
    let config = ConnectionConfig::new(&cli.url, username, password)?;
    let output = OutputSpec {
        path: cli.output,
        format: cli.format,
    };

    generate::run(&config, &output).await
}

fn load_env() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    let crate_env = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(".env");
    let _ = dotenvy::from_path(crate_env);
}

fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
