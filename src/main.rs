use std::net::SocketAddr;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use catalog_filter::api::{self, CatalogClient};
use catalog_filter::config::{self, Settings, DEFAULT_HOST, DEFAULT_PORT};
use catalog_filter::models::AppState;
use catalog_filter::routes::build_router;

/// Load settings and build the catalog client, exiting on any configuration error.
fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);
    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(%e, "Invalid configuration");
            eprintln!("{}", yansi::Paint::new(e.to_string()).red());
            process::exit(1);
        }
    };
    match CatalogClient::new(&settings.catalog_url, settings.request_timeout) {
        Ok(catalog) => AppState::new(catalog),
        Err(e) => {
            tracing::error!(%e, "Failed to create catalog client");
            eprintln!("{}", yansi::Paint::new(e.to_string()).red());
            process::exit(1);
        }
    }
}

async fn start_server(state: AppState, host: &str, port: u16) {
    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let catalog_url = state.catalog.catalog_url().to_string();
    let app = build_router(state);
    tracing::info!(%addr, %catalog_url, "Starting catalog filter server");
    println!(
        "{} {}",
        yansi::Paint::new("Catalog filter API running on").green(),
        yansi::Paint::new(format!("http://{}/api/product/filter", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

async fn check_config(env_file: Option<&str>) {
    let state = build_state_from_env(env_file);
    println!(
        "{} {}",
        yansi::Paint::new("CATALOG_URL").bold(),
        yansi::Paint::new(state.catalog.catalog_url()).cyan()
    );
    match state.catalog.fetch().await {
        Ok(products) => {
            let count = products.as_deref().map(<[_]>::len).unwrap_or(0);
            println!(
                "{} {} products",
                yansi::Paint::new("Catalog reachable:").green(),
                count
            );
        }
        Err(e) => {
            eprintln!("{}: {}", yansi::Paint::new("Catalog check failed").red(), e);
            process::exit(1);
        }
    }
}

#[derive(Parser)]
#[command(
    name = "catalog-filter",
    author,
    version,
    about = "Product catalog filter API",
    long_about = r#"Serve a filtered view of an upstream product catalog.

Every request fetches the catalog from CATALOG_URL, filters it by price and size, highlights
keywords in descriptions and reports metadata (price bounds, sizes, common words) for the
full catalog. Configure with environment variables or an `--env-file`.

Examples:
  1) Run the server:
      CATALOG_URL=https://example.com/products.json catalog-filter serve --port 8080
  2) Query it:
      curl 'http://127.0.0.1:8080/api/product/filter?minPrice=5&size=M,L&highlight=green'
"#,
    after_help = "Use `catalog-filter <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable upstream request/response logging
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Validate configuration and fetch the catalog once
    #[command(long_about = "Validate that CATALOG_URL is configured and that the upstream catalog can be fetched and parsed.")]
    CheckConfig {
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        api::set_silent(true);
    }

    match cli.command {
        None => {
            let state = build_state_from_env(None);
            start_server(state, DEFAULT_HOST, DEFAULT_PORT).await;
        }
        Some(Commands::Serve { host, port, env_file }) => {
            let state = build_state_from_env(env_file.as_deref());
            start_server(state, &host, port).await;
        }
        Some(Commands::CheckConfig { env_file }) => {
            check_config(env_file.as_deref()).await;
        }
    }
}
