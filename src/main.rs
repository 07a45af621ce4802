use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use buildchem::config::Config;
use buildchem::content::{query, seed, ContentStore, MemoryStore};
use buildchem::logging::{init_preview_tracing, init_server_tracing};
use buildchem::server::{AppState, Server};
use buildchem::slug::slugify;
use buildchem::ui::app::PreviewSettings;
use buildchem::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "buildchem", version, about = "Construction chemicals catalog site")]
struct Cli {
    /// Config file (defaults to the platform config dir).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the catalog API and media files.
    Serve,
    /// Preview the home page in the terminal.
    Preview,
    /// Print the URL slug for TEXT.
    Slug { text: String },
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    let path = path.unwrap_or_else(Config::config_path);
    Config::load_from(&path).with_context(|| format!("loading {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Slug { text } => {
            println!("{}", slugify(&text));
            Ok(())
        }
        Command::Serve => {
            init_server_tracing();
            let config = load_config(cli.config)?;
            serve(config)
        }
        Command::Preview => {
            if let Some(path) = init_preview_tracing() {
                tracing::info!(path = %path.display(), "preview logging enabled");
            }
            let config = load_config(cli.config)?;
            preview(config)
        }
    }
}

fn serve(config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?;
    runtime.block_on(async move {
        let state = AppState::from_config(&config).context("opening content store")?;
        let server = Server::bind(&config.server.bind_addr, state)
            .await
            .with_context(|| format!("binding {}", config.server.bind_addr))?;
        server.run().await.context("serving")?;
        Ok(())
    })
}

fn preview(config: Config) -> anyhow::Result<()> {
    let store: Box<dyn ContentStore> = match &config.storage.data_file {
        Some(path) => Box::new(MemoryStore::open(path).context("opening content store")?),
        None => Box::new(MemoryStore::new()),
    };
    seed::seed_if_empty(store.as_ref()).context("seeding demo catalog")?;
    let categories = query::home_categories(store.as_ref());
    runtime::run(
        PreviewSettings::from_config(&config),
        config.preview.tick_rate(),
        categories,
    )
    .context("running preview")
}
