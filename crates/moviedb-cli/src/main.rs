// SPDX-License-Identifier: GPL-3.0-or-later
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use moviedb_client::{image_url, ListType, MovieDbClient, MovieId, DEFAULT_POSTER_SIZE};
use moviedb_config::{load as load_config, AppConfig};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "moviedb", version)]
#[command(about = "Query The Movie Database for movie details, cast and images")]
struct Cli {
    /// TOML configuration file; MOVIEDB_* environment variables override it.
    #[arg(long, short)]
    config: Option<PathBuf>,

    #[arg(long, short, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a movie's details.
    Movie { id: MovieId },
    /// Print a movie's cast.
    Cast { id: MovieId },
    /// Print a movie's backdrops and posters.
    Images { id: MovieId },
    /// Print the first page of a movie list.
    List {
        #[arg(value_enum)]
        list: ListArg,
    },
    /// Print the full URL for an image file path.
    ImageUrl {
        file_path: String,
        #[arg(long, default_value = DEFAULT_POSTER_SIZE)]
        size: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ListArg {
    Popular,
    TopRated,
    Upcoming,
    NowPlaying,
}

impl From<ListArg> for ListType {
    fn from(arg: ListArg) -> Self {
        match arg {
            ListArg::Popular => ListType::Popular,
            ListArg::TopRated => ListType::TopRated,
            ListArg::Upcoming => ListType::Upcoming,
            ListArg::NowPlaying => ListType::NowPlaying,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log level comes from the config, so tracing starts after it loads.
    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config, cli.verbose);
    log_config_loaded(&config, cli.config.as_deref());

    let output = run(&config, cli.command).await?;
    println!("{}", output);
    Ok(())
}

async fn run(config: &AppConfig, command: Command) -> Result<String> {
    let value = match command {
        Command::ImageUrl { file_path, size } => return Ok(image_url(&file_path, &size)),
        Command::Movie { id } => Value::Object(
            connect(config)?
                .get_single_movie(id)
                .await
                .with_context(|| format!("failed to fetch movie {id}"))?,
        ),
        Command::Cast { id } => Value::Array(
            connect(config)?
                .get_single_movie_cast(id)
                .await
                .with_context(|| format!("failed to fetch cast for movie {id}"))?,
        ),
        Command::Images { id } => Value::from(
            connect(config)?
                .get_movie_images(id)
                .await
                .with_context(|| format!("failed to fetch images for movie {id}"))?,
        ),
        Command::List { list } => {
            let list_type = ListType::from(list);
            Value::Object(
                connect(config)?
                    .get_movies_list(list_type)
                    .await
                    .with_context(|| format!("failed to fetch {} list", list_type.as_path()))?,
            )
        }
    };

    Ok(serde_json::to_string_pretty(&value)?)
}

fn connect(config: &AppConfig) -> Result<MovieDbClient> {
    let client = MovieDbClient::from_config(&config.api)
        .context("failed to build client; set api.token or MOVIEDB_API__TOKEN")?;
    info!(target: "cli", base_url = client.base_url(), "querying movie database");
    Ok(client)
}

fn log_config_loaded(config: &AppConfig, path: Option<&Path>) {
    info!(
        target: "config",
        base_url = %config.api.base_url,
        file = ?path,
        "configuration loaded"
    );
}

fn init_tracing(config: &AppConfig, verbose: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config, verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn default_directive(config: &AppConfig, verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else {
        config.telemetry.log_level.clone()
    }
}
