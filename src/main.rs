//! price-compare - Amazon vs Flipkart price comparison storefront
//!
//! Seeds and serves the product catalog, and browses or compares it from the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use price_compare::commands::{
    CategoriesCommand, CompareCommand, ListCommand, ListOptions, ProductCommand, SeedCommand,
    ServeCommand,
};
use price_compare::config::{Config, OutputFormat};
use price_compare::filters::Category;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "price-compare",
    version,
    about = "Compare Amazon and Flipkart prices for a product catalog",
    long_about = "Seeds a SQLite product catalog, serves it over HTTP, and compares store prices."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// SQLite catalog file
    #[arg(long, global = true, env = "PRICE_COMPARE_DB")]
    database: Option<PathBuf>,

    /// Read the catalog from a running server instead of the local database
    #[arg(long, global = true, env = "PRICE_COMPARE_API_URL")]
    api_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database and load the sample catalog
    Seed,

    /// Serve the catalog over HTTP
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },

    /// List products
    #[command(alias = "ls")]
    List {
        /// Case-insensitive name search
        #[arg(short, long)]
        query: Option<String>,

        /// Only show one category (phone, laptop, tablet, audio, ...)
        #[arg(long)]
        category: Option<Category>,

        /// Minimum best price
        #[arg(long)]
        min_price: Option<f64>,

        /// Maximum best price
        #[arg(long)]
        max_price: Option<f64>,
    },

    /// Show full product details
    #[command(alias = "p")]
    Show {
        /// Product id(s) to look up
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Compare store prices for selected products
    #[command(alias = "c")]
    Compare {
        /// Product ids to select
        ids: Vec<String>,

        /// Select every product matching the search
        #[arg(short, long, conflicts_with = "ids")]
        all: bool,

        /// Case-insensitive name search limiting the selection
        #[arg(short, long)]
        query: Option<String>,
    },

    /// List categories with product counts
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The server logs requests at info; everything else stays quiet by default
    let default_level = match cli.command {
        Commands::Serve { .. } => Level::INFO,
        _ => Level::WARN,
    };

    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(default_level.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(database) = cli.database {
        config.database = database;
    }
    if let Some(url) = cli.api_url {
        config.api_url = Some(url);
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    match cli.command {
        Commands::Seed => {
            let output = SeedCommand::new(config).execute().await?;
            println!("{}", output);
        }

        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }

            ServeCommand::new(config).execute().await?;
        }

        Commands::List { query, category, min_price, max_price } => {
            let options = ListOptions { query, category, min_price, max_price };
            let output = ListCommand::new(config, options).execute().await?;
            println!("{}", output);
        }

        Commands::Show { ids } => {
            let output = ProductCommand::new(config).execute(&ids).await?;
            println!("{}", output);
        }

        Commands::Compare { ids, all, query } => {
            let output = CompareCommand::new(config).execute(&ids, all, query.as_deref()).await?;
            println!("{}", output);
        }

        Commands::Categories => {
            let output = CategoriesCommand::new(config).execute().await?;
            println!("{}", output);
        }
    }

    Ok(())
}
