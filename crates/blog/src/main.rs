use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use blog::config::BlogConfig;
use clap::{Parser, Subcommand};
use foxfire::storage::InMemoryStorage;
use foxfire::SiteConfig;
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Builds boyned's blog.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The root directory of the site
    #[arg(long, default_value = ".", value_hint = clap::ValueHint::DirPath)]
    root: PathBuf,

    /// Log every file as it is processed
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the site into `public/`
    Build {
        /// Override the `base_url` from `config.toml`
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Render the site in memory without writing anything
    Check {
        /// Override the `base_url` from `config.toml`
        #[arg(long)]
        base_url: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    SimpleLogger::new()
        .with_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .env()
        .init()?;

    match cli.command {
        Command::Build { base_url } => {
            let site = load_site(&cli.root, base_url)?;
            let pages = site.render().context("failed to render site")?;

            log::info!("wrote {pages} pages to {}", site.output_path().display());
        }
        Command::Check { base_url } => {
            let site = load_site(&cli.root, base_url)?;
            let pages = site
                .render_to(&InMemoryStorage::new())
                .context("failed to render site")?;

            println!("{pages} pages OK");
        }
    }

    Ok(())
}

fn load_site(root: &Path, base_url: Option<String>) -> Result<foxfire::Site> {
    let mut site_config = SiteConfig::from_path(root.join("config.toml"))
        .context("failed to load config")?;
    if let Some(base_url) = base_url {
        site_config.base_url = base_url;
    }

    let config: BlogConfig = site_config
        .extra()
        .context("failed to read blog settings from [extra]")?;

    let mut site = blog::site(root, site_config, config);
    site.load()
        .with_context(|| format!("failed to load site from {}", root.display()))?;

    Ok(site)
}
