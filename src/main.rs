use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use storefront::catalog::{CatalogFetcher, ImagePolicy};
use storefront::config::Config;
use storefront::logging::{default_log_path, init_tracing, LogTarget};
use storefront::ui::app::App;
use storefront::ui::session::Session;
use storefront::ui::{self, RunOptions};
use storefront::url_sync::UrlSynchronizer;

/// Browse the storefront catalog in the terminal.
#[derive(Debug, Parser)]
#[command(name = "storefront", version, about)]
struct Cli {
    /// Config file (defaults to ~/.config/storefront/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the catalog endpoint
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Initial filters: a query string (keyword=hat&sort=price_low) or a full page URL
    #[arg(long, value_name = "QUERY")]
    query: Option<String>,

    /// Override the number of items revealed per page
    #[arg(long, value_name = "N")]
    per_page: Option<usize>,

    /// Print the first page of results and the page URL, then exit
    #[arg(long)]
    print: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let log_target = if cli.print {
        LogTarget::Stderr
    } else {
        LogTarget::File(config.logging.file.clone().unwrap_or_else(default_log_path))
    };
    init_tracing(&config.logging, &log_target)?;

    let images = ImagePolicy::from_patterns(config.images.remote_patterns.as_slice())?;
    let url = UrlSynchronizer::from_input(&config.page.url, cli.query.as_deref())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let fetcher = CatalogFetcher::new(&config.catalog)?;
    let items = runtime.block_on(fetcher.fetch_or_empty());

    let session = Session::new(items, url, config.pagination.items_per_page);
    if cli.print {
        print_listing(&session, &images);
        return Ok(());
    }

    let app = App::new(session, images);
    ui::run(
        app,
        RunOptions {
            load_delay: Duration::from_millis(config.pagination.load_delay_ms),
            handle: runtime.handle().clone(),
        },
    )?;
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    apply_overrides(&mut config, cli);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(endpoint) = &cli.endpoint {
        config.catalog.endpoint = endpoint.clone();
    }
    if let Some(per_page) = cli.per_page {
        config.pagination.items_per_page = per_page;
    }
}

fn print_listing(session: &Session, images: &ImagePolicy) {
    for item in session.visible() {
        let image = if images.allows(&item.image_path) {
            ""
        } else {
            "  [image blocked]"
        };
        println!("{}\t{}\t{}{}", item.title, item.creator, item.price_label(), image);
    }
    let pagination = session.pagination();
    match pagination.end_message() {
        Some(message) => println!("-- {}", message),
        None => println!("-- showing {} of {}", pagination.revealed, pagination.total),
    }
    println!("{}", session.url());
}
