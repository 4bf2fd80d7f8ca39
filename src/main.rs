use anyhow::{Context, Result};
use inkpost::{Config, ContentClient, Router, Site};
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows `-v` flags.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(&config);
    config.validate().context("Invalid configuration")?;

    let content = ContentClient::new(&config.source).context("Invalid content source")?;
    let router = Router::new(&config.base_path);
    let site = Site::new(content, router, &config.title, &config.theme);

    if let Some(path) = &config.route {
        let (route, page) = site.render_route(path).await;
        tracing::info!(?route, "Rendered route");
        println!("{}", page.into_string());
        return Ok(());
    }

    let report = site
        .generate(&config.output)
        .await
        .context("Failed to generate site")?;

    println!(
        "Generated {} of {} articles into {}",
        report.generated,
        report.listed,
        config.output.display()
    );

    if !report.skipped.is_empty() {
        eprintln!(
            "Warning: {} articles could not be fetched: {}",
            report.skipped.len(),
            report.skipped.join(", ")
        );
    }

    if !config.no_open {
        let index_path = config.output.join("index.html");
        if let Err(e) = open::that(&index_path) {
            eprintln!("Warning: Failed to open {}: {}", index_path.display(), e);
        }
    }

    Ok(())
}
