//! ssl-scan-watch - poll a TLS assessment backend and render scan reports

use clap::Parser;
use console::style;
use ssl_scan_watch::cli::{normalize_domain, Cli, Commands, OutputFormat};
use ssl_scan_watch::commands;
use ssl_scan_watch::config::Settings;
use ssl_scan_watch::error::Result;
use ssl_scan_watch::output::{JsonPresenter, PlainPresenter, Present, TerminalPresenter};
use ssl_scan_watch::session::Phase;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    match run(cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<i32> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from_file(path)?,
        None => Settings::load_default()?,
    };
    cli.apply_overrides(&mut settings);
    settings.validate()?;

    if let Some(command) = &cli.command {
        return match command {
            Commands::Scan(args) => {
                let domain = normalize_domain(&args.domain)?;
                scan(&domain, &settings, &cli).await
            }
            Commands::Download(args) => {
                let domain = normalize_domain(&args.domain)?;
                commands::run_download(&domain, &settings, args.output.as_deref()).await?;
                Ok(0)
            }
        };
    }

    // Default: scan the domain if provided
    if let Some(domain) = &cli.domain {
        let domain = normalize_domain(domain)?;
        return scan(&domain, &settings, &cli).await;
    }

    // No command or domain provided - show usage
    println!("{}", style("ssl-scan-watch").cyan().bold());
    println!("Poll a TLS assessment backend and render the scan report\n");
    println!("Usage: ssl-scan-watch [OPTIONS] [DOMAIN]");
    println!("       ssl-scan-watch <COMMAND>\n");
    println!("Run 'ssl-scan-watch --help' for more information.");
    Ok(0)
}

async fn scan(domain: &str, settings: &Settings, cli: &Cli) -> Result<i32> {
    let mut presenter: Box<dyn Present> = match cli.format {
        OutputFormat::Table => Box::new(TerminalPresenter::new(cli.quiet)),
        OutputFormat::Json => Box::new(JsonPresenter::new(cli.quiet)),
        OutputFormat::Plain => Box::new(PlainPresenter::new(cli.quiet)),
    };

    let phase =
        commands::run_scan(domain, settings, presenter.as_mut(), cli.output.as_deref()).await?;

    // Failures were already presented as advisories; only the exit code is
    // left to signal
    Ok(if phase == Phase::Ready { 0 } else { 1 })
}
