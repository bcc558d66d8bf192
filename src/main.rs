use analytics::{AnalyticsEngine, estimate_import_cost, freight_cost, import_cost_by_regime};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use configuration::settings::Config;
use configuration::{LoggingSettings, TariffRegime, load_config};
use core_types::DailyObservation;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// The main entry point for the sugar import dashboard CLI.
fn main() -> Result<()> {
    // Environment overrides may live in a .env file; it is optional.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    let _guard = init_tracing(&config.logging)?;
    tracing::debug!(?config, "Configuration loaded.");

    // Execute the appropriate command
    match cli.command {
        Commands::Market(args) => handle_market(args, &config),
        Commands::Arbitrage(args) => handle_arbitrage(args, &config),
        Commands::Macro(args) => handle_macro(args, &config),
        Commands::ImportCost(args) => handle_import_cost(args, &config),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Sugar import dashboard: market overview, arbitrage window and macro drivers.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (defaults to ./config.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the headline metric cards for the latest trading day.
    Market(InputArgs),
    /// Show the daily import arbitrage profit and the current window.
    Arbitrage(InputArgs),
    /// Show how sugar correlates with the USD/CNY rate and the BDI.
    Macro(InputArgs),
    /// Estimate the landed cost of an ICE raw sugar cargo.
    ImportCost(ImportCostArgs),
}

#[derive(Parser)]
struct InputArgs {
    /// JSON array of daily records as returned by `/api/market/daily`.
    /// Reads stdin when omitted or `-`.
    #[arg(long, short)]
    input: Option<PathBuf>,
}

#[derive(Parser)]
struct ImportCostArgs {
    /// ICE No.11 raw sugar price in US cents/lb.
    #[arg(long)]
    ice_price: f64,

    /// USD/CNY exchange rate.
    #[arg(long)]
    usd_cny: f64,

    /// Baltic Dry Index.
    #[arg(long)]
    bdi: f64,

    /// Explicit tariff rate (e.g. 0.15). Takes precedence over --regime.
    #[arg(long, conflicts_with = "regime")]
    tariff: Option<f64>,

    /// Tariff regime whose configured rate to apply.
    #[arg(long, value_enum)]
    regime: Option<TariffRegime>,
}

// ==============================================================================
// Setup
// ==============================================================================

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
///
/// The returned guard must be held until exit so buffered file output is flushed.
fn init_tracing(settings: &LoggingSettings) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&settings.level))?;

    match &settings.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "sugar-monitor.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

/// Reads the upstream payload and keeps the newest `history_days` records,
/// newest first.
fn load_history(input: Option<&Path>, config: &Config) -> Result<Vec<DailyObservation>> {
    let raw = match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read observations from stdin")?;
            buffer
        }
    };

    let mut history: Vec<DailyObservation> =
        serde_json::from_str(&raw).context("Failed to decode daily observations")?;
    history.sort_by(|a, b| b.record_date.cmp(&a.record_date));
    history.truncate(config.report.history_days);

    tracing::info!(records = history.len(), "Loaded daily observations.");
    Ok(history)
}

// ==============================================================================
// Command Handlers
// ==============================================================================

fn handle_market(args: InputArgs, config: &Config) -> Result<()> {
    let history = load_history(args.input.as_deref(), config)?;
    let cards = AnalyticsEngine::new().market_overview(&history);

    if cards.is_empty() {
        println!("No market data available.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Metric", "Value", "Change"]);
    for card in cards {
        let decimals = card.decimals.unwrap_or(2) as usize;
        let mut value = format!("{:.*}", decimals, card.value);
        if let Some(suffix) = &card.suffix {
            value.push(' ');
            value.push_str(suffix);
        }
        let change = card
            .change
            .map(|c| format!("{c:+.2}%"))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![card.title, value, change]);
    }
    println!("{table}");
    Ok(())
}

fn handle_arbitrage(args: InputArgs, config: &Config) -> Result<()> {
    let history = load_history(args.input.as_deref(), config)?;
    let report = AnalyticsEngine::new().arbitrage(&history);

    let mut table = Table::new();
    table.set_header(vec!["Date", "Domestic", "Import cost", "Profit", "Window"]);
    for day in &report.days {
        table.add_row(vec![
            short_date(day.date),
            format!("{:.2}", day.domestic_price),
            format!("{:.2}", day.import_cost),
            format!("{:+.2}", day.status.profit),
            format!("{} {}", day.status.icon(), day.status.label()),
        ]);
    }
    println!("{table}");

    match report.latest {
        Some(latest) => println!("Latest: {} {} ({:+.2} 元/吨)", latest.icon(), latest.label(), latest.profit),
        None => println!("Latest: no data"),
    }
    let dist = report.distribution;
    println!(
        "Profitable days: {}  Loss days: {}  Profitable ratio: {:.1}%",
        dist.profitable_days, dist.loss_days, dist.profitable_ratio
    );
    Ok(())
}

fn handle_macro(args: InputArgs, config: &Config) -> Result<()> {
    let history = load_history(args.input.as_deref(), config)?;
    let report = AnalyticsEngine::new().macro_drivers(&history);

    let mut table = Table::new();
    table.set_header(vec!["Driver", "r", "Strength", "Description", "Slope", "Intercept", "R²"]);
    for driver in &report.drivers {
        table.add_row(vec![
            driver.driver.clone(),
            format!("{:.3}", driver.correlation.coefficient),
            driver.correlation.strength.label().to_string(),
            driver.correlation.description.clone(),
            format!("{:.4}", driver.regression.slope),
            format!("{:.2}", driver.regression.intercept),
            format!("{:.3}", driver.regression.r_squared),
        ]);
    }
    println!("{table}");

    if let (Some(first), Some(last)) = (report.dates.first(), report.dates.last()) {
        println!(
            "Rebased {} → {}: sugar {:.1}, USD/CNY {:.1}, BDI {:.1}",
            short_date(*first),
            short_date(*last),
            report.normalized_sugar.last().copied().unwrap_or(100.0),
            report.normalized_usd_cny.last().copied().unwrap_or(100.0),
            report.normalized_bdi.last().copied().unwrap_or(100.0),
        );
    }
    Ok(())
}

fn handle_import_cost(args: ImportCostArgs, config: &Config) -> Result<()> {
    let tariff_rate = match (args.tariff, args.regime) {
        (Some(rate), _) => rate,
        (None, Some(regime)) => config.tariff.rate_for(regime),
        (None, None) => config.tariff.rate_for(config.tariff.default_regime),
    };

    let cost = estimate_import_cost(args.ice_price, args.usd_cny, args.bdi, tariff_rate);
    let regimes = import_cost_by_regime(
        args.ice_price,
        args.usd_cny,
        args.bdi,
        config.tariff.preferential_rate,
        config.tariff.standard_rate,
    );
    tracing::info!(tariff_rate, cost, "Import cost estimated.");

    let mut table = Table::new();
    table.set_header(vec!["Item", "元/吨"]);
    table.add_row(vec![format!("Estimate @ {:.0}% tariff", tariff_rate * 100.0), format!("{cost:.2}")]);
    table.add_row(vec!["Freight".to_string(), format!("{:.2}", freight_cost(args.bdi))]);
    table.add_row(vec!["In-quota".to_string(), format!("{:.2}", regimes.preferential)]);
    table.add_row(vec!["Out-of-quota".to_string(), format!("{:.2}", regimes.standard)]);
    table.add_row(vec!["Quota premium".to_string(), format!("{:.2}", regimes.quota_premium())]);
    println!("{table}");
    Ok(())
}

fn short_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
