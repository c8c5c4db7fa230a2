use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use pricing_core::{ChargeCalculator, CheckoutQuoter, CurrencyCode, PricingConfig, TaxComputation};
use pricing_data::{InMemoryCatalog, load_pricing_config};
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Compute GST-inclusive enrollment charges for courses.
///
/// Prices come either from a course catalog CSV with the columns
/// `course_id,title,base_price` or from a single `--price`.
#[derive(Debug, Parser)]
#[command(name = "course-quote")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the course catalog CSV file
    #[arg(short = 'f', long, required_unless_present = "price")]
    catalog: Option<PathBuf>,

    /// TOML file with tax_rate_percent, currency_code and subunit_factor
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Quote only this course id
    #[arg(long, conflicts_with = "price")]
    course: Option<String>,

    /// Quote an ad-hoc listed price instead of catalog courses
    #[arg(short, long)]
    price: Option<Decimal>,

    /// Override the configured tax rate percentage
    #[arg(long)]
    tax_rate: Option<Decimal>,

    /// Override the configured ISO 4217 currency code
    #[arg(long)]
    currency: Option<CurrencyCode>,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the config file (or defaults), then applies the command-line
/// overrides and validates the result.
fn resolve_config(args: &Args) -> Result<PricingConfig> {
    let mut config = match &args.config {
        Some(path) => load_pricing_config(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => PricingConfig::default(),
    };
    if let Some(rate) = args.tax_rate {
        config.tax_rate_percent = rate;
    }
    if let Some(currency) = &args.currency {
        config.currency_code = currency.clone();
    }
    config.validate().context("Invalid pricing configuration")?;
    Ok(config)
}

fn print_quote(
    label: &str,
    computation: &TaxComputation,
) {
    println!(
        "{label}: base {} + GST {} = {} {} (gateway amount {})",
        computation.base_amount,
        computation.gst_amount,
        computation.total_amount,
        computation.currency,
        computation.gateway_amount,
    );
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    let calculator = ChargeCalculator::new(resolve_config(&args)?);
    debug!(config = ?calculator.config(), "using pricing configuration");

    if let Some(price) = args.price {
        let computation = calculator
            .compute_charge_amount(price)
            .with_context(|| format!("Failed to price {price}"))?;
        print_quote("price", &computation);
        return Ok(());
    }

    let Some(catalog_path) = &args.catalog else {
        bail!("either --catalog or --price is required");
    };
    let file = File::open(catalog_path)
        .with_context(|| format!("Failed to open: {}", catalog_path.display()))?;
    let catalog = InMemoryCatalog::from_csv(file)
        .with_context(|| format!("Failed to parse CSV: {}", catalog_path.display()))?;

    let quoter = CheckoutQuoter::new(catalog, calculator);
    debug!(courses = quoter.catalog().len(), "loaded catalog");
    let quotes = match &args.course {
        Some(id) => vec![
            quoter
                .quote_course(id)
                .await
                .with_context(|| format!("Failed to quote course {id}"))?,
        ],
        None => quoter
            .quote_all()
            .await
            .context("Failed to quote catalog")?,
    };

    for quote in &quotes {
        let label = format!("{} ({})", quote.course.id, quote.course.title);
        print_quote(&label, &quote.computation);
    }

    Ok(())
}
