use anyhow::Context;
use calculator::PaymentCalculator;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use configuration::ServerArgs;
use core_types::{LeaseInput, LeaseQuote, LoanInput, LoanQuote};
use std::path::PathBuf;

/// The main entry point for the auto-finance application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if there is one.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut config = configuration::load_config_from(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    // Held until exit so the rolling log file is flushed.
    let _log_guard = configuration::init_tracing(&config.logging)?;

    let calculator = PaymentCalculator::new(config.lease_program.clone(), config.credit.clone())?;

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(args) => {
            config.server.apply(&args);
            web_server::run_server(&config.server.address(), calculator).await?;
        }
        Commands::Finance(args) => {
            let quote = calculator.loan_quote(&args.into())?;
            println!("{}", loan_table(&quote));
        }
        Commands::Lease(args) => {
            let quote = calculator.lease_quote(&args.into())?;
            println!("{}", lease_table(&quote));
        }
        Commands::Apr(args) => {
            let apr = calculator.apr_for_credit_score(args.credit_score);
            println!("{apr}");
        }
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Vehicle loan and lease payment calculator.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file. Missing files fall back to built-in defaults.
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API.
    Serve(ServerArgs),
    /// Price an amortized loan.
    Finance(FinanceArgs),
    /// Price a lease under the configured lease program.
    Lease(LeaseArgs),
    /// Show the APR assumed for a credit score.
    Apr(AprArgs),
}

#[derive(Parser)]
struct FinanceArgs {
    /// The purchase price of the vehicle.
    #[arg(long)]
    vehicle_value: f64,

    /// Annual percentage rate, in percent (e.g., 6.9).
    #[arg(long)]
    apr: f64,

    /// Loan term in months.
    #[arg(long)]
    months: u32,

    #[arg(long, default_value_t = 0.0)]
    downpayment: f64,
}

impl From<FinanceArgs> for LoanInput {
    fn from(args: FinanceArgs) -> Self {
        LoanInput {
            vehicle_value: args.vehicle_value,
            apr: args.apr,
            months: args.months,
            downpayment: args.downpayment,
        }
    }
}

#[derive(Parser)]
struct LeaseArgs {
    /// Manufacturer's suggested retail price.
    #[arg(long)]
    msrp: f64,

    /// Annual percentage rate, in percent. Converted to a money factor.
    #[arg(long)]
    apr: f64,

    /// Lease term in months.
    #[arg(long)]
    term_months: u32,

    #[arg(long, default_value_t = 0.0)]
    downpayment: f64,
}

impl From<LeaseArgs> for LeaseInput {
    fn from(args: LeaseArgs) -> Self {
        LeaseInput {
            msrp: args.msrp,
            apr: args.apr,
            term_months: args.term_months,
            downpayment: args.downpayment,
        }
    }
}

#[derive(Parser)]
struct AprArgs {
    #[arg(long)]
    credit_score: u32,
}

// ==============================================================================
// Output
// ==============================================================================

// Two decimals is presentation only; the JSON API returns unrounded values.
fn money(value: f64) -> String {
    format!("{value:.2}")
}

fn loan_table(quote: &LoanQuote) -> Table {
    let mut table = Table::new();
    table
        .set_header(vec!["Loan", "Amount"])
        .add_row(vec!["Principal".to_string(), money(quote.principal)])
        .add_row(vec!["Term (months)".to_string(), quote.months.to_string()])
        .add_row(vec!["Monthly payment".to_string(), money(quote.monthly_payment)])
        .add_row(vec!["Total of payments".to_string(), money(quote.total_of_payments)])
        .add_row(vec!["Total interest".to_string(), money(quote.total_interest)])
        .add_row(vec!["Total cost".to_string(), money(quote.total_cost)]);
    table
}

fn lease_table(quote: &LeaseQuote) -> Table {
    let mut table = Table::new();
    table
        .set_header(vec!["Lease", "Amount"])
        .add_row(vec!["Capitalized cost".to_string(), money(quote.capitalized_cost)])
        .add_row(vec!["Adjusted cap cost".to_string(), money(quote.adjusted_cap_cost)])
        .add_row(vec!["Residual value".to_string(), money(quote.residual_value)])
        .add_row(vec!["Money factor".to_string(), format!("{:.5}", quote.money_factor)])
        .add_row(vec!["Depreciation".to_string(), money(quote.depreciation)])
        .add_row(vec!["Finance charge".to_string(), money(quote.finance_charge)])
        .add_row(vec!["Tax".to_string(), money(quote.tax)])
        .add_row(vec!["Monthly payment".to_string(), money(quote.monthly_payment)])
        .add_row(vec!["Term (months)".to_string(), quote.term_months.to_string()])
        .add_row(vec!["Total cost".to_string(), money(quote.total_cost)]);
    table
}
