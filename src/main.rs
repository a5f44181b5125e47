use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use solid_payments::application::checkout::{build_processor, settle};
use solid_payments::domain::order::{LineItem, Order, PaymentMethod};
use solid_payments::domain::ports::AuthorizerHandle;
use solid_payments::infrastructure::authorizers::{GoogleAuthorizer, SmsAuthorizer};
use solid_payments::interfaces::csv::line_item_reader::LineItemReader;
use solid_payments::interfaces::csv::receipt_writer::{ReceiptFormat, ReceiptWriter};
use std::io;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AuthorizerKind {
    Sms,
    Google,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Line item as NAME:QTY:PRICE. Repeatable.
    #[arg(long = "item")]
    items: Vec<LineItem>,

    /// Also read `item,quantity,price` CSV rows from stdin.
    #[arg(long)]
    stdin: bool,

    /// Payment method: debit, credit or paypal.
    #[arg(long)]
    method: PaymentMethod,

    /// Security code for cards, email address for PayPal.
    #[arg(long)]
    credential: String,

    /// Second-factor authorizer. Required for debit and paypal.
    #[arg(long, value_enum)]
    authorizer: Option<AuthorizerKind>,

    /// Code to verify with the authorizer before paying.
    #[arg(long)]
    verify_code: Option<String>,

    /// Receipt output format.
    #[arg(long, value_enum, default_value_t = ReceiptFormat::Csv)]
    format: ReceiptFormat,
}

fn authorizer_for(kind: AuthorizerKind) -> AuthorizerHandle {
    match kind {
        AuthorizerKind::Sms => Arc::new(SmsAuthorizer::new()),
        AuthorizerKind::Google => Arc::new(GoogleAuthorizer::new()),
    }
}

fn main() -> Result<()> {
    // stdout carries the receipt, diagnostics go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut order: Order = cli.items.into_iter().collect();
    if cli.stdin {
        let reader = LineItemReader::new(io::stdin().lock());
        for line_item in reader.line_items() {
            match line_item {
                Ok(line_item) => order.add_line_item(line_item),
                Err(e) => tracing::warn!(error = %e, "Skipping malformed line item"),
            }
        }
    }

    let authorizer = cli.authorizer.map(authorizer_for);
    if let Some(code) = &cli.verify_code {
        match &authorizer {
            Some(authorizer) => authorizer.verify_code(code),
            None => tracing::warn!("--verify-code given without --authorizer, ignoring it"),
        }
    }

    let processor = build_processor(cli.method, cli.credential, authorizer).into_diagnostic()?;
    let receipt = settle(processor.as_ref(), &mut order).into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = ReceiptWriter::new(stdout.lock(), cli.format);
    writer.write_receipts(&[receipt]).into_diagnostic()?;

    Ok(())
}
