use anyhow::Result;
use clap::Parser;
use tracing::{event, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sellingbin_report::cli_args::Cli;
use sellingbin_report::configuration::ReportConfiguration;
use sellingbin_report::conversion::convert_selling_bin;

fn main() -> Result<()> {
    let args = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cfg = ReportConfiguration::new(args);
    event!(Level::DEBUG, "Running with {:?}", cfg);

    let outcome = convert_selling_bin(&cfg)?;
    println!("{}", outcome.console_message());

    Ok(())
}
