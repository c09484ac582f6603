use crate::configuration::ReportConfiguration;
use crate::report::{sort_by_trade_ratio, write_report_file};
use crate::selling_bin::read_selling_bin;
use crate::trades::normalize_trades;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{event, Level};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// nothing was read or written
    InputMissing { input_file: String, input_path: PathBuf },
    Written {
        input_path: PathBuf,
        output_path: PathBuf,
        number_of_trades: usize,
    },
}

impl ConversionOutcome {
    /// The line shown to the user once the run is over.
    pub fn console_message(&self) -> String {
        match self {
            ConversionOutcome::InputMissing { input_file, .. } => format!("{} not found in the directory.", input_file),
            ConversionOutcome::Written {
                input_path, output_path, ..
            } => format!(
                "Data written to {} successfully from {}!",
                output_path.display(),
                input_path.display()
            ),
        }
    }
}

pub fn convert_selling_bin(cfg: &ReportConfiguration) -> Result<ConversionOutcome> {
    let input_path = cfg.input_path();

    if !input_path.is_file() {
        event!(Level::WARN, "No selling bin found at {}", input_path.display());
        return Ok(ConversionOutcome::InputMissing {
            input_file: cfg.input_file.clone(),
            input_path,
        });
    }

    event!(Level::INFO, "Reading selling bin from {}", input_path.display());
    let selling_bin = read_selling_bin(&input_path).with_context(|| format!("Failed to load {}", input_path.display()))?;
    tracing::debug!("Parsed {} trades", selling_bin.trades.len());

    let normalized = normalize_trades(&selling_bin.trades, &cfg.rates).with_context(|| format!("Failed to normalize trades of {}", input_path.display()))?;
    let sorted = sort_by_trade_ratio(normalized);

    write_report_file(&cfg.output_path, &sorted).with_context(|| format!("Failed to write report to {}", cfg.output_path.display()))?;
    event!(
        Level::INFO,
        "Wrote {} trades to {}",
        sorted.len(),
        cfg.output_path.display()
    );

    Ok(ConversionOutcome::Written {
        input_path,
        output_path: cfg.output_path.clone(),
        number_of_trades: sorted.len(),
    })
}
