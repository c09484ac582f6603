use crate::cli_args::Cli;
use crate::currency::CurrencyRates;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct ReportConfiguration {
    pub input_dir: PathBuf,
    pub input_file: String,
    pub output_path: PathBuf,
    pub rates: CurrencyRates,
}

impl ReportConfiguration {
    pub fn input_path(&self) -> PathBuf {
        self.input_dir.join(&self.input_file)
    }

    pub fn new(cli: Cli) -> Self {
        match cli {
            Cli {
                input_dir,
                input_file,
                output,
            } => Self {
                input_dir,
                input_file,
                output_path: output,
                rates: CurrencyRates::default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ReportConfiguration;
    use crate::cli_args::Cli;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn defaults_point_at_the_selling_bin_export() {
        let cli = Cli::try_parse_from(["main"]).unwrap();
        let cfg = ReportConfiguration::new(cli);

        assert_eq!(cfg.input_path(), PathBuf::from("zip_archives/sellingbin/selling_bin.json"));
        assert_eq!(cfg.output_path, PathBuf::from("trades_output_sorted.csv"));
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from(["main", "--input-dir", "exports", "--input-file", "bin.json", "--output", "out.csv"]).unwrap();
        let cfg = ReportConfiguration::new(cli);

        assert_eq!(cfg.input_path(), PathBuf::from("exports/bin.json"));
        assert_eq!(cfg.output_path, PathBuf::from("out.csv"));
    }
}
