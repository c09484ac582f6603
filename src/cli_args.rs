use clap::Parser;
use std::path::PathBuf;

/// converts a selling bin export into a sorted trade report
#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// directory containing the selling bin export
    #[arg(long, env("SELLINGBIN_INPUT_DIR"), default_value = "zip_archives/sellingbin")]
    pub input_dir: PathBuf,
    /// file name of the selling bin export inside input_dir
    #[arg(long, env("SELLINGBIN_INPUT_FILE"), default_value = "selling_bin.json")]
    pub input_file: String,
    /// where the csv report gets written
    #[arg(long, env("SELLINGBIN_OUTPUT"), default_value = "trades_output_sorted.csv")]
    pub output: PathBuf,
}
