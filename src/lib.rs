pub mod cli_args;
pub mod configuration;
pub mod conversion;
pub mod currency;
pub mod report;
pub mod selling_bin;
pub mod trades;
extern crate serde;
