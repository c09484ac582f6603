use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Namespaced item identifier, e.g. `minecraft:wheat`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(value: &str) -> ItemId {
        ItemId(value.to_string())
    }

    /// last namespace segment with underscores rendered as spaces
    pub fn display_name(&self) -> String {
        let name = self.0.rsplit(':').next().unwrap_or(self.0.as_str());
        name.replace('_', " ")
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TradeInput {
    pub filter: ItemId,
    pub count: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TradeOutput {
    pub item: ItemId,
    pub count: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TradeRecord {
    pub input: TradeInput,
    pub output: TradeOutput,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SellingBin {
    pub trades: Vec<TradeRecord>,
}

#[derive(Debug, thiserror::Error)]
pub enum SellingBinError {
    #[error("Unable to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid selling bin at '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SellingBin {
    pub fn from_json(json_data: &str) -> Result<SellingBin, SellingBinError> {
        let deserializer = &mut serde_json::Deserializer::from_str(json_data);
        serde_path_to_error::deserialize(deserializer).map_err(|err| SellingBinError::Parse {
            path: err.path().to_string(),
            source: err.into_inner(),
        })
    }
}

pub fn read_selling_bin(file_path: &Path) -> Result<SellingBin, SellingBinError> {
    let json_data = fs::read_to_string(file_path).map_err(|source| SellingBinError::Io {
        path: file_path.to_path_buf(),
        source,
    })?;

    SellingBin::from_json(&json_data)
}
