use crate::currency::{CoinBreakdown, CurrencyRates};
use crate::selling_bin::TradeRecord;

pub const PREMIUM_CURRENCY_ITEM: &str = "emerald";
pub const BASE_CURRENCY_ITEM: &str = "coin";

#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedTrade {
    pub input_item: String,
    pub input_count: u64,
    pub output_item: String,
    pub output_count: u64,
    pub trade_ratio: f64,
    pub coins: CoinBreakdown,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TradeError {
    #[error("Converting {emeralds} emeralds into coins overflows")]
    CountOverflow { emeralds: u64 },
}

/// output per input unit; zero-input trades are reported with ratio 0
pub fn trade_ratio(output_count: u64, input_count: u64) -> f64 {
    if input_count == 0 {
        0.0
    } else {
        output_count as f64 / input_count as f64
    }
}

pub fn normalize_trade(trade: &TradeRecord, rates: &CurrencyRates) -> Result<NormalizedTrade, TradeError> {
    let input_item = trade.input.filter.display_name();
    let input_count = trade.input.count;
    let mut output_item = trade.output.item.display_name();
    let mut output_count = trade.output.count;

    if output_item == PREMIUM_CURRENCY_ITEM {
        output_item = BASE_CURRENCY_ITEM.to_string();
        output_count = rates
            .emeralds_to_coins(output_count)
            .ok_or(TradeError::CountOverflow { emeralds: output_count })?;
    }

    Ok(NormalizedTrade {
        input_item,
        input_count,
        output_item,
        output_count,
        trade_ratio: trade_ratio(output_count, input_count),
        coins: rates.decompose(output_count),
    })
}

pub fn normalize_trades(trades: &[TradeRecord], rates: &CurrencyRates) -> Result<Vec<NormalizedTrade>, TradeError> {
    trades.iter().map(|trade| normalize_trade(trade, rates)).collect()
}
