use crate::trades::NormalizedTrade;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::cmp::Reverse;
use std::io;
use std::path::Path;
use thousands::Separable;

/// One csv line; all numbers are pre-formatted for display.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ReportRow {
    #[serde(rename = "Input Item")]
    pub input_item: String,
    #[serde(rename = "Input Count")]
    pub input_count: String,
    #[serde(rename = "Output Item")]
    pub output_item: String,
    #[serde(rename = "Output Count")]
    pub output_count: String,
    #[serde(rename = "Trade Ratio")]
    pub trade_ratio: String,
    #[serde(rename = "Gold Coins")]
    pub gold_coins: String,
    #[serde(rename = "Iron Coins")]
    pub iron_coins: String,
    #[serde(rename = "Copper Coins")]
    pub copper_coins: String,
    #[serde(rename = "Coins")]
    pub coins: String,
}

impl From<&NormalizedTrade> for ReportRow {
    fn from(trade: &NormalizedTrade) -> Self {
        ReportRow {
            input_item: trade.input_item.clone(),
            input_count: trade.input_count.separate_with_commas(),
            output_item: trade.output_item.clone(),
            output_count: trade.output_count.separate_with_commas(),
            trade_ratio: format!("{:.4}", trade.trade_ratio),
            gold_coins: trade.coins.gold.separate_with_commas(),
            iron_coins: trade.coins.iron.separate_with_commas(),
            copper_coins: trade.coins.copper.separate_with_commas(),
            coins: trade.coins.coin.separate_with_commas(),
        }
    }
}

/// Best ratio first. Stable, so equal ratios keep their original order.
pub fn sort_by_trade_ratio(trades: Vec<NormalizedTrade>) -> Vec<NormalizedTrade> {
    trades.into_iter().sorted_by_key(|t| Reverse(OrderedFloat(t.trade_ratio))).collect_vec()
}

pub fn write_report<W: io::Write>(writer: W, trades: &[NormalizedTrade]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(true)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    for trade in trades {
        csv_writer.serialize(ReportRow::from(trade))?;
    }

    // serialize only emits the header together with the first row
    if trades.is_empty() {
        csv_writer.write_record(REPORT_HEADER)?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn write_report_file(file_path: &Path, trades: &[NormalizedTrade]) -> Result<(), csv::Error> {
    let file = std::fs::File::create(file_path)?;
    write_report(io::BufWriter::new(file), trades)
}

pub const REPORT_HEADER: [&str; 9] = [
    "Input Item",
    "Input Count",
    "Output Item",
    "Output Count",
    "Trade Ratio",
    "Gold Coins",
    "Iron Coins",
    "Copper Coins",
    "Coins",
];

#[cfg(test)]
mod tests {
    use super::{sort_by_trade_ratio, write_report, ReportRow, REPORT_HEADER};
    use crate::currency::CurrencyRates;
    use crate::trades::NormalizedTrade;
    use itertools::Itertools;

    fn normalized(name: &str, input_count: u64, output_count: u64, trade_ratio: f64) -> NormalizedTrade {
        NormalizedTrade {
            input_item: name.to_string(),
            input_count,
            output_item: "coin".to_string(),
            output_count,
            trade_ratio,
            coins: CurrencyRates::default().decompose(output_count),
        }
    }

    fn render(trades: &[NormalizedTrade]) -> String {
        let mut buffer = Vec::new();
        write_report(&mut buffer, trades).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn sorts_descending_and_keeps_ties_in_input_order() {
        let trades = vec![
            normalized("a", 1, 1, 1.0),
            normalized("b", 1, 1, 3.0),
            normalized("c", 1, 1, 1.0),
            normalized("d", 1, 1, 0.0),
            normalized("e", 1, 1, 3.0),
        ];

        let sorted = sort_by_trade_ratio(trades);

        assert_eq!(sorted.iter().map(|t| t.input_item.as_str()).collect_vec(), vec!["b", "e", "a", "c", "d"]);
        assert!(sorted.iter().tuple_windows().all(|(a, b)| a.trade_ratio >= b.trade_ratio));
    }

    #[test]
    fn row_formats_numbers_with_grouping_and_four_decimals() {
        let row = ReportRow::from(&normalized("wheat", 1_234_567, 100, 1234.56789));

        assert_eq!(row.input_count, "1,234,567");
        assert_eq!(row.output_count, "100");
        assert_eq!(row.trade_ratio, "1234.5679");
        assert_eq!(row.gold_coins, "1");
        assert_eq!(row.iron_coins, "2");
        assert_eq!(row.copper_coins, "1");
        assert_eq!(row.coins, "0");
    }

    #[test]
    fn writes_header_and_quotes_grouped_numbers() {
        let csv = render(&[normalized("wheat", 20, 4, 0.2), normalized("dirt", 1_000, 8_192, 8.192)]);

        assert_eq!(
            csv,
            "Input Item,Input Count,Output Item,Output Count,Trade Ratio,Gold Coins,Iron Coins,Copper Coins,Coins\r\n\
             wheat,20,coin,4,0.2000,0,0,1,0\r\n\
             dirt,\"1,000\",coin,\"8,192\",8.1920,128,0,0,0\r\n"
        );
    }

    #[test]
    fn empty_report_still_has_header() {
        assert_eq!(render(&[]), format!("{}\r\n", REPORT_HEADER.join(",")));
    }
}
